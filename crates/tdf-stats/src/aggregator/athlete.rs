//! A single rider and their year-by-year average speeds.

use super::metrics::median;
use crate::utils::config::{MAX_PLAUSIBLE_YEAR, MIN_PLAUSIBLE_YEAR};
use crate::utils::error::StatsError;
use log::warn;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a rider
///
/// Holds both name parts, but equality, hashing and ordering are defined over the
/// plain concatenation `first ++ last`. There is no separator, so
/// `("Jo", "hnson")` and `("John", "son")` are the same key. Known defect,
/// kept for compatibility with existing result sets.
#[derive(Debug, Clone)]
pub struct AthleteKey {
    first: String,
    last: String,
}

impl AthleteKey {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.first.bytes().chain(self.last.bytes())
    }

    /// True when both name parts match exactly, not just the concatenation
    pub fn same_parts(&self, other: &AthleteKey) -> bool {
        self.first == other.first && self.last == other.last
    }
}

impl PartialEq for AthleteKey {
    fn eq(&self, other: &Self) -> bool {
        self.first.len() + self.last.len() == other.first.len() + other.last.len()
            && self.bytes().eq(other.bytes())
    }
}

impl Eq for AthleteKey {}

impl Hash for AthleteKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.bytes() {
            state.write_u8(byte);
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for AthleteKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AthleteKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes().cmp(other.bytes())
    }
}

impl fmt::Display for AthleteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.last)
    }
}

/// One rider's performances, keyed by competition year
#[derive(Debug, Clone)]
pub struct Athlete {
    key: AthleteKey,
    speeds: BTreeMap<i32, f64>,
}

impl Athlete {
    /// Create a rider with no recorded performances
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            key: AthleteKey::new(first_name, last_name),
            speeds: BTreeMap::new(),
        }
    }

    pub fn key(&self) -> &AthleteKey {
        &self.key
    }

    pub fn first_name(&self) -> &str {
        self.key.first()
    }

    pub fn last_name(&self) -> &str {
        self.key.last()
    }

    /// Name as shown in reports: the identity key, `first ++ last`
    pub fn display_name(&self) -> String {
        self.key.to_string()
    }

    /// Record the average speed for `year`
    ///
    /// A second speed for the same year replaces the first.
    ///
    /// # Errors
    /// * `StatsError::InvalidInput` - speed is not a positive finite number,
    ///   or the year is outside the plausible range
    pub fn record_performance(&mut self, year: i32, speed: f64) -> Result<(), StatsError> {
        if !(MIN_PLAUSIBLE_YEAR..=MAX_PLAUSIBLE_YEAR).contains(&year) {
            return Err(StatsError::InvalidInput(format!(
                "implausible year {} for {}",
                year,
                self.display_name()
            )));
        }

        if !speed.is_finite() || speed <= 0.0 {
            return Err(StatsError::InvalidInput(format!(
                "speed must be positive, got {} for {} in {}",
                speed,
                self.display_name(),
                year
            )));
        }

        if let Some(previous) = self.speeds.insert(year, speed) {
            warn!(
                "{} has two results for {}: {} replaced by {}",
                self.display_name(),
                year,
                previous,
                speed
            );
        }

        Ok(())
    }

    pub fn speed_for_year(&self, year: i32) -> Option<f64> {
        self.speeds.get(&year).copied()
    }

    /// Recorded years, ascending
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.speeds.keys().copied()
    }

    /// `(year, speed)` pairs in ascending year order
    pub fn performances(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.speeds.iter().map(|(year, speed)| (*year, *speed))
    }

    pub fn performance_count(&self) -> usize {
        self.speeds.len()
    }

    /// Median over every recorded year
    ///
    /// # Errors
    /// * `StatsError::InsufficientData` - nothing recorded yet
    pub fn median_speed(&self) -> Result<f64, StatsError> {
        median(self.speeds.values().copied().collect()).map_err(|_| {
            StatsError::InsufficientData(format!("{} has no recorded speeds", self.display_name()))
        })
    }

    /// Largest speed increase between consecutive recorded years
    ///
    /// Gaps between years are allowed. Starts from 0, so a rider with a
    /// single year, or one who never got faster, has a best gain of 0.
    pub fn best_gain(&self) -> f64 {
        self.speeds
            .values()
            .zip(self.speeds.values().skip(1))
            .map(|(earlier, later)| later - earlier)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete_with(speeds: &[(i32, f64)]) -> Athlete {
        let mut athlete = Athlete::new("Jane", "Smith");
        for (year, speed) in speeds {
            athlete.record_performance(*year, *speed).unwrap();
        }
        athlete
    }

    #[test]
    fn test_best_gain_single_year() {
        assert_eq!(athlete_with(&[(2006, 35.5)]).best_gain(), 0.0);
        assert_eq!(Athlete::new("No", "Data").best_gain(), 0.0);
    }

    #[test]
    fn test_best_gain_with_gap() {
        let athlete = athlete_with(&[(2005, 30.0), (2007, 32.0), (2008, 31.0)]);
        assert_eq!(athlete.best_gain(), 2.0);
    }

    #[test]
    fn test_best_gain_uses_year_order_not_insertion_order() {
        let athlete = athlete_with(&[(2008, 31.0), (2005, 30.0), (2007, 32.0)]);
        assert_eq!(athlete.best_gain(), 2.0);
    }

    #[test]
    fn test_best_gain_only_slower() {
        let athlete = athlete_with(&[(2005, 40.0), (2006, 39.0)]);
        assert_eq!(athlete.best_gain(), 0.0);
    }

    #[test]
    fn test_median_speed() {
        let athlete = athlete_with(&[(2006, 35.5), (2008, 37.0)]);
        assert_eq!(athlete.median_speed().unwrap(), 36.25);
        assert_eq!(athlete.best_gain(), 1.5);
    }

    #[test]
    fn test_median_speed_empty() {
        let athlete = Athlete::new("No", "Data");
        assert!(matches!(
            athlete.median_speed(),
            Err(StatsError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_speed_for_year_absent() {
        let athlete = athlete_with(&[(2006, 35.5)]);
        assert_eq!(athlete.speed_for_year(2006), Some(35.5));
        assert_eq!(athlete.speed_for_year(2007), None);
    }

    #[test]
    fn test_duplicate_year_last_write_wins() {
        let athlete = athlete_with(&[(2006, 35.5), (2006, 36.0)]);
        assert_eq!(athlete.performance_count(), 1);
        assert_eq!(athlete.speed_for_year(2006), Some(36.0));
    }

    #[test]
    fn test_rejects_bad_speed() {
        let mut athlete = Athlete::new("Jane", "Smith");
        assert!(athlete.record_performance(2006, 0.0).is_err());
        assert!(athlete.record_performance(2006, -3.0).is_err());
        assert!(athlete.record_performance(2006, f64::NAN).is_err());
        assert!(athlete.record_performance(2006, f64::INFINITY).is_err());
        assert_eq!(athlete.performance_count(), 0);
    }

    #[test]
    fn test_rejects_implausible_year() {
        let mut athlete = Athlete::new("Jane", "Smith");
        assert!(athlete.record_performance(6, 35.0).is_err());
        assert!(athlete.record_performance(20060, 35.0).is_err());
    }

    #[test]
    fn test_display_name_verbatim() {
        let athlete = Athlete::new(" Jane", "smith ");
        assert_eq!(athlete.display_name(), " Janesmith ");
    }

    #[test]
    fn test_display_name_matches_key() {
        let mut athlete = Athlete::new("Jane", "Smith");
        athlete.record_performance(2006, 35.5).unwrap();
        assert_eq!(athlete.display_name(), "JaneSmith");
        assert_eq!(athlete.display_name(), athlete.key().to_string());
    }

    #[test]
    fn test_key_hash_follows_concatenation() {
        use std::collections::HashSet;

        let mut keys = HashSet::new();
        keys.insert(AthleteKey::new("Jo", "hnson"));
        assert!(keys.contains(&AthleteKey::new("John", "son")));
        assert!(keys.contains(&AthleteKey::new("", "Johnson")));
        assert!(!keys.contains(&AthleteKey::new("Jo", "Hnson")));
    }

    #[test]
    fn test_key_concatenation_collides() {
        let a = AthleteKey::new("Jo", "hnson");
        let b = AthleteKey::new("John", "son");
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert!(!a.same_parts(&b));
        // No case folding, so this pair stays apart
        assert_ne!(AthleteKey::new("Jo", "Hnson"), b);
    }

    #[test]
    fn test_key_is_case_sensitive() {
        assert_ne!(AthleteKey::new("jane", "smith"), AthleteKey::new("Jane", "Smith"));
    }

    #[test]
    fn test_key_orders_by_concatenation() {
        let mut keys = vec![
            AthleteKey::new("Jan", "Ullrich"),
            AthleteKey::new("Alberto", "Contador"),
            AthleteKey::new("Jan", "Bakker"),
        ];
        keys.sort();
        let names: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["AlbertoContador", "JanBakker", "JanUllrich"]);
    }
}
