//! Order statistics shared by riders and the whole field.

use crate::utils::error::StatsError;

/// Median of an ascending slice
///
/// **Public** - the slice must already be sorted
///
/// Odd length: the middle element. Even length: mean of the two middle
/// elements.
///
/// # Errors
/// * `StatsError::InsufficientData` - slice is empty
pub fn median_sorted(sorted: &[f64]) -> Result<f64, StatsError> {
    if sorted.is_empty() {
        return Err(StatsError::InsufficientData(
            "median of an empty collection".to_string(),
        ));
    }

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Sort `values` ascending and take the median
pub fn median(mut values: Vec<f64>) -> Result<f64, StatsError> {
    values.sort_by(|a, b| a.total_cmp(b));
    median_sorted(&values)
}
