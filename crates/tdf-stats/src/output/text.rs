//! Console text report.
//!
//! ```text
//! JaneSmith                     : 1.5
//!
//! The median speed at the Tour de France is 36.25
//!
//! The median of medians at the Tour de France is 36.25
//! ```

use super::schema::Report;
use crate::utils::config::NAME_COLUMN_WIDTH;

/// Render a real number with a fractional part always present
///
/// `2.0`, `1.5`, `36.25`
pub fn format_real(value: f64) -> String {
    format!("{:?}", value)
}

/// Render the full console report
///
/// **Public** - rendered in one piece so nothing is printed if a
/// statistic fails
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    for athlete in &report.athletes {
        out.push_str(&format!(
            "{:<width$}: {}\n",
            athlete.name,
            format_real(athlete.best_gain),
            width = NAME_COLUMN_WIDTH
        ));
    }

    out.push_str(&format!(
        "\nThe median speed at the Tour de France is {}\n",
        format_real(report.median_speed)
    ));
    out.push_str(&format!(
        "\nThe median of medians at the Tour de France is {}\n",
        format_real(report.median_of_medians)
    ));

    out
}
