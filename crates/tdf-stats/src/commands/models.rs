use crate::parser::MalformedPolicy;
use crate::utils::config::DEFAULT_INPUT_FILE;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Results file to read
    pub input: PathBuf,

    /// Optional TOML file holding the year range
    pub config: Option<PathBuf>,

    /// First competition year, overrides the config file
    pub first_year: Option<i32>,

    /// Last competition year, overrides the config file
    pub last_year: Option<i32>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Fail or skip on malformed lines
    pub policy: MalformedPolicy,

    /// Print the text report to stdout
    pub print: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            config: None,
            first_year: None,
            last_year: None,
            output_json: None,
            policy: MalformedPolicy::Fail,
            print: true,
        }
    }
}
