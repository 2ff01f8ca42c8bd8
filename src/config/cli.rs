use crate::config::{default_candidates, DEFAULT_BASE_DIR, DEFAULT_INPUT_MARKER, DEFAULT_OUTPUT_MARKER};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_provider, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "carom-convert")]
#[command(about = "Convert Dutch season tables into the CaromStats CSV format")]
pub struct CliConfig {
    /// Directory holding the season tables; output is written next to them
    #[arg(long, default_value = DEFAULT_BASE_DIR)]
    pub base_dir: String,

    /// Season tables to look for, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = default_candidates())]
    pub candidates: Vec<String>,

    /// File name token replaced to form the output name
    #[arg(long, default_value = DEFAULT_INPUT_MARKER)]
    pub input_marker: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_MARKER)]
    pub output_marker: String,

    /// TOML configuration file; replaces the directory, candidate and marker options
    #[arg(long)]
    pub config: Option<String>,

    /// Write a JSON report of the run to this file
    #[arg(long)]
    pub report_json: Option<String>,

    #[arg(long, help = "Parse and validate without writing any output")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn parse_args() -> Self {
        Self::parse().with_resolved_candidates()
    }

    pub fn parse_args_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(args).with_resolved_candidates()
    }

    /// Drops blank entries (`--candidates ""`, `a.csv,,b.csv`); an empty list
    /// falls back to the default seasons.
    fn with_resolved_candidates(mut self) -> Self {
        self.candidates.retain(|c| !c.trim().is_empty());
        if self.candidates.is_empty() {
            self.candidates = default_candidates();
        }
        self
    }
}

impl ConfigProvider for CliConfig {
    fn base_dir(&self) -> &str {
        &self.base_dir
    }

    fn candidates(&self) -> &[String] {
        &self.candidates
    }

    fn input_marker(&self) -> &str {
        &self.input_marker
    }

    fn output_marker(&self) -> &str {
        &self.output_marker
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)?;
        if let Some(report) = &self.report_json {
            validate_path("report_json", report)?;
        }
        Ok(())
    }
}
