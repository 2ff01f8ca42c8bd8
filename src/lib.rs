pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::storage::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::{etl::EtlEngine, pipeline::FilePipeline};
pub use domain::model::{FileReport, InputRow, Outcome, OutputRow, RunSummary};
pub use utils::error::{ConvertError, Result};
