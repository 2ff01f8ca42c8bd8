pub mod converter;
pub mod date;
pub mod etl;
pub mod outcome;
pub mod pipeline;

pub use crate::domain::model::{FileReport, InputRow, OutputRow, RunSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
