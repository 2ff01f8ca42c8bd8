use crate::domain::model::{InputRow, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    /// Human-readable location of `path`, used in status lines.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider {
    fn base_dir(&self) -> &str;
    fn candidates(&self) -> &[String];
    fn input_marker(&self) -> &str;
    fn output_marker(&self) -> &str;
}

pub trait Pipeline {
    fn candidates(&self) -> &[String];
    fn output_name(&self, candidate: &str) -> String;
    /// `Ok(None)` when the candidate file does not exist.
    fn extract(&self, candidate: &str) -> Result<Option<Vec<InputRow>>>;
    fn transform(&self, rows: Vec<InputRow>) -> TransformResult;
    /// Writes the rows and returns where they went.
    fn load(&self, output_name: &str, result: &TransformResult) -> Result<String>;
    fn location(&self, name: &str) -> String;
}
