use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::CsvError(_) | ConvertError::SerializationError(_) => ErrorCategory::Data,
            ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 讀不到檔案或寫不出檔案，整個批次都無法繼續
            ConvertError::IoError(_) => ErrorSeverity::Critical,
            ConvertError::CsvError(_) => ErrorSeverity::High,
            // 只影響 JSON 報表，轉檔結果已經寫出
            ConvertError::SerializationError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError(_) => {
                "Check that the base directory exists and is readable and writable"
            }
            ConvertError::CsvError(_) => {
                "Make sure the input file is UTF-8 encoded and uses ';' as separator"
            }
            ConvertError::SerializationError(_) => "Check the path given to --report-json",
            ConvertError::ConfigError { .. } | ConvertError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            ConvertError::InvalidConfigValueError { .. } => {
                "Fix the configuration value mentioned above and run again"
            }
            ConvertError::MissingConfigError { .. } => {
                "Add the missing setting to the configuration file or command line"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::IoError(e) => format!("Could not access a file: {}", e),
            ConvertError::CsvError(e) => match e.position() {
                Some(pos) => format!("Could not read the table at line {}: {}", pos.line(), e),
                None => format!("Could not read the table: {}", e),
            },
            ConvertError::SerializationError(e) => format!("Could not write the run report: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
