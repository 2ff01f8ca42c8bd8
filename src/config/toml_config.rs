use crate::config::{
    default_base_dir, default_candidates, default_input_marker, default_output_marker,
};
use crate::core::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use crate::utils::validation::{validate_provider, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: String,
    #[serde(default = "default_candidates")]
    pub candidates: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            candidates: default_candidates(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_input_marker")]
    pub input_marker: String,
    #[serde(default = "default_output_marker")]
    pub output_marker: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            input_marker: default_input_marker(),
            output_marker: default_output_marker(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConvertError::ConfigError {
            message: format!("Cannot read config file {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConvertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SEASON_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn base_dir(&self) -> &str {
        &self.input.base_dir
    }

    fn candidates(&self) -> &[String] {
        &self.input.candidates
    }

    fn input_marker(&self) -> &str {
        &self.output.input_marker
    }

    fn output_marker(&self) -> &str {
        &self.output.output_marker
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
