use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ConvertError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extensions(field_name: &str, files: &[String], allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    for file in files {
        match std::path::Path::new(file)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(extension) if allowed_set.contains(extension) => {}
            Some(extension) => {
                return Err(ConvertError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            None => {
                return Err(ConvertError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.clone(),
                    reason: "File has no extension or invalid filename".to_string(),
                });
            }
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(ConvertError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// Every candidate must contain the input marker, otherwise the derived output
/// name equals the input name and the source file would be overwritten.
pub fn validate_marker_substitution(
    field_name: &str,
    candidates: &[String],
    input_marker: &str,
    output_marker: &str,
) -> Result<()> {
    if input_marker == output_marker {
        return Err(ConvertError::InvalidConfigValueError {
            field: "output_marker".to_string(),
            value: output_marker.to_string(),
            reason: "Output marker must differ from the input marker".to_string(),
        });
    }

    if let Some(file) = candidates.iter().find(|c| !c.contains(input_marker)) {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.clone(),
            reason: format!("File name does not contain the input marker '{}'", input_marker),
        });
    }

    Ok(())
}

/// Shared checks for every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_path("base_dir", config.base_dir())?;
    validate_non_empty_list("candidates", config.candidates())?;
    validate_file_extensions("candidates", config.candidates(), &["csv"])?;
    validate_non_empty_string("input_marker", config.input_marker())?;
    validate_non_empty_string("output_marker", config.output_marker())?;
    validate_marker_substitution(
        "candidates",
        config.candidates(),
        config.input_marker(),
        config.output_marker(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("base_dir", ".").is_ok());
        assert!(validate_path("base_dir", "").is_err());
        assert!(validate_path("base_dir", "data\0dir").is_err());
    }

    #[test]
    fn test_validate_file_extensions() {
        let files = vec!["2021-2022-Tabel 1.csv".to_string()];
        assert!(validate_file_extensions("candidates", &files, &["csv"]).is_ok());

        let invalid_files = vec!["2021-2022-Tabel 1.xlsx".to_string()];
        assert!(validate_file_extensions("candidates", &invalid_files, &["csv"]).is_err());

        let no_extension = vec!["Tabel 1".to_string()];
        assert!(validate_file_extensions("candidates", &no_extension, &["csv"]).is_err());
    }

    #[test]
    fn test_validate_marker_substitution() {
        let files = vec!["2021-2022-Tabel 1.csv".to_string()];
        assert!(validate_marker_substitution("candidates", &files, "Tabel 1", "converted").is_ok());
        assert!(validate_marker_substitution("candidates", &files, "Tabel 1", "Tabel 1").is_err());

        let unmarked = vec!["2021-2022.csv".to_string()];
        let err = validate_marker_substitution("candidates", &unmarked, "Tabel 1", "converted")
            .unwrap_err();
        assert!(err.to_string().contains("2021-2022.csv"));
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list("candidates", &[]).is_err());
        assert!(validate_non_empty_list("candidates", &["a.csv".to_string()]).is_ok());
    }
}
