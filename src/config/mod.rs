#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

/// One table per season, exported from the club's spreadsheet.
pub const DEFAULT_CANDIDATES: [&str; 5] = [
    "2021-2022-Tabel 1.csv",
    "2022-2023-Tabel 1.csv",
    "2023-2024-Tabel 1.csv",
    "2024-2025-Tabel 1.csv",
    "2025-2026-Tabel 1.csv",
];

pub const DEFAULT_BASE_DIR: &str = ".";
pub const DEFAULT_INPUT_MARKER: &str = "Tabel 1";
pub const DEFAULT_OUTPUT_MARKER: &str = "converted";

pub fn default_candidates() -> Vec<String> {
    DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect()
}

pub fn default_base_dir() -> String {
    DEFAULT_BASE_DIR.to_string()
}

pub fn default_input_marker() -> String {
    DEFAULT_INPUT_MARKER.to_string()
}

pub fn default_output_marker() -> String {
    DEFAULT_OUTPUT_MARKER.to_string()
}
