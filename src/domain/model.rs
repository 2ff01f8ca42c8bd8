use serde::{Serialize, Serializer};
use std::fmt;

pub const COL_DATE: &str = "Datum";
pub const COL_DISCIPLINE: &str = "Discipline";
// Trailing spaces are part of the source headers.
pub const COL_POINTS: &str = "Punten ";
pub const COL_INNINGS: &str = "Beurten ";
pub const COL_HIGHEST_RUN: &str = "HR";
pub const COL_COMPETITION: &str = "Competitie";
pub const COL_OUTCOME: &str = "Uitslag";

/// One row of a Dutch season table (`;`-separated). `None` means the column
/// is absent from the header or the row is shorter than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputRow {
    pub line: u64,
    pub date: Option<String>,
    pub discipline: Option<String>,
    pub points: Option<String>,
    pub innings: Option<String>,
    pub highest_run: Option<String>,
    pub competition: Option<String>,
    pub outcome: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    Won,
    Lost,
    Draw,
    #[default]
    Unspecified,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
            Outcome::Draw => "draw",
            Outcome::Unspecified => "",
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One row of the CaromStats import schema. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Discipline")]
    pub discipline: String,
    #[serde(rename = "Points")]
    pub points: String,
    #[serde(rename = "Innings")]
    pub innings: String,
    #[serde(rename = "Highest Run")]
    pub highest_run: String,
    #[serde(rename = "Adversary")]
    pub adversary: String,
    #[serde(rename = "Competition")]
    pub competition: String,
    #[serde(rename = "Outcome")]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformResult {
    pub rows: Vec<OutputRow>,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileReport {
    Converted {
        input: String,
        output: String,
        rows: usize,
        skipped: usize,
    },
    DryRun {
        input: String,
        output: String,
        rows: usize,
        skipped: usize,
    },
    NoValidData {
        input: String,
        skipped: usize,
    },
    NotFound {
        input: String,
    },
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileReport::Converted {
                input,
                output,
                rows,
                skipped,
            } => {
                writeln!(f, "✓ Converted {} -> {}", input, output)?;
                write!(f, "  Rows: {} (skipped {} incomplete rows)", rows, skipped)
            }
            FileReport::DryRun {
                input,
                output,
                rows,
                skipped,
            } => {
                writeln!(f, "• Would convert {} -> {}", input, output)?;
                write!(f, "  Rows: {} (skipped {} incomplete rows)", rows, skipped)
            }
            FileReport::NoValidData { input, .. } => write!(f, "✗ No valid data in {}", input),
            FileReport::NotFound { input } => write!(f, "✗ File not found: {}", input),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub files: Vec<FileReport>,
}

impl RunSummary {
    pub fn files_converted(&self) -> usize {
        self.files
            .iter()
            .filter(|r| matches!(r, FileReport::Converted { .. }))
            .count()
    }

    pub fn files_missing(&self) -> usize {
        self.files
            .iter()
            .filter(|r| matches!(r, FileReport::NotFound { .. }))
            .count()
    }

    pub fn rows_written(&self) -> usize {
        self.files
            .iter()
            .map(|r| match r {
                FileReport::Converted { rows, .. } => *rows,
                _ => 0,
            })
            .sum()
    }

    pub fn rows_skipped(&self) -> usize {
        self.files
            .iter()
            .map(|r| match r {
                FileReport::Converted { skipped, .. }
                | FileReport::DryRun { skipped, .. }
                | FileReport::NoValidData { skipped, .. } => *skipped,
                FileReport::NotFound { .. } => 0,
            })
            .sum()
    }
}
