use crate::core::date::{to_iso_date, DateParseError};
use crate::core::outcome::normalize_outcome;
use crate::domain::model::{
    InputRow, OutputRow, COL_DATE, COL_HIGHEST_RUN, COL_INNINGS, COL_POINTS,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("missing value for column '{0}'")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidDate(#[from] DateParseError),

    #[error("blank value for column '{0}'")]
    BlankField(&'static str),
}

fn is_missing(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}

/// Converts one season-table row into the import schema, or says why it was skipped.
///
/// Checks run in order and stop at the first failure: the date, points and
/// innings must be present (raw value), the date must parse, and points,
/// innings and highest run must be non-blank once trimmed. Numeric columns are
/// copied as text.
pub fn convert_row(row: &InputRow) -> Result<OutputRow, SkipReason> {
    for (column, value) in [
        (COL_DATE, &row.date),
        (COL_POINTS, &row.points),
        (COL_INNINGS, &row.innings),
    ] {
        if is_missing(value) {
            return Err(SkipReason::MissingField(column));
        }
    }

    let date = to_iso_date(row.date.as_deref().unwrap_or_default())?;

    let points = trimmed(&row.points);
    let innings = trimmed(&row.innings);
    let highest_run = trimmed(&row.highest_run);

    for (column, value) in [
        (COL_POINTS, &points),
        (COL_INNINGS, &innings),
        (COL_HIGHEST_RUN, &highest_run),
    ] {
        if value.is_empty() {
            return Err(SkipReason::BlankField(column));
        }
    }

    Ok(OutputRow {
        date,
        discipline: trimmed(&row.discipline),
        points,
        innings,
        highest_run,
        adversary: String::new(),
        competition: trimmed(&row.competition),
        outcome: normalize_outcome(row.outcome.as_deref().unwrap_or_default()),
    })
}
