use crate::domain::model::Outcome;

/// Maps `W`/`L`/`D` (any case, surrounding whitespace ignored) to an [`Outcome`].
/// Everything else, blank included, is [`Outcome::Unspecified`].
pub fn normalize_outcome(code: &str) -> Outcome {
    match code.trim().to_uppercase().as_str() {
        "W" => Outcome::Won,
        "L" => Outcome::Lost,
        "D" => Outcome::Draw,
        _ => Outcome::Unspecified,
    }
}
