use crate::error::{Error, Result};

/// Converts a score in [0, 100] into a letter grade.
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A     |
/// | >= 80   | B     |
/// | >= 70   | C     |
/// | >= 60   | D     |
/// | < 60    | F     |
///
/// # Errors
///
/// Returns [`Error::NonFiniteScore`] for NaN or infinite input. The
/// pipeline never passes those here (its range filter runs first); the
/// check covers direct callers.
pub fn assign_grade(score: f64) -> Result<String> {
    if !score.is_finite() {
        return Err(Error::NonFiniteScore { score });
    }
    Ok(match score {
        s if s >= 90.0 => "A".into(),
        s if s >= 80.0 => "B".into(),
        s if s >= 70.0 => "C".into(),
        s if s >= 60.0 => "D".into(),
        _ => "F".into(),
    })
}
