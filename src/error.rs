use thiserror::Error;

/// Faults raised while turning a raw package into a report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("Unknown workout code: {0:?}")]
    UnknownCode(String),

    #[error("{code} expects {expected} arguments, got {got}")]
    ArgCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{code}: {field} must be a whole number, got {value}")]
    MalformedArgument {
        code: &'static str,
        field: &'static str,
        value: f64,
    },

    #[error("{label}: {field} is not a finite number (zero duration or height?)")]
    NumericFault {
        label: &'static str,
        field: &'static str,
    },
}
