use crate::router::Page;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Application '{id}' not found")]
    NotFound { id: String },

    #[error("Parameter '{name}' = {value} outside [{min}, {max}], clamped to {clamped}")]
    InvalidParameter {
        name:    &'static str,
        value:   f64,
        min:     f64,
        max:     f64,
        clamped: f64,
    },

    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Command targets the {expected} page but {current} is selected")]
    WrongPage { expected: Page, current: Page },

    #[error("CSV error at line {line}: {reason}")]
    Csv { line: usize, reason: String },
}

pub type DeskResult<T> = Result<T, DeskError>;
