use thiserror::Error;

/// Raised when a display label or slug does not name a member of one of
/// the closed domain enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} label: {value:?}")]
pub struct LabelError {
    pub kind: &'static str,
    pub value: String,
}

impl LabelError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}
