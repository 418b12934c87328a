use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}: image label name must have non-zero length")]
    EmptyImageLabelName(String),

    #[error("Build must be named \"{expected}\" to take effect, found \"{found}\"")]
    NonCanonicalName { expected: String, found: String },

    #[error("Build is invalid: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

impl ValidationError {
    /// Flattens an aggregate into the individual problems it holds.
    pub fn errors(&self) -> Vec<&ValidationError> {
        match self {
            ValidationError::Invalid(errors) => errors.iter().flat_map(|e| e.errors()).collect(),
            other => vec![other],
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
