use super::types::InputField;

/// Validation failures raised by [`calculate`](super::calculate).
///
/// None of these are retryable; the caller has to supply corrected input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoastFireError {
    #[error("{message}")]
    NonFiniteInput { field: InputField, message: String },

    #[error("{message}")]
    InvalidRange { field: InputField, message: String },

    #[error("{message}")]
    InvalidOrder { message: String },
}

impl CoastFireError {
    /// The offending field. Ordering violations blame the target age.
    pub fn field(&self) -> InputField {
        match self {
            CoastFireError::NonFiniteInput { field, .. }
            | CoastFireError::InvalidRange { field, .. } => *field,
            CoastFireError::InvalidOrder { .. } => InputField::TargetAge,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            CoastFireError::NonFiniteInput { .. } => "nonFiniteInput",
            CoastFireError::InvalidRange { .. } => "invalidRange",
            CoastFireError::InvalidOrder { .. } => "invalidOrder",
        }
    }

    pub(crate) fn non_finite(field: InputField) -> Self {
        CoastFireError::NonFiniteInput {
            field,
            message: format!("{field} must be a finite number"),
        }
    }

    pub(crate) fn out_of_range(field: InputField, message: String) -> Self {
        CoastFireError::InvalidRange { field, message }
    }
}
