use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
    #[error("{entity} {value} already exists")]
    Duplicate {
        entity: &'static str,
        value: String,
    },
    #[error("{entity} {value} not found")]
    NotFound {
        entity: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreErrorKind {
    Validation,
    Duplicate,
    NotFound,
}

impl CoreError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn duplicate(entity: &'static str, value: impl Into<String>) -> Self {
        CoreError::Duplicate {
            entity,
            value: value.into(),
        }
    }

    pub fn not_found(entity: &'static str, value: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> CoreErrorKind {
        match self {
            CoreError::InvalidField { .. } => CoreErrorKind::Validation,
            CoreError::Duplicate { .. } => CoreErrorKind::Duplicate,
            CoreError::NotFound { .. } => CoreErrorKind::NotFound,
        }
    }
}
