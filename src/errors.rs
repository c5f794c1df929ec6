use thiserror::Error;

/// Top-level error type returned by townhall session/seed boundaries.
///
/// Store mutators themselves never return errors: a missing target id or a
/// policy violation (non-author attempting an author-only operation) leaves
/// the collection unchanged. Errors exist only where input enters the system.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validation failed for one or more fields of a draft.
    #[error("validation failed")]
    Validation(#[from] ValidationError),

    /// A referenced user does not exist in the session reference data.
    #[error("unknown user '{user_id}'")]
    UnknownUser { user_id: String },

    /// A referenced department does not exist in the session reference data.
    #[error("unknown department '{department_id}'")]
    UnknownDepartment { department_id: String },
}

/// Collection of validation issues encountered while checking a draft.
#[derive(Debug, Error)]
#[error("validation errors: {issues:?}")]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new<I>(issues: I) -> Self
    where
        I: IntoIterator<Item = ValidationIssue>,
    {
        Self {
            issues: issues.into_iter().collect(),
        }
    }

    /// Convenience helper for constructing a single-field validation error.
    pub fn single(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new([ValidationIssue::new(field, code, message)])
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Detailed validation failure for a single field or logical path.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Convenience alias used by draft validators.
pub type ValidationResult = Result<(), ValidationError>;
