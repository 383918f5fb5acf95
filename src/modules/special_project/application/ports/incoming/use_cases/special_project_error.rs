use crate::gallery::application::domain::parent_fields::ValidationErrors;
use crate::special_project::application::ports::outgoing::SpecialProjectRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecialProjectError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Special project not found")]
    NotFound,

    #[error("Duplicate ordering on {0}")]
    DuplicateOrdering(String),

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<SpecialProjectRepositoryError> for SpecialProjectError {
    fn from(err: SpecialProjectRepositoryError) -> Self {
        match err {
            SpecialProjectRepositoryError::NotFound => SpecialProjectError::NotFound,
            SpecialProjectRepositoryError::DuplicateOrdering(field) => {
                SpecialProjectError::DuplicateOrdering(field)
            }
            SpecialProjectRepositoryError::DatabaseError(msg) => SpecialProjectError::Persistence(msg),
        }
    }
}
