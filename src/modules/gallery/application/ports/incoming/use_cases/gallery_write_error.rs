use crate::cloud_storage::application::ports::outgoing::ObjectStoreError;
use crate::gallery::application::domain::parent_fields::ValidationErrors;
use crate::gallery::application::ports::outgoing::db::GalleryRepositoryError;

/// Failure of a create/update/delete write.
///
/// `orphaned_uploads` lists blobs uploaded for this request that no row
/// references because the write did not land. They are left in the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryWriteError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Parent not found")]
    ParentNotFound,

    #[error("Duplicate ordering on {0}")]
    DuplicateOrdering(String),

    #[error("Object store error: {error}")]
    Store {
        error: ObjectStoreError,
        orphaned_uploads: Vec<String>,
    },

    #[error("Persistence error: {message}")]
    Persistence {
        message: String,
        orphaned_uploads: Vec<String>,
    },
}

impl GalleryWriteError {
    pub fn from_repository(err: GalleryRepositoryError, orphaned_uploads: Vec<String>) -> Self {
        match err {
            GalleryRepositoryError::ParentNotFound => GalleryWriteError::ParentNotFound,
            GalleryRepositoryError::DuplicateOrdering(field) => {
                GalleryWriteError::DuplicateOrdering(field)
            }
            GalleryRepositoryError::DatabaseError(message) => GalleryWriteError::Persistence {
                message,
                orphaned_uploads,
            },
        }
    }

    pub fn orphaned_uploads(&self) -> &[String] {
        match self {
            GalleryWriteError::Store {
                orphaned_uploads, ..
            }
            | GalleryWriteError::Persistence {
                orphaned_uploads, ..
            } => orphaned_uploads,
            _ => &[],
        }
    }
}
