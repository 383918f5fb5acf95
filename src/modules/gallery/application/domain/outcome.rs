use serde::Serialize;
use utoipa::ToSchema;

use super::entities::{GalleryItem, ParentRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CleanupFailure {
    pub url: String,
    pub reason: String,
}

/// Result of the post-commit remote deletes. Never turns a committed write
/// into a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct CleanupReport {
    pub deleted: Vec<String>,
    /// Still referenced by another row, so left in place.
    pub retained: Vec<String>,
    pub failures: Vec<CleanupFailure>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failures.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuditReport {
    /// Referenced by the parent but absent from the store.
    pub missing_remote: Vec<String>,
    /// Dropped from the parent but still present in the store.
    pub orphaned_remote: Vec<String>,
    /// Could not be resolved to a file id or looked up.
    pub unchecked: Vec<String>,
    /// False when the parent's current references could not be read.
    pub complete: bool,
}

impl AuditReport {
    pub fn incomplete() -> Self {
        Self {
            missing_remote: Vec::new(),
            orphaned_remote: Vec::new(),
            unchecked: Vec::new(),
            complete: false,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.complete && self.missing_remote.is_empty() && self.orphaned_remote.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GalleryWriteOutcome {
    pub parent: ParentRef,
    pub items: Vec<GalleryItem>,
    pub committed: bool,
    pub cleanup: CleanupReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditReport>,
}

impl GalleryWriteOutcome {
    pub fn committed(parent: ParentRef, items: Vec<GalleryItem>) -> Self {
        Self {
            parent,
            items,
            committed: true,
            cleanup: CleanupReport::default(),
            audit: None,
        }
    }
}
