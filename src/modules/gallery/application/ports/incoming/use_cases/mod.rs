mod audit_parent_gallery;
mod create_parent_with_gallery;
mod delete_parent_cascading_gallery;
mod gallery_write_error;
mod get_gallery;
mod list_parent_covers;
mod update_parent_gallery;

pub use audit_parent_gallery::{AuditParentGalleryError, AuditParentGalleryUseCase};
pub use create_parent_with_gallery::{CreateParentCommand, CreateParentWithGalleryUseCase};
pub use delete_parent_cascading_gallery::DeleteParentCascadingGalleryUseCase;
pub use gallery_write_error::GalleryWriteError;
pub use get_gallery::{GetGalleryError, GetGalleryUseCase};
pub use list_parent_covers::{ListParentCoversError, ListParentCoversUseCase};
pub use update_parent_gallery::{UpdateParentCommand, UpdateParentGalleryUseCase};
