mod audit_parent_gallery_service;
mod consistency_audit;
mod create_parent_with_gallery_service;
mod delete_parent_cascading_gallery_service;
mod get_gallery_service;
mod list_parent_covers_service;
mod remote_cleanup;
mod update_parent_gallery_service;
mod write_flow;

pub use audit_parent_gallery_service::AuditParentGalleryService;
pub use consistency_audit::audit_parent;
pub use create_parent_with_gallery_service::CreateParentWithGalleryService;
pub use delete_parent_cascading_gallery_service::DeleteParentCascadingGalleryService;
pub use get_gallery_service::GetGalleryService;
pub use list_parent_covers_service::ListParentCoversService;
pub use remote_cleanup::{purge_unreferenced, removed_urls};
pub use update_parent_gallery_service::UpdateParentGalleryService;
