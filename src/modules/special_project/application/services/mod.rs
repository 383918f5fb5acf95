mod create_special_project_service;
mod delete_special_project_service;
mod list_special_projects_service;
mod next_sort_order_service;
mod update_special_project_service;

pub use create_special_project_service::CreateSpecialProjectService;
pub use delete_special_project_service::DeleteSpecialProjectService;
pub use list_special_projects_service::ListSpecialProjectsService;
pub use next_sort_order_service::NextSortOrderService;
pub use update_special_project_service::UpdateSpecialProjectService;
