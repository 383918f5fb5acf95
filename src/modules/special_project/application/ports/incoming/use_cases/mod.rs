mod create_special_project;
mod delete_special_project;
mod list_special_projects;
mod next_sort_order;
mod special_project_error;
mod update_special_project;

pub use create_special_project::CreateSpecialProjectUseCase;
pub use delete_special_project::DeleteSpecialProjectUseCase;
pub use list_special_projects::ListSpecialProjectsUseCase;
pub use next_sort_order::NextSortOrderUseCase;
pub use special_project_error::SpecialProjectError;
pub use update_special_project::UpdateSpecialProjectUseCase;
