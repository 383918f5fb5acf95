mod special_project_repository;

pub use special_project_repository::{
    RemovedSpecialProject, SpecialProjectRepository, SpecialProjectRepositoryError,
    UpdatedSpecialProject,
};
