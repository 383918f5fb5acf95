pub mod cloud_storage;
pub mod gallery;
pub mod special_project;
