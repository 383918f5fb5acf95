pub mod app_state_builder;
pub mod gallery_db;
pub mod object_store;
pub mod special_projects;
