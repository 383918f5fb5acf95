pub mod domain;
pub mod ports;
pub mod services;
pub mod special_project_use_cases;
