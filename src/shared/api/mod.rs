mod json_config;
mod response;

pub use json_config::{custom_json_config, DEFAULT_JSON_LIMIT};
pub use response::{ApiError, ApiResponse};
