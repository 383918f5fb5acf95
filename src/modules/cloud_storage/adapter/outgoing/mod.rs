mod object_store_config;
mod object_store_http;

pub use object_store_config::{ObjectStoreConfig, ObjectStoreConfigError};
pub use object_store_http::HttpObjectStore;
