use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectStoreConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    pub base_url: String,
    /// Write/delete tier.
    pub full_access_key: String,
    /// Metadata/list tier.
    pub read_only_key: String,
    /// Upper bound for every remote call.
    pub timeout: Duration,
    pub public_prefix: String,
}

impl ObjectStoreConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://cloud.mirkokawa.dev/api";
    pub const DEFAULT_PUBLIC_PREFIX: &'static str = "/api/cloud/files";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

    /// Reads `CLOUD_API_BASE_URL`, `CLOUD_API_KEY_FULL`, `CLOUD_API_KEY_READ`,
    /// `CLOUD_API_TIMEOUT_SECS` and `CLOUD_PUBLIC_PREFIX`.
    pub fn from_env() -> Result<Self, ObjectStoreConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ObjectStoreConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let base_url = non_empty("CLOUD_API_BASE_URL")
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let full_access_key =
            non_empty("CLOUD_API_KEY_FULL").ok_or(ObjectStoreConfigError::Missing("CLOUD_API_KEY_FULL"))?;
        let read_only_key =
            non_empty("CLOUD_API_KEY_READ").ok_or(ObjectStoreConfigError::Missing("CLOUD_API_KEY_READ"))?;

        let timeout_secs = match non_empty("CLOUD_API_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ObjectStoreConfigError::Invalid {
                    name: "CLOUD_API_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => Self::DEFAULT_TIMEOUT_SECS,
        };

        let public_prefix = non_empty("CLOUD_PUBLIC_PREFIX")
            .unwrap_or_else(|| Self::DEFAULT_PUBLIC_PREFIX.to_string());

        Ok(Self {
            base_url,
            full_access_key,
            read_only_key,
            timeout: Duration::from_secs(timeout_secs),
            public_prefix,
        })
    }
}
