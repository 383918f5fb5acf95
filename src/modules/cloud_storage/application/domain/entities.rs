use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A blob accepted by the remote store.
///
/// `url` is the public locator persisted in gallery rows; `id` is the store's
/// own identifier and can be recovered from `url` with
/// [`extract_file_id`](super::file_locator::extract_file_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredFile {
    pub id: String,
    pub file_name: String,
    pub url: String,
    pub size: u64,
    pub mime_type: String,
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub id: String,
    pub file_name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default, alias = "createdAt")]
    pub uploaded_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FileListPage {
    pub files: Vec<FileMetadata>,
    pub page: u32,
    pub limit: u32,
    pub total: Option<u64>,
}

/// File bytes as served back to browsers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDownload {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub content_disposition: Option<String>,
}

/// Bytes headed for the store plus the caller's naming and metadata.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl UploadRequest {
    pub fn new(bytes: Vec<u8>, file_name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            file_name: file_name.into(),
            content_type: content_type.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

/// Validated paging for the remote listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileListQuery {
    page: u32,
    limit: u32,
    search: String,
}

impl FileListQuery {
    pub const MAX_LIMIT: u32 = 100;

    pub fn new(page: u32, limit: u32, search: impl Into<String>) -> Result<Self, String> {
        if page == 0 {
            return Err("page must be >= 1".to_string());
        }
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(format!("limit must be between 1 and {}", Self::MAX_LIMIT));
        }
        Ok(Self {
            page,
            limit,
            search: search.into().trim().to_string(),
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn search(&self) -> &str {
        &self.search
    }
}

impl Default for FileListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 20,
            search: String::new(),
        }
    }
}
