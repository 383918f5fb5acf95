use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use super::object_store_config::{ObjectStoreConfig, ObjectStoreConfigError};
use crate::cloud_storage::application::{
    domain::{
        entities::{
            FileDownload, FileListPage, FileListQuery, FileMetadata, StoredFile, UploadRequest,
        },
        file_locator::{extract_file_id, public_file_url, random_suffix, unique_upload_name},
    },
    ports::outgoing::{ObjectStore, ObjectStoreError},
};

// ============================================================================
// Transport seam
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApiKey {
    Full,
    Read,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone)]
struct MultipartUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
    metadata_json: String,
}

#[derive(Debug, Clone)]
struct StoreRequest {
    method: HttpMethod,
    url: String,
    key: ApiKey,
    upload: Option<MultipartUpload>,
}

#[derive(Debug, Clone)]
struct StoreResponse {
    status: u16,
    content_type: Option<String>,
    content_disposition: Option<String>,
    body: Vec<u8>,
}

impl StoreResponse {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Internal seam so the adapter can be exercised without a live store.
#[async_trait]
trait StoreTransport: Send + Sync {
    async fn send(&self, request: StoreRequest) -> Result<StoreResponse, String>;
}

struct ReqwestTransport {
    client: reqwest::Client,
    full_access_key: String,
    read_only_key: String,
}

#[async_trait]
impl StoreTransport for ReqwestTransport {
    async fn send(&self, request: StoreRequest) -> Result<StoreResponse, String> {
        let key = match request.key {
            ApiKey::Full => &self.full_access_key,
            ApiKey::Read => &self.read_only_key,
        };

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        }
        .header("X-API-Key", key);

        if let Some(upload) = request.upload {
            let part = reqwest::multipart::Part::bytes(upload.bytes)
                .file_name(upload.file_name)
                .mime_str(&upload.content_type)
                .map_err(|e| e.to_string())?;
            let form = reqwest::multipart::Form::new()
                .part("file", part)
                .text("metadata", upload.metadata_json);
            builder = builder.multipart(form);
        }

        let response = builder.send().await.map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let header = |name: reqwest::header::HeaderName| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header(reqwest::header::CONTENT_TYPE);
        let content_disposition = header(reqwest::header::CONTENT_DISPOSITION);
        let body = response.bytes().await.map_err(|e| e.to_string())?.to_vec();

        Ok(StoreResponse {
            status,
            content_type,
            content_disposition,
            body,
        })
    }
}

// ============================================================================
// Wire payloads
// ============================================================================

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ListPayload {
    #[serde(default)]
    files: Vec<FileMetadata>,
    #[serde(default)]
    total: Option<u64>,
}

fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
        message: Option<String>,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(msg), ..
        })
        | Ok(ErrorBody {
            message: Some(msg), ..
        }) => msg,
        _ => body.chars().take(200).collect(),
    }
}

fn map_status(status: u16, body: &str) -> ObjectStoreError {
    let message = error_message(body);
    let lowered = message.to_lowercase();

    match status {
        401 | 403 => ObjectStoreError::AuthError(format!("status {status}: {message}")),
        429 => ObjectStoreError::RateLimited,
        _ if lowered.contains("already exists") || lowered.contains("duplicate") => {
            ObjectStoreError::DuplicateRejected(message)
        }
        404 => ObjectStoreError::NotFound,
        500..=599 => ObjectStoreError::StoreUnavailable(format!("status {status}: {message}")),
        _ => ObjectStoreError::InvalidResponse(format!("status {status}: {message}")),
    }
}

fn parse_data<T>(body: &str) -> Result<T, ObjectStoreError>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str::<DataEnvelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ObjectStoreError::InvalidResponse(e.to_string()))
}

// ============================================================================
// Adapter (Production)
// ============================================================================

#[derive(Clone)]
pub struct HttpObjectStore {
    transport: Arc<dyn StoreTransport>,
    base_url: String,
    /// Public downloads carry the read key in the path, not in a header.
    read_only_key: String,
    public_prefix: String,
    timeout: Duration,
}

impl HttpObjectStore {
    pub fn new(config: ObjectStoreConfig) -> Result<Self, ObjectStoreConfigError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| ObjectStoreConfigError::Client(e.to_string()))?;

        let transport = ReqwestTransport {
            client,
            full_access_key: config.full_access_key,
            read_only_key: config.read_only_key.clone(),
        };

        Ok(Self {
            transport: Arc::new(transport),
            base_url: config.base_url,
            read_only_key: config.read_only_key,
            public_prefix: config.public_prefix,
            timeout: config.timeout,
        })
    }

    #[cfg(test)]
    fn with_transport(transport: Arc<dyn StoreTransport>, timeout: Duration) -> Self {
        Self {
            transport,
            base_url: "http://store.test/api".to_string(),
            read_only_key: "read-key".to_string(),
            public_prefix: "/api/cloud/files".to_string(),
            timeout,
        }
    }

    async fn execute(&self, request: StoreRequest) -> Result<StoreResponse, ObjectStoreError> {
        let method = request.method;
        let url = self.redact(&request.url);

        let response = tokio::time::timeout(self.timeout, self.transport.send(request))
            .await
            .map_err(|_| {
                ObjectStoreError::StoreUnavailable(format!(
                    "request timed out after {}s",
                    self.timeout.as_secs_f32()
                ))
            })?
            .map_err(ObjectStoreError::StoreUnavailable)?;

        debug!(?method, url = %url, status = response.status, "Object store call finished");

        if (200..300).contains(&response.status) {
            Ok(response)
        } else {
            Err(map_status(response.status, &response.text()))
        }
    }

    fn redact(&self, url: &str) -> String {
        if self.read_only_key.is_empty() {
            url.to_string()
        } else {
            url.replace(&self.read_only_key, "***")
        }
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    async fn upload(&self, request: UploadRequest) -> Result<StoredFile, ObjectStoreError> {
        let now = Utc::now();
        let file_name =
            unique_upload_name(&request.file_name, now.timestamp_millis(), &random_suffix());

        let mut metadata: serde_json::Map<String, serde_json::Value> =
            request.metadata.into_iter().collect();
        metadata.insert("originalName".into(), request.file_name.clone().into());
        metadata.insert("uploadedAt".into(), now.to_rfc3339().into());
        metadata.insert("allowDuplicates".into(), true.into());

        let response = self
            .execute(StoreRequest {
                method: HttpMethod::Post,
                url: format!("{}/file/upload?allowDuplicates=true", self.base_url),
                key: ApiKey::Full,
                upload: Some(MultipartUpload {
                    file_name,
                    content_type: request.content_type,
                    bytes: request.bytes,
                    metadata_json: serde_json::Value::Object(metadata).to_string(),
                }),
            })
            .await?;

        let uploaded: FileMetadata = parse_data(&response.text())?;
        info!(file_id = %uploaded.id, file_name = %uploaded.file_name, "Uploaded file to object store");

        Ok(StoredFile {
            url: public_file_url(&self.public_prefix, &uploaded.id),
            id: uploaded.id,
            file_name: uploaded.file_name,
            size: uploaded.size,
            mime_type: uploaded.mime_type,
            uploaded_at: uploaded.uploaded_at,
        })
    }

    async fn get_metadata(&self, file_id: &str) -> Result<FileMetadata, ObjectStoreError> {
        let file_id = file_id.trim();
        if file_id.is_empty() {
            return Err(ObjectStoreError::InvalidLocator(file_id.to_string()));
        }

        let response = self
            .execute(StoreRequest {
                method: HttpMethod::Get,
                url: format!("{}/file/{}", self.base_url, file_id),
                key: ApiKey::Read,
                upload: None,
            })
            .await?;

        parse_data(&response.text())
    }

    async fn list(&self, query: FileListQuery) -> Result<FileListPage, ObjectStoreError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/file/list", self.base_url),
            &[
                ("page", query.page().to_string()),
                ("limit", query.limit().to_string()),
                ("search", query.search().to_string()),
            ],
        )
        .map_err(|e| ObjectStoreError::InvalidResponse(format!("invalid list url: {e}")))?;

        let response = self
            .execute(StoreRequest {
                method: HttpMethod::Get,
                url: url.to_string(),
                key: ApiKey::Read,
                upload: None,
            })
            .await?;

        let payload: ListPayload = parse_data(&response.text())?;

        Ok(FileListPage {
            files: payload.files,
            page: query.page(),
            limit: query.limit(),
            total: payload.total,
        })
    }

    async fn download(&self, file_id: &str) -> Result<FileDownload, ObjectStoreError> {
        let file_id = extract_file_id(file_id)
            .ok_or_else(|| ObjectStoreError::InvalidLocator(file_id.to_string()))?;

        let response = self
            .execute(StoreRequest {
                method: HttpMethod::Get,
                url: format!("{}/public/{}/{}", self.base_url, self.read_only_key, file_id),
                key: ApiKey::Read,
                upload: None,
            })
            .await?;

        // An empty body is a broken blob; callers fall back as for a missing one.
        if response.body.is_empty() {
            return Err(ObjectStoreError::NotFound);
        }

        Ok(FileDownload {
            content_type: response
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string()),
            content_disposition: response.content_disposition,
            bytes: response.body,
        })
    }

    async fn try_delete(&self, locator: &str) -> Result<(), ObjectStoreError> {
        let file_id = extract_file_id(locator)
            .ok_or_else(|| ObjectStoreError::InvalidLocator(locator.to_string()))?;

        self.execute(StoreRequest {
            method: HttpMethod::Delete,
            url: format!("{}/file/{}", self.base_url, file_id),
            key: ApiKey::Full,
            upload: None,
        })
        .await?;

        info!(file_id = %file_id, "Deleted file from object store");
        Ok(())
    }
}
