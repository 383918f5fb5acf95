use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};

use crate::cloud_storage::application::domain::{
    entities::{
        FileDownload, FileListPage, FileListQuery, FileMetadata, StoredFile, UploadRequest,
    },
    file_locator::{extract_file_id, public_file_url},
};
use crate::cloud_storage::application::ports::outgoing::{ObjectStore, ObjectStoreError};

#[derive(Default)]
struct FakeStoreState {
    next_id: u64,
    existing: BTreeSet<String>,
    uploads: Vec<UploadRequest>,
    deletes: Vec<String>,
    metadata_lookups: Vec<String>,
    upload_error: Option<(usize, ObjectStoreError)>,
    delete_errors: HashMap<String, ObjectStoreError>,
    metadata_errors: HashMap<String, ObjectStoreError>,
    download_errors: HashMap<String, ObjectStoreError>,
    contents: HashMap<String, (Vec<u8>, String)>,
}

/// In-memory store that records every call.
///
/// Uploaded files get UUID-shaped ids so their public URLs resolve through
/// `extract_file_id` like real ones.
#[derive(Clone, Default)]
pub struct FakeObjectStore {
    state: Arc<Mutex<FakeStoreState>>,
}

impl FakeObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_id(n: u64) -> String {
        format!("00000000-0000-4000-8000-{n:012}")
    }

    pub fn file_url(n: u64) -> String {
        public_file_url("/api/cloud/files", &Self::file_id(n))
    }

    /// Marks blobs as present without going through `upload`.
    pub fn with_existing(self, ids: &[&str]) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.existing.extend(ids.iter().map(|s| s.to_string()));
        }
        self
    }

    pub fn fail_uploads_with(self, err: ObjectStoreError) -> Self {
        self.fail_uploads_after(0, err)
    }

    /// Lets `successes` uploads through, then fails every later one.
    pub fn fail_uploads_after(self, successes: usize, err: ObjectStoreError) -> Self {
        self.state.lock().unwrap().upload_error = Some((successes, err));
        self
    }

    pub fn fail_delete_of(self, locator: &str, err: ObjectStoreError) -> Self {
        self.state
            .lock()
            .unwrap()
            .delete_errors
            .insert(locator.to_string(), err);
        self
    }

    pub fn fail_metadata_of(self, file_id: &str, err: ObjectStoreError) -> Self {
        self.state
            .lock()
            .unwrap()
            .metadata_errors
            .insert(file_id.to_string(), err);
        self
    }

    pub fn fail_download_of(self, file_id: &str, err: ObjectStoreError) -> Self {
        self.state
            .lock()
            .unwrap()
            .download_errors
            .insert(file_id.to_string(), err);
        self
    }

    pub fn uploads(&self) -> Vec<UploadRequest> {
        self.state.lock().unwrap().uploads.clone()
    }

    /// Locators passed to `try_delete`/`delete`, in call order.
    pub fn deletes(&self) -> Vec<String> {
        self.state.lock().unwrap().deletes.clone()
    }

    pub fn metadata_lookups(&self) -> Vec<String> {
        self.state.lock().unwrap().metadata_lookups.clone()
    }

    pub fn contains(&self, file_id: &str) -> bool {
        self.state.lock().unwrap().existing.contains(file_id)
    }
}

fn metadata_for(id: &str) -> FileMetadata {
    FileMetadata {
        id: id.to_string(),
        file_name: format!("{id}.bin"),
        size: 1,
        mime_type: "image/jpeg".to_string(),
        uploaded_at: None,
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn upload(&self, request: UploadRequest) -> Result<StoredFile, ObjectStoreError> {
        let mut state = self.state.lock().unwrap();

        if let Some((successes, err)) = &state.upload_error {
            if state.uploads.len() >= *successes {
                return Err(err.clone());
            }
        }

        state.next_id += 1;
        let id = Self::file_id(state.next_id);
        state.existing.insert(id.clone());
        state.contents.insert(
            id.clone(),
            (request.bytes.clone(), request.content_type.clone()),
        );

        let stored = StoredFile {
            url: public_file_url("/api/cloud/files", &id),
            id,
            file_name: request.file_name.clone(),
            size: request.bytes.len() as u64,
            mime_type: request.content_type.clone(),
            uploaded_at: None,
        };
        state.uploads.push(request);
        Ok(stored)
    }

    async fn get_metadata(&self, file_id: &str) -> Result<FileMetadata, ObjectStoreError> {
        let mut state = self.state.lock().unwrap();
        state.metadata_lookups.push(file_id.to_string());

        if let Some(err) = state.metadata_errors.get(file_id) {
            return Err(err.clone());
        }
        if state.existing.contains(file_id) {
            Ok(metadata_for(file_id))
        } else {
            Err(ObjectStoreError::NotFound)
        }
    }

    async fn list(&self, query: FileListQuery) -> Result<FileListPage, ObjectStoreError> {
        let state = self.state.lock().unwrap();
        let files: Vec<FileMetadata> = state.existing.iter().map(|id| metadata_for(id)).collect();
        Ok(FileListPage {
            total: Some(files.len() as u64),
            files,
            page: query.page(),
            limit: query.limit(),
        })
    }

    async fn download(&self, file_id: &str) -> Result<FileDownload, ObjectStoreError> {
        let state = self.state.lock().unwrap();

        if let Some(err) = state.download_errors.get(file_id) {
            return Err(err.clone());
        }
        if !state.existing.contains(file_id) {
            return Err(ObjectStoreError::NotFound);
        }

        // Seeded blobs have no recorded upload; they serve a one-byte jpeg stand-in.
        let (bytes, content_type) = state
            .contents
            .get(file_id)
            .cloned()
            .unwrap_or_else(|| (vec![0xff], "image/jpeg".to_string()));

        Ok(FileDownload {
            bytes,
            content_type,
            content_disposition: None,
        })
    }

    async fn try_delete(&self, locator: &str) -> Result<(), ObjectStoreError> {
        let mut state = self.state.lock().unwrap();
        state.deletes.push(locator.to_string());

        if let Some(err) = state.delete_errors.get(locator) {
            return Err(err.clone());
        }

        let id = extract_file_id(locator)
            .ok_or_else(|| ObjectStoreError::InvalidLocator(locator.to_string()))?;
        state.existing.remove(&id);
        Ok(())
    }
}
