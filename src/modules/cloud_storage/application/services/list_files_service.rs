use async_trait::async_trait;

use crate::cloud_storage::application::domain::entities::{FileListPage, FileListQuery};
use crate::cloud_storage::application::ports::{
    incoming::use_cases::{ListFilesError, ListFilesUseCase},
    outgoing::ObjectStore,
};

pub struct ListFilesService<S>
where
    S: ObjectStore,
{
    store: S,
}

impl<S> ListFilesService<S>
where
    S: ObjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ListFilesUseCase for ListFilesService<S>
where
    S: ObjectStore + Send + Sync,
{
    async fn execute(
        &self,
        page: u32,
        limit: u32,
        search: String,
    ) -> Result<FileListPage, ListFilesError> {
        let query = FileListQuery::new(page, limit, search).map_err(ListFilesError::InvalidQuery)?;
        Ok(self.store.list(query).await?)
    }
}
