use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::gallery::application::domain::{
    entities::{
        CoverImage, GalleryItem, NewGalleryItem, Page, ParentCover, ParentRef, ParentType,
    },
    parent_fields::{LocalizedText, ParentFields},
    sequence::Sequence,
};
use crate::gallery::application::ports::outgoing::db::{
    BlobReferences, GalleryQuery, GalleryQueryError, GalleryRepositoryError, GalleryRows,
    GalleryTransaction, ParentRows, UnitOfWork,
};

#[derive(Debug, Clone)]
pub struct ParentRecord {
    pub parent: ParentRef,
    pub fields: ParentFields,
    pub primary_image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct Snapshot {
    /// Insertion order doubles as `created_at` order.
    parents: Vec<ParentRecord>,
    rows: Vec<GalleryItem>,
}

impl Snapshot {
    fn parent(&self, parent: &ParentRef) -> Option<&ParentRecord> {
        self.parents.iter().find(|p| p.parent == *parent)
    }

    fn parent_mut(&mut self, parent: &ParentRef) -> Option<&mut ParentRecord> {
        self.parents.iter_mut().find(|p| p.parent == *parent)
    }

    fn scope(&self, parent: &ParentRef) -> Vec<GalleryItem> {
        let mut rows: Vec<GalleryItem> = self
            .rows
            .iter()
            .filter(|r| r.parent == *parent)
            .cloned()
            .collect();
        rows.sort_by_key(|r| (r.order_index, r.created_at, r.id));
        rows
    }
}

#[derive(Default)]
struct DbState {
    committed: Snapshot,
    /// References held by tables outside the gallery, e.g. special projects.
    external_references: HashMap<String, u64>,
    insert_error: Option<String>,
    commit_error: Option<String>,
    begun: usize,
    commits: usize,
    rollbacks: usize,
}

/// In-memory database with real transaction semantics: each transaction
/// works on a private copy and publishes it only on commit.
#[derive(Clone, Default)]
pub struct InMemoryGalleryDb {
    state: Arc<Mutex<DbState>>,
}

pub fn sample_fields(title: &str) -> ParentFields {
    ParentFields {
        title: LocalizedText {
            en: title.to_string(),
            ..Default::default()
        },
        description: LocalizedText::default(),
        event_date: None,
    }
}

impl InMemoryGalleryDb {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------
    // Seeding
    // -----------------------

    pub fn seed_parent(&self, parent_type: ParentType) -> ParentRef {
        let parent = ParentRef::new(parent_type, Uuid::new_v4());
        self.seed_parent_ref(parent);
        parent
    }

    pub fn seed_parent_ref(&self, parent: ParentRef) {
        self.seed_parent_with_primary(parent, None);
    }

    pub fn seed_parent_with_primary(&self, parent: ParentRef, primary: Option<&str>) {
        let title = format!("{} {}", parent.parent_type(), parent.id());
        self.state.lock().unwrap().committed.parents.push(ParentRecord {
            parent,
            fields: sample_fields(&title),
            primary_image_url: primary.map(str::to_string),
        });
    }

    pub fn seed_rows(&self, parent: &ParentRef, rows: &[(&str, i32)]) {
        let mut state = self.state.lock().unwrap();
        for (url, order_index) in rows {
            state.committed.rows.push(GalleryItem {
                id: Uuid::new_v4(),
                parent: *parent,
                image_url: url.to_string(),
                alt_text: String::new(),
                order_index: *order_index,
                created_at: Utc::now(),
            });
        }
    }

    pub fn add_external_reference(&self, url: &str) {
        *self
            .state
            .lock()
            .unwrap()
            .external_references
            .entry(url.to_string())
            .or_default() += 1;
    }

    // -----------------------
    // Fault injection
    // -----------------------

    pub fn fail_next_insert(&self, message: &str) {
        self.state.lock().unwrap().insert_error = Some(message.to_string());
    }

    pub fn fail_next_commit(&self, message: &str) {
        self.state.lock().unwrap().commit_error = Some(message.to_string());
    }

    // -----------------------
    // Inspection
    // -----------------------

    pub fn rows_for(&self, parent: &ParentRef) -> Vec<GalleryItem> {
        self.state.lock().unwrap().committed.scope(parent)
    }

    pub fn urls_for(&self, parent: &ParentRef) -> Vec<String> {
        self.rows_for(parent)
            .into_iter()
            .map(|r| r.image_url)
            .collect()
    }

    pub fn parent(&self, parent: &ParentRef) -> Option<ParentRecord> {
        self.state.lock().unwrap().committed.parent(parent).cloned()
    }

    pub fn primary_of(&self, parent: &ParentRef) -> Option<String> {
        self.parent(parent).and_then(|p| p.primary_image_url)
    }

    pub fn total_rows(&self) -> usize {
        self.state.lock().unwrap().committed.rows.len()
    }

    pub fn parent_count(&self) -> usize {
        self.state.lock().unwrap().committed.parents.len()
    }

    pub fn begun(&self) -> usize {
        self.state.lock().unwrap().begun
    }

    pub fn commits(&self) -> usize {
        self.state.lock().unwrap().commits
    }

    pub fn rollbacks(&self) -> usize {
        self.state.lock().unwrap().rollbacks
    }

    /// Synchronous `begin` for repository-level tests.
    pub fn begin_tx(&self) -> InMemoryTx {
        let mut state = self.state.lock().unwrap();
        state.begun += 1;
        InMemoryTx {
            db: Arc::clone(&self.state),
            working: state.committed.clone(),
        }
    }
}

pub struct InMemoryTx {
    db: Arc<Mutex<DbState>>,
    working: Snapshot,
}

impl InMemoryTx {
    pub fn commit_now(self) {
        let mut state = self.db.lock().unwrap();
        state.committed = self.working;
        state.commits += 1;
    }

    pub fn rollback_now(self) {
        self.db.lock().unwrap().rollbacks += 1;
    }

    fn require_parent(&self, parent: &ParentRef) -> Result<(), GalleryRepositoryError> {
        self.working
            .parent(parent)
            .map(|_| ())
            .ok_or(GalleryRepositoryError::ParentNotFound)
    }
}

#[async_trait]
impl GalleryRows for InMemoryTx {
    async fn select_scope(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        Ok(self.working.scope(parent))
    }

    async fn max_order_index(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Option<i32>, GalleryRepositoryError> {
        Ok(self.working.scope(parent).iter().map(|r| r.order_index).max())
    }

    async fn delete_scope(&mut self, parent: &ParentRef) -> Result<u64, GalleryRepositoryError> {
        let before = self.working.rows.len();
        self.working.rows.retain(|r| r.parent != *parent);
        Ok((before - self.working.rows.len()) as u64)
    }

    async fn insert_rows(
        &mut self,
        parent: &ParentRef,
        rows: Sequence<NewGalleryItem>,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        if let Some(message) = self.db.lock().unwrap().insert_error.take() {
            return Err(GalleryRepositoryError::DatabaseError(message));
        }
        self.require_parent(parent)?;

        let now = Utc::now();
        let inserted: Vec<GalleryItem> = rows
            .into_iter()
            .map(|seq| GalleryItem {
                id: Uuid::new_v4(),
                parent: *parent,
                image_url: seq.item.image_url,
                alt_text: seq.item.alt_text,
                order_index: seq.order_index,
                created_at: now,
            })
            .collect();

        self.working.rows.extend(inserted.iter().cloned());
        Ok(inserted)
    }
}

#[async_trait]
impl ParentRows for InMemoryTx {
    async fn insert_parent(
        &mut self,
        parent_type: ParentType,
        fields: &ParentFields,
    ) -> Result<ParentRef, GalleryRepositoryError> {
        let parent = ParentRef::new(parent_type, Uuid::new_v4());
        self.working.parents.push(ParentRecord {
            parent,
            fields: fields.clone(),
            primary_image_url: None,
        });
        Ok(parent)
    }

    async fn update_parent(
        &mut self,
        parent: &ParentRef,
        fields: &ParentFields,
    ) -> Result<(), GalleryRepositoryError> {
        let record = self
            .working
            .parent_mut(parent)
            .ok_or(GalleryRepositoryError::ParentNotFound)?;
        record.fields = fields.clone();
        Ok(())
    }

    async fn primary_image(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Option<String>, GalleryRepositoryError> {
        self.working
            .parent(parent)
            .map(|p| p.primary_image_url.clone())
            .ok_or(GalleryRepositoryError::ParentNotFound)
    }

    async fn set_primary_image(
        &mut self,
        parent: &ParentRef,
        image_url: Option<&str>,
    ) -> Result<(), GalleryRepositoryError> {
        let record = self
            .working
            .parent_mut(parent)
            .ok_or(GalleryRepositoryError::ParentNotFound)?;
        record.primary_image_url = image_url.map(str::to_string);
        Ok(())
    }

    async fn delete_parent(&mut self, parent: &ParentRef) -> Result<(), GalleryRepositoryError> {
        self.require_parent(parent)?;
        self.working.parents.retain(|p| p.parent != *parent);
        Ok(())
    }
}

#[async_trait]
impl GalleryTransaction for InMemoryTx {
    async fn commit(self) -> Result<(), GalleryRepositoryError> {
        let failure = self.db.lock().unwrap().commit_error.take();
        match failure {
            Some(message) => {
                self.rollback_now();
                Err(GalleryRepositoryError::DatabaseError(message))
            }
            None => {
                self.commit_now();
                Ok(())
            }
        }
    }

    async fn rollback(self) -> Result<(), GalleryRepositoryError> {
        self.rollback_now();
        Ok(())
    }
}

#[async_trait]
impl UnitOfWork for InMemoryGalleryDb {
    type Tx = InMemoryTx;

    async fn begin(&self) -> Result<Self::Tx, GalleryRepositoryError> {
        Ok(self.begin_tx())
    }
}

#[async_trait]
impl BlobReferences for InMemoryGalleryDb {
    async fn count_references(&self, image_url: &str) -> Result<u64, GalleryQueryError> {
        let state = self.state.lock().unwrap();
        let rows = state
            .committed
            .rows
            .iter()
            .filter(|r| r.image_url == image_url)
            .count() as u64;
        let primaries = state
            .committed
            .parents
            .iter()
            .filter(|p| p.primary_image_url.as_deref() == Some(image_url))
            .count() as u64;
        let external = state
            .external_references
            .get(image_url)
            .copied()
            .unwrap_or(0);

        Ok(rows + primaries + external)
    }
}

#[async_trait]
impl GalleryQuery for InMemoryGalleryDb {
    async fn list_ordered(&self, parent: &ParentRef) -> Result<Vec<GalleryItem>, GalleryQueryError> {
        let state = self.state.lock().unwrap();
        if state.committed.parent(parent).is_none() {
            return Err(GalleryQueryError::ParentNotFound);
        }
        Ok(state.committed.scope(parent))
    }

    async fn primary_image(&self, parent: &ParentRef) -> Result<Option<String>, GalleryQueryError> {
        self.state
            .lock()
            .unwrap()
            .committed
            .parent(parent)
            .map(|p| p.primary_image_url.clone())
            .ok_or(GalleryQueryError::ParentNotFound)
    }

    async fn list_covers(
        &self,
        parent_type: ParentType,
        page: Page,
    ) -> Result<Vec<ParentCover>, GalleryQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .committed
            .parents
            .iter()
            .filter(|p| p.parent.parent_type() == parent_type)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|p| ParentCover {
                parent: p.parent,
                title: p.fields.title.en.clone(),
                primary_image_url: p.primary_image_url.clone(),
                cover: state
                    .committed
                    .scope(&p.parent)
                    .into_iter()
                    .next()
                    .map(|row| CoverImage {
                        image_url: row.image_url,
                        alt_text: row.alt_text,
                        order_index: row.order_index,
                    }),
            })
            .collect())
    }
}
