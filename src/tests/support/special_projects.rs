use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::special_project::application::domain::entities::{
    SpecialProject, SpecialProjectChanges,
};
use crate::special_project::application::ports::outgoing::{
    RemovedSpecialProject, SpecialProjectRepository, SpecialProjectRepositoryError,
    UpdatedSpecialProject,
};

#[derive(Default)]
struct State {
    rows: Vec<SpecialProject>,
    fail_with: Option<SpecialProjectRepositoryError>,
}

/// Table stand-in enforcing the unique `sort_order`.
#[derive(Clone, Default)]
pub struct InMemorySpecialProjects {
    state: Arc<Mutex<State>>,
}

impl InMemorySpecialProjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, image_url: &str, sort_order: i32) -> SpecialProject {
        let now = Utc::now();
        let row = SpecialProject {
            id: Uuid::new_v4(),
            image_url: image_url.to_string(),
            sort_order,
            created_at: now,
            updated_at: now,
        };
        self.state.lock().unwrap().rows.push(row.clone());
        row
    }

    pub fn fail_with(&self, err: SpecialProjectRepositoryError) {
        self.state.lock().unwrap().fail_with = Some(err);
    }

    pub fn rows(&self) -> Vec<SpecialProject> {
        let mut rows = self.state.lock().unwrap().rows.clone();
        rows.sort_by_key(|r| r.sort_order);
        rows
    }

    fn check_failure(state: &mut State) -> Result<(), SpecialProjectRepositoryError> {
        match state.fail_with.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn order_taken(state: &State, sort_order: i32, except: Option<Uuid>) -> bool {
        state
            .rows
            .iter()
            .any(|r| r.sort_order == sort_order && Some(r.id) != except)
    }
}

fn duplicate() -> SpecialProjectRepositoryError {
    SpecialProjectRepositoryError::DuplicateOrdering("sort_order".to_string())
}

#[async_trait]
impl SpecialProjectRepository for InMemorySpecialProjects {
    async fn list(&self) -> Result<Vec<SpecialProject>, SpecialProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failure(&mut state)?;
        let mut rows = state.rows.clone();
        rows.sort_by_key(|r| r.sort_order);
        Ok(rows)
    }

    async fn max_sort_order(&self) -> Result<Option<i32>, SpecialProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failure(&mut state)?;
        Ok(state.rows.iter().map(|r| r.sort_order).max())
    }

    async fn insert(
        &self,
        image_url: &str,
        sort_order: i32,
    ) -> Result<SpecialProject, SpecialProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failure(&mut state)?;
        if Self::order_taken(&state, sort_order, None) {
            return Err(duplicate());
        }

        let now = Utc::now();
        let row = SpecialProject {
            id: Uuid::new_v4(),
            image_url: image_url.to_string(),
            sort_order,
            created_at: now,
            updated_at: now,
        };
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &SpecialProjectChanges,
    ) -> Result<UpdatedSpecialProject, SpecialProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failure(&mut state)?;
        if let Some(order) = changes.sort_order {
            if Self::order_taken(&state, order, Some(id)) {
                return Err(duplicate());
            }
        }

        let row = state
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(SpecialProjectRepositoryError::NotFound)?;
        let previous_image_url = row.image_url.clone();
        if let Some(url) = &changes.image_url {
            row.image_url = url.clone();
        }
        if let Some(order) = changes.sort_order {
            row.sort_order = order;
        }
        row.updated_at = Utc::now();

        Ok(UpdatedSpecialProject {
            project: row.clone(),
            previous_image_url,
        })
    }

    async fn delete(&self, id: Uuid) -> Result<RemovedSpecialProject, SpecialProjectRepositoryError> {
        let mut state = self.state.lock().unwrap();
        Self::check_failure(&mut state)?;
        let pos = state
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(SpecialProjectRepositoryError::NotFound)?;
        let row = state.rows.remove(pos);

        Ok(RemovedSpecialProject {
            id: row.id,
            image_url: row.image_url,
        })
    }
}
