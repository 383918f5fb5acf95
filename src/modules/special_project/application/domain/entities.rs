use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::gallery::application::domain::{
    outcome::CleanupReport, parent_fields::ValidationErrors,
};

/// A single showcased image with a globally unique position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SpecialProject {
    pub id: Uuid,
    pub image_url: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpecialProject {
    pub image_url: String,
    /// Next free position when absent.
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecialProjectChanges {
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
}

impl SpecialProjectChanges {
    pub fn is_empty(&self) -> bool {
        self.image_url.is_none() && self.sort_order.is_none()
    }
}

fn check_image_url(url: &str, errors: &mut ValidationErrors) {
    if url.trim().is_empty() {
        errors.push("image_url", "must not be blank");
    }
}

fn check_sort_order(sort_order: i32, errors: &mut ValidationErrors) {
    if sort_order < 0 {
        errors.push("sort_order", "must be zero or greater");
    }
}

impl NewSpecialProject {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_image_url(&self.image_url, &mut errors);
        if let Some(order) = self.sort_order {
            check_sort_order(order, &mut errors);
        }
        errors.into_result()
    }
}

impl SpecialProjectChanges {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if self.is_empty() {
            errors.push("body", "nothing to update");
        }
        if let Some(url) = &self.image_url {
            check_image_url(url, &mut errors);
        }
        if let Some(order) = self.sort_order {
            check_sort_order(order, &mut errors);
        }
        errors.into_result()
    }
}

/// Committed row change plus the best-effort removal of the image it
/// replaced or dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SpecialProjectWriteOutcome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<SpecialProject>,
    pub cleanup: CleanupReport,
}

/// Position for the next insert: one past the highest, or zero when empty.
pub fn next_sort_order_after(max: Option<i32>) -> i32 {
    max.map_or(0, |m| m.saturating_add(1))
}
