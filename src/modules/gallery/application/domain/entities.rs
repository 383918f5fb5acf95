use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

// ============================================================================
// Parent type / reference
// ============================================================================

/// Discriminator stored in `galleries.parent_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParentType {
    Project,
    Event,
    Product,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown parent type: {0}")]
pub struct UnknownParentType(pub String);

impl ParentType {
    pub const ALL: [ParentType; 3] = [ParentType::Project, ParentType::Event, ParentType::Product];

    pub fn as_i16(self) -> i16 {
        match self {
            ParentType::Project => 0,
            ParentType::Event => 1,
            ParentType::Product => 2,
        }
    }

    pub fn from_i16(value: i16) -> Option<Self> {
        match value {
            0 => Some(ParentType::Project),
            1 => Some(ParentType::Event),
            2 => Some(ParentType::Product),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParentType::Project => "project",
            ParentType::Event => "event",
            ParentType::Product => "product",
        }
    }

    /// Table holding parents of this type.
    pub fn table_name(self) -> &'static str {
        match self {
            ParentType::Project => "projects",
            ParentType::Event => "events",
            ParentType::Product => "products",
        }
    }
}

impl fmt::Display for ParentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParentType {
    type Err = UnknownParentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "project" | "projects" => Ok(ParentType::Project),
            "event" | "events" | "blog" | "blogs" => Ok(ParentType::Event),
            "product" | "products" => Ok(ParentType::Product),
            other => Err(UnknownParentType(other.to_string())),
        }
    }
}

/// Polymorphic owner of a gallery. Every repository call is scoped by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "ParentRefView")]
pub enum ParentRef {
    Project(Uuid),
    Event(Uuid),
    Product(Uuid),
}

impl ParentRef {
    pub fn new(parent_type: ParentType, id: Uuid) -> Self {
        match parent_type {
            ParentType::Project => ParentRef::Project(id),
            ParentType::Event => ParentRef::Event(id),
            ParentType::Product => ParentRef::Product(id),
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            ParentRef::Project(id) | ParentRef::Event(id) | ParentRef::Product(id) => *id,
        }
    }

    pub fn parent_type(&self) -> ParentType {
        match self {
            ParentRef::Project(_) => ParentType::Project,
            ParentRef::Event(_) => ParentType::Event,
            ParentRef::Product(_) => ParentType::Product,
        }
    }
}

impl fmt::Display for ParentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.parent_type(), self.id())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ParentRefView {
    pub parent_type: ParentType,
    pub parent_id: Uuid,
}

impl From<ParentRef> for ParentRefView {
    fn from(parent: ParentRef) -> Self {
        Self {
            parent_type: parent.parent_type(),
            parent_id: parent.id(),
        }
    }
}

// ============================================================================
// Gallery rows
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub id: Uuid,
    pub parent: ParentRef,
    pub image_url: String,
    pub alt_text: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

/// Row content before insertion; the index comes from a `Sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGalleryItem {
    pub image_url: String,
    pub alt_text: String,
}

impl NewGalleryItem {
    pub fn new(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            alt_text: alt_text.into(),
        }
    }
}

// ============================================================================
// Cover listing
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CoverImage {
    pub image_url: String,
    pub alt_text: String,
    pub order_index: i32,
}

/// One parent with its lowest-ordered gallery row, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentCover {
    pub parent: ParentRef,
    pub title: String,
    pub primary_image_url: Option<String>,
    pub cover: Option<CoverImage>,
}

/// LIMIT/OFFSET pair, validated before it reaches SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: u64,
    offset: i64,
}

impl Page {
    pub const MAX_LIMIT: u64 = 100;

    pub fn new(limit: u64, offset: u64) -> Result<Self, String> {
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(format!("limit must be between 1 and {}", Self::MAX_LIMIT));
        }
        let offset =
            i64::try_from(offset).map_err(|_| format!("offset must be at most {}", i64::MAX))?;
        Ok(Self { limit, offset })
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset.unsigned_abs()
    }

    /// OFFSET as bound into SQL; never negative.
    pub fn sql_offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}
