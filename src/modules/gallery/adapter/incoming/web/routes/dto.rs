use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::gallery::application::domain::{
    gallery_entry::{GalleryDraft, GalleryEntry, LocalFile},
    parent_fields::{ParentFields, ValidationErrors},
};

/// A file carried inline; `data` is standard base64.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LocalFileRequest {
    pub file_name: String,
    pub content_type: String,
    pub data: String,
}

/// Exactly one of `image_url` and `file` must be set.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct GalleryEntryRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub file: Option<LocalFileRequest>,
    #[serde(default)]
    pub alt_text: String,
    /// Position hint within this submission only.
    #[serde(default)]
    pub order_index: Option<i32>,
}

impl GalleryEntryRequest {
    fn into_entry(self, field: &str, errors: &mut ValidationErrors) -> Option<GalleryEntry> {
        let entry = match (self.image_url, self.file) {
            (Some(url), None) => GalleryEntry::remote(url, self.alt_text),
            (None, Some(file)) => match STANDARD.decode(file.data.trim()) {
                Ok(bytes) => GalleryEntry::pending(
                    LocalFile {
                        file_name: file.file_name,
                        content_type: file.content_type,
                        bytes,
                    },
                    self.alt_text,
                ),
                Err(e) => {
                    errors.push(format!("{field}.file.data"), format!("invalid base64: {e}"));
                    return None;
                }
            },
            (Some(_), Some(_)) => {
                errors.push(field, "set either image_url or file, not both");
                return None;
            }
            (None, None) => {
                errors.push(field, "image_url or file is required");
                return None;
            }
        };

        Some(match self.order_index {
            Some(hint) => entry.with_hint(hint),
            None => entry,
        })
    }
}

fn build_draft(
    primary_image: Option<GalleryEntryRequest>,
    gallery: Vec<GalleryEntryRequest>,
) -> Result<GalleryDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let primary = primary_image.and_then(|p| p.into_entry("primary_image", &mut errors));
    let extras: Vec<GalleryEntry> = gallery
        .into_iter()
        .enumerate()
        .filter_map(|(i, e)| e.into_entry(&format!("gallery[{i}]"), &mut errors))
        .collect();

    errors.into_result()?;
    Ok(GalleryDraft::new(primary, extras))
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateParentRequest {
    pub fields: ParentFields,
    #[serde(default)]
    pub primary_image: Option<GalleryEntryRequest>,
    #[serde(default)]
    pub gallery: Vec<GalleryEntryRequest>,
}

impl CreateParentRequest {
    pub fn into_parts(self) -> Result<(ParentFields, GalleryDraft), ValidationErrors> {
        let draft = build_draft(self.primary_image, self.gallery)?;
        Ok((self.fields, draft))
    }
}

/// Full replacement of the gallery; `fields` is rewritten only when sent.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateParentRequest {
    #[serde(default)]
    pub fields: Option<ParentFields>,
    #[serde(default)]
    pub primary_image: Option<GalleryEntryRequest>,
    #[serde(default)]
    pub gallery: Vec<GalleryEntryRequest>,
}

impl UpdateParentRequest {
    pub fn into_parts(self) -> Result<(Option<ParentFields>, GalleryDraft), ValidationErrors> {
        let draft = build_draft(self.primary_image, self.gallery)?;
        Ok((self.fields, draft))
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct CoversQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
