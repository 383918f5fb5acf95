use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::ParentType;

// ============================================================================
// Validation errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn summarize(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Field-level caller errors, collected rather than failing on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("validation failed: {}", summarize(.fields))]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.fields.extend(other.fields);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

// ============================================================================
// Parent scalar fields
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ku: String,
    #[serde(default)]
    pub ar: String,
}

impl LocalizedText {
    fn languages(&self) -> [(&'static str, &str); 3] {
        [
            ("en", self.en.as_str()),
            ("ku", self.ku.as_str()),
            ("ar", self.ar.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParentFields {
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
}

impl ParentFields {
    pub const MAX_TITLE_LEN: usize = 200;
    pub const MAX_DESCRIPTION_LEN: usize = 5000;

    pub fn validate(&self, parent_type: ParentType) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.en.trim().is_empty() {
            errors.push("title.en", "English title is required");
        }
        for (lang, text) in self.title.languages() {
            if text.chars().count() > Self::MAX_TITLE_LEN {
                errors.push(
                    format!("title.{lang}"),
                    format!("must be at most {} characters", Self::MAX_TITLE_LEN),
                );
            }
        }
        for (lang, text) in self.description.languages() {
            if text.chars().count() > Self::MAX_DESCRIPTION_LEN {
                errors.push(
                    format!("description.{lang}"),
                    format!("must be at most {} characters", Self::MAX_DESCRIPTION_LEN),
                );
            }
        }

        if parent_type == ParentType::Event && self.event_date.is_none() {
            errors.push("event_date", "Events require a date");
        }

        errors.into_result()
    }
}
