use crate::cloud_storage::application::domain::policies::UploadPolicy;
use crate::gallery::application::domain::{
    gallery_entry::{GalleryDraft, GalleryEntry, ImageSource},
    parent_fields::ValidationErrors,
};

#[derive(Debug, Clone)]
pub struct GalleryPolicy {
    pub max_entries: usize,
    pub max_alt_text_len: usize,
    /// Run the consistency audit after update/delete commits.
    pub audit_after_write: bool,
    pub upload: UploadPolicy,
}

impl GalleryPolicy {
    pub const DEFAULT_MAX_ENTRIES: usize = 50;
    pub const DEFAULT_MAX_ALT_TEXT_LEN: usize = 500;

    /// Width of `galleries.alt_text`; longer limits are clamped to it.
    pub const ALT_TEXT_COLUMN_LEN: usize = 500;

    /// Env vars: `GALLERY_MAX_ENTRIES`, `GALLERY_MAX_ALT_TEXT_LEN`,
    /// `GALLERY_AUDIT_AFTER_WRITE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok(), UploadPolicy::from_env())
    }

    fn from_lookup<F>(lookup: F, upload: UploadPolicy) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let usize_var = |name: &str, fallback: usize| {
            lookup(name)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(fallback)
        };

        let audit_after_write = lookup("GALLERY_AUDIT_AFTER_WRITE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            max_entries: usize_var("GALLERY_MAX_ENTRIES", Self::DEFAULT_MAX_ENTRIES),
            max_alt_text_len: usize_var("GALLERY_MAX_ALT_TEXT_LEN", Self::DEFAULT_MAX_ALT_TEXT_LEN)
                .min(Self::ALT_TEXT_COLUMN_LEN),
            audit_after_write,
            upload,
        }
    }

    pub fn validate_draft(&self, draft: &GalleryDraft) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if draft.len() > self.max_entries {
            errors.push(
                "gallery",
                format!("at most {} images are allowed", self.max_entries),
            );
        }

        if let Some(primary) = &draft.primary {
            self.check_entry("primary_image", primary, &mut errors);
        }
        for (i, entry) in draft.extras.iter().enumerate() {
            self.check_entry(&format!("gallery[{i}]"), entry, &mut errors);
        }

        errors.into_result()
    }

    fn check_entry(&self, field: &str, entry: &GalleryEntry, errors: &mut ValidationErrors) {
        match &entry.source {
            ImageSource::Remote(url) if url.is_empty() => {
                errors.push(format!("{field}.image_url"), "image URL is required");
            }
            ImageSource::Remote(_) => {}
            ImageSource::Pending(file) => {
                if let Err(violation) = self.upload.check(
                    &file.file_name,
                    &file.content_type,
                    file.bytes.len() as u64,
                ) {
                    errors.push(format!("{field}.file"), violation.to_string());
                }
            }
        }

        if entry.alt_text.chars().count() > self.max_alt_text_len {
            errors.push(
                format!("{field}.alt_text"),
                format!("must be at most {} characters", self.max_alt_text_len),
            );
        }
    }
}

impl Default for GalleryPolicy {
    fn default() -> Self {
        Self {
            max_entries: Self::DEFAULT_MAX_ENTRIES,
            max_alt_text_len: Self::DEFAULT_MAX_ALT_TEXT_LEN,
            audit_after_write: false,
            upload: UploadPolicy::default(),
        }
    }
}
