/// A file that still has to be uploaded before it can be referenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Already in the object store.
    Remote(String),
    Pending(LocalFile),
}

/// Key used to spot repeats inside one submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryIdentity {
    Url(String),
    LocalFile { file_name: String, size: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryEntry {
    pub source: ImageSource,
    pub alt_text: String,
    /// Advisory position within the submitted batch. Never stored.
    pub order_hint: Option<i32>,
}

impl GalleryEntry {
    pub fn remote(url: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            source: ImageSource::Remote(url.into().trim().to_string()),
            alt_text: alt_text.into(),
            order_hint: None,
        }
    }

    pub fn pending(file: LocalFile, alt_text: impl Into<String>) -> Self {
        Self {
            source: ImageSource::Pending(file),
            alt_text: alt_text.into(),
            order_hint: None,
        }
    }

    pub fn with_hint(mut self, hint: i32) -> Self {
        self.order_hint = Some(hint);
        self
    }

    pub fn identity(&self) -> EntryIdentity {
        match &self.source {
            ImageSource::Remote(url) => EntryIdentity::Url(url.clone()),
            ImageSource::Pending(file) => EntryIdentity::LocalFile {
                file_name: file.file_name.clone(),
                size: file.bytes.len(),
            },
        }
    }

    pub fn remote_url(&self) -> Option<&str> {
        match &self.source {
            ImageSource::Remote(url) => Some(url),
            ImageSource::Pending(_) => None,
        }
    }
}

/// What a caller submits for one parent: an optional primary image plus
/// extra gallery images.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryDraft {
    pub primary: Option<GalleryEntry>,
    pub extras: Vec<GalleryEntry>,
}

impl GalleryDraft {
    pub fn new(primary: Option<GalleryEntry>, extras: Vec<GalleryEntry>) -> Self {
        Self { primary, extras }
    }

    pub fn len(&self) -> usize {
        self.extras.len() + usize::from(self.primary.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Primary first, then extras stable-sorted by hint; unhinted extras keep
    /// their relative order after the hinted ones.
    pub fn into_ordered(self) -> Vec<GalleryEntry> {
        let mut extras = self.extras;
        extras.sort_by_key(|e| (e.order_hint.is_none(), e.order_hint.unwrap_or_default()));

        self.primary.into_iter().chain(extras).collect()
    }
}
