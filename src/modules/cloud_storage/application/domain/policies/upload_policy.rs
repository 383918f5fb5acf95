use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadPolicyViolation {
    #[error("file is empty")]
    EmptyFile,

    #[error("file exceeds the {max_bytes} byte limit")]
    TooLarge { max_bytes: u64 },

    #[error("file name is empty")]
    EmptyFileName,

    #[error("file name exceeds {max_len} characters")]
    FileNameTooLong { max_len: usize },

    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024; // 10MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] = &[
        "image/jpeg",
        "image/png",
        "image/webp",
        "image/gif",
        "image/avif",
        "image/svg+xml",
        "audio/mpeg",
    ];

    /// Env var: `UPLOAD_MAX_FILE_SIZE_BYTES`, falls back to 10MB.
    pub fn from_env() -> Self {
        let max_file_size_bytes = std::env::var("UPLOAD_MAX_FILE_SIZE_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    pub fn check(
        &self,
        file_name: &str,
        content_type: &str,
        size: u64,
    ) -> Result<(), UploadPolicyViolation> {
        let file_name = file_name.trim();
        if file_name.is_empty() {
            return Err(UploadPolicyViolation::EmptyFileName);
        }
        if file_name.chars().count() > self.max_file_name_len {
            return Err(UploadPolicyViolation::FileNameTooLong {
                max_len: self.max_file_name_len,
            });
        }

        if size == 0 {
            return Err(UploadPolicyViolation::EmptyFile);
        }
        if size > self.max_file_size_bytes {
            return Err(UploadPolicyViolation::TooLarge {
                max_bytes: self.max_file_size_bytes,
            });
        }

        let content_type = content_type.trim().to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&content_type.as_str()) {
            return Err(UploadPolicyViolation::UnsupportedContentType(content_type));
        }

        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}
