use rand::{distributions::Alphanumeric, Rng};
use regex::Regex;

static FILES_SEGMENT_RE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"(?i)/files/([a-f0-9-]+)").unwrap());

static UUID_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)([a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12})").unwrap()
});

static BARE_ID_RE: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

const RANDOM_SUFFIX_LEN: usize = 13;

/// Resolves a gallery locator (store id, proxy path or absolute URL) to the
/// store's file id.
///
/// - URL or path: the segment after `/files/`, else the first UUID in it.
/// - Anything else: the value itself when it is a bare id, else the first UUID.
pub fn extract_file_id(locator: &str) -> Option<String> {
    let locator = locator.trim();
    if locator.is_empty() {
        return None;
    }

    let first_uuid = || UUID_RE.captures(locator).map(|c| c[1].to_string());

    if locator.starts_with("http") || locator.starts_with('/') {
        return FILES_SEGMENT_RE
            .captures(locator)
            .map(|c| c[1].to_string())
            .or_else(first_uuid);
    }

    if BARE_ID_RE.is_match(locator) {
        return Some(locator.to_string());
    }

    first_uuid()
}

/// Public URL under which a stored file is served by this service.
pub fn public_file_url(prefix: &str, file_id: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), file_id)
}

/// `{timestamp}-{random}-{base}{ext}`; keeps retried uploads from colliding
/// on the remote side.
pub fn unique_upload_name(original: &str, timestamp_millis: i64, random: &str) -> String {
    let original = original.trim();
    let (base, ext) = match original.rfind('.') {
        Some(pos) if pos > 0 => (&original[..pos], &original[pos..]),
        _ => (original, ""),
    };

    let base: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    let base = if base.is_empty() { "file".to_string() } else { base };

    let ext: String = ext
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect::<String>()
        .to_ascii_lowercase();

    format!("{timestamp_millis}-{random}-{base}{ext}")
}

pub fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}
