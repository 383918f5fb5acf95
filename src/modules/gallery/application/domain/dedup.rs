use std::collections::HashSet;
use std::hash::Hash;

use super::entities::NewGalleryItem;
use super::gallery_entry::GalleryEntry;

/// Stable filter keeping the first item for every key.
pub fn first_wins<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}

/// Pre-upload pass: repeated URLs or repeated local files (same name and size).
pub fn deduplicate(entries: Vec<GalleryEntry>) -> Vec<GalleryEntry> {
    first_wins(entries, GalleryEntry::identity)
}

/// Post-upload pass: once every entry has a URL.
pub fn deduplicate_items(items: Vec<NewGalleryItem>) -> Vec<NewGalleryItem> {
    first_wins(items, |item| item.image_url.clone())
}
