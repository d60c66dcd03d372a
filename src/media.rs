use std::collections::HashMap;

/// Maximum accepted upload size, before the host cap is applied.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Accepted image dimensions, per axis.
pub const MIN_DIMENSION: u32 = 100;
pub const MAX_DIMENSION: u32 = 5000;

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/webp",
    "image/avif",
    "image/gif",
];

/// The external media library: resolves persisted image references to URLs.
pub trait MediaLibrary {
    fn image_url(&self, image_id: u64) -> Option<String>;
}

pub fn allowed_mime_type(mime: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime)
}

/// Effective upload ceiling: the lower of the plugin cap and the host cap.
pub fn max_upload_bytes(host_cap: u64) -> u64 {
    MAX_UPLOAD_BYTES.min(host_cap)
}

pub fn valid_file_size(size: u64, host_cap: u64) -> bool {
    size > 0 && size <= max_upload_bytes(host_cap)
}

pub fn valid_dimensions(width: u32, height: u32) -> bool {
    (MIN_DIMENSION..=MAX_DIMENSION).contains(&width)
        && (MIN_DIMENSION..=MAX_DIMENSION).contains(&height)
}

/// In-memory media library used by tests and the `slider-check` CLI.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedia {
    urls: HashMap<u64, String>,
}

impl MemoryMedia {
    pub fn new() -> MemoryMedia {
        MemoryMedia::default()
    }

    pub fn from_map(urls: HashMap<u64, String>) -> MemoryMedia {
        MemoryMedia { urls }
    }

    pub fn insert(&mut self, image_id: u64, url: impl Into<String>) {
        self.urls.insert(image_id, url.into());
    }
}

impl MediaLibrary for MemoryMedia {
    fn image_url(&self, image_id: u64) -> Option<String> {
        self.urls.get(&image_id).cloned()
    }
}
