//! # Mailsmith Uploads
//!
//! Image-service contract for the editor: hand in raw image bytes plus the
//! original filename, get back a retrievable URL or a human-readable
//! rejection. The editor stores whatever URL string comes back verbatim in
//! the relevant block property and performs no further validation.
//!
//! The store shipped here is a stub that never persists a file — it mints a
//! URL under `/uploads/` and remembers the bytes in memory. Real deployments
//! swap in their own [`ImageStore`].

mod validate;

pub use validate::{validate_image, ImageFormat, MAX_IMAGE_BYTES};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Why an upload was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("File is empty")]
    Empty,

    #[error("File size must be less than 5MB")]
    TooLarge,

    #[error("File must be JPEG, PNG, GIF, or WebP")]
    UnsupportedType,
}

/// A successfully stored image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    /// Retrievable URL, stored verbatim in block properties
    pub url: String,

    /// Filename the store assigned
    pub filename: String,

    /// Filename the user uploaded under
    pub original_name: String,
}

/// Contract between the editor and whatever stores images
pub trait ImageStore {
    fn store(&mut self, bytes: &[u8], original_name: &str) -> Result<UploadedImage, UploadError>;
}

/// In-memory stub store; never touches the filesystem
#[derive(Debug, Default)]
pub struct MemoryStore {
    count: u32,
    images: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images held
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Fetch stored bytes back by URL
    pub fn get(&self, url: &str) -> Option<&[u8]> {
        self.images.get(url).map(|v| v.as_slice())
    }
}

impl ImageStore for MemoryStore {
    fn store(&mut self, bytes: &[u8], original_name: &str) -> Result<UploadedImage, UploadError> {
        let format = validate_image(bytes)?;

        self.count += 1;
        let filename = format!("{}.{}", self.count, format.extension());
        let url = format!("/uploads/{filename}");
        debug!(url = %url, size = bytes.len(), "stored image");

        self.images.insert(url.clone(), bytes.to_vec());
        Ok(UploadedImage {
            url,
            filename,
            original_name: original_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid-looking payloads: magic bytes plus padding
    fn png_bytes() -> Vec<u8> {
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
        bytes.extend([0u8; 16]);
        bytes
    }

    #[test]
    fn test_store_accepts_png() {
        let mut store = MemoryStore::new();
        let uploaded = store.store(&png_bytes(), "photo.png").unwrap();

        assert!(uploaded.url.starts_with("/uploads/"));
        assert!(uploaded.url.ends_with(".png"));
        assert_eq!(uploaded.original_name, "photo.png");
        assert_eq!(store.get(&uploaded.url), Some(png_bytes().as_slice()));
    }

    #[test]
    fn test_store_rejects_empty_file() {
        let mut store = MemoryStore::new();
        assert_eq!(store.store(&[], "nothing.png"), Err(UploadError::Empty));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_rejects_unknown_format() {
        let mut store = MemoryStore::new();
        let err = store.store(b"%PDF-1.4 not an image", "doc.pdf");
        assert_eq!(err, Err(UploadError::UnsupportedType));
    }

    #[test]
    fn test_urls_are_unique() {
        let mut store = MemoryStore::new();
        let a = store.store(&png_bytes(), "a.png").unwrap();
        let b = store.store(&png_bytes(), "b.png").unwrap();
        assert_ne!(a.url, b.url);
        assert_eq!(store.len(), 2);
    }
}
