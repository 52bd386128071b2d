//! Cover image storage on the local filesystem.
//!
//! Files live in `<upload_dir>/covers/` and are served by the static `/uploads` route,
//! so the stored public path is `/uploads/covers/<file>`.

use std::path::{Path, PathBuf};

use chrono::Utc;
use dioxus_logger::tracing;

use crate::server::error::upload::UploadError;

/// Largest accepted cover, 5 MiB.
pub const MAX_COVER_BYTES: usize = 5 * 1024 * 1024;

const PUBLIC_PREFIX: &str = "/uploads/covers/";

/// Accepted image formats, detected from the file's leading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Gif,
    Webp,
}

impl ImageKind {
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(Self::Png),
            [b'G', b'I', b'F', b'8', ..] => Some(Self::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CoverStorage {
    root: PathBuf,
}

impl CoverStorage {
    /// # Arguments
    /// - `upload_dir` - Directory mounted at `/uploads`
    pub fn new(upload_dir: impl AsRef<Path>) -> Self {
        Self {
            root: upload_dir.as_ref().join("covers"),
        }
    }

    /// Creates the covers directory if missing.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.root).await?;

        Ok(())
    }

    /// Validates and writes an uploaded image under a generated name.
    ///
    /// # Arguments
    /// - `content_type` - Declared MIME type, only used in the error message
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Public path such as `/uploads/covers/1700000000000-3f2a.png`
    /// - `Err(UploadError::TooLarge)` - More than [`MAX_COVER_BYTES`]
    /// - `Err(UploadError::UnsupportedType)` - Not a JPEG, PNG, GIF or WebP image
    /// - `Err(UploadError::Io)` - Writing the file failed
    pub async fn save(&self, content_type: Option<&str>, bytes: &[u8]) -> Result<String, UploadError> {
        if bytes.len() > MAX_COVER_BYTES {
            return Err(UploadError::TooLarge {
                size: bytes.len(),
                max: MAX_COVER_BYTES,
            });
        }

        let kind = ImageKind::sniff(bytes).ok_or_else(|| {
            UploadError::UnsupportedType(content_type.unwrap_or("unknown").to_string())
        })?;

        let file_name = format!(
            "{}-{:016x}.{}",
            Utc::now().timestamp_millis(),
            rand::random::<u64>(),
            kind.extension()
        );

        self.ensure_dir().await?;
        tokio::fs::write(self.root.join(&file_name), bytes).await?;

        Ok(format!("{}{}", PUBLIC_PREFIX, file_name))
    }

    /// Deletes a previously stored cover. Failures and foreign paths are logged and ignored.
    pub async fn remove(&self, public_path: &str) {
        let Some(file_name) = public_path.strip_prefix(PUBLIC_PREFIX) else {
            tracing::warn!("Refusing to delete cover outside upload dir: {}", public_path);
            return;
        };
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name.contains("..") {
            tracing::warn!("Refusing to delete suspicious cover path: {}", public_path);
            return;
        }

        if let Err(e) = tokio::fs::remove_file(self.root.join(file_name)).await {
            tracing::warn!("Failed to delete cover {}: {}", public_path, e);
        }
    }

    /// Filesystem path of a stored cover, if the public path belongs to this storage.
    pub fn path_of(&self, public_path: &str) -> Option<PathBuf> {
        public_path
            .strip_prefix(PUBLIC_PREFIX)
            .map(|file_name| self.root.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn sniffs_supported_formats() {
        assert_eq!(ImageKind::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::sniff(PNG), Some(ImageKind::Png));
        assert_eq!(ImageKind::sniff(b"GIF89a......"), Some(ImageKind::Gif));
        assert_eq!(ImageKind::sniff(b"RIFF\x10\x00\x00\x00WEBPVP8 "), Some(ImageKind::Webp));
        assert_eq!(ImageKind::sniff(b"%PDF-1.7"), None);
        assert_eq!(ImageKind::sniff(&[]), None);
    }

    #[tokio::test]
    async fn saves_and_removes_cover() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CoverStorage::new(dir.path());

        let public = storage.save(Some("image/png"), PNG).await.unwrap();
        assert!(public.starts_with("/uploads/covers/"));
        assert!(public.ends_with(".png"));

        let path = storage.path_of(&public).unwrap();
        assert_eq!(tokio::fs::read(&path).await.unwrap(), PNG);

        storage.remove(&public).await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn rejects_non_images_and_large_files() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CoverStorage::new(dir.path());

        assert!(matches!(
            storage.save(Some("text/plain"), b"hello").await,
            Err(UploadError::UnsupportedType(t)) if t == "text/plain"
        ));

        let mut big = PNG.to_vec();
        big.resize(MAX_COVER_BYTES + 1, 0);
        assert!(matches!(
            storage.save(Some("image/png"), &big).await,
            Err(UploadError::TooLarge { .. })
        ));
    }

    #[tokio::test]
    async fn ignores_paths_outside_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CoverStorage::new(dir.path());

        storage.remove("/etc/passwd").await;
        storage.remove("/uploads/covers/../secret").await;
    }
}
