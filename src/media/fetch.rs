use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::ImageSettings;

/// Longest edge of the image shown in the detail view
const WORKING_SIZE: u32 = 1280;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Error)]
pub enum MediaError {
    #[error("could not build HTTP client: {0}")]
    Client(String),
    #[error("request for {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("image task failed: {0}")]
    Join(String),
}

/// A decoded catalog image, ready for the image widget
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Grid card tier
    pub thumbnail: Handle,
    /// Detail view tier
    pub working: Handle,
    /// Pixels of the working tier, kept for zoom crops
    pub pixels: Arc<RgbaImage>,
}

/// Downloads images and keeps a byte cache on disk.
/// Cheap to clone: every fetch task gets its own copy.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    cache_dir: PathBuf,
    thumbnail_size: u32,
}

impl Fetcher {
    pub fn new(settings: &ImageSettings) -> Result<Self, MediaError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("rug-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MediaError::Client(e.to_string()))?;

        Ok(Self {
            client,
            cache_dir: settings.resolved_cache_dir(),
            thumbnail_size: settings.thumbnail_size.max(1),
        })
    }

    /// Fetch (or read from cache) and decode one image.
    ///
    /// Only bytes that decoded are written to the cache. A cached file that
    /// no longer decodes is removed and the image downloaded again.
    pub async fn load(self, url: String) -> Result<LoadedImage, MediaError> {
        let cache_path = self.cache_dir.join(cache_file_name(&url));

        if let Ok(bytes) = tokio::fs::read(&cache_path).await {
            tracing::trace!(%url, "image cache hit");
            match self.decode_off_thread(&url, bytes).await {
                Err(MediaError::Decode { reason, .. }) => {
                    tracing::warn!(%url, %reason, "dropping unreadable cache entry");
                    if let Err(err) = tokio::fs::remove_file(&cache_path).await {
                        tracing::warn!(%err, path = %cache_path.display(), "could not remove cache entry");
                    }
                }
                other => return other,
            }
        }

        let bytes = self.download(&url).await?;
        let loaded = self.decode_off_thread(&url, bytes.clone()).await?;
        store_in_cache(&self.cache_dir, &cache_path, &bytes).await;
        Ok(loaded)
    }

    async fn decode_off_thread(&self, url: &str, bytes: Vec<u8>) -> Result<LoadedImage, MediaError> {
        let url = url.to_string();
        let thumbnail_size = self.thumbnail_size;
        tokio::task::spawn_blocking(move || decode(&url, &bytes, thumbnail_size))
            .await
            .map_err(|e| MediaError::Join(e.to_string()))?
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, MediaError> {
        let fetch_err = |e: reqwest::Error| MediaError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(MediaError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(fetch_err)?;
        tracing::debug!(%url, kb = bytes.len() / 1024, "image downloaded");
        Ok(bytes.to_vec())
    }
}

/// Cache writes are best effort; a failure only costs a re-download next session.
/// Bytes go to a temporary file first so a reader never sees a partial write.
async fn store_in_cache(dir: &Path, path: &Path, bytes: &[u8]) {
    if let Err(err) = tokio::fs::create_dir_all(dir).await {
        tracing::warn!(%err, dir = %dir.display(), "could not create image cache");
        return;
    }

    let partial = path.with_extension(format!("{}.part", std::process::id()));
    let written = match tokio::fs::write(&partial, bytes).await {
        Ok(()) => tokio::fs::rename(&partial, path).await,
        Err(err) => Err(err),
    };
    if let Err(err) = written {
        tracing::warn!(%err, path = %path.display(), "could not cache image");
        let _ = tokio::fs::remove_file(&partial).await;
    }
}

/// Decode once and derive both display tiers
fn decode(url: &str, bytes: &[u8], thumbnail_size: u32) -> Result<LoadedImage, MediaError> {
    let img = image::load_from_memory(bytes).map_err(|e| MediaError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let working = if img.width() > WORKING_SIZE || img.height() > WORKING_SIZE {
        img.resize(WORKING_SIZE, WORKING_SIZE, FilterType::Lanczos3)
    } else {
        img
    };
    let thumbnail = working
        .resize(thumbnail_size, thumbnail_size, FilterType::Lanczos3)
        .to_rgba8();
    let working = working.to_rgba8();

    Ok(LoadedImage {
        thumbnail: rgba_handle(&thumbnail),
        working: rgba_handle(&working),
        pixels: Arc::new(working),
    })
}

pub(crate) fn rgba_handle(pixels: &RgbaImage) -> Handle {
    Handle::from_rgba(pixels.width(), pixels.height(), pixels.as_raw().clone())
}

/// Stable cache name for an image URL: the hex SHA-256 of the full URL
pub fn cache_file_name(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{:x}.img", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, image::Rgba([200, 120, 40, 255])));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_cache_file_name_is_stable_and_short() {
        let url = "https://tbrhub.com/aladdinsride/images/160x230/1-1.jpg";
        assert_eq!(cache_file_name(url), cache_file_name(url));
        // 64 hex digits plus extension, whatever the URL length
        assert_eq!(cache_file_name(url).len(), 68);
        assert_eq!(cache_file_name(&format!("https://a.b/{}", "x".repeat(1000))).len(), 68);
    }

    #[test]
    fn test_cache_file_names_do_not_collide() {
        assert_ne!(cache_file_name("https://a.b/a/b.jpg"), cache_file_name("https://a.b/a_b.jpg"));
        assert_ne!(cache_file_name("https://a.b/c.jpg?v=1"), cache_file_name("https://a.b/c.jpg?v=2"));
        assert_ne!(cache_file_name("http://a.b/c.jpg"), cache_file_name("https://a.b/c.jpg"));
    }

    #[test]
    fn test_decode_builds_both_tiers() {
        let loaded = decode("mem://rug.png", &png_bytes(2000, 1000), 256).unwrap();
        assert_eq!(loaded.pixels.width(), WORKING_SIZE);
        assert_eq!(loaded.pixels.height(), WORKING_SIZE / 2);
    }

    #[test]
    fn test_decode_keeps_small_images() {
        let loaded = decode("mem://rug.png", &png_bytes(300, 200), 64).unwrap();
        assert_eq!((loaded.pixels.width(), loaded.pixels.height()), (300, 200));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode("mem://broken.jpg", b"not an image", 256).unwrap_err();
        assert!(matches!(err, MediaError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_load_reads_from_cache() {
        let dir = tempfile::tempdir().unwrap();
        let url = "https://example.invalid/rug.png".to_string();
        std::fs::write(dir.path().join(cache_file_name(&url)), png_bytes(40, 30)).unwrap();

        let settings = ImageSettings {
            cache_dir: Some(dir.path().to_path_buf()),
            ..ImageSettings::default()
        };
        let loaded = Fetcher::new(&settings).unwrap().load(url).await.unwrap();
        assert_eq!(loaded.pixels.width(), 40);
    }

    #[tokio::test]
    async fn test_unreadable_cache_entry_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        // Unresolvable host: the re-download fails without touching the network
        let url = "https://rug.invalid/broken.png".to_string();
        let cached = dir.path().join(cache_file_name(&url));
        std::fs::write(&cached, b"<html>not an image</html>").unwrap();

        let settings = ImageSettings {
            cache_dir: Some(dir.path().to_path_buf()),
            ..ImageSettings::default()
        };
        let fetcher = Fetcher::new(&settings).unwrap();

        let err = fetcher.clone().load(url.clone()).await.unwrap_err();
        assert!(!matches!(err, MediaError::Decode { .. }), "got {:?}", err);
        assert!(!cached.exists());

        // A later session does not find the bad bytes again
        let err = fetcher.load(url).await.unwrap_err();
        assert!(!matches!(err, MediaError::Decode { .. }), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_store_in_cache_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join(cache_file_name("https://a.b/c.png"));

        store_in_cache(target.parent().unwrap(), &target, &png_bytes(4, 4)).await;

        assert_eq!(std::fs::read(&target).unwrap(), png_bytes(4, 4));
        let entries = std::fs::read_dir(target.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
