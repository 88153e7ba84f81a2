use std::collections::HashMap;

use super::fetch::{LoadedImage, MediaError};

/// Load state of one image URL
#[derive(Debug, Clone)]
enum Slot {
    Loading,
    Ready(LoadedImage),
    Failed,
}

/// What the view should draw for a URL
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    Ready(&'a LoadedImage),
    /// Still downloading (the image or its placeholder)
    Pending,
    /// Both the image and the placeholder failed
    Unavailable,
}

/// Per-session image slots.
///
/// Each URL is requested at most once; a failed URL is never retried and
/// is drawn with the placeholder image instead.
#[derive(Debug)]
pub struct ImageStore {
    slots: HashMap<String, Slot>,
    placeholder_url: String,
}

impl ImageStore {
    pub fn new(placeholder_url: impl Into<String>) -> Self {
        Self {
            slots: HashMap::new(),
            placeholder_url: placeholder_url.into(),
        }
    }

    /// Mark unseen URLs as loading and return them; the caller starts the fetches
    pub fn request<'a, I>(&mut self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut started = Vec::new();
        for url in urls {
            if url.is_empty() || self.slots.contains_key(url) {
                continue;
            }
            self.slots.insert(url.to_string(), Slot::Loading);
            started.push(url.to_string());
        }
        started
    }

    /// Record a finished fetch.
    ///
    /// Returns the placeholder URL when this failure is the first one that needs it.
    pub fn finish(&mut self, url: String, result: Result<LoadedImage, MediaError>) -> Option<String> {
        match result {
            Ok(image) => {
                self.slots.insert(url, Slot::Ready(image));
                None
            }
            Err(err) => {
                tracing::warn!(%err, "image unavailable, using placeholder");
                let is_placeholder = url == self.placeholder_url;
                self.slots.insert(url, Slot::Failed);
                if is_placeholder {
                    return None;
                }
                let placeholder = self.placeholder_url.clone();
                self.request([placeholder.as_str()]).into_iter().next()
            }
        }
    }

    pub fn resolve(&self, url: &str) -> Resolved<'_> {
        match self.slots.get(url) {
            Some(Slot::Ready(image)) => Resolved::Ready(image),
            Some(Slot::Failed) => match self.slots.get(&self.placeholder_url) {
                Some(Slot::Ready(image)) => Resolved::Ready(image),
                Some(Slot::Loading) => Resolved::Pending,
                _ => Resolved::Unavailable,
            },
            Some(Slot::Loading) | None => Resolved::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::fetch::rgba_handle;
    use image::RgbaImage;
    use std::sync::Arc;

    const PLACEHOLDER: &str = "https://img.test/placeholder.jpg";

    fn loaded(width: u32) -> LoadedImage {
        let pixels = RgbaImage::new(width, 1);
        LoadedImage {
            thumbnail: rgba_handle(&pixels),
            working: rgba_handle(&pixels),
            pixels: Arc::new(pixels),
        }
    }

    fn failure(url: &str) -> MediaError {
        MediaError::Status {
            url: url.to_string(),
            status: 404,
        }
    }

    #[test]
    fn test_request_is_deduplicated() {
        let mut store = ImageStore::new(PLACEHOLDER);
        let first = store.request(["a.jpg", "b.jpg", "a.jpg"]);
        assert_eq!(first, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert!(store.request(["a.jpg", ""]).is_empty());
        assert!(matches!(store.resolve("a.jpg"), Resolved::Pending));
    }

    #[test]
    fn test_ready_image_resolves() {
        let mut store = ImageStore::new(PLACEHOLDER);
        store.request(["a.jpg"]);
        assert!(store.finish("a.jpg".into(), Ok(loaded(7))).is_none());
        match store.resolve("a.jpg") {
            Resolved::Ready(image) => assert_eq!(image.pixels.width(), 7),
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_substitutes_placeholder_once() {
        let mut store = ImageStore::new(PLACEHOLDER);
        store.request(["a.jpg", "b.jpg"]);

        assert_eq!(store.finish("a.jpg".into(), Err(failure("a.jpg"))), Some(PLACEHOLDER.to_string()));
        assert_eq!(store.finish("b.jpg".into(), Err(failure("b.jpg"))), None);
        assert!(matches!(store.resolve("a.jpg"), Resolved::Pending));

        store.finish(PLACEHOLDER.into(), Ok(loaded(3)));
        match store.resolve("b.jpg") {
            Resolved::Ready(image) => assert_eq!(image.pixels.width(), 3),
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_url_is_not_retried() {
        let mut store = ImageStore::new(PLACEHOLDER);
        store.request(["a.jpg"]);
        store.finish("a.jpg".into(), Err(failure("a.jpg")));
        assert!(store.request(["a.jpg"]).is_empty());
    }

    #[test]
    fn test_placeholder_failure_is_unavailable() {
        let mut store = ImageStore::new(PLACEHOLDER);
        store.request(["a.jpg"]);
        store.finish("a.jpg".into(), Err(failure("a.jpg")));
        assert_eq!(store.finish(PLACEHOLDER.into(), Err(failure(PLACEHOLDER))), None);
        assert!(matches!(store.resolve("a.jpg"), Resolved::Unavailable));
    }
}
