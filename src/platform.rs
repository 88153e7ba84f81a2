//! Handing links to the host environment

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Error)]
pub enum LinkError {
    #[error("not a valid link '{url}': {reason}")]
    Invalid { url: String, reason: String },
    #[error("could not open {url}: {reason}")]
    Open { url: String, reason: String },
    #[error("link task failed: {0}")]
    Join(String),
}

/// Open `url` with the system handler (browser for https, dialer for tel:)
pub async fn open_link(url: String) -> Result<(), LinkError> {
    // Checked up front so a malformed link never reaches the OS handler
    if let Err(e) = Url::parse(&url) {
        return Err(LinkError::Invalid {
            url,
            reason: e.to_string(),
        });
    }

    tokio::task::spawn_blocking(move || {
        webbrowser::open(&url).map_err(|e| LinkError::Open {
            url: url.clone(),
            reason: e.to_string(),
        })
    })
    .await
    .map_err(|e| LinkError::Join(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_link_is_rejected() {
        let err = open_link("wa.me/966500000000".to_string()).await.unwrap_err();
        assert!(matches!(err, LinkError::Invalid { .. }));
        assert!(err.to_string().contains("wa.me/966500000000"));
    }
}
