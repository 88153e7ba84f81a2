//! Catalog image handling
//!
//! This module handles:
//! - Fetching remote images and caching the bytes on disk (fetch.rs)
//! - Tracking per-URL load state and placeholder substitution (store.rs)
//! - Cropping the working image for hover zoom (zoom.rs)

pub mod fetch;
pub mod store;
pub mod zoom;

pub use fetch::{Fetcher, LoadedImage, MediaError};
pub use store::{ImageStore, Resolved};
