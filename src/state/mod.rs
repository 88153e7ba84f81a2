//! State management module
//!
//! This module handles all application state, including:
//! - The read-only rug catalog (catalog.rs)
//! - Shared data structures (data.rs)
//! - View navigation and gallery state (navigator.rs)
//! - Click-to-contact link formatting (contact.rs)

pub mod catalog;
pub mod contact;
pub mod data;
pub mod navigator;
