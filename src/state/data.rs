//! Shared data structures for the catalog
//!
//! These structs mirror the bundled catalog document and flow
//! unchanged from the catalog layer to the UI layer.

use serde::Deserialize;

/// A size tab on the home view (e.g. "160×230 cm")
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SizeCategory {
    /// Stable identifier (e.g. "160x230")
    pub id: String,
    /// Display name with the multiplication sign (e.g. "160×230 cm")
    pub name: String,
    pub description: String,
    /// Collection opened when the tab is clicked
    #[serde(default)]
    pub collection: Option<String>,
}

/// A top-level product card shown on the home view
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rug {
    pub id: String,
    pub name: String,
    /// Size category this card is listed under
    pub category: String,
    /// Size label (e.g. "300×400 cm")
    pub size: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: String,
    pub material: String,
    pub origin: String,
    /// When set, clicking the card opens this collection instead of the detail view
    #[serde(default)]
    pub collection: Option<String>,
    pub product_code: String,
}

/// A named grouping of related rugs sharing size, material and origin
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    pub key: String,
    pub name: String,
    pub description: String,
    pub material: String,
    pub origin: String,
    pub size: String,
    /// Member collections rendered as sections of a combined view
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub items: Vec<CollectionRug>,
}

impl Collection {
    /// A combined collection has no rugs of its own, only member sections
    pub fn is_combined(&self) -> bool {
        !self.includes.is_empty()
    }
}

/// An individual rug within a collection
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionRug {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub price: Option<String>,
    pub material: String,
    pub origin: String,
    #[serde(default)]
    pub stock: Option<u32>,
    pub product_code: String,
}

/// The currently selected entity in the detail view.
///
/// Exactly one of a home rug or a collection rug can be selected,
/// so the two cases are variants rather than a pair of options.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    /// A home-view rug, by id
    Rug(String),
    /// A rug inside a collection: owning collection key and rug id
    CollectionRug { collection: String, rug: String },
}

impl Selection {
    /// Key of the collection the selection came from, if any
    pub fn origin_collection(&self) -> Option<&str> {
        match self {
            Selection::Rug(_) => None,
            Selection::CollectionRug { collection, .. } => Some(collection),
        }
    }
}

/// Flattened view of a selected entity, used by the detail view and
/// the contact-link builder
#[derive(Debug, Clone, PartialEq)]
pub struct RugDetails<'a> {
    pub name: &'a str,
    pub product_code: &'a str,
    pub size: &'a str,
    pub material: &'a str,
    pub origin: &'a str,
    pub price: Option<&'a str>,
    pub images: &'a [String],
    pub description: &'a str,
    pub stock: Option<u32>,
}
