use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::data::{Collection, CollectionRug, Rug, RugDetails, Selection, SizeCategory};

/// Catalog document bundled with the binary
const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{owner} references unknown collection '{key}'")]
    UnknownCollection { owner: String, key: String },
    #[error("rug '{rug}' is listed under unknown size category '{category}'")]
    UnknownCategory { rug: String, category: String },
    #[error("duplicate collection key '{0}'")]
    DuplicateCollection(String),
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: String, id: String },
}

/// Raw document layout, validated into a [`Catalog`]
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    default_category: Option<String>,
    size_categories: Vec<SizeCategory>,
    #[serde(default)]
    items: Vec<Rug>,
    #[serde(default)]
    collections: Vec<Collection>,
}

/// The Catalog holds the read-only rug data for the session.
/// Every cross reference is checked once at load time, so lookups
/// by key afterwards only fail for ids that never came from the catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_category: String,
    size_categories: Vec<SizeCategory>,
    rugs: Vec<Rug>,
    collections: Vec<Collection>,
}

impl Catalog {
    /// Load the catalog bundled with the application
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog document from disk
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;

        let default_category = doc
            .default_category
            .or_else(|| doc.size_categories.first().map(|c| c.id.clone()))
            .unwrap_or_default();

        let catalog = Catalog {
            default_category,
            size_categories: doc.size_categories,
            rugs: doc.items,
            collections: doc.collections,
        };
        catalog.validate()?;

        tracing::debug!(
            categories = catalog.size_categories.len(),
            rugs = catalog.rugs.len(),
            collections = catalog.collections.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if let Some(key) = first_duplicate(self.collections.iter().map(|c| c.key.as_str())) {
            return Err(CatalogError::DuplicateCollection(key.to_string()));
        }
        if let Some(id) = first_duplicate(self.size_categories.iter().map(|c| c.id.as_str())) {
            return Err(CatalogError::DuplicateId {
                kind: "size category".to_string(),
                id: id.to_string(),
            });
        }
        if let Some(id) = first_duplicate(self.rugs.iter().map(|r| r.id.as_str())) {
            return Err(CatalogError::DuplicateId {
                kind: "rug".to_string(),
                id: id.to_string(),
            });
        }
        for collection in &self.collections {
            if let Some(id) = first_duplicate(collection.items.iter().map(|r| r.id.as_str())) {
                return Err(CatalogError::DuplicateId {
                    kind: format!("rug in collection '{}'", collection.key),
                    id: id.to_string(),
                });
            }
        }

        let check = |owner: String, key: &str| -> Result<(), CatalogError> {
            if self.collection(key).is_some() {
                Ok(())
            } else {
                Err(CatalogError::UnknownCollection {
                    owner,
                    key: key.to_string(),
                })
            }
        };

        for category in &self.size_categories {
            if let Some(key) = &category.collection {
                check(format!("size category '{}'", category.id), key)?;
            }
        }

        for rug in &self.rugs {
            if !self.size_categories.iter().any(|c| c.id == rug.category) {
                return Err(CatalogError::UnknownCategory {
                    rug: rug.id.clone(),
                    category: rug.category.clone(),
                });
            }
            if let Some(key) = &rug.collection {
                check(format!("rug '{}'", rug.id), key)?;
            }
        }

        for collection in &self.collections {
            for key in &collection.includes {
                check(format!("collection '{}'", collection.key), key)?;
            }
        }

        Ok(())
    }

    /// Size category highlighted when the app starts
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// Size categories in display order
    pub fn size_categories(&self) -> &[SizeCategory] {
        &self.size_categories
    }

    pub fn size_category(&self, id: &str) -> Option<&SizeCategory> {
        self.size_categories.iter().find(|c| c.id == id)
    }

    /// Home-view rugs listed under a size category
    pub fn rugs_in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Rug> + 'a {
        self.rugs.iter().filter(move |r| r.category == category)
    }

    pub fn rug(&self, id: &str) -> Option<&Rug> {
        self.rugs.iter().find(|r| r.id == id)
    }

    pub fn collection(&self, key: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.key == key)
    }

    /// Collections to render as sections when viewing `key`.
    ///
    /// A plain collection yields itself; a combined one yields its members in order.
    pub fn sections(&self, key: &str) -> Vec<&Collection> {
        match self.collection(key) {
            Some(c) if c.is_combined() => c
                .includes
                .iter()
                .filter_map(|k| self.collection(k))
                .collect(),
            Some(c) => vec![c],
            None => Vec::new(),
        }
    }

    pub fn collection_rug(&self, collection: &str, rug: &str) -> Option<&CollectionRug> {
        self.collection(collection)?.items.iter().find(|r| r.id == rug)
    }

    /// Resolve a selection into the fields the detail view and contact links need.
    ///
    /// Collection rugs inherit size and description from their collection.
    pub fn details(&self, selection: &Selection) -> Option<RugDetails<'_>> {
        match selection {
            Selection::Rug(id) => {
                let rug = self.rug(id)?;
                Some(RugDetails {
                    name: &rug.name,
                    product_code: &rug.product_code,
                    size: &rug.size,
                    material: &rug.material,
                    origin: &rug.origin,
                    price: rug.price.as_deref(),
                    images: &rug.images,
                    description: &rug.description,
                    stock: None,
                })
            }
            Selection::CollectionRug { collection, rug } => {
                let owner = self.collection(collection)?;
                let rug = self.collection_rug(collection, rug)?;
                Some(RugDetails {
                    name: &rug.name,
                    product_code: &rug.product_code,
                    size: &owner.size,
                    material: &rug.material,
                    origin: &rug.origin,
                    price: rug.price.as_deref(),
                    images: &rug.images,
                    description: &owner.description,
                    stock: rug.stock,
                })
            }
        }
    }

    /// Number of images in the selected entity's gallery (0 if unresolvable)
    pub fn gallery_len(&self, selection: &Selection) -> usize {
        self.details(selection).map_or(0, |d| d.images.len())
    }
}

/// First id that appears more than once, in document order
fn first_duplicate<'a>(ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = HashSet::new();
    ids.into_iter().find(|id| !seen.insert(*id))
}
