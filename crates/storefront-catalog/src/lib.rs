//! Storefront catalog: products, filter configuration and form validation.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use storefront_catalog::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! assert!(catalog.validate().is_ok());
//! assert_eq!(catalog.groups.len(), FilterKey::ALL.len());
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod data;
pub mod error;
pub mod models;
pub mod prelude;

pub use error::{CatalogError, Result};
use models::{FilterGroup, FilterKey, PriceRange, Product};

/// Everything the query engine needs: products plus their filter configuration.
///
/// The order of `products` is the featured order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,

    /// Filter groups in display order.
    #[serde(default = "data::filter_groups")]
    pub groups: Vec<FilterGroup>,

    /// Price ranges backing the `price` filter.
    #[serde(default = "data::price_ranges")]
    pub price_ranges: Vec<PriceRange>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Creates a catalog from its parts.
    pub fn new(
        products: Vec<Product>,
        groups: Vec<FilterGroup>,
        price_ranges: Vec<PriceRange>,
    ) -> Self {
        Self {
            products,
            groups,
            price_ranges,
        }
    }

    /// Returns the built-in seed catalog.
    pub fn builtin() -> Self {
        Self::new(data::products(), data::filter_groups(), data::price_ranges())
    }

    /// Returns the filter group for `key`, if configured.
    pub fn group(&self, key: FilterKey) -> Option<&FilterGroup> {
        self.groups.iter().find(|group| group.key == key)
    }

    /// Finds a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Checks catalog invariants: unique product ids, finite non-negative
    /// prices and at most one group per filter key.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for product in &self.products {
            if !ids.insert(product.id.as_str()) {
                return Err(CatalogError::duplicate_product_id(&product.id));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    id: product.id.clone(),
                    price: product.price,
                });
            }
        }

        let mut keys = HashSet::new();
        for group in &self.groups {
            if !keys.insert(group.key) {
                return Err(CatalogError::DuplicateFilterGroup {
                    key: group.key.to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.products[0].id, "air-force-1-07");
    }

    #[test]
    fn test_group_and_product_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.group(FilterKey::Height).map(|g| g.label.as_str()),
            Some("Shoe Height")
        );
        assert_eq!(
            catalog.product("vomero-17").map(|p| p.price),
            Some(180.0)
        );
        assert!(catalog.product("missing").is_none());
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let mut catalog = Catalog::builtin();
        let copy = catalog.products[0].clone();
        catalog.products.push(copy);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::duplicate_product_id("air-force-1-07"))
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.products[1].price = -1.0;
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_duplicate_group_rejected() {
        let mut catalog = Catalog::builtin();
        let group = catalog.groups[0].clone();
        catalog.groups.push(group);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateFilterGroup { .. })
        ));
    }

    #[test]
    fn test_catalog_json_defaults_to_builtin_config() {
        let catalog: Catalog = serde_json::from_str(r#"{"products": []}"#).unwrap();
        assert!(catalog.products.is_empty());
        assert_eq!(catalog.groups, data::filter_groups());
        assert_eq!(catalog.price_ranges, data::price_ranges());
    }
}
