//! Error types for catalog parsing and validation.

use thiserror::Error;

/// A specialized Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while parsing or validating catalog data.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// A gender value outside `men | women | kids`.
    #[error("unknown gender: {value}")]
    UnknownGender {
        /// The unrecognized value.
        value: String,
    },

    /// A shoe height outside `low | mid | high`.
    #[error("unknown shoe height: {value}")]
    UnknownHeight {
        /// The unrecognized value.
        value: String,
    },

    /// A filter key outside the closed set of filter dimensions.
    #[error("unknown filter key: {key}")]
    UnknownFilterKey {
        /// The unrecognized key.
        key: String,
    },

    /// Two products share the same identifier.
    #[error("duplicate product id: {id}")]
    DuplicateProductId {
        /// The repeated identifier.
        id: String,
    },

    /// Two filter groups share the same key.
    #[error("duplicate filter group: {key}")]
    DuplicateFilterGroup {
        /// The repeated key.
        key: String,
    },

    /// A product price that is negative or not a finite number.
    #[error("invalid price {price} for product {id}")]
    InvalidPrice {
        /// The offending product.
        id: String,
        /// The rejected price.
        price: f64,
    },
}

impl CatalogError {
    /// Creates an unknown filter key error.
    pub fn unknown_filter_key(key: impl Into<String>) -> Self {
        CatalogError::UnknownFilterKey { key: key.into() }
    }

    /// Creates a duplicate product id error.
    pub fn duplicate_product_id(id: impl Into<String>) -> Self {
        CatalogError::DuplicateProductId { id: id.into() }
    }
}
