//! Prelude module for convenient imports.
//!
//! ```
//! use storefront_catalog::prelude::*;
//!
//! // Now you have access to:
//! // - Catalog (products + filter configuration)
//! // - CatalogError, Result (error handling)
//! // - Product, FilterGroup, FilterKey, PriceRange, etc. (data models)
//! // - validate, AuthVariant, FieldErrors (form validation)
//! ```

pub use crate::Catalog;

pub use crate::error::{CatalogError, Result};

pub use crate::models::{
    format_colors, Badge, BadgeTone, FilterGroup, FilterKey, FilterOption, Gender, PriceRange,
    Product, ShoeHeight,
};

pub use crate::auth::{validate, AuthField, AuthFormValues, AuthVariant, FieldErrors};
