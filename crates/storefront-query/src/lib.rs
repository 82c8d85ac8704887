//! URL-driven filtering and sorting for the storefront product listing.
//!
//! The query string is the single source of truth for the listing's filter
//! and sort state:
//!
//! - [`codec`] maps between query strings and ordered multi-value mappings.
//! - [`filter`] derives [`FilterState`] and [`SortKey`] from a query, filters
//!   and sorts products, and computes the next query for each interaction.
//! - [`CatalogStore`] loads and saves catalogs as JSON files.
//!
//! # Example
//!
//! ```
//! use storefront_catalog::{models::FilterKey, Catalog};
//! use storefront_query::{toggle_filter, Listing};
//!
//! let catalog = Catalog::builtin();
//! let query = toggle_filter("", FilterKey::Height, "mid");
//! assert_eq!(query, "height=mid");
//!
//! let listing = Listing::from_catalog(&query, &catalog);
//! assert_eq!(listing.products.len(), 2);
//! ```

pub mod codec;
pub mod filter;
mod store;

pub use codec::{build_query_url, decode, encode, QueryParams};
pub use filter::{
    active_chips, clear_all, option_views, remove_chip, set_sort, toggle_filter, ActiveChip,
    FilterContext, FilterEvaluator, FilterState, GroupView, Listing, OptionView, SortKey,
};
pub use store::{CatalogStore, CatalogStoreError, Result};
