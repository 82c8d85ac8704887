//! Filter and sort engine for the product listing.
//!
//! The query string is the only owner of filter state. Every evaluation
//! decodes it afresh, so there is no separate state to fall out of sync.
//!
//! # Query Parameters
//!
//! ## Filters
//! - `gender` - `men`, `women`, `kids`
//! - `size` - size option values such as `9` or `10`
//! - `color` - color option values such as `black` or `white`
//! - `price` - price range keys such as `0-50` or `150+`
//! - `height` - `low`, `mid`, `high`
//!
//! Multiple values for one key are comma-joined and OR-combined. Different
//! keys are AND-combined.
//!
//! ## Sort
//! - `sort` - `featured` (default), `newest`, `price_desc`, `price_asc`
//!
//! # Example
//!
//! ```
//! use storefront_catalog::Catalog;
//! use storefront_query::filter::{clear_all, Listing, SortKey};
//!
//! let catalog = Catalog::builtin();
//!
//! let listing = Listing::from_catalog("gender=men,women&sort=price_desc", &catalog);
//! assert_eq!(listing.sort, SortKey::PriceDesc);
//! assert_eq!(listing.chips.len(), 2);
//!
//! let prices: Vec<f64> = listing.products.iter().map(|p| p.price).collect();
//! assert!(prices.windows(2).all(|w| w[0] >= w[1]));
//!
//! assert_eq!(clear_all("gender=men&sort=newest"), "sort=newest");
//! ```

mod actions;
mod evaluator;
mod state;
mod view;

pub use actions::{clear_all, remove_chip, set_sort, toggle_filter};
pub use evaluator::{sort_products, FilterContext, FilterEvaluator};
pub use state::{FilterState, SortKey, SORT_PARAM};
pub use view::{active_chips, option_views, ActiveChip, GroupView, Listing, OptionView};
