//! Data models for the storefront catalog.

mod filter_group;
mod product;

pub use filter_group::{FilterGroup, FilterKey, FilterOption, PriceRange};
pub use product::{format_colors, Badge, BadgeTone, Gender, Product, ShoeHeight};
