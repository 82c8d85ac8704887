//! Output formatting utilities for the shop CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by command:
//!
//! - [`products`] - Product listing output
//! - [`chips`] - Active filter chips
//! - [`groups`] - Filter groups with checked options
//! - [`auth`] - Form validation results
//! - [`query`] - Computed query strings and URLs
//! - [`helpers`] - Common formatting utilities (truncation, prices, badges)

mod auth;
mod chips;
mod groups;
pub mod helpers;
mod products;
mod query;

pub use auth::{format_auth_json, format_auth_table};
pub use chips::{format_chips_json, format_chips_table};
pub use groups::{format_groups_json, format_groups_table};
pub use products::{format_products_json, format_products_table};
pub use query::format_query_json;
