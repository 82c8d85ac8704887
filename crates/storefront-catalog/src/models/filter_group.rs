//! Filter group configuration shared by the catalog and the query engine.
//!
//! Filter groups are static: they are built once (either from the built-in
//! seed data or from a catalog file) and handed to the evaluator by reference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// The closed set of filterable dimensions.
///
/// Each variant maps to one query string parameter (see [`FilterKey::as_str`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    Gender,
    Size,
    Color,
    Price,
    Height,
}

impl FilterKey {
    /// Every filter key in canonical order.
    pub const ALL: [FilterKey; 5] = [
        FilterKey::Gender,
        FilterKey::Size,
        FilterKey::Color,
        FilterKey::Price,
        FilterKey::Height,
    ];

    /// Returns the query string parameter name for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKey::Gender => "gender",
            FilterKey::Size => "size",
            FilterKey::Color => "color",
            FilterKey::Price => "price",
            FilterKey::Height => "height",
        }
    }

    /// Looks up a key by its query parameter name. Returns `None` for
    /// unrecognized names instead of an error so stale links degrade quietly.
    pub fn from_param(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_param(s).ok_or_else(|| CatalogError::unknown_filter_key(s))
    }
}

/// A single selectable option within a filter group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Value written to the query string.
    pub value: String,

    /// Human-readable label.
    pub label: String,

    /// Optional CSS color used to render a swatch next to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swatch: Option<String>,
}

impl FilterOption {
    /// Creates an option without a swatch.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            swatch: None,
        }
    }

    /// Creates an option rendered with a color swatch.
    pub fn with_swatch(
        value: impl Into<String>,
        label: impl Into<String>,
        swatch: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            swatch: Some(swatch.into()),
        }
    }
}

/// A named, user-facing filter dimension with a fixed list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub key: FilterKey,
    pub label: String,
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    /// Creates a new filter group.
    pub fn new(key: FilterKey, label: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            key,
            label: label.into(),
            options,
        }
    }

    /// Finds the option with the given value.
    pub fn option(&self, value: &str) -> Option<&FilterOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// A half-open price interval `[min, max)`. `max == None` means open-ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Key used as the `price` filter option value (e.g. `"50-100"`).
    pub value: String,
    pub label: String,
    pub min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceRange {
    /// Creates a bounded range `[min, max)`.
    pub fn bounded(value: impl Into<String>, label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            min,
            max: Some(max),
        }
    }

    /// Creates an open-ended range `[min, ∞)`.
    pub fn open_ended(value: impl Into<String>, label: impl Into<String>, min: f64) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            min,
            max: None,
        }
    }

    /// Returns true if `price` falls inside this range.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }

    /// Converts this range into the filter option that selects it.
    pub fn to_option(&self) -> FilterOption {
        FilterOption::new(self.value.clone(), self.label.clone())
    }
}
