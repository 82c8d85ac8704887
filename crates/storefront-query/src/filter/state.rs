//! Filter and sort state derived from a query string.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use storefront_catalog::models::FilterKey;

use crate::codec::{self, QueryParams};

/// Query parameter holding the sort key.
pub const SORT_PARAM: &str = "sort";

/// Selected option values per filter key.
///
/// Every [`FilterKey`] always has an entry (possibly empty). Values within a
/// key are unique and keep the order in which they were selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterState {
    selections: BTreeMap<FilterKey, Vec<String>>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Creates a state with nothing selected.
    pub fn new() -> Self {
        Self {
            selections: FilterKey::ALL
                .into_iter()
                .map(|key| (key, Vec::new()))
                .collect(),
        }
    }

    /// Derives the state from a query string. Unknown keys are ignored.
    pub fn from_query(query: &str) -> Self {
        Self::from_params(&codec::decode(query))
    }

    /// Derives the state from decoded query parameters.
    pub fn from_params(params: &QueryParams) -> Self {
        let mut state = Self::new();
        for key in FilterKey::ALL {
            if let Some(values) = params.get(key.as_str()) {
                for value in values {
                    state.select(key, value.clone());
                }
            }
        }
        state
    }

    /// Selects `value` under `key`. Returns false if it was already selected.
    pub fn select(&mut self, key: FilterKey, value: impl Into<String>) -> bool {
        let value = value.into();
        let values = self.selections.entry(key).or_default();
        if values.contains(&value) {
            return false;
        }
        values.push(value);
        true
    }

    /// Deselects `value` under `key`. Returns false if it was not selected.
    pub fn deselect(&mut self, key: FilterKey, value: &str) -> bool {
        let values = self.selections.entry(key).or_default();
        let before = values.len();
        values.retain(|v| v != value);
        values.len() != before
    }

    /// Returns the values selected under `key`, in selection order.
    pub fn selected(&self, key: FilterKey) -> &[String] {
        self.selections
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if `value` is selected under `key`.
    pub fn is_selected(&self, key: FilterKey, value: &str) -> bool {
        self.selected(key).iter().any(|v| v == value)
    }

    /// Returns true if no key has a selection.
    pub fn is_empty(&self) -> bool {
        self.selections.values().all(Vec::is_empty)
    }

    /// Total number of selected values across all keys.
    pub fn total_selected(&self) -> usize {
        self.selections.values().map(Vec::len).sum()
    }

    /// Iterates over every key (in canonical order) with its selections.
    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, &[String])> {
        self.selections
            .iter()
            .map(|(key, values)| (*key, values.as_slice()))
    }

    /// Converts the selections back into query parameters, skipping empty keys.
    pub fn to_params(&self) -> QueryParams {
        self.iter()
            .map(|(key, values)| (key.as_str(), values.to_vec()))
            .collect()
    }
}

/// Ordering applied to the filtered products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Original position in the catalog.
    #[default]
    Featured,
    /// Most recent release date first.
    Newest,
    /// Highest price first.
    PriceDesc,
    /// Lowest price first.
    PriceAsc,
}

impl SortKey {
    /// Every sort key in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::Newest,
        SortKey::PriceDesc,
        SortKey::PriceAsc,
    ];

    /// Returns the query string value.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceDesc => "price_desc",
            SortKey::PriceAsc => "price_asc",
        }
    }

    /// Returns the menu label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::Newest => "Newest",
            SortKey::PriceDesc => "Price: High → Low",
            SortKey::PriceAsc => "Price: Low → High",
        }
    }

    /// Parses a query string value exactly. Returns `None` if unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_str() == value)
    }

    /// Parses an optional query string value, falling back to
    /// [`SortKey::Featured`] when absent or unrecognized.
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    /// Reads the sort key from decoded query parameters.
    pub fn from_params(params: &QueryParams) -> Self {
        Self::from_param(params.first(SORT_PARAM))
    }

    /// Reads the sort key from a query string.
    pub fn from_query(query: &str) -> Self {
        Self::from_params(&codec::decode(query))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
