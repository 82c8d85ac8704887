//! Query string mutations triggered by filter and sort interactions.
//!
//! Each action takes the current query string and returns the next canonical
//! query string; the caller navigates to it and re-evaluates.

use storefront_catalog::models::FilterKey;

use super::state::{SortKey, SORT_PARAM};
use super::view::ActiveChip;
use crate::codec;

/// Toggles one option of a filter group.
pub fn toggle_filter(query: &str, key: FilterKey, value: &str) -> String {
    codec::toggle_value(query, key.as_str(), value)
}

/// Removes the selection behind an active chip.
///
/// If the chip is stale (its value is no longer selected) the canonical
/// query is returned unchanged; a chip never re-adds its value.
pub fn remove_chip(query: &str, chip: &ActiveChip) -> String {
    let params = codec::decode(query);
    let selected = params
        .get(chip.key.as_str())
        .is_some_and(|values| values.iter().any(|value| *value == chip.value));

    if selected {
        codec::toggle_value(query, chip.key.as_str(), &chip.value)
    } else {
        codec::encode(&params)
    }
}

/// Removes every filter key. The sort key and unrelated keys are kept.
pub fn clear_all(query: &str) -> String {
    let keys: Vec<&str> = FilterKey::ALL.iter().map(|key| key.as_str()).collect();
    codec::remove_keys(query, &keys)
}

/// Applies a sort. Featured is the default and is written by omitting the
/// `sort` key.
pub fn set_sort(query: &str, sort: SortKey) -> String {
    let value = match sort {
        SortKey::Featured => None,
        other => Some(vec![other.as_str().to_string()]),
    };
    codec::update_params(query, &[(SORT_PARAM, value)])
}
