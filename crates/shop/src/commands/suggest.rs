//! "Did you mean" hints for query keys the listing does not recognize.

use serde::Serialize;
use storefront_catalog::models::FilterKey;
use storefront_query::filter::SORT_PARAM;
use storefront_query::QueryParams;
use strsim::levenshtein;

/// Maximum Levenshtein distance to consider a key as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// A query key that is neither a filter key nor the sort key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownKey {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<&'static str>,
}

impl UnknownKey {
    /// Formats the warning shown to the user.
    pub fn message(&self) -> String {
        let base = format!("unknown query key '{}' is ignored.", self.key);
        match self.suggestion {
            Some(s) => format!("{} Did you mean '{}'?", base, s),
            None => base,
        }
    }
}

/// Keys the listing understands.
fn known_keys() -> impl Iterator<Item = &'static str> {
    FilterKey::ALL
        .into_iter()
        .map(FilterKey::as_str)
        .chain(std::iter::once(SORT_PARAM))
}

/// Finds the closest known key within the suggestion threshold.
///
/// Matching ignores case, so a wrongly cased key suggests its lowercase form.
/// A key never suggests itself.
pub fn find_similar_key(key: &str) -> Option<&'static str> {
    let key_lower = key.to_lowercase();

    let (best_match, best_distance) = known_keys()
        .map(|name| (name, levenshtein(&key_lower, name)))
        .min_by_key(|(_, d)| *d)?;

    if best_match != key && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

/// Lists the keys of `params` the listing will ignore, with suggestions.
pub fn unknown_keys(params: &QueryParams) -> Vec<UnknownKey> {
    params
        .keys()
        .filter(|key| !known_keys().any(|known| known == *key))
        .map(|key| UnknownKey {
            key: key.to_string(),
            suggestion: find_similar_key(key),
        })
        .collect()
}
