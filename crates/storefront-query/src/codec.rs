//! Query string codec.
//!
//! Maps between a URL query string and an ordered mapping of keys to one or
//! more values. The canonical form written by [`encode`] joins multiple values
//! with a literal comma (`color=red,blue`) and omits keys without values.
//! [`decode`] accepts both the canonical form and repeated keys
//! (`color=red&color=blue`), so links produced elsewhere still parse.
//!
//! Values containing a literal comma cannot be represented: the comma is
//! indistinguishable from the value separator and the value is split on
//! decode.
//!
//! # Example
//!
//! ```
//! use storefront_query::codec::{decode, encode, toggle_value};
//!
//! let params = decode("gender=men,women&sort=price_desc");
//! assert_eq!(params.get("gender"), Some(&["men".to_string(), "women".to_string()][..]));
//! assert_eq!(encode(&params), "gender=men,women&sort=price_desc");
//!
//! let query = toggle_value("", "color", "red");
//! assert_eq!(query, "color=red");
//! assert_eq!(toggle_value(&query, "color", "red"), "");
//! ```

use serde::Serialize;

/// Ordered mapping of query keys to their values.
///
/// Keys keep insertion order. A key is never stored with an empty value list:
/// setting a key to no values removes it, which is what keeps empty-key
/// artifacts out of encoded output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryParams {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the values stored for `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns the first value stored for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns true if `key` has at least one value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replaces the values for `key`.
    ///
    /// An existing key keeps its position; a new key is appended. Empty
    /// strings are dropped, and if nothing remains the key is removed.
    pub fn set<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|value| !value.is_empty())
            .collect();

        if values.is_empty() {
            self.remove(&key);
            return;
        }

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key, values)),
        }
    }

    /// Appends values to `key`, creating it if needed.
    ///
    /// This is how repeated keys (`key=a&key=b`) accumulate on decode.
    pub fn append<I, S>(&mut self, key: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        let mut values: Vec<String> = values
            .into_iter()
            .map(Into::into)
            .filter(|value| !value.is_empty())
            .collect();

        if values.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => existing.append(&mut values),
            None => self.entries.push((key, values)),
        }
    }

    /// Removes `key`, returning its values if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterates over `(key, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V, S> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = QueryParams::new();
        for (key, values) in iter {
            params.set(key, values);
        }
        params
    }
}

fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encodes a mapping as a canonical query string (without a leading `?`).
///
/// Multiple values are comma-joined; each key and value is percent-encoded
/// on its own so the separating commas stay literal.
pub fn encode(params: &QueryParams) -> String {
    params
        .iter()
        .filter(|(key, values)| !key.is_empty() && !values.is_empty())
        .map(|(key, values)| {
            let joined = values
                .iter()
                .map(|value| encode_component(value))
                .collect::<Vec<_>>()
                .join(",");
            format!("{}={}", encode_component(key), joined)
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes a query string into a mapping.
///
/// A leading `?` is ignored. Comma-joined values are split, repeated keys
/// accumulate in the order encountered, and values go through
/// [`parse_multi_value`]. Input that cannot be parsed decodes as empty.
pub fn decode(query: &str) -> QueryParams {
    let input = query.strip_prefix('?').unwrap_or(query);
    if input.is_empty() {
        return QueryParams::new();
    }

    let pairs: Vec<(String, String)> = match serde_urlencoded::from_str(input) {
        Ok(pairs) => pairs,
        Err(e) => {
            tracing::warn!(error = %e, query = input, "ignoring malformed query string");
            return QueryParams::new();
        }
    };

    let mut params = QueryParams::new();
    for (key, raw) in pairs {
        if key.is_empty() {
            continue;
        }
        params.append(key, parse_multi_value([raw]));
    }
    params
}

/// Splits raw parameter values on commas, trims each piece and drops empty
/// pieces.
///
/// Accepts one raw value or several (as produced by repeated keys).
///
/// ```
/// use storefront_query::codec::parse_multi_value;
///
/// assert_eq!(parse_multi_value([" men, ,women "]), vec!["men", "women"]);
/// assert_eq!(parse_multi_value(["8", "9,10"]), vec!["8", "9", "10"]);
/// assert!(parse_multi_value([""]).is_empty());
/// ```
pub fn parse_multi_value<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .flat_map(|entry| {
            entry
                .as_ref()
                .split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Adds `value` to `key` if absent, removes it if present, and re-encodes.
///
/// Toggling the same pair twice returns the original canonical query only
/// when the first toggle adds the value. When it removes the last value of a
/// key, the second toggle re-adds that key at the end, so key order changes:
/// `q=a&color=red` toggled twice on `q=a` becomes `color=red&q=a`.
pub fn toggle_value(query: &str, key: &str, value: &str) -> String {
    let mut params = decode(query);
    let value = value.trim();

    let mut values: Vec<String> = params.get(key).map(<[String]>::to_vec).unwrap_or_default();
    if values.iter().any(|existing| existing == value) {
        values.retain(|existing| existing != value);
    } else {
        values.push(value.to_string());
    }

    params.set(key, values);
    encode(&params)
}

/// Merges `updates` over the decoded query and re-encodes.
///
/// `None` deletes a key; `Some(values)` overwrites it (an empty list also
/// deletes it).
pub fn update_params(query: &str, updates: &[(&str, Option<Vec<String>>)]) -> String {
    let mut params = decode(query);
    for (key, update) in updates {
        match update {
            Some(values) => params.set(*key, values.iter().cloned()),
            None => {
                params.remove(key);
            }
        }
    }
    encode(&params)
}

/// Deletes each of `keys` from the decoded query and re-encodes.
pub fn remove_keys<S: AsRef<str>>(query: &str, keys: &[S]) -> String {
    let mut params = decode(query);
    for key in keys {
        params.remove(key.as_ref());
    }
    encode(&params)
}

/// Joins a path and a query string, leaving out the `?` when the query is
/// empty.
///
/// ```
/// use storefront_query::codec::build_query_url;
///
/// assert_eq!(build_query_url("/products", "color=red"), "/products?color=red");
/// assert_eq!(build_query_url("/products", ""), "/products");
/// ```
pub fn build_query_url(pathname: &str, query: &str) -> String {
    if query.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{query}")
    }
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
