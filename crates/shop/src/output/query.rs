//! Output for commands that compute the next query string.

use serde::Serialize;

/// JSON output structure for toggle, sort, clear and url.
#[derive(Serialize)]
pub struct QueryOutput<'a> {
    pub query: &'a str,
    pub url: &'a str,
}

/// Formats a computed query and its URL as JSON.
pub fn format_query_json(query: &str, url: &str) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&QueryOutput { query, url })
}
