//! Query navigation commands.
//!
//! Each command takes the current query string, applies one listing
//! interaction and prints the next canonical query string. No catalog is
//! needed: the next query depends only on the current one.

use storefront_catalog::models::FilterKey;
use storefront_query::{build_query_url, clear_all, decode, encode, set_sort, toggle_filter, SortKey};

use super::{CommandContext, Result};
use crate::output::format_query_json;

/// Prints a computed query as plain text or JSON.
fn print_query(ctx: &CommandContext, query: &str) -> Result<()> {
    let url = build_query_url(&ctx.pathname, query);
    if ctx.json_output {
        println!("{}", format_query_json(query, &url)?);
    } else if !ctx.quiet {
        println!("{query}");
    }
    Ok(())
}

// ============================================================================
// Toggle Command
// ============================================================================

/// Options for the toggle command.
#[derive(Debug)]
pub struct ToggleOptions {
    pub query: String,
    pub key: FilterKey,
    pub value: String,
}

impl ToggleOptions {
    /// Returns the query with the value toggled.
    fn next_query(&self) -> String {
        toggle_filter(&self.query, self.key, &self.value)
    }
}

/// Executes the toggle command.
pub fn execute_toggle(ctx: &CommandContext, opts: &ToggleOptions) -> Result<()> {
    let next = opts.next_query();
    tracing::debug!(key = %opts.key, value = %opts.value, next = %next, "toggled filter");
    print_query(ctx, &next)
}

// ============================================================================
// Sort Command
// ============================================================================

/// Executes the sort command.
pub fn execute_sort(ctx: &CommandContext, query: &str, sort: SortKey) -> Result<()> {
    let next = set_sort(query, sort);
    print_query(ctx, &next)
}

// ============================================================================
// Clear Command
// ============================================================================

/// Executes the clear command.
pub fn execute_clear(ctx: &CommandContext, query: &str) -> Result<()> {
    let next = clear_all(query);
    print_query(ctx, &next)
}

// ============================================================================
// Url Command
// ============================================================================

/// Executes the url command.
///
/// The query is canonicalized first, so repeated keys and stray separators
/// do not leak into the URL.
pub fn execute_url(ctx: &CommandContext, query: &str, pathname: Option<&str>) -> Result<()> {
    let (canonical, url) = canonical_url(query, pathname.unwrap_or(&ctx.pathname));

    if ctx.json_output {
        println!("{}", format_query_json(&canonical, &url)?);
    } else if !ctx.quiet {
        println!("{url}");
    }
    Ok(())
}

/// Returns the canonical form of `query` and the URL built from it.
fn canonical_url(query: &str, pathname: &str) -> (String, String) {
    let canonical = encode(&decode(query));
    let url = build_query_url(pathname, &canonical);
    (canonical, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_removes_selected_value() {
        let opts = ToggleOptions {
            query: "color=red,blue&sort=newest".to_string(),
            key: FilterKey::Color,
            value: "red".to_string(),
        };
        assert_eq!(opts.next_query(), "color=blue&sort=newest");
    }

    #[test]
    fn test_toggle_adds_value_to_empty_query() {
        let opts = ToggleOptions {
            query: String::new(),
            key: FilterKey::Price,
            value: "150+".to_string(),
        };
        assert_eq!(opts.next_query(), "price=150%2B");

        let mut ctx = CommandContext::for_test();
        ctx.quiet = true;
        assert!(execute_toggle(&ctx, &opts).is_ok());
    }

    #[test]
    fn test_canonical_url_merges_repeated_keys() {
        let (query, url) = canonical_url("?size=9&size=10", "/sale");
        assert_eq!(query, "size=9,10");
        assert_eq!(url, "/sale?size=9,10");
    }

    #[test]
    fn test_canonical_url_empty_query() {
        let (query, url) = canonical_url("", "/products");
        assert!(query.is_empty());
        assert_eq!(url, "/products");
    }
}
