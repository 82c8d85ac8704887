//! Products command implementation.
//!
//! Evaluates a query string against the catalog and prints the listing.

use storefront_catalog::models::Product;
use storefront_query::{decode, Listing};

use super::suggest::{unknown_keys, UnknownKey};
use super::{CommandContext, Result};
use crate::output::{format_products_json, format_products_table};

/// Options for the products command.
#[derive(Debug, Default)]
pub struct ProductsOptions {
    /// Query string, with or without a leading `?`.
    pub query: String,
    /// Show at most this many products.
    pub limit: Option<usize>,
}

/// Executes the products command.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
pub async fn execute(ctx: &CommandContext, opts: &ProductsOptions) -> Result<()> {
    let catalog = ctx.load_catalog().await?;
    let listing = Listing::from_catalog(&opts.query, &catalog);
    let warnings = unknown_keys(&decode(&opts.query));
    let shown = apply_limit(&listing.products, opts.limit);

    if ctx.json_output {
        let output = format_products_json(&opts.query, &listing, shown, &warnings)?;
        println!("{output}");
    } else if !ctx.quiet {
        print_warnings(&warnings);
        let output = format_products_table(&listing, shown, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}

fn print_warnings(warnings: &[UnknownKey]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning.message());
    }
}

/// Applies the limit to the products.
fn apply_limit<'a, 'b>(products: &'a [&'b Product], limit: Option<usize>) -> &'a [&'b Product] {
    match limit {
        Some(limit) if limit < products.len() => &products[..limit],
        _ => products,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Catalog;

    #[test]
    fn test_apply_limit() {
        let catalog = Catalog::builtin();
        let all: Vec<&Product> = catalog.products.iter().collect();

        assert_eq!(apply_limit(&all, None).len(), 15);
        assert_eq!(apply_limit(&all, Some(3)).len(), 3);
        assert_eq!(apply_limit(&all, Some(100)).len(), 15);
        assert!(apply_limit(&all, Some(0)).is_empty());
    }

    #[test]
    fn test_products_options_defaults() {
        let opts = ProductsOptions::default();
        assert!(opts.query.is_empty());
        assert!(opts.limit.is_none());
    }

    #[tokio::test]
    async fn test_execute_with_builtin_catalog() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("catalog.json");
        storefront_query::CatalogStore::with_path(path.clone())
            .save(&Catalog::builtin())
            .unwrap();

        let mut ctx = CommandContext::for_test();
        ctx.catalog_path = Some(path);
        ctx.quiet = true;
        let opts = ProductsOptions {
            query: "gender=men&colr=red".to_string(),
            limit: Some(2),
        };
        assert!(execute(&ctx, &opts).await.is_ok());
    }
}
