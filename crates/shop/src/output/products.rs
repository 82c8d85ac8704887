//! Product listing output formatting.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use serde::Serialize;
use storefront_catalog::models::{format_colors, Badge, Gender, Product, ShoeHeight};
use storefront_query::{ActiveChip, Listing, SortKey};

use super::helpers::{format_badge, format_header, format_price, truncate_str};
use crate::commands::suggest::UnknownKey;

/// JSON output structure for the products command.
#[derive(Serialize)]
pub struct ProductsListOutput<'a> {
    pub query: &'a str,
    pub sort: SortKey,
    /// Size of the whole catalog.
    pub total: usize,
    /// Products matching the filters, before `--limit`.
    pub matched: usize,
    pub chips: &'a [ActiveChip],
    pub products: Vec<ProductOutput<'a>>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub warnings: &'a [UnknownKey],
}

/// JSON output structure for a single product.
#[derive(Serialize)]
pub struct ProductOutput<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub subtitle: &'a str,
    pub price: f64,
    pub genders: &'a [Gender],
    pub sizes: &'a [String],
    pub colors: &'a [String],
    pub height: ShoeHeight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'a Badge>,
    pub release_date: NaiveDate,
}

impl<'a> From<&'a Product> for ProductOutput<'a> {
    fn from(p: &'a Product) -> Self {
        Self {
            id: &p.id,
            title: &p.title,
            subtitle: &p.subtitle,
            price: p.price,
            genders: &p.genders,
            sizes: &p.sizes,
            colors: &p.colors,
            height: p.height,
            badge: p.badge.as_ref(),
            release_date: p.release_date,
        }
    }
}

/// Formats a listing as JSON.
pub fn format_products_json(
    query: &str,
    listing: &Listing<'_>,
    shown: &[&Product],
    warnings: &[UnknownKey],
) -> Result<String, serde_json::Error> {
    let output = ProductsListOutput {
        query,
        sort: listing.sort,
        total: listing.total,
        matched: listing.products.len(),
        chips: &listing.chips,
        products: shown.iter().map(|p| ProductOutput::from(*p)).collect(),
        warnings,
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a listing as a table, followed by a summary and the active filters.
pub fn format_products_table(listing: &Listing<'_>, shown: &[&Product], use_colors: bool) -> String {
    let mut output = String::new();

    if listing.is_empty() {
        output.push_str("No products match the selected filters.\n");
    } else {
        let header = format!(
            "{:<18} {:<30} {:>6}  {:<16} {}",
            "ID", "Title", "Price", "Colors", "Badge"
        );
        output.push_str(&format_header(&header, use_colors));

        for product in shown {
            let line = format!(
                "{:<18} {:<30} {:>6}  {:<16} {}",
                truncate_str(&product.id, 18),
                truncate_str(&product.title, 30),
                format_price(product.price),
                truncate_str(&format_colors(&product.colors), 16),
                format_badge(product.badge.as_ref(), use_colors),
            );
            output.push_str(&line);
            output.push('\n');
        }
    }

    let summary = format!(
        "\nShowing {} of {} products (sort: {})",
        shown.len(),
        listing.total,
        listing.sort.label()
    );
    if use_colors {
        output.push_str(&summary.dimmed().to_string());
    } else {
        output.push_str(&summary);
    }
    output.push('\n');

    if !listing.chips.is_empty() {
        let labels: Vec<&str> = listing.chips.iter().map(|c| c.label.as_str()).collect();
        output.push_str(&format!("Filters: {}\n", labels.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Catalog;

    #[test]
    fn test_products_table_lists_matches() {
        let catalog = Catalog::builtin();
        let listing = Listing::from_catalog("height=mid", &catalog);
        let output = format_products_table(&listing, &listing.products, false);

        assert!(output.starts_with("ID "));
        assert!(output.contains("air-jordan-1-mid"));
        assert!(output.contains("$135"));
        assert!(output.contains("Showing 2 of 15 products (sort: Featured)"));
        assert!(output.contains("Filters: Mid Top"));
    }

    #[test]
    fn test_products_table_no_matches() {
        let catalog = Catalog::builtin();
        let listing = Listing::from_catalog("gender=kids&height=high", &catalog);
        let output = format_products_table(&listing, &listing.products, false);

        assert!(output.starts_with("No products match the selected filters."));
        assert!(output.contains("Showing 0 of 15 products"));
        assert!(output.contains("Filters: Kids, High Top"));
    }

    #[test]
    fn test_products_json() {
        let catalog = Catalog::builtin();
        let query = "gender=kids&sort=price_asc";
        let listing = Listing::from_catalog(query, &catalog);
        let shown = &listing.products[..1];
        let json = format_products_json(query, &listing, shown, &[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["sort"], "price_asc");
        assert_eq!(value["total"], 15);
        assert_eq!(value["matched"], 2);
        assert_eq!(value["products"].as_array().unwrap().len(), 1);
        assert_eq!(value["products"][0]["id"], "flex-runner-2");
        assert_eq!(value["products"][0]["release_date"], "2024-10-01");
        assert_eq!(value["chips"][0]["label"], "Kids");
        assert!(value.get("warnings").is_none());
    }
}
