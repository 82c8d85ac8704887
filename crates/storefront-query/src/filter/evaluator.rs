//! Filter evaluation and sorting over catalog products.
//!
//! Selections are AND-combined across keys and OR-combined within a key. A
//! key with no selections places no constraint on the result.
//!
//! # Example
//!
//! ```
//! use storefront_catalog::Catalog;
//! use storefront_query::filter::{sort_products, FilterContext, FilterEvaluator, FilterState, SortKey};
//!
//! let catalog = Catalog::builtin();
//! let context = FilterContext::from_catalog(&catalog);
//! let state = FilterState::from_query("gender=kids&price=0-50,50-100");
//!
//! let evaluator = FilterEvaluator::new(&state, &context);
//! let matched = evaluator.filter_products(&catalog.products);
//! let sorted = sort_products(matched, SortKey::PriceAsc, &catalog.products);
//!
//! let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
//! assert_eq!(ids, vec!["flex-runner-2", "revolution-7"]);
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use storefront_catalog::models::{FilterGroup, FilterKey, PriceRange, Product};
use storefront_catalog::Catalog;

use super::state::{FilterState, SortKey};

/// Static configuration needed to evaluate filters and resolve labels.
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    groups: &'a [FilterGroup],
    price_ranges: &'a [PriceRange],
}

impl<'a> FilterContext<'a> {
    /// Creates a new filter context.
    ///
    /// # Arguments
    ///
    /// * `groups` - Filter groups in display order
    /// * `price_ranges` - Ranges that `price` selections resolve against
    pub fn new(groups: &'a [FilterGroup], price_ranges: &'a [PriceRange]) -> Self {
        Self {
            groups,
            price_ranges,
        }
    }

    /// Creates a context borrowing the catalog's configuration.
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        Self::new(&catalog.groups, &catalog.price_ranges)
    }

    /// Returns the filter groups in display order.
    pub fn groups(&self) -> &'a [FilterGroup] {
        self.groups
    }

    /// Finds the price range whose key is exactly `value`.
    pub fn find_price_range(&self, value: &str) -> Option<&'a PriceRange> {
        self.price_ranges.iter().find(|range| range.value == value)
    }

    /// Resolves the display label of an option, if the option is configured.
    pub fn option_label(&self, key: FilterKey, value: &str) -> Option<&'a str> {
        self.groups
            .iter()
            .filter(|group| group.key == key)
            .find_map(|group| group.option(value))
            .map(|option| option.label.as_str())
    }
}

/// Tests products against a [`FilterState`].
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    state: &'a FilterState,
    context: &'a FilterContext<'a>,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new filter evaluator.
    pub fn new(state: &'a FilterState, context: &'a FilterContext<'a>) -> Self {
        Self { state, context }
    }

    /// Returns true if the product passes every key that has selections.
    pub fn matches(&self, product: &Product) -> bool {
        FilterKey::ALL
            .into_iter()
            .all(|key| self.matches_key(key, product))
    }

    /// Filters products, keeping source order.
    pub fn filter_products<'b>(&self, products: &'b [Product]) -> Vec<&'b Product> {
        let matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        tracing::debug!(
            matched = matched.len(),
            total = products.len(),
            "filtered products"
        );
        matched
    }

    /// Evaluates a single key. Keys without selections always pass.
    fn matches_key(&self, key: FilterKey, product: &Product) -> bool {
        let selected = self.state.selected(key);
        if selected.is_empty() {
            return true;
        }

        match key {
            FilterKey::Gender => selected.iter().any(|value| product.has_gender(value)),
            FilterKey::Size => selected.iter().any(|value| product.has_size(value)),
            FilterKey::Color => selected.iter().any(|value| product.has_color(value)),
            FilterKey::Height => selected.iter().any(|value| value == product.height.as_str()),
            // Unknown range keys resolve to nothing and so match nothing.
            FilterKey::Price => selected.iter().any(|value| {
                self.context
                    .find_price_range(value)
                    .is_some_and(|range| range.contains(product.price))
            }),
        }
    }
}

/// Sorts filtered products.
///
/// The sort is stable, so products that compare equal keep the order they
/// had in `products`. Featured order is the position in `source`; products
/// missing from `source` sort last.
pub fn sort_products<'b>(
    mut products: Vec<&'b Product>,
    sort: SortKey,
    source: &[Product],
) -> Vec<&'b Product> {
    match sort {
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Newest => products.sort_by(|a, b| b.release_date.cmp(&a.release_date)),
        SortKey::Featured => {
            let order = featured_order(source);
            products.sort_by(|a, b| compare_featured(&order, a, b));
        }
    }
    products
}

fn featured_order(source: &[Product]) -> HashMap<&str, usize> {
    source
        .iter()
        .enumerate()
        .map(|(index, product)| (product.id.as_str(), index))
        .collect()
}

fn compare_featured(order: &HashMap<&str, usize>, a: &Product, b: &Product) -> Ordering {
    let position = |product: &Product| {
        order
            .get(product.id.as_str())
            .copied()
            .unwrap_or(usize::MAX)
    };
    position(a).cmp(&position(b))
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
