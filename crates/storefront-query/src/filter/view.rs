//! View data derived from filter state: chips, option lists and the listing.

use serde::Serialize;
use storefront_catalog::models::{FilterKey, Product};
use storefront_catalog::Catalog;

use super::evaluator::{sort_products, FilterContext, FilterEvaluator};
use super::state::{FilterState, SortKey};
use crate::codec;

/// A removable chip for one active selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveChip {
    pub key: FilterKey,
    pub value: String,
    /// Option label, or the raw value when no option matches.
    pub label: String,
}

/// Builds chips for every active selection.
///
/// Chips are grouped by key in filter group order, then by selection order.
/// Keys without a configured group follow in canonical key order.
pub fn active_chips(state: &FilterState, context: &FilterContext<'_>) -> Vec<ActiveChip> {
    let mut keys: Vec<FilterKey> = Vec::with_capacity(FilterKey::ALL.len());
    for group in context.groups() {
        if !keys.contains(&group.key) {
            keys.push(group.key);
        }
    }
    for key in FilterKey::ALL {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    keys.into_iter()
        .flat_map(move |key| {
            state.selected(key).iter().map(move |value| ActiveChip {
                key,
                value: value.clone(),
                label: context
                    .option_label(key, value)
                    .unwrap_or(value.as_str())
                    .to_string(),
            })
        })
        .collect()
}

/// One selectable option with its checked state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swatch: Option<String>,
    pub selected: bool,
}

/// A filter group ready to render as a checkbox list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub key: FilterKey,
    pub label: String,
    pub options: Vec<OptionView>,
    /// Number of selected values for this key, including values with no
    /// matching option.
    pub selected_count: usize,
}

/// Builds the checkbox view of every filter group.
pub fn option_views(state: &FilterState, context: &FilterContext<'_>) -> Vec<GroupView> {
    context
        .groups()
        .iter()
        .map(|group| GroupView {
            key: group.key,
            label: group.label.clone(),
            options: group
                .options
                .iter()
                .map(|option| OptionView {
                    value: option.value.clone(),
                    label: option.label.clone(),
                    swatch: option.swatch.clone(),
                    selected: state.is_selected(group.key, &option.value),
                })
                .collect(),
            selected_count: state.selected(group.key).len(),
        })
        .collect()
}

/// One evaluation pass: state derived from a query plus the resulting
/// products and chips.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<'a> {
    pub state: FilterState,
    pub sort: SortKey,
    pub products: Vec<&'a Product>,
    pub chips: Vec<ActiveChip>,
    /// Size of the unfiltered collection.
    pub total: usize,
}

impl<'a> Listing<'a> {
    /// Derives state from `query`, then filters and sorts `products`.
    pub fn evaluate(query: &str, products: &'a [Product], context: &FilterContext<'_>) -> Self {
        let params = codec::decode(query);
        let state = FilterState::from_params(&params);
        let sort = SortKey::from_params(&params);

        if let Some(raw) = params.first(super::state::SORT_PARAM) {
            if SortKey::parse(raw).is_none() {
                tracing::warn!(sort = raw, "unrecognized sort key, using featured order");
            }
        }
        for value in state.selected(FilterKey::Price) {
            if context.find_price_range(value).is_none() {
                tracing::warn!(value = %value, "price filter does not match any price range");
            }
        }

        let evaluator = FilterEvaluator::new(&state, context);
        let matched = evaluator.filter_products(products);
        let sorted = sort_products(matched, sort, products);
        let chips = active_chips(&state, context);

        tracing::debug!(
            query,
            sort = %sort,
            selected = state.total_selected(),
            shown = sorted.len(),
            "evaluated listing"
        );

        Self {
            state,
            sort,
            products: sorted,
            chips,
            total: products.len(),
        }
    }

    /// Evaluates `query` against a whole catalog.
    pub fn from_catalog(query: &str, catalog: &'a Catalog) -> Self {
        let context = FilterContext::from_catalog(catalog);
        Self::evaluate(query, &catalog.products, &context)
    }

    /// Returns true if nothing matched. This is a normal state, rendered as a
    /// "no matches" message.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
