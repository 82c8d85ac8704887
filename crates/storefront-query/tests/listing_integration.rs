//! Integration tests for the listing engine against the built-in catalog.
//!
//! Each test walks through a browsing session the way the listing page does:
//! take the current query, apply an interaction, navigate, re-evaluate.

use storefront_catalog::models::FilterKey;
use storefront_catalog::Catalog;
use storefront_query::codec::{build_query_url, decode, encode};
use storefront_query::{clear_all, remove_chip, set_sort, toggle_filter, Listing, SortKey};

fn ids(listing: &Listing<'_>) -> Vec<String> {
    listing.products.iter().map(|p| p.id.clone()).collect()
}

// ============================================================================
// Browsing session
// ============================================================================

#[test]
fn test_browsing_session() {
    let catalog = Catalog::builtin();

    let listing = Listing::from_catalog("", &catalog);
    assert_eq!(listing.products.len(), 15);
    assert!(listing.chips.is_empty());

    let query = toggle_filter("", FilterKey::Gender, "women");
    assert_eq!(query, "gender=women");
    assert_eq!(Listing::from_catalog(&query, &catalog).products.len(), 10);

    let query = toggle_filter(&query, FilterKey::Color, "pink");
    assert_eq!(query, "gender=women&color=pink");
    assert_eq!(Listing::from_catalog(&query, &catalog).products.len(), 3);

    let query = set_sort(&query, SortKey::PriceAsc);
    assert_eq!(query, "gender=women&color=pink&sort=price_asc");
    let listing = Listing::from_catalog(&query, &catalog);
    assert_eq!(
        ids(&listing),
        vec!["court-vision-low", "free-metcon-5", "invincible-3"]
    );

    let query = toggle_filter(&query, FilterKey::Price, "100-150");
    let listing = Listing::from_catalog(&query, &catalog);
    assert_eq!(ids(&listing), vec!["free-metcon-5"]);

    let labels: Vec<&str> = listing.chips.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Women", "Pink", "$100 - $150"]);

    let pink = listing.chips[1].clone();
    let query = remove_chip(&query, &pink);
    assert_eq!(query, "gender=women&sort=price_asc&price=100-150");
    let listing = Listing::from_catalog(&query, &catalog);
    assert_eq!(
        ids(&listing),
        vec![
            "blazer-mid-77",
            "jordan-series-es",
            "air-force-1-07",
            "dunk-low-retro",
            "air-max-90-ltr",
            "free-metcon-5",
            "air-jordan-1-mid",
        ]
    );

    let query = clear_all(&query);
    assert_eq!(query, "sort=price_asc");
    let listing = Listing::from_catalog(&query, &catalog);
    assert_eq!(listing.products.len(), 15);
    assert_eq!(listing.products[0].id, "flex-runner-2");
    assert_eq!(listing.sort, SortKey::PriceAsc);

    assert_eq!(
        build_query_url("/products", &query),
        "/products?sort=price_asc"
    );
}

#[test]
fn test_repeated_key_links_are_canonicalized_on_first_interaction() {
    let catalog = Catalog::builtin();
    let shared = "?size=9&size=10&utm_campaign=spring";

    let listing = Listing::from_catalog(shared, &catalog);
    let by_comma = Listing::from_catalog("size=9,10", &catalog);
    assert_eq!(ids(&listing), ids(&by_comma));

    let query = toggle_filter(shared, FilterKey::Height, "mid");
    assert_eq!(query, "size=9,10&utm_campaign=spring&height=mid");
}

#[test]
fn test_chip_removal_for_every_chip_empties_the_state() {
    let catalog = Catalog::builtin();
    let mut query = "gender=men&size=9,10&color=black&price=150%2B&height=high".to_string();

    loop {
        let listing = Listing::from_catalog(&query, &catalog);
        let Some(chip) = listing.chips.first().cloned() else {
            break;
        };
        let next = remove_chip(&query, &chip);
        assert_ne!(next, query, "removing {:?} changed nothing", chip);
        query = next;
    }

    assert_eq!(query, "");
}

#[test]
fn test_price_and_height_together() {
    let catalog = Catalog::builtin();
    let listing = Listing::from_catalog("price=150%2B&height=high", &catalog);
    assert_eq!(ids(&listing), vec!["pegasus-trail-4"]);
}

// ============================================================================
// Codec properties
// ============================================================================

#[test]
fn test_encode_decode_preserves_canonical_queries() {
    let queries = [
        "gender=men,women&sort=price_desc",
        "color=red&size=9,10,11",
        "price=150%2B",
        "q=air+max&height=low",
    ];
    for query in queries {
        assert_eq!(encode(&decode(query)), query);
    }
}

#[test]
fn test_decode_encode_is_idempotent() {
    let messy = [
        "?color=red&color=&size=,9,&sort=newest",
        "&&gender=kids&=orphan",
        "color= red , blue ",
    ];
    for query in messy {
        let once = encode(&decode(query));
        let twice = encode(&decode(&once));
        assert_eq!(once, twice);
        assert!(!once.contains("=&") && !once.ends_with('='), "{once}");
    }
}
