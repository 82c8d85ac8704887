//! Built-in seed catalog.
//!
//! The seed mirrors the storefront's launch assortment: fifteen shoes, the
//! five filter groups shown in the sidebar, and the four price ranges backing
//! the `price` filter.

use chrono::NaiveDate;

use crate::models::{
    Badge, BadgeTone, FilterGroup, FilterKey, FilterOption, Gender, PriceRange, Product,
    ShoeHeight,
};

/// Static description of a seed product; converted into an owned [`Product`].
struct ProductSeed {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    genders: &'static [Gender],
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
    price: f64,
    height: ShoeHeight,
    image_src: &'static str,
    badge: (&'static str, BadgeTone),
    released: (i32, u32, u32),
}

impl ProductSeed {
    fn to_product(&self) -> Product {
        let (year, month, day) = self.released;
        Product {
            id: self.id.to_string(),
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            description: Some(self.description.to_string()),
            genders: self.genders.to_vec(),
            sizes: self.sizes.iter().map(|s| s.to_string()).collect(),
            colors: self.colors.iter().map(|c| c.to_string()).collect(),
            price: self.price,
            height: self.height,
            image_src: Some(self.image_src.to_string()),
            badge: Some(Badge::new(self.badge.0, self.badge.1)),
            release_date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        }
    }
}

/// Returns the built-in price ranges.
pub fn price_ranges() -> Vec<PriceRange> {
    vec![
        PriceRange::bounded("0-50", "$0 - $50", 0.0, 50.0),
        PriceRange::bounded("50-100", "$50 - $100", 50.0, 100.0),
        PriceRange::bounded("100-150", "$100 - $150", 100.0, 150.0),
        PriceRange::open_ended("150+", "Over $150", 150.0),
    ]
}

/// Returns the built-in filter groups in sidebar order.
pub fn filter_groups() -> Vec<FilterGroup> {
    let sizes = ["6", "7", "8", "9", "10", "11", "12", "13"]
        .into_iter()
        .map(|size| FilterOption::new(size, size))
        .collect();

    vec![
        FilterGroup::new(
            FilterKey::Gender,
            "Gender",
            vec![
                FilterOption::new("men", "Men"),
                FilterOption::new("women", "Women"),
                FilterOption::new("kids", "Kids"),
            ],
        ),
        FilterGroup::new(FilterKey::Size, "Size", sizes),
        FilterGroup::new(
            FilterKey::Color,
            "Color",
            vec![
                FilterOption::with_swatch("black", "Black", "#111111"),
                FilterOption::with_swatch("white", "White", "#f5f5f5"),
                FilterOption::with_swatch("red", "Red", "#d33918"),
                FilterOption::with_swatch("blue", "Blue", "#1d4ed8"),
                FilterOption::with_swatch("green", "Green", "#007d48"),
                FilterOption::with_swatch("grey", "Grey", "#9ca3af"),
                FilterOption::with_swatch("brown", "Brown", "#92400e"),
                FilterOption::with_swatch("pink", "Pink", "#db2777"),
            ],
        ),
        FilterGroup::new(
            FilterKey::Price,
            "Price",
            price_ranges().iter().map(PriceRange::to_option).collect(),
        ),
        FilterGroup::new(
            FilterKey::Height,
            "Shoe Height",
            vec![
                FilterOption::new("low", "Low Top"),
                FilterOption::new("mid", "Mid Top"),
                FilterOption::new("high", "High Top"),
            ],
        ),
    ]
}

/// Returns the built-in products in featured order.
pub fn products() -> Vec<Product> {
    SEEDS.iter().map(ProductSeed::to_product).collect()
}

const SEEDS: &[ProductSeed] = &[
    ProductSeed {
        id: "air-force-1-07",
        title: "Nike Air Force 1 '07",
        subtitle: "Men's Shoes",
        description: "The legend lives on in this low-cut classic.",
        genders: &[Gender::Men, Gender::Women],
        sizes: &["7", "8", "9", "10", "11", "12", "13"],
        colors: &["white"],
        price: 110.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-1.jpg",
        badge: ("Best Seller", BadgeTone::Red),
        released: (2024, 9, 18),
    },
    ProductSeed {
        id: "air-max-sc",
        title: "Nike Air Max SC",
        subtitle: "Men's Shoes",
        description: "A mix of airy mesh and suede overlays for everyday comfort.",
        genders: &[Gender::Men],
        sizes: &["7", "8", "9", "10", "11", "12"],
        colors: &["white", "blue"],
        price: 100.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-2.webp",
        badge: ("Sustainable Materials", BadgeTone::Green),
        released: (2024, 11, 2),
    },
    ProductSeed {
        id: "dunk-low-retro",
        title: "Nike Dunk Low Retro",
        subtitle: "Men's Shoes",
        description: "Heritage hoops styling with padded comfort.",
        genders: &[Gender::Men, Gender::Women],
        sizes: &["6", "7", "8", "9", "10", "11", "12"],
        colors: &["blue", "white"],
        price: 125.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-3.webp",
        badge: ("Best Seller", BadgeTone::Red),
        released: (2024, 8, 12),
    },
    ProductSeed {
        id: "air-jordan-1-mid",
        title: "Air Jordan 1 Mid SE",
        subtitle: "Men's Shoes",
        description: "Premium leather with a supportive mid profile.",
        genders: &[Gender::Men, Gender::Women],
        sizes: &["7", "8", "9", "10", "11", "12", "13"],
        colors: &["black", "grey"],
        price: 135.0,
        height: ShoeHeight::Mid,
        image_src: "/shoes/shoe-4.webp",
        badge: ("Best Seller", BadgeTone::Red),
        released: (2024, 7, 5),
    },
    ProductSeed {
        id: "pegasus-trail-4",
        title: "Nike Pegasus Trail 4 GORE-TEX",
        subtitle: "Men's Waterproof Shoes",
        description: "Weather-ready cushioning for off-road runs.",
        genders: &[Gender::Men],
        sizes: &["8", "9", "10", "11", "12"],
        colors: &["green", "black"],
        price: 165.0,
        height: ShoeHeight::High,
        image_src: "/shoes/shoe-5.avif",
        badge: ("New Arrival", BadgeTone::Orange),
        released: (2024, 12, 1),
    },
    ProductSeed {
        id: "invincible-3",
        title: "Nike Invincible 3",
        subtitle: "Women's Road Running Shoes",
        description: "Plush cushioning for long weekend miles.",
        genders: &[Gender::Women],
        sizes: &["6", "7", "8", "9", "10", "11"],
        colors: &["pink", "white"],
        price: 180.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-6.avif",
        badge: ("Best Seller", BadgeTone::Red),
        released: (2024, 10, 24),
    },
    ProductSeed {
        id: "court-vision-low",
        title: "Nike Court Vision Low",
        subtitle: "Women's Shoes",
        description: "Retro basketball vibes in a streamlined profile.",
        genders: &[Gender::Women],
        sizes: &["6", "7", "8", "9", "10", "11"],
        colors: &["white", "pink"],
        price: 75.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-7.avif",
        badge: ("New Arrival", BadgeTone::Orange),
        released: (2024, 11, 15),
    },
    ProductSeed {
        id: "air-max-90-ltr",
        title: "Nike Air Max 90 LTR",
        subtitle: "Women's Shoes",
        description: "Classic Air cushioning with leather overlays.",
        genders: &[Gender::Women],
        sizes: &["6", "7", "8", "9", "10", "11"],
        colors: &["white", "green"],
        price: 125.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-9.avif",
        badge: ("Best Seller", BadgeTone::Red),
        released: (2024, 9, 30),
    },
    ProductSeed {
        id: "blazer-mid-77",
        title: "Nike Blazer Mid '77 Vintage",
        subtitle: "Women's Shoes",
        description: "A heritage mid-top with retro suede accents.",
        genders: &[Gender::Women],
        sizes: &["6", "7", "8", "9", "10"],
        colors: &["white", "black"],
        price: 100.0,
        height: ShoeHeight::Mid,
        image_src: "/shoes/shoe-8.avif",
        badge: ("Classic", BadgeTone::Orange),
        released: (2024, 8, 28),
    },
    ProductSeed {
        id: "free-metcon-5",
        title: "Nike Free Metcon 5",
        subtitle: "Women's Training Shoes",
        description: "Stable yet flexible for strength and cardio days.",
        genders: &[Gender::Women],
        sizes: &["6", "7", "8", "9", "10", "11"],
        colors: &["pink", "white"],
        price: 130.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-10.avif",
        badge: ("Gym Essential", BadgeTone::Green),
        released: (2024, 9, 12),
    },
    ProductSeed {
        id: "vomero-17",
        title: "Nike Air Zoom Vomero 17",
        subtitle: "Men's Road Running Shoes",
        description: "Responsive cushioning built for daily training.",
        genders: &[Gender::Men],
        sizes: &["7", "8", "9", "10", "11", "12"],
        colors: &["black", "white"],
        price: 180.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-11.avif",
        badge: ("New Arrival", BadgeTone::Orange),
        released: (2024, 12, 5),
    },
    ProductSeed {
        id: "jordan-series-es",
        title: "Jordan Series ES",
        subtitle: "Men's Shoes",
        description: "Laid-back style inspired by Jordan heritage.",
        genders: &[Gender::Men, Gender::Women],
        sizes: &["7", "8", "9", "10", "11", "12"],
        colors: &["green", "white"],
        price: 105.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-12.avif",
        badge: ("Everyday Wear", BadgeTone::Green),
        released: (2024, 7, 22),
    },
    ProductSeed {
        id: "revolution-7",
        title: "Nike Revolution 7",
        subtitle: "Kids' Road Running Shoes",
        description: "Lightweight feel for energetic runs.",
        genders: &[Gender::Kids],
        sizes: &["3", "4", "5", "6", "7"],
        colors: &["blue", "black"],
        price: 70.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-13.avif",
        badge: ("Best Seller", BadgeTone::Red),
        released: (2024, 6, 10),
    },
    ProductSeed {
        id: "pegasus-41",
        title: "Nike Pegasus 41",
        subtitle: "Men's Road Running Shoes",
        description: "Smooth transitions and breathable mesh upper.",
        genders: &[Gender::Men, Gender::Women],
        sizes: &["7", "8", "9", "10", "11", "12"],
        colors: &["grey", "green"],
        price: 150.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-14.avif",
        badge: ("Daily Trainer", BadgeTone::Green),
        released: (2024, 9, 2),
    },
    ProductSeed {
        id: "flex-runner-2",
        title: "Nike Flex Runner 2",
        subtitle: "Kids' Easy On/Off Shoes",
        description: "Slip-on design with flexible cushioning.",
        genders: &[Gender::Kids],
        sizes: &["3", "4", "5", "6", "7"],
        colors: &["brown", "black"],
        price: 50.0,
        height: ShoeHeight::Low,
        image_src: "/shoes/shoe-15.avif",
        badge: ("Easy On", BadgeTone::Orange),
        released: (2024, 10, 1),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(products().len(), 15);
        assert_eq!(filter_groups().len(), 5);
        assert_eq!(price_ranges().len(), 4);
    }

    #[test]
    fn test_seed_release_dates_are_valid() {
        for product in products() {
            assert_ne!(
                product.release_date,
                NaiveDate::default(),
                "seed {} has an invalid release date",
                product.id
            );
        }
    }

    #[test]
    fn test_groups_follow_filter_key_order() {
        let keys: Vec<FilterKey> = filter_groups().iter().map(|g| g.key).collect();
        assert_eq!(keys, FilterKey::ALL.to_vec());
    }

    #[test]
    fn test_price_group_mirrors_price_ranges() {
        let groups = filter_groups();
        let price_group = groups.iter().find(|g| g.key == FilterKey::Price).unwrap();
        let values: Vec<&str> = price_group.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["0-50", "50-100", "100-150", "150+"]);
    }

    #[test]
    fn test_every_seed_price_falls_in_a_range() {
        let ranges = price_ranges();
        for product in products() {
            let hits = ranges.iter().filter(|r| r.contains(product.price)).count();
            assert_eq!(hits, 1, "{} should fall in exactly one range", product.id);
        }
    }
}
