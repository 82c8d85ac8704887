//! Product model and its enumerated attributes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Audience a product is sold for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Men,
    Women,
    Kids,
}

impl Gender {
    /// Returns the filter option value for this gender.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Kids => "kids",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "kids" => Ok(Gender::Kids),
            other => Err(CatalogError::UnknownGender {
                value: other.to_string(),
            }),
        }
    }
}

/// Shoe collar height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShoeHeight {
    #[default]
    Low,
    Mid,
    High,
}

impl ShoeHeight {
    /// Returns the filter option value for this height.
    pub fn as_str(self) -> &'static str {
        match self {
            ShoeHeight::Low => "low",
            ShoeHeight::Mid => "mid",
            ShoeHeight::High => "high",
        }
    }

    /// Returns the display label (e.g. "Mid Top").
    pub fn label(self) -> &'static str {
        match self {
            ShoeHeight::Low => "Low Top",
            ShoeHeight::Mid => "Mid Top",
            ShoeHeight::High => "High Top",
        }
    }
}

impl fmt::Display for ShoeHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShoeHeight {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(ShoeHeight::Low),
            "mid" => Ok(ShoeHeight::Mid),
            "high" => Ok(ShoeHeight::High),
            other => Err(CatalogError::UnknownHeight {
                value: other.to_string(),
            }),
        }
    }
}

/// Color tone of a product badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Red,
    Green,
    #[default]
    Orange,
}

/// Short marketing label shown on a product card ("Best Seller").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    #[serde(default)]
    pub tone: BadgeTone,
}

impl Badge {
    pub fn new(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

/// A product in the catalog.
///
/// Products are immutable once loaded; the query engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable unique identifier (e.g. `"air-force-1-07"`).
    pub id: String,

    pub title: String,

    /// Secondary line such as "Men's Shoes".
    #[serde(default)]
    pub subtitle: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Audiences the product is offered for.
    #[serde(default)]
    pub genders: Vec<Gender>,

    /// Available sizes, as their option values ("9", "10"...).
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Available colorways, as their option values ("black", "white"...).
    #[serde(default)]
    pub colors: Vec<String>,

    /// Price in dollars.
    pub price: f64,

    #[serde(default)]
    pub height: ShoeHeight,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,

    /// Release date, used by the "newest" sort.
    pub release_date: NaiveDate,
}

impl Product {
    /// Returns true if the product is offered for `gender`.
    pub fn has_gender(&self, gender: &str) -> bool {
        self.genders.iter().any(|g| g.as_str() == gender)
    }

    /// Returns true if the product is available in `size`.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Returns true if the product comes in `color`.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

/// Formats color values for display: capitalized and comma-joined.
///
/// ```
/// use storefront_catalog::models::format_colors;
///
/// let colors = vec!["white".to_string(), "blue".to_string()];
/// assert_eq!(format_colors(&colors), "White, Blue");
/// ```
pub fn format_colors(colors: &[String]) -> String {
    colors
        .iter()
        .map(|color| {
            let mut chars = color.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "dunk-low-retro".to_string(),
            title: "Nike Dunk Low Retro".to_string(),
            subtitle: "Men's Shoes".to_string(),
            description: None,
            genders: vec![Gender::Men, Gender::Women],
            sizes: vec!["9".to_string(), "10".to_string()],
            colors: vec!["blue".to_string(), "white".to_string()],
            price: 125.0,
            height: ShoeHeight::Low,
            image_src: None,
            badge: Some(Badge::new("Best Seller", BadgeTone::Red)),
            release_date: NaiveDate::from_ymd_opt(2024, 8, 12).unwrap(),
        }
    }

    #[test]
    fn test_attribute_membership() {
        let product = sample_product();
        assert!(product.has_gender("women"));
        assert!(!product.has_gender("kids"));
        assert!(product.has_size("10"));
        assert!(!product.has_size("13"));
        assert!(product.has_color("blue"));
        assert!(!product.has_color("Blue"));
    }

    #[test]
    fn test_height_labels() {
        assert_eq!(ShoeHeight::Low.label(), "Low Top");
        assert_eq!(ShoeHeight::Mid.label(), "Mid Top");
        assert_eq!(ShoeHeight::High.label(), "High Top");
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("kids".parse::<Gender>().unwrap(), Gender::Kids);
        assert_eq!("high".parse::<ShoeHeight>().unwrap(), ShoeHeight::High);
        assert!(matches!(
            "unisex".parse::<Gender>(),
            Err(CatalogError::UnknownGender { .. })
        ));
        assert!(matches!(
            "ankle".parse::<ShoeHeight>(),
            Err(CatalogError::UnknownHeight { .. })
        ));
    }

    #[test]
    fn test_product_deserializes_with_defaults() {
        let json = r#"{
            "id": "p1",
            "title": "Runner",
            "price": 72,
            "release_date": "2024-06-10"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 72.0);
        assert_eq!(product.height, ShoeHeight::Low);
        assert!(product.genders.is_empty());
        assert!(product.badge.is_none());
        assert_eq!(
            product.release_date,
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
    }

    #[test]
    fn test_badge_tone_defaults_to_orange() {
        let badge: Badge = serde_json::from_str(r#"{"label": "Classic"}"#).unwrap();
        assert_eq!(badge.tone, BadgeTone::Orange);
    }

    #[test]
    fn test_format_colors() {
        assert_eq!(format_colors(&[]), "");
        assert_eq!(
            format_colors(&["green".to_string(), "black".to_string()]),
            "Green, Black"
        );
    }
}
