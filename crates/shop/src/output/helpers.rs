//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use storefront_catalog::models::{Badge, BadgeTone};

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a price in dollars, dropping the cents when they are zero.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

/// Formats a badge, colored by its tone.
pub fn format_badge(badge: Option<&Badge>, use_colors: bool) -> String {
    let Some(badge) = badge else {
        return String::new();
    };

    if use_colors {
        match badge.tone {
            BadgeTone::Red => badge.label.red().to_string(),
            BadgeTone::Green => badge.label.green().to_string(),
            BadgeTone::Orange => badge.label.yellow().to_string(),
        }
    } else {
        badge.label.clone()
    }
}

/// Formats a table header line.
pub fn format_header(header: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", header.dimmed())
    } else {
        format!("{header}\n")
    }
}
