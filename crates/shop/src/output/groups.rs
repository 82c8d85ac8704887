//! Filter group output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use storefront_query::GroupView;

/// JSON output structure for the groups command.
#[derive(Serialize)]
pub struct GroupsOutput<'a> {
    pub groups: &'a [GroupView],
}

/// Formats filter groups as JSON.
pub fn format_groups_json(groups: &[GroupView]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&GroupsOutput { groups })
}

/// Formats filter groups as checkbox lists.
///
/// Each group heading shows its selected count when non-zero.
pub fn format_groups_table(groups: &[GroupView], use_colors: bool) -> String {
    let mut output = String::new();

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        let heading = if group.selected_count > 0 {
            format!("{} ({})", group.label, group.selected_count)
        } else {
            group.label.clone()
        };
        if use_colors {
            output.push_str(&format!("{}\n", heading.bold()));
        } else {
            output.push_str(&heading);
            output.push('\n');
        }

        for option in &group.options {
            let marker = if option.selected { "[x]" } else { "[ ]" };
            let marker = if use_colors && option.selected {
                marker.green().to_string()
            } else {
                marker.to_string()
            };
            let swatch = option
                .swatch
                .as_deref()
                .map(|s| format!("  {s}"))
                .unwrap_or_default();
            output.push_str(&format!(
                "  {} {:<14} {}{}\n",
                marker, option.label, option.value, swatch
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Catalog;
    use storefront_query::{option_views, FilterContext, FilterState};

    #[test]
    fn test_groups_table_marks_selected() {
        let catalog = Catalog::builtin();
        let context = FilterContext::from_catalog(&catalog);
        let state = FilterState::from_query("color=red&height=mid");
        let groups = option_views(&state, &context);

        let output = format_groups_table(&groups, false);
        assert!(output.starts_with("Gender\n"));
        assert!(output.contains("Color (1)\n"));
        assert!(output.contains("  [x] Red            red  #d33918\n"));
        assert!(output.contains("  [ ] Blue           blue  #1d4ed8\n"));
        assert!(output.contains("Shoe Height (1)\n"));
        assert!(output.contains("  [x] Mid Top        mid\n"));
    }

    #[test]
    fn test_groups_json() {
        let catalog = Catalog::builtin();
        let context = FilterContext::from_catalog(&catalog);
        let groups = option_views(&FilterState::from_query("size=9"), &context);

        let value: serde_json::Value =
            serde_json::from_str(&format_groups_json(&groups).unwrap()).unwrap();
        assert_eq!(value["groups"][1]["key"], "size");
        assert_eq!(value["groups"][1]["selected_count"], 1);
    }
}
