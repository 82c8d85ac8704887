//! Active filter chip output formatting.

use serde::Serialize;
use storefront_query::ActiveChip;

use super::helpers::format_header;

/// JSON output structure for the chips command.
#[derive(Serialize)]
pub struct ChipsOutput<'a> {
    pub chips: &'a [ActiveChip],
}

/// Formats chips as JSON.
pub fn format_chips_json(chips: &[ActiveChip]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ChipsOutput { chips })
}

/// Formats chips as a table.
pub fn format_chips_table(chips: &[ActiveChip], use_colors: bool) -> String {
    if chips.is_empty() {
        return "No active filters.\n".to_string();
    }

    let mut output = format_header(&format!("{:<8} {:<10} {}", "Key", "Value", "Label"), use_colors);
    for chip in chips {
        output.push_str(&format!("{:<8} {:<10} {}\n", chip.key.as_str(), chip.value, chip.label));
    }
    output
}
