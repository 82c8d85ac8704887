//! Auth form validation output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;
use storefront_catalog::auth::{AuthVariant, FieldErrors};

/// JSON output structure for the auth command.
#[derive(Serialize)]
pub struct AuthOutput<'a> {
    pub variant: AuthVariant,
    pub valid: bool,
    pub errors: &'a FieldErrors,
}

/// Formats a validation result as JSON.
pub fn format_auth_json(
    variant: AuthVariant,
    errors: &FieldErrors,
) -> Result<String, serde_json::Error> {
    let output = AuthOutput {
        variant,
        valid: errors.is_empty(),
        errors,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a validation result as one line per invalid field.
pub fn format_auth_table(errors: &FieldErrors, use_colors: bool) -> String {
    if errors.is_empty() {
        let ok = "All fields are valid.";
        return if use_colors {
            format!("{}\n", ok.green())
        } else {
            format!("{ok}\n")
        };
    }

    let mut output = String::new();
    for (field, message) in errors.iter() {
        let name = format!("{:<16}", field.as_str());
        if use_colors {
            output.push_str(&format!("{} {}\n", name.red(), message));
        } else {
            output.push_str(&format!("{name} {message}\n"));
        }
    }
    output
}
