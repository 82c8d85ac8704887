//! Auth command implementation.
//!
//! Runs sign-in or sign-up form validation and reports per-field errors.

use storefront_catalog::auth::{validate, AuthFormValues, AuthVariant};

use super::{CommandContext, CommandError, Result};
use crate::output::{format_auth_json, format_auth_table};

/// Options for the auth command.
#[derive(Debug)]
pub struct AuthOptions {
    pub variant: AuthVariant,
    pub values: AuthFormValues,
}

/// Executes the auth command.
///
/// # Errors
///
/// Returns `CommandError::Validation` if any field is invalid, after the
/// field errors have been printed.
pub fn execute(ctx: &CommandContext, opts: &AuthOptions) -> Result<()> {
    let errors = validate(opts.variant, &opts.values);

    if ctx.json_output {
        println!("{}", format_auth_json(opts.variant, &errors)?);
    } else if !ctx.quiet {
        print!("{}", format_auth_table(&errors, ctx.use_colors));
    }

    let invalid = errors.iter().count();
    if invalid > 0 {
        let noun = if invalid == 1 { "field" } else { "fields" };
        return Err(CommandError::Validation(format!("{invalid} invalid {noun}")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_ctx() -> CommandContext {
        let mut ctx = CommandContext::for_test();
        ctx.quiet = true;
        ctx
    }

    #[test]
    fn test_valid_sign_in() {
        let opts = AuthOptions {
            variant: AuthVariant::SignIn,
            values: AuthFormValues {
                email: "ada@example.com".to_string(),
                password: "correct-horse".to_string(),
                ..AuthFormValues::default()
            },
        };
        assert!(execute(&quiet_ctx(), &opts).is_ok());
    }

    #[test]
    fn test_invalid_sign_up_reports_count() {
        let opts = AuthOptions {
            variant: AuthVariant::SignUp,
            values: AuthFormValues {
                name: "Ada".to_string(),
                email: "ada@example".to_string(),
                password: "correct-horse".to_string(),
                confirm_password: "correct-horse!".to_string(),
            },
        };
        match execute(&quiet_ctx(), &opts) {
            Err(CommandError::Validation(msg)) => assert_eq!(msg, "2 invalid fields"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
