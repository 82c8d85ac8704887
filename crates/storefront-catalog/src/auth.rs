//! Sign-in and sign-up form validation.
//!
//! Validation is a pure function of the submitted values: it never talks to a
//! backend and reports at most one message per field.
//!
//! # Example
//!
//! ```
//! use storefront_catalog::auth::{validate, AuthField, AuthFormValues, AuthVariant};
//!
//! let values = AuthFormValues {
//!     email: "runner@example.com".to_string(),
//!     password: "short".to_string(),
//!     ..Default::default()
//! };
//!
//! let errors = validate(AuthVariant::SignIn, &values);
//! assert_eq!(
//!     errors.get(AuthField::Password),
//!     Some("Password must be at least 8 characters")
//! );
//! assert!(errors.get(AuthField::Email).is_none());
//! ```

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum length of a trimmed password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum length of a trimmed display name (sign-up only).
pub const MIN_NAME_LENGTH: usize = 2;

/// Which authentication form is being submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthVariant {
    SignIn,
    SignUp,
}

impl AuthVariant {
    pub fn is_sign_up(self) -> bool {
        matches!(self, AuthVariant::SignUp)
    }
}

/// Fields of the authentication forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    /// Fields in form order.
    pub const ALL: [AuthField; 4] = [
        AuthField::Name,
        AuthField::Email,
        AuthField::Password,
        AuthField::ConfirmPassword,
    ];

    /// Returns the form field name.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthField::Name => "name",
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::ConfirmPassword => "confirmPassword",
        }
    }
}

impl fmt::Display for AuthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthFormValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    /// Returns true if no field has an error.
    pub fn is_empty(&self) -> bool {
        AuthField::ALL.iter().all(|field| self.get(*field).is_none())
    }

    /// Returns the message for `field`, if any.
    pub fn get(&self, field: AuthField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Sets the message for `field`.
    pub fn set(&mut self, field: AuthField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    /// Clears the message for `field`, as happens when the user edits it.
    pub fn clear(&mut self, field: AuthField) {
        *self.slot_mut(field) = None;
    }

    /// Iterates over `(field, message)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (AuthField, &str)> {
        AuthField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|message| (field, message)))
    }

    fn slot(&self, field: AuthField) -> &Option<String> {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: AuthField) -> &mut Option<String> {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| Regex::new(r"[^\s@]+@[^\s@]+\.[^\s@]+").expect("valid email regex"))
}

/// Validates submitted form values.
///
/// All values are trimmed before checking. Name and password confirmation are
/// only checked for [`AuthVariant::SignUp`].
pub fn validate(variant: AuthVariant, values: &AuthFormValues) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let email = values.email.trim();
    let password = values.password.trim();

    if variant.is_sign_up() {
        let name = values.name.trim();
        let confirm_password = values.confirm_password.trim();

        if name.is_empty() {
            errors.set(AuthField::Name, "Name is required");
        } else if name.chars().count() < MIN_NAME_LENGTH {
            errors.set(AuthField::Name, "Name must be at least 2 characters");
        }

        if confirm_password.is_empty() {
            errors.set(AuthField::ConfirmPassword, "Confirm password is required");
        } else if !password.is_empty() && confirm_password != password {
            errors.set(AuthField::ConfirmPassword, "Passwords do not match");
        }
    }

    if email.is_empty() {
        errors.set(AuthField::Email, "Email is required");
    } else if !email_pattern().is_match(email) {
        errors.set(AuthField::Email, "Enter a valid email address");
    }

    if password.is_empty() {
        errors.set(AuthField::Password, "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.set(AuthField::Password, "Password must be at least 8 characters");
    }

    errors
}
