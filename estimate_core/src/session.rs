//! # Login / Signup Forms
//!
//! Field checks for the sign-in screens. There is no account store: any
//! form that passes validation opens a [`Session`] for the given email.
//!
//! ## Example
//!
//! ```rust
//! use estimate_core::session::{LoginForm, SignupForm};
//!
//! let login = LoginForm::new("engineer@example.com", "secret");
//! assert_eq!(login.submit().unwrap().email, "engineer@example.com");
//!
//! let signup = SignupForm {
//!     full_name: "Asha Rao".into(),
//!     email: "asha@example.com".into(),
//!     password: "one".into(),
//!     confirm_password: "two".into(),
//!     accept_terms: true,
//!     ..SignupForm::default()
//! };
//! assert_eq!(signup.submit().unwrap_err().to_string(), "Passwords do not match");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EstimateError, EstimateResult};

pub const MSG_LOGIN_MISSING: &str = "Please fill in all fields";
pub const MSG_SIGNUP_MISSING: &str = "Please fill in all required fields";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_TERMS_REQUIRED: &str = "Please accept the terms and conditions";

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
}

/// Login screen fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        LoginForm {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    /// Validate and open a session.
    pub fn submit(&self) -> EstimateResult<Session> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(EstimateError::validation(MSG_LOGIN_MISSING));
        }
        tracing::info!(email = %self.email.trim(), "signed in");
        Ok(Session {
            email: self.email.trim().to_string(),
        })
    }
}

/// Signup screen fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    /// Optional
    pub company: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(skip_serializing, default)]
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignupForm {
    /// Validate and open a session.
    ///
    /// Checks run in order: required fields, password match, terms.
    pub fn submit(&self) -> EstimateResult<Session> {
        if is_blank(&self.full_name)
            || is_blank(&self.email)
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(EstimateError::validation(MSG_SIGNUP_MISSING));
        }
        if self.password != self.confirm_password {
            return Err(EstimateError::validation(MSG_PASSWORD_MISMATCH));
        }
        if !self.accept_terms {
            return Err(EstimateError::validation(MSG_TERMS_REQUIRED));
        }
        tracing::info!(email = %self.email.trim(), "account created");
        Ok(Session {
            email: self.email.trim().to_string(),
        })
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
