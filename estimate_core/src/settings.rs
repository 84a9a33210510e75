//! # App Settings
//!
//! User-facing preferences plus the runtime environment, read from
//! environment variables with sensible defaults:
//!
//! | Variable            | Values                   | Default |
//! |---------------------|--------------------------|---------|
//! | `BUILDCOST_ENV`     | `dev`, `prod`            | `dev`   |
//! | `BUILDCOST_THEME`   | `light`, `dark`          | `light` |
//! | `BUILDCOST_CURRENCY`| `INR`, `USD`, `EUR`, `GBP` | `INR` |
//!
//! The currency is a display preference only; amounts are never converted.

use std::env;

use serde::{Deserialize, Serialize};

pub const ENV_VAR: &str = "BUILDCOST_ENV";
pub const THEME_VAR: &str = "BUILDCOST_THEME";
pub const CURRENCY_VAR: &str = "BUILDCOST_CURRENCY";

/// Runtime environment; drives log verbosity and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "prod" | "production" => Environment::Prod,
            _ => Environment::Dev,
        }
    }

    pub fn from_env() -> Self {
        env::var(ENV_VAR).map(|v| Self::parse(&v)).unwrap_or_default()
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Environment::Dev)
    }
}

/// Light or dark UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Preferred display currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    Inr,
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Inr, Currency::Usd, Currency::Eur, Currency::Gbp];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Inr => "₹ Indian Rupee (INR)",
            Currency::Usd => "$ US Dollar (USD)",
            Currency::Eur => "€ Euro (EUR)",
            Currency::Gbp => "£ British Pound (GBP)",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

/// User preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub theme: ThemeMode,
    pub currency: Currency,
}

impl AppSettings {
    /// Defaults overridden by `BUILDCOST_THEME` / `BUILDCOST_CURRENCY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppSettings::from_env`] with a custom variable source.
    ///
    /// Unrecognized values are ignored with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = AppSettings::default();

        if let Some(raw) = lookup(THEME_VAR) {
            match raw.trim().to_lowercase().as_str() {
                "dark" => settings.theme = ThemeMode::Dark,
                "light" => settings.theme = ThemeMode::Light,
                other => tracing::warn!(value = other, "ignoring unknown {}", THEME_VAR),
            }
        }

        if let Some(raw) = lookup(CURRENCY_VAR) {
            match Currency::from_code(&raw) {
                Some(currency) => settings.currency = currency,
                None => tracing::warn!(value = %raw, "ignoring unknown {}", CURRENCY_VAR),
            }
        }

        settings
    }
}
