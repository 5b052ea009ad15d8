//! Currency value object.

use core::fmt;
use core::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use valuekit_core::{Component, ValueObject, accept, is_blank};

use crate::error::CurrencyError;

/// Currency codes accepted by [`Currency::create`].
pub const VALID_CURRENCY_CODES: &[&str] = &["USD", "PHP", "EUR", "GBP", "JPY"];

static USD: Lazy<Currency> = Lazy::new(|| Currency::unchecked("USD", "$"));
static PHP: Lazy<Currency> = Lazy::new(|| Currency::unchecked("PHP", "₱"));
static EUR: Lazy<Currency> = Lazy::new(|| Currency::unchecked("EUR", "€"));
static GBP: Lazy<Currency> = Lazy::new(|| Currency::unchecked("GBP", "£"));
static JPY: Lazy<Currency> = Lazy::new(|| Currency::unchecked("JPY", "¥"));
static EMPTY: Lazy<Currency> = Lazy::new(|| Currency::unchecked("", ""));

/// An ISO-style currency: three-letter code plus display symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CurrencyRecord")]
pub struct Currency {
    code: String,
    symbol: String,
}

impl Currency {
    fn unchecked(code: &str, symbol: &str) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
        }
    }

    /// Strict factory. The code is trimmed and upper-cased; the symbol trimmed.
    pub fn create(code: &str, symbol: &str) -> Result<Self, CurrencyError> {
        let code = normalize_code(code)?;

        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(CurrencyError::invalid_symbol(symbol));
        }

        Ok(Self {
            code,
            symbol: symbol.to_string(),
        })
    }

    /// Fallible factory: `None` when [`Currency::create`] would fail.
    pub fn try_create(code: &str, symbol: &str) -> Option<Self> {
        accept(Self::create(code, symbol))
    }

    /// Resolve a code to its predefined currency.
    ///
    /// Blank input yields [`Currency::empty`]; an unsupported code is an error.
    pub fn parse(code: &str) -> Result<Self, CurrencyError> {
        if is_blank(code) {
            return Ok(Self::empty().clone());
        }
        let code = normalize_code(code)?;
        predefined(&code)
            .cloned()
            .ok_or_else(|| CurrencyError::invalid_code(&code))
    }

    pub fn try_parse(code: &str) -> Option<Self> {
        accept(Self::parse(code))
    }

    /// The "no currency" singleton (`code = ""`, `symbol = ""`).
    pub fn empty() -> &'static Currency {
        &EMPTY
    }

    pub fn usd() -> &'static Currency {
        &USD
    }

    pub fn php() -> &'static Currency {
        &PHP
    }

    pub fn eur() -> &'static Currency {
        &EUR
    }

    pub fn gbp() -> &'static Currency {
        &GBP
    }

    pub fn jpy() -> &'static Currency {
        &JPY
    }

    /// Currency used when none is specified (PHP).
    pub fn default_currency() -> &'static Currency {
        Self::php()
    }

    pub fn valid_currency_codes() -> &'static [&'static str] {
        VALID_CURRENCY_CODES
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn with_symbol(&self, symbol: &str) -> Result<Self, CurrencyError> {
        Self::create(&self.code, symbol)
    }
}

fn normalize_code(code: &str) -> Result<String, CurrencyError> {
    let normalized = code.trim().to_uppercase();
    if normalized.len() != 3 || !VALID_CURRENCY_CODES.contains(&normalized.as_str()) {
        return Err(CurrencyError::invalid_code(code));
    }
    Ok(normalized)
}

fn predefined(code: &str) -> Option<&'static Currency> {
    match code {
        "USD" => Some(Currency::usd()),
        "PHP" => Some(Currency::php()),
        "EUR" => Some(Currency::eur()),
        "GBP" => Some(Currency::gbp()),
        "JPY" => Some(Currency::jpy()),
        _ => None,
    }
}

impl ValueObject for Currency {
    fn atomic_values(&self) -> Vec<Component<'_>> {
        vec![Component::Text(&self.code), Component::Text(&self.symbol)]
    }
}

valuekit_core::impl_value_semantics!(Currency);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("[Empty Currency]")
        } else {
            write!(f, "{} ({})", self.symbol, self.code)
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Wire shape accepted when deserializing a [`Currency`].
#[derive(Deserialize)]
struct CurrencyRecord {
    code: String,
    symbol: String,
}

impl TryFrom<CurrencyRecord> for Currency {
    type Error = CurrencyError;

    fn try_from(record: CurrencyRecord) -> Result<Self, Self::Error> {
        if is_blank(&record.code) && is_blank(&record.symbol) {
            return Ok(Self::empty().clone());
        }
        Self::create(&record.code, &record.symbol)
    }
}
