//! Monetary value objects: currencies, amounts and two-tier prices.
//!
//! All types are immutable and validated on construction. Amounts are
//! `rust_decimal::Decimal`, never floats.

pub mod currency;
pub mod error;
mod format;
pub mod money;
pub mod price;

pub use currency::{Currency, VALID_CURRENCY_CODES};
pub use error::{
    CurrencyError, CurrencyErrorCode, MoneyError, MoneyErrorCode, PriceError, PriceErrorCode,
};
pub use money::Money;
pub use price::Price;
