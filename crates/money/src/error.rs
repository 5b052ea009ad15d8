//! Error kinds of the monetary value objects.

use rust_decimal::Decimal;

use crate::currency::VALID_CURRENCY_CODES;

valuekit_core::value_error! {
    /// Rejection raised by [`crate::Currency`] factories.
    CurrencyError, CurrencyErrorCode, "Currency" {
        InvalidCurrencyCode,
        InvalidCurrencySymbol,
    }
}

impl CurrencyError {
    pub fn invalid_code(code: &str) -> Self {
        Self::new(
            CurrencyErrorCode::InvalidCurrencyCode,
            code,
            format!(
                "Invalid currency code '{code}'. Valid codes are: {}",
                VALID_CURRENCY_CODES.join(", ")
            ),
        )
    }

    pub fn invalid_symbol(symbol: &str) -> Self {
        Self::new(
            CurrencyErrorCode::InvalidCurrencySymbol,
            symbol,
            format!("Invalid currency symbol '{symbol}'. Symbol cannot be empty"),
        )
    }
}

valuekit_core::value_error! {
    /// Rejection raised by [`crate::Money`] factories and arithmetic.
    MoneyError, MoneyErrorCode, "Money" {
        NegativeAmount,
        InvalidCurrency,
        CurrencyMismatch,
        Overflow,
    }
}

impl MoneyError {
    pub fn negative_amount(amount: Decimal) -> Self {
        Self::new(
            MoneyErrorCode::NegativeAmount,
            amount.to_string(),
            format!("Amount cannot be negative. Provided: {amount}"),
        )
    }

    pub fn invalid_currency() -> Self {
        Self::new(
            MoneyErrorCode::InvalidCurrency,
            "",
            "Currency is required and cannot be empty".to_string(),
        )
    }

    /// The result of `operation` does not fit in a `Decimal`.
    pub fn overflow(operation: &str, amount: Decimal) -> Self {
        Self::new(
            MoneyErrorCode::Overflow,
            amount.to_string(),
            format!("Cannot {operation} {amount}: result is out of range"),
        )
    }

    pub fn currency_mismatch(expected: &str, actual: &str) -> Self {
        Self::new(
            MoneyErrorCode::CurrencyMismatch,
            actual,
            format!("Cannot operate on different currencies: {expected} and {actual}"),
        )
    }
}

valuekit_core::value_error! {
    /// Rejection raised by [`crate::Price`] factories and adjustments.
    PriceError, PriceErrorCode, "Price" {
        NegativeStandardPrice,
        NegativePeakPrice,
        PeakBelowStandard,
        InvalidCurrency,
        InvalidPercentage,
        Overflow,
    }
}

impl PriceError {
    pub fn negative_standard_price(price: Decimal) -> Self {
        Self::new(
            PriceErrorCode::NegativeStandardPrice,
            price.to_string(),
            format!("Standard price cannot be negative. Provided: {price}"),
        )
    }

    pub fn negative_peak_price(price: Decimal) -> Self {
        Self::new(
            PriceErrorCode::NegativePeakPrice,
            price.to_string(),
            format!("Peak price cannot be negative. Provided: {price}"),
        )
    }

    pub fn peak_below_standard(standard: Decimal, peak: Decimal) -> Self {
        Self::new(
            PriceErrorCode::PeakBelowStandard,
            peak.to_string(),
            format!("Peak price ({peak}) cannot be lower than standard price ({standard})"),
        )
    }

    pub fn invalid_currency() -> Self {
        Self::new(
            PriceErrorCode::InvalidCurrency,
            "",
            "Currency is required and cannot be empty".to_string(),
        )
    }

    /// The result of `operation` does not fit in a `Decimal`.
    pub fn overflow(operation: &str, price: Decimal) -> Self {
        Self::new(
            PriceErrorCode::Overflow,
            price.to_string(),
            format!("Cannot {operation} price {price}: result is out of range"),
        )
    }

    pub fn invalid_percentage(percentage: Decimal, allowed: &str) -> Self {
        Self::new(
            PriceErrorCode::InvalidPercentage,
            percentage.to_string(),
            format!("Percentage {percentage} is out of range; expected {allowed}"),
        )
    }
}
