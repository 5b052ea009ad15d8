//! Price value object: a standard rate with an optional higher peak rate.

use core::fmt;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use valuekit_core::{Component, ValueObject, accept};

use crate::currency::Currency;
use crate::error::{MoneyError, PriceError};
use crate::format::format_amount;
use crate::money::Money;

static ZERO: Lazy<Price> = Lazy::new(|| {
    Price::unchecked(
        Decimal::ZERO,
        Decimal::ZERO,
        Currency::default_currency().clone(),
    )
});
static EMPTY: Lazy<Price> =
    Lazy::new(|| Price::unchecked(Decimal::ZERO, Decimal::ZERO, Currency::empty().clone()));

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Two-tier price. A flat price has `peak_price == standard_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PriceRecord")]
pub struct Price {
    standard_price: Decimal,
    peak_price: Decimal,
    currency: Currency,
}

impl Price {
    fn unchecked(standard_price: Decimal, peak_price: Decimal, currency: Currency) -> Self {
        Self {
            standard_price,
            peak_price,
            currency,
        }
    }

    pub fn create(
        standard_price: Decimal,
        peak_price: Decimal,
        currency: &Currency,
    ) -> Result<Self, PriceError> {
        if is_negative(standard_price) {
            return Err(PriceError::negative_standard_price(standard_price));
        }
        if is_negative(peak_price) {
            return Err(PriceError::negative_peak_price(peak_price));
        }
        if peak_price < standard_price {
            return Err(PriceError::peak_below_standard(standard_price, peak_price));
        }
        if currency.is_empty() {
            return Err(PriceError::invalid_currency());
        }
        Ok(Self::unchecked(standard_price, peak_price, currency.clone()))
    }

    /// Single-rate price (peak equals standard).
    pub fn flat(price: Decimal, currency: &Currency) -> Result<Self, PriceError> {
        Self::create(price, price, currency)
    }

    pub fn try_create(
        standard_price: Decimal,
        peak_price: Decimal,
        currency: &Currency,
    ) -> Option<Self> {
        accept(Self::create(standard_price, peak_price, currency))
    }

    pub fn try_flat(price: Decimal, currency: &Currency) -> Option<Self> {
        accept(Self::flat(price, currency))
    }

    /// Zero in the default currency. Not the same value as [`Price::empty`].
    pub fn zero() -> &'static Price {
        &ZERO
    }

    pub fn empty() -> &'static Price {
        &EMPTY
    }

    pub fn standard_price(&self) -> Decimal {
        self.standard_price
    }

    pub fn peak_price(&self) -> Decimal {
        self.peak_price
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn is_empty(&self) -> bool {
        self.currency.is_empty()
    }

    pub fn standard_money(&self) -> Result<Money, MoneyError> {
        Money::create(self.standard_price, &self.currency)
    }

    pub fn peak_money(&self) -> Result<Money, MoneyError> {
        Money::create(self.peak_price, &self.currency)
    }

    pub fn has_peak_pricing(&self) -> bool {
        self.peak_price > self.standard_price
    }

    pub fn price_difference(&self) -> Decimal {
        self.peak_price - self.standard_price
    }

    /// How much more expensive peak is, in percent of standard.
    ///
    /// Rounded to 2 places; `0` when the standard price is zero. Fails with
    /// `Overflow` when the ratio is too large for a `Decimal`.
    pub fn peak_premium_percentage(&self) -> Result<Decimal, PriceError> {
        if self.standard_price.is_zero() {
            return Ok(Decimal::ZERO);
        }
        self.price_difference()
            .checked_div(self.standard_price)
            .and_then(|ratio| ratio.checked_mul(HUNDRED))
            .map(|percentage| percentage.round_dp(2))
            .ok_or_else(|| PriceError::overflow("compute the premium of", self.peak_price))
    }

    /// Reduce both rates by `percentage` (0 to 100 inclusive).
    pub fn apply_discount(&self, percentage: Decimal) -> Result<Self, PriceError> {
        if is_negative(percentage) || percentage > HUNDRED {
            return Err(PriceError::invalid_percentage(percentage, "0 to 100"));
        }
        self.scaled(Decimal::ONE - percentage / HUNDRED)
    }

    /// Raise both rates by `percentage` (0 or more).
    pub fn apply_markup(&self, percentage: Decimal) -> Result<Self, PriceError> {
        if is_negative(percentage) {
            return Err(PriceError::invalid_percentage(percentage, "0 or more"));
        }
        self.scaled(Decimal::ONE + percentage / HUNDRED)
    }

    pub fn with_standard_price(&self, standard_price: Decimal) -> Result<Self, PriceError> {
        Self::create(standard_price, self.peak_price, &self.currency)
    }

    pub fn with_peak_price(&self, peak_price: Decimal) -> Result<Self, PriceError> {
        Self::create(self.standard_price, peak_price, &self.currency)
    }

    pub fn with_currency(&self, currency: &Currency) -> Result<Self, PriceError> {
        Self::create(self.standard_price, self.peak_price, currency)
    }

    /// `"Standard: $100.00, Peak: $150.00 (USD)"`, or `"$100.00 (USD)"` when flat.
    pub fn to_full_string(&self) -> String {
        if self.is_empty() {
            return self.to_string();
        }
        let symbol = self.currency.symbol();
        let code = self.currency.code();
        if self.has_peak_pricing() {
            format!(
                "Standard: {symbol}{}, Peak: {symbol}{} ({code})",
                format_amount(self.standard_price),
                format_amount(self.peak_price)
            )
        } else {
            format!("{symbol}{} ({code})", format_amount(self.standard_price))
        }
    }

    fn scaled(&self, factor: Decimal) -> Result<Self, PriceError> {
        let scale = |price: Decimal| {
            price
                .checked_mul(factor)
                .map(|scaled| scaled.round_dp(2))
                .ok_or_else(|| PriceError::overflow("scale", price))
        };
        Self::create(
            scale(self.standard_price)?,
            scale(self.peak_price)?,
            &self.currency,
        )
    }
}

fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}

impl ValueObject for Price {
    fn atomic_values(&self) -> Vec<Component<'_>> {
        vec![
            Component::Decimal(self.standard_price),
            Component::Decimal(self.peak_price),
            Component::Nested(self.currency.atomic_values()),
        ]
    }
}

valuekit_core::impl_value_semantics!(Price);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[Empty Price]");
        }
        let symbol = self.currency.symbol();
        if self.has_peak_pricing() {
            write!(
                f,
                "{symbol}{} / {symbol}{} (Peak)",
                format_amount(self.standard_price),
                format_amount(self.peak_price)
            )
        } else {
            write!(f, "{symbol}{}", format_amount(self.standard_price))
        }
    }
}

#[derive(Deserialize)]
struct PriceRecord {
    standard_price: Decimal,
    peak_price: Decimal,
    currency: Currency,
}

impl TryFrom<PriceRecord> for Price {
    type Error = PriceError;

    fn try_from(record: PriceRecord) -> Result<Self, Self::Error> {
        if record.currency.is_empty()
            && record.standard_price.is_zero()
            && record.peak_price.is_zero()
        {
            return Ok(Self::empty().clone());
        }
        Self::create(record.standard_price, record.peak_price, &record.currency)
    }
}
