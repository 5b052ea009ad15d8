//! Money value object: a non-negative amount in a specific currency.

use core::cmp::Ordering;
use core::fmt;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use valuekit_core::{Component, DomainError, DomainResult, ValueObject, accept};

use crate::currency::Currency;
use crate::error::MoneyError;
use crate::format::format_amount;

static ZERO: Lazy<Money> =
    Lazy::new(|| Money::unchecked(Decimal::ZERO, Currency::default_currency().clone()));
static EMPTY: Lazy<Money> = Lazy::new(|| Money::unchecked(Decimal::ZERO, Currency::empty().clone()));

/// A non-negative amount of money.
///
/// Arithmetic never mutates; every operation returns a new validated value.
/// Amounts in different currencies never mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    fn unchecked(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn create(amount: Decimal, currency: &Currency) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::negative_amount(amount));
        }
        if currency.is_empty() {
            return Err(MoneyError::invalid_currency());
        }
        Ok(Self::unchecked(amount, currency.clone()))
    }

    pub fn try_create(amount: Decimal, currency: &Currency) -> Option<Self> {
        accept(Self::create(amount, currency))
    }

    /// Zero in the default currency.
    pub fn zero() -> &'static Money {
        &ZERO
    }

    /// Zero with no currency.
    pub fn empty() -> &'static Money {
        &EMPTY
    }

    /// Total a sequence of amounts, all of which must be in `currency`.
    pub fn sum<'a, I>(items: I, currency: &Currency) -> Result<Self, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        items
            .into_iter()
            .try_fold(Self::create(Decimal::ZERO, currency)?, |total, item| {
                total.add(item)
            })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn is_empty(&self) -> bool {
        self.currency.is_empty()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Money) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let total = self
            .amount
            .checked_add(other.amount)
            .ok_or_else(|| MoneyError::overflow("add to", self.amount))?;
        Self::create(total, &self.currency)
    }

    /// Fails with `NegativeAmount` when `other` is larger than `self`.
    pub fn subtract(&self, other: &Money) -> Result<Self, MoneyError> {
        self.ensure_same_currency(other)?;
        let difference = self
            .amount
            .checked_sub(other.amount)
            .ok_or_else(|| MoneyError::overflow("subtract from", self.amount))?;
        Self::create(difference, &self.currency)
    }

    pub fn multiply(&self, factor: Decimal) -> Result<Self, MoneyError> {
        let product = self
            .amount
            .checked_mul(factor)
            .ok_or_else(|| MoneyError::overflow("multiply", self.amount))?;
        Self::create(product, &self.currency)
    }

    /// Division by zero is an arithmetic failure, not a `MoneyError`.
    pub fn divide(&self, divisor: Decimal) -> DomainResult<Self> {
        if divisor.is_zero() {
            return Err(DomainError::division_by_zero());
        }
        let quotient = self
            .amount
            .checked_div(divisor)
            .ok_or_else(|| MoneyError::overflow("divide", self.amount))?;
        Ok(Self::create(quotient, &self.currency)?)
    }

    pub fn compare(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    pub fn is_greater_than(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn is_less_than(&self, other: &Money) -> Result<bool, MoneyError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn with_amount(&self, amount: Decimal) -> Result<Self, MoneyError> {
        Self::create(amount, &self.currency)
    }

    pub fn with_currency(&self, currency: &Currency) -> Result<Self, MoneyError> {
        Self::create(self.amount, currency)
    }

    /// `"$150.00 (USD)"`.
    pub fn to_detailed_string(&self) -> String {
        if self.is_empty() {
            return self.to_string();
        }
        format!("{self} ({})", self.currency.code())
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            return Err(MoneyError::currency_mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }
        Ok(())
    }
}

impl ValueObject for Money {
    fn atomic_values(&self) -> Vec<Component<'_>> {
        vec![
            Component::Decimal(self.amount),
            Component::Nested(self.currency.atomic_values()),
        ]
    }
}

valuekit_core::impl_value_semantics!(Money);

/// Ordered only within one currency; amounts in different currencies are
/// incomparable.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[Empty Money]");
        }
        write!(f, "{}{}", self.currency.symbol(), format_amount(self.amount))
    }
}

#[derive(Deserialize)]
struct MoneyRecord {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        if record.currency.is_empty() && record.amount.is_zero() {
            return Ok(Self::empty().clone());
        }
        Self::create(record.amount, &record.currency)
    }
}
