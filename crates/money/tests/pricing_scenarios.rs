//! End-to-end pricing scenarios across currencies, money and prices.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use valuekit_core::{DomainError, ValueObject, values_equal};
use valuekit_money::{Currency, CurrencyErrorCode, Money, MoneyErrorCode, Price};

#[test]
fn quoting_a_peak_rate_room() {
    valuekit_observability::init();

    let usd = Currency::create("USD", "$").unwrap();
    assert_eq!(usd.to_string(), "$ (USD)");

    let room = Price::create(dec!(100), dec!(150), &usd).unwrap();
    assert_eq!(room.to_string(), "$100.00 / $150.00 (Peak)");
    assert_eq!(room.peak_premium_percentage().unwrap(), dec!(50));

    let promo = Price::create(dec!(100), dec!(200), &usd)
        .unwrap()
        .apply_discount(dec!(10))
        .unwrap();
    assert_eq!(promo.standard_price(), dec!(90));
    assert_eq!(promo.peak_price(), dec!(180));

    assert_eq!(Price::flat(dec!(100), &usd).unwrap().to_string(), "$100.00");
}

#[test]
fn settling_a_bill() {
    let usd = Currency::usd();
    let subtotal = Money::create(dec!(100), usd).unwrap();
    let tip = Money::create(dec!(50), usd).unwrap();
    assert_eq!(subtotal.add(&tip).unwrap().amount(), dec!(150));

    let euros = Money::create(dec!(50), Currency::eur()).unwrap();
    let err = subtotal.add(&euros).unwrap_err();
    assert_eq!(err.code(), MoneyErrorCode::CurrencyMismatch);

    let per_person = subtotal.add(&tip).unwrap().divide(dec!(3)).unwrap();
    assert_eq!(per_person.to_string(), "$50.00");

    let domain: DomainError = err.into();
    assert_eq!(domain.code(), Some("CurrencyMismatch"));
    assert_eq!(subtotal.divide(Decimal::ZERO), Err(DomainError::DivisionByZero));
}

#[test]
fn unsupported_currency_is_reported() {
    let err = Currency::create("XYZ", "!").unwrap_err();
    assert_eq!(err.code(), CurrencyErrorCode::InvalidCurrencyCode);
}

#[test]
fn cross_type_values_never_compare_equal() {
    let money = Money::create(dec!(0), Currency::php()).unwrap();
    assert!(values_equal(&money, Money::zero()));
    assert!(!values_equal(&money, Price::zero()));
    assert!(!values_equal(Currency::php(), &money));
    assert_eq!(money.value_hash(), Money::zero().value_hash());
}
