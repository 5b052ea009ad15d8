//! International phone number value object.

use core::fmt;
use core::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use valuekit_core::{Component, ValueObject, accept, is_blank};

use crate::error::PhoneNumberError;

/// Country calling codes accepted by [`PhoneNumber::create`].
///
/// No code is a prefix of another, so splitting a full number is unambiguous.
pub const VALID_COUNTRY_CODES: &[&str] = &[
    "+1", "+7", "+20", "+27", "+33", "+34", "+39", "+44", "+49", "+52", "+55", "+61", "+63",
    "+64", "+65", "+81", "+82", "+86", "+91", "+852", "+966", "+971",
];

pub(crate) const MIN_NUMBER_LENGTH: usize = 7;
pub(crate) const MAX_NUMBER_LENGTH: usize = 15;

static EMPTY: Lazy<PhoneNumber> = Lazy::new(|| PhoneNumber {
    country_code: String::new(),
    number: String::new(),
    full_number: String::new(),
});

/// A phone number split into country calling code and subscriber digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    country_code: String,
    number: String,
    full_number: String,
}

impl PhoneNumber {
    /// Separators (spaces, dashes, dots, parentheses) in `number` are ignored.
    /// A missing `+` on the country code is added.
    pub fn create(country_code: &str, number: &str) -> Result<Self, PhoneNumberError> {
        let country_code = normalize_country_code(country_code)?;

        let digits = strip_separators(number);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneNumberError::invalid_format(number));
        }
        if !(MIN_NUMBER_LENGTH..=MAX_NUMBER_LENGTH).contains(&digits.len()) {
            return Err(PhoneNumberError::invalid_length(&digits));
        }

        Ok(Self {
            full_number: format!("{country_code}{digits}"),
            country_code,
            number: digits,
        })
    }

    pub fn try_create(country_code: &str, number: &str) -> Option<Self> {
        accept(Self::create(country_code, number))
    }

    /// Parse a full number such as `"+1 (555) 123-4567"`.
    ///
    /// Blank input yields [`PhoneNumber::empty`].
    pub fn parse(full_number: &str) -> Result<Self, PhoneNumberError> {
        if is_blank(full_number) {
            return Ok(Self::empty().clone());
        }

        let cleaned = strip_separators(full_number);
        let Some(digits) = cleaned.strip_prefix('+') else {
            return Err(PhoneNumberError::invalid_format(full_number));
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(PhoneNumberError::invalid_format(full_number));
        }

        let (country_code, number) = split_country_code(&cleaned);
        Self::create(country_code, number)
    }

    pub fn try_parse(full_number: &str) -> Option<Self> {
        accept(Self::parse(full_number))
    }

    pub fn empty() -> &'static PhoneNumber {
        &EMPTY
    }

    pub fn valid_country_codes() -> &'static [&'static str] {
        VALID_COUNTRY_CODES
    }

    pub fn is_valid_country_code(country_code: &str) -> bool {
        normalize_country_code(country_code).is_ok()
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn full_number(&self) -> &str {
        &self.full_number
    }

    pub fn is_empty(&self) -> bool {
        self.full_number.is_empty()
    }

    pub fn with_number(&self, number: &str) -> Result<Self, PhoneNumberError> {
        Self::create(&self.country_code, number)
    }

    pub fn with_country_code(&self, country_code: &str) -> Result<Self, PhoneNumberError> {
        Self::create(country_code, &self.number)
    }

    /// Human-friendly rendering: `"+1 (555) 123-4567"` for 10 digits,
    /// `"+1 555-1234"` for 7, `"+86 13812345678"` otherwise.
    pub fn to_formatted_string(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let n = &self.number;
        match n.len() {
            10 => format!(
                "{} ({}) {}-{}",
                self.country_code,
                &n[..3],
                &n[3..6],
                &n[6..]
            ),
            7 => format!("{} {}-{}", self.country_code, &n[..3], &n[3..]),
            _ => format!("{} {}", self.country_code, n),
        }
    }
}

fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '.' | '(' | ')'))
        .collect()
}

fn normalize_country_code(country_code: &str) -> Result<String, PhoneNumberError> {
    let trimmed = country_code.trim();
    let normalized = if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{trimmed}")
    };
    if !VALID_COUNTRY_CODES.contains(&normalized.as_str()) {
        return Err(PhoneNumberError::invalid_country_code(country_code));
    }
    Ok(normalized)
}

/// Split `+<digits>` into country code and subscriber number.
///
/// Takes the longest allow-listed prefix. Without a match, guesses 2 digits
/// when the third character is a digit, else 3; validation then rejects it.
fn split_country_code(cleaned: &str) -> (&str, &str) {
    let known = VALID_COUNTRY_CODES
        .iter()
        .filter(|code| cleaned.starts_with(**code))
        .max_by_key(|code| code.len());

    let split_at = match known {
        Some(code) => code.len(),
        None => {
            let third_is_digit = cleaned
                .as_bytes()
                .get(2)
                .is_some_and(|b| b.is_ascii_digit());
            let guess = if third_is_digit { 3 } else { 4 };
            guess.min(cleaned.len())
        }
    };
    cleaned.split_at(split_at)
}

impl ValueObject for PhoneNumber {
    fn atomic_values(&self) -> Vec<Component<'_>> {
        vec![Component::Text(&self.country_code), Component::Text(&self.number)]
    }
}

valuekit_core::impl_value_semantics!(PhoneNumber);

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_number)
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.full_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhoneNumberErrorCode;
    use proptest::prelude::*;

    #[test]
    fn formats_north_american_numbers() {
        let phone = PhoneNumber::create("+1", "5551234567").unwrap();
        assert_eq!(phone.full_number(), "+15551234567");
        assert_eq!(phone.to_formatted_string(), "+1 (555) 123-4567");
        assert_eq!(phone.to_string(), "+15551234567");
    }

    #[test]
    fn formats_other_lengths() {
        let short = PhoneNumber::create("63", "5551234").unwrap();
        assert_eq!(short.country_code(), "+63");
        assert_eq!(short.to_formatted_string(), "+63 555-1234");

        let long = PhoneNumber::create("+44", "20 7946 0958").unwrap();
        assert_eq!(long.number(), "2079460958");
        assert_eq!(long.to_formatted_string(), "+44 (207) 946-0958");

        let eleven = PhoneNumber::create("+86", "13812345678").unwrap();
        assert_eq!(eleven.to_formatted_string(), "+86 13812345678");
    }

    #[test]
    fn validation_priority_order() {
        let err = PhoneNumber::create("+999", "abc").unwrap_err();
        assert_eq!(err.code(), PhoneNumberErrorCode::InvalidCountryCode);

        let err = PhoneNumber::create("+1", "555-CALL").unwrap_err();
        assert_eq!(err.code(), PhoneNumberErrorCode::InvalidFormat);
        assert_eq!(err.value(), "555-CALL");
        assert!(err.message().contains("555-CALL"));

        let err = PhoneNumber::create("+1", "").unwrap_err();
        assert_eq!(err.code(), PhoneNumberErrorCode::InvalidFormat);

        let err = PhoneNumber::create("+1", "123456").unwrap_err();
        assert_eq!(err.code(), PhoneNumberErrorCode::InvalidLength);

        let err = PhoneNumber::create("+1", "1234567890123456").unwrap_err();
        assert_eq!(err.code(), PhoneNumberErrorCode::InvalidLength);
    }

    #[test]
    fn parse_matches_longest_known_prefix() {
        let hk = PhoneNumber::parse("+852 2123 4567").unwrap();
        assert_eq!(hk.country_code(), "+852");
        assert_eq!(hk.number(), "21234567");

        let us = PhoneNumber::parse("+1 (555) 123-4567").unwrap();
        assert_eq!(us.country_code(), "+1");
        assert_eq!(us.number(), "5551234567");
    }

    #[test]
    fn parse_unknown_prefix_reports_guessed_code() {
        let err = PhoneNumber::parse("+999123456789").unwrap_err();
        assert_eq!(err.code(), PhoneNumberErrorCode::InvalidCountryCode);
        assert_eq!(err.value(), "+99");
    }

    #[test]
    fn parse_rejects_missing_plus_and_letters() {
        let err = PhoneNumber::parse("5551234567").unwrap_err();
        assert_eq!(err.code(), PhoneNumberErrorCode::InvalidFormat);
        assert!(PhoneNumber::try_parse("+1 555 CALL NOW").is_none());
        assert!(PhoneNumber::try_parse("+").is_none());
    }

    #[test]
    fn parse_blank_yields_empty() {
        let empty = PhoneNumber::parse(" ").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty, *PhoneNumber::empty());
        assert_eq!(empty.to_formatted_string(), "");
    }

    #[test]
    fn country_code_lookup() {
        assert!(PhoneNumber::is_valid_country_code("+44"));
        assert!(PhoneNumber::is_valid_country_code("44"));
        assert!(!PhoneNumber::is_valid_country_code("+999"));
        assert!(PhoneNumber::valid_country_codes().contains(&"+63"));
    }

    #[test]
    fn country_codes_are_prefix_free() {
        for a in VALID_COUNTRY_CODES {
            for b in VALID_COUNTRY_CODES {
                if a != b {
                    assert!(!b.starts_with(a), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn with_methods_revalidate() {
        let phone = PhoneNumber::create("+1", "5551234567").unwrap();

        let other = phone.with_number("5559876543").unwrap();
        assert_eq!(other.country_code(), phone.country_code());
        assert_eq!(other.number(), "5559876543");

        let uk = phone.with_country_code("+44").unwrap();
        assert_eq!(uk.number(), phone.number());
        assert_eq!(uk.full_number(), "+445551234567");

        assert!(phone.with_number("12").is_err());
        assert_eq!(phone.full_number(), "+15551234567");
    }

    #[test]
    fn serializes_as_full_number() {
        let phone = PhoneNumber::create("+63", "9171234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, r#""+639171234567""#);
        let back: PhoneNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, phone);
        assert!(serde_json::from_str::<PhoneNumber>(r#""12345""#).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: the full number re-parses into the same parts.
        #[test]
        fn full_number_round_trips(
            code_index in 0..VALID_COUNTRY_CODES.len(),
            number in "[0-9]{7,15}",
        ) {
            let cc = VALID_COUNTRY_CODES[code_index];
            let phone = PhoneNumber::create(cc, &number).unwrap();
            let reparsed = PhoneNumber::parse(phone.full_number()).unwrap();
            prop_assert_eq!(reparsed.country_code(), cc);
            prop_assert_eq!(reparsed.number(), number.as_str());
            prop_assert_eq!(reparsed, phone);
        }

        /// Property: separators in the input change neither equality nor hash.
        #[test]
        fn separators_do_not_affect_identity(
            code_index in 0..VALID_COUNTRY_CODES.len(),
            number in "[0-9]{7,15}",
            split in 1usize..7,
        ) {
            let cc = VALID_COUNTRY_CODES[code_index];
            let (head, tail) = number.split_at(split);
            let spaced = format!(" ({head}) {tail}.");
            let plain = PhoneNumber::create(cc, &number).unwrap();
            let separated = PhoneNumber::create(cc, &spaced).unwrap();
            prop_assert_eq!(&plain, &separated);
            prop_assert_eq!(plain.value_hash(), separated.value_hash());

            let dashed = format!("{cc} {head}-{tail}");
            let parsed = PhoneNumber::parse(&dashed).unwrap();
            prop_assert_eq!(&parsed, &plain);
            prop_assert_eq!(parsed.value_hash(), plain.value_hash());
        }
    }
}
