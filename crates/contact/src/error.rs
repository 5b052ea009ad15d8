//! Error kinds of the contact value objects.

use crate::email::{MAX_EMAIL_LENGTH, MAX_LOCAL_PART_LENGTH};
use crate::phone::{MAX_NUMBER_LENGTH, MIN_NUMBER_LENGTH, VALID_COUNTRY_CODES};

valuekit_core::value_error! {
    /// Rejection raised by [`crate::Email`] factories.
    EmailError, EmailErrorCode, "Email" {
        Empty,
        InvalidFormat,
        TooLong,
    }
}

impl EmailError {
    pub fn empty() -> Self {
        Self::new(
            EmailErrorCode::Empty,
            "",
            "Email address cannot be empty".to_string(),
        )
    }

    pub fn invalid_format(address: &str) -> Self {
        Self::new(
            EmailErrorCode::InvalidFormat,
            address,
            format!("Invalid email format: '{address}'"),
        )
    }

    pub fn too_long(address: &str) -> Self {
        Self::new(
            EmailErrorCode::TooLong,
            address,
            format!(
                "Email address '{address}' is too long (max {MAX_EMAIL_LENGTH} characters, \
                 {MAX_LOCAL_PART_LENGTH} before '@')"
            ),
        )
    }
}

valuekit_core::value_error! {
    /// Rejection raised by [`crate::PhoneNumber`] factories.
    PhoneNumberError, PhoneNumberErrorCode, "PhoneNumber" {
        InvalidCountryCode,
        InvalidFormat,
        InvalidLength,
    }
}

impl PhoneNumberError {
    pub fn invalid_country_code(country_code: &str) -> Self {
        Self::new(
            PhoneNumberErrorCode::InvalidCountryCode,
            country_code,
            format!(
                "Invalid country code '{country_code}'. Valid codes are: {}",
                VALID_COUNTRY_CODES.join(", ")
            ),
        )
    }

    pub fn invalid_format(value: &str) -> Self {
        Self::new(
            PhoneNumberErrorCode::InvalidFormat,
            value,
            format!("Invalid phone number format: '{value}'"),
        )
    }

    pub fn invalid_length(number: &str) -> Self {
        Self::new(
            PhoneNumberErrorCode::InvalidLength,
            number,
            format!(
                "Phone number '{number}' must have between {MIN_NUMBER_LENGTH} and \
                 {MAX_NUMBER_LENGTH} digits (got {})",
                number.len()
            ),
        )
    }
}

valuekit_core::value_error! {
    /// Rejection raised by [`crate::Address`] factories.
    AddressError, AddressErrorCode, "Address" {
        MissingStreet,
        MissingCity,
        MissingCountry,
    }
}

impl AddressError {
    pub fn missing_street() -> Self {
        Self::required(AddressErrorCode::MissingStreet, "Street")
    }

    pub fn missing_city() -> Self {
        Self::required(AddressErrorCode::MissingCity, "City")
    }

    pub fn missing_country() -> Self {
        Self::required(AddressErrorCode::MissingCountry, "Country")
    }

    fn required(code: AddressErrorCode, field: &str) -> Self {
        Self::new(code, "", format!("{field} is required and cannot be empty"))
    }
}
