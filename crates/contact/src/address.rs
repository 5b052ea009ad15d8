//! Postal address value object.

use core::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use valuekit_core::{Component, ValueObject, accept, is_blank};

use crate::error::AddressError;

static EMPTY: Lazy<Address> = Lazy::new(|| Address {
    street: String::new(),
    city: String::new(),
    state: String::new(),
    postal_code: String::new(),
    country: String::new(),
});

/// A postal address. Every part is trimmed; `state` and `postal_code` may be
/// empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "AddressRecord")]
pub struct Address {
    street: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
}

impl Address {
    pub fn create(
        street: &str,
        city: &str,
        state: &str,
        postal_code: &str,
        country: &str,
    ) -> Result<Self, AddressError> {
        if is_blank(street) {
            return Err(AddressError::missing_street());
        }
        if is_blank(city) {
            return Err(AddressError::missing_city());
        }
        if is_blank(country) {
            return Err(AddressError::missing_country());
        }

        Ok(Self {
            street: street.trim().to_string(),
            city: city.trim().to_string(),
            state: state.trim().to_string(),
            postal_code: postal_code.trim().to_string(),
            country: country.trim().to_string(),
        })
    }

    pub fn try_create(
        street: &str,
        city: &str,
        state: &str,
        postal_code: &str,
        country: &str,
    ) -> Option<Self> {
        accept(Self::create(street, city, state, postal_code, country))
    }

    pub fn empty() -> &'static Address {
        &EMPTY
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn is_empty(&self) -> bool {
        self.street.is_empty() && self.city.is_empty() && self.country.is_empty()
    }

    pub fn with_street(&self, street: &str) -> Result<Self, AddressError> {
        Self::create(street, &self.city, &self.state, &self.postal_code, &self.country)
    }

    pub fn with_city(&self, city: &str) -> Result<Self, AddressError> {
        Self::create(&self.street, city, &self.state, &self.postal_code, &self.country)
    }

    pub fn with_state(&self, state: &str) -> Result<Self, AddressError> {
        Self::create(&self.street, &self.city, state, &self.postal_code, &self.country)
    }

    pub fn with_postal_code(&self, postal_code: &str) -> Result<Self, AddressError> {
        Self::create(&self.street, &self.city, &self.state, postal_code, &self.country)
    }

    pub fn with_country(&self, country: &str) -> Result<Self, AddressError> {
        Self::create(&self.street, &self.city, &self.state, &self.postal_code, country)
    }

    /// Non-blank parts joined with `", "`.
    pub fn to_single_line_string(&self) -> String {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.postal_code,
            &self.country,
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Street, then `"City, State Postal"`, then country, one per line.
    pub fn to_multi_line_string(&self) -> String {
        let mut locality = self.city.clone();
        if !self.state.is_empty() {
            if !locality.is_empty() {
                locality.push_str(", ");
            }
            locality.push_str(&self.state);
        }
        if !self.postal_code.is_empty() {
            if !locality.is_empty() {
                locality.push(' ');
            }
            locality.push_str(&self.postal_code);
        }

        [self.street.as_str(), locality.as_str(), self.country.as_str()]
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl ValueObject for Address {
    fn atomic_values(&self) -> Vec<Component<'_>> {
        vec![
            Component::Text(&self.street),
            Component::Text(&self.city),
            Component::Text(&self.state),
            Component::Text(&self.postal_code),
            Component::Text(&self.country),
        ]
    }
}

valuekit_core::impl_value_semantics!(Address);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_single_line_string())
    }
}

#[derive(Deserialize)]
struct AddressRecord {
    street: String,
    city: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    postal_code: String,
    country: String,
}

impl TryFrom<AddressRecord> for Address {
    type Error = AddressError;

    fn try_from(r: AddressRecord) -> Result<Self, Self::Error> {
        if [&r.street, &r.city, &r.state, &r.postal_code, &r.country]
            .iter()
            .all(|part| is_blank(part))
        {
            return Ok(Self::empty().clone());
        }
        Self::create(&r.street, &r.city, &r.state, &r.postal_code, &r.country)
    }
}
