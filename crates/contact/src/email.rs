//! Email address value object.

use core::fmt;
use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use valuekit_core::{Component, ValueObject, accept, is_blank};

use crate::error::EmailError;

pub(crate) const MAX_EMAIL_LENGTH: usize = 254;
pub(crate) const MAX_LOCAL_PART_LENGTH: usize = 64;

// local@domain.tld, no whitespace, exactly one '@'.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

static EMPTY: Lazy<Email> = Lazy::new(|| Email {
    address: String::new(),
    local_part: String::new(),
    domain: String::new(),
});

/// A normalized (trimmed, lower-cased) email address.
///
/// Identity is the full address; `local_part` and `domain` are derived views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    address: String,
    local_part: String,
    domain: String,
}

impl Email {
    pub fn create(address: &str) -> Result<Self, EmailError> {
        let normalized = address.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EmailError::empty());
        }
        if normalized.chars().count() > MAX_EMAIL_LENGTH {
            return Err(EmailError::too_long(address));
        }
        if !EMAIL_PATTERN.is_match(&normalized) {
            return Err(EmailError::invalid_format(address));
        }

        let Some((local_part, domain)) = normalized.split_once('@') else {
            return Err(EmailError::invalid_format(address));
        };
        if local_part.chars().count() > MAX_LOCAL_PART_LENGTH {
            return Err(EmailError::too_long(address));
        }

        Ok(Self {
            local_part: local_part.to_string(),
            domain: domain.to_string(),
            address: normalized,
        })
    }

    pub fn try_create(address: &str) -> Option<Self> {
        accept(Self::create(address))
    }

    /// Like [`Email::create`], but blank input yields [`Email::empty`].
    pub fn parse(address: &str) -> Result<Self, EmailError> {
        if is_blank(address) {
            return Ok(Self::empty().clone());
        }
        Self::create(address)
    }

    pub fn try_parse(address: &str) -> Option<Self> {
        accept(Self::parse(address))
    }

    pub fn empty() -> &'static Email {
        &EMPTY
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn is_empty(&self) -> bool {
        self.address.is_empty()
    }

    /// Same mailbox name at a different domain.
    pub fn with_domain(&self, domain: &str) -> Result<Self, EmailError> {
        Self::create(&format!("{}@{}", self.local_part, domain.trim()))
    }
}

impl ValueObject for Email {
    fn atomic_values(&self) -> Vec<Component<'_>> {
        vec![Component::Text(&self.address)]
    }
}

valuekit_core::impl_value_semantics!(Email);

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.address
    }
}
