//! Contact value objects: email addresses, phone numbers and postal addresses.
//!
//! Every type normalizes its input on construction and is immutable afterwards.

pub mod address;
pub mod email;
pub mod error;
pub mod phone;

pub use address::Address;
pub use email::Email;
pub use error::{
    AddressError, AddressErrorCode, EmailError, EmailErrorCode, PhoneNumberError,
    PhoneNumberErrorCode,
};
pub use phone::{PhoneNumber, VALID_COUNTRY_CODES};
