//! Domain error model.

use thiserror::Error;

/// Result type used across the value crates when several error kinds can meet.
pub type DomainResult<T> = Result<T, DomainError>;

/// Common surface of every value-specific error kind.
///
/// Each value object owns one error type with its own code enumeration. This
/// trait lets callers treat them uniformly (logging, conversion).
pub trait ValueError: std::error::Error {
    /// Name of the value object that rejected the input (e.g. `"Currency"`).
    fn value_type(&self) -> &'static str;

    /// Stable name of the violated invariant (e.g. `"InvalidCurrencyCode"`).
    fn code_name(&self) -> &'static str;
}

/// Crate-wide domain error.
///
/// Keep this focused on deterministic failures. Value-specific errors convert
/// into [`DomainError::Validation`] and keep their code name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value object rejected its input.
    #[error("{value_type} validation failed ({code}): {message}")]
    Validation {
        value_type: &'static str,
        code: &'static str,
        message: String,
    },

    /// An arithmetic contract was broken (not a domain invariant).
    #[error("attempted to divide by zero")]
    DivisionByZero,
}

impl DomainError {
    /// Build a validation error from any value-specific error.
    pub fn from_value_error<E: ValueError>(err: &E) -> Self {
        Self::Validation {
            value_type: err.value_type(),
            code: err.code_name(),
            message: err.to_string(),
        }
    }

    /// Arithmetic failure raised when a divisor is zero.
    pub fn division_by_zero() -> Self {
        Self::DivisionByZero
    }

    /// Code name of the violated invariant, if this is a validation failure.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            DomainError::Validation { code, .. } => Some(*code),
            DomainError::DivisionByZero => None,
        }
    }
}

/// Define a value-specific error kind: a `Copy` code enum plus an error struct
/// carrying the code, the offending value and a formatted message.
///
/// The struct is only constructible inside the defining module, so callers
/// add one named constructor per code next to the invocation.
#[macro_export]
macro_rules! value_error {
    (
        $(#[$meta:meta])*
        $name:ident, $code:ident, $value_type:literal {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $code {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $code {
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $code::$variant => stringify!($variant) ),+
                }
            }
        }

        impl ::core::fmt::Display for $code {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
        #[error("{message}")]
        pub struct $name {
            code: $code,
            value: String,
            message: String,
        }

        impl $name {
            fn new(code: $code, value: impl Into<String>, message: String) -> Self {
                Self {
                    code,
                    value: value.into(),
                    message,
                }
            }

            /// Which invariant was violated.
            pub fn code(&self) -> $code {
                self.code
            }

            /// The rejected input, as provided.
            pub fn value(&self) -> &str {
                &self.value
            }

            pub fn message(&self) -> &str {
                &self.message
            }
        }

        impl $crate::ValueError for $name {
            fn value_type(&self) -> &'static str {
                $value_type
            }

            fn code_name(&self) -> &'static str {
                self.code.as_str()
            }
        }

        impl From<$name> for $crate::DomainError {
            fn from(err: $name) -> Self {
                $crate::DomainError::from_value_error(&err)
            }
        }
    };
}
