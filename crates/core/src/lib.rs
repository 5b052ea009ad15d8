//! `valuekit-core` — value object building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the value object
//! capability, the shared error model and the guarded-construction helpers.

pub mod error;
pub mod guard;
pub mod value_object;

pub use error::{DomainError, DomainResult, ValueError};
pub use guard::{accept, is_blank};
pub use value_object::{Component, ValueObject, fold_hash, values_equal};
