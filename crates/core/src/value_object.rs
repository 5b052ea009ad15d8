//! Value object capability: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two value objects of the same type with the same values are
//! considered equal, and they hash identically.

use core::any::Any;
use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

use rust_decimal::Decimal;

/// Seed of the order-sensitive hash fold.
const HASH_SEED: u64 = 17;
/// Multiplier applied to the running hash before each component is mixed in.
const HASH_FACTOR: u64 = 31;

/// One atomic component of a value object's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component<'a> {
    /// A textual field (already normalized by the owning type).
    Text(&'a str),
    /// A decimal field. `1.0` and `1.00` compare (and hash) equal.
    Decimal(Decimal),
    /// Another value object, compared by its own components.
    Nested(Vec<Component<'a>>),
    /// An absent component. Contributes `0` to the hash.
    Absent,
}

impl Component<'_> {
    fn component_hash(&self) -> u64 {
        match self {
            Component::Text(s) => {
                let mut hasher = DefaultHasher::new();
                s.hash(&mut hasher);
                hasher.finish()
            }
            Component::Decimal(d) => {
                let mut hasher = DefaultHasher::new();
                d.hash(&mut hasher);
                hasher.finish()
            }
            Component::Nested(inner) => fold_hash(inner),
            Component::Absent => 0,
        }
    }
}

/// Fold components into a single hash, in order.
///
/// Swapping two components changes the result.
pub fn fold_hash(components: &[Component<'_>]) -> u64 {
    components.iter().fold(HASH_SEED, |acc, c| {
        acc.wrapping_mul(HASH_FACTOR)
            .wrapping_add(c.component_hash())
    })
}

/// Capability shared by every value object.
///
/// Value objects are **immutable** and **compared by value**. A concrete type
/// only decides which fields make up its identity, and in which order, by
/// implementing [`ValueObject::atomic_values`]. Equality and hashing follow
/// from that list.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two value objects with the same values are equal)
/// - **Entity**: has identity (two entities with the same ID are the same entity)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Percentage {
///     value: Decimal,
/// }
///
/// impl ValueObject for Percentage {
///     fn atomic_values(&self) -> Vec<Component<'_>> {
///         vec![Component::Decimal(self.value)]
///     }
/// }
///
/// valuekit_core::impl_value_semantics!(Percentage);
/// ```
pub trait ValueObject: Clone + core::fmt::Debug {
    /// Ordered components that fully determine this value's identity.
    fn atomic_values(&self) -> Vec<Component<'_>>;

    /// Structural equality over [`ValueObject::atomic_values`].
    fn value_eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.atomic_values() == other.atomic_values()
    }

    /// Order-sensitive hash over [`ValueObject::atomic_values`].
    fn value_hash(&self) -> u64 {
        fold_hash(&self.atomic_values())
    }
}

/// Compare two value objects that may be of different concrete types.
///
/// Values of different concrete types are never equal, even when their
/// components coincide.
pub fn values_equal<A, B>(a: &A, b: &B) -> bool
where
    A: ValueObject + 'static,
    B: ValueObject + 'static,
{
    match (a as &dyn Any).downcast_ref::<B>() {
        Some(a) => a.value_eq(b),
        None => false,
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for a [`ValueObject`] in terms of its
/// atomic values.
#[macro_export]
macro_rules! impl_value_semantics {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::ValueObject::value_eq(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::ValueObject::value_hash(self));
            }
        }
    };
}
