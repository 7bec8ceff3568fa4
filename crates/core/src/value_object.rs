//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one, build a
/// new one with the new values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two prices of `9.99` are the same price)
/// - **Entity**: Has identity (two products with the same id are the same product)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price(Decimal);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(dec!(7.50)), Price(dec!(7.5)));  // Equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
