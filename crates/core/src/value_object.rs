//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects with **no identity** - they are defined
//! entirely by their attribute values. Two value objects with the same values
//! are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Construction is
/// the only validation point: once an instance exists it is guaranteed valid,
/// so the rest of the domain can carry it around without re-checking.
///
/// - **Value Object**: no identity (a `PhoneNumber` equals any other phone
///   with the same value)
/// - **Entity**: has identity (two clients with the same id are the same
///   client, whatever their other fields say)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
