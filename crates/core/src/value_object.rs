//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**. Two values with the same attributes
/// are equal, and they are replaced rather than mutated.
///
/// - `Link { rel: "self", href: "/api/person/v1/1" }` is a value object
/// - `Person { id: Some(PersonId(1)), .. }` is an entity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
