//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values. Domain
/// events and serialized snapshots are value objects; entities are not.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct UpdatedFields {
///     name: Option<String>,
///     description: Option<String>,
/// }
///
/// impl ValueObject for UpdatedFields {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
