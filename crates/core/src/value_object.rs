//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own: two shipment fragments drawing the
/// same quantities from the same warehouse are the same fragment.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Draw {
///     item: ItemId,
///     quantity: Quantity,
/// }
///
/// impl ValueObject for Draw {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
