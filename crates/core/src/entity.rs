//! Entity trait: things with a stable identity (warehouses, not quantities).

/// Domain object identified by `id()` rather than by its current state.
///
/// A warehouse keeps its name while its stock changes between orders, so two
/// warehouse values with the same name refer to the same source.
pub trait Entity {
    type Id: Clone + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
