//! Record identity.

/// A record keyed by its id: a product before and after an edit is the same
/// product.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
