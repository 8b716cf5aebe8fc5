use std::hash::Hash;

/// A record that carries a single unique identifier.
///
/// The identifier is opaque to this crate: only equality and hashing are used.
/// Records without an identifier must not be passed to [`crate::reconcile`].
pub trait Identified {
    type Id: ?Sized + Eq + Hash + ToOwned;

    fn identifier(&self) -> &Self::Id;
}

impl<T: Identified + ?Sized> Identified for &T {
    type Id = T::Id;

    fn identifier(&self) -> &Self::Id {
        (**self).identifier()
    }
}
