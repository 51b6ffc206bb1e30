/// Identity of a carousel item as the UI toolkit knows it (widget id, entity, handle).
#[cfg(feature = "std")]
pub trait ItemId: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq> ItemId for T {}

#[cfg(not(feature = "std"))]
pub trait ItemId: Ord {}
#[cfg(not(feature = "std"))]
impl<T: Ord> ItemId for T {}
