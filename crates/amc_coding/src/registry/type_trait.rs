use core::any::Any;

use crate::info::Typed;

// -----------------------------------------------------------------------------
// TypeTrait

/// A capability of a registered class, stored in its [`ClassMeta`].
///
/// Any `'static` thread-safe type can be a type trait. They are looked up
/// by their own `TypeId`.
///
/// [`ClassMeta`]: crate::registry::ClassMeta
pub trait TypeTrait: Any + Send + Sync {}

impl<T: Any + Send + Sync> TypeTrait for T {}

impl dyn TypeTrait {
    #[inline]
    pub fn downcast_ref<T: TypeTrait>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: TypeTrait>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }
}

// -----------------------------------------------------------------------------
// FromType

/// Creates a [`TypeTrait`] for the type `T`.
///
/// ```
/// use amc_coding::registry::{ClassMeta, FromType, TypeTraitDefault};
/// use amc_coding::ops::DynamicList;
///
/// let mut meta = ClassMeta::of::<DynamicList>();
/// meta.insert_trait(<TypeTraitDefault as FromType<DynamicList>>::from_type());
/// assert!(meta.has_trait::<TypeTraitDefault>());
/// ```
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
