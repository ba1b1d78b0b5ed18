use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use amc_utils::TypeIdMap;

use crate::Reflect;
use crate::info::{Capabilities, FieldType, Typed};
use crate::registry::{ClassRegistry, TypeTrait, TypeTraitDefault, TypeTraitFromReflect};

// -----------------------------------------------------------------------------
// ClassMeta

/// Runtime information of a registered class.
///
/// Holds the static identity of the class (name, `TypeId`, category,
/// capabilities) and a table of [`TypeTrait`]s describing how it can be
/// constructed.
pub struct ClassMeta {
    class_name: &'static str,
    type_id: TypeId,
    field_type: FieldType,
    capabilities: Capabilities,
    trait_table: TypeIdMap<Box<dyn TypeTrait>>,
}

impl ClassMeta {
    /// Creates an empty meta for `T`, without type traits.
    pub fn of<T: Typed>() -> Self {
        Self {
            class_name: T::CLASS_NAME,
            type_id: TypeId::of::<T>(),
            field_type: T::FIELD_TYPE,
            capabilities: T::CAPABILITIES,
            trait_table: TypeIdMap::new(),
        }
    }

    #[inline]
    pub const fn class_name(&self) -> &'static str {
        self.class_name
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub const fn field_type(&self) -> FieldType {
        self.field_type
    }

    #[inline]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Inserts or replaces a type trait.
    #[inline]
    pub fn insert_trait<T: TypeTrait>(&mut self, data: T) {
        self.trait_table.insert(TypeId::of::<T>(), Box::new(data));
    }

    #[inline]
    pub fn remove_trait<T: TypeTrait>(&mut self) -> Option<Box<dyn TypeTrait>> {
        self.trait_table.remove(&TypeId::of::<T>())
    }

    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.trait_table
            .get(&TypeId::of::<T>())
            .and_then(|data| data.downcast_ref::<T>())
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.trait_table.contains(&TypeId::of::<T>())
    }

    #[inline]
    pub fn trait_len(&self) -> usize {
        self.trait_table.len()
    }

    /// Returns `true` if instances of the class can be built under the
    /// given capabilities.
    ///
    /// The one-step capabilities (`LIST`, `MAP`) need a
    /// [`TypeTraitFromReflect`]. The incremental ones (`LIST_MUT`, `MAP_MUT`)
    /// need a [`TypeTraitDefault`] to start from.
    pub fn supports(&self, required: Capabilities) -> bool {
        if !self.capabilities.contains(required) {
            return false;
        }
        let one_step = Capabilities::LIST | Capabilities::MAP;
        let incremental = Capabilities::LIST_MUT | Capabilities::MAP_MUT;
        (!required.intersects(one_step) || self.has_trait::<TypeTraitFromReflect>())
            && (!required.intersects(incremental) || self.has_trait::<TypeTraitDefault>())
    }

    /// Creates a default instance, `None` without [`TypeTraitDefault`].
    #[inline]
    pub fn create_default(&self) -> Option<Box<dyn Reflect>> {
        self.get_trait::<TypeTraitDefault>().map(TypeTraitDefault::default)
    }

    /// Converts `value` into an instance of the class, handing it back on
    /// failure or without [`TypeTraitFromReflect`].
    #[inline]
    pub fn construct_from(&self, value: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, Box<dyn Reflect>> {
        match self.get_trait::<TypeTraitFromReflect>() {
            Some(ctor) => ctor.from_reflect(value),
            None => Err(value),
        }
    }
}

impl fmt::Debug for ClassMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassMeta")
            .field("class_name", &self.class_name)
            .field("field_type", &self.field_type)
            .field("capabilities", &self.capabilities)
            .field("trait_len", &self.trait_table.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetClassMeta

/// Registration hook of a type.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// Scalars and generic containers have no class identity: they return
/// `None` and only forward their dependencies.
pub trait GetClassMeta: Typed {
    /// The meta registered for this type, if it is a class.
    fn get_class_meta() -> Option<ClassMeta>;

    /// Registers the types this type depends on, such as field types.
    #[inline]
    fn register_dependencies(_registry: &mut ClassRegistry) {}
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ClassMeta;
    use crate::info::Capabilities;
    use crate::ops::DynamicList;
    use crate::registry::{FromType, TypeTraitDefault, TypeTraitFromReflect};
    use alloc::collections::VecDeque;

    #[test]
    fn supports_requires_traits() {
        let mut meta = ClassMeta::of::<DynamicList>();
        assert!(!meta.supports(Capabilities::LIST));

        meta.insert_trait(<TypeTraitFromReflect as FromType<DynamicList>>::from_type());
        assert!(meta.supports(Capabilities::LIST));
        assert!(!meta.supports(Capabilities::LIST | Capabilities::LIST_MUT));

        meta.insert_trait(<TypeTraitDefault as FromType<DynamicList>>::from_type());
        assert!(meta.supports(Capabilities::LIST | Capabilities::LIST_MUT));
        assert!(!meta.supports(Capabilities::MAP));
        assert!(meta.supports(Capabilities::empty()));
    }

    #[test]
    fn construct() {
        let mut meta = ClassMeta::of::<VecDeque<u8>>();
        assert!(meta.create_default().is_none());

        meta.insert_trait(<TypeTraitDefault as FromType<VecDeque<u8>>>::from_type());
        meta.insert_trait(<TypeTraitFromReflect as FromType<VecDeque<u8>>>::from_type());
        assert_eq!(meta.trait_len(), 2);

        let empty = meta.create_default().unwrap();
        assert_eq!(empty.downcast_ref::<VecDeque<u8>>().map(VecDeque::len), Some(0));

        let built = meta.construct_from(alloc::boxed::Box::new(alloc::vec![1_u8, 2])).unwrap();
        assert_eq!(built.take::<VecDeque<u8>>().unwrap(), [1, 2]);

        assert!(meta.construct_from(alloc::boxed::Box::new(3_u8)).is_err());
    }
}
