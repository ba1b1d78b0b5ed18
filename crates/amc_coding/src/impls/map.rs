use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::hash::BuildHasher;

use amc_utils::hash::HashMap;

use crate::info::{Capabilities, FieldType, Typed};
use crate::ops::{Map, MapIter, MapMut};
use crate::registry::{ClassMeta, ClassRegistry, GetClassMeta};
use crate::{FromReflect, Reflect, ReflectMut, ReflectRef};

macro_rules! impl_reflect_for_map {
    ([$($generics:tt)*] $ty:ty, $name:literal) => {
        impl<V: Typed, $($generics)*> Typed for $ty {
            const FIELD_TYPE: FieldType = FieldType::CollectionHashMutable;
            const CLASS_NAME: &'static str = $name;
            const CAPABILITIES: Capabilities = Capabilities::MAP.union(Capabilities::MAP_MUT);
        }

        impl<V: FromReflect, $($generics)*> Reflect for $ty {
            #[inline]
            fn class_name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn capabilities(&self) -> Capabilities {
                Capabilities::MAP | Capabilities::MAP_MUT
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Map(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Map(self)
            }

            fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
                <Self as FromReflect>::from_reflect(self).map(Reflect::into_boxed_reflect)
            }
        }

        impl<V: FromReflect, $($generics)*> Map for $ty {
            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }

            #[inline]
            fn get(&self, key: &str) -> Option<&dyn Reflect> {
                <$ty>::get(self, key).map(|value| value as &dyn Reflect)
            }

            fn iter(&self) -> MapIter<'_> {
                MapIter::new(<$ty>::iter(self).map(|(key, value)| (key.as_str(), value as &dyn Reflect)))
            }

            #[inline]
            fn as_map_mut(&mut self) -> Option<&mut dyn MapMut> {
                Some(self)
            }
        }

        impl<V: FromReflect, $($generics)*> MapMut for $ty {
            fn insert(&mut self, key: String, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                <$ty>::insert(self, key, V::take_from_reflect(value)?);
                Ok(())
            }
        }

        impl<V: FromReflect, $($generics)*> FromReflect for $ty {
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                let ReflectRef::Map(map) = reflect.reflect_ref() else {
                    return None;
                };
                map.iter()
                    .map(|(key, value)| Some((String::from(key), V::from_reflect(value)?)))
                    .collect()
            }
        }

        impl<V: GetClassMeta, $($generics)*> GetClassMeta for $ty {
            #[inline]
            fn get_class_meta() -> Option<ClassMeta> {
                None
            }

            #[inline]
            fn register_dependencies(registry: &mut ClassRegistry) {
                registry.register::<V>();
            }
        }
    };
}

impl_reflect_for_map!([] BTreeMap<String, V>, "BTreeMap");

impl_reflect_for_map!(
    [S: BuildHasher + Default + Send + Sync + 'static]
    HashMap<String, V, S>,
    "HashMap"
);

#[cfg(feature = "std")]
impl_reflect_for_map!(
    [S: BuildHasher + Default + Send + Sync + 'static]
    std::collections::HashMap<String, V, S>,
    "HashMap"
);

// -----------------------------------------------------------------------------
// Tests
