use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::info::{Capabilities, FieldType, Typed};
use crate::ops::{List, ListMut};
use crate::registry::{ClassMeta, ClassRegistry, GetClassMeta};
use crate::{FromReflect, Reflect, ReflectMut, ReflectRef};

// `List` and `ListMut` are written per type, the rest is shared.
macro_rules! impl_reflect_for_list {
    ($ty:ty, $name:literal, mutable: $mutable:tt) => {
        impl<T: Typed> Typed for $ty {
            const FIELD_TYPE: FieldType = if $mutable {
                FieldType::CollectionArrayMutable
            } else {
                FieldType::CollectionArray
            };
            const CLASS_NAME: &'static str = $name;
            const CAPABILITIES: Capabilities = if $mutable {
                Capabilities::LIST.union(Capabilities::LIST_MUT)
            } else {
                Capabilities::LIST
            };
        }

        impl<T: FromReflect> Reflect for $ty {
            #[inline]
            fn class_name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn capabilities(&self) -> Capabilities {
                if $mutable {
                    Capabilities::LIST | Capabilities::LIST_MUT
                } else {
                    Capabilities::LIST
                }
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::List(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::List(self)
            }

            fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
                <Self as FromReflect>::from_reflect(self).map(Reflect::into_boxed_reflect)
            }
        }

        impl<T: FromReflect> FromReflect for $ty {
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                let ReflectRef::List(list) = reflect.reflect_ref() else {
                    return None;
                };
                list.iter().map(T::from_reflect).collect()
            }
        }

        impl<T: GetClassMeta> GetClassMeta for $ty {
            #[inline]
            fn get_class_meta() -> Option<ClassMeta> {
                None
            }

            #[inline]
            fn register_dependencies(registry: &mut ClassRegistry) {
                registry.register::<T>();
            }
        }
    };
}

impl_reflect_for_list!(Vec<T>, "Vec", mutable: true);
impl_reflect_for_list!(VecDeque<T>, "VecDeque", mutable: true);
impl_reflect_for_list!(Box<[T]>, "BoxedSlice", mutable: false);

impl<T: FromReflect> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn as_list_mut(&mut self) -> Option<&mut dyn ListMut> {
        Some(self)
    }
}

impl<T: FromReflect> ListMut for Vec<T> {
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        Vec::push(self, T::take_from_reflect(value)?);
        Ok(())
    }
}

impl<T: FromReflect> List for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn as_list_mut(&mut self) -> Option<&mut dyn ListMut> {
        Some(self)
    }
}

impl<T: FromReflect> ListMut for VecDeque<T> {
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        self.push_back(T::take_from_reflect(value)?);
        Ok(())
    }
}

impl<T: FromReflect> List for Box<[T]> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        <[T]>::get(self, index).map(|value| value as &dyn Reflect)
    }
}

// -----------------------------------------------------------------------------
// Tests
