use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::info::{Capabilities, FieldType, Typed};
use crate::registry::{ClassMeta, FromType, GetClassMeta, TypeTraitDefault, TypeTraitFromReflect};
use crate::{FromReflect, Reflect, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// List

/// An ordered collection: count, indexed read and iteration.
///
/// Types that also accept elements one by one expose [`ListMut`] through
/// [`as_list_mut`](List::as_list_mut).
pub trait List: Reflect {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The incremental view, `None` for lists built in one step.
    #[inline]
    fn as_list_mut(&mut self) -> Option<&mut dyn ListMut> {
        None
    }
}

impl dyn List {
    /// Iterates the elements in order.
    #[inline]
    pub fn iter(&self) -> ListIter<'_> {
        ListIter::new(self)
    }
}

/// An ordered collection that accepts elements one by one.
pub trait ListMut: List {
    /// Appends an element, handing it back if it cannot be converted to
    /// the element type.
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;
}

/// An iterator over the elements of a [`List`].
pub struct ListIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl<'a> ListIter<'a> {
    #[inline]
    pub const fn new(list: &'a dyn List) -> Self {
        Self { list, index: 0 }
    }
}

impl<'a> Iterator for ListIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListIter<'_> {}

// -----------------------------------------------------------------------------
// DynamicList

/// A type-erased ordered collection, similar to `Vec<Box<dyn Reflect>>`.
///
/// The decoder builds one for every encoded array, and keeps it as the
/// result when the declared class of the field is unknown.
///
/// ```
/// use amc_coding::{Reflect, ops::{DynamicList, List, ListMut}};
///
/// let mut list = DynamicList::new();
/// list.push(Box::new(1_u8)).unwrap();
/// list.push(Box::new(String::from("two"))).unwrap();
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0).and_then(|v| v.downcast_ref::<u8>()), Some(&1));
/// ```
#[derive(Default)]
pub struct DynamicList {
    values: Vec<Box<dyn Reflect>>,
}

impl DynamicList {
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn into_values(self) -> Vec<Box<dyn Reflect>> {
        self.values
    }
}

impl fmt::Debug for DynamicList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}

impl FromIterator<Box<dyn Reflect>> for DynamicList {
    fn from_iter<I: IntoIterator<Item = Box<dyn Reflect>>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DynamicList {
    type Item = Box<dyn Reflect>;
    type IntoIter = alloc::vec::IntoIter<Box<dyn Reflect>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Typed for DynamicList {
    const FIELD_TYPE: FieldType = FieldType::CollectionArrayMutable;
    const CLASS_NAME: &'static str = "DynamicList";
    const CAPABILITIES: Capabilities = Capabilities::LIST.union(Capabilities::LIST_MUT);
}

impl Reflect for DynamicList {
    #[inline]
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    #[inline]
    fn capabilities(&self) -> Capabilities {
        Self::CAPABILITIES
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
        Self::from_reflect(self).map(Reflect::into_boxed_reflect)
    }
}

impl List for DynamicList {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.values.get(index).map(|value| &**value)
    }

    #[inline]
    fn as_list_mut(&mut self) -> Option<&mut dyn ListMut> {
        Some(self)
    }
}

impl ListMut for DynamicList {
    #[inline]
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        self.values.push(value);
        Ok(())
    }
}

impl FromReflect for DynamicList {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        let ReflectRef::List(list) = reflect.reflect_ref() else {
            return None;
        };
        list.iter().map(Reflect::reflect_clone).collect()
    }
}

impl GetClassMeta for DynamicList {
    fn get_class_meta() -> Option<ClassMeta> {
        let mut meta = ClassMeta::of::<Self>();
        meta.insert_trait(<TypeTraitDefault as FromType<Self>>::from_type());
        meta.insert_trait(<TypeTraitFromReflect as FromType<Self>>::from_type());
        Some(meta)
    }
}
