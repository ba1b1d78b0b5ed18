use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use amc_utils::hash::HashMap;

use crate::info::{Capabilities, FieldType, Typed};
use crate::registry::{ClassMeta, FromType, GetClassMeta, TypeTraitDefault, TypeTraitFromReflect};
use crate::{FromReflect, Reflect, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Map

/// A keyed collection with string keys: count, keyed read and iteration.
///
/// Types that also accept entries one by one expose [`MapMut`] through
/// [`as_map_mut`](Map::as_map_mut).
pub trait Map: Reflect {
    fn len(&self) -> usize;

    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Iterates all entries. The order is the one of the underlying container.
    fn iter(&self) -> MapIter<'_>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The incremental view, `None` for maps built in one step.
    #[inline]
    fn as_map_mut(&mut self) -> Option<&mut dyn MapMut> {
        None
    }
}

impl dyn Map {
    /// Iterates all keys.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(key, _)| key)
    }
}

/// A keyed collection that accepts entries one by one.
pub trait MapMut: Map {
    /// Inserts an entry, replacing any previous value of the key.
    ///
    /// The value is handed back if it cannot be converted to the value type.
    fn insert(&mut self, key: String, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;
}

/// An iterator over the entries of a [`Map`].
pub struct MapIter<'a> {
    inner: Box<dyn Iterator<Item = (&'a str, &'a dyn Reflect)> + 'a>,
}

impl<'a> MapIter<'a> {
    #[inline]
    pub fn new(iter: impl Iterator<Item = (&'a str, &'a dyn Reflect)> + 'a) -> Self {
        Self {
            inner: Box::new(iter),
        }
    }
}

impl<'a> Iterator for MapIter<'a> {
    type Item = (&'a str, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// -----------------------------------------------------------------------------
// DynamicMap

/// A type-erased keyed collection, similar to `HashMap<String, Box<dyn Reflect>>`.
///
/// The decoder builds one for every encoded dictionary without a class key,
/// and keeps it as the result when the declared class of the field is unknown.
///
/// ```
/// use amc_coding::{Reflect, ops::{DynamicMap, Map, MapMut}};
///
/// let mut map = DynamicMap::new();
/// map.insert("a".into(), Box::new(1_i32)).unwrap();
/// map.insert("a".into(), Box::new(2_i32)).unwrap();
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("a").and_then(|v| v.downcast_ref::<i32>()), Some(&2));
/// ```
#[derive(Default)]
pub struct DynamicMap {
    values: HashMap<String, Box<dyn Reflect>>,
}

impl DynamicMap {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Box<dyn Reflect>> {
        self.values.remove(key)
    }
}

impl fmt::Debug for DynamicMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}

impl FromIterator<(String, Box<dyn Reflect>)> for DynamicMap {
    fn from_iter<I: IntoIterator<Item = (String, Box<dyn Reflect>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DynamicMap {
    type Item = (String, Box<dyn Reflect>);
    type IntoIter = amc_utils::hash::hashbrown::hash_map::IntoIter<String, Box<dyn Reflect>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl Typed for DynamicMap {
    const FIELD_TYPE: FieldType = FieldType::CollectionHashMutable;
    const CLASS_NAME: &'static str = "DynamicMap";
    const CAPABILITIES: Capabilities = Capabilities::MAP.union(Capabilities::MAP_MUT);
}

impl Reflect for DynamicMap {
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
        ReflectRef::Map(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Map(self)
    }

    fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
        Self::from_reflect(self).map(Reflect::into_boxed_reflect)
    }
}

impl Map for DynamicMap {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        self.values.get(key).map(|value| &**value)
    }

    fn iter(&self) -> MapIter<'_> {
        MapIter::new(self.values.iter().map(|(k, v)| (k.as_str(), &**v)))
    }

    #[inline]
    fn as_map_mut(&mut self) -> Option<&mut dyn MapMut> {
        Some(self)
    }
}

impl MapMut for DynamicMap {
    #[inline]
    fn insert(&mut self, key: String, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        self.values.insert(key, value);
        Ok(())
    }
}

impl FromReflect for DynamicMap {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        let ReflectRef::Map(map) = reflect.reflect_ref() else {
            return None;
        };
        map.iter()
            .map(|(key, value)| Some((String::from(key), value.reflect_clone()?)))
            .collect()
    }
}

impl GetClassMeta for DynamicMap {
    fn get_class_meta() -> Option<ClassMeta> {
        let mut meta = ClassMeta::of::<Self>();
        meta.insert_trait(<TypeTraitDefault as FromType<Self>>::from_type());
        meta.insert_trait(<TypeTraitFromReflect as FromType<Self>>::from_type());
        Some(meta)
    }
}
