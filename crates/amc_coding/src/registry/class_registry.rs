use core::any::TypeId;
use core::fmt;

use amc_utils::TypeIdMap;
use amc_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::{Capabilities, Typed};
use crate::ops::{DynamicList, DynamicMap};
use crate::registry::{ClassMeta, FromType, GetClassMeta, TypeTrait};

// -----------------------------------------------------------------------------
// ClassRegistry

/// A registry of classes that can be instantiated by name.
///
/// The decoder resolves the class key of an encoded object, and the
/// declared class of a collection field, through this registry.
///
/// Class names must be unique. When two different types register under the
/// same name, the name becomes ambiguous and resolves to nothing.
///
/// # Examples
///
/// ```
/// use amc_coding::{derive::Reflect, registry::ClassRegistry, info::Capabilities};
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Address {
///     city: String,
/// }
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Person {
///     address: Option<Address>,
/// }
///
/// let mut registry = ClassRegistry::new();
/// registry.register::<Person>();
///
/// // field types are registered with it
/// assert!(registry.get_with_class_name("Address").is_some());
/// assert!(registry.supports("DynamicMap", Capabilities::MAP | Capabilities::MAP_MUT));
/// assert!(!registry.supports("Person", Capabilities::LIST));
/// ```
pub struct ClassRegistry {
    meta_table: TypeIdMap<ClassMeta>,
    name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for ClassRegistry {
    /// See [`ClassRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            meta_table: TypeIdMap::new(),
            name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
        }
    }

    /// Creates a registry with the default collections, [`DynamicList`] and
    /// [`DynamicMap`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<DynamicList>();
        registry.register::<DynamicMap>();
        registry
    }

    // The type must **not** already exist.
    fn add_name_index(
        meta: &ClassMeta,
        name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let class_name = meta.class_name();
        if ambiguous_names.contains(class_name) {
            return;
        }
        if name_to_id.contains_key(class_name) {
            log::warn!("class name `{class_name}` is registered by more than one type, lookups by name will fail");
            name_to_id.remove(class_name);
            ambiguous_names.insert(class_name);
        } else {
            name_to_id.insert(class_name, meta.type_id());
        }
    }

    /// Adds `meta` if its type is not registered yet, returning `true` if added.
    ///
    /// This does _not_ register dependencies.
    pub fn try_insert_class_meta(&mut self, meta: ClassMeta) -> bool {
        self.meta_table.try_insert(meta.type_id(), || {
            Self::add_name_index(&meta, &mut self.name_to_id, &mut self.ambiguous_names);
            meta
        })
    }

    /// Registers `T` and, recursively, the types it depends on.
    ///
    /// Registering a type twice does nothing. Types without class identity
    /// only register their dependencies.
    pub fn register<T: GetClassMeta>(&mut self) {
        if self.meta_table.contains(&TypeId::of::<T>()) {
            return;
        }
        match T::get_class_meta() {
            Some(meta) => {
                log::trace!("registering class `{}`", meta.class_name());
                self.try_insert_class_meta(meta);
                T::register_dependencies(self);
            }
            None => T::register_dependencies(self),
        }
    }

    /// Registers every type annotated with `#[reflect(auto_register)]`.
    ///
    /// Returns `true` if automatic registration works on the current
    /// platform. Repeated calls are cheap.
    ///
    /// Requires the `auto_register` feature, without it this always
    /// returns `false`.
    ///
    /// ```no_run
    /// use amc_coding::{derive::Reflect, registry::ClassRegistry};
    ///
    /// #[derive(Reflect, Default)]
    /// #[reflect(default, auto_register)]
    /// struct Settings {
    ///     volume: u8,
    /// }
    ///
    /// let mut registry = ClassRegistry::new();
    /// assert!(registry.auto_register());
    /// assert!(registry.get_with_class_name("Settings").is_some());
    /// ```
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register;
            if self.contains(TypeId::of::<auto_register::__AvailFlag>()) {
                return true;
            }
            auto_register::__register_types(self);
            self.contains(TypeId::of::<auto_register::__AvailFlag>())
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    /// Adds the type trait `D` to the registered type `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` is not registered.
    pub fn register_type_trait<T: Typed, D: TypeTrait + FromType<T>>(&mut self) {
        match self.meta_table.get_mut(&TypeId::of::<T>()) {
            Some(meta) => meta.insert_trait(D::from_type()),
            None => panic!(
                "called `ClassRegistry::register_type_trait` for unregistered class `{}`",
                T::CLASS_NAME,
            ),
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.meta_table.contains(&type_id)
    }

    #[inline]
    pub fn contains_class_name(&self, class_name: &str) -> bool {
        self.name_to_id.contains_key(class_name)
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&ClassMeta> {
        self.meta_table.get(&type_id)
    }

    /// Looks a class up by name.
    ///
    /// Returns `None` for unknown and for ambiguous names.
    pub fn get_with_class_name(&self, class_name: &str) -> Option<&ClassMeta> {
        self.name_to_id
            .get(class_name)
            .and_then(|id| self.meta_table.get(id))
    }

    #[inline]
    pub fn is_ambiguous(&self, class_name: &str) -> bool {
        self.ambiguous_names.contains(class_name)
    }

    #[inline]
    pub fn get_type_trait<D: TypeTrait>(&self, type_id: TypeId) -> Option<&D> {
        self.get(type_id).and_then(ClassMeta::get_trait::<D>)
    }

    /// Returns `true` if the named class can be built under `required`.
    ///
    /// Unknown classes support nothing, not even the empty set.
    pub fn supports(&self, class_name: &str, required: Capabilities) -> bool {
        self.get_with_class_name(class_name)
            .is_some_and(|meta| meta.supports(required))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meta_table.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ClassMeta> {
        self.meta_table.values()
    }
}

impl fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.meta_table.values().map(ClassMeta::class_name))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ClassRegistry;
    use crate::info::{Capabilities, FieldType, Typed};
    use crate::ops::{DynamicList, DynamicMap};
    use crate::registry::{ClassMeta, FromType, GetClassMeta, TypeTraitDefault};
    use core::any::TypeId;

    struct First;
    struct Second;

    impl Typed for First {
        const FIELD_TYPE: FieldType = FieldType::CustomObject;
        const CLASS_NAME: &'static str = "Twin";
    }

    impl Typed for Second {
        const FIELD_TYPE: FieldType = FieldType::CustomObject;
        const CLASS_NAME: &'static str = "Twin";
    }

    impl GetClassMeta for First {
        fn get_class_meta() -> Option<ClassMeta> {
            Some(ClassMeta::of::<Self>())
        }
    }

    impl GetClassMeta for Second {
        fn get_class_meta() -> Option<ClassMeta> {
            Some(ClassMeta::of::<Self>())
        }
    }

    #[test]
    fn defaults() {
        let registry = ClassRegistry::new();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(TypeId::of::<DynamicList>()));
        assert!(registry.supports("DynamicList", Capabilities::LIST | Capabilities::LIST_MUT));
        assert!(registry.supports("DynamicMap", Capabilities::MAP));
        assert!(!registry.supports("DynamicMap", Capabilities::LIST));
        assert!(!registry.supports("Missing", Capabilities::empty()));
        assert!(
            registry
                .get_type_trait::<TypeTraitDefault>(TypeId::of::<DynamicMap>())
                .is_some()
        );
    }

    #[test]
    fn ambiguous_names() {
        let mut registry = ClassRegistry::empty();
        registry.register::<First>();
        assert!(registry.get_with_class_name("Twin").is_some());

        registry.register::<Second>();
        assert!(registry.is_ambiguous("Twin"));
        assert!(registry.get_with_class_name("Twin").is_none());
        assert!(registry.contains(TypeId::of::<Second>()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn scalars_have_no_identity() {
        let mut registry = ClassRegistry::empty();
        registry.register::<u32>();
        registry.register::<alloc::vec::Vec<alloc::string::String>>();
        assert!(registry.is_empty());
    }

    struct Marker;

    impl<T: Typed> FromType<T> for Marker {
        fn from_type() -> Self {
            Marker
        }
    }

    #[test]
    fn extra_type_trait() {
        let mut registry = ClassRegistry::empty();
        registry.register::<First>();
        registry.register_type_trait::<First, Marker>();
        assert!(registry.get_type_trait::<Marker>(TypeId::of::<First>()).is_some());
    }

    #[test]
    #[should_panic(expected = "unregistered class `Twin`")]
    fn trait_for_unregistered() {
        let mut registry = ClassRegistry::empty();
        registry.register_type_trait::<Second, Marker>();
    }
}
