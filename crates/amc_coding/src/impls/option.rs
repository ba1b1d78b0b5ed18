use crate::info::{Capabilities, FieldType, Typed};
use crate::registry::{ClassMeta, ClassRegistry, GetClassMeta};

// `Option<T>` only appears as a field type. Absence is handled by
// `FieldValue`, the coding category is the one of `T`.

impl<T: Typed> Typed for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
    const CLASS_NAME: &'static str = T::CLASS_NAME;
    const CAPABILITIES: Capabilities = T::CAPABILITIES;
}

impl<T: GetClassMeta> GetClassMeta for Option<T> {
    #[inline]
    fn get_class_meta() -> Option<ClassMeta> {
        None
    }

    #[inline]
    fn register_dependencies(registry: &mut ClassRegistry) {
        registry.register::<T>();
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::info::{FieldType, Typed};
    use crate::ops::DynamicMap;
    use crate::registry::ClassRegistry;
    use alloc::vec::Vec;

    #[test]
    fn forwards_to_inner() {
        assert_eq!(<Option<Vec<u8>> as Typed>::FIELD_TYPE, FieldType::CollectionArrayMutable);
        assert_eq!(<Option<DynamicMap> as Typed>::CLASS_NAME, "DynamicMap");

        let mut registry = ClassRegistry::empty();
        registry.register::<Option<DynamicMap>>();
        assert!(registry.contains_class_name("DynamicMap"));
    }
}
