use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::context::Context;
use super::{DecodeProcessor, field_type_for_encoded};
use crate::info::{FieldDescriptor, FieldFamily, FieldType, Typed};
use crate::ops::{DynamicList, DynamicMap, DynamicStructure, Object};
use crate::registry::{ClassMeta, ClassRegistry};
use crate::value::{CLASS_KEY, Dictionary, Value};
use crate::{CodingConfig, CodingError, FromReflect, Reflect, ReflectMut};

// -----------------------------------------------------------------------------
// Decoder

/// Rebuilds live values from plain [`Value`]s.
///
/// # Decoding Rules
///
/// Every value is decoded under a category, see [`FieldType`]:
///
/// 1. **Processor Priority**: the processor, if any, may take over any value,
///    and any field of an object by its owner and key.
///
/// 2. **Scalar**: the plain value itself, boxed. Assigning it to a field
///    converts it to the field type.
///
/// 3. **CustomObject**: the class named under [`CLASS_KEY`] is resolved in
///    the registry, a default instance is created and every known field
///    is decoded into it.
///
/// 4. **Structure**: the `{a, b}` string is parsed into a [`DynamicStructure`].
///
/// 5. **Collections**: elements are decoded under the category guessed from
///    their encoded shape, see [`field_type_for_encoded`]. The result is an
///    instance of the class hint if the registry knows it, built by pushing
///    or inserting for mutable categories and in one step otherwise.
///    Without a resolvable hint, a [`DynamicList`] or [`DynamicMap`] is kept.
///
/// Keys of a dictionary that match no declared field are ignored.
///
/// # Examples
///
/// ```
/// use amc_coding::{codec::{Decoder, Encoder}, derive::Reflect, registry::ClassRegistry};
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// #[reflect(default)]
/// struct Address {
///     street: String,
///     number: u32,
/// }
///
/// let home = Address { street: "Elm".into(), number: 5 };
/// let dict = Encoder::new().dictionary_representation(&home).unwrap();
///
/// let mut registry = ClassRegistry::new();
/// registry.register::<Address>();
///
/// let mut decoder = Decoder::new(&registry);
/// let decoded = decoder.object_with_dictionary(Some(&dict)).unwrap();
/// assert_eq!(decoded.downcast_ref::<Address>(), Some(&home));
///
/// // class-known decoding into an existing instance
/// let mut target = Address::default();
/// decoder.apply_dictionary(&mut target, &dict).unwrap();
/// assert_eq!(target, home);
/// ```
pub struct Decoder<'a, P: DecodeProcessor = ()> {
    registry: &'a ClassRegistry,
    config: CodingConfig,
    processor: Option<&'a mut P>,
    context: Context,
}

impl<'a> Decoder<'a, ()> {
    /// Creates a decoder with no processor.
    #[inline]
    pub fn new(registry: &'a ClassRegistry) -> Self {
        Self {
            registry,
            config: CodingConfig::new(),
            processor: None,
            context: Context::default(),
        }
    }
}

impl<'a, P: DecodeProcessor> Decoder<'a, P> {
    /// Creates a decoder with a processor.
    #[inline]
    pub fn with_processor(registry: &'a ClassRegistry, processor: &'a mut P) -> Self {
        Self {
            registry,
            config: CodingConfig::new(),
            processor: Some(processor),
            context: Context::default(),
        }
    }

    /// Replaces the configuration.
    #[inline]
    pub fn with_config(mut self, config: CodingConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &CodingConfig {
        &self.config
    }

    #[inline]
    pub fn registry(&self) -> &'a ClassRegistry {
        self.registry
    }

    /// Decodes `value` under the category `field_type`.
    ///
    /// `class_hint` is the declared class of the value, used to pick the
    /// concrete type of collections.
    pub fn decode(
        &mut self,
        value: &Value,
        field_type: FieldType,
        class_hint: Option<&str>,
    ) -> Result<Box<dyn Reflect>, CodingError> {
        let result = self.decode_value(value, field_type, class_hint);
        self.context.finish(result)
    }

    /// Decodes every field of `dict` into an existing `target`.
    ///
    /// The class key is not checked against the class of `target`.
    ///
    /// Every field is decoded before any is assigned. If a field cannot be
    /// assigned, `target` is left unchanged, unless it or the decoded value
    /// cannot be copied with [`Reflect::reflect_clone`].
    pub fn apply_dictionary(&mut self, target: &mut dyn Object, dict: &Dictionary) -> Result<(), CodingError> {
        let result = match self.decode_fields(target, dict) {
            Ok(fields) => match rehearse(target, &fields) {
                Some(key) => Err(not_assignable(target, key)),
                None => assign(target, fields),
            },
            Err(err) => Err(err),
        };
        self.context.finish(result)
    }

    /// Builds an object of the class named in `dict`.
    ///
    /// # Errors
    ///
    /// - [`NilInput`](CodingError::NilInput) if `dict` is `None`.
    /// - [`MissingClassKey`](CodingError::MissingClassKey) if `dict` has no class name.
    /// - [`UnknownClass`](CodingError::UnknownClass) if the class is not registered.
    /// - [`NotConstructible`](CodingError::NotConstructible) if the class has no default instance.
    /// - any error of the fields.
    pub fn object_with_dictionary(&mut self, dict: Option<&Dictionary>) -> Result<Box<dyn Reflect>, CodingError> {
        let result = match dict {
            Some(dict) => self.decode_object(dict),
            None => Err(CodingError::NilInput),
        };
        self.context.finish(result)
    }

    /// Builds an object of the class named in `dict` and converts it to `T`.
    pub fn object_with_dictionary_as<T: FromReflect + Typed>(&mut self, dict: &Dictionary) -> Result<T, CodingError> {
        let object = self.object_with_dictionary(Some(dict))?;
        T::take_from_reflect(object).map_err(|object| CodingError::MismatchedFieldType {
            field_type: T::FIELD_TYPE,
            found: object.class_name(),
        })
    }

    fn decode_value(
        &mut self,
        value: &Value,
        field_type: FieldType,
        class_hint: Option<&str>,
    ) -> Result<Box<dyn Reflect>, CodingError> {
        if let Some(processor) = self.processor.as_deref_mut()
            && let Some(result) = processor.try_decode(value, field_type, class_hint, self.registry)
        {
            return result;
        }

        let mismatch = || CodingError::MismatchedFieldType {
            field_type,
            found: value.kind_name(),
        };

        match field_type.family() {
            FieldFamily::Scalar => Ok(Box::new(value.clone())),
            FieldFamily::CustomObject => {
                let dict = value.as_dictionary().ok_or_else(mismatch)?;
                self.decode_object(dict)
            }
            FieldFamily::Structure => {
                let input = value.as_str().ok_or_else(mismatch)?;
                match input.parse::<DynamicStructure>() {
                    Ok(structure) => Ok(Box::new(structure)),
                    Err(_) => Err(CodingError::MalformedStructureEncoding {
                        input: String::from(input),
                    }),
                }
            }
            FieldFamily::Ordered => {
                let array = value.as_array().ok_or_else(mismatch)?;
                self.decode_list(array, field_type, class_hint)
            }
            FieldFamily::Keyed => {
                let dict = value.as_dictionary().ok_or_else(mismatch)?;
                self.decode_map(dict, field_type, class_hint)
            }
        }
    }

    fn decode_object(&mut self, dict: &Dictionary) -> Result<Box<dyn Reflect>, CodingError> {
        let class_name = dict.class_name().ok_or(CodingError::MissingClassKey)?;
        let meta = self
            .registry
            .get_with_class_name(class_name)
            .ok_or_else(|| CodingError::UnknownClass {
                class_name: String::from(class_name),
            })?;
        let mut object = meta
            .create_default()
            .ok_or_else(|| CodingError::NotConstructible {
                class_name: String::from(class_name),
            })?;

        match object.reflect_mut() {
            ReflectMut::Object(target) => {
                let fields = self.decode_fields(target, dict)?;
                assign(target, fields)?;
            }
            other => {
                return Err(CodingError::MismatchedFieldType {
                    field_type: FieldType::CustomObject,
                    found: other.kind().name(),
                });
            }
        }
        Ok(object)
    }

    fn decode_fields<'d>(
        &mut self,
        target: &dyn Object,
        dict: &'d Dictionary,
    ) -> Result<Vec<(&'d str, Box<dyn Reflect>)>, CodingError> {
        self.context.enter(self.config.max_depth)?;

        let mut fields = Vec::with_capacity(dict.len());
        for (key, value) in dict {
            if key == CLASS_KEY {
                continue;
            }
            let Some(field_type) = target.field_type_for_key(key) else {
                log::debug!("ignoring unknown key `{key}` of `{}`", target.class_name());
                continue;
            };

            log::trace!("decoding field `{key}` of `{}` as {field_type}", target.class_name());

            self.context.push_key(key);
            let decoded = self.decode_field(target, key, value, field_type)?;
            self.context.pop();

            fields.push((key, decoded));
        }

        self.context.leave();
        Ok(fields)
    }

    fn decode_field(
        &mut self,
        owner: &dyn Object,
        key: &str,
        value: &Value,
        field_type: FieldType,
    ) -> Result<Box<dyn Reflect>, CodingError> {
        if let Some(processor) = self.processor.as_deref_mut()
            && let Some(result) = processor.try_decode_field(owner, key, value, field_type, self.registry)
        {
            return result;
        }

        let class_hint = owner.class_info().field(key).map(FieldDescriptor::class_name);
        self.decode_value(value, field_type, class_hint)
    }

    fn decode_list(
        &mut self,
        array: &[Value],
        field_type: FieldType,
        class_hint: Option<&str>,
    ) -> Result<Box<dyn Reflect>, CodingError> {
        self.context.enter(self.config.max_depth)?;

        let mut elements = Vec::with_capacity(array.len());
        for (index, element) in array.iter().enumerate() {
            self.context.push_index(index);
            elements.push(self.decode_value(element, field_type_for_encoded(element), None)?);
            self.context.pop();
        }

        self.context.leave();

        let Some(meta) = self.resolve_collection::<DynamicList>(field_type, class_hint)? else {
            return Ok(Box::new(DynamicList::from_iter(elements)));
        };

        if !field_type.is_mutable() {
            return construct(meta, Box::new(DynamicList::from_iter(elements)));
        }

        let mut collection = create(meta)?;
        let ReflectMut::List(list) = collection.reflect_mut() else {
            return Err(unsupported(meta, field_type));
        };
        let list = list.as_list_mut().ok_or_else(|| unsupported(meta, field_type))?;
        for (index, element) in elements.into_iter().enumerate() {
            list.push(element)
                .map_err(|_| CodingError::TargetFieldNotAssignable {
                    class_name: String::from(meta.class_name()),
                    field: format!("[{index}]"),
                })?;
        }
        Ok(collection)
    }

    fn decode_map(
        &mut self,
        dict: &Dictionary,
        field_type: FieldType,
        class_hint: Option<&str>,
    ) -> Result<Box<dyn Reflect>, CodingError> {
        self.context.enter(self.config.max_depth)?;

        let mut entries = Vec::with_capacity(dict.len());
        for (key, element) in dict {
            self.context.push_key(key);
            entries.push((
                String::from(key),
                self.decode_value(element, field_type_for_encoded(element), None)?,
            ));
            self.context.pop();
        }

        self.context.leave();

        let Some(meta) = self.resolve_collection::<DynamicMap>(field_type, class_hint)? else {
            return Ok(Box::new(DynamicMap::from_iter(entries)));
        };

        if !field_type.is_mutable() {
            return construct(meta, Box::new(DynamicMap::from_iter(entries)));
        }

        let mut collection = create(meta)?;
        let ReflectMut::Map(map) = collection.reflect_mut() else {
            return Err(unsupported(meta, field_type));
        };
        let map = map.as_map_mut().ok_or_else(|| unsupported(meta, field_type))?;
        for (key, element) in entries {
            if let Err(_element) = map.insert(key.clone(), element) {
                return Err(CodingError::TargetFieldNotAssignable {
                    class_name: String::from(meta.class_name()),
                    field: key,
                });
            }
        }
        Ok(collection)
    }

    /// Finds the concrete class of a collection.
    ///
    /// Returns `None` when the dynamic collection `D` should be kept.
    fn resolve_collection<D: Typed>(
        &self,
        field_type: FieldType,
        class_hint: Option<&str>,
    ) -> Result<Option<&'a ClassMeta>, CodingError> {
        let Some(class_name) = class_hint else {
            return Ok(None);
        };
        let Some(meta) = self.registry.get_with_class_name(class_name) else {
            log::debug!("collection class `{class_name}` is not registered, keeping a `{}`", D::CLASS_NAME);
            return Ok(None);
        };
        if meta.type_id() == core::any::TypeId::of::<D>() {
            return Ok(None);
        }
        if !meta.supports(field_type.required_capabilities()) {
            return Err(unsupported(meta, field_type));
        }
        Ok(Some(meta))
    }
}

fn assign(target: &mut dyn Object, fields: Vec<(&str, Box<dyn Reflect>)>) -> Result<(), CodingError> {
    for (key, value) in fields {
        target
            .set_field(key, value)
            .map_err(|_| not_assignable(target, key))?;
    }
    Ok(())
}

/// Assigns copies of `fields` to a copy of `target`.
///
/// Returns the first key that is rejected. Values that cannot be copied are
/// skipped, and nothing is checked if `target` cannot be copied.
fn rehearse<'k>(target: &dyn Object, fields: &[(&'k str, Box<dyn Reflect>)]) -> Option<&'k str> {
    let Some(mut scratch) = target.reflect_clone() else {
        log::trace!("`{}` cannot be copied, assigning fields directly", target.class_name());
        return None;
    };
    let ReflectMut::Object(scratch) = scratch.reflect_mut() else {
        return None;
    };
    for (key, value) in fields {
        let Some(copy) = (**value).reflect_clone() else {
            continue;
        };
        if scratch.set_field(key, copy).is_err() {
            return Some(*key);
        }
    }
    None
}

#[inline]
fn not_assignable(target: &dyn Object, key: &str) -> CodingError {
    CodingError::TargetFieldNotAssignable {
        class_name: String::from(target.class_name()),
        field: String::from(key),
    }
}

#[inline]
fn unsupported(meta: &ClassMeta, field_type: FieldType) -> CodingError {
    CodingError::UnsupportedCollectionCapability {
        class_name: String::from(meta.class_name()),
        required: field_type.required_capabilities(),
    }
}

#[inline]
fn create(meta: &ClassMeta) -> Result<Box<dyn Reflect>, CodingError> {
    meta.create_default().ok_or_else(|| CodingError::NotConstructible {
        class_name: String::from(meta.class_name()),
    })
}

#[inline]
fn construct(meta: &ClassMeta, collection: Box<dyn Reflect>) -> Result<Box<dyn Reflect>, CodingError> {
    meta.construct_from(collection)
        .map_err(|_| CodingError::NotConstructible {
            class_name: String::from(meta.class_name()),
        })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Decoder;
    use crate::CodingError;
    use crate::info::{Capabilities, FieldType};
    use crate::ops::{DynamicList, DynamicMap, DynamicStructure, List, Map};
    use crate::registry::ClassRegistry;
    use crate::value::{CLASS_KEY, Dictionary, Value};
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn object_entry_errors() {
        let registry = ClassRegistry::new();
        let mut decoder = Decoder::new(&registry);

        assert_eq!(
            decoder.object_with_dictionary(None).unwrap_err(),
            CodingError::NilInput
        );
        assert_eq!(
            decoder.object_with_dictionary(Some(&Dictionary::new())).unwrap_err(),
            CodingError::MissingClassKey
        );

        let mut dict = Dictionary::new();
        dict.insert(CLASS_KEY, 1_i32);
        assert_eq!(
            decoder.object_with_dictionary(Some(&dict)).unwrap_err(),
            CodingError::MissingClassKey
        );

        dict.insert(CLASS_KEY, "Unknown");
        assert_eq!(
            decoder.object_with_dictionary(Some(&dict)).unwrap_err(),
            CodingError::UnknownClass {
                class_name: String::from("Unknown")
            }
        );

        // registered, but not an object
        dict.insert(CLASS_KEY, "DynamicMap");
        assert!(matches!(
            decoder.object_with_dictionary(Some(&dict)),
            Err(CodingError::MismatchedFieldType { found: "Map", .. })
        ));
    }

    #[test]
    fn structures() {
        let registry = ClassRegistry::new();
        let mut decoder = Decoder::new(&registry);

        let decoded = decoder
            .decode(&Value::from("{1, {2, 3}}"), FieldType::Structure, None)
            .unwrap();
        assert_eq!(
            decoded.downcast_ref::<DynamicStructure>().map(DynamicStructure::len),
            Some(2)
        );

        assert_eq!(
            decoder
                .decode(&Value::from("{1, x}"), FieldType::Structure, None)
                .unwrap_err(),
            CodingError::MalformedStructureEncoding {
                input: String::from("{1, x}")
            }
        );
    }

    #[test]
    fn dynamic_collections() {
        let registry = ClassRegistry::new();
        let mut decoder = Decoder::new(&registry);

        let mut inner = Dictionary::new();
        inner.insert("n", 1_i32);
        let array = Value::Array(vec![Value::from("a"), Value::from(inner)]);

        let decoded = decoder
            .decode(&array, FieldType::CollectionArray, Some("Vec"))
            .unwrap();
        let list = decoded.downcast_ref::<DynamicList>().unwrap();
        assert_eq!(List::len(list), 2);

        let map = list.get(1).and_then(|v| v.downcast_ref::<DynamicMap>()).unwrap();
        assert_eq!(
            map.get("n").and_then(|v| v.downcast_ref::<Value>()),
            Some(&Value::from(1_i32))
        );
    }

    #[test]
    fn hinted_collections() {
        let registry = ClassRegistry::new();
        let mut decoder = Decoder::new(&registry);

        let mut dict = Dictionary::new();
        dict.insert("a", true);
        let decoded = decoder
            .decode(&Value::from(dict.clone()), FieldType::CollectionHashMutable, Some("DynamicMap"))
            .unwrap();
        assert_eq!(decoded.downcast_ref::<DynamicMap>().map(Map::len), Some(1));

        assert_eq!(
            decoder
                .decode(&Value::from(dict), FieldType::CollectionArray, Some("DynamicList"))
                .unwrap_err(),
            CodingError::MismatchedFieldType {
                field_type: FieldType::CollectionArray,
                found: "Dictionary",
            }
        );

        // a list class cannot hold a keyed collection
        assert_eq!(
            decoder
                .decode(
                    &Value::from(Dictionary::new()),
                    FieldType::CollectionHash,
                    Some("DynamicList")
                )
                .unwrap_err(),
            CodingError::UnsupportedCollectionCapability {
                class_name: String::from("DynamicList"),
                required: Capabilities::MAP,
            }
        );
    }

    #[test]
    fn depth_limit() {
        let registry = ClassRegistry::new();
        let mut decoder =
            Decoder::new(&registry).with_config(crate::CodingConfig::new().with_max_depth(1));

        let nested = Value::Array(vec![Value::Array(vec![])]);
        assert_eq!(
            decoder
                .decode(&nested, FieldType::CollectionArrayMutable, None)
                .unwrap_err(),
            CodingError::DepthLimitExceeded { limit: 1 }
        );
        assert!(
            decoder
                .decode(&Value::Array(vec![]), FieldType::CollectionArrayMutable, None)
                .is_ok()
        );
    }
}
