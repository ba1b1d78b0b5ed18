use alloc::string::{String, ToString};
use alloc::vec::Vec;

use amc_utils::vec::FastVec;

use super::context::Context;
use super::{EncodeProcessor, field_type_for_value};
use crate::info::{FieldFamily, FieldType};
use crate::ops::{List, Map, Object};
use crate::value::{CLASS_KEY, Dictionary, Value};
use crate::{CodingConfig, CodingError, Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// Encoder

/// Turns live values into plain [`Value`]s.
///
/// # Encoding Rules
///
/// Every value is encoded under a category, see [`FieldType`]:
///
/// - **Scalar**: the value itself, as a plain value.
/// - **CustomObject**: the dictionary representation of the object, which
///   holds the class name under [`CLASS_KEY`] and one entry per field.
/// - **Structure**: the canonical `{a, b}` string.
/// - **Collections**: an array or a dictionary whose elements are encoded
///   under the category inferred from each element, see
///   [`field_type_for_value`].
///
/// Fields whose value is absent (a `None` option) are left out of the
/// dictionary. Any other failure aborts the whole call.
///
/// A processor, if given, is consulted before these rules for every value,
/// and for every field of an object with its owner and key.
///
/// # Examples
///
/// ```
/// use amc_coding::{codec::Encoder, derive::Reflect, value::Value};
///
/// #[derive(Reflect)]
/// struct Person {
///     name: String,
///     nickname: Option<String>,
///     tags: Vec<String>,
/// }
///
/// let ann = Person {
///     name: "Ann".into(),
///     nickname: None,
///     tags: vec!["a".into(), "b".into()],
/// };
///
/// let dict = Encoder::new().dictionary_representation(&ann).unwrap();
///
/// assert_eq!(dict.class_name(), Some("Person"));
/// assert_eq!(dict.get("name"), Some(&Value::from("Ann")));
/// assert!(!dict.contains_key("nickname"));
/// assert_eq!(dict.get("tags").and_then(Value::as_array).map(<[_]>::len), Some(2));
/// ```
pub struct Encoder<'a, P: EncodeProcessor = ()> {
    config: CodingConfig,
    processor: Option<&'a P>,
    context: Context,
}

impl Encoder<'static, ()> {
    /// Creates an encoder with no processor.
    #[inline]
    pub fn new() -> Self {
        Self {
            config: CodingConfig::new(),
            processor: None,
            context: Context::default(),
        }
    }
}

impl Default for Encoder<'static, ()> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, P: EncodeProcessor> Encoder<'a, P> {
    /// Creates an encoder with a processor.
    #[inline]
    pub fn with_processor(processor: &'a P) -> Self {
        Self {
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

    /// Encodes `value` under the category `field_type`.
    pub fn encode(&mut self, value: &dyn Reflect, field_type: FieldType) -> Result<Value, CodingError> {
        let result = self.encode_value(value, field_type);
        self.context.finish(result)
    }

    /// Builds the dictionary representation of `object`.
    pub fn dictionary_representation(&mut self, object: &dyn Object) -> Result<Dictionary, CodingError> {
        let result = self.encode_object(object);
        self.context.finish(result)
    }

    fn encode_value(&mut self, value: &dyn Reflect, field_type: FieldType) -> Result<Value, CodingError> {
        if let Some(processor) = self.processor
            && let Some(result) = processor.try_encode(value, field_type)
        {
            return result;
        }

        match (field_type.family(), value.reflect_ref()) {
            (FieldFamily::Scalar, ReflectRef::Scalar(scalar)) => Ok(scalar.to_value()),
            (FieldFamily::CustomObject, ReflectRef::Object(object)) => {
                self.encode_object(object).map(Value::Dictionary)
            }
            (FieldFamily::Structure, ReflectRef::Structure(structure)) => {
                Ok(Value::String(structure.to_dynamic_structure().to_string()))
            }
            (FieldFamily::Ordered, ReflectRef::List(list)) => self.encode_list(list),
            (FieldFamily::Keyed, ReflectRef::Map(map)) => self.encode_map(map),
            (FieldFamily::Ordered | FieldFamily::Keyed, _) => {
                Err(CodingError::UnsupportedCollectionCapability {
                    class_name: String::from(value.class_name()),
                    required: field_type.required_capabilities(),
                })
            }
            (_, other) => Err(CodingError::MismatchedFieldType {
                field_type,
                found: other.kind().name(),
            }),
        }
    }

    fn encode_object(&mut self, object: &dyn Object) -> Result<Dictionary, CodingError> {
        self.context.enter(self.config.max_depth)?;

        let mut dict = Dictionary::new();
        dict.insert(CLASS_KEY, object.class_name());

        let keys = object.keys_for_representation().collect::<FastVec<_, 8>>();

        for &key in keys.as_slice() {
            let Some(value) = object.field(key) else {
                log::debug!("omitting absent field `{key}` of `{}`", object.class_name());
                continue;
            };
            let field_type = object
                .field_type_for_key(key)
                .unwrap_or_else(|| field_type_for_value(value));

            log::trace!("encoding field `{key}` of `{}` as {field_type}", object.class_name());

            self.context.push_key(key);
            let encoded = match self
                .processor
                .and_then(|processor| processor.try_encode_field(object, key, value, field_type))
            {
                Some(result) => result?,
                None => self.encode_value(value, field_type)?,
            };
            self.context.pop();

            dict.insert(key, encoded);
        }

        self.context.leave();
        Ok(dict)
    }

    fn encode_list(&mut self, list: &dyn List) -> Result<Value, CodingError> {
        self.context.enter(self.config.max_depth)?;

        let mut array = Vec::with_capacity(list.len());
        for (index, element) in list.iter().enumerate() {
            self.context.push_index(index);
            array.push(self.encode_value(element, field_type_for_value(element))?);
            self.context.pop();
        }

        self.context.leave();
        Ok(Value::Array(array))
    }

    fn encode_map(&mut self, map: &dyn Map) -> Result<Value, CodingError> {
        self.context.enter(self.config.max_depth)?;

        let mut dict = Dictionary::new();
        for (key, element) in map.iter() {
            self.context.push_key(key);
            dict.insert(key, self.encode_value(element, field_type_for_value(element))?);
            self.context.pop();
        }

        self.context.leave();
        Ok(Value::Dictionary(dict))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Encoder;
    use crate::CodingError;
    use crate::info::{Capabilities, FieldType};
    use crate::ops::DynamicStructure;
    use crate::value::{Dictionary, Value};
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn scalars_and_structures() {
        let mut encoder = Encoder::new();
        assert_eq!(encoder.encode(&5_u8, FieldType::Scalar), Ok(Value::from(5_u8)));

        let point: DynamicStructure = "{1, 2.5}".parse().unwrap();
        assert_eq!(
            encoder.encode(&point, FieldType::Structure),
            Ok(Value::from("{1, 2.5}"))
        );
    }

    #[test]
    fn nested_collections() {
        let mut inner = BTreeMap::new();
        inner.insert(String::from("k"), vec![1_i32, 2]);
        let outer = vec![inner];

        let encoded = Encoder::new()
            .encode(&outer, FieldType::CollectionArray)
            .unwrap();

        let mut expected = Dictionary::new();
        expected.insert("k", Value::Array(vec![Value::from(1), Value::from(2)]));
        assert_eq!(encoded, Value::Array(vec![Value::Dictionary(expected)]));
    }

    #[test]
    fn category_mismatch() {
        let mut encoder = Encoder::new();
        assert_eq!(
            encoder.encode(&5_u8, FieldType::CollectionHashMutable),
            Err(CodingError::UnsupportedCollectionCapability {
                class_name: String::from("u8"),
                required: Capabilities::MAP | Capabilities::MAP_MUT,
            })
        );
        assert_eq!(
            encoder.encode(&Vec::<u8>::new(), FieldType::Structure),
            Err(CodingError::MismatchedFieldType {
                field_type: FieldType::Structure,
                found: "List",
            })
        );
    }

    #[test]
    fn depth_limit() {
        let nested = vec![vec![vec![1_u8]]];
        let mut encoder = Encoder::new().with_config(crate::CodingConfig::new().with_max_depth(2));
        assert_eq!(
            encoder.encode(&nested, FieldType::CollectionArrayMutable),
            Err(CodingError::DepthLimitExceeded { limit: 2 })
        );
        // state is reset after a failure
        assert!(encoder.encode(&vec![1_u8], FieldType::CollectionArrayMutable).is_ok());
    }
}
