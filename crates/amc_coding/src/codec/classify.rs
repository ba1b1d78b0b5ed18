use crate::info::{Capabilities, FieldType};
use crate::ops::DynamicStructure;
use crate::value::{CLASS_KEY, Value};
use crate::{Reflect, ReflectRef};

/// Infers the category of a live value that has no declared field type,
/// such as the element of a collection.
///
/// Collections are mutable if they accept elements one by one.
///
/// ```
/// use amc_coding::{codec::field_type_for_value, info::FieldType};
///
/// assert_eq!(field_type_for_value(&7_u8), FieldType::Scalar);
/// assert_eq!(field_type_for_value(&vec![1_u8]), FieldType::CollectionArrayMutable);
/// assert_eq!(
///     field_type_for_value(&Box::<[u8]>::from([1_u8])),
///     FieldType::CollectionArray,
/// );
/// ```
pub fn field_type_for_value(value: &dyn Reflect) -> FieldType {
    let capabilities = value.capabilities();
    match value.reflect_ref() {
        ReflectRef::Scalar(_) => FieldType::Scalar,
        ReflectRef::Object(_) => FieldType::CustomObject,
        ReflectRef::Structure(_) => FieldType::Structure,
        ReflectRef::List(_) if capabilities.contains(Capabilities::LIST_MUT) => {
            FieldType::CollectionArrayMutable
        }
        ReflectRef::List(_) => FieldType::CollectionArray,
        ReflectRef::Map(_) if capabilities.contains(Capabilities::MAP_MUT) => {
            FieldType::CollectionHashMutable
        }
        ReflectRef::Map(_) => FieldType::CollectionHash,
    }
}

/// Guesses the category an encoded value was produced under.
///
/// In order of precedence:
///
/// 1. a dictionary with a `class` key is a [`CustomObject`](FieldType::CustomObject).
/// 2. any other dictionary is a [`CollectionHashMutable`](FieldType::CollectionHashMutable).
/// 3. an array is a [`CollectionArrayMutable`](FieldType::CollectionArrayMutable).
/// 4. a string in canonical `{a, b}` form is a [`Structure`](FieldType::Structure).
/// 5. anything else is a [`Scalar`](FieldType::Scalar).
///
/// The encoded form carries no mutability, so collections always come back
/// as the mutable variant of their family.
///
/// ```
/// use amc_coding::{codec::field_type_for_encoded, info::FieldType, value::Value};
///
/// assert_eq!(field_type_for_encoded(&Value::from("{1, 2}")), FieldType::Structure);
/// assert_eq!(field_type_for_encoded(&Value::from("{1,2}")), FieldType::Scalar);
/// assert_eq!(field_type_for_encoded(&Value::Array(vec![])), FieldType::CollectionArrayMutable);
/// ```
pub fn field_type_for_encoded(value: &Value) -> FieldType {
    match value {
        Value::Dictionary(dict) if dict.contains_key(CLASS_KEY) => FieldType::CustomObject,
        Value::Dictionary(_) => FieldType::CollectionHashMutable,
        Value::Array(_) => FieldType::CollectionArrayMutable,
        Value::String(s) if DynamicStructure::is_canonical(s) => FieldType::Structure,
        _ => FieldType::Scalar,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{field_type_for_encoded, field_type_for_value};
    use crate::info::FieldType;
    use crate::ops::{DynamicList, DynamicMap, DynamicStructure};
    use crate::value::{CLASS_KEY, Dictionary, Value};
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn live_values() {
        assert_eq!(field_type_for_value(&String::new()), FieldType::Scalar);
        assert_eq!(field_type_for_value(&Value::from(1_u8)), FieldType::Scalar);
        assert_eq!(field_type_for_value(&DynamicStructure::new()), FieldType::Structure);
        assert_eq!(field_type_for_value(&DynamicList::new()), FieldType::CollectionArrayMutable);
        assert_eq!(field_type_for_value(&DynamicMap::new()), FieldType::CollectionHashMutable);
        assert_eq!(
            field_type_for_value(&BTreeMap::<String, u8>::new()),
            FieldType::CollectionHashMutable
        );
    }

    #[test]
    fn encoded_precedence() {
        let mut object = Dictionary::new();
        object.insert(CLASS_KEY, "Person");
        assert_eq!(field_type_for_encoded(&Value::from(object)), FieldType::CustomObject);

        // shape decides, not content
        let empty = Dictionary::new();
        assert_eq!(field_type_for_encoded(&Value::from(empty)), FieldType::CollectionHashMutable);
        assert_eq!(
            field_type_for_encoded(&Value::Array(vec![Value::from("{1, 2}")])),
            FieldType::CollectionArrayMutable
        );

        assert_eq!(field_type_for_encoded(&Value::from("{1.5, {2, 3}}")), FieldType::Structure);
        assert_eq!(field_type_for_encoded(&Value::from("{}")), FieldType::Scalar);
        assert_eq!(field_type_for_encoded(&Value::from("plain")), FieldType::Scalar);
        assert_eq!(field_type_for_encoded(&Value::from(true)), FieldType::Scalar);
    }
}
