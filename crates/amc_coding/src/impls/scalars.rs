use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::codec::Encoder;
use crate::info::{FieldType, Typed};
use crate::ops::Scalar;
use crate::registry::{ClassMeta, GetClassMeta};
use crate::value::{Data, Date, Dictionary, Integer, Value};
use crate::{FromReflect, Reflect, ReflectMut, ReflectRef};

// Implements the reflection traits of a scalar.
//
// `$from` converts a borrowed plain `Value` back to the type, it is only
// used when the reflected value is not already of the type.
macro_rules! impl_scalar {
    ($ty:ty, $name:expr, |$this:ident| $to:expr, |$value:ident| $from:expr) => {
        impl Typed for $ty {
            const FIELD_TYPE: FieldType = FieldType::Scalar;
            const CLASS_NAME: &'static str = $name;
        }

        impl Reflect for $ty {
            #[inline]
            fn class_name(&self) -> &'static str {
                $name
            }

            #[inline]
            fn reflect_ref(&self) -> ReflectRef<'_> {
                ReflectRef::Scalar(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> ReflectMut<'_> {
                ReflectMut::Scalar(self)
            }

            #[inline]
            fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
                Some(Box::new(self.clone()))
            }
        }

        impl Scalar for $ty {
            #[inline]
            fn to_value(&self) -> Value {
                let $this = self;
                $to
            }
        }

        impl FromReflect for $ty {
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                if let Some(this) = reflect.downcast_ref::<Self>() {
                    return Some(this.clone());
                }
                let ReflectRef::Scalar(scalar) = reflect.reflect_ref() else {
                    return None;
                };
                let $value = &scalar.to_value();
                $from
            }
        }

        impl GetClassMeta for $ty {
            #[inline]
            fn get_class_meta() -> Option<ClassMeta> {
                None
            }
        }
    };
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl_scalar!(
                $ty,
                stringify!($ty),
                |this| Value::Integer(Integer::from(*this)),
                |value| <$ty>::try_from(value.as_integer()?.get()).ok()
            );
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl_scalar!(
    bool,
    "bool",
    |this| Value::Boolean(*this),
    |value| value.as_boolean()
);

impl_scalar!(
    f64,
    "f64",
    |this| Value::Real(*this),
    |value| value.as_real()
);

impl_scalar!(
    f32,
    "f32",
    |this| Value::Real(f64::from(*this)),
    |value| value.as_real().map(|r| r as f32)
);

impl_scalar!(
    Date,
    "Date",
    |this| Value::Date(*this),
    |value| value.as_date()
);

impl_scalar!(
    Data,
    "Data",
    |this| Value::Data(this.clone()),
    |value| value.as_data().cloned()
);

// `Value` is rebuilt from every view, since a decoded collection element
// keeps the dynamic shape guessed from its encoded form.

impl Typed for Value {
    const FIELD_TYPE: FieldType = FieldType::Scalar;
    const CLASS_NAME: &'static str = "Value";
}

impl Reflect for Value {
    #[inline]
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(self)
    }

    #[inline]
    fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
        Some(Box::new(self.clone()))
    }
}

impl Scalar for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromReflect for Value {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        if let Some(this) = reflect.downcast_ref::<Self>() {
            return Some(this.clone());
        }
        match reflect.reflect_ref() {
            ReflectRef::Scalar(scalar) => Some(scalar.to_value()),
            ReflectRef::Structure(s) => Some(Value::String(s.to_dynamic_structure().to_string())),
            ReflectRef::List(list) => list
                .iter()
                .map(Value::from_reflect)
                .collect::<Option<Vec<_>>>()
                .map(Value::Array),
            ReflectRef::Map(map) => {
                let mut dict = Dictionary::new();
                for (key, element) in map.iter() {
                    dict.insert(key, Value::from_reflect(element)?);
                }
                Some(Value::Dictionary(dict))
            }
            ReflectRef::Object(object) => Encoder::new()
                .dictionary_representation(object)
                .ok()
                .map(Value::Dictionary),
        }
    }
}

impl GetClassMeta for Value {
    #[inline]
    fn get_class_meta() -> Option<ClassMeta> {
        None
    }
}

// `String` also accepts a structure, which appears when a string element of
// a collection happens to look like a structure encoding.

impl Typed for String {
    const FIELD_TYPE: FieldType = FieldType::Scalar;
    const CLASS_NAME: &'static str = "String";
}

impl Reflect for String {
    #[inline]
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Scalar(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Scalar(self)
    }

    #[inline]
    fn reflect_clone(&self) -> Option<Box<dyn Reflect>> {
        Some(Box::new(self.clone()))
    }
}

impl Scalar for String {
    #[inline]
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FromReflect for String {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        if let Some(this) = reflect.downcast_ref::<Self>() {
            return Some(this.clone());
        }
        match reflect.reflect_ref() {
            ReflectRef::Scalar(scalar) => match scalar.to_value() {
                Value::String(s) => Some(s),
                _ => None,
            },
            ReflectRef::Structure(s) => Some(s.to_dynamic_structure().to_string()),
            _ => None,
        }
    }
}

impl GetClassMeta for String {
    #[inline]
    fn get_class_meta() -> Option<ClassMeta> {
        None
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::ops::{DynamicList, DynamicMap, DynamicStructure, Scalar};
    use crate::value::{Data, Date, Dictionary, Value};
    use crate::{FromReflect, Reflect};
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn integer_ranges() {
        assert_eq!(i8::from_reflect(&Value::from(-128_i64)), Some(-128));
        assert_eq!(i8::from_reflect(&Value::from(128_i64)), None);
        assert_eq!(u64::from_reflect(&Value::from(u64::MAX)), Some(u64::MAX));
        assert_eq!(i64::from_reflect(&Value::from(u64::MAX)), None);
        assert_eq!(u16::from_reflect(&7_u8), Some(7));
        assert_eq!(u16::from_reflect(&Value::from(1.0_f64)), None);
    }

    #[test]
    fn real_accepts_integer() {
        assert_eq!(f64::from_reflect(&Value::from(3_i32)), Some(3.0));
        assert_eq!(f32::from_reflect(&Value::from(0.5_f64)), Some(0.5));
        assert_eq!(3.5_f32.to_value(), Value::Real(3.5));
    }

    #[test]
    fn other_scalars() {
        assert_eq!(bool::from_reflect(&Value::from(true)), Some(true));
        assert_eq!(bool::from_reflect(&Value::from(1_i32)), None);

        let date = Date::from_unix_seconds(10.0);
        assert_eq!(Date::from_reflect(&Value::Date(date)), Some(date));

        let data = Data::from(vec![1_u8]);
        assert_eq!(Data::from_reflect(&Value::Data(data.clone())), Some(data));

        let value = Value::from("v");
        assert_eq!(Value::from_reflect(&value), Some(value.clone()));
        assert_eq!(Value::from_reflect(&7_u8), Some(Value::from(7_u8)));
    }

    #[test]
    fn value_from_dynamic_views() {
        let s: DynamicStructure = "{1, 2}".parse().unwrap();
        assert_eq!(Value::from_reflect(&s), Some(Value::from("{1, 2}")));

        let inner: DynamicList = [Box::new(Value::from(1_i32)) as Box<dyn Reflect>]
            .into_iter()
            .collect();
        let list: DynamicList = [
            Box::new(inner) as Box<dyn Reflect>,
            Box::new(String::from("x")),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            Value::from_reflect(&list),
            Some(Value::Array(vec![
                Value::Array(vec![Value::from(1_i32)]),
                Value::from("x"),
            ]))
        );

        let map: DynamicMap = [(String::from("k"), Box::new(s) as Box<dyn Reflect>)]
            .into_iter()
            .collect();
        let mut expected = Dictionary::new();
        expected.insert("k", "{1, 2}");
        assert_eq!(Value::from_reflect(&map), Some(Value::Dictionary(expected)));
    }

    #[test]
    fn string_from_structure() {
        let s: DynamicStructure = "{1, 2}".parse().unwrap();
        assert_eq!(String::from_reflect(&s).as_deref(), Some("{1, 2}"));
        assert_eq!(String::from_reflect(&Value::from(1_u8)), None);
        assert_eq!(String::from("x").reflect_clone().unwrap().take::<String>().ok().as_deref(), Some("x"));
    }
}
