use alloc::boxed::Box;

use crate::info::FieldType;
use crate::ops::Object;
use crate::registry::ClassRegistry;
use crate::value::Value;
use crate::{CodingError, Reflect};

/// Takes over the encoding of selected values.
///
/// The processor is consulted before the default rules for every value the
/// [`Encoder`](super::Encoder) visits, with the category the value is
/// encoded under.
///
/// ## Return Value Semantics
///
/// - **`Some(Ok(value))`** → the value is encoded as `value`.
/// - **`Some(Err(error))`** → the value is handled but encoding failed.
/// - **`None`** → not handled, the default rules apply.
///
/// The trait is implemented for `()`, which handles nothing.
///
/// # Examples
///
/// ```
/// use amc_coding::codec::{EncodeProcessor, Encoder};
/// use amc_coding::info::FieldType;
/// use amc_coding::value::Value;
/// use amc_coding::{CodingError, Reflect};
///
/// // Writes booleans as "YES"/"NO".
/// struct YesNo;
///
/// impl EncodeProcessor for YesNo {
///     fn try_encode(&self, value: &dyn Reflect, _: FieldType) -> Option<Result<Value, CodingError>> {
///         let flag = value.downcast_ref::<bool>()?;
///         Some(Ok(Value::from(if *flag { "YES" } else { "NO" })))
///     }
/// }
///
/// let mut encoder = Encoder::with_processor(&YesNo);
/// let encoded = encoder.encode(&vec![true, false], FieldType::CollectionArrayMutable).unwrap();
/// assert_eq!(encoded, Value::Array(vec![Value::from("YES"), Value::from("NO")]));
/// ```
pub trait EncodeProcessor {
    fn try_encode(
        &self,
        value: &dyn Reflect,
        field_type: FieldType,
    ) -> Option<Result<Value, CodingError>>;

    /// Takes over a single field of an object.
    ///
    /// Consulted before [`try_encode`](EncodeProcessor::try_encode) for every
    /// field written by the encoder, with the object owning it and its key.
    #[inline]
    fn try_encode_field(
        &self,
        owner: &dyn Object,
        key: &str,
        value: &dyn Reflect,
        field_type: FieldType,
    ) -> Option<Result<Value, CodingError>> {
        let _ = (owner, key, value, field_type);
        None
    }
}

impl EncodeProcessor for () {
    #[inline]
    fn try_encode(&self, _value: &dyn Reflect, _field_type: FieldType) -> Option<Result<Value, CodingError>> {
        None
    }
}

/// Takes over the decoding of selected values.
///
/// The processor is consulted before the default rules for every value the
/// [`Decoder`](super::Decoder) visits, with the category it is decoded
/// under and, for declared fields, the declared class name.
///
/// See [`EncodeProcessor`] for the meaning of the return value.
///
/// The trait is implemented for `()`, which handles nothing.
///
/// # Examples
///
/// ```
/// use amc_coding::codec::DecodeProcessor;
/// use amc_coding::prelude::*;
///
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Login {
///     user: String,
///     token: String,
/// }
///
/// // Tokens are never read back from storage.
/// struct DropTokens;
///
/// impl DecodeProcessor for DropTokens {
///     fn try_decode(&mut self, _: &Value, _: FieldType, _: Option<&str>, _: &ClassRegistry)
///         -> Option<Result<Box<dyn Reflect>, CodingError>> {
///         None
///     }
///
///     fn try_decode_field(&mut self, owner: &dyn Object, key: &str, _: &Value, _: FieldType, _: &ClassRegistry)
///         -> Option<Result<Box<dyn Reflect>, CodingError>> {
///         if owner.class_name() != "Login" || key != "token" {
///             return None;
///         }
///         Some(Ok(Box::new(String::new())))
///     }
/// }
///
/// let dict = to_dictionary(&Login { user: "bo".into(), token: "t0k".into() }).unwrap();
///
/// let mut login = Login::default();
/// let registry = ClassRegistry::new();
/// Decoder::with_processor(&registry, &mut DropTokens).apply_dictionary(&mut login, &dict).unwrap();
/// assert_eq!(login.user, "bo");
/// assert_eq!(login.token, "");
/// ```
pub trait DecodeProcessor {
    fn try_decode(
        &mut self,
        value: &Value,
        field_type: FieldType,
        class_hint: Option<&str>,
        registry: &ClassRegistry,
    ) -> Option<Result<Box<dyn Reflect>, CodingError>>;

    /// Takes over a single field of an object.
    ///
    /// Consulted before [`try_decode`](DecodeProcessor::try_decode) for every
    /// known key of a dictionary, with the object the field is decoded into.
    /// No field of `owner` has been assigned yet.
    #[inline]
    fn try_decode_field(
        &mut self,
        owner: &dyn Object,
        key: &str,
        value: &Value,
        field_type: FieldType,
        registry: &ClassRegistry,
    ) -> Option<Result<Box<dyn Reflect>, CodingError>> {
        let _ = (owner, key, value, field_type, registry);
        None
    }
}

impl DecodeProcessor for () {
    #[inline]
    fn try_decode(
        &mut self,
        _value: &Value,
        _field_type: FieldType,
        _class_hint: Option<&str>,
        _registry: &ClassRegistry,
    ) -> Option<Result<Box<dyn Reflect>, CodingError>> {
        None
    }
}
