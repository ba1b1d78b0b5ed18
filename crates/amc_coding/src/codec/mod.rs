//! Conversion between live objects and dictionaries of plain values.
//!
//! - [`Encoder`]: live value → [`Value`], objects → [`Dictionary`].
//! - [`Decoder`]: [`Value`] → live value, [`Dictionary`] → object, with a
//!   [`ClassRegistry`] to resolve class names.
//! - [`field_type_for_value`] / [`field_type_for_encoded`]: category inference
//!   for values without a declared field type.
//! - [`EncodeProcessor`] / [`DecodeProcessor`]: hooks that take over selected values.
//!
//! [`to_dictionary`], [`from_dictionary`] and [`from_dictionary_as`] cover
//! the common case with the default configuration.
//!
//! [`Value`]: crate::value::Value
//!
//! # Examples
//!
//! ```
//! use amc_coding::prelude::*;
//! use amc_coding::codec::from_dictionary;
//!
//! #[derive(Reflect, Default)]
//! #[reflect(default)]
//! struct Circle {
//!     radius: f64,
//! }
//!
//! let mut registry = ClassRegistry::new();
//! registry.register::<Circle>();
//!
//! let dict = to_dictionary(&Circle { radius: 2.0 }).unwrap();
//! assert_eq!(dict.get("radius"), Some(&Value::Real(2.0)));
//!
//! // polymorphic: the class is read from the dictionary
//! let shape = from_dictionary(&registry, &dict).unwrap();
//! assert_eq!(shape.class_name(), "Circle");
//! ```

// -----------------------------------------------------------------------------
// Modules

mod classify;
mod context;
mod decoder;
mod encoder;
mod processor;

// -----------------------------------------------------------------------------
// Exports

pub use classify::{field_type_for_encoded, field_type_for_value};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use processor::{DecodeProcessor, EncodeProcessor};

use alloc::boxed::Box;

use crate::info::Typed;
use crate::ops::Object;
use crate::registry::ClassRegistry;
use crate::value::Dictionary;
use crate::{CodingError, FromReflect, Reflect};

/// Builds the dictionary representation of `object`.
///
/// See [`Encoder::dictionary_representation`].
#[inline]
pub fn to_dictionary(object: &dyn Object) -> Result<Dictionary, CodingError> {
    Encoder::new().dictionary_representation(object)
}

/// Builds an object of the class named in `dict`.
///
/// See [`Decoder::object_with_dictionary`].
#[inline]
pub fn from_dictionary(registry: &ClassRegistry, dict: &Dictionary) -> Result<Box<dyn Reflect>, CodingError> {
    Decoder::new(registry).object_with_dictionary(Some(dict))
}

/// Builds an object of the class named in `dict` and converts it to `T`.
///
/// See [`Decoder::object_with_dictionary_as`].
#[inline]
pub fn from_dictionary_as<T: FromReflect + Typed>(registry: &ClassRegistry, dict: &Dictionary) -> Result<T, CodingError> {
    Decoder::new(registry).object_with_dictionary_as(dict)
}
