#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `amc_coding` by name, in doc tests and in this crate alike.
extern crate self as amc_coding;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;
mod reflection;

pub mod codec;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;
pub mod value;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use amc_coding_derive as derive;
pub use config::CodingConfig;
pub use error::CodingError;
pub use reflection::{FieldValue, FromReflect, Reflect, ReflectKind, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Prelude

/// The most commonly used items.
///
/// ```
/// use amc_coding::prelude::*;
///
/// #[derive(Reflect, Default, Debug, PartialEq)]
/// #[reflect(default)]
/// struct Tag {
///     label: String,
/// }
///
/// let mut registry = ClassRegistry::new();
/// registry.register::<Tag>();
///
/// let dict = to_dictionary(&Tag { label: "red".into() }).unwrap();
/// let tag: Tag = from_dictionary_as(&registry, &dict).unwrap();
/// assert_eq!(tag.label, "red");
/// ```
pub mod prelude {
    pub use crate::codec::{Decoder, Encoder, from_dictionary, from_dictionary_as, to_dictionary};
    pub use crate::derive::Reflect;
    pub use crate::info::{FieldType, Typed};
    pub use crate::ops::{Object, Structure};
    pub use crate::registry::ClassRegistry;
    pub use crate::value::{Dictionary, Value};
    pub use crate::{CodingError, FromReflect, Reflect};
}
