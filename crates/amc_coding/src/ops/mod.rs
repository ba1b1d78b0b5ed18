//! Capability traits and dynamic containers.
//!
//! ## Interface
//!
//! The following are subtraits of [`Reflect`], one per shape a value can have.
//!
//! - [`Scalar`]: passed through as a plain value.
//! - [`Object`]: a class with named fields, read and written by key.
//! - [`Structure`]: a fixed-layout record of numbers.
//! - [`List`] / [`ListMut`]: an ordered collection, optionally built element by element.
//! - [`Map`] / [`MapMut`]: a keyed collection, optionally built entry by entry.
//!
//! ## Dynamic Type
//!
//! - [`DynamicList`]: the default ordered collection of the decoder.
//! - [`DynamicMap`]: the default keyed collection of the decoder.
//! - [`DynamicStructure`]: the parsed form of a structure string.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod list;
mod map;
mod object;
mod scalar;
mod structure;

// -----------------------------------------------------------------------------
// Exports

pub use list::{DynamicList, List, ListIter, ListMut};
pub use map::{DynamicMap, Map, MapIter, MapMut};
pub use object::Object;
pub use scalar::Scalar;
pub use structure::{DynamicStructure, ParseStructureError, StructComponent, StructField, Structure};
