//! Static coding information.
//!
//! - [`FieldType`]: the coding category of a field or value.
//! - [`Capabilities`]: the collection operations a class supports.
//! - [`FieldDescriptor`]: name, category and class name of one declared field.
//! - [`ClassInfo`]: the class name and ordered field descriptors of a class.
//! - [`Typed`]: a trait for obtaining category and class name of a type.

// -----------------------------------------------------------------------------
// Modules

mod class_info;
mod field_type;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use class_info::{ClassInfo, FieldDescriptor};
pub use field_type::{Capabilities, FieldFamily, FieldType};
pub use typed::Typed;
