//! Class registry for instantiating classes by name.
//!
//! ## Menu
//!
//! - [`TypeTrait`]: A capability of a registered class.
//! - [`FromType`]: Creates a `TypeTrait` for a type.
//! - [`ClassMeta`]: Class identity plus a [`TypeTrait`] table.
//! - [`GetClassMeta`]: Creates the `ClassMeta` of a type and registers its dependencies.
//! - [`ClassRegistry`]: Stores `ClassMeta`s, indexed by `TypeId` and class name.
//! - TypeTraits:
//!     - [`TypeTraitDefault`]: Creates a default instance, the factory used for polymorphic decoding.
//!     - [`TypeTraitFromReflect`]: Builds an instance from any value of the same shape.
//!
//! ## auto_register
//!
//! See [`ClassRegistry::auto_register`] .
//!
//! Static registration is implemented with the [`inventory`] crate. Not all
//! platforms support it. On those, `auto_register` returns `false` and does
//! nothing else.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod class_meta;
mod class_registry;
mod traits;
mod type_trait;

// -----------------------------------------------------------------------------
// Exports

pub use class_meta::{ClassMeta, GetClassMeta};
pub use class_registry::ClassRegistry;
pub use traits::{TypeTraitDefault, TypeTraitFromReflect};
pub use type_trait::{FromType, TypeTrait};
