//! Derive macro of `amc_coding`, see [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

/// The dictionary key holding the class name, reserved in every object.
static CLASS_KEY: &str = "class";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflect Derivation
///
/// `#[derive(Reflect)]` makes a struct encodable to and decodable from a
/// dictionary. It implements:
///
/// - `Typed`
/// - `Reflect`
/// - `FromReflect`
/// - `GetClassMeta`
/// - `Object` (the default, for `struct T { ... }`)
/// - `Structure` and `StructComponent` (with `#[reflect(structure)]`)
///
/// Generic types, enums and unions are not supported.
///
/// ## Objects
///
/// Every named field is coded under its name. The field type decides how
/// the value is coded: scalars, nested objects, structures and collections
/// all work, `Option<T>` fields are omitted from the dictionary when `None`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Person {
///     name: String,
///     age: u32,
///     nickname: Option<String>,
///     friends: Vec<Person>,
/// }
/// ```
///
/// The key `class` is reserved for the class name.
///
/// ## Class Name
///
/// The class name defaults to the type name. It is written under `class` in
/// every dictionary and used to look the type up in the registry:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(class_name = "Shape.Circle")]
/// struct Circle { radius: f64 }
/// ```
///
/// This attribute can only be applied at the type level.
///
/// ## Default
///
/// The decoder creates an empty instance and then assigns the decoded fields,
/// so decoding requires `Default`. The macro cannot detect it, declare it
/// with the `default` flag:
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Settings { volume: u8 }
/// ```
///
/// Without it the type can still be encoded, and converted with `FromReflect`.
///
/// ## Structures
///
/// Small records of numbers can be coded as a single string such as
/// `"{1, 2}"`. Fields are coded by position and must implement
/// `StructComponent`; numbers and other structures do.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(structure, default)]
/// struct Point { x: f64, y: f64 }
///
/// #[derive(Reflect, Default)]
/// #[reflect(structure, default)]
/// struct Rect(Point, Point);
/// ```
///
/// Tuple structs are only accepted as structures.
///
/// ## Fields
///
/// - `#[reflect(rename = "...")]`: code the field under another key.
/// - `#[reflect(skip)]`: do not code the field. It is rebuilt with `Default`.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(default)]
/// struct Session {
///     #[reflect(rename = "userName")]
///     user_name: String,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Auto Registration
///
/// With `#[reflect(auto_register)]` the type is picked up by
/// `ClassRegistry::auto_register`. The attribute is a no-op when the
/// `auto_register` feature is disabled.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let info = match derive_data::ReflectStruct::from_input(&ast) {
        Ok(info) => info,
        Err(err) => return err.into_compile_error().into(),
    };

    let impls = impls::impl_reflect(&info);

    TokenStream::from(quote! {
        const _: () = {
            #impls
        };
    })
}
