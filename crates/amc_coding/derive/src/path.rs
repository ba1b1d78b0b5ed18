//! Paths of the items referenced by generated code.
//!
//! Everything is resolved from the path of `amc_coding` itself, see
//! [`amc_coding`].

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `amc_coding` crate, as seen by the caller.
///
/// 1. For crates that depend on `amc_coding`, `::amc_coding` is returned.
/// 2. For crates that depend on `amc_core`, `::amc_core::coding` is returned.
/// 3. Otherwise `::amc_coding`, which also covers `amc_coding` itself.
///
/// Reading the manifest is not free, so the path is computed once per
/// derive and passed around.
pub(crate) fn amc_coding() -> syn::Path {
    amc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("amc_coding"))
}

// -----------------------------------------------------------------------------
// Standard items

pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}

pub(crate) fn result_() -> TokenStream {
    quote! { ::core::result::Result }
}

pub(crate) fn default_() -> TokenStream {
    quote! { ::core::default::Default }
}

pub(crate) fn box_(path: &syn::Path) -> TokenStream {
    quote! { #path::__macro_exports::Box }
}

// -----------------------------------------------------------------------------
// Crate items

pub(crate) fn reflect_(path: &syn::Path) -> TokenStream {
    quote! { #path::Reflect }
}

pub(crate) fn reflect_ref_(path: &syn::Path) -> TokenStream {
    quote! { #path::ReflectRef }
}

pub(crate) fn reflect_mut_(path: &syn::Path) -> TokenStream {
    quote! { #path::ReflectMut }
}

pub(crate) fn from_reflect_(path: &syn::Path) -> TokenStream {
    quote! { #path::FromReflect }
}

pub(crate) fn field_value_(path: &syn::Path) -> TokenStream {
    quote! { #path::FieldValue }
}

pub(crate) fn typed_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::Typed }
}

pub(crate) fn field_type_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::FieldType }
}

pub(crate) fn class_info_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::ClassInfo }
}

pub(crate) fn field_descriptor_(path: &syn::Path) -> TokenStream {
    quote! { #path::info::FieldDescriptor }
}

pub(crate) fn object_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::Object }
}

pub(crate) fn structure_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::Structure }
}

pub(crate) fn struct_component_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::StructComponent }
}

pub(crate) fn struct_field_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::StructField }
}

pub(crate) fn dynamic_structure_(path: &syn::Path) -> TokenStream {
    quote! { #path::ops::DynamicStructure }
}

pub(crate) fn class_meta_(path: &syn::Path) -> TokenStream {
    quote! { #path::registry::ClassMeta }
}

pub(crate) fn get_class_meta_(path: &syn::Path) -> TokenStream {
    quote! { #path::registry::GetClassMeta }
}

pub(crate) fn class_registry_(path: &syn::Path) -> TokenStream {
    quote! { #path::registry::ClassRegistry }
}

pub(crate) fn from_type_(path: &syn::Path) -> TokenStream {
    quote! { #path::registry::FromType }
}

pub(crate) fn type_trait_default_(path: &syn::Path) -> TokenStream {
    quote! { #path::registry::TypeTraitDefault }
}

pub(crate) fn type_trait_from_reflect_(path: &syn::Path) -> TokenStream {
    quote! { #path::registry::TypeTraitFromReflect }
}

#[cfg(feature = "auto_register")]
pub(crate) fn auto_register_(path: &syn::Path) -> TokenStream {
    quote! { #path::__macro_exports::auto_register }
}
