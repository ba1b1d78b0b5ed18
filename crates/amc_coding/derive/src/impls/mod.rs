// -----------------------------------------------------------------------------
// Modules

mod common;
mod object;
mod structure;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectKind, ReflectStruct};

/// Every impl generated for a derived struct.
pub(crate) fn impl_reflect(info: &ReflectStruct) -> TokenStream {
    let shape = match info.kind() {
        ReflectKind::Object => object::impl_object(info),
        ReflectKind::Structure => structure::impl_structure(info),
    };
    let typed = common::impl_trait_typed(info);
    let reflect = common::impl_trait_reflect(info);
    let get_class_meta = common::impl_trait_get_class_meta(info);
    let auto_register = common::impl_auto_register(info);

    quote! {
        #typed
        #reflect
        #shape
        #get_class_meta
        #auto_register
    }
}
