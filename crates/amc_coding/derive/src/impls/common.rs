use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::Ident;

use crate::derive_data::{ReflectKind, ReflectStruct};

/// Generate implementation code for `Typed`.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let amc_coding_path = info.amc_coding_path();
    let typed_ = crate::path::typed_(amc_coding_path);
    let field_type_ = crate::path::field_type_(amc_coding_path);

    let ident = info.ident();
    let class_name = info.class_name();
    let field_type = match info.kind() {
        ReflectKind::Object => quote! { #field_type_::CustomObject },
        ReflectKind::Structure => quote! { #field_type_::Structure },
    };

    quote! {
        impl #typed_ for #ident {
            const FIELD_TYPE: #field_type_ = #field_type;
            const CLASS_NAME: &'static str = #class_name;
        }
    }
}

/// Generate implementation code for `Reflect`.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let amc_coding_path = info.amc_coding_path();
    let reflect_ = crate::path::reflect_(amc_coding_path);
    let reflect_ref_ = crate::path::reflect_ref_(amc_coding_path);
    let reflect_mut_ = crate::path::reflect_mut_(amc_coding_path);
    let from_reflect_ = crate::path::from_reflect_(amc_coding_path);
    let typed_ = crate::path::typed_(amc_coding_path);
    let option_ = crate::path::option_();
    let box_ = crate::path::box_(amc_coding_path);

    let ident = info.ident();
    let variant = match info.kind() {
        ReflectKind::Object => Ident::new("Object", Span::call_site()),
        ReflectKind::Structure => Ident::new("Structure", Span::call_site()),
    };

    quote! {
        impl #reflect_ for #ident {
            #[inline]
            fn class_name(&self) -> &'static str {
                <Self as #typed_>::CLASS_NAME
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#variant(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#variant(self)
            }

            fn reflect_clone(&self) -> #option_<#box_<dyn #reflect_>> {
                <Self as #from_reflect_>::from_reflect(self).map(#reflect_::into_boxed_reflect)
            }
        }
    }
}

/// Generate implementation code for `GetClassMeta`.
///
/// `TypeTraitFromReflect` is always inserted, `TypeTraitDefault` only with
/// `#[reflect(default)]`. Field types are registered as dependencies.
pub(crate) fn impl_trait_get_class_meta(info: &ReflectStruct) -> TokenStream {
    let amc_coding_path = info.amc_coding_path();
    let get_class_meta_ = crate::path::get_class_meta_(amc_coding_path);
    let class_meta_ = crate::path::class_meta_(amc_coding_path);
    let class_registry_ = crate::path::class_registry_(amc_coding_path);
    let from_type_ = crate::path::from_type_(amc_coding_path);
    let type_trait_from_reflect_ = crate::path::type_trait_from_reflect_(amc_coding_path);
    let option_ = crate::path::option_();

    let outer_ = Ident::new("__outer", Span::call_site());
    let registry_ = Ident::new("__registry", Span::call_site());

    let insert_default = match info.attrs().default {
        Some(span) => {
            let type_trait_default_ = crate::path::type_trait_default_(amc_coding_path);
            quote_spanned! { span =>
                #class_meta_::insert_trait::<#type_trait_default_>(&mut #outer_, #from_type_::<Self>::from_type());
            }
        }
        None => TokenStream::new(),
    };

    let register_deps = info.register_dependencies_tokens(&registry_);
    let ident = info.ident();

    quote! {
        impl #get_class_meta_ for #ident {
            fn get_class_meta() -> #option_<#class_meta_> {
                let mut #outer_ = #class_meta_::of::<Self>();
                #class_meta_::insert_trait::<#type_trait_from_reflect_>(&mut #outer_, #from_type_::<Self>::from_type());
                #insert_default
                #option_::Some(#outer_)
            }

            fn register_dependencies(#registry_: &mut #class_registry_) {
                #register_deps
            }
        }
    }
}

/// Generate the `inventory` submission for `#[reflect(auto_register)]`.
#[cfg(feature = "auto_register")]
pub(crate) fn impl_auto_register(info: &ReflectStruct) -> TokenStream {
    let Some(span) = info.attrs().auto_register else {
        return TokenStream::new();
    };
    let auto_register_ = crate::path::auto_register_(info.amc_coding_path());
    let ident = info.ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// The attribute is a no-op without the `auto_register` feature.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn impl_auto_register(_: &ReflectStruct) -> TokenStream {
    TokenStream::new()
}
