use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::derive_data::ReflectStruct;

/// Generate `Object` and `FromReflect` for a struct with named fields.
pub(crate) fn impl_object(info: &ReflectStruct) -> TokenStream {
    let amc_coding_path = info.amc_coding_path();
    let reflect_ = crate::path::reflect_(amc_coding_path);
    let reflect_ref_ = crate::path::reflect_ref_(amc_coding_path);
    let from_reflect_ = crate::path::from_reflect_(amc_coding_path);
    let field_value_ = crate::path::field_value_(amc_coding_path);
    let typed_ = crate::path::typed_(amc_coding_path);
    let object_ = crate::path::object_(amc_coding_path);
    let class_info_ = crate::path::class_info_(amc_coding_path);
    let field_descriptor_ = crate::path::field_descriptor_(amc_coding_path);
    let option_ = crate::path::option_();
    let result_ = crate::path::result_();
    let box_ = crate::path::box_(amc_coding_path);

    let ident = info.ident();
    let class_name = info.class_name();

    let object_var = Ident::new("__object", Span::call_site());

    let mut descriptors = Vec::new();
    let mut field_arms = Vec::new();
    let mut set_field_arms = Vec::new();
    let mut field_inits = Vec::new();

    for field in info.active_fields() {
        let (member, ty) = (&field.member, &field.ty);
        let Some(key) = &field.key else { continue };

        descriptors.push(quote! { #field_descriptor_::new::<#ty>(#key) });
        field_arms.push(quote! {
            #key => #field_value_::field_ref(&self.#member),
        });
        set_field_arms.push(quote! {
            #key => #field_value_::assign(&mut self.#member, value),
        });
        field_inits.push(quote! {
            #member: <#ty as #field_value_>::from_field(#object_::field(#object_var, #key))?,
        });
    }

    let skipped_inits = info.skipped_field_inits();

    quote! {
        impl #object_ for #ident {
            fn class_info(&self) -> &'static #class_info_ {
                static INFO: #class_info_ = #class_info_::new(#class_name, &[#(#descriptors),*]);
                &INFO
            }

            fn field(&self, name: &str) -> #option_<&dyn #reflect_> {
                match name {
                    #(#field_arms)*
                    _ => #option_::None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: #box_<dyn #reflect_>,
            ) -> #result_<(), #box_<dyn #reflect_>> {
                match name {
                    #(#set_field_arms)*
                    _ => #result_::Err(value),
                }
            }
        }

        impl #from_reflect_ for #ident {
            fn from_reflect(reflect: &dyn #reflect_) -> #option_<Self> {
                let #reflect_ref_::Object(#object_var) = #reflect_::reflect_ref(reflect) else {
                    return #option_::None;
                };
                if #reflect_::class_name(#object_var) != <Self as #typed_>::CLASS_NAME {
                    return #option_::None;
                }
                #option_::Some(Self {
                    #(#field_inits)*
                    #skipped_inits
                })
            }
        }
    }
}
