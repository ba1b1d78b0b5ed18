use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::derive_data::ReflectStruct;

/// Generate `Structure`, `StructComponent` and `FromReflect` for a
/// `#[reflect(structure)]` type.
///
/// Components are coded positionally, in declaration order.
pub(crate) fn impl_structure(info: &ReflectStruct) -> TokenStream {
    let amc_coding_path = info.amc_coding_path();
    let reflect_ = crate::path::reflect_(amc_coding_path);
    let from_reflect_ = crate::path::from_reflect_(amc_coding_path);
    let structure_ = crate::path::structure_(amc_coding_path);
    let struct_component_ = crate::path::struct_component_(amc_coding_path);
    let struct_field_ = crate::path::struct_field_(amc_coding_path);
    let dynamic_structure_ = crate::path::dynamic_structure_(amc_coding_path);
    let option_ = crate::path::option_();

    let ident = info.ident();

    let mut to_fields = Vec::new();
    let mut bindings = Vec::new();
    let mut field_inits = Vec::new();

    for (index, field) in info.active_fields().enumerate() {
        let (member, ty) = (&field.member, &field.ty);
        let binding = Ident::new(&format!("__field_{index}"), Span::call_site());

        to_fields.push(quote! { <#ty as #struct_component_>::to_struct_field(&self.#member) });
        field_inits.push(quote! {
            #member: <#ty as #struct_component_>::from_struct_field(#binding)?,
        });
        bindings.push(binding);
    }

    let skipped_inits = info.skipped_field_inits();

    quote! {
        impl #structure_ for #ident {
            fn to_dynamic_structure(&self) -> #dynamic_structure_ {
                #dynamic_structure_::from_fields([#(#to_fields),*])
            }

            fn from_dynamic_structure(structure: &#dynamic_structure_) -> #option_<Self> {
                let [#(#bindings),*] = #dynamic_structure_::fields(structure) else {
                    return #option_::None;
                };
                #option_::Some(Self {
                    #(#field_inits)*
                    #skipped_inits
                })
            }
        }

        impl #struct_component_ for #ident {
            #[inline]
            fn to_struct_field(&self) -> #struct_field_ {
                #struct_field_::Nested(<Self as #structure_>::to_dynamic_structure(self))
            }

            #[inline]
            fn from_struct_field(field: &#struct_field_) -> #option_<Self> {
                <Self as #structure_>::from_dynamic_structure(#struct_field_::as_nested(field)?)
            }
        }

        impl #from_reflect_ for #ident {
            fn from_reflect(reflect: &dyn #reflect_) -> #option_<Self> {
                let structure = <#dynamic_structure_ as #from_reflect_>::from_reflect(reflect)?;
                <Self as #structure_>::from_dynamic_structure(&structure)
            }
        }
    }
}
