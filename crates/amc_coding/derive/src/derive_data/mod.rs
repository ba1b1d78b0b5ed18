//! Parsed form of a `#[derive(Reflect)]` input.

// -----------------------------------------------------------------------------
// Modules

mod attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Member, Type, spanned::Spanned};

use crate::CLASS_KEY;

// -----------------------------------------------------------------------------
// ReflectStruct

/// How the struct is coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReflectKind {
    /// A class with named fields, coded as a dictionary.
    Object,
    /// A record of numbers, coded as a `{a, b}` string.
    Structure,
}

/// A field of the derived struct.
pub(crate) struct ReflectField {
    pub member: Member,
    pub ty: Type,
    /// The dictionary key, `None` for tuple fields.
    pub key: Option<LitStr>,
    pub attrs: FieldAttributes,
}

impl ReflectField {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.attrs.skip.is_none()
    }
}

pub(crate) struct ReflectStruct<'a> {
    ident: &'a Ident,
    attrs: TypeAttributes,
    kind: ReflectKind,
    fields: Vec<ReflectField>,
    amc_coding_path: syn::Path,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new(
                ast.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span(),
                    "`Reflect` can only be derived for structs",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span(),
                    "`Reflect` can only be derived for structs",
                ));
            }
        };

        let kind = if attrs.structure.is_some() {
            ReflectKind::Structure
        } else {
            ReflectKind::Object
        };

        if kind == ReflectKind::Object && matches!(data.fields, Fields::Unnamed(_)) {
            return Err(syn::Error::new(
                data.fields.span(),
                "tuple structs need `#[reflect(structure)]`, objects have named fields",
            ));
        }

        let fields = data
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                let (member, key) = match &field.ident {
                    Some(ident) => {
                        let key = match &attrs.rename {
                            Some(lit) => lit.clone(),
                            None => LitStr::new(&ident.to_string(), ident.span()),
                        };
                        (Member::Named(ident.clone()), Some(key))
                    }
                    None => (Member::Unnamed(index.into()), None),
                };
                Ok(ReflectField {
                    member,
                    ty: field.ty.clone(),
                    key,
                    attrs,
                })
            })
            .collect::<syn::Result<Vec<_>>>()?;

        let this = Self {
            ident: &ast.ident,
            attrs,
            kind,
            fields,
            amc_coding_path: crate::path::amc_coding(),
        };
        this.validate()?;
        Ok(this)
    }

    fn validate(&self) -> syn::Result<()> {
        let mut keys: Vec<String> = Vec::new();
        for field in self.active_fields() {
            let Some(key) = &field.key else { continue };
            let value = key.value();
            if value == CLASS_KEY {
                return Err(syn::Error::new(
                    key.span(),
                    format!("`{CLASS_KEY}` is reserved for the class name, use `#[reflect(rename = \"...\")]`"),
                ));
            }
            if keys.contains(&value) {
                return Err(syn::Error::new(key.span(), format!("duplicate field key `{value}`")));
            }
            keys.push(value);
        }

        if self.kind == ReflectKind::Structure && self.active_fields().next().is_none() {
            return Err(syn::Error::new(
                self.ident.span(),
                "a structure needs at least one field",
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn kind(&self) -> ReflectKind {
        self.kind
    }

    #[inline]
    pub fn amc_coding_path(&self) -> &syn::Path {
        &self.amc_coding_path
    }

    /// Fields that are coded, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &ReflectField> {
        self.fields.iter().filter(|f| f.is_active())
    }

    /// Fields marked `#[reflect(skip)]`.
    pub fn skipped_fields(&self) -> impl Iterator<Item = &ReflectField> {
        self.fields.iter().filter(|f| !f.is_active())
    }

    /// The class name literal, `class_name` or the type name.
    pub fn class_name(&self) -> LitStr {
        match &self.attrs.class_name {
            Some(lit) => lit.clone(),
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }

    /// `Default` values of the skipped fields, as `member: value` pairs.
    pub fn skipped_field_inits(&self) -> TokenStream {
        let default_ = crate::path::default_();
        let inits = self.skipped_fields().map(|field| {
            let member = &field.member;
            let span = field.attrs.skip.unwrap_or_else(Span::call_site);
            quote::quote_spanned! { span => #member: #default_::default(), }
        });
        quote! { #(#inits)* }
    }

    /// `registry.register::<T>()` for every distinct coded field type.
    pub fn register_dependencies_tokens(&self, registry: &Ident) -> TokenStream {
        let mut seen: Vec<String> = Vec::new();
        let mut tokens = TokenStream::new();
        for field in self.active_fields() {
            let ty = &field.ty;
            let repr = ty.to_token_stream().to_string();
            if seen.contains(&repr) {
                continue;
            }
            seen.push(repr);
            tokens.extend(quote! { #registry.register::<#ty>(); });
        }
        tokens
    }
}
