use proc_macro2::Span;
use syn::{Attribute, LitStr, meta::ParseNestedMeta, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `class_name = "..."`, the name used in dictionaries and the registry.
    pub class_name: Option<LitStr>,
    /// `default`, the type implements `Default`.
    pub default: Option<Span>,
    /// `structure`, code the type as a `{a, b}` string instead of an object.
    pub structure: Option<Span>,
    /// `auto_register`, submit the type for `ClassRegistry::auto_register`.
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.span();
        if meta.path.is_ident("class_name") {
            let lit: LitStr = meta.value()?.parse()?;
            if lit.value().is_empty() {
                return Err(syn::Error::new(lit.span(), "class name cannot be empty"));
            }
            set_once(&mut self.class_name, lit, span, "class_name")
        } else if meta.path.is_ident("default") {
            set_once(&mut self.default, span, span, "default")
        } else if meta.path.is_ident("structure") {
            set_once(&mut self.structure, span, span, "structure")
        } else if meta.path.is_ident("auto_register") {
            set_once(&mut self.auto_register, span, span, "auto_register")
        } else {
            Err(meta.error(
                "unsupported type attribute, expected `class_name`, `default`, `structure` or `auto_register`",
            ))
        }
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `skip`, the field is not coded and is rebuilt from `Default`.
    pub skip: Option<Span>,
    /// `rename = "..."`, the dictionary key of the field.
    pub rename: Option<LitStr>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident(REFLECT_ATTRIBUTE_NAME)) {
            attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
        }
        if let (Some(span), Some(_)) = (this.skip, &this.rename) {
            return Err(syn::Error::new(span, "`skip` and `rename` cannot be used together"));
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let span = meta.path.span();
        if meta.path.is_ident("skip") {
            set_once(&mut self.skip, span, span, "skip")
        } else if meta.path.is_ident("rename") {
            let lit: LitStr = meta.value()?.parse()?;
            set_once(&mut self.rename, lit, span, "rename")
        } else {
            Err(meta.error("unsupported field attribute, expected `skip` or `rename`"))
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T, span: Span, name: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(span, format!("duplicate `{name}` attribute")));
    }
    *slot = Some(value);
    Ok(())
}
