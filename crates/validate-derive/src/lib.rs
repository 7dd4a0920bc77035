//! Derive macro for `metrics_client_shared::Validate`.
//!
//! Each annotated field names a check function:
//!
//! ```ignore
//! #[derive(Validate)]
//! #[validate(error = "crate::InvalidArgument")]
//! struct ReporterOptions {
//!     #[validate(field = "defaultDimensions", custom = "crate::checks::check_optional_dimensions")]
//!     default_dimensions: Option<serde_json::Value>,
//! }
//! ```
//!
//! Checks run in field declaration order and the generated `validate` returns
//! on the first error. A check is called as `path(field_name, value)` where
//! `value` is `&T` for plain fields and `Option<&T>` for `Option<T>` fields.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Fields, GenericArgument, Ident, LitStr, Path, PathArguments,
    Type,
};

/// Derive `metrics_client_shared::Validate` with field-level checks.
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_validate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_validate(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let error_ty = parse_error_type(&input.attrs)?;
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Validate can only be derived for structs",
        ));
    };

    let Fields::Named(fields) = &struct_data.fields else {
        return Err(syn::Error::new_spanned(
            &struct_data.fields,
            "Validate requires named fields",
        ));
    };

    let mut checks = Vec::new();
    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let Some(field_check) = parse_field_check(&field.attrs, ident)? else {
            continue;
        };
        checks.push(expand_check(ident, &field_check, is_option(&field.ty)));
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::metrics_client_shared::Validate for #name #ty_generics #where_clause {
            type Error = #error_ty;

            fn validate(&self) -> ::core::result::Result<(), Self::Error> {
                #(#checks)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

fn parse_error_type(attrs: &[Attribute]) -> Result<Path, syn::Error> {
    let mut error_ty: Option<Path> = None;
    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("error") {
                let value: LitStr = meta.value()?.parse()?;
                if error_ty.is_some() {
                    return Err(meta.error("duplicate validate(error = ...)"));
                }
                error_ty = Some(value.parse()?);
                return Ok(());
            }
            Err(meta.error("unsupported validate attribute on container"))
        })?;
    }

    error_ty.ok_or_else(|| {
        syn::Error::new(
            proc_macro2::Span::call_site(),
            "missing #[validate(error = \"path\")] on struct",
        )
    })
}

struct FieldCheck {
    name: String,
    check: Path,
}

fn parse_field_check(attrs: &[Attribute], ident: &Ident) -> Result<Option<FieldCheck>, syn::Error> {
    let mut name: Option<String> = None;
    let mut check: Option<Path> = None;
    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("field") {
                let value: LitStr = meta.value()?.parse()?;
                if name.is_some() {
                    return Err(meta.error("duplicate validate(field = ...)"));
                }
                name = Some(value.value());
                return Ok(());
            }
            if meta.path.is_ident("custom") {
                let value: LitStr = meta.value()?.parse()?;
                if check.is_some() {
                    return Err(meta.error("duplicate validate(custom = ...)"));
                }
                check = Some(value.parse()?);
                return Ok(());
            }
            Err(meta.error("unsupported validate attribute on field"))
        })?;
    }

    match (check, name) {
        (Some(check), name) => Ok(Some(FieldCheck {
            name: name.unwrap_or_else(|| ident.to_string()),
            check,
        })),
        (None, Some(_)) => Err(syn::Error::new_spanned(
            ident,
            "validate(field = ...) requires validate(custom = ...)",
        )),
        (None, None) => Ok(None),
    }
}

fn expand_check(ident: &Ident, field_check: &FieldCheck, is_option: bool) -> proc_macro2::TokenStream {
    let check = &field_check.check;
    let field_name = LitStr::new(&field_check.name, proc_macro2::Span::call_site());
    if is_option {
        quote! {
            #check(#field_name, self.#ident.as_ref())?;
        }
    } else {
        quote! {
            #check(#field_name, &self.#ident)?;
        }
    }
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    let Some(segment) = type_path.path.segments.last() else {
        return false;
    };
    if segment.ident != "Option" {
        return false;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return false;
    };
    args.args
        .iter()
        .any(|arg| matches!(arg, GenericArgument::Type(_)))
}
