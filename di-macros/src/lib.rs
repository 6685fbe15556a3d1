//! Compile-time dependency injection derives for jamkit.
//!
//! - `#[derive(Context)]` turns every field of a root struct into something
//!   services can pull out with `FromRef`.
//! - `#[derive(FromContext)]` builds a service by resolving each of its fields
//!   from the root.
//!
//! Generated code refers to `crate::FromRef`, so the consuming crate must
//! expose that trait at its root.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields};

/// Derive `FromRef<Self>` for the type of every named field.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub root: ProjectRoot,
///     pub config: Arc<Config>,
/// }
///
/// // expands to
/// // impl FromRef<Context> for ProjectRoot { .. ctx.root.clone() .. }
/// // impl FromRef<Context> for Arc<Config> { .. ctx.config.clone() .. }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_context(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive `FromRef<Context>` by resolving each field from the context.
///
/// The context type defaults to a `Context` in scope; override it with
/// `#[from_context(Context = "path::To::Root")]`.
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct DocumentStore {
///     root: ProjectRoot,
/// }
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_from_context(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_context(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let root = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let impls = named_fields(input, "Context")?.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote! {
            impl #impl_generics crate::FromRef<#root #ty_generics> for #ty #where_clause {
                fn from_ref(ctx: &#root #ty_generics) -> Self {
                    ::core::clone::Clone::clone(&ctx.#ident)
                }
            }
        }
    });

    Ok(quote! { #(#impls)* })
}

fn expand_from_context(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let target = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let root = context_type(input)?;

    let inits = named_fields(input, "FromContext")?.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote! { #ident: <#ty as crate::FromRef<#root>>::from_ref(ctx) }
    });

    Ok(quote! {
        impl #impl_generics crate::FromRef<#root> for #target #ty_generics #where_clause {
            fn from_ref(ctx: &#root) -> Self {
                Self { #(#inits),* }
            }
        }
    })
}

fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("#[derive({derive})] needs a struct with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("#[derive({derive})] only supports structs"),
        )),
    }
}

fn context_type(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let mut root: Option<syn::Type> = None;

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("from_context")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("Context") {
                let lit: syn::LitStr = meta.value()?.parse()?;
                root = Some(lit.parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `Context = \"Type\"`"))
            }
        })?;
    }

    Ok(match root {
        Some(ty) => quote! { #ty },
        None => quote! { Context },
    })
}
