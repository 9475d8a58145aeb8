//! Derive macro for the `GraphQLType` trait.
//!
//! Generates the selection-set builder and the GraphQL-aware decoder from a
//! struct's field definitions. No manual GraphQL strings needed — the struct
//! shape IS the query shape.
//!
//! # Usage
//!
//! ```ignore
//! use octoql::GraphQLType;
//!
//! #[derive(Default, GraphQLType)]
//! struct Viewer {
//!     login: String,
//!     created_at: chrono::DateTime<chrono::Utc>,
//!     #[graphql(selector = "bio")]
//!     biography: String,
//! }
//! ```
//!
//! Selection output: `{login,createdAt,bio}`.
//!
//! # Field attributes
//!
//! - `#[graphql(selector = "...")]` — emit the literal selector in place of
//!   the derived wire name. Covers argumented selectors
//!   (`comments(first:10)`), aliases (`bio`), and inline fragments
//!   (`... on ClosedEvent`). Fragment selectors are additionally flattened
//!   for decoding, so the fragment's fields are matched against the parent
//!   object's keys.
//! - `#[graphql(flatten)]` — splice the field's own fields directly into the
//!   parent selection set and key namespace, with no enclosing wire name.
//!   Used for base fields shared across union variants.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// Derive `GraphQLType` for a struct with named fields.
#[proc_macro_derive(GraphQLType, attributes(graphql))]
pub fn derive_graphql_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct FieldSpec {
    /// Rust-side field identifier.
    ident: syn::Ident,
    ty: syn::Type,
    /// Field name with any `r#` prefix stripped.
    name: String,
    selector: Option<String>,
    flatten: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "GraphQLType can only be derived on structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "GraphQLType can only be derived on structs",
            ));
        }
    };

    let mut specs = Vec::new();
    for field in fields {
        let ident = field
            .ident
            .clone()
            .expect("named field should have an ident");
        let rust_name = ident.to_string();
        let name = rust_name
            .strip_prefix("r#")
            .unwrap_or(&rust_name)
            .to_string();

        let mut selector = None;
        let mut flatten = false;
        for attr in &field.attrs {
            if !attr.path().is_ident("graphql") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("selector") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    selector = Some(lit.value());
                    Ok(())
                } else if meta.path.is_ident("flatten") {
                    flatten = true;
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported graphql attribute; expected `selector = \"...\"` or `flatten`",
                    ))
                }
            })?;
        }
        if flatten && selector.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "`flatten` and `selector` cannot be combined on one field",
            ));
        }

        specs.push(FieldSpec {
            ident,
            ty: field.ty.clone(),
            name,
            selector,
            flatten,
        });
    }

    let selection_parts: Vec<TokenStream2> = specs.iter().map(selection_part).collect();
    let decode_parts: Vec<TokenStream2> = specs.iter().map(decode_part).collect();

    Ok(quote! {
        impl ::octoql::GraphQLType for #name {
            fn build_selection(out: &mut ::std::string::String) {
                out.push('{');
                <#name as ::octoql::GraphQLType>::build_fields(out);
                if out.ends_with(',') {
                    out.pop();
                }
                out.push('}');
            }

            fn build_fields(out: &mut ::std::string::String) {
                let _ = &out;
                #(#selection_parts)*
            }

            fn decode(
                &mut self,
                raw: &::octoql::decode::RawValue,
                path: &mut ::octoql::decode::FieldPath,
            ) -> ::core::result::Result<(), ::octoql::error::DecodeError> {
                ::octoql::decode::each_field(raw, path, &mut |key, value, path| {
                    ::octoql::GraphQLType::decode_field(self, key, value, path)
                })
            }

            fn decode_field(
                &mut self,
                key: &str,
                value: &::octoql::decode::RawValue,
                path: &mut ::octoql::decode::FieldPath,
            ) -> ::core::result::Result<bool, ::octoql::error::DecodeError> {
                let _ = (&key, &value, &*path);
                let mut matched = false;
                #(#decode_parts)*
                ::core::result::Result::Ok(matched)
            }
        }
    })
}

/// One field's contribution to `build_fields`. Every non-flattened field
/// leaves a trailing comma; `build_selection` pops the last one.
fn selection_part(spec: &FieldSpec) -> TokenStream2 {
    let ty = &spec.ty;
    if spec.flatten {
        return quote! {
            <#ty as ::octoql::GraphQLType>::build_fields(out);
        };
    }
    match &spec.selector {
        Some(selector) => {
            quote! {
                out.push_str(#selector);
                <#ty as ::octoql::GraphQLType>::build_selection(out);
                out.push(',');
            }
        }
        None => {
            let name = &spec.name;
            quote! {
                out.push_str(&::octoql::ident::to_wire_name(#name));
                <#ty as ::octoql::GraphQLType>::build_selection(out);
                out.push(',');
            }
        }
    }
}

/// One field's contribution to `decode_field`.
///
/// Every field is offered every key, independent of declaration order: a
/// GraphQL union response holds the flattened union of all requested
/// fragments' fields, and every member that declares a matching child —
/// direct, flattened, or fragment — is populated from it. Direct wire
/// names are unique within a struct, so there is nothing to short-circuit.
fn decode_part(spec: &FieldSpec) -> TokenStream2 {
    let ident = &spec.ident;
    let is_fragment = spec
        .selector
        .as_deref()
        .is_some_and(|s| s.trim_start().starts_with("..."));
    if spec.flatten || is_fragment {
        return quote! {
            if ::octoql::GraphQLType::decode_field(&mut self.#ident, key, value, path)? {
                matched = true;
            }
        };
    }

    let match_key = match &spec.selector {
        Some(selector) => {
            let key = decode_key(selector).to_string();
            quote! { key == #key }
        }
        None => {
            let name = &spec.name;
            quote! { key == ::octoql::ident::to_wire_name(#name) }
        }
    };
    quote! {
        if #match_key {
            path.push_field(key);
            let result = ::octoql::GraphQLType::decode(&mut self.#ident, value, path);
            path.pop();
            result?;
            matched = true;
        }
    }
}

/// The JSON key a selector override matches at decode time: the selector
/// text before any argument list, and before the `:` of an aliased field
/// (`one:addReaction(input:$one)` responds under the key `one`).
fn decode_key(selector: &str) -> &str {
    let head = selector.split('(').next().unwrap_or(selector);
    head.split(':').next().unwrap_or(head).trim()
}
