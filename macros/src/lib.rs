//! Derive macros for statekit
//!
//! This crate provides procedural macros to reduce boilerplate when defining
//! actions for a statekit store.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `statekit_core::Action` for action enums
//!
//! # Example
//!
//! ```ignore
//! use statekit_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo(String),
//!     ToggleTodo(u64),
//!     #[action(rename = "CLEAR_DONE")]
//!     DeleteCompleted,
//! }
//!
//! // Generated:
//! assert_eq!(TodoAction::AddTodo("milk".into()).action_type(), "ADD_TODO");
//! assert_eq!(TodoAction::DeleteCompleted.action_type(), "CLEAR_DONE");
//! assert_eq!(TodoAction::ACTION_TYPES, &["ADD_TODO", "TOGGLE_TODO", "CLEAR_DONE"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro for Action enums
///
/// Generates:
/// - `impl statekit_core::action::Action` whose `action_type()` returns the
///   variant's type tag
/// - `ACTION_TYPES`, an associated constant listing every tag in declaration
///   order
///
/// The tag of a variant is its name in `SCREAMING_SNAKE_CASE`
/// (`ToggleTodo` becomes `TOGGLE_TODO`) unless overridden.
///
/// # Attributes
///
/// - `#[action(rename = "TAG")]` - Use `TAG` as the variant's type tag
/// - `#[action(unrecognized)]` - On a one-field tuple variant holding the
///   tag of an action nobody handles; `tag()` returns that field instead of
///   the variant's type tag
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
/// - Two variants end up with the same type tag
/// - `#[action(unrecognized)]` is on more than one variant, or on a variant
///   that is not a one-field tuple
#[proc_macro_derive(Action, attributes(action))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(&input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut tags: Vec<String> = Vec::with_capacity(data_enum.variants.len());
    let mut arms: Vec<TokenStream2> = Vec::with_capacity(data_enum.variants.len());
    let mut unrecognized: Option<TokenStream2> = None;

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let options = match variant_options(&variant.attrs) {
            Ok(options) => options,
            Err(error) => return error.to_compile_error().into(),
        };
        let tag = options
            .rename
            .unwrap_or_else(|| screaming_snake_case(&variant_name.to_string()));

        if options.unrecognized {
            let is_single_field = matches!(&variant.fields, Fields::Unnamed(fields) if fields.unnamed.len() == 1);
            if !is_single_field {
                return syn::Error::new_spanned(
                    variant,
                    "#[action(unrecognized)] requires a tuple variant with exactly one field",
                )
                .to_compile_error()
                .into();
            }
            if unrecognized.is_some() {
                return syn::Error::new_spanned(
                    variant,
                    "#[action(unrecognized)] can only be used on one variant",
                )
                .to_compile_error()
                .into();
            }
            unrecognized = Some(quote! {
                #[allow(unreachable_patterns)]
                fn tag(&self) -> &str {
                    match self {
                        Self::#variant_name(tag) => ::core::convert::AsRef::<str>::as_ref(tag),
                        _ => <Self as ::statekit_core::action::Action>::action_type(self),
                    }
                }
            });
        }

        if tags.contains(&tag) {
            return syn::Error::new_spanned(
                variant,
                format!("duplicate action type \"{tag}\""),
            )
            .to_compile_error()
            .into();
        }

        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Unit => quote! { Self::#variant_name },
        };
        arms.push(quote! { #pattern => #tag, });
        tags.push(tag);
    }

    // An uninhabited enum has no arms; match on the place so it stays exhaustive
    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::statekit_core::action::Action for #name #ty_generics #where_clause {
            fn action_type(&self) -> &'static str {
                #body
            }

            #unrecognized
        }

        impl #impl_generics #name #ty_generics #where_clause {
            /// Every action type tag of this enum, in declaration order
            pub const ACTION_TYPES: &'static [&'static str] = &[#(#tags),*];
        }
    };

    TokenStream::from(expanded)
}

/// Options read from a variant's `#[action(...)]` attributes
#[derive(Default)]
struct VariantOptions {
    rename: Option<String>,
    unrecognized: bool,
}

/// Reads `#[action(rename = "...")]` and `#[action(unrecognized)]`
fn variant_options(attrs: &[Attribute]) -> syn::Result<VariantOptions> {
    let mut options = VariantOptions::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("action type cannot be empty"));
                }
                options.rename = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("unrecognized") {
                options.unrecognized = true;
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `rename` or `unrecognized`"))
            }
        })?;
    }

    Ok(options)
}

/// `AddTodo` -> `ADD_TODO`, `HTTPRequest` -> `HTTP_REQUEST`
fn screaming_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut out = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev != '_' && (prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)) {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::screaming_snake_case;

    #[test]
    fn converts_camel_case_variants() {
        assert_eq!(screaming_snake_case("AddTodo"), "ADD_TODO");
        assert_eq!(screaming_snake_case("DeleteCompleted"), "DELETE_COMPLETED");
        assert_eq!(screaming_snake_case("Reset"), "RESET");
    }

    #[test]
    fn keeps_acronyms_together() {
        assert_eq!(screaming_snake_case("HTTPRequest"), "HTTP_REQUEST");
        assert_eq!(screaming_snake_case("LoadV2Items"), "LOAD_V2_ITEMS");
    }

    #[test]
    fn respects_existing_underscores() {
        assert_eq!(screaming_snake_case("Show_All"), "SHOW_ALL");
    }
}
