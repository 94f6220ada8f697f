//! Derive macros for the Tasklist reducer architecture
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `tasklist_core::action::Action` for action enums
//!
//! # Example
//!
//! ```ignore
//! use tasklist_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     Add { text: String },
//!     #[action(name = "toggle")]
//!     ToggleCompleted { id: u64 },
//! }
//!
//! assert_eq!(TodoAction::Add { text: "x".into() }.name(), "Add");
//! assert_eq!(TodoAction::ToggleCompleted { id: 0 }.name(), "toggle");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields, LitStr};

/// Derive macro for Action enums
///
/// Implements `tasklist_core::action::Action`, whose `name()` returns the
/// variant identifier. The runtime uses it as the `action` field of its
/// tracing spans and as a metrics label.
///
/// # Attributes
///
/// - `#[action(name = "...")]` - Override the name reported for a variant
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - An `#[action(...)]` attribute is malformed
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

    let mut name_arms = Vec::with_capacity(data_enum.variants.len());

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;
        let reported = match renamed(&variant.attrs) {
            Ok(Some(custom)) => custom,
            Ok(None) => variant_name.to_string(),
            Err(error) => return error.to_compile_error().into(),
        };

        let arm = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } => #reported, },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) => #reported, },
            Fields::Unit => quote! { Self::#variant_name => #reported, },
        };
        name_arms.push(arm);
    }

    // An empty enum has no values, so `name` can never be called.
    let body = if name_arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#name_arms)*
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics ::tasklist_core::action::Action for #name #ty_generics #where_clause {
            fn name(&self) -> &'static str {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Reads `#[action(name = "...")]` from a variant's attributes
fn renamed(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut custom = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("action")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                custom = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported action attribute, expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(custom)
}
