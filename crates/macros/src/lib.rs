// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Spacetime project*
//!
//! This crate contains the Spacetime procedural macros
//!

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{LitInt, parse_macro_input};

// Mirrors `MIN_SIGNIFICANCE`/`MAX_SIGNIFICANCE` in `spacetime-core` (a proc
// macro crate can't depend on it)
const MIN_SIGNIFICANCE: i64 = 1;
const MAX_SIGNIFICANCE: i64 = 5;

/// Generate the type with compile time bounds checking
fn generate_const_checked_integer_macro(
    input: TokenStream,
    type_name: &str,
    min: i64,
    max: i64,
) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);

    let value = match lit.base10_parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            return syn::Error::new_spanned(lit, "Expected a valid i64 integer literal")
                .to_compile_error()
                .into();
        }
    };

    if value < min || value > max {
        return syn::Error::new_spanned(
            lit,
            format!("{type_name} must be between {min} and {max}"),
        )
        .to_compile_error()
        .into();
    }

    let ident = syn::Ident::new(type_name, proc_macro2::Span::call_site());
    quote! {
        #ident::try_from(#value).unwrap()
    }
    .into()
}

/// Create a `Significance`, using `significance!(x)`, with compile time
/// checking of the value.  `Significance` must be in scope.
#[proc_macro]
pub fn significance(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(
        input,
        "Significance",
        MIN_SIGNIFICANCE,
        MAX_SIGNIFICANCE,
    )
}
