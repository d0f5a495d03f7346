// Copyright (C) 2019-2021 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

#![deny(rustdoc::broken_intra_doc_links, missing_docs)]

//! A replacement #[[macro@test]] attribute that installs the KList
//! tracing subscriber before the test body runs.

use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, ItemFn, Meta, ReturnType};

/// A procedural macro for the `test` attribute.
///
/// Importing it shadows the built-in attribute for the whole module:
/// ```ignore
/// use klist_test_log::test;
///
/// #[test]
/// fn list_starts_empty() {
///   // ...
/// }
/// ```
///
/// A different test harness attribute can be wrapped by passing it as the
/// single argument, e.g. `#[test(tokio::test)]`.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = match NestedMeta::parse_meta_list(attr.into()) {
        Ok(args) => args,
        Err(error) => return error.to_compile_error().into(),
    };
    let wrappee = parse_macro_input!(item as ItemFn);

    let harness = match args.as_slice() {
        [] => NestedMeta::Meta(Meta::Path(parse_quote! { ::core::prelude::v1::test })),
        [harness] => harness.clone(),
        _ => {
            return syn::Error::new_spanned(&wrappee.sig.ident, "expected at most one harness attribute")
                .to_compile_error()
                .into()
        }
    };

    expand_wrapper(&harness, &wrappee)
}

/// Emits a test function that initializes logging and then calls the
/// original body as an inner function.
fn expand_wrapper(harness: &NestedMeta, wrappee: &ItemFn) -> TokenStream {
    let attrs = &wrappee.attrs;
    let asyncness = &wrappee.sig.asyncness;
    let await_suffix = match asyncness {
        Some(_) => quote! {.await},
        None => quote! {},
    };
    let body = &wrappee.block;
    let name = &wrappee.sig.ident;

    // `#[should_panic]` tests must keep a unit return type.
    let output = match &wrappee.sig.output {
        ReturnType::Default => quote! {},
        ReturnType::Type(_, ty) => quote! {-> #ty},
    };

    quote! {
      #[#harness]
      #(#attrs)*
      #asyncness fn #name() #output {
        #asyncness fn test_body() #output {
          #body
        }

        ::klist_test_log::initialize();

        test_body()#await_suffix
      }
    }
    .into()
}
