// Copyright (C) 2019-2021 Daniel Mueller <deso@posteo.net>
// SPDX-License-Identifier: (Apache-2.0 OR MIT)

#![deny(rustdoc::broken_intra_doc_links, missing_docs)]

//! A crate providing a replacement #[[macro@test]] attribute that
//! initializes tracing before running tests.

use darling::ast::NestedMeta;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, ItemFn, Meta, ReturnType};

/// A procedural macro for the `test` attribute.
///
/// The attribute defines a test that has a `tracing` subscriber installed,
/// filtered by `RUST_LOG`, and runs the test body inside a `test` span that
/// records the test's name.
///
/// # Example
///
/// Convert all tests of a module by overriding the `#[test]` attribute:
/// ```ignore
/// use containerofunique_test_log::test;
///
/// #[test]
/// fn it_still_works() {
///   // ...
/// }
/// ```
///
/// Another test attribute can be wrapped, e.g. `#[test(tokio::test)]` for
/// async tests.
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let inner_test = match inner_test_attribute(attr.into()) {
        Ok(v) => v,
        Err(e) => return e.write_errors().into(),
    };
    let input = parse_macro_input!(item as ItemFn);

    if !input.sig.inputs.is_empty() {
        return syn::Error::new_spanned(&input.sig.inputs, "test functions take no arguments")
            .to_compile_error()
            .into();
    }

    expand_wrapper(&inner_test, &input)
}

/// Parses the attribute arguments into the test attribute to wrap, which
/// defaults to the built-in `#[test]`.
fn inner_test_attribute(attr: TokenStream2) -> darling::Result<NestedMeta> {
    let args = NestedMeta::parse_meta_list(attr).map_err(darling::Error::from)?;

    match args.as_slice() {
        [] => Ok(NestedMeta::Meta(Meta::Path(
            parse_quote! { ::core::prelude::v1::test },
        ))),
        [m] => Ok(m.clone()),
        _ => Err(darling::Error::too_many_items(1)),
    }
}

/// Emit code for a wrapper function around a test function.
fn expand_wrapper(inner_test: &NestedMeta, wrappee: &ItemFn) -> TokenStream {
    let attrs = &wrappee.attrs;
    let body = &wrappee.block;
    let test_name = &wrappee.sig.ident;

    // Note that Rust does not allow us to have a test function with
    // #[should_panic] that has a non-unit return value.
    let ret = match &wrappee.sig.output {
        ReturnType::Default => quote! {},
        ReturnType::Type(_, type_) => quote! {-> #type_},
    };

    // Sync bodies enter the span directly. Async bodies are instrumented
    // instead, since an entered span must not be held across an await point.
    let run = if wrappee.sig.asyncness.is_some() {
        quote! {
          {
            use ::containerofunique_test_log::Instrument as _;
            test_impl().instrument(span).await
          }
        }
    } else {
        quote! {
          {
            let _entered = span.entered();
            test_impl()
          }
        }
    };
    let async_ = &wrappee.sig.asyncness;

    let result = quote! {
      #[#inner_test]
      #(#attrs)*
      #async_ fn #test_name() #ret {
        #async_ fn test_impl() #ret {
          #body
        }

        ::containerofunique_test_log::initialize();
        let span = ::containerofunique_test_log::test_span(::core::stringify!(#test_name));

        #run
      }
    };
    result.into()
}
