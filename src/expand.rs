// Copyright (c) 2025 Parametrized Contributors
// SPDX-License-Identifier: MIT

//! Module expansion
//!
//! One deterministic pass over the decorated module: every marked function
//! has its marker stripped and one `#[test]` function installed per
//! parameter entry. Nested inline modules are expanded the same way.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{parse_quote, Item, ItemFn, ItemMod};

use crate::entry::ParamEntry;
use crate::mark::{self, MarkedFn};
use crate::name;

/// Expand a `#[parametrized_test_case]` module and emit it back, template
/// functions retained and generated tests appended.
pub fn expand(mut module: ItemMod) -> syn::Result<TokenStream> {
    expand_module(&mut module)?;
    Ok(module.into_token_stream())
}

fn expand_module(module: &mut ItemMod) -> syn::Result<()> {
    let Some((_, items)) = module.content.as_mut() else {
        return Err(syn::Error::new(
            module.ident.span(),
            "#[parametrized_test_case] requires a module with inline content",
        ));
    };

    let mut generated = Vec::new();
    // Names are per module; two cases computing the same name is an error
    // here rather than a pair of duplicate-item errors from the compiler.
    let mut taken: HashSet<String> = HashSet::new();
    for item in items.iter_mut() {
        if let Item::Mod(nested) = item {
            if nested.content.is_some() {
                expand_module(nested)?;
            }
            continue;
        }
        if !mark::is_parametrized(item) {
            continue;
        }
        let Item::Fn(function) = item else {
            continue;
        };
        generated.append(&mut expand_marked(function, &mut taken)?);
    }
    items.append(&mut generated);
    Ok(())
}

/// Strip the marker from one template function and build its tests.
fn expand_marked(function: &mut ItemFn, taken: &mut HashSet<String>) -> syn::Result<Vec<Item>> {
    let Some(position) = function.attrs.iter().position(mark::is_marker) else {
        return Ok(Vec::new());
    };
    let attr = function.attrs.remove(position);
    let marked = MarkedFn::parse(function.sig.ident.clone(), &attr)?;

    let template = &marked.ident;
    let output = &function.sig.output;
    let mut tests = Vec::with_capacity(marked.parameters.len());
    for (iter, raw) in marked.parameters.iter().enumerate() {
        let entry = ParamEntry::normalize(raw.clone());
        let test_name = name::method_name(&marked, iter, &entry)?;
        if !taken.insert(test_name.to_string()) {
            return Err(syn::Error::new(
                test_name.span(),
                format!(
                    "two parametrized cases compute the test name `{test_name}`; \
                     adjust `fmt` or `key` so every case gets a distinct name"
                ),
            ));
        }

        // The call is emitted as written: panics, `Err` returns, and arity
        // mismatches all surface at the generated call site, untranslated.
        let values = &entry.values;
        let test: ItemFn = parse_quote! {
            #[test]
            fn #test_name() #output {
                #template(#(#values),*)
            }
        };
        tests.push(Item::Fn(test));
    }
    Ok(tests)
}
