// Copyright (c) 2025 Parametrized Contributors
// SPDX-License-Identifier: MIT

//! Marker attribute metadata
//!
//! A function marked with `#[parametrized(...)]` carries its parameter
//! entries and naming rules in the attribute's argument list. This module
//! owns the membership test and the parsed form of that metadata.

use proc_macro2::Ident;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{parenthesized, Attribute, Expr, Item, LitInt, LitStr, Meta, Token};

/// Path segment that identifies the marker attribute.
pub const MARKER: &str = "parametrized";

/// Default name template for generated tests.
pub const DEFAULT_NAME_FMT: &str = "{method_name}_{iter}";

/// True iff the item is a function carrying the marker attribute.
///
/// Every other item kind, and any function without the marker, is not
/// parametrized. Never fails, whatever the item's shape.
pub fn is_parametrized(item: &Item) -> bool {
    match item {
        Item::Fn(function) => function.attrs.iter().any(is_marker),
        _ => false,
    }
}

/// True iff the attribute's path ends in [`MARKER`], so both
/// `#[parametrized(...)]` and `#[parametrized::parametrized(...)]` match.
pub fn is_marker(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == MARKER)
}

/// One extra naming placeholder: `name` renders the entry element at `index`.
#[derive(Debug)]
pub struct NameKey {
    pub name: Ident,
    pub index: usize,
}

impl Parse for NameKey {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let index: LitInt = input.parse()?;
        Ok(NameKey {
            name,
            index: index.base10_parse()?,
        })
    }
}

/// A template function paired with the metadata its marker attribute carried.
///
/// Read-only once parsed; expansion iterates `parameters` and computes one
/// test name per entry from `name_fmt` and `name_keys`.
#[derive(Debug)]
pub struct MarkedFn {
    /// Identifier of the template function.
    pub ident: Ident,
    /// Raw parameter entries, in declaration order.
    pub parameters: Vec<Expr>,
    /// Name template filled per entry; defaults to [`DEFAULT_NAME_FMT`].
    pub name_fmt: LitStr,
    /// Extra naming placeholders; defaults to none.
    pub name_keys: Vec<NameKey>,
}

impl MarkedFn {
    /// Parse the marker attribute's argument list.
    ///
    /// This is where malformed decoration fails: the marker attribute itself
    /// accepts anything and defers validation to expansion.
    pub fn parse(ident: Ident, attr: &Attribute) -> syn::Result<Self> {
        if !matches!(attr.meta, Meta::List(_)) {
            return Err(syn::Error::new(
                attr.span(),
                "expected `#[parametrized(args(...))]`; the `args(...)` list is required",
            ));
        }

        let clauses = attr.parse_args_with(Punctuated::<MarkArg, Token![,]>::parse_terminated)?;
        let mut parameters = None;
        let mut name_fmt = None;
        let mut name_keys = None;
        for clause in clauses {
            match clause {
                MarkArg::Args(keyword, entries) => set_once(&mut parameters, keyword, entries)?,
                MarkArg::Fmt(keyword, fmt) => set_once(&mut name_fmt, keyword, fmt)?,
                MarkArg::Keys(keyword, keys) => set_once(&mut name_keys, keyword, keys)?,
            }
        }

        let Some(parameters) = parameters else {
            return Err(syn::Error::new(attr.span(), "the `args(...)` list is required"));
        };
        Ok(MarkedFn {
            ident,
            parameters,
            name_fmt: name_fmt.unwrap_or_else(|| LitStr::new(DEFAULT_NAME_FMT, attr.span())),
            name_keys: name_keys.unwrap_or_default(),
        })
    }
}

fn set_once<T>(slot: &mut Option<T>, keyword: Ident, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            keyword.span(),
            format!("duplicate `{keyword}` clause"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

/// One clause of the marker's argument list, with its keyword for spans.
enum MarkArg {
    Args(Ident, Vec<Expr>),
    Fmt(Ident, LitStr),
    Keys(Ident, Vec<NameKey>),
}

impl Parse for MarkArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let keyword: Ident = input.parse()?;
        if keyword == "args" {
            let content;
            parenthesized!(content in input);
            let entries = Punctuated::<Expr, Token![,]>::parse_terminated(&content)?;
            Ok(MarkArg::Args(keyword, entries.into_iter().collect()))
        } else if keyword == "fmt" {
            input.parse::<Token![=]>()?;
            Ok(MarkArg::Fmt(keyword, input.parse()?))
        } else if keyword == "key" {
            let content;
            parenthesized!(content in input);
            let keys = Punctuated::<NameKey, Token![,]>::parse_terminated(&content)?;
            Ok(MarkArg::Keys(keyword, keys.into_iter().collect()))
        } else {
            Err(syn::Error::new(
                keyword.span(),
                "expected one of `args`, `fmt`, or `key`",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{parse_quote, ItemFn};

    fn parse_marked(function: ItemFn) -> syn::Result<MarkedFn> {
        let attr = function
            .attrs
            .iter()
            .find(|attr| is_marker(attr))
            .expect("function is not marked")
            .clone();
        MarkedFn::parse(function.sig.ident.clone(), &attr)
    }

    #[test]
    fn test_is_parametrized_marked_fn() {
        let item: Item = parse_quote! {
            #[parametrized(args(1))]
            fn example(value: i32) {}
        };
        assert!(is_parametrized(&item));
    }

    #[test]
    fn test_is_parametrized_marked_fn_with_full_path() {
        let item: Item = parse_quote! {
            #[parametrized::parametrized(args(1))]
            fn example(value: i32) {}
        };
        assert!(is_parametrized(&item));
    }

    #[test]
    fn test_is_parametrized_unmarked_fn() {
        let item: Item = parse_quote! {
            fn example(value: i32) {}
        };
        assert!(!is_parametrized(&item));
    }

    #[test]
    fn test_is_parametrized_other_attribute() {
        let item: Item = parse_quote! {
            #[test]
            fn example() {}
        };
        assert!(!is_parametrized(&item));
    }

    #[test]
    fn test_is_parametrized_non_fn_item() {
        // The marker on a non-function item does not make it parametrized.
        let item: Item = parse_quote! {
            #[parametrized(args(1))]
            struct Example;
        };
        assert!(!is_parametrized(&item));
    }

    #[test]
    fn test_parse_defaults() {
        let marked = parse_marked(parse_quote! {
            #[parametrized(args(1, 2, 3))]
            fn example(value: i32) {}
        })
        .unwrap();
        assert_eq!(marked.ident, "example");
        assert_eq!(marked.parameters.len(), 3);
        assert_eq!(marked.name_fmt.value(), DEFAULT_NAME_FMT);
        assert!(marked.name_keys.is_empty());
    }

    #[test]
    fn test_parse_custom_fmt_and_keys() {
        let marked = parse_marked(parse_quote! {
            #[parametrized(
                args(("ruby", 4), ("amber", 5)),
                fmt = "{method_name}_{word}",
                key(word = 0),
            )]
            fn length_of(word: &str, expected: usize) {}
        })
        .unwrap();
        assert_eq!(marked.parameters.len(), 2);
        assert_eq!(marked.name_fmt.value(), "{method_name}_{word}");
        assert_eq!(marked.name_keys.len(), 1);
        assert_eq!(marked.name_keys[0].name, "word");
        assert_eq!(marked.name_keys[0].index, 0);
    }

    #[test]
    fn test_parse_empty_args_is_allowed() {
        // Zero entries generate zero tests; not a decoration error.
        let marked = parse_marked(parse_quote! {
            #[parametrized(args())]
            fn example(value: i32) {}
        })
        .unwrap();
        assert!(marked.parameters.is_empty());
    }

    #[test]
    fn test_parse_bare_marker_is_missing_args() {
        let error = parse_marked(parse_quote! {
            #[parametrized]
            fn example(value: i32) {}
        })
        .unwrap_err();
        assert!(error.to_string().contains("`args(...)` list is required"));
    }

    #[test]
    fn test_parse_missing_args_clause() {
        let error = parse_marked(parse_quote! {
            #[parametrized(fmt = "{method_name}_{iter}")]
            fn example(value: i32) {}
        })
        .unwrap_err();
        assert!(error.to_string().contains("`args(...)` list is required"));
    }

    #[test]
    fn test_parse_unknown_clause() {
        let error = parse_marked(parse_quote! {
            #[parametrized(args(1), cases(2))]
            fn example(value: i32) {}
        })
        .unwrap_err();
        assert!(error
            .to_string()
            .contains("expected one of `args`, `fmt`, or `key`"));
    }

    #[test]
    fn test_parse_duplicate_clause() {
        let error = parse_marked(parse_quote! {
            #[parametrized(args(1), args(2))]
            fn example(value: i32) {}
        })
        .unwrap_err();
        assert!(error.to_string().contains("duplicate `args` clause"));
    }

    #[test]
    fn test_parse_non_literal_fmt() {
        let error = parse_marked(parse_quote! {
            #[parametrized(args(1), fmt = template())]
            fn example(value: i32) {}
        })
        .unwrap_err();
        // A non-literal fmt is malformed decoration, reported at expansion.
        assert!(!error.to_string().is_empty());
    }
}
