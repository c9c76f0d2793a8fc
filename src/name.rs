// Copyright (c) 2025 Parametrized Contributors
// SPDX-License-Identifier: MIT

//! Test name computation
//!
//! Fills the marker's name template with `{method_name}`, `{iter}`, and any
//! `key(...)` placeholders, prepends the fixed `test_` prefix, and checks the
//! result is a legal identifier.

use proc_macro2::Ident;
use quote::ToTokens;
use syn::{Expr, LitStr};

use crate::entry::ParamEntry;
use crate::mark::MarkedFn;

/// Fixed prefix the discovery convention keys on.
pub const TEST_PREFIX: &str = "test_";

/// Compute the name of the test generated for `entry` at position `iter`.
pub fn method_name(marked: &MarkedFn, iter: usize, entry: &ParamEntry) -> syn::Result<Ident> {
    let mut placeholders = vec![
        ("method_name".to_string(), marked.ident.to_string()),
        ("iter".to_string(), iter.to_string()),
    ];
    for key in &marked.name_keys {
        let name = key.name.to_string();
        if placeholders.iter().any(|(existing, _)| *existing == name) {
            return Err(syn::Error::new(
                key.name.span(),
                format!("naming key `{name}` redefines an existing placeholder"),
            ));
        }
        let Some(value) = entry.values.get(key.index) else {
            return Err(syn::Error::new(
                key.name.span(),
                format!(
                    "naming key `{name}` refers to element {}, but the entry has {} element(s)",
                    key.index,
                    entry.values.len()
                ),
            ));
        };
        placeholders.push((name, render_value(value)));
    }

    let body = fill_template(&marked.name_fmt, &placeholders)?;
    let full = format!("{TEST_PREFIX}{body}");
    if syn::parse_str::<Ident>(&full).is_err() {
        return Err(syn::Error::new(
            marked.name_fmt.span(),
            format!("computed test name `{full}` is not a valid identifier"),
        ));
    }
    Ok(Ident::new(&full, marked.ident.span()))
}

/// Fill a `{placeholder}` template. `{{` and `}}` escape literal braces;
/// anything else between braces must be a known placeholder name.
fn fill_template(fmt: &LitStr, placeholders: &[(String, String)]) -> syn::Result<String> {
    let template = fmt.value();
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) if c.is_alphanumeric() || c == '_' => name.push(c),
                        Some(c) => {
                            return Err(syn::Error::new(
                                fmt.span(),
                                format!("unexpected `{c}` inside a name template placeholder"),
                            ))
                        }
                        None => {
                            return Err(syn::Error::new(
                                fmt.span(),
                                "unclosed `{` in name template",
                            ))
                        }
                    }
                }
                if name.is_empty() {
                    return Err(syn::Error::new(fmt.span(), "empty name template placeholder"));
                }
                match placeholders.iter().find(|(known, _)| *known == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        return Err(syn::Error::new(
                            fmt.span(),
                            format!("unresolved name template placeholder `{{{name}}}`"),
                        ))
                    }
                }
            }
            '}' => {
                return Err(syn::Error::new(fmt.span(), "unmatched `}` in name template"));
            }
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Render an entry element into an identifier fragment: alphanumeric runs
/// survive, everything else collapses to single underscores.
fn render_value(value: &Expr) -> String {
    let text = value.to_token_stream().to_string();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
