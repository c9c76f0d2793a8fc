// Copyright (c) 2025 Parametrized Contributors
// SPDX-License-Identifier: MIT

//! Parameter entry normalization

use syn::Expr;

/// One normalized parameter entry: the positional arguments for one
/// generated test.
#[derive(Debug)]
pub struct ParamEntry {
    pub values: Vec<Expr>,
}

impl ParamEntry {
    /// Normalize one raw `args(...)` element.
    ///
    /// A non-empty parenthesized tuple contributes its elements as separate
    /// positional arguments. Anything else - a bare value, a parenthesized
    /// expression like `(1)`, or the empty tuple `()` - becomes a one-element
    /// entry containing the expression itself, so it can always be passed
    /// positionally.
    pub fn normalize(raw: Expr) -> Self {
        match raw {
            Expr::Tuple(tuple) if !tuple.elems.is_empty() => ParamEntry {
                values: tuple.elems.into_iter().collect(),
            },
            other => ParamEntry {
                values: vec![other],
            },
        }
    }
}
