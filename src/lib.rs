// Copyright (c) 2025 Parametrized Contributors
// SPDX-License-Identifier: MIT

//! Parametrized - attribute macros for parametrized test case definitions
//!
//! A template test function is marked with [`macro@parametrized`] and the
//! enclosing module is wrapped in [`macro@parametrized_test_case`]. For each
//! parameter entry attached to the template, expansion installs one concrete
//! `#[test]` function into the module, named so that the test harness
//! discovers and reports every case separately.
//!
//! ```
//! use parametrized::parametrized_test_case;
//!
//! #[parametrized_test_case]
//! mod squares {
//!     #[parametrized(args((1, 1), (2, 4), (3, 9)))]
//!     fn square_of(base: u32, expected: u32) {
//!         assert_eq!(base * base, expected);
//!     }
//! }
//! ```
//!
//! The module above ends up with three additional tests, `test_square_of_0`,
//! `test_square_of_1`, and `test_square_of_2`, each calling `square_of` with
//! one tuple's values. The template itself stays a plain function; since its
//! name does not start with `test_`, the harness never runs it directly.

use proc_macro::TokenStream;
use syn::{parse_macro_input, ItemMod};

mod entry;
mod expand;
mod mark;
mod name;

/// Mark a test method as parametrized.
///
/// The attribute carries the parameter data and naming rules that
/// [`macro@parametrized_test_case`] consumes when it expands the enclosing
/// module. Applied on its own it leaves the function exactly as written, so a
/// marked function can still be called like any other function.
///
/// # Arguments
///
/// * `args(...)` (required) - ordered list of parameter entries. A
///   parenthesized tuple entry such as `(2, 4)` passes its elements as
///   separate positional arguments; any other entry (including the empty
///   tuple `()`) is passed as a single argument.
/// * `fmt = "..."` (optional) - name template for the generated tests. The
///   placeholders `{method_name}` (the template function's name) and `{iter}`
///   (the 0-based entry index) are always available. The default is
///   `"{method_name}_{iter}"`. The `test_` prefix is always prepended, so the
///   template method should not start with `test_` (this prevents test
///   runners from picking up the template as a real test).
/// * `key(name = index, ...)` (optional) - extra placeholders for `fmt`. Each
///   key renders the entry element at `index` into an identifier fragment.
///   With entries like `("ruby", 4)`, `fmt = "{method_name}_{word}"` and
///   `key(word = 0)` generate `test_length_of_ruby` style names.
///
/// Malformed arguments are not rejected here; they surface as compile errors
/// when the enclosing module is expanded.
///
/// ```
/// use parametrized::parametrized_test_case;
///
/// #[parametrized_test_case]
/// mod lengths {
///     #[parametrized(
///         args(("ruby", 4), ("amber", 5)),
///         fmt = "{method_name}_{word}",
///         key(word = 0),
///     )]
///     fn length_of(word: &str, expected: usize) {
///         assert_eq!(word.len(), expected);
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn parametrized(args: TokenStream, function: TokenStream) -> TokenStream {
    // Marking alone never alters the function; the metadata is read by the
    // module expander, which consumes this attribute before it is resolved.
    let _ = args;
    function
}

/// Expand a module containing parametrized test methods.
///
/// The attribute scans the module (and nested inline modules) for functions
/// marked with [`macro@parametrized`]. For each marked function it strips the
/// marker and installs one `#[test]` function per parameter entry, named per
/// the marker's naming rules and calling the template with that entry's
/// values as positional arguments. Entry index equals the entry's position in
/// the declared `args(...)` list.
///
/// The generated function mirrors the template's return type, so templates
/// returning `Result` keep working under the harness. Panics and `Err`
/// returns propagate unmodified; nothing is caught or translated. An
/// argument-count mismatch between an entry and the template's signature is
/// likewise left to the compiler, which reports it at the generated call.
///
/// Expansion fails with a compile error when the marker arguments are
/// malformed, when the name template references an unresolved placeholder,
/// when a `key` redefines `method_name` or `iter`, or when two entries
/// compute the same test name.
#[proc_macro_attribute]
pub fn parametrized_test_case(args: TokenStream, module: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(args);
    if !args.is_empty() {
        return syn::Error::new_spanned(&args, "#[parametrized_test_case] takes no arguments")
            .to_compile_error()
            .into();
    }

    let module = parse_macro_input!(module as ItemMod);
    match expand::expand(module) {
        Ok(expanded) => expanded.into(),
        Err(error) => error.to_compile_error().into(),
    }
}
