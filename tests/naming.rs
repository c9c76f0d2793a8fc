// Copyright (c) 2025 Parametrized Contributors
// SPDX-License-Identifier: MIT

//! Naming rule tests: default template, custom templates, key placeholders.

use parametrized::parametrized_test_case;

#[parametrized_test_case]
mod default_naming {
    #[parametrized(args(4, 16))]
    fn perfect_square(value: u32) {
        let root = (value as f64).sqrt() as u32;
        assert_eq!(root * root, value);
    }

    #[test]
    fn test_default_names_embed_method_name_and_index() {
        test_perfect_square_0();
        test_perfect_square_1();
    }
}

#[parametrized_test_case]
mod custom_fmt {
    #[parametrized(args((2, 4)), fmt = "{iter}_doubling_{method_name}")]
    fn doubles(input: u32, expected: u32) {
        assert_eq!(input * 2, expected);
    }

    #[test]
    fn test_custom_template_controls_the_name() {
        test_0_doubling_doubles();
    }
}

#[parametrized_test_case]
mod keyed_names {
    #[parametrized(
        args(("ruby", 4), ("amber", 5), ("emerald", 7)),
        fmt = "{method_name}_{word}",
        key(word = 0),
    )]
    fn length_of(word: &str, expected: usize) {
        assert_eq!(word.len(), expected);
    }

    #[test]
    fn test_key_placeholders_render_entry_elements() {
        test_length_of_ruby();
        test_length_of_amber();
        test_length_of_emerald();
    }
}
