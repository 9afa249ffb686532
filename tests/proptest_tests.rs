// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the normaliser, the converter and the binding engine
//! against arbitrary inputs.

use hexbind::domain::config_value::{ScalarKind, ScalarValue};
use hexbind::domain::{ConfigKey, ConfigValue};
use hexbind::record;
use hexbind::service::{lines_to_map, Builder};
use proptest::prelude::*;

record! {
    #[derive(Debug, Default)]
    struct Numbers {
        small: i8,
        big: u64,
        list: Vec<i32>,
        words: Vec<String>,
    }
}

// Keys are stored lower-cased, whatever case they arrive in
proptest! {
    #[test]
    fn test_config_key_always_lowercase(s in "\\PC*") {
        let key = ConfigKey::from(s.clone());
        prop_assert_eq!(key.as_str(), s.to_lowercase());
    }
}

// ConfigValue keeps its text verbatim
proptest! {
    #[test]
    fn test_config_value_from_any_string(s in "\\PC*") {
        let value = ConfigValue::from(s.clone());
        prop_assert_eq!(value.as_str(), s.as_str());
    }
}

// Every line with '=' and non-empty halves survives normalisation
proptest! {
    #[test]
    fn test_normaliser_keeps_well_formed_lines(
        key in "[A-Za-z_][A-Za-z0-9_]{0,16}",
        value in "[^\\n]{1,32}",
    ) {
        let map = lines_to_map([format!("{}={}", key, value)]);
        prop_assert_eq!(map.len(), 1);
        prop_assert_eq!(map.get(&key.to_lowercase()), Some(&value));
    }
}

// Lines without '=' never reach the map
proptest! {
    #[test]
    fn test_normaliser_drops_lines_without_separator(lines in prop::collection::vec("[^=\\n]*", 0..8)) {
        prop_assert!(lines_to_map(&lines).is_empty());
    }
}

// Integers bind exactly when in range
proptest! {
    #[test]
    fn test_integer_fields_bind(small in any::<i8>(), big in any::<u64>()) {
        let mut builder = Builder::new();
        builder.merge([("SMALL", small.to_string()), ("BIG", big.to_string())]).unwrap();
        let numbers: Numbers = builder.build().unwrap();
        prop_assert_eq!(numbers.small, small);
        prop_assert_eq!(numbers.big, big);
    }
}

// Out-of-range integers become zero rather than wrapping or saturating
proptest! {
    #[test]
    fn test_out_of_range_integer_is_zero(n in 128i64..100_000) {
        prop_assert_eq!(ScalarKind::I8.convert(&n.to_string(), "k"), ScalarValue::I8(0));
        prop_assert_eq!(ScalarKind::I8.convert(&(-n - 1).to_string(), "k"), ScalarValue::I8(0));
    }
}

// Sequences bind element-wise, whatever the spacing
proptest! {
    #[test]
    fn test_sequence_fields_bind(
        list in prop::collection::vec(any::<i32>(), 0..10),
        pad in " {1,3}",
    ) {
        let raw: Vec<String> = list.iter().map(i32::to_string).collect();
        let joined = format!("{}{}{}", pad, raw.join(&pad), pad);

        let mut builder = Builder::new();
        builder.merge([("list", joined)]).unwrap();
        let numbers: Numbers = builder.build().unwrap();
        prop_assert_eq!(numbers.list, list);
    }
}

// Word lists round-trip through the space delimiter
proptest! {
    #[test]
    fn test_word_sequences_bind(words in prop::collection::vec("[a-z0-9]{1,8}", 1..6)) {
        let mut builder = Builder::new();
        builder.merge([("WORDS", words.join(" "))]).unwrap();
        let numbers: Numbers = builder.build().unwrap();
        prop_assert_eq!(numbers.words, words);
    }
}

// The lenient converter never fails, only falls back to zero
proptest! {
    #[test]
    fn test_convert_is_total(s in "\\PC*") {
        for kind in [ScalarKind::Bool, ScalarKind::U16, ScalarKind::F64, ScalarKind::Duration] {
            let value = ScalarKind::convert(kind, &s, "k");
            prop_assert_eq!(value.kind(), kind);
        }
    }
}
