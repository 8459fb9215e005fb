//! Property-based tests for type detection and sorting.
//!
//! Uses `proptest` to generate token lists of each flavour and checks that
//! the cascade picks the right type, that the output is ascending, that it is
//! a permutation of the input, and that re-sorting the rendering is a no-op.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rusty_sorter::data::{detect_and_sort, split_tokens, SortAlgorithm, SortedData};

fn arb_algorithm() -> impl Strategy<Value = SortAlgorithm> {
    prop_oneof![
        Just(SortAlgorithm::Bubble),
        Just(SortAlgorithm::Selection),
        Just(SortAlgorithm::Standard),
    ]
}

/// Tokens that start with a letter, including `inf` and `nan` spellings.
fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9 _-]{0,10}",
        Just("inf".to_string()),
        Just("NaN".to_string()),
        Just("Infinity".to_string()),
    ]
}

proptest! {
    #[test]
    fn integers_are_sorted_numerically(
        values in prop::collection::vec(any::<i64>(), 0..60),
        algo in arb_algorithm(),
    ) {
        let tokens: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(detect_and_sort(&tokens, algo), SortedData::Integers(expected));
    }

    #[test]
    fn floats_with_a_fraction_sort_as_floats(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..60),
        algo in arb_algorithm(),
    ) {
        // `{:?}` always keeps the fractional part, so at least one token is
        // not an integer.
        let tokens: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
        let mut expected = values.clone();
        expected.sort_by(f64::total_cmp);
        prop_assert_eq!(detect_and_sort(&tokens, algo), SortedData::Floats(expected));
    }

    #[test]
    fn any_word_forces_text(
        tokens in prop::collection::vec("[0-9]{1,4}", 0..30),
        word in arb_word(),
        algo in arb_algorithm(),
    ) {
        let mut tokens = tokens;
        tokens.push(word);
        let sorted = detect_and_sort(&tokens, algo);
        let SortedData::Text(text) = sorted else {
            return Err(TestCaseError::fail("expected text"));
        };
        prop_assert!(text.windows(2).all(|w| w[0].as_bytes() <= w[1].as_bytes()));

        let mut a = tokens.clone();
        let mut b = text.clone();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn resorting_is_idempotent(
        tokens in prop::collection::vec("-?([0-9a-c.]{1,5}|nan|inf)", 0..40),
        algo in arb_algorithm(),
    ) {
        let first = detect_and_sort(&tokens, algo).render();
        let second = detect_and_sort(&split_tokens(&first.join("\n")), algo).render();
        prop_assert_eq!(first, second);
    }
}
