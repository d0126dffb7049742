//! Property-based tests for sequence operations
//!
//! Tokens are drawn from a small alphabet so that duplicates and
//! dash-prefixed tokens turn up often.

use proptest::prelude::*;
use sos::TokenSequence;

fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Positional values
        "[a-zA-Z0-9]{0,6}",
        // Flags
        "-{1,2}[a-z]{1,4}",
        // Joined flags
        "-{1,2}[a-z]{1,4}=[a-zA-Z0-9]{0,4}",
    ]
}

fn tokens_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token_strategy(), 0..12)
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_insert_grows_and_keeps_order(
            tokens in tokens_strategy(),
            inserted in prop::collection::vec(token_strategy(), 0..4),
            at in 0usize..16,
        ) {
            let original = TokenSequence::new(tokens.clone());
            let updated = original.clone().insert(at, inserted.clone());

            prop_assert_eq!(updated.len(), tokens.len() + inserted.len());

            let at = at.min(tokens.len());
            prop_assert_eq!(updated.slice(0, Some(at)), tokens[..at].to_vec());
            prop_assert_eq!(updated.slice(at, Some(inserted.len())), inserted.clone());
            prop_assert_eq!(
                updated.slice(at + inserted.len(), None),
                tokens[at..].to_vec()
            );
        }

        #[test]
        fn test_push_then_pop_restores(tokens in tokens_strategy(), head in token_strategy()) {
            let original = TokenSequence::new(tokens);
            let (restored, popped) = original.clone().push([head.clone()]).pop();

            prop_assert_eq!(popped, head);
            prop_assert_eq!(restored, original);
        }

        #[test]
        fn test_push_many_then_pop_returns_first(
            tokens in tokens_strategy(),
            pushed in prop::collection::vec(token_strategy(), 1..4),
        ) {
            let (_, popped) = TokenSequence::new(tokens).push(pushed.clone()).pop();
            prop_assert_eq!(&popped, &pushed[0]);
        }

        #[test]
        fn test_remove_then_insert_restores(
            tokens in prop::collection::vec(token_strategy(), 1..12),
            i in 0usize..12,
            n in 1usize..4,
        ) {
            let i = i % tokens.len();
            let original = TokenSequence::new(tokens.clone());
            let removed = original.slice(i, Some(n));
            let restored = original.clone().remove(i, n).insert(i, removed);

            prop_assert_eq!(restored.mismatch(&tokens), None);
            prop_assert_eq!(restored.len(), tokens.len());
        }

        #[test]
        fn test_mismatch_finds_single_difference(
            tokens in prop::collection::vec(token_strategy(), 1..12),
            i in 0usize..12,
        ) {
            let sequence = TokenSequence::new(tokens.clone());
            prop_assert_eq!(sequence.mismatch(&tokens), None);

            let i = i % tokens.len();
            let mut changed = tokens.clone();
            changed[i].push('#');
            prop_assert_eq!(sequence.mismatch(&changed), Some(i));
        }

        #[test]
        fn test_arg_forms_agree(
            name in "[a-z]{1,4}",
            dashes in "-{1,3}",
            value in "[a-zA-Z0-9]{1,6}",
        ) {
            let (joined, joined_value) =
                TokenSequence::new([format!("--{name}={value}")]).arg(&name);
            let (separate, separate_value) =
                TokenSequence::new([format!("{dashes}{name}"), value.clone()]).arg(&name);

            prop_assert_eq!(&joined_value, &value);
            prop_assert_eq!(&separate_value, &value);
            prop_assert!(joined.is_empty());
            prop_assert!(separate.is_empty());
        }

        #[test]
        fn test_missing_flag_leaves_sequence(tokens in tokens_strategy()) {
            let original = TokenSequence::new(tokens);
            // Generated flag names never contain digits
            let (after, found) = original.clone().flag("x0");
            prop_assert!(!found);
            prop_assert_eq!(after, original.clone());

            let (after, value) = original.clone().arg("x0");
            prop_assert_eq!(value, "");
            prop_assert_eq!(after, original);
        }
    }
}
