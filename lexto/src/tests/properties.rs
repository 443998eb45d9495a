use proptest::prelude::*;

use crate::dictionary::*;
use crate::token::Segments;
use crate::tokenizer::*;

/// Characters drawn from every class the tokenizer distinguishes.
fn mixed_char() -> impl Strategy<Value = char> {
    prop_oneof![
        6 => prop::char::range('\u{0E01}', '\u{0E4E}'),
        1 => prop::char::range('\u{0E50}', '\u{0E59}'),
        1 => prop::char::range('a', 'z'),
        1 => prop::char::range('0', '9'),
        1 => prop::sample::select(vec![' ', ',', '.', '(', ')', '"', '\'', '\u{201C}', 'é']),
    ]
}

fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(mixed_char(), 0..48).prop_map(|cs| cs.into_iter().collect())
}

fn thai_word() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('\u{0E01}', '\u{0E0A}'), 1..6)
        .prop_map(|cs| cs.into_iter().collect())
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(thai_word(), 0..24)
}

fn dictionary_of(words: &[String]) -> Dictionary {
    let mut dict = Dictionary::new();
    for w in words {
        dict.insert(w);
    }
    dict
}

proptest! {
    #[test]
    fn prop_tokens_partition_text(words in word_list(), text in mixed_text()) {
        let tokenizer = Tokenizer::new(dictionary_of(&words));
        let seq = tokenizer.tokenize(&text);
        let ends: Vec<usize> = seq.ends().collect();

        let len = text.chars().count();
        prop_assert_eq!(ends.last().copied().unwrap_or(0), len);
        prop_assert!(ends.first().is_none_or(|&e| e > 0));
        prop_assert!(ends.windows(2).all(|w| w[0] < w[1]));

        let rebuilt: String = Segments::new(text.as_str(), ends.iter().copied()).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn prop_line_breaks_are_token_ends(words in word_list(), text in mixed_text()) {
        let tokenizer = Tokenizer::new(dictionary_of(&words));
        let ends: Vec<usize> = tokenizer.tokenize(&text).ends().collect();
        let breaks = tokenizer.derive_line_breaks(&text);

        prop_assert!(breaks.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(breaks.iter().all(|b| ends.binary_search(b).is_ok()));
        prop_assert_eq!(breaks.last(), ends.last());
    }

    #[test]
    fn prop_dictionary_round_trip(words in word_list(), probe in thai_word()) {
        let dict = dictionary_of(&words);

        for w in &words {
            prop_assert_eq!(dict.query_str(w), Match::Word);
            let chars: Vec<char> = w.chars().collect();
            for len in 1..chars.len() {
                let prefix: String = chars[..len].iter().collect();
                if !words.contains(&prefix) {
                    prop_assert_eq!(dict.query_str(&prefix), Match::Prefix);
                }
            }
        }

        let shares_prefix = words.iter().any(|w| w.chars().next() == probe.chars().next());
        if !shares_prefix {
            prop_assert_eq!(dict.query_str(&probe), Match::Absent);
        }
    }

    #[test]
    fn prop_insertion_is_idempotent(words in word_list()) {
        let mut dict = dictionary_of(&words);
        let num_words = dict.num_words();
        let listed = dict.words_with_prefix("");
        for w in &words {
            prop_assert!(!dict.insert(w));
        }
        prop_assert_eq!(dict.num_words(), num_words);
        prop_assert_eq!(dict.words_with_prefix(""), listed);
    }

    #[test]
    fn prop_compiled_dictionary_preserves_words(words in word_list()) {
        let dict = dictionary_of(&words);
        let mut buffer = vec![];
        dict.write(&mut buffer).unwrap();
        let restored = Dictionary::read(buffer.as_slice()).unwrap();
        prop_assert_eq!(restored.words_with_prefix(""), dict.words_with_prefix(""));
    }
}
