use crate::dictionary::*;
use crate::token::TokenType;
use crate::tokenizer::*;

fn build_tokenizer(words: &[&str]) -> Tokenizer {
    let mut dict = Dictionary::new();
    for w in words {
        dict.insert(w);
    }
    Tokenizer::new(dict)
}

fn tokens(tokenizer: &Tokenizer, text: &str) -> Vec<(usize, TokenType)> {
    tokenizer.tokenize(text).iter().collect()
}

#[test]
fn test_single_word_with_shorter_prefix_word() {
    // "ม" begins no word, so only the full match is a valid boundary.
    let tokenizer = build_tokenizer(&["กา", "กาม"]);
    assert_eq!(tokens(&tokenizer, "กาม"), vec![(3, TokenType::Known)]);
}

#[test]
fn test_longest_match_precedence() {
    let tokenizer = build_tokenizer(&["ก", "กข", "กขค", "ง"]);
    assert_eq!(
        tokens(&tokenizer, "กขคง"),
        vec![(3, TokenType::Known), (4, TokenType::Known)]
    );
}

#[test]
fn test_lookahead_overrides_raw_longest() {
    let tokenizer = build_tokenizer(&["ก", "กข", "กขค", "ขคง"]);
    assert_eq!(tokenizer.words("กขคง"), vec!["ก", "ขคง"]);
    assert_eq!(
        tokens(&tokenizer, "กขคง"),
        vec![(1, TokenType::Known), (4, TokenType::Known)]
    );
}

#[test]
fn test_ambiguity_flagging() {
    let tokenizer = build_tokenizer(&["ตา", "ตาก", "กลม", "ลม"]);
    // "ตา|กลม" and "ตาก|ลม" are both parseable.
    assert_eq!(
        tokens(&tokenizer, "ตากลม"),
        vec![(3, TokenType::Ambiguous), (5, TokenType::Known)]
    );
}

#[test]
fn test_tone_mark_absorption() {
    let tokenizer = build_tokenizer(&[]);
    assert_eq!(tokens(&tokenizer, "ก\u{0E48}"), vec![(2, TokenType::Unknown)]);

    let tokenizer = build_tokenizer(&["กา"]);
    assert_eq!(
        tokens(&tokenizer, "กา\u{0E49}"),
        vec![(3, TokenType::Unknown)]
    );
}

#[test]
fn test_empty_dictionary_degrades_to_unknown() {
    let tokenizer = build_tokenizer(&[]);
    assert_eq!(
        tokens(&tokenizer, "ภาษาไทย ok"),
        vec![
            (7, TokenType::Unknown),
            (8, TokenType::Punctuation),
            (10, TokenType::Literal),
        ]
    );
}

#[test]
fn test_unknown_run_absorbs_following_unmatched() {
    let tokenizer = build_tokenizer(&["ไทย"]);
    assert_eq!(
        tokenizer.words("ฮฮฮไทยฮฮ"),
        vec!["ฮฮฮ", "ไทย", "ฮฮ"]
    );
}

#[test]
fn test_boundary_threshold_quirk() {
    // ASCII digits always end a token; native digits go through dictionary lookahead.
    let tokenizer = build_tokenizer(&["กา", "กาม", "ม"]);
    assert_eq!(
        tokens(&tokenizer, "กาม1"),
        vec![(3, TokenType::Ambiguous), (4, TokenType::Literal)]
    );
    assert_eq!(tokenizer.words("กาม๑"), vec!["กา", "ม", "๑"]);
}

#[test]
fn test_punctuation_tokens() {
    let tokenizer = build_tokenizer(&["ไทย"]);
    assert_eq!(
        tokenizer.words("\u{201C}ไทย\u{201D}ฯ"),
        vec!["\u{201C}", "ไทย", "\u{201D}", "ฯ"]
    );
    let types: Vec<_> = tokenizer.tokenize("\u{201C}ไทย\u{201D}ฯ").types().collect();
    assert_eq!(
        types,
        vec![
            TokenType::Punctuation,
            TokenType::Known,
            TokenType::Punctuation,
            TokenType::Punctuation
        ]
    );
}

#[test]
fn test_shared_dictionary_workers() {
    let dict = std::sync::Arc::new(
        Dictionary::from_reader("ตา\nตาก\nกลม\nลม\n".as_bytes()).unwrap(),
    );
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tokenizer = Tokenizer::from_shared_dictionary(dict.clone());
            std::thread::spawn(move || {
                let mut worker = tokenizer.new_worker();
                worker.reset_sentence("ตากลม");
                worker.tokenize();
                worker.token_iter().map(|t| t.to_buf()).collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].len(), 2);
}
