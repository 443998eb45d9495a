use crate::dictionary::*;
use crate::token::TokenType;
use crate::tokenizer::*;

#[test]
fn test_query_round_trip() {
    let mut dict = Dictionary::new();
    assert!(dict.insert("สวัสดี"));

    assert_eq!(dict.query_str("สวัสดี"), Match::Word);
    for len in 1..6 {
        let prefix: String = "สวัสดี".chars().take(len).collect();
        assert_eq!(dict.query_str(&prefix), Match::Prefix, "{prefix}");
    }
    assert_eq!(dict.query_str("ครับ"), Match::Absent);
    assert_eq!(dict.query_str("สวัสดีครับ"), Match::Absent);
}

#[test]
fn test_idempotent_insertion() {
    let mut dict = Dictionary::new();
    assert!(dict.insert("ไทย"));
    let before: Vec<_> = ["ไ", "ไท", "ไทย", "ไทยๆ"]
        .iter()
        .map(|s| dict.query_str(s))
        .collect();
    assert!(!dict.insert("ไทย"));
    let after: Vec<_> = ["ไ", "ไท", "ไทย", "ไทยๆ"]
        .iter()
        .map(|s| dict.query_str(s))
        .collect();
    assert_eq!(before, after);
    assert_eq!(dict.num_words(), 1);
}

#[test]
fn test_words_with_prefix_is_sorted() {
    let dict = Dictionary::from_reader("คนไทย\nคน\nคนงาน\nไทย\nคนขับ\n".as_bytes()).unwrap();
    assert_eq!(
        dict.words_with_prefix("คน"),
        vec!["คน", "คนขับ", "คนงาน", "คนไทย"]
    );
    assert!(dict.words_with_prefix("ข").is_empty());
    assert_eq!(dict.words_with_prefix("").len(), 5);
}

#[test]
fn test_unknown_word_list_merges() {
    let mut dict = Dictionary::from_reader("กิน\nข้าว\n".as_bytes()).unwrap();
    let tokenizer = Tokenizer::new(dict.clone());
    let before: Vec<_> = tokenizer.tokenize("กินข้าวมันไก่").types().collect();
    assert_eq!(
        before,
        vec![TokenType::Known, TokenType::Known, TokenType::Unknown]
    );

    let added = dict.add_words_from_reader("มันไก่\n".as_bytes()).unwrap();
    assert_eq!(added, 1);
    let tokenizer = Tokenizer::new(dict);
    assert_eq!(
        tokenizer.words("กินข้าวมันไก่"),
        vec!["กิน", "ข้าว", "มันไก่"]
    );
}

#[test]
fn test_compiled_dictionary_tokenizes_identically() {
    let words = "ตา\nตาก\nกลม\nตากลม\nลม\n";
    let dict = Dictionary::from_reader(words.as_bytes()).unwrap();

    let mut buffer = vec![];
    dict.write(&mut buffer).unwrap();
    let restored = Dictionary::read(buffer.as_slice()).unwrap();

    let lhs = Tokenizer::new(dict);
    let rhs = Tokenizer::new(restored);
    for text in ["ตากลม", "ตากลมตาก", "ลมตา", "xตาก ลม"] {
        assert_eq!(lhs.tokenize(text), rhs.tokenize(text), "{text}");
    }
}
