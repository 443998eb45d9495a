//! 単語境界の先読み判定。
use crate::character::is_boundary_char;
use crate::dictionary::{Dictionary, Match};

/// `chars[pos..]` の手前でトークンを終えてよいかどうかを判定します。
///
/// 以下のいずれかを満たす場合に有効な境界とみなします:
///
/// - `pos` が文末である
/// - `chars[pos]` が [`is_boundary_char`] を満たす(非スクリプトの連続が始まりうる)
/// - `chars[pos..]` の接頭辞のいずれかが辞書の単語に完全一致する
///
/// 辞書の検索は短い接頭辞から順に行い、最初の完全一致、または一致の可能性が
/// なくなった時点で打ち切ります。
pub(crate) fn is_boundary_valid(dict: &Dictionary, chars: &[char], pos: usize) -> bool {
    let Some(&c) = chars.get(pos) else {
        return true;
    };
    if is_boundary_char(c) {
        return true;
    }
    dict.prefix_scan(&chars[pos..])
        .any(|(_, m)| m == Match::Word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_end_of_text() {
        let dict = Dictionary::new();
        let text = chars("กา");
        assert!(is_boundary_valid(&dict, &text, 2));
    }

    #[test]
    fn test_boundary_chars() {
        let dict = Dictionary::new();
        let text = chars("ก ก1ก\u{201C}");
        assert!(is_boundary_valid(&dict, &text, 1));
        assert!(is_boundary_valid(&dict, &text, 3));
        assert!(is_boundary_valid(&dict, &text, 5));
        assert!(!is_boundary_valid(&dict, &text, 0));
        assert!(!is_boundary_valid(&dict, &text, 4));
    }

    #[test]
    fn test_lookahead() {
        let mut dict = Dictionary::new();
        dict.insert("มาก");
        let text = chars("กามากข");
        // "มาก" starts at 2.
        assert!(is_boundary_valid(&dict, &text, 2));
        // "ามาก" cannot begin any word.
        assert!(!is_boundary_valid(&dict, &text, 1));
        // "ก" is a prefix of nothing.
        assert!(!is_boundary_valid(&dict, &text, 5));
    }

    #[test]
    fn test_prefix_only_is_invalid() {
        let mut dict = Dictionary::new();
        dict.insert("มากมาย");
        let text = chars("กามาก");
        assert!(!is_boundary_valid(&dict, &text, 2));
    }
}
