//! スクリプト文字に対する最長一致の解析。
//!
//! カーソル位置から辞書の単語に一致する終了位置を走査し、先読みで有効な境界を
//! 絞り込んだうえで、新しいトークンを追加するか直前のトークンに吸収するかを決めます。
use crate::character::{is_front_dependent, is_rear_dependent, is_tone_mark};
use crate::dictionary::{Dictionary, Match};
use crate::token::TokenType;
use crate::tokenizer::boundary::is_boundary_valid;
use crate::tokenizer::sequence::TokenSequence;

/// 1つの開始位置に対する辞書一致の集計
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Candidates {
    /// 完全一致した最長の終了位置
    pub longest: Option<usize>,
    /// 完全一致かつ有効な境界となる最長の終了位置
    pub longest_valid: Option<usize>,
    /// 完全一致かつ有効な境界となる終了位置の数
    pub num_valid: usize,
}

impl Candidates {
    /// `chars[pos..]` の接頭辞を短い順に辞書で検索し、候補を集計します。
    pub(crate) fn scan(dict: &Dictionary, chars: &[char], pos: usize) -> Self {
        let mut cands = Self::default();
        for (len, m) in dict.prefix_scan(&chars[pos..]) {
            if m != Match::Word {
                continue;
            }
            let end = pos + len;
            cands.longest = Some(end);
            if is_boundary_valid(dict, chars, end) {
                cands.longest_valid = Some(end);
                cands.num_valid += 1;
            }
        }
        cands
    }
}

/// `chars[pos]` から始まるトークンを1つ決定し、次のカーソル位置を返します。
///
/// トークンは `seq` の末尾に追加されるか、直前のトークンへの吸収として
/// [`TokenSequence::extend_last`] で書き換えられます。
///
/// # 引数
///
/// * `dict` - 単語辞書
/// * `chars` - 入力文全体の文字列
/// * `pos` - カーソル位置。`chars.len()` より小さい必要があります。
/// * `seq` - これまでに確定したトークン列
///
/// # 戻り値
///
/// 次のカーソル位置。常に `pos` より大きくなります。
pub(crate) fn parse_at(
    dict: &Dictionary,
    chars: &[char],
    pos: usize,
    seq: &mut TokenSequence,
) -> usize {
    debug_assert!(pos < chars.len());

    let cands = Candidates::scan(dict, chars, pos);
    let prev_is_rear_dependent = pos
        .checked_sub(1)
        .is_some_and(|i| is_rear_dependent(chars[i]));

    let Some(longest) = cands.longest else {
        let end = pos + 1;
        let c = chars[pos];
        let absorb = !seq.is_empty()
            && (is_front_dependent(c)
                || is_tone_mark(c)
                || prev_is_rear_dependent
                || seq.last_type() == Some(TokenType::Unknown));
        if absorb {
            seq.extend_last(end, TokenType::Unknown);
        } else {
            seq.push(end, TokenType::Unknown);
        }
        return end;
    };

    let Some(end) = cands.longest_valid else {
        if prev_is_rear_dependent {
            seq.extend_last(longest, TokenType::Unknown);
        } else {
            seq.push(longest, TokenType::Known);
        }
        return longest;
    };

    if prev_is_rear_dependent {
        seq.extend_last(end, TokenType::Unknown);
    } else if cands.num_valid == 1 {
        seq.push(end, TokenType::Known);
    } else {
        seq.push(end, TokenType::Ambiguous);
    }
    end
}
