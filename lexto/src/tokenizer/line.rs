//! トークン列からの行区切り位置の導出。
//!
//! ラテン文字列・記号の後ろ、既知語どうしの間などを区切りの候補とし、
//! 括弧と引用符で囲まれた範囲は途中で区切らないように扱います。
use crate::token::TokenType;
use crate::tokenizer::sequence::TokenSequence;

/// 囲みの開始記号に対応する終了記号を返します。
#[inline(always)]
const fn closer_of(c: char) -> Option<char> {
    match c {
        '(' => Some(')'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

/// 後続の記号トークンが区切りを促すかどうかを返します。
#[inline(always)]
const fn opens_break(c: char) -> bool {
    matches!(c, ' ' | '"' | '(' | '\'')
}

/// 行区切りとなる終了位置の列を導出します。
///
/// # 引数
///
/// * `chars` - 入力文全体の文字列
/// * `seq` - `chars` を分割したトークン列
/// * `window_size` - 囲みの終了記号を探すトークン数の上限(開始記号を含む)
///
/// # 戻り値
///
/// 単調増加する文字単位の終了位置の列。入力が空でなければ、最後の要素は文字数と一致します。
pub(crate) fn derive_line_breaks(
    chars: &[char],
    seq: &TokenSequence,
    window_size: usize,
) -> Vec<usize> {
    let mut breaks = vec![];
    derive_line_breaks_into(chars, seq, window_size, &mut breaks);
    breaks
}

/// [`derive_line_breaks`] と同じ処理を行い、結果を `breaks` に書き込みます。
pub(crate) fn derive_line_breaks_into(
    chars: &[char],
    seq: &TokenSequence,
    window_size: usize,
    breaks: &mut Vec<usize>,
) {
    breaks.clear();
    let n = seq.len();
    let last_char = |i: usize| chars[seq.end(i) - 1];

    let mut i = 0;
    while i + 1 < n {
        let cur_type = seq.token_type(i);
        let cur_end = seq.end(i);

        if matches!(cur_type, TokenType::Literal | TokenType::Punctuation) {
            let closer = if cur_type == TokenType::Punctuation {
                closer_of(last_char(i))
            } else {
                None
            };
            match closer {
                Some(closer) => {
                    let found = (i + 1..n.min(i + window_size)).find(|&j| {
                        seq.token_type(j) == TokenType::Punctuation && last_char(j) == closer
                    });
                    if let Some(j) = found {
                        breaks.push(seq.end(j));
                        i = j;
                    }
                }
                None => breaks.push(cur_end),
            }
        } else {
            let next_type = seq.token_type(i + 1);
            if next_type == TokenType::Literal
                || (next_type == TokenType::Punctuation && opens_break(last_char(i + 1)))
                || (cur_type == TokenType::Known
                    && !matches!(next_type, TokenType::Unknown | TokenType::Punctuation))
            {
                breaks.push(cur_end);
            }
        }
        i += 1;
    }

    if i < n {
        breaks.push(seq.end(n - 1));
    }
}
