//! トークンの結果コンテナ
//!
//! このモジュールは、分割の結果として得られるトークンと行区切りを表現する型を提供します。
//! トークンは[`Worker`]への軽量な参照であり、表層形、種別、位置情報へのアクセスを提供します。

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Range;
use std::str::{CharIndices, FromStr};

use crate::errors::LexToError;
use crate::tokenizer::worker::Worker;

/// トークンの種別
///
/// 各種別は安定した数値コードを持ちます。
///
/// | 種別 | コード |
/// |------|--------|
/// | [`TokenType::Unknown`] | 0 |
/// | [`TokenType::Known`] | 1 |
/// | [`TokenType::Ambiguous`] | 2 |
/// | [`TokenType::Literal`] | 3 |
/// | [`TokenType::Punctuation`] | 4 |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenType {
    /// 辞書のどの単語にも一致しなかった文字列
    Unknown = 0,
    /// 境界の候補が1つだけの辞書語
    Known = 1,
    /// 境界の候補が複数ある辞書語
    Ambiguous = 2,
    /// ラテン文字列または数字列
    Literal = 3,
    /// 1文字の記号
    Punctuation = 4,
}

impl TokenType {
    /// 数値コードを返します。
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// 種別の名前を返します。
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Known => "known",
            Self::Ambiguous => "ambiguous",
            Self::Literal => "literal",
            Self::Punctuation => "punctuation",
        }
    }
}

impl TryFrom<u8> for TokenType {
    type Error = LexToError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unknown),
            1 => Ok(Self::Known),
            2 => Ok(Self::Ambiguous),
            3 => Ok(Self::Literal),
            4 => Ok(Self::Punctuation),
            _ => Err(LexToError::invalid_argument(
                "code",
                format!("{code} is not a token type code"),
            )),
        }
    }
}

impl FromStr for TokenType {
    type Err = LexToError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Self::Unknown),
            "known" => Ok(Self::Known),
            "ambiguous" => Ok(Self::Ambiguous),
            "literal" => Ok(Self::Literal),
            "punctuation" => Ok(Self::Punctuation),
            _ => Err(LexToError::invalid_argument(
                "s",
                format!("{s} is not a token type name"),
            )),
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分割の結果トークン
///
/// このトークンは[`Worker`]への軽量な参照であり、実際のデータは
/// Workerが保持しています。トークンはWorkerが生存している間のみ有効です。
pub struct Token<'w> {
    worker: &'w Worker,
    index: usize,
}

impl<'w> Token<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker, index: usize) -> Self {
        Self { worker, index }
    }

    /// トークンの文字単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        self.worker.tokens.range(self.index)
    }

    /// トークンのバイト単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        let sent = &self.worker.sent;
        let range = self.range_char();
        sent.byte_position(range.start)..sent.byte_position(range.end)
    }

    /// トークンの表層形（元のテキスト中の文字列）を取得します。
    #[inline(always)]
    pub fn surface(&self) -> &'w str {
        let sent = &self.worker.sent;
        &sent.raw()[self.range_byte()]
    }

    /// トークンの種別を取得します。
    #[inline(always)]
    pub fn token_type(&self) -> TokenType {
        self.worker.tokens.token_type(self.index)
    }

    /// このトークンビューを所有型の[`TokenBuf`]に変換します。
    pub fn to_buf(&self) -> TokenBuf {
        TokenBuf {
            surface: self.surface().to_string(),
            range_char: self.range_char(),
            range_byte: self.range_byte(),
            token_type: self.token_type(),
        }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("surface", &self.surface())
            .field("range_char", &self.range_char())
            .field("range_byte", &self.range_byte())
            .field("token_type", &self.token_type())
            .finish()
    }
}

/// トークンのイテレータ
///
/// 前方および後方からの走査をサポートしています（[`DoubleEndedIterator`]を実装）。
pub struct TokenIter<'w> {
    worker: &'w Worker,
    front: usize,
    back: usize,
}

impl<'w> TokenIter<'w> {
    #[inline(always)]
    pub(crate) fn new(worker: &'w Worker) -> Self {
        let num_tokens = worker.num_tokens();
        Self {
            worker,
            front: 0,
            back: num_tokens,
        }
    }
}

impl<'w> Iterator for TokenIter<'w> {
    type Item = Token<'w>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            let t = self.worker.token(self.front);
            self.front += 1;
            Some(t)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for TokenIter<'_> {
    #[inline(always)]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.back {
            self.back -= 1;
            let t = self.worker.token(self.back);
            Some(t)
        } else {
            None
        }
    }
}

impl ExactSizeIterator for TokenIter<'_> {}

/// 行区切りで分けられた区間
///
/// [`Worker::tokenize_lines`] の結果を参照する軽量なビューです。
pub struct Line<'w> {
    worker: &'w Worker,
    index: usize,
}

impl<'w> Line<'w> {
    #[inline(always)]
    pub(crate) const fn new(worker: &'w Worker, index: usize) -> Self {
        Self { worker, index }
    }

    /// 区間の文字単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_char(&self) -> Range<usize> {
        let ends = &self.worker.lines;
        let start = if self.index == 0 {
            0
        } else {
            ends[self.index - 1]
        };
        start..ends[self.index]
    }

    /// 区間のバイト単位の位置範囲を取得します。
    #[inline(always)]
    pub fn range_byte(&self) -> Range<usize> {
        let sent = &self.worker.sent;
        let range = self.range_char();
        sent.byte_position(range.start)..sent.byte_position(range.end)
    }

    /// 区間の文字列を取得します。
    #[inline(always)]
    pub fn surface(&self) -> &'w str {
        &self.worker.sent.raw()[self.range_byte()]
    }
}

impl fmt::Debug for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("surface", &self.surface())
            .field("range_char", &self.range_char())
            .finish()
    }
}

/// 行区切りのイテレータ
pub struct LineIter<'w> {
    worker: &'w Worker,
    front: usize,
}

impl<'w> LineIter<'w> {
    #[inline(always)]
    pub(crate) fn new(worker: &'w Worker) -> Self {
        Self { worker, front: 0 }
    }
}

impl<'w> Iterator for LineIter<'w> {
    type Item = Line<'w>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.worker.num_lines() {
            let line = self.worker.line(self.front);
            self.front += 1;
            Some(line)
        } else {
            None
        }
    }
}

/// 所有型の自己完結したトークン
///
/// このトークンは[`Token`]の所有型版です。分割結果を長期保存したり、
/// スレッド間で送信する際に有用です。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBuf {
    /// トークンの表層形（元のテキスト中の文字列）
    pub surface: String,

    /// トークンの文字単位の位置範囲
    pub range_char: Range<usize>,

    /// トークンのバイト単位の位置範囲
    pub range_byte: Range<usize>,

    /// トークンの種別
    pub token_type: TokenType,
}

impl<'w> From<Token<'w>> for TokenBuf {
    fn from(token: Token<'w>) -> Self {
        token.to_buf()
    }
}

/// 文字単位の終了位置の列に従って文字列を切り出すイテレータ
///
/// 直前の終了位置(最初は0)から次の終了位置までの部分文字列を順に返します。
/// 終了位置が文字数を超える場合は末尾で打ち切ります。
///
/// # 例
///
/// ```
/// use lexto::token::Segments;
///
/// let segments: Vec<_> = Segments::new("ภาษาไทย", [4, 7]).collect();
/// assert_eq!(segments, vec!["ภาษา", "ไทย"]);
/// ```
pub struct Segments<'a, I> {
    text: &'a str,
    chars: CharIndices<'a>,
    ends: I,
    pos_char: usize,
    pos_byte: usize,
}

impl<'a, I> Segments<'a, I>
where
    I: Iterator<Item = usize>,
{
    /// 新しいイテレータを作成します。
    ///
    /// # 引数
    ///
    /// * `text` - 切り出し元の文字列
    /// * `ends` - 文字単位の終了位置。単調増加である必要があります。
    pub fn new<E>(text: &'a str, ends: E) -> Self
    where
        E: IntoIterator<IntoIter = I>,
    {
        Self {
            text,
            chars: text.char_indices(),
            ends: ends.into_iter(),
            pos_char: 0,
            pos_byte: 0,
        }
    }
}

impl<'a, I> Iterator for Segments<'a, I>
where
    I: Iterator<Item = usize>,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos_byte >= self.text.len() {
            return None;
        }
        let end = self.ends.next()?;
        debug_assert!(end > self.pos_char, "end offsets must increase");

        let start_byte = self.pos_byte;
        while self.pos_char < end {
            if self.chars.next().is_none() {
                break;
            }
            self.pos_char += 1;
        }
        self.pos_byte = self
            .chars
            .clone()
            .next()
            .map_or(self.text.len(), |(bi, _)| bi);
        Some(&self.text[start_byte..self.pos_byte])
    }
}

impl<I> FusedIterator for Segments<'_, I> where I: FusedIterator<Item = usize> {}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Dictionary, Tokenizer};

    #[test]
    fn test_iter() {
        let dict = Dictionary::from_reader("ภาษา\nไทย\nง่าย\n".as_bytes()).unwrap();
        let tokenizer = Tokenizer::new(dict);
        let mut worker = tokenizer.new_worker();
        worker.reset_sentence("ภาษาไทยง่าย");
        worker.tokenize();
        assert_eq!(worker.num_tokens(), 3);

        let mut it = worker.token_iter();
        assert_eq!(it.len(), 3);
        for i in 0..worker.num_tokens() {
            let lhs = worker.token(i);
            let rhs = it.next().unwrap();
            assert_eq!(lhs.surface(), rhs.surface());
        }
        assert!(it.next().is_none());

        let rev: Vec<_> = worker.token_iter().rev().map(|t| t.surface()).collect();
        assert_eq!(rev, vec!["ง่าย", "ไทย", "ภาษา"]);
    }

    #[test]
    fn test_token_ranges() {
        let tokenizer = Tokenizer::new(Dictionary::from_reader("ไทย\n".as_bytes()).unwrap());
        let mut worker = tokenizer.new_worker();
        worker.reset_sentence("ab ไทย");
        worker.tokenize();

        let bufs: Vec<TokenBuf> = worker.token_iter().map(TokenBuf::from).collect();
        assert_eq!(
            bufs,
            vec![
                TokenBuf {
                    surface: "ab".to_string(),
                    range_char: 0..2,
                    range_byte: 0..2,
                    token_type: TokenType::Literal,
                },
                TokenBuf {
                    surface: " ".to_string(),
                    range_char: 2..3,
                    range_byte: 2..3,
                    token_type: TokenType::Punctuation,
                },
                TokenBuf {
                    surface: "ไทย".to_string(),
                    range_char: 3..6,
                    range_byte: 3..12,
                    token_type: TokenType::Known,
                },
            ]
        );
    }

    #[test]
    fn test_token_type_codes() {
        for code in 0..5u8 {
            let ty = TokenType::try_from(code).unwrap();
            assert_eq!(ty.code(), code);
            assert_eq!(ty.to_string().parse::<TokenType>().unwrap(), ty);
        }
        assert!(TokenType::try_from(5).is_err());
        assert!("word".parse::<TokenType>().is_err());
    }

    #[test]
    fn test_segments() {
        let text = "กา มา";
        let segments: Vec<_> = Segments::new(text, [2, 3, 5]).collect();
        assert_eq!(segments, vec!["กา", " ", "มา"]);

        let clipped: Vec<_> = Segments::new("abc", [2, 9]).collect();
        assert_eq!(clipped, vec!["ab", "c"]);

        let empty: Vec<_> = Segments::new("", [1]).collect();
        assert!(empty.is_empty());
    }
}
