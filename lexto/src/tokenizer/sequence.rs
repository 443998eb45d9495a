//! 分割結果のトークン列。
//!
//! トークンは終了位置(文字単位)と種別の組で表し、開始位置は直前のトークンの
//! 終了位置(先頭は0)から決まります。変更は末尾への追加と、
//! 末尾のトークンの書き換え([`TokenSequence::extend_last`])だけです。
use std::ops::Range;

use crate::token::TokenType;

/// 1つの入力文に対するトークン列
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<(usize, TokenType)>,
}

impl TokenSequence {
    /// 空のトークン列を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// トークンを末尾に追加します。
    ///
    /// # 引数
    ///
    /// * `end` - 文字単位の終了位置。直前のトークンの終了位置より大きい必要があります。
    /// * `token_type` - トークンの種別
    #[inline(always)]
    pub fn push(&mut self, end: usize, token_type: TokenType) {
        debug_assert!(self.last_end() < end || self.is_empty());
        self.tokens.push((end, token_type));
    }

    /// 末尾のトークンを `end` まで伸ばし、種別を書き換えます。
    ///
    /// 過去のトークンのうち書き換えが許されるのは末尾の1つだけです。
    /// トークンが存在しない場合は何もしません。
    #[inline(always)]
    pub fn extend_last(&mut self, end: usize, token_type: TokenType) {
        debug_assert!(!self.tokens.is_empty(), "no token to extend");
        if let Some(last) = self.tokens.last_mut() {
            debug_assert!(last.0 < end);
            *last = (end, token_type);
        }
    }

    /// 末尾のトークンの種別を返します。
    #[inline(always)]
    pub fn last_type(&self) -> Option<TokenType> {
        self.tokens.last().map(|&(_, t)| t)
    }

    /// 末尾のトークンの終了位置を返します。トークンがない場合は0です。
    #[inline(always)]
    pub fn last_end(&self) -> usize {
        self.tokens.last().map_or(0, |&(e, _)| e)
    }

    /// トークン数を返します。
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// トークンが1つもないかどうかを返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `i` 番目のトークンの終了位置を返します。
    #[inline(always)]
    pub fn end(&self, i: usize) -> usize {
        self.tokens[i].0
    }

    /// `i` 番目のトークンの種別を返します。
    #[inline(always)]
    pub fn token_type(&self, i: usize) -> TokenType {
        self.tokens[i].1
    }

    /// `i` 番目のトークンの文字単位の範囲を返します。
    #[inline(always)]
    pub fn range(&self, i: usize) -> Range<usize> {
        let start = if i == 0 { 0 } else { self.tokens[i - 1].0 };
        start..self.tokens[i].0
    }

    /// 終了位置を先頭から順に返すイテレータを返します。
    pub fn ends(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.tokens.iter().map(|&(e, _)| e)
    }

    /// 種別を先頭から順に返すイテレータを返します。
    pub fn types(&self) -> impl ExactSizeIterator<Item = TokenType> + '_ {
        self.tokens.iter().map(|&(_, t)| t)
    }

    /// `(終了位置, 種別)` の組を先頭から順に返すイテレータを返します。
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, TokenType)> + '_ {
        self.tokens.iter().copied()
    }

    /// すべてのトークンを削除します。
    #[inline(always)]
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}
