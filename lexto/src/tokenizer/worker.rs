//! 分割処理のためのルーチンを提供するモジュール。
//!
//! ワーカーは内部データ構造を保持し、再利用することで不要なメモリアロケーションを避けます。
use crate::sentence::Sentence;
use crate::token::{Line, LineIter, Token, TokenIter};
use crate::tokenizer::Tokenizer;
use crate::tokenizer::sequence::TokenSequence;

/// 分割処理のためのルーチンを提供する構造体。
///
/// 分割に使用される内部データ構造を保持し、それらを再利用することで
/// 不要なメモリ再割り当てを回避します。
///
/// # 例
///
/// ```
/// use lexto::{Dictionary, Tokenizer};
///
/// let tokenizer = Tokenizer::new(Dictionary::from_reader("กา\nมา\n".as_bytes())?);
/// let mut worker = tokenizer.new_worker();
///
/// for text in ["กามา", "มากา"] {
///     worker.reset_sentence(text);
///     worker.tokenize();
///     assert_eq!(worker.num_tokens(), 2);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Worker {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) sent: Sentence,
    pub(crate) tokens: TokenSequence,
    pub(crate) lines: Vec<usize>,
}

impl Worker {
    /// 新しいインスタンスを作成します。
    pub(crate) fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            sent: Sentence::new(),
            tokens: TokenSequence::new(),
            lines: vec![],
        }
    }

    /// 分割する入力文をリセットします。
    ///
    /// 新しい文を設定し、以前の結果をクリアします。
    ///
    /// # 引数
    ///
    /// * `input` - 分割する入力文字列
    pub fn reset_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.sent.clear();
        self.tokens.clear();
        self.lines.clear();
        let input = input.as_ref();
        if !input.is_empty() {
            self.sent.set_sentence(input);
            self.sent.compile();
        }
    }

    /// 設定された入力文を単語単位に分割します。
    ///
    /// 結果は内部状態に保存され、[`token_iter()`](Self::token_iter) や
    /// [`token()`](Self::token) でアクセスできます。
    pub fn tokenize(&mut self) {
        self.lines.clear();
        self.tokenizer.tokenize_sentence(&self.sent, &mut self.tokens);
    }

    /// 設定された入力文を分割し、さらに行区切りを導出します。
    ///
    /// 単語単位の結果もあわせて更新されます。
    pub fn tokenize_lines(&mut self) {
        self.tokenize();
        self.tokenizer
            .line_breaks_into(&self.sent, &self.tokens, &mut self.lines);
    }

    /// 分割結果のトークン数を取得します。
    #[inline(always)]
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// `i`番目のトークンを取得します。
    ///
    /// # パニック
    ///
    /// `i` がトークン数以上の場合、パニックします。
    #[inline(always)]
    pub fn token(&self, i: usize) -> Token<'_> {
        assert!(i < self.num_tokens(), "token index out of range");
        Token::new(self, i)
    }

    /// 分割結果のイテレータを作成します。
    #[inline(always)]
    pub fn token_iter(&self) -> TokenIter<'_> {
        TokenIter::new(self)
    }

    /// 行区切りで分けられた区間の数を取得します。
    ///
    /// [`tokenize_lines()`](Self::tokenize_lines) を呼び出していない場合は0です。
    #[inline(always)]
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// `i`番目の区間を取得します。
    ///
    /// # パニック
    ///
    /// `i` が区間数以上の場合、パニックします。
    #[inline(always)]
    pub fn line(&self, i: usize) -> Line<'_> {
        assert!(i < self.num_lines(), "line index out of range");
        Line::new(self, i)
    }

    /// 区間のイテレータを作成します。
    #[inline(always)]
    pub fn line_iter(&self) -> LineIter<'_> {
        LineIter::new(self)
    }

    /// 各トークンの終了位置(文字単位)を返します。
    #[inline(always)]
    pub fn token_ends(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.tokens.ends()
    }

    /// 各区間の終了位置(文字単位)を返します。
    #[inline(always)]
    pub fn line_ends(&self) -> &[usize] {
        &self.lines
    }

    /// 分割結果のトークン列を返します。
    #[inline(always)]
    pub fn token_sequence(&self) -> &TokenSequence {
        &self.tokens
    }
}
