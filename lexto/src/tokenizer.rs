//! 最長一致に基づくトークナイザー。
//!
//! このモジュールは、分かち書きされていないスクリプト文字列と、その中に混在する
//! ラテン文字列・数字列・記号を分割するメイントークナイザーを提供します。
//!
//! # 主要な構造体
//!
//! - [`Tokenizer`]: 辞書と設定を保持するトークナイザー
//! - [`Worker`]: 実際の分割処理を行うワーカー。内部バッファを再利用します
//! - [`TokenSequence`]: 分割結果の終了位置と種別の列
//!
//! # 例
//!
//! ```
//! use lexto::{Dictionary, Tokenizer};
//!
//! let dict = Dictionary::from_reader("ภาษา\nไทย\n".as_bytes())?;
//! let tokenizer = Tokenizer::new(dict);
//! let mut worker = tokenizer.new_worker();
//!
//! worker.reset_sentence("ภาษาไทย");
//! worker.tokenize();
//!
//! for i in 0..worker.num_tokens() {
//!     let token = worker.token(i);
//!     println!("{}\t{}", token.surface(), token.token_type());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
mod boundary;
mod line;
mod parser;
pub mod sequence;
pub mod worker;

use std::sync::Arc;

use crate::character::CharClass;
use crate::dictionary::Dictionary;
use crate::errors::{LexToError, Result};
use crate::sentence::Sentence;
use crate::token::{Segments, TokenType};
use crate::tokenizer::worker::Worker;

pub use crate::tokenizer::sequence::TokenSequence;

/// 括弧・引用符の終了記号を探すトークン数の既定値
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// 分割を行うトークナイザー。
///
/// 辞書データを保持し、複数の[`Worker`]インスタンスを生成して並列処理を行うことができます。
/// 辞書は構築後に読み取り専用として共有されます。
///
/// # フィールド
///
/// - `dict`: 分割に使用する辞書への参照
/// - `window_size`: 行区切りの導出で括弧・引用符の終了記号を探すトークン数
#[derive(Clone)]
pub struct Tokenizer {
    dict: Arc<Dictionary>,
    window_size: usize,
}

impl Tokenizer {
    /// 新しいトークナイザーを作成します。
    ///
    /// 辞書はトークナイザーに所有権が移動します。複数のトークナイザー間で辞書を共有する
    /// 必要がある場合は、[`Tokenizer::from_shared_dictionary`]を使用してください。
    pub fn new(dict: Dictionary) -> Self {
        Self::from_shared_dictionary(Arc::new(dict))
    }

    /// 共有された辞書から新しいトークナイザーを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use std::sync::Arc;
    /// use lexto::{Dictionary, Tokenizer};
    ///
    /// let dict = Arc::new(Dictionary::from_reader("ไทย\n".as_bytes())?);
    /// let tokenizer1 = Tokenizer::from_shared_dictionary(dict.clone());
    /// let tokenizer2 = Tokenizer::from_shared_dictionary(dict);
    /// assert_eq!(tokenizer1.words("ไทยไทย"), tokenizer2.words("ไทยไทย"));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_shared_dictionary(dict: Arc<Dictionary>) -> Self {
        Self {
            dict,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// 行区切りの導出で、括弧・引用符の終了記号を探すトークン数を指定します。
    ///
    /// 開始記号のトークンを含めて数えます。デフォルトは [`DEFAULT_WINDOW_SIZE`] です。
    ///
    /// # エラー
    ///
    /// `window_size` が2未満の場合、[`LexToError`]が返されます。
    pub fn window_size(mut self, window_size: usize) -> Result<Self> {
        if window_size < 2 {
            return Err(LexToError::invalid_argument(
                "window_size",
                "must be at least 2",
            ));
        }
        self.window_size = window_size;
        Ok(self)
    }

    /// 辞書への参照を取得します。
    #[inline(always)]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// 新しいワーカーを作成します。
    ///
    /// 各ワーカーは独立したバッファを保持するため、複数のワーカーを
    /// 並列に使用して同時に複数の文を分割できます。
    pub fn new_worker(&self) -> Worker {
        Worker::new(self.clone())
    }

    /// 文字列を分割し、トークン列を返します。
    ///
    /// 複数の文を続けて処理する場合は、バッファを再利用する [`Worker`] の使用を推奨します。
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        let mut worker = self.new_worker();
        worker.reset_sentence(text);
        worker.tokenize();
        worker.tokens
    }

    /// 文字列を分割し、行区切りとなる終了位置の列を返します。
    pub fn derive_line_breaks(&self, text: &str) -> Vec<usize> {
        let mut worker = self.new_worker();
        worker.reset_sentence(text);
        worker.tokenize_lines();
        worker.lines
    }

    /// 文字列を分割し、各トークンの部分文字列を返します。
    pub fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let seq = self.tokenize(text);
        Segments::new(text, seq.ends()).collect()
    }

    /// 文字列を行区切りで分割し、各区間の部分文字列を返します。
    pub fn lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let breaks = self.derive_line_breaks(text);
        Segments::new(text, breaks).collect()
    }

    /// 解析済みの入力文を先頭から分割し、`seq` に書き込みます。
    ///
    /// ラテン文字列と数字列は最長の連続を1トークンとし、記号は1文字ずつトークンにします。
    /// スクリプト文字は最長一致の解析に委ねます。
    pub(crate) fn tokenize_sentence(&self, sent: &Sentence, seq: &mut TokenSequence) {
        seq.clear();
        let chars = sent.chars();
        let mut pos = 0;
        while pos < sent.len_char() {
            pos = match sent.char_class(pos) {
                CharClass::Latin | CharClass::Digit => {
                    let end = pos + sent.groupable(pos);
                    seq.push(end, TokenType::Literal);
                    end
                }
                CharClass::Punctuation => {
                    seq.push(pos + 1, TokenType::Punctuation);
                    pos + 1
                }
                CharClass::Script => parser::parse_at(&self.dict, chars, pos, seq),
            };
        }
    }

    /// 分割済みのトークン列から行区切りを導出し、`breaks` に書き込みます。
    pub(crate) fn line_breaks_into(
        &self,
        sent: &Sentence,
        seq: &TokenSequence,
        breaks: &mut Vec<usize>,
    ) {
        line::derive_line_breaks_into(sent.chars(), seq, self.window_size, breaks);
    }
}
