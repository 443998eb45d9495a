//! # LexTo
//!
//! LexToは、辞書に基づく最長一致法によってタイ語テキストを単語に分割するライブラリです。
//!
//! ## 概要
//!
//! 分かち書きされていないスクリプト文字列を、文字単位のトライに格納した単語辞書と
//! 先読みによる境界判定を用いて分割します。テキスト中のラテン文字列、数字列、記号は
//! 文字種の表に従って辞書を引かずに切り出します。
//!
//! ## 主な機能
//!
//! - **最長一致による分割**: 後続の文字列が単語として始まりうる境界のうち最長のものを選択
//! - **曖昧性の検出**: 有効な境界が複数ある場合はトークンを曖昧語として区別
//! - **結合記号の吸収**: 単独で立たない母音記号・声調記号を直前のトークンへ結合
//! - **行区切りの導出**: 括弧や引用符の範囲を保ったまま区切り位置を選択
//! - **辞書のコンパイル**: rkyvとZstandardによる単語辞書のバイナリ化
//!
//! ## 使用例
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use lexto::{Dictionary, Tokenizer, TokenType};
//!
//! let words = "กา\nกาม\nมา\nา\n";
//! let dict = Dictionary::from_reader(words.as_bytes())?;
//!
//! let tokenizer = Tokenizer::new(dict);
//! let mut worker = tokenizer.new_worker();
//!
//! worker.reset_sentence("มา 2 กามา");
//! worker.tokenize();
//! assert_eq!(worker.num_tokens(), 6);
//!
//! let t0 = worker.token(0);
//! assert_eq!(t0.surface(), "มา");
//! assert_eq!(t0.range_char(), 0..2);
//! assert_eq!(t0.range_byte(), 0..6);
//! assert_eq!(t0.token_type(), TokenType::Known);
//!
//! // "กา" and "กาม" are both followed by a dictionary word.
//! let t4 = worker.token(4);
//! assert_eq!(t4.surface(), "กาม");
//! assert_eq!(t4.token_type(), TokenType::Ambiguous);
//! # Ok(())
//! # }
//! ```

/// 文字種の定義
pub mod character;

/// 入力行の前処理
pub mod clean;

/// 単語辞書
pub mod dictionary;

/// エラー型の定義
pub mod errors;

/// 文の内部表現
mod sentence;

/// トークン型の定義
pub mod token;

/// トークナイザーの実装
pub mod tokenizer;


// Re-exports
pub use dictionary::{Dictionary, Match};
pub use errors::LexToError;
pub use token::{Segments, TokenType};
pub use tokenizer::{TokenSequence, Tokenizer};

/// このライブラリのバージョン番号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
