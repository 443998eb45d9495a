//! 辞書の単語一覧を出力するモジュール

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use lexto::{Dictionary, LexToError};

use clap::Parser;

/// ダンプコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "dump", about = "A program to list the words stored in a dictionary.")]
pub struct Args {
    /// Dictionary file (word list, compiled, or compiled in zstd).
    #[clap(short = 'i', long)]
    sysdic_in: PathBuf,

    /// Lists only the words beginning with this prefix.
    #[clap(short = 'p', long, default_value = "")]
    prefix: String,
}

/// ダンプ処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 辞書読み込みエラー
    #[error("Dictionary loading failed: {0}")]
    LexTo(#[from] LexToError),
}

/// ダンプコマンドを実行する
///
/// 単語を1行ずつ標準出力に書き出します。
pub fn run(args: Args) -> Result<(), DumpError> {
    let dict = Dictionary::load(&args.sysdic_in)?;

    let out = io::stdout();
    let mut out = BufWriter::new(out.lock());
    for word in dict.words_with_prefix(&args.prefix) {
        writeln!(out, "{word}")?;
    }
    out.flush()?;
    Ok(())
}
