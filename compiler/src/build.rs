//! 辞書のビルドモジュール
//!
//! 1行1語の単語リストをマージし、Zstandard圧縮したコンパイル済み辞書を出力します。

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use lexto::{Dictionary, LexToError};

use clap::Parser;

/// ビルドコマンドの引数
#[derive(Parser, Debug)]
#[clap(name = "build", about = "A program to compile word lists into a dictionary.")]
pub struct Args {
    /// Word list files (one word per line). Later lists are merged into earlier ones.
    #[clap(short = 'i', long, required = true, num_args = 1..)]
    word_list_in: Vec<PathBuf>,

    /// File to which the binary dictionary is output (in zstd).
    #[clap(short = 'o', long)]
    sysdic_out: PathBuf,

    /// Compression level of zstd.
    #[clap(short = 'l', long, default_value = "19")]
    level: i32,
}

/// ビルド処理中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 辞書構築エラー
    #[error("Dictionary building failed: {0}")]
    LexTo(#[from] LexToError),
}

/// ビルドコマンドを実行する
///
/// # エラー
///
/// 単語リストの読み込みや辞書の書き出しに失敗した場合、`BuildError`を返します。
pub fn run(args: Args) -> Result<(), BuildError> {
    println!("Compiling the dictionary...");
    let dict = build_dictionary(&args.word_list_in)?;
    println!("{} words", dict.num_words());

    println!("Writing the dictionary...");
    let file = File::create(&args.sysdic_out)?;
    let mut encoder = zstd::Encoder::new(file, args.level)?;
    dict.write(&mut encoder)?;
    encoder.finish()?;

    println!("Successfully built the dictionary to {}", args.sysdic_out.display());
    Ok(())
}

/// 単語リストを順にマージして辞書を構築する
///
/// # エラー
///
/// いずれかのファイルの読み込みに失敗した場合、`BuildError`を返します。
pub fn build_dictionary<P>(word_lists: &[P]) -> Result<Dictionary, BuildError>
where
    P: AsRef<Path>,
{
    let mut dict = Dictionary::new();
    for path in word_lists {
        let path = path.as_ref();
        let added = dict.add_words_from_path(path)?;
        println!("  {}: {} new words", path.display(), added);
    }
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use tempfile::tempdir;

    #[test]
    fn test_run_writes_zstd_dictionary() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("lexitron.txt");
        let unknown = dir.path().join("unknown.txt");
        fs::write(&base, "กา\nกาม\n").unwrap();
        fs::write(&unknown, "กาม\nมา\n").unwrap();
        let out = dir.path().join("system.dic.zst");

        run(Args {
            word_list_in: vec![base, unknown],
            sysdic_out: out.clone(),
            level: 3,
        })
        .unwrap();

        let dict = Dictionary::from_zstd(&out).unwrap();
        assert_eq!(dict.num_words(), 3);
        assert!(dict.contains_word("มา"));
    }

    #[test]
    fn test_missing_word_list() {
        let dir = tempdir().unwrap();
        let err = build_dictionary(&[dir.path().join("missing.txt")]).unwrap_err();
        assert!(matches!(err, BuildError::LexTo(_)));
    }
}
