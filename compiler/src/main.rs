//! LexTo 辞書コンパイラのメインエントリーポイント
//!
//! 単語リストからコンパイル済み辞書を構築するサブコマンドと、
//! 辞書の内容を確認するサブコマンドを提供します。

mod build;
mod dump;

use clap::Parser;
use thiserror::Error;

use crate::{build::BuildError, dump::DumpError};

/// コマンドライン引数の構造体
#[derive(Parser, Debug)]
#[clap(name = "compile", version)]
struct Cli {
    /// 実行するサブコマンド
    #[clap(subcommand)]
    command: Command,
}

/// 利用可能なサブコマンド
#[derive(Parser, Debug)]
enum Command {
    /// 単語リストからバイナリ辞書を構築します
    ///
    /// 複数の単語リストを順にマージし、zstd圧縮したバイナリ形式の辞書を生成します。
    Build(build::Args),

    /// 辞書に登録された単語を一覧表示します
    Dump(dump::Args),
}

/// コンパイラの実行中に発生する可能性のあるエラー
#[derive(Debug, Error)]
pub enum CompileError {
    /// 辞書ビルド中のエラー
    #[error(transparent)]
    BuildError(#[from] BuildError),
    /// 単語一覧の出力中のエラー
    #[error(transparent)]
    DumpError(#[from] DumpError),
}

fn main() -> Result<(), CompileError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => Ok(build::run(args)?),
        Command::Dump(args) => Ok(dump::run(args)?),
    }
}
