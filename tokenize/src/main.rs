//! タイ語の単語分割を実行するユーティリティ
//!
//! このバイナリは、標準入力から読み込んだテキストを単語分割し、
//! 指定された出力形式（words、lines、detail）で結果を出力します。
//! タブ区切りの入力では、指定した列だけを分割して他の列はそのまま書き戻します。

use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;

use lexto::clean::{self, CleanSummary, Cleaned, Fields, LineCleaner};
use lexto::tokenizer::worker::Worker;
use lexto::{Dictionary, LexToError, Tokenizer};

use clap::Parser;

/// 出力モード
#[derive(Clone, Copy, Debug)]
enum OutputMode {
    Words,
    Lines,
    Detail,
}

/// `OutputMode` の `FromStr` 実装
impl FromStr for OutputMode {
    type Err = &'static str;

    /// 文字列から出力モードをパースする
    ///
    /// # 引数
    ///
    /// * `mode` - パース対象の文字列（"words"、"lines"、"detail"のいずれか）
    ///
    /// # 戻り値
    ///
    /// パースに成功した場合は対応する `OutputMode`、失敗した場合はエラーメッセージ
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "words" => Ok(Self::Words),
            "lines" => Ok(Self::Lines),
            "detail" => Ok(Self::Detail),
            _ => Err("Could not parse a mode"),
        }
    }
}

/// コマンドライン引数
#[derive(Parser, Debug)]
#[clap(name = "tokenize", about = "Segments Thai text into words")]
struct Args {
    /// Dictionary (word list, compiled, or compiled in zstd).
    #[clap(short = 'i', long)]
    dict: PathBuf,

    /// Additional word list merged into the dictionary.
    #[clap(short = 'u', long)]
    unknown: Option<PathBuf>,

    /// Output mode. Choices are words, lines, and detail.
    #[clap(short = 'O', long, default_value = "words")]
    output_mode: OutputMode,

    /// Delimiter placed between words or lines.
    #[clap(short = 'd', long, default_value = "|")]
    delimiter: String,

    /// Lookahead window (in tokens) for matching a closing quote or parenthesis.
    #[clap(short = 'w', long)]
    window: Option<usize>,

    /// Tokenizes only the n-th tab separated column (1 == first column).
    /// Lines with fewer columns are written unchanged.
    #[clap(short = 'c', long)]
    column: Option<NonZeroUsize>,

    /// Writes lines starting with '<source><' unchanged.
    #[clap(long)]
    skip_headers: bool,

    /// Drops blank lines.
    #[clap(long)]
    filter_blank: bool,

    /// Drops lines without any Thai character.
    #[clap(long)]
    filter_non_thai: bool,

    /// Collapses white spaces into a single space.
    #[clap(long)]
    normalize_whitespace: bool,

    /// Enables all of the cleaning options above.
    #[clap(long)]
    clean: bool,

    /// Prints counters to stderr at the end.
    #[clap(long)]
    stats: bool,
}

/// 実行中に発生する可能性のあるエラー
#[derive(Debug, thiserror::Error)]
enum TokenizeError {
    /// 入出力エラー
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 単語分割器の設定エラー
    #[error(transparent)]
    LexTo(#[from] LexToError),
}

/// 1行ずつ前処理と分割を行い、結果を書き出す
struct LineTokenizer {
    worker: Worker,
    cleaner: LineCleaner,
    mode: OutputMode,
    delimiter: String,
    /// 0始まりの列番号
    column: Option<usize>,
    summary: CleanSummary,
    num_tokens: usize,
    num_unsplit: usize,
}

impl LineTokenizer {
    fn new(worker: Worker, cleaner: LineCleaner, mode: OutputMode, delimiter: String) -> Self {
        Self {
            worker,
            cleaner,
            mode,
            delimiter,
            column: None,
            summary: CleanSummary::default(),
            num_tokens: 0,
            num_unsplit: 0,
        }
    }

    fn column(mut self, column: Option<usize>) -> Self {
        self.column = column;
        self
    }

    /// 1行を処理します。
    ///
    /// 見出し行はそのまま、除去された行は何も書き出しません。
    /// 対象の列がない行はそのまま書き出します。
    fn process<W>(&mut self, line: &str, out: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        let fields = match self.column {
            Some(column) => match clean::split_column(line, column) {
                Some(fields) => fields,
                None => {
                    self.num_unsplit += 1;
                    return writeln!(out, "{line}");
                }
            },
            None => Fields::whole(line),
        };

        let cleaned = self.cleaner.clean(fields.field);
        self.summary.record(&cleaned);
        let text = match &cleaned {
            Cleaned::Header(_) => return writeln!(out, "{line}"),
            cleaned => match cleaned.text() {
                Some(text) => text,
                None => return Ok(()),
            },
        };

        self.worker.reset_sentence(text);
        out.write_all(fields.head.as_bytes())?;
        match self.mode {
            OutputMode::Words => {
                self.worker.tokenize();
                for (i, t) in self.worker.token_iter().enumerate() {
                    if i != 0 {
                        out.write_all(self.delimiter.as_bytes())?;
                    }
                    out.write_all(t.surface().as_bytes())?;
                }
            }
            OutputMode::Lines => {
                self.worker.tokenize_lines();
                for (i, l) in self.worker.line_iter().enumerate() {
                    if i != 0 {
                        out.write_all(self.delimiter.as_bytes())?;
                    }
                    out.write_all(l.surface().as_bytes())?;
                }
            }
            OutputMode::Detail => {
                self.worker.tokenize();
                for t in self.worker.token_iter() {
                    let range = t.range_char();
                    writeln!(
                        out,
                        "{}\t{}\t{}..{}",
                        t.surface(),
                        t.token_type(),
                        range.start,
                        range.end,
                    )?;
                }
                out.write_all(b"EOS")?;
            }
        }
        out.write_all(fields.tail.as_bytes())?;
        out.write_all(b"\n")?;
        self.num_tokens += self.worker.num_tokens();
        Ok(())
    }

    fn report(&self) {
        eprintln!("{}", self.summary);
        eprintln!("tokens={}", self.num_tokens);
        if self.column.is_some() {
            eprintln!("lines without the column={}", self.num_unsplit);
        }
    }
}

/// メイン関数
///
/// 辞書をロードし、標準入力から読み込んだテキストを単語分割して、
/// 指定された形式で結果を標準出力に出力します。
///
/// 読み込めなかった辞書ファイルは警告を出して読み飛ばします。
fn main() -> Result<(), TokenizeError> {
    let args = Args::parse();

    eprintln!("Loading the dictionary...");
    let paths = std::iter::once(&args.dict).chain(args.unknown.as_ref());
    let (dict, errors) = Dictionary::from_paths_lenient(paths);
    for e in &errors {
        eprintln!("Warning: {e}");
    }
    eprintln!("{} words", dict.num_words());

    let mut tokenizer = Tokenizer::new(dict);
    if let Some(window) = args.window {
        tokenizer = tokenizer.window_size(window)?;
    }
    let cleaner = LineCleaner::new()
        .skip_headers(args.clean || args.skip_headers)
        .filter_blank(args.clean || args.filter_blank)
        .filter_non_thai(args.clean || args.filter_non_thai)
        .normalize_whitespace(args.clean || args.normalize_whitespace);
    let mut line_tokenizer = LineTokenizer::new(
        tokenizer.new_worker(),
        cleaner,
        args.output_mode,
        args.delimiter,
    )
    .column(args.column.map(|c| c.get() - 1));

    eprintln!("Ready to tokenize");

    let is_tty = io::stdout().is_terminal();

    let out = io::stdout();
    let mut out = BufWriter::new(out.lock());
    for line in io::stdin().lock().lines() {
        line_tokenizer.process(&line?, &mut out)?;
        if is_tty {
            out.flush()?;
        }
    }
    out.flush()?;

    if args.stats {
        line_tokenizer.report();
    }

    Ok(())
}
