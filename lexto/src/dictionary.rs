//! 分割に使用する単語辞書のモジュール。
//!
//! このモジュールは、単語リストの読み込みと、文字単位のトライによる検索を提供します。
//! 主な機能として以下を提供します:
//!
//! - 1行1語の単語リストからの構築と、複数リストのマージ
//! - 完全一致・接頭辞一致の検索
//! - rkyvによるコンパイル済み辞書の書き出しと読み込み
//! - Zstandard圧縮されたコンパイル済み辞書の読み込み
//!
//! # 辞書の読み込み方法
//!
//! - [`Dictionary::from_reader`]: 単語リストのリーダーから構築する
//! - [`Dictionary::from_path`]: 単語リストのファイルから構築する
//! - [`Dictionary::read`]: コンパイル済み辞書を読み込む
//! - [`Dictionary::from_zstd`]: Zstandard圧縮されたコンパイル済み辞書を読み込む
//! - [`Dictionary::load`]: 形式を判別して読み込む
//! - [`Dictionary::from_paths_lenient`]: 失敗を警告として扱いながら複数の辞書をマージする
pub(crate) mod trie;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use rkyv::rancor::Error;
use rkyv::util::AlignedVec;

use crate::dictionary::trie::{Trie, TrieImage};
use crate::errors::{LexToError, Result};

pub use crate::dictionary::trie::{Match, PrefixScan};

/// コンパイル済み辞書を識別するマジックバイト。
///
/// この定数のバージョンは辞書フォーマットのバージョンであり、
/// クレートのセマンティックバージョンとは独立しています。
pub const MODEL_MAGIC: &[u8] = b"LexToDictionaryRkyv 0.1\n";

/// Zstandardフレームのマジックバイト。
const ZSTD_MAGIC: &[u8] = &[0x28, 0xB5, 0x2F, 0xFD];

const MODEL_MAGIC_LEN: usize = MODEL_MAGIC.len();
const RKYV_ALIGNMENT: usize = 16;
const PADDING_LEN: usize = (RKYV_ALIGNMENT - (MODEL_MAGIC_LEN % RKYV_ALIGNMENT)) % RKYV_ALIGNMENT;

/// 分割に使用する単語辞書。
///
/// 構築(すべての挿入)が終わった後は読み取り専用として扱い、
/// `Arc` を通じて複数のトークナイザー間で共有できます。
///
/// # 例
///
/// ```
/// use lexto::dictionary::{Dictionary, Match};
///
/// let mut dict = Dictionary::new();
/// assert!(dict.insert("กา"));
/// assert!(!dict.insert("กา"));
/// assert_eq!(dict.query_str("กา"), Match::Word);
/// assert_eq!(dict.query_str("ก"), Match::Prefix);
/// assert_eq!(dict.query_str("ข"), Match::Absent);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    trie: Trie,
}

impl Dictionary {
    /// 空の辞書を作成します。
    pub fn new() -> Self {
        Self::default()
    }

    /// 単語を追加します。
    ///
    /// # 戻り値
    ///
    /// 新しく追加された場合は `true`、既に登録されていた場合は `false`。
    pub fn insert<S>(&mut self, word: S) -> bool
    where
        S: AsRef<str>,
    {
        let chars: Vec<char> = word.as_ref().chars().collect();
        self.trie.insert(&chars)
    }

    /// 文字列を検索します。
    ///
    /// 計算量は文字列長に比例し、メモリ確保を行いません。
    #[inline(always)]
    pub fn query(&self, s: &[char]) -> Match {
        self.trie.query(s)
    }

    /// 文字列スライスを検索します。
    pub fn query_str(&self, s: &str) -> Match {
        let chars: Vec<char> = s.chars().collect();
        self.trie.query(&chars)
    }

    /// 文字列が単語として登録されているかどうかを返します。
    pub fn contains_word(&self, word: &str) -> bool {
        self.query_str(word) == Match::Word
    }

    /// 文字列で始まる単語(文字列自体を含む)が存在するかどうかを返します。
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.query_str(prefix) != Match::Absent
    }

    /// `input` の接頭辞を短い順に検索するイテレータを返します。
    ///
    /// `input[..len]` の検索結果を `(len, Match)` として順に返し、
    /// 結果が [`Match::Absent`] になった時点で終了します。
    ///
    /// ```
    /// use lexto::dictionary::{Dictionary, Match};
    ///
    /// let mut dict = Dictionary::new();
    /// dict.insert("a");
    /// dict.insert("abc");
    ///
    /// let input: Vec<char> = "abcd".chars().collect();
    /// let scanned: Vec<_> = dict.prefix_scan(&input).collect();
    /// assert_eq!(scanned, vec![(1, Match::Word), (2, Match::Prefix), (3, Match::Word)]);
    /// ```
    #[inline(always)]
    pub fn prefix_scan<'a>(&'a self, input: &'a [char]) -> PrefixScan<'a> {
        self.trie.prefix_scan(input)
    }

    /// 登録されている単語数を返します。
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.trie.num_words()
    }

    /// 単語が1つも登録されていないかどうかを返します。
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.num_words() == 0
    }

    /// `prefix` で始まるすべての単語を返します。
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let chars: Vec<char> = prefix.chars().collect();
        self.trie.words_with_prefix(&chars)
    }

    /// 別の辞書のすべての単語をこの辞書に追加します。
    ///
    /// # 戻り値
    ///
    /// 新しく追加された単語数。
    pub fn merge(&mut self, other: &Dictionary) -> usize {
        other
            .words_with_prefix("")
            .iter()
            .filter(|w| self.insert(w))
            .count()
    }

    /// 単語リストのリーダーから辞書を構築します。
    ///
    /// 形式は1行1語です。各行の前後の空白は取り除かれ、空行は無視されます。
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合、またはUTF-8として不正な行がある場合に [`LexToError`] を返します。
    pub fn from_reader<R>(rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut dict = Self::new();
        dict.add_words_from_reader(rdr)?;
        Ok(dict)
    }

    /// 単語リストのリーダーから単語を追加します。
    ///
    /// 未知語リストなどの補助辞書を既存の辞書にマージする場合に使用します。
    ///
    /// # 戻り値
    ///
    /// 新しく追加された単語数。
    ///
    /// # エラー
    ///
    /// 読み込みに失敗した場合、またはUTF-8として不正な行がある場合に [`LexToError`] を返します。
    /// エラーが発生した時点までに読み込んだ単語は辞書に残ります。
    pub fn add_words_from_reader<R>(&mut self, rdr: R) -> Result<usize>
    where
        R: Read,
    {
        let mut rdr = BufReader::new(rdr);
        let mut buf = vec![];
        let mut line_no = 0;
        let mut num_added = 0;
        let mut num_lines = 0;

        loop {
            buf.clear();
            if rdr.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let line = std::str::from_utf8(&buf).map_err(|e| {
                LexToError::invalid_format("word_list", format!("line {line_no}: {e}"))
            })?;
            let line = if line_no == 1 {
                line.trim_start_matches('\u{FEFF}')
            } else {
                line
            };
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            num_lines += 1;
            if self.insert(word) {
                num_added += 1;
            }
        }

        log::debug!(
            "[lexto] read {} words ({} new, {} total)",
            num_lines,
            num_added,
            self.num_words()
        );
        Ok(num_added)
    }

    /// 単語リストのファイルから辞書を構築します。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合や内容が不正な場合に [`LexToError`] を返します。
    pub fn from_path<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let mut dict = Self::new();
        dict.add_words_from_path(path)?;
        Ok(dict)
    }

    /// 単語リストのファイルから単語を追加します。
    ///
    /// # 戻り値
    ///
    /// 新しく追加された単語数。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合や内容が不正な場合に [`LexToError`] を返します。
    pub fn add_words_from_path<P>(&mut self, path: P) -> Result<usize>
    where
        P: AsRef<Path>,
    {
        let file = open_file(path.as_ref())?;
        self.add_words_from_reader(file)
    }

    /// 辞書を `rkyv` フォーマットでライターにシリアライズします。
    ///
    /// 出力は [`MODEL_MAGIC`] とアライメント用のパディングに続いてアーカイブ本体が並びます。
    /// [`Dictionary::read`] で読み込むことができます。
    ///
    /// # エラー
    ///
    /// 書き込みに失敗した場合、または `rkyv` シリアライゼーションに失敗した場合にエラーを返します。
    pub fn write<W>(&self, mut wtr: W) -> Result<()>
    where
        W: Write,
    {
        let image = self.trie.to_image()?;
        let bytes = rkyv::to_bytes::<Error>(&image).map_err(|e| {
            LexToError::invalid_state("rkyv serialization failed".to_string(), e.to_string())
        })?;

        wtr.write_all(MODEL_MAGIC)?;
        wtr.write_all(&[0xFF; PADDING_LEN])?;
        wtr.write_all(&bytes)?;
        Ok(())
    }

    /// コンパイル済み辞書をリーダーから読み込みます。
    ///
    /// # エラー
    ///
    /// この関数は以下の場合にエラーを返します:
    /// - データを読み込めない場合。
    /// - マジックナンバーが一致しない場合。
    /// - アーカイブの検証に失敗した場合(破損したファイルなど)。
    pub fn read<R>(mut rdr: R) -> Result<Self>
    where
        R: Read,
    {
        let mut magic = [0; MODEL_MAGIC_LEN];
        rdr.read_exact(&mut magic)?;
        if magic != MODEL_MAGIC {
            return Err(LexToError::invalid_argument(
                "rdr",
                "The magic number of the input dictionary mismatches.",
            ));
        }

        let mut padding_buf = [0; PADDING_LEN];
        rdr.read_exact(&mut padding_buf)?;

        let mut buffer = vec![];
        rdr.read_to_end(&mut buffer)?;

        let mut aligned_bytes = AlignedVec::<RKYV_ALIGNMENT>::with_capacity(buffer.len());
        aligned_bytes.extend_from_slice(&buffer);

        let image = rkyv::from_bytes::<TrieImage, Error>(&aligned_bytes).map_err(|e| {
            LexToError::invalid_state(
                "rkyv validation failed. The dictionary file may be corrupted or incompatible."
                    .to_string(),
                e.to_string(),
            )
        })?;

        Ok(Self {
            trie: Trie::from_image(image)?,
        })
    }

    /// Zstandard圧縮されたコンパイル済み辞書をファイルから読み込みます。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合、展開に失敗した場合、または内容が不正な場合にエラーを返します。
    pub fn from_zstd<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let file = open_file(path.as_ref())?;
        let decoder = zstd::Decoder::new(file)?;
        Self::read(decoder)
    }

    /// ファイルの形式を判別して辞書を読み込みます。
    ///
    /// Zstandard圧縮されたコンパイル済み辞書、非圧縮のコンパイル済み辞書、
    /// 単語リストの順に判別します。
    ///
    /// # エラー
    ///
    /// ファイルを開けない場合や内容が不正な場合に [`LexToError`] を返します。
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if path.is_dir() {
            return Err(LexToError::PathIsDirectory(path.to_path_buf()));
        }
        let bytes = fs::read(path).map_err(|e| {
            LexToError::invalid_argument(
                "path",
                format!("Failed to open dictionary file {}: {}", path.display(), e),
            )
        })?;

        if bytes.starts_with(ZSTD_MAGIC) {
            let decoded = zstd::stream::decode_all(bytes.as_slice())?;
            Self::read(decoded.as_slice())
        } else if bytes.starts_with(MODEL_MAGIC) {
            Self::read(bytes.as_slice())
        } else {
            Self::from_reader(bytes.as_slice())
        }
    }

    /// 複数の辞書ファイルを読み込んでマージします。
    ///
    /// 読み込みに失敗したファイルは警告としてログに出力したうえで読み飛ばし、
    /// 発生したエラーを辞書と一緒に返します。すべてのファイルが失敗した場合は空の辞書になり、
    /// そのトークナイザーはすべてのスクリプト文字を未知語として扱います。
    ///
    /// # 引数
    ///
    /// * `paths` - 読み込むファイルのパス。先頭から順にマージされます。
    ///
    /// # 戻り値
    ///
    /// マージされた辞書と、読み込み中に発生したエラーのリスト。
    pub fn from_paths_lenient<I, P>(paths: I) -> (Self, Vec<LexToError>)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut dict = Self::new();
        let mut errors = vec![];
        for path in paths {
            let path = path.as_ref();
            match Self::load(path) {
                Ok(loaded) if dict.is_empty() => dict = loaded,
                Ok(loaded) => {
                    dict.merge(&loaded);
                }
                Err(e) => {
                    log::warn!(
                        "[lexto] Skipped dictionary {}: {}",
                        path.display(),
                        e
                    );
                    errors.push(e);
                }
            }
        }
        (dict, errors)
    }
}

fn open_file(path: &Path) -> Result<File> {
    if path.is_dir() {
        return Err(LexToError::PathIsDirectory(path.to_path_buf()));
    }
    File::open(path).map_err(|e| {
        LexToError::invalid_argument(
            "path",
            format!("Failed to open dictionary file {}: {}", path.display(), e),
        )
    })
}
