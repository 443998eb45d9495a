//! 入力行の前処理。
//!
//! コーパスの各行を分割の前に整形します。見出し行の通過、空行とタイ文字を含まない行の除去、
//! 空白の正規化を個別に切り替えられます。
//! タブ区切りの行から1つの列を取り出す [`split_column`] も提供します。
use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::character::contains_thai;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 文書の区切りを表す見出し行の接頭辞
pub const HEADER_PREFIX: &str = "<source><";

/// 行が文書の区切りを表す見出し行かどうかを返します。
#[inline]
pub fn is_header_line(line: &str) -> bool {
    line.starts_with(HEADER_PREFIX)
}

/// 1行に対する前処理の結果
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cleaned<'a> {
    /// 見出し行。そのまま出力されます。
    Header(&'a str),
    /// 空行。`kept` が `false` の場合は出力されません。
    Blank { kept: bool },
    /// タイ文字を含まないため除去された行
    NonThai,
    /// 出力される行
    Kept(Cow<'a, str>),
}

impl Cleaned<'_> {
    /// 出力する文字列を返します。除去された行の場合は `None` です。
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Header(line) => Some(line),
            Self::Blank { kept: true } => Some(""),
            Self::Blank { kept: false } | Self::NonThai => None,
            Self::Kept(line) => Some(line),
        }
    }
}

/// 前処理の集計
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanSummary {
    /// 入力行数
    pub lines: usize,
    /// 見出し行の数
    pub headers: usize,
    /// 空行の数(除去されたものを含む)
    pub blank: usize,
    /// タイ文字を含まないため除去された行の数
    pub non_thai: usize,
    /// 出力された行の数
    pub kept: usize,
}

impl CleanSummary {
    /// 1行分の結果を集計に加えます。
    pub fn record(&mut self, cleaned: &Cleaned<'_>) {
        self.lines += 1;
        match cleaned {
            Cleaned::Header(_) => self.headers += 1,
            Cleaned::Blank { .. } => self.blank += 1,
            Cleaned::NonThai => self.non_thai += 1,
            Cleaned::Kept(_) => {}
        }
        if cleaned.text().is_some() {
            self.kept += 1;
        }
    }
}

impl fmt::Display for CleanSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "lines={} headers={} blank={} non_thai={} kept={}",
            self.lines, self.headers, self.blank, self.non_thai, self.kept
        )
    }
}

/// タブ区切りの行を、対象の列とその前後に分けたもの
///
/// `head` は対象の列の直前のタブまでを、`tail` は直後のタブからを含むため、
/// `head`、置き換えた列、`tail` をこの順に連結すると元の形式の行になります。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fields<'a> {
    /// 対象の列より前の部分
    pub head: &'a str,
    /// 対象の列
    pub field: &'a str,
    /// 対象の列より後の部分
    pub tail: &'a str,
}

impl<'a> Fields<'a> {
    /// 行全体を対象の列とします。
    pub const fn whole(line: &'a str) -> Self {
        Self {
            head: "",
            field: line,
            tail: "",
        }
    }
}

/// タブ区切りの行から `column` 番目(0始まり)の列を取り出します。
///
/// # 戻り値
///
/// 行の列数が足りない場合は `None` を返します。
///
/// # 例
///
/// ```
/// use lexto::clean::split_column;
///
/// let fields = split_column("42\tภาษาไทย\tnote", 1).unwrap();
/// assert_eq!(fields.head, "42\t");
/// assert_eq!(fields.field, "ภาษาไทย");
/// assert_eq!(fields.tail, "\tnote");
/// assert!(split_column("42", 1).is_none());
/// ```
pub fn split_column(line: &str, column: usize) -> Option<Fields<'_>> {
    let mut start = 0;
    for _ in 0..column {
        start += line[start..].find('\t')? + 1;
    }
    let end = line[start..].find('\t').map_or(line.len(), |i| start + i);
    Some(Fields {
        head: &line[..start],
        field: &line[start..end],
        tail: &line[end..],
    })
}

/// 入力行の前処理を行う構造体
///
/// すべての行は前後の空白が取り除かれます。その他の処理はビルダーメソッドで有効にします。
///
/// # 例
///
/// ```
/// use lexto::clean::LineCleaner;
///
/// let cleaner = LineCleaner::new()
///     .filter_blank(true)
///     .filter_non_thai(true)
///     .normalize_whitespace(true);
///
/// let (lines, summary) = cleaner.clean_lines(["  ภาษา \t ไทย ", "", "english only"]);
/// assert_eq!(lines, vec!["ภาษา ไทย"]);
/// assert_eq!(summary.kept, 1);
/// assert_eq!(summary.non_thai, 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LineCleaner {
    skip_headers: bool,
    filter_blank: bool,
    filter_non_thai: bool,
    normalize_whitespace: bool,
}

impl LineCleaner {
    /// すべての処理が無効な前処理器を作成します。
    pub const fn new() -> Self {
        Self {
            skip_headers: false,
            filter_blank: false,
            filter_non_thai: false,
            normalize_whitespace: false,
        }
    }

    /// [`HEADER_PREFIX`] で始まる行を、他の処理を行わずに出力するかどうかを設定します。
    pub const fn skip_headers(mut self, yes: bool) -> Self {
        self.skip_headers = yes;
        self
    }

    /// 空行を除去するかどうかを設定します。
    pub const fn filter_blank(mut self, yes: bool) -> Self {
        self.filter_blank = yes;
        self
    }

    /// タイ文字を含まない行を除去するかどうかを設定します。
    pub const fn filter_non_thai(mut self, yes: bool) -> Self {
        self.filter_non_thai = yes;
        self
    }

    /// 連続する空白を1つの半角スペースに置き換えるかどうかを設定します。
    pub const fn normalize_whitespace(mut self, yes: bool) -> Self {
        self.normalize_whitespace = yes;
        self
    }

    /// 1行を前処理します。
    pub fn clean<'a>(&self, line: &'a str) -> Cleaned<'a> {
        let line = line.trim();
        if self.skip_headers && is_header_line(line) {
            return Cleaned::Header(line);
        }
        if line.is_empty() {
            return Cleaned::Blank {
                kept: !self.filter_blank,
            };
        }
        if self.filter_non_thai && !contains_thai(line) {
            return Cleaned::NonThai;
        }
        if self.normalize_whitespace {
            Cleaned::Kept(WHITESPACE.replace_all(line, " "))
        } else {
            Cleaned::Kept(Cow::Borrowed(line))
        }
    }

    /// 複数の行を前処理し、出力される行と集計を返します。
    pub fn clean_lines<I, S>(&self, lines: I) -> (Vec<String>, CleanSummary)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut kept = vec![];
        let mut summary = CleanSummary::default();
        for line in lines {
            let cleaned = self.clean(line.as_ref());
            summary.record(&cleaned);
            if let Some(text) = cleaned.text() {
                kept.push(text.to_string());
            }
        }
        (kept, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_only_trims() {
        let cleaner = LineCleaner::new();
        assert_eq!(cleaner.clean("  a  b "), Cleaned::Kept(Cow::Borrowed("a  b")));
        assert_eq!(cleaner.clean("   "), Cleaned::Blank { kept: true });
        assert_eq!(cleaner.clean("   ").text(), Some(""));
    }

    #[test]
    fn test_headers_pass_through() {
        let cleaner = LineCleaner::new()
            .skip_headers(true)
            .filter_non_thai(true)
            .normalize_whitespace(true);
        let header = "<source><date>2010</date>  </source>";
        assert_eq!(cleaner.clean(header), Cleaned::Header(header));

        let no_skip = cleaner.skip_headers(false);
        assert_eq!(no_skip.clean(header), Cleaned::NonThai);
    }

    #[test]
    fn test_split_column() {
        let line = "a\tภาษาไทย\tb\tc";
        assert_eq!(split_column(line, 0).unwrap().field, "a");
        let fields = split_column(line, 1).unwrap();
        assert_eq!(
            fields,
            Fields {
                head: "a\t",
                field: "ภาษาไทย",
                tail: "\tb\tc",
            }
        );
        assert_eq!(split_column(line, 3).unwrap().tail, "");
        assert!(split_column(line, 4).is_none());

        let fields = split_column("a\t", 1).unwrap();
        assert_eq!(fields.field, "");
        assert_eq!(fields.tail, "");

        assert_eq!(split_column("ไทย", 0), Some(Fields::whole("ไทย")));
    }

    #[test]
    fn test_summary_display() {
        let summary = CleanSummary {
            lines: 4,
            headers: 1,
            blank: 1,
            non_thai: 0,
            kept: 3,
        };
        assert_eq!(
            summary.to_string(),
            "lines=4 headers=1 blank=1 non_thai=0 kept=3"
        );
    }

    #[test]
    fn test_summary() {
        let cleaner = LineCleaner::new()
            .skip_headers(true)
            .filter_blank(true)
            .filter_non_thai(true)
            .normalize_whitespace(true);
        let input = [
            "<source><name>x</name></source>",
            "ภาษา\u{3000}ไทย",
            "",
            "abc",
            "  \t",
            "ไทย   ๑๒๓",
        ];
        let (lines, summary) = cleaner.clean_lines(input);
        assert_eq!(
            lines,
            vec!["<source><name>x</name></source>", "ภาษา ไทย", "ไทย ๑๒๓"]
        );
        assert_eq!(
            summary,
            CleanSummary {
                lines: 6,
                headers: 1,
                blank: 2,
                non_thai: 1,
                kept: 3,
            }
        );
    }
}
