//! 文字種の定義
//!
//! このモジュールは、分割処理で参照する固定の文字集合を提供します。
//! すべての集合はコンパイル時に決まる定数であり、実行時に変更されることはありません。
//!
//! - 前依存記号: カーソル位置にある場合、直前の文字に結合する記号
//! - 後依存記号: 直後の文字に結合する記号
//! - 声調記号
//! - 節末記号 (ๆ, ฯ)

/// 文字を前依存記号として扱うかどうかを返します。
#[inline(always)]
pub const fn is_front_dependent(c: char) -> bool {
    matches!(
        c,
        '\u{0E30}'..='\u{0E39}' | '\u{0E45}' | '\u{0E47}' | '\u{0E4C}' | '\u{0E4D}'
    )
}

/// 文字を後依存記号として扱うかどうかを返します。
#[inline(always)]
pub const fn is_rear_dependent(c: char) -> bool {
    matches!(
        c,
        '\u{0E31}' | '\u{0E37}' | '\u{0E40}'..='\u{0E44}' | '\u{0E4D}'
    )
}

/// 声調記号かどうかを返します。
#[inline(always)]
pub const fn is_tone_mark(c: char) -> bool {
    matches!(c, '\u{0E48}'..='\u{0E4B}')
}

/// 節末記号かどうかを返します。
#[inline(always)]
pub const fn is_ending_mark(c: char) -> bool {
    matches!(c, '\u{0E46}' | '\u{0E2F}')
}

/// ASCIIのラテン文字かどうかを返します。
#[inline(always)]
pub const fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ASCII数字またはタイ数字(๐〜๙)かどうかを返します。
#[inline(always)]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '\u{0E50}'..='\u{0E59}')
}

/// 数字の連続を途切れさせない文字かどうかを返します。
///
/// 数字に加えて `,` と `.` を区切りとして含みます。
#[inline(always)]
pub const fn continues_digit_run(c: char) -> bool {
    is_digit(c) || c == ',' || c == '.'
}

/// 1文字単位のトークンとして扱う記号かどうかを返します。
///
/// `'~'` 以下のすべての文字(制御文字と空白を含む)、節末記号、左右の二重引用符が該当します。
/// ラテン文字と数字は先に判定されるため、実際にこの分類になるのはそれ以外の文字です。
#[inline(always)]
pub const fn is_punctuation(c: char) -> bool {
    c <= '~' || is_ending_mark(c) || matches!(c, '\u{201C}' | '\u{201D}')
}

/// 辞書を引かずに単語境界として認める文字かどうかを返します。
///
/// コードポイントが `'~'` 以下の文字は、そこから非スクリプトの連続が始まるとみなします。
/// タイ数字やASCII外のラテン文字などはこの閾値に含まれないため、辞書による先読みに回ります。
#[inline(always)]
pub const fn is_boundary_char(c: char) -> bool {
    is_punctuation(c)
}

/// タイ文字かどうかを返します。
///
/// U+0E01〜U+0E3A と U+0E40〜U+0E5B を対象とします。
#[inline(always)]
pub const fn is_thai(c: char) -> bool {
    matches!(c, '\u{0E01}'..='\u{0E3A}' | '\u{0E40}'..='\u{0E5B}')
}

/// 文字列にタイ文字が1文字以上含まれるかどうかを返します。
pub fn contains_thai(text: &str) -> bool {
    text.chars().any(is_thai)
}

/// 分割処理における文字の分類
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCIIのラテン文字
    Latin,
    /// ASCII数字またはタイ数字
    Digit,
    /// 1文字で1トークンとなる記号
    Punctuation,
    /// 辞書による分割の対象となる文字
    Script,
}

impl CharClass {
    /// 文字を分類します。
    ///
    /// 判定はラテン文字、数字、記号の順に行い、いずれにも該当しない文字は
    /// [`CharClass::Script`] になります。
    #[inline(always)]
    pub const fn of(c: char) -> Self {
        if is_latin(c) {
            Self::Latin
        } else if is_digit(c) {
            Self::Digit
        } else if is_punctuation(c) {
            Self::Punctuation
        } else {
            Self::Script
        }
    }

    /// 隣接する2文字が同じ連続(ラテン文字列または数字列)に属するかどうかを返します。
    #[inline(always)]
    pub(crate) const fn continues_run(lhs: char, rhs: char) -> bool {
        (is_latin(lhs) && is_latin(rhs)) || (continues_digit_run(lhs) && continues_digit_run(rhs))
    }
}
