//! 入力テキストの内部表現を提供するモジュール
//!
//! 入力文字列を文字単位に分割し、文字位置からバイト位置へのマッピング、
//! 各文字の分類、ラテン文字列・数字列の連続長を計算して保持します。

use crate::character::CharClass;

/// 入力テキストの内部表現を保持する構造体
///
/// # フィールド
///
/// * `input` - 元の入力文字列
/// * `chars` - 入力文字列を文字単位に分割した配列
/// * `c2b` - 文字位置からバイト位置へのマッピング配列
/// * `classes` - 各文字の分類
/// * `groupable` - 各文字位置から同じ連続に属する文字数
#[derive(Default, Clone, Debug)]
pub struct Sentence {
    input: String,
    chars: Vec<char>,
    c2b: Vec<usize>,
    classes: Vec<CharClass>,
    groupable: Vec<usize>,
}

impl Sentence {
    /// 新しい空の `Sentence` インスタンスを生成します
    pub fn new() -> Self {
        Self::default()
    }

    /// 内部状態をクリアします
    #[inline(always)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.chars.clear();
        self.c2b.clear();
        self.classes.clear();
        self.groupable.clear();
    }

    /// 入力文字列を設定します
    ///
    /// 既存の内部状態をクリアした後、新しい入力文字列を設定します。
    /// 解析を行うには [`compile`](Self::compile) を呼び出す必要があります。
    pub fn set_sentence<S>(&mut self, input: S)
    where
        S: AsRef<str>,
    {
        self.clear();
        self.input.push_str(input.as_ref());
    }

    /// 入力文字列を解析し、内部データ構造を構築します
    pub fn compile(&mut self) {
        self.compute_basic();
        self.compute_classes();
        self.compute_groupable();
    }

    fn compute_basic(&mut self) {
        for (bi, ch) in self.input.char_indices() {
            self.chars.push(ch);
            self.c2b.push(bi);
        }
        self.c2b.push(self.input.len());
    }

    fn compute_classes(&mut self) {
        self.classes.reserve(self.chars.len());
        for &c in &self.chars {
            self.classes.push(CharClass::of(c));
        }
    }

    /// 各文字位置から、ラテン文字列または数字列として連続する文字数を計算します（内部メソッド）
    ///
    /// 連続しない位置の値は1です。
    fn compute_groupable(&mut self) {
        self.groupable.resize(self.chars.len(), 1);
        for i in (1..self.chars.len()).rev() {
            if CharClass::continues_run(self.chars[i - 1], self.chars[i]) {
                self.groupable[i - 1] = self.groupable[i] + 1;
            }
        }
    }

    /// 元の入力文字列への参照を返します
    #[inline(always)]
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// 文字配列への参照を返します
    #[inline(always)]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// 文字数を返します
    #[inline(always)]
    pub fn len_char(&self) -> usize {
        self.chars.len()
    }

    /// 指定された文字位置に対応するバイト位置を返します
    ///
    /// # 引数
    ///
    /// * `pos_char` - 文字位置（0始まり）。文字数と等しい値も受け付けます。
    #[inline(always)]
    pub fn byte_position(&self, pos_char: usize) -> usize {
        self.c2b[pos_char]
    }

    /// 指定された文字位置の分類を返します
    #[inline(always)]
    pub fn char_class(&self, pos_char: usize) -> CharClass {
        self.classes[pos_char]
    }

    /// 指定された文字位置から同じ連続に属する文字数を返します
    ///
    /// ラテン文字または数字で始まる位置では、その連続の残りの長さになります。
    #[inline(always)]
    pub fn groupable(&self, pos_char: usize) -> usize {
        self.groupable[pos_char]
    }
}
