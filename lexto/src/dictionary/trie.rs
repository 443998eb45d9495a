//! トライ構造による単語の格納と検索
//!
//! ノードは配列上に確保され、各ノードは子への対応表と親への参照を持ちます。
//! 親への参照は、ノードから単語を復元するために使用します。

use hashbrown::HashMap;
use rkyv::{Archive, Deserialize, Serialize};

use crate::errors::{LexToError, Result};

/// ノードの識別子(配列上の位置)
pub(crate) type NodeId = usize;

/// ルートノードの識別子
const ROOT: NodeId = 0;

/// 文字列を検索した結果
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Match {
    /// 文字列で始まる単語が存在しない
    Absent,
    /// 文字列で始まる単語は存在するが、文字列自体は単語ではない
    Prefix,
    /// 文字列自体が単語として登録されている
    Word,
}

#[derive(Clone, Debug)]
struct Node {
    ch: char,
    parent: Option<NodeId>,
    children: HashMap<char, NodeId>,
    is_word: bool,
}

impl Node {
    fn new(ch: char) -> Self {
        Self {
            ch,
            parent: None,
            children: HashMap::new(),
            is_word: false,
        }
    }
}

/// 文字単位のトライ
///
/// 構築後は読み取り専用として扱うことを想定しています。
/// 挿入はいつでも可能ですが、`&mut self` を要求するため検索と同時には行えません。
#[derive(Clone, Debug)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
    num_words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new('\u{00FB}')],
            num_words: 0,
        }
    }

    /// 単語を挿入します。
    ///
    /// 既に単語として登録されていた場合は `false` を返し、構造は変化しません。
    /// 空の単語はルートを単語としてマークします。
    pub fn insert(&mut self, word: &[char]) -> bool {
        let mut node_id = ROOT;
        let mut depth = 0;
        while let Some(&c) = word.get(depth) {
            match self.nodes[node_id].children.get(&c) {
                Some(&child) => {
                    node_id = child;
                    depth += 1;
                }
                None => break,
            }
        }

        if depth == word.len() {
            let node = &mut self.nodes[node_id];
            if node.is_word {
                return false;
            }
            node.is_word = true;
            self.num_words += 1;
            return true;
        }

        if let Some((&last, middle)) = word[depth..].split_last() {
            let head = self.build_chain(middle, last);
            self.attach(node_id, head);
        }
        self.num_words += 1;
        true
    }

    /// 既存の木に接続しない新しいノード列を末尾から作成し、先頭ノードを返します。
    ///
    /// `last` が単語の終端となり、`middle` はその手前の文字列です。
    fn build_chain(&mut self, middle: &[char], last: char) -> NodeId {
        let mut tail = self.push_node(last);
        let mut tail_ch = last;
        self.nodes[tail].is_word = true;

        for &c in middle.iter().rev() {
            let head = self.push_node(c);
            self.nodes[head].children.insert(tail_ch, tail);
            self.nodes[tail].parent = Some(head);
            tail = head;
            tail_ch = c;
        }
        tail
    }

    /// 独立したノード列を `parent` の子として一度に接続します。
    fn attach(&mut self, parent: NodeId, head: NodeId) {
        debug_assert!(self.nodes[head].parent.is_none());
        self.nodes[head].parent = Some(parent);
        let ch = self.nodes[head].ch;
        self.nodes[parent].children.insert(ch, head);
    }

    fn push_node(&mut self, ch: char) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(ch));
        id
    }

    /// `node_id` から文字 `c` の辺をたどります。
    #[inline(always)]
    pub fn step(&self, node_id: NodeId, c: char) -> Option<NodeId> {
        self.nodes[node_id].children.get(&c).copied()
    }

    /// 文字列に対応するノードを返します。
    pub fn find(&self, s: &[char]) -> Option<NodeId> {
        s.iter().try_fold(ROOT, |node_id, &c| self.step(node_id, c))
    }

    /// ノードが単語の終端かどうかを返します。
    #[inline(always)]
    pub fn is_word(&self, node_id: NodeId) -> bool {
        self.nodes[node_id].is_word
    }

    /// 文字列を検索します。
    #[inline]
    pub fn query(&self, s: &[char]) -> Match {
        match self.find(s) {
            None => Match::Absent,
            Some(node_id) if self.is_word(node_id) => Match::Word,
            Some(_) => Match::Prefix,
        }
    }

    /// `input` の接頭辞を短い順に検索するイテレータを返します。
    ///
    /// 長さ `1, 2, ...` の接頭辞ごとに `(長さ, Match)` を返し、
    /// [`Match::Absent`] になった時点で終了します(`Absent` 自体は返しません)。
    #[inline(always)]
    pub fn prefix_scan<'a>(&'a self, input: &'a [char]) -> PrefixScan<'a> {
        PrefixScan {
            trie: self,
            input,
            node_id: Some(ROOT),
            len: 0,
        }
    }

    /// 登録されている単語数を返します。
    #[inline(always)]
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    /// ノードからルートまで親をたどり、対応する文字列を復元します。
    pub fn word_of(&self, mut node_id: NodeId) -> String {
        let mut chars = vec![];
        while let Some(parent) = self.nodes[node_id].parent {
            chars.push(self.nodes[node_id].ch);
            node_id = parent;
        }
        chars.iter().rev().collect()
    }

    /// `prefix` で始まるすべての単語を、各階層の文字順で返します。
    pub fn words_with_prefix(&self, prefix: &[char]) -> Vec<String> {
        let mut words = vec![];
        let Some(start) = self.find(prefix) else {
            return words;
        };
        let mut stack = vec![start];
        while let Some(node_id) = stack.pop() {
            let node = &self.nodes[node_id];
            if node.is_word {
                words.push(self.word_of(node_id));
            }
            let mut children: Vec<_> = node.children.iter().map(|(&c, &id)| (c, id)).collect();
            // Reverse order so that the smallest character is popped first.
            children.sort_unstable_by(|a, b| b.0.cmp(&a.0));
            stack.extend(children.into_iter().map(|(_, id)| id));
        }
        words
    }

    /// シリアライズ用の平坦な表現に変換します。
    pub fn to_image(&self) -> Result<TrieImage> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let parent = node.parent.map(u32::try_from).transpose()?;
            nodes.push(ImageNode {
                ch: node.ch,
                parent,
                is_word: node.is_word,
            });
        }
        Ok(TrieImage { nodes })
    }

    /// 平坦な表現からトライを復元します。
    ///
    /// # エラー
    ///
    /// ルートが不正な場合、親の参照が範囲外の場合、同じ親の下で文字が重複する場合、
    /// またはルートから到達できないノードがある場合に [`LexToError`] を返します。
    pub fn from_image(image: TrieImage) -> Result<Self> {
        let num_nodes = image.nodes.len();
        match image.nodes.first() {
            Some(root) if root.parent.is_none() => {}
            _ => {
                return Err(LexToError::invalid_format(
                    "dictionary",
                    "the first node must be a root without a parent.",
                ));
            }
        }

        let mut nodes: Vec<Node> = image
            .nodes
            .iter()
            .map(|n| {
                let mut node = Node::new(n.ch);
                node.is_word = n.is_word;
                node
            })
            .collect();

        for (id, n) in image.nodes.iter().enumerate().skip(1) {
            let parent = match n.parent {
                Some(p) => usize::try_from(p)?,
                None => {
                    return Err(LexToError::invalid_format(
                        "dictionary",
                        format!("node {id} has no parent."),
                    ));
                }
            };
            if parent >= num_nodes || parent == id {
                return Err(LexToError::invalid_format(
                    "dictionary",
                    format!("node {id} refers to an invalid parent {parent}."),
                ));
            }
            if nodes[parent].children.insert(n.ch, id).is_some() {
                return Err(LexToError::invalid_format(
                    "dictionary",
                    format!("duplicate child {:?} under node {parent}.", n.ch),
                ));
            }
            nodes[id].parent = Some(parent);
        }

        // Each node has a single parent, so the walk visits every reachable node once.
        let mut num_reached = 0;
        let mut num_words = 0;
        let mut stack = vec![ROOT];
        while let Some(node_id) = stack.pop() {
            let node = &nodes[node_id];
            num_reached += 1;
            num_words += usize::from(node.is_word);
            stack.extend(node.children.values().copied());
        }
        if num_reached != num_nodes {
            return Err(LexToError::invalid_format(
                "dictionary",
                format!(
                    "{} nodes are not reachable from the root.",
                    num_nodes - num_reached
                ),
            ));
        }

        Ok(Self { nodes, num_words })
    }
}

/// [`Trie::prefix_scan`] が返すイテレータ
pub struct PrefixScan<'a> {
    trie: &'a Trie,
    input: &'a [char],
    node_id: Option<NodeId>,
    len: usize,
}

impl Iterator for PrefixScan<'_> {
    type Item = (usize, Match);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node_id = self.node_id?;
        let &c = self.input.get(self.len)?;
        match self.trie.step(node_id, c) {
            Some(child) => {
                self.node_id = Some(child);
                self.len += 1;
                let m = if self.trie.is_word(child) {
                    Match::Word
                } else {
                    Match::Prefix
                };
                Some((self.len, m))
            }
            None => {
                self.node_id = None;
                None
            }
        }
    }
}

/// シリアライズ用のノード
#[derive(Archive, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImageNode {
    ch: char,
    parent: Option<u32>,
    is_word: bool,
}

/// シリアライズ用のトライ表現
///
/// 子への対応表は親の参照から復元できるため保存しません。
#[derive(Archive, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrieImage {
    nodes: Vec<ImageNode>,
}
