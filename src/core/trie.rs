// --- File: src/core/trie.rs
use std::collections::HashMap;

/// Index of an affix frame in the analyzer's frame table.
pub type FrameId = usize;

#[derive(Debug, Clone)]
struct TrieNode {
    children: HashMap<char, usize>,
    frames: Vec<FrameId>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), frames: Vec::new() }
    }
}

/// A character trie over subject/stem prefix strings.
/// Walking a word through it yields every frame whose prefix the word
/// starts with, including the frames with no prefix at all.
#[derive(Debug, Clone)]
pub struct AffixTrie {
    nodes: Vec<TrieNode>,
}

impl Default for AffixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl AffixTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()] }
    }

    /// Registers `frame` under `key`.
    /// O(k) complexity where k is key length.
    pub fn insert(&mut self, key: &str, frame: FrameId) {
        let mut node_idx = 0;
        for c in key.chars() {
            node_idx = match self.nodes[node_idx].children.get(&c) {
                Some(&id) => id,
                None => {
                    let new_node_id = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[node_idx].children.insert(c, new_node_id);
                    new_node_id
                }
            };
        }
        self.nodes[node_idx].frames.push(frame);
    }

    /// Every registered prefix of `word` as (length in chars, frames),
    /// shortest first.
    pub fn prefixes_of(&self, word: &str) -> Vec<(usize, &[FrameId])> {
        let mut found = Vec::new();
        let mut node_idx = 0;
        let mut depth = 0;
        loop {
            let node = &self.nodes[node_idx];
            if !node.frames.is_empty() {
                found.push((depth, node.frames.as_slice()));
            }
            let Some(c) = word.chars().nth(depth) else {
                break;
            };
            match node.children.get(&c) {
                Some(&next_idx) => {
                    node_idx = next_idx;
                    depth += 1;
                }
                None => break,
            }
        }
        found
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
