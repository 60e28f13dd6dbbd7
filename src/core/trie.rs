// --- File: src/core/trie.rs
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct TrieNode {
    children: HashMap<char, usize>,
    glyph: Option<&'static str>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), glyph: None }
    }
}

/// Character trie over conjunct sequences, used for maximal-munch lookup.
/// Nodes live in a flat arena; index 0 is the root.
#[derive(Debug, Clone)]
pub struct ConjunctTrie {
    nodes: Vec<TrieNode>,
    entries: usize,
}

impl ConjunctTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], entries: 0 }
    }

    /// O(k) where k is the key length in chars.
    pub fn insert(&mut self, key: &str, glyph: &'static str) {
        let mut node_idx = 0;
        for c in key.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&c) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(c, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }
        if self.nodes[node_idx].glyph.replace(glyph).is_none() {
            self.entries += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Exact lookup of a whole sequence.
    pub fn get(&self, key: &[char]) -> Option<&'static str> {
        let mut node_idx = 0;
        for c in key {
            node_idx = *self.nodes[node_idx].children.get(c)?;
        }
        self.nodes[node_idx].glyph
    }

    /// Longest entry that is a prefix of `input` and whose length satisfies
    /// `accept`. Returns the matched length in chars and the glyph.
    pub fn longest_prefix_where(
        &self,
        input: &[char],
        accept: impl Fn(usize) -> bool,
    ) -> Option<(usize, &'static str)> {
        let mut node_idx = 0;
        let mut best = None;
        for (i, c) in input.iter().enumerate() {
            match self.nodes[node_idx].children.get(c) {
                Some(&next) => node_idx = next,
                None => break,
            }
            if let Some(glyph) = self.nodes[node_idx].glyph {
                if accept(i + 1) {
                    best = Some((i + 1, glyph));
                }
            }
        }
        best
    }
}

impl Default for ConjunctTrie {
    fn default() -> Self {
        Self::new()
    }
}
