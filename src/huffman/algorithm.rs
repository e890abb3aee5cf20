use std::fmt;

use super::{symbol_at, CodeTable, HuffmanTree, ALPHABET_SIZE};
use crate::error::Error;
use crate::logger;
use crate::priority_queue::PriorityQueue;

/// Huffman code over the letters 'a' to 'z', built from one count per letter.
pub struct HuffmanAlgorithm {
    code_tree: HuffmanTree,
    code_table: CodeTable,
}

impl HuffmanAlgorithm {
    pub fn new(counts: &[usize; ALPHABET_SIZE]) -> crate::Result<Self> {
        let code_tree = Self::build_code_tree(counts)?;
        let mut code_table = CodeTable::default();
        code_tree.encode(&mut code_table)?;
        log::debug!(
            "Derived codes for {} symbols with a total weight of {}",
            code_tree.leaf_count(),
            code_tree.count().unwrap_or_default()
        );
        logger::log_code_table(&code_table);
        Ok(HuffmanAlgorithm {
            code_tree,
            code_table,
        })
    }

    fn create_leaves(counts: &[usize; ALPHABET_SIZE]) -> Vec<Option<HuffmanTree>> {
        counts
            .iter()
            .enumerate()
            .map(|(index, &count)| Some(HuffmanTree::leaf(symbol_at(index), count)))
            .collect()
    }

    fn build_code_tree(counts: &[usize; ALPHABET_SIZE]) -> crate::Result<HuffmanTree> {
        let mut leaves = Self::create_leaves(counts);
        let mut queue = PriorityQueue::from_slots(&mut leaves);
        loop {
            let first = queue.delete_min().ok_or(Error::EmptyTree)?;
            let Some(second) = queue.delete_min() else {
                return Ok(first);
            };
            log::trace!(
                "Merging '{}' ({:?}) with '{}' ({:?})",
                first.item().unwrap_or_default(),
                first.count(),
                second.item().unwrap_or_default(),
                second.count()
            );
            queue.insert(HuffmanTree::merge(first, second)?);
        }
    }

    /// Encodes every lowercase letter of `text`. All other characters are skipped.
    pub fn get_word(&self, text: &str) -> String {
        text.chars()
            .filter_map(|symbol| self.code_table.get(symbol))
            .collect()
    }

    pub fn decipher(&self, bits: &str) -> crate::Result<String> {
        self.code_tree.decode(bits)
    }

    pub fn code_for(&self, symbol: char) -> Option<&str> {
        self.code_table.get(symbol)
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    pub fn code_tree(&self) -> &HuffmanTree {
        &self.code_tree
    }
}

impl TryFrom<&[usize]> for HuffmanAlgorithm {
    type Error = Error;

    fn try_from(counts: &[usize]) -> Result<Self, Self::Error> {
        let counts = <&[usize; ALPHABET_SIZE]>::try_from(counts)
            .map_err(|_| Error::WrongNumberOfCounts(counts.len()))?;
        Self::new(counts)
    }
}

impl fmt::Display for HuffmanAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code_table)
    }
}
