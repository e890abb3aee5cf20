mod algorithm;
mod code;
mod tree;

pub use algorithm::HuffmanAlgorithm;
pub use code::CodeTable;
pub use tree::HuffmanTree;

/// Number of symbols in the code alphabet, the letters 'a' to 'z'.
pub const ALPHABET_SIZE: usize = 26;

pub fn symbol_index(symbol: char) -> Option<usize> {
    if symbol.is_ascii_lowercase() {
        Some((symbol as u8 - b'a') as usize)
    } else {
        None
    }
}

fn symbol_at(index: usize) -> char {
    debug_assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}
