use std::fmt;

use super::{symbol_at, symbol_index, ALPHABET_SIZE};
use crate::error::Error;

/// Bit string code for every letter, indexed by `symbol - 'a'`.
///
/// An empty code marks a symbol that has not been assigned yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: [String; ALPHABET_SIZE],
}

impl CodeTable {
    pub fn get(&self, symbol: char) -> Option<&str> {
        symbol_index(symbol).map(|index| self.codes[index].as_str())
    }

    /// Stores `code` for `symbol`. Returns false if the symbol is not in the alphabet.
    pub(crate) fn set(&mut self, symbol: char, code: String) -> bool {
        match symbol_index(symbol) {
            Some(index) => {
                self.codes[index] = code;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .map(|(index, code)| (symbol_at(index), code.as_str()))
    }

    pub fn is_prefix_free(&self) -> bool {
        let assigned: Vec<&String> = self.codes.iter().filter(|c| !c.is_empty()).collect();
        assigned.iter().enumerate().all(|(index, code)| {
            assigned
                .iter()
                .enumerate()
                .all(|(other_index, other)| index == other_index || !other.starts_with(*code))
        })
    }

    /// Total number of bits needed to encode a text with the given symbol counts.
    pub fn weighted_length(&self, counts: &[usize; ALPHABET_SIZE]) -> crate::Result<usize> {
        self.codes
            .iter()
            .zip(counts)
            .try_fold(0usize, |total, (code, &count)| {
                code.len()
                    .checked_mul(count)
                    .and_then(|bits| total.checked_add(bits))
                    .ok_or(Error::WeightOverflow)
            })
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+=====+ Huffman Code Table +=====+")?;
        for (symbol, code) in self.iter() {
            writeln!(f, "     char: {} ||  Code: {}", symbol, code)?;
        }
        writeln!(f, "+=====+ +================+ +=====+")
    }
}

#[cfg(test)]
mod test {
    use super::{CodeTable, ALPHABET_SIZE};
    use crate::error::Error;

    fn create_table(codes: &[(char, &str)]) -> CodeTable {
        let mut table = CodeTable::default();
        for &(symbol, code) in codes {
            assert!(table.set(symbol, code.to_string()));
        }
        table
    }

    #[test]
    fn test_default_table_is_unassigned() {
        let table = CodeTable::default();
        assert_eq!(table.iter().count(), ALPHABET_SIZE);
        assert!(table.iter().all(|(_, code)| code.is_empty()));
    }

    #[test]
    fn test_get_outside_alphabet() {
        let table = create_table(&[('a', "0")]);
        assert_eq!(table.get('a'), Some("0"));
        assert_eq!(table.get('b'), Some(""));
        assert_eq!(table.get('A'), None);
    }

    #[test]
    fn test_set_outside_alphabet() {
        let mut table = CodeTable::default();
        assert!(!table.set('#', "01".to_string()));
        assert_eq!(table, CodeTable::default());
    }

    #[test]
    fn test_prefix_free() {
        let table = create_table(&[('a', "0"), ('b', "10"), ('c', "11")]);
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_not_prefix_free() {
        let table = create_table(&[('a', "1"), ('b', "10"), ('c', "0")]);
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_duplicate_codes_are_not_prefix_free() {
        let table = create_table(&[('a', "01"), ('b', "01")]);
        assert!(!table.is_prefix_free());
    }

    #[test]
    fn test_weighted_length() {
        let table = create_table(&[('a', "0"), ('b', "10"), ('c', "11")]);
        let mut counts = [0; ALPHABET_SIZE];
        counts[0] = 5;
        counts[1] = 2;
        counts[2] = 3;
        counts[3] = 100;
        assert_eq!(table.weighted_length(&counts).unwrap(), 5 + 4 + 6);
    }

    #[test]
    fn test_weighted_length_overflow() {
        let table = create_table(&[('a', "0"), ('b', "10"), ('c', "11")]);
        let mut counts = [0; ALPHABET_SIZE];
        counts[1] = usize::MAX / 2 + 1;
        assert!(matches!(
            table.weighted_length(&counts),
            Err(Error::WeightOverflow)
        ));
        counts[1] = usize::MAX / 4;
        counts[2] = usize::MAX / 4;
        counts[0] = usize::MAX / 2;
        assert!(matches!(
            table.weighted_length(&counts),
            Err(Error::WeightOverflow)
        ));
    }

    #[test]
    fn test_display() {
        let table = create_table(&[('a', "0"), ('z', "1")]);
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), ALPHABET_SIZE + 2);
        assert_eq!(lines[0], "+=====+ Huffman Code Table +=====+");
        assert_eq!(lines[1], "     char: a ||  Code: 0");
        assert_eq!(lines[2], "     char: b ||  Code: ");
        assert_eq!(lines[26], "     char: z ||  Code: 1");
        assert_eq!(lines[27], "+=====+ +================+ +=====+");
    }
}
