use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    MergeWithEmptyTree,
    EmptyTree,
    SingleLeafTree,
    WeightOverflow,
    InvalidBit(char, usize),
    UnterminatedCode(usize),
    WrongNumberOfCounts(usize),
    InvalidCount(String),
    UnableToWriteReport(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MergeWithEmptyTree => {
                write!(f, "Unable to merge Huffman trees, at least one tree is empty")
            }
            Self::EmptyTree => write!(f, "Huffman tree is empty"),
            Self::SingleLeafTree => {
                write!(
                    f,
                    "Huffman tree consists of a single leaf and can not decode any bits"
                )
            }
            Self::WeightOverflow => {
                write!(f, "Sum of symbol counts exceeds the representable weight")
            }
            Self::InvalidBit(character, position) => {
                write!(
                    f,
                    "Invalid character '{}' at position {}. Expected '0' or '1'.",
                    character, position
                )
            }
            Self::UnterminatedCode(position) => {
                write!(
                    f,
                    "Bit string ends inside a code word that starts at position {}",
                    position
                )
            }
            Self::WrongNumberOfCounts(number_of_counts) => {
                write!(
                    f,
                    "Expected 26 symbol counts, one for each letter 'a' to 'z', but got {}",
                    number_of_counts
                )
            }
            Self::InvalidCount(token) => {
                write!(f, "Symbol count '{}' is not a non-negative integer", token)
            }
            Self::UnableToWriteReport(error) => {
                write!(f, "Unable to write report: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
