use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use cli::CLIParser;
pub use error::Error;
use huffman::{HuffmanAlgorithm, ALPHABET_SIZE};

mod cli;
mod error;
pub mod huffman;
mod logger;
pub mod priority_queue;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    counts: Option<Vec<usize>>,
    seed: Option<u64>,
    max_count: u32,
    show_tree: bool,
    words: Vec<String>,
}

struct WordCoding<'a> {
    word: &'a str,
    code: String,
    decoded: String,
}

fn resolve_counts(arguments: &Arguments) -> Vec<usize> {
    match &arguments.counts {
        Some(counts) => {
            log::info!("Using letter counts given on the command line");
            counts.clone()
        }
        None => generate_random_counts(arguments.seed, arguments.max_count),
    }
}

fn generate_random_counts(seed: Option<u64>, max_count: u32) -> Vec<usize> {
    let mut rng = match seed {
        Some(seed) => {
            log::info!("Drawing letter counts below {} with seed {}", max_count, seed);
            StdRng::seed_from_u64(seed)
        }
        None => {
            log::info!("Drawing letter counts below {}", max_count);
            StdRng::from_entropy()
        }
    };
    (0..ALPHABET_SIZE)
        .map(|_| rng.gen_range(0..max_count) as usize)
        .collect()
}

fn code_words<'a>(
    algorithm: &HuffmanAlgorithm,
    words: &'a [String],
) -> Result<Vec<WordCoding<'a>>> {
    words
        .iter()
        .map(|word| {
            let code = algorithm.get_word(word);
            let decoded = algorithm.decipher(&code)?;
            Ok(WordCoding {
                word,
                code,
                decoded,
            })
        })
        .collect()
}

fn write_report<W: Write>(
    output: &mut W,
    algorithm: &HuffmanAlgorithm,
    codings: &[WordCoding],
    show_tree: bool,
) -> io::Result<()> {
    writeln!(output, "{}", algorithm)?;
    if show_tree {
        writeln!(output, "{}", algorithm.code_tree())?;
    }
    writeln!(output, "+=====+ Encoding Test +=====+")?;
    for coding in codings {
        writeln!(output, "{}: {}", coding.word, coding.code)?;
    }
    writeln!(output)?;
    writeln!(output, "+=====+ decoding Test +=====+")?;
    for coding in codings {
        writeln!(output, "{}: {}", coding.code, coding.decoded)?;
    }
    writeln!(output)
}

/// Builds the code for the requested letter counts and writes the code table
/// together with the encoding and decoding of every word to `output`.
pub fn run<W: Write>(arguments: &Arguments, output: &mut W) -> Result<()> {
    let counts = resolve_counts(arguments);
    let algorithm = HuffmanAlgorithm::try_from(counts.as_slice())?;
    let codings = code_words(&algorithm, &arguments.words)?;
    write_report(output, &algorithm, &codings, arguments.show_tree)
        .map_err(Error::UnableToWriteReport)
}
