use crate::error::Error;
use crate::huffman::ALPHABET_SIZE;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;

const DEFAULT_WORDS: [&str; 3] = ["test", "least", "Hello to the World"];

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_counts_argument(command);
        let command = Self::register_seed_argument(command);
        let command = Self::register_max_count_argument(command);
        let command = Self::register_tree_argument(command);
        let command = Self::register_words_argument(command);
        Self::register_counts_conflicts(command)
    }

    fn register_counts_conflicts(command: Command) -> Command {
        command.mut_arg("counts", |arg| arg.conflicts_with_all(["seed", "max_count"]))
    }

    fn register_counts_argument(command: Command) -> Command {
        command.arg(Self::create_counts_argument())
    }

    fn register_seed_argument(command: Command) -> Command {
        command.arg(Self::create_seed_argument())
    }

    fn register_max_count_argument(command: Command) -> Command {
        command.arg(Self::create_max_count_argument())
    }

    fn register_tree_argument(command: Command) -> Command {
        command.arg(Self::create_tree_argument())
    }

    fn register_words_argument(command: Command) -> Command {
        command.arg(Self::create_words_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_counts_argument() -> Arg {
        arg!(-c --counts <COUNTS> "26 comma separated counts for the letters 'a' to 'z'")
            .required(false)
            .value_parser(parse_counts)
    }

    fn create_seed_argument() -> Arg {
        arg!(-s --seed <SEED> "Seed for the random letter counts")
            .required(false)
            .value_parser(value_parser!(u64))
    }

    fn create_max_count_argument() -> Arg {
        arg!(max_count: -m --max_count <MAX> "Random letter counts are drawn below this bound")
            .default_value("1000")
            .value_parser(value_parser!(u32).range(1..))
    }

    fn create_tree_argument() -> Arg {
        arg!(-t --tree "Print the Huffman tree")
    }

    fn create_words_argument() -> Arg {
        Arg::new("words")
            .help("Words to encode and decode again")
            .action(ArgAction::Append)
            .num_args(0..)
            .default_values(DEFAULT_WORDS)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            counts: Self::extract_counts_argument(matches),
            seed: Self::extract_seed_argument(matches),
            max_count: Self::extract_max_count_argument(matches),
            show_tree: Self::extract_tree_argument(matches),
            words: Self::extract_words_argument(matches),
        }
    }

    fn extract_counts_argument(matches: &ArgMatches) -> Option<Vec<usize>> {
        matches.get_one::<Vec<usize>>("counts").cloned()
    }

    fn extract_seed_argument(matches: &ArgMatches) -> Option<u64> {
        matches.get_one::<u64>("seed").copied()
    }

    fn extract_max_count_argument(matches: &ArgMatches) -> u32 {
        matches
            .get_one::<u32>("max_count")
            .expect("Max count must be provided, but was unset.")
            .to_owned()
    }

    fn extract_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("tree")
    }

    fn extract_words_argument(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("words")
            .map(|words| words.cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_counts(value: &str) -> Result<Vec<usize>, Error> {
    let counts = value
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<usize>()
                .map_err(|_| Error::InvalidCount(token.to_owned()))
        })
        .collect::<Result<Vec<usize>, Error>>()?;
    if counts.len() != ALPHABET_SIZE {
        return Err(Error::WrongNumberOfCounts(counts.len()));
    }
    Ok(counts)
}
