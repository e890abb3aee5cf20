use std::env::args_os;
use std::io;
use std::process;

use alphabet_huffman::{run, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let mut stdout = io::stdout().lock();
    if let Err(e) = run(&arguments, &mut stdout) {
        eprintln!("Huffman coding failed because of: {}", e);
        process::exit(1);
    }
}
