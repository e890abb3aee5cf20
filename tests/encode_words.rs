use alphabet_huffman::{run, CLIParser};

const PROGRAM_NAME: &str = "test";
const EQUAL_COUNTS: &str = "1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1";

fn run_with_arguments(arguments: &[&str]) -> String {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(std::iter::once(PROGRAM_NAME).chain(arguments.iter().copied()));
    let mut output: Vec<u8> = Vec::new();
    run(&arguments, &mut output).expect("Run failed");
    String::from_utf8(output).expect("Report is not valid UTF-8")
}

fn section<'a>(report: &'a str, header: &str) -> Vec<&'a str> {
    report
        .lines()
        .skip_while(|line| *line != header)
        .skip(1)
        .take_while(|line| !line.is_empty())
        .collect()
}

#[test]
fn test_report_contains_code_table() {
    let report = run_with_arguments(&["--counts", EQUAL_COUNTS, "abc"]);
    let table: Vec<&str> = report
        .lines()
        .skip_while(|line| *line != "+=====+ Huffman Code Table +=====+")
        .skip(1)
        .take(26)
        .collect();
    assert_eq!(table.len(), 26, "Code table incomplete");
    for (line, symbol) in table.iter().zip('a'..='z') {
        let prefix = format!("     char: {} ||  Code: ", symbol);
        assert!(line.starts_with(&prefix), "Unexpected line {}", line);
        let code_length = line.len() - prefix.len();
        assert!(
            code_length == 4 || code_length == 5,
            "Code of {} has length {}",
            symbol,
            code_length
        );
    }
}

#[test]
fn test_words_are_decoded_again() {
    let report = run_with_arguments(&["--counts", EQUAL_COUNTS, "Hello", "huffman"]);
    let encoded = section(&report, "+=====+ Encoding Test +=====+");
    let decoded = section(&report, "+=====+ decoding Test +=====+");
    assert_eq!(encoded.len(), 2);
    assert_eq!(decoded.len(), 2);
    assert!(encoded[0].starts_with("Hello: "));
    assert!(decoded[0].ends_with(": ello"), "Unexpected line {}", decoded[0]);
    assert!(decoded[1].ends_with(": huffman"), "Unexpected line {}", decoded[1]);
}

#[test]
fn test_same_seed_gives_same_report() {
    let first = run_with_arguments(&["--seed", "2022", "--max_count", "10000"]);
    let second = run_with_arguments(&["--seed", "2022", "--max_count", "10000"]);
    assert_eq!(first, second);
    let decoded = section(&first, "+=====+ decoding Test +=====+");
    assert!(decoded[0].ends_with(": test"));
    assert!(decoded[1].ends_with(": least"));
    assert!(decoded[2].ends_with(": ellototheorld"));
}

#[test]
fn test_tree_is_printed_on_request() {
    let report = run_with_arguments(&["--counts", EQUAL_COUNTS, "--tree"]);
    for symbol in 'a'..='z' {
        let label = format!("({}:1)", symbol);
        assert!(report.contains(&label), "Tree label {} missing", label);
    }
}

#[test]
fn test_failed_run_exits_with_error_status() {
    let mut counts = vec![usize::MAX.to_string(), "1".to_string()];
    counts.resize(26, "0".to_string());
    let status = std::process::Command::new(env!("CARGO_BIN_EXE_alphabet-huffman"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["--counts", &counts.join(",")])
        .output()
        .expect("Binary could not be started");
    assert!(!status.status.success(), "Overflowing counts did not fail");
    assert_eq!(status.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&status.stderr);
    assert!(
        stderr.contains("Sum of symbol counts exceeds the representable weight"),
        "Unexpected stderr {}",
        stderr
    );
}
