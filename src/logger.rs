use crate::huffman::CodeTable;

const CONFIG_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    use log4rs;
    if let Err(e) = log4rs::init_file(CONFIG_FILE, Default::default()) {
        eprintln!("Logging disabled, unable to load '{}': {}", CONFIG_FILE, e);
    }
}

pub fn log_code_table(code_table: &CodeTable) {
    for (symbol, code) in code_table.iter() {
        log::debug!("{} -> {} ({} bits)", symbol, code, code.len());
    }
}
