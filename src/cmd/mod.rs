pub mod decrypt;
pub mod encrypt;
pub mod score;

use descifrador::error::CipherResult;
use std::fs;
use std::io::{self, IsTerminal, Read};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Reads the whole input file, or stdin when no path is given.
pub fn read_input(path: Option<&str>) -> CipherResult<String> {
    match path {
        Some(p) => Ok(fs::read_to_string(p)?),
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Paste the ciphertext, then Ctrl+D (Ctrl+Z, Enter on Windows):");
            }
            let mut raw = String::new();
            stdin.lock().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
