use serde_json::Value;
use std::io::{self, Read};

/// Read a JSON request piped on stdin.
/// Returns None when stdin is a terminal or nothing was piped.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(parse_piped(&buffer)?)
}

fn parse_piped(buffer: &str) -> Result<Option<Value>, serde_json::Error> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}
