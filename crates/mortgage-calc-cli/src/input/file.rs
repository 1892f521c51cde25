use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a loan request from a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;
    parse_request(&contents).map_err(|e| format!("Failed to parse '{}': {}", resolved.display(), e).into())
}

fn parse_request<T: DeserializeOwned>(contents: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(contents)
}

/// Resolve relative paths against the working directory and make sure the
/// target is a regular file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.exists() {
        return Err(format!("Input file not found: {}", resolved.display()).into());
    }
    if !resolved.is_file() {
        return Err(format!("Input path is not a file: {}", resolved.display()).into());
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mortgage_calc_core::savings::RateCutInput;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_rate_cut_request() {
        let input: RateCutInput = parse_request(
            r#"{
                "loan": {"principal": 250000, "term_years": 25, "annual_rate_percent": 6.1},
                "rate_cut_percent": 0.5
            }"#,
        )
        .unwrap();
        assert_eq!(input.loan.principal, dec!(250000));
        assert_eq!(input.rate_cut_percent, dec!(0.5));
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = read_json::<RateCutInput>("definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
