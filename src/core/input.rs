use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read a JSON document from a file, or from stdin when `path` is `-`.
pub fn read_document(path: &str) -> Result<String> {
    if path == STDIN_PATH {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        tracing::debug!(bytes = content.len(), "Read document from stdin");
        return Ok(content);
    }

    let path = Path::new(path);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read document");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_document_from_temp_file() {
        let dir = std::env::temp_dir().join(format!(
            "cmap_test_input_{}_read_document_from_temp_file",
            std::process::id()
        ));
        let _ = std::fs::create_dir_all(&dir);
        let file_path = dir.join("vpcs.json");
        std::fs::write(&file_path, r#"{"Vpcs":[]}"#).unwrap();

        let content = read_document(file_path.to_str().unwrap()).unwrap();
        assert_eq!(content, r#"{"Vpcs":[]}"#);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn read_document_missing_file_names_path() {
        let err = read_document("/nonexistent/cmap/costs.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/cmap/costs.json"));
    }
}
