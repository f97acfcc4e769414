use std::fs;

pub fn load(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read options file '{}': {}", path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_options_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let json = r#"{"region":"eu-west-1","parameters":[{"name":"db"}]}"#;
        fs::write(&temp_file, json).unwrap();

        let result = load(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, json);
    }

    #[test]
    fn test_load_file_not_found() {
        let result = load("/nonexistent/options.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to read options file"));
    }
}
