pub fn load(content: &str) -> Result<String, String> {
    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_inline_options_document() {
        let json = r#"{"region":"eu-west-1","parameters":[]}"#;
        let result = load(json).unwrap();
        assert_eq!(result, json);
    }
}
