pub mod environment;
pub mod file;
pub mod string;

/// Reads a source URI. Unknown or missing schemes are treated as inline content.
pub fn load(input: &str) -> Result<String, String> {
    if let Some(content) = input.strip_prefix("string://") {
        string::load(content)
    } else if let Some(path) = input.strip_prefix("file://") {
        file::load(path)
    } else {
        string::load(input)
    }
}
