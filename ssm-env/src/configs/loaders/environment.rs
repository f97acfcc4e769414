use std::env;

pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok().filter(|v| !v.trim().is_empty())
}

pub fn env_or(env_name: &str, default: &str) -> String {
    optional_env(env_name).unwrap_or_else(|| default.to_string())
}

pub fn env_flag(env_name: &str, default: bool) -> Result<bool, String> {
    match optional_env(env_name) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(format!(
                "Environment variable '{env_name}' must be a boolean, got '{raw}'"
            )),
        },
    }
}
