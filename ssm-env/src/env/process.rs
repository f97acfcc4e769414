use std::sync::{Mutex, PoisonError};

use super::EnvironmentWriter;

static ENV_WRITE_LOCK: Mutex<()> = Mutex::new(());

/// Writes straight into the current process environment.
///
/// Writes made through this type are serialized with each other, but nothing
/// stops other code in the process from reading or writing concurrently.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentWriter for ProcessEnvironment {
    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        // set_var panics on these instead of returning an error.
        if key.is_empty() || key.contains(['=', '\0']) {
            return Err(format!("Invalid environment variable name '{key}'"));
        }
        if value.contains('\0') {
            return Err(format!("Value for '{key}' contains a NUL byte"));
        }

        let _guard = ENV_WRITE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}
