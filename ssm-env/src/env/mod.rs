//! Destinations for fetched values.
//!
//! The process environment is a single global table; [`ProcessEnvironment`]
//! writes to it directly. [`MemoryEnvironment`] keeps the same contract without
//! touching global state.

mod memory;
mod process;

pub use memory::MemoryEnvironment;
pub use process::ProcessEnvironment;

pub trait EnvironmentWriter: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value. Fails when
    /// the destination cannot hold the pair; nothing is written in that case.
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}
