pub mod applier;
pub mod configs;
pub mod domain;
pub mod env;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod resolver;
pub mod store;

pub use configs::{Configs, Options, ValidatedOptions};
pub use domain::{AppliedParameter, FetchedParameter, ParameterRequest, ResolvedParameter};
pub use env::{EnvironmentWriter, MemoryEnvironment, ProcessEnvironment};
pub use error::{LoadError, ValidationError};
pub use loader::{LoadResult, ParameterLoader, config, config_with_callback};
pub use store::{
    ParameterStore,
    adapters::{local_store::LocalParameterStore, ssm_store::SsmParameterStore},
};
