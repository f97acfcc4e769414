use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    applier::{apply, merge},
    configs::{Configs, Options, StoreConfig, ValidatedOptions},
    domain::AppliedParameter,
    env::{EnvironmentWriter, ProcessEnvironment},
    error::LoadError,
    fetcher::fetch_all,
    resolver::{full_names, resolve},
    store::{ParameterStore, adapters::ssm_store::SsmParameterStore},
};

pub type LoadResult = Result<Vec<AppliedParameter>, LoadError>;

/// Runs one validate, resolve, fetch, apply pass against a store and an
/// environment.
#[derive(Clone)]
pub struct ParameterLoader {
    store: Arc<dyn ParameterStore>,
    environment: Arc<dyn EnvironmentWriter>,
}

impl ParameterLoader {
    pub fn new(store: Arc<dyn ParameterStore>, environment: Arc<dyn EnvironmentWriter>) -> Self {
        Self { store, environment }
    }

    pub async fn load(&self, options: &Options) -> LoadResult {
        let validated = options.validate().inspect_err(|e| {
            warn!("Rejected parameter options: {}", e);
        })?;
        self.load_validated(&validated).await
    }

    /// Same as [`ParameterLoader::load`], but hands the outcome to `callback`
    /// just before returning it. The callback sees failures as well as
    /// successes.
    pub async fn load_with_callback<F>(&self, options: &Options, callback: F) -> LoadResult
    where
        F: FnOnce(&LoadResult),
    {
        let result = self.load(options).await;
        callback(&result);
        result
    }

    pub async fn load_validated(&self, options: &ValidatedOptions) -> LoadResult {
        let resolved = resolve(options.path(), options.parameters());
        let names = full_names(&resolved);

        let fetched = fetch_all(self.store.as_ref(), &names, options.with_decryption())
            .await
            .map_err(LoadError::StoreFetch)?;

        let applied = apply(merge(&resolved, fetched), self.environment.as_ref());

        info!(
            requested = resolved.len(),
            applied = applied.len(),
            "Loaded parameters into environment"
        );

        Ok(applied)
    }
}

impl std::fmt::Debug for ParameterLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterLoader").finish_non_exhaustive()
    }
}

/// Fetches `options.parameters` from SSM in `options.region` and writes them
/// into the process environment.
pub async fn config(options: &Options) -> LoadResult {
    let validated = options.validate().inspect_err(|e| {
        warn!("Rejected parameter options: {}", e);
    })?;

    let store_config = StoreConfig::load()
        .await
        .map_err(|e| LoadError::StoreFetch(anyhow::anyhow!(e)))?
        .for_region(validated.region());
    debug!(?store_config, "Creating SSM parameter store");

    let store = SsmParameterStore::new(store_config).await;

    ParameterLoader::new(Arc::new(store), Arc::new(ProcessEnvironment::new()))
        .load_validated(&validated)
        .await
}

pub async fn config_with_callback<F>(options: &Options, callback: F) -> LoadResult
where
    F: FnOnce(&LoadResult),
{
    let result = config(options).await;
    callback(&result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{env::MemoryEnvironment, store::adapters::local_store::LocalParameterStore};
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn test_config_logs_rejected_options() {
        let result = config(&Options::default()).await;

        assert!(matches!(result, Err(LoadError::Validation(_))));
        assert!(logs_contain("Rejected parameter options"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_loader_logs_rejected_options() {
        let loader = ParameterLoader::new(
            Arc::new(LocalParameterStore::new()),
            Arc::new(MemoryEnvironment::new()),
        );

        let result = loader.load(&Options::default()).await;

        assert!(matches!(result, Err(LoadError::Validation(_))));
        assert!(logs_contain("Rejected parameter options"));
    }
}
