use anyhow::Result as AnyResult;
use aws_config::BehaviorVersion;
use aws_sdk_ssm::Client;
use aws_types::region::Region;
use tracing::{debug, warn};

use crate::{
    configs::StoreConfig,
    domain::FetchedParameter,
    store::{MAX_NAMES_PER_REQUEST, ParameterStore},
};

#[derive(Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub async fn new(config: StoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;
        let client = Client::new(&shared_config);

        Self::with_client(client)
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for SsmParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmParameterStore")
            .field("region", &self.client.config().region())
            .finish()
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    async fn fetch(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> AnyResult<Vec<FetchedParameter>> {
        debug_assert!(names.len() <= MAX_NAMES_PER_REQUEST);
        debug!(count = names.len(), with_decryption, "Fetching parameters from SSM");

        let response = self
            .client
            .get_parameters()
            .set_names(Some(names.to_vec()))
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|err| {
                warn!(count = names.len(), "SSM GetParameters failed: {}", err);
                anyhow::Error::new(err)
            })?;

        let invalid = response.invalid_parameters();
        if !invalid.is_empty() {
            debug!(invalid = ?invalid, "SSM reported unknown parameters");
        }

        let parameters = response
            .parameters()
            .iter()
            .filter_map(|p| match (p.name(), p.value()) {
                (Some(name), Some(value)) => Some(FetchedParameter::new(name, value)),
                _ => None,
            })
            .collect();

        Ok(parameters)
    }
}
