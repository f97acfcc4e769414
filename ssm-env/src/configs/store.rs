use super::{Configs, loaders::environment::optional_env};

/// Connection settings for the SSM client. The region normally comes from the
/// load options rather than the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    pub fn for_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

#[async_trait::async_trait]
impl Configs for StoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(StoreConfig {
            region: None,
            profile: optional_env("AWS_PROFILE"),
            endpoint_url: optional_env("AWS_ENDPOINT").or_else(|| optional_env("SSM_ENDPOINT")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_load_endpoint_fallback() {
        unsafe {
            std::env::remove_var("AWS_ENDPOINT");
            std::env::set_var("SSM_ENDPOINT", "http://localhost:4566");
        }

        let config = StoreConfig::load().await.unwrap().for_region("us-west-2");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.region.as_deref(), Some("us-west-2"));

        unsafe {
            std::env::remove_var("SSM_ENDPOINT");
        }
    }
}
