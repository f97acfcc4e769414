use serde_derive::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::{
    Configs,
    loaders::{
        self,
        environment::{env_flag, env_or, optional_env},
    },
};
use crate::{domain::ParameterRequest, error::ValidationError};

const OPTIONS_SOURCE_ENV: &str = "SSM_ENV_OPTIONS";
const PARAMETERS_ENV: &str = "SSM_ENV_PARAMETERS";
const PATH_ENV: &str = "SSM_ENV_PATH";
const REGION_ENV: &str = "SSM_ENV_REGION";
const AWS_REGION_ENV: &str = "AWS_REGION";
const WITH_DECRYPTION_ENV: &str = "SSM_ENV_WITH_DECRYPTION";

/// Options for one load, as supplied by the caller.
///
/// Nothing here is trusted until [`Options::validate`] has produced a
/// [`ValidatedOptions`]. Deserializing goes through [`Options::from_value`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Options {
    pub path: Option<String>,
    pub parameters: Vec<ParameterRequest>,
    pub region: Option<String>,
    pub with_decryption: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedOptions {
    path: String,
    parameters: Vec<ParameterRequest>,
    region: String,
    with_decryption: bool,
}

impl ValidatedOptions {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parameters(&self) -> &[ParameterRequest] {
        &self.parameters
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn with_decryption(&self) -> bool {
        self.with_decryption
    }
}

impl Options {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..Default::default()
        }
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn parameter(mut self, parameter: ParameterRequest) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: impl IntoIterator<Item = ParameterRequest>) -> Self {
        self.parameters.extend(parameters);
        self
    }

    pub fn with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = Some(with_decryption);
        self
    }

    /// Checks the options before anything touches the network.
    ///
    /// Fails on the first problem found: a parameter with a blank name, a
    /// destination key the OS cannot store, or a missing region.
    pub fn validate(&self) -> Result<ValidatedOptions, ValidationError> {
        for (index, parameter) in self.parameters.iter().enumerate() {
            if parameter.name.trim().is_empty() {
                return Err(ValidationError::InvalidParameterName { index });
            }
            if !is_valid_env_key(parameter.env_name()) {
                return Err(ValidationError::InvalidEnvName { index });
            }
        }

        let region = self
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .ok_or(ValidationError::InvalidRegion)?;

        Ok(ValidatedOptions {
            path: self.path.clone().unwrap_or_default(),
            parameters: self.parameters.clone(),
            region: region.to_string(),
            with_decryption: self.with_decryption.unwrap_or(true),
        })
    }

    /// Builds options from an untyped JSON document, checking the shape of
    /// every field. An absent region is left for [`Options::validate`] to
    /// reject so that callers can fill it in from elsewhere first.
    pub fn from_value(document: &Value) -> Result<Self, ValidationError> {
        let items = match document.get("parameters") {
            Some(Value::Array(items)) => items,
            _ => return Err(ValidationError::InvalidParameters),
        };

        let mut parameters = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .ok_or(ValidationError::InvalidParameterName { index })?;
            // A non-string envName falls back to the name.
            let env_name = item
                .get("envName")
                .and_then(Value::as_str)
                .map(str::to_string);
            parameters.push(ParameterRequest {
                name: name.to_string(),
                env_name,
            });
        }

        let path = match document.get("path") {
            None | Some(Value::Null) => None,
            Some(Value::String(path)) => Some(path.clone()),
            Some(_) => return Err(ValidationError::InvalidPath),
        };

        let region = match document.get("region") {
            None | Some(Value::Null) => None,
            Some(Value::String(region)) => Some(region.clone()),
            Some(_) => return Err(ValidationError::InvalidRegion),
        };

        let with_decryption = match document.get("withDecryption") {
            None | Some(Value::Null) => None,
            Some(Value::Bool(flag)) => Some(*flag),
            Some(_) => return Err(ValidationError::InvalidWithDecryption),
        };

        Ok(Self {
            path,
            parameters,
            region,
            with_decryption,
        })
    }
}

impl TryFrom<Value> for Options {
    type Error = ValidationError;

    fn try_from(document: Value) -> Result<Self, Self::Error> {
        Options::from_value(&document)
    }
}

fn is_valid_env_key(key: &str) -> bool {
    !key.is_empty() && !key.contains('=') && !key.contains('\0')
}

/// Parses `name` / `name=ENV_NAME` entries separated by commas.
fn parse_parameter_list(raw: &str) -> Vec<ParameterRequest> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((name, env_name)) => {
                ParameterRequest::new(name.trim()).with_env_name(env_name.trim())
            }
            None => ParameterRequest::new(entry),
        })
        .collect()
}

#[async_trait::async_trait]
impl Configs for Options {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut options = match optional_env(OPTIONS_SOURCE_ENV) {
            Some(source) => {
                let raw = loaders::load(&source)?;
                serde_json::from_str::<Options>(&raw)?
            }
            None => Options {
                path: optional_env(PATH_ENV),
                parameters: parse_parameter_list(&env_or(PARAMETERS_ENV, "")),
                region: None,
                with_decryption: Some(env_flag(WITH_DECRYPTION_ENV, true)?),
            },
        };

        if options.region.is_none() {
            options.region = optional_env(REGION_ENV).or_else(|| optional_env(AWS_REGION_ENV));
        }

        debug!(
            parameters = options.parameters.len(),
            region = options.region.as_deref().unwrap_or("<unset>"),
            "Loaded parameter options from environment"
        );

        Ok(options)
    }
}
