use std::fmt;

const REDACTED: &str = "<redacted>";

/// A single value the caller wants pulled from the parameter store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRequest {
    pub name: String,
    pub env_name: Option<String>,
}

impl ParameterRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            env_name: None,
        }
    }

    pub fn with_env_name(mut self, env_name: impl Into<String>) -> Self {
        self.env_name = Some(env_name.into());
        self
    }

    /// Destination environment key. Falls back to the unprefixed name.
    pub fn env_name(&self) -> &str {
        self.env_name.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for ParameterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.env_name())
    }
}

/// A request with its fully qualified store key computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameter {
    name: String,
    full_name: String,
    env_name: String,
}

impl ResolvedParameter {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        env_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            env_name: env_name.into(),
        }
    }

    /// Name as the caller wrote it, without the path prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }
}

/// A name/value pair as returned by the parameter store.
#[derive(Clone, PartialEq, Eq)]
pub struct FetchedParameter {
    pub name: String,
    pub value: String,
}

impl FetchedParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A value that was fetched and written to the environment.
///
/// `name` is the fully qualified store key (path prefix included), while
/// `env_name` is the key it was written under.
#[derive(Clone, PartialEq, Eq)]
pub struct AppliedParameter {
    name: String,
    env_name: String,
    value: String,
}

impl AppliedParameter {
    pub fn from_parts(resolved: &ResolvedParameter, value: impl Into<String>) -> Self {
        Self {
            name: resolved.full_name().to_string(),
            env_name: resolved.env_name().to_string(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

// Values are secrets more often than not.
impl fmt::Display for AppliedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.env_name)
    }
}

impl fmt::Debug for AppliedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppliedParameter")
            .field("name", &self.name)
            .field("env_name", &self.env_name)
            .field("value", &REDACTED)
            .finish()
    }
}

impl fmt::Debug for FetchedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchedParameter")
            .field("name", &self.name)
            .field("value", &REDACTED)
            .finish()
    }
}
