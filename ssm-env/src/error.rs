use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidParameters,
    InvalidParameterName { index: usize },
    InvalidEnvName { index: usize },
    InvalidPath,
    InvalidRegion,
    InvalidWithDecryption,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters => write!(
                f,
                "Unexpected value for option 'parameters'. Expected an array."
            ),
            Self::InvalidParameterName { index } => write!(
                f,
                "Unexpected value for attribute 'name' for parameter at index {}. Expected a non-empty string.",
                index
            ),
            Self::InvalidEnvName { index } => write!(
                f,
                "Unexpected value for attribute 'envName' for parameter at index {}. Expected a non-empty key without '=' or NUL.",
                index
            ),
            Self::InvalidPath => write!(
                f,
                "Unexpected value for option 'path'. Expected a string or undefined."
            ),
            Self::InvalidRegion => write!(
                f,
                "Unexpected value for option 'region'. Expected a non-empty string."
            ),
            Self::InvalidWithDecryption => write!(
                f,
                "Unexpected value for option 'withDecryption'. Expected a boolean or undefined."
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure of a single load. The store error is carried as the provider
/// raised it.
#[derive(Debug)]
pub enum LoadError {
    Validation(ValidationError),
    StoreFetch(anyhow::Error),
}

impl LoadError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Underlying provider error, if the fetch stage failed.
    pub fn store_error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::StoreFetch(err) => Some(err),
            Self::Validation(_) => None,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Invalid options: {}", err),
            Self::StoreFetch(err) => write!(f, "Parameter store fetch failed: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::StoreFetch(err) => Some(&**err),
        }
    }
}

impl From<ValidationError> for LoadError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_name_error_mentions_index() {
        let err = ValidationError::InvalidParameterName { index: 3 };
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_store_error_is_exposed_unchanged() {
        let err = LoadError::StoreFetch(anyhow::anyhow!("AccessDenied"));
        assert!(!err.is_validation());
        assert_eq!(err.store_error().unwrap().to_string(), "AccessDenied");
    }

    #[test]
    fn test_validation_converts() {
        let err: LoadError = ValidationError::InvalidRegion.into();
        assert!(err.is_validation());
        assert!(err.store_error().is_none());
    }
}
