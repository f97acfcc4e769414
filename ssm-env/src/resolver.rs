use crate::domain::{ParameterRequest, ResolvedParameter};

/// Prefixes every name with `path`. No separator is inserted, so a path meant
/// as a directory must carry its own trailing slash.
pub fn resolve(path: &str, parameters: &[ParameterRequest]) -> Vec<ResolvedParameter> {
    parameters
        .iter()
        .map(|parameter| {
            ResolvedParameter::new(
                parameter.name.as_str(),
                format!("{}{}", path, parameter.name),
                parameter.env_name(),
            )
        })
        .collect()
}

pub fn full_names(resolved: &[ResolvedParameter]) -> Vec<String> {
    resolved
        .iter()
        .map(|parameter| parameter.full_name().to_string())
        .collect()
}
