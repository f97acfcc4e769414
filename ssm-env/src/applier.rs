use tracing::{debug, warn};

use crate::{
    domain::{AppliedParameter, FetchedParameter, ResolvedParameter},
    env::EnvironmentWriter,
};

/// Pairs each fetched value with the request it answers.
///
/// Fetched names nobody asked for are dropped, as are requests the store did
/// not answer. Output order follows `fetched`.
pub fn merge(
    resolved: &[ResolvedParameter],
    fetched: Vec<FetchedParameter>,
) -> Vec<AppliedParameter> {
    let applied: Vec<AppliedParameter> = fetched
        .into_iter()
        .filter_map(|fetched| {
            let matched = resolved.iter().find(|r| r.full_name() == fetched.name);
            if matched.is_none() {
                debug!(name = fetched.name.as_str(), "Ignoring unrequested parameter");
            }
            matched.map(|r| AppliedParameter::from_parts(r, fetched.value))
        })
        .collect();

    if applied.len() < resolved.len() {
        for missing in resolved
            .iter()
            .filter(|r| !applied.iter().any(|a| a.name() == r.full_name()))
        {
            debug!(name = missing.full_name(), "Parameter not returned by store");
        }
    }

    applied
}

/// Writes each value under its env name and returns the entries that were
/// actually stored. Entries the environment refuses are dropped.
pub fn apply<E>(applied: Vec<AppliedParameter>, environment: &E) -> Vec<AppliedParameter>
where
    E: EnvironmentWriter + ?Sized,
{
    applied
        .into_iter()
        .filter(|parameter| {
            match environment.set(parameter.env_name(), parameter.value()) {
                Ok(()) => {
                    debug!(env_name = parameter.env_name(), "Applied parameter");
                    true
                }
                Err(err) => {
                    warn!(
                        name = parameter.name(),
                        env_name = parameter.env_name(),
                        "Skipping parameter: {}",
                        err
                    );
                    false
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnvironment;

    fn resolved() -> Vec<ResolvedParameter> {
        vec![
            ResolvedParameter::new("db", "/app/db", "DATABASE_URL"),
            ResolvedParameter::new("token", "/app/token", "token"),
        ]
    }

    #[test]
    fn test_merge_matches_by_full_name() {
        let applied = merge(
            &resolved(),
            vec![
                FetchedParameter::new("/app/token", "t0k3n"),
                FetchedParameter::new("/app/db", "postgres://"),
            ],
        );

        assert_eq!(applied.len(), 2);
        assert_eq!(applied[0].name(), "/app/token");
        assert_eq!(applied[0].env_name(), "token");
        assert_eq!(applied[1].env_name(), "DATABASE_URL");
        assert_eq!(applied[1].value(), "postgres://");
    }

    #[test]
    fn test_merge_skips_missing_and_extra() {
        let applied = merge(
            &resolved(),
            vec![
                FetchedParameter::new("/app/db", "postgres://"),
                FetchedParameter::new("/other/thing", "x"),
            ],
        );

        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].name(), "/app/db");
    }

    #[test]
    fn test_merge_first_match_wins_for_duplicate_requests() {
        let resolved = vec![
            ResolvedParameter::new("db", "/app/db", "FIRST"),
            ResolvedParameter::new("db", "/app/db", "SECOND"),
        ];
        let applied = merge(&resolved, vec![FetchedParameter::new("/app/db", "v")]);

        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].env_name(), "FIRST");
    }

    #[test]
    fn test_apply_writes_and_overwrites() {
        let env = MemoryEnvironment::new();
        env.set("DATABASE_URL", "old").unwrap();

        let applied = merge(&resolved(), vec![FetchedParameter::new("/app/db", "new")]);
        let written = apply(applied, &env);

        assert_eq!(written.len(), 1);
        assert_eq!(env.get("DATABASE_URL").as_deref(), Some("new"));
        assert_eq!(env.get("token"), None);
    }

    struct RefusingEnvironment {
        inner: MemoryEnvironment,
        refused_key: &'static str,
    }

    impl EnvironmentWriter for RefusingEnvironment {
        fn set(&self, key: &str, value: &str) -> Result<(), String> {
            if key == self.refused_key {
                return Err(format!("cannot store '{key}'"));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_apply_returns_only_written_entries() {
        let env = RefusingEnvironment {
            inner: MemoryEnvironment::new(),
            refused_key: "DATABASE_URL",
        };

        let applied = merge(
            &resolved(),
            vec![
                FetchedParameter::new("/app/db", "postgres://"),
                FetchedParameter::new("/app/token", "t0k3n"),
            ],
        );
        let written = apply(applied, &env);

        assert_eq!(written.len(), 1);
        assert_eq!(written[0].env_name(), "token");
        assert_eq!(env.inner.get("DATABASE_URL"), None);
        assert_eq!(env.inner.get("token").as_deref(), Some("t0k3n"));
    }
}
