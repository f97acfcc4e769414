use futures::future::try_join_all;
use tracing::debug;

use crate::{
    domain::FetchedParameter,
    store::{MAX_NAMES_PER_REQUEST, ParameterStore},
};

pub const BATCH_SIZE: usize = MAX_NAMES_PER_REQUEST;

/// Fetches `names` in batches of [`BATCH_SIZE`], all batches in flight at once.
///
/// The first failing batch fails the whole call with the store's error and the
/// remaining results are dropped. On success the batches are concatenated in
/// the order they were submitted.
pub async fn fetch_all<S>(
    store: &S,
    names: &[String],
    with_decryption: bool,
) -> anyhow::Result<Vec<FetchedParameter>>
where
    S: ParameterStore + ?Sized,
{
    let batches: Vec<&[String]> = names.chunks(BATCH_SIZE).collect();
    debug!(
        names = names.len(),
        batches = batches.len(),
        "Fetching parameters in batches"
    );

    let responses = try_join_all(
        batches
            .into_iter()
            .map(|batch| store.fetch(batch, with_decryption)),
    )
    .await?;

    Ok(responses.into_iter().flatten().collect())
}
