pub mod adapters;

use crate::domain::FetchedParameter;

/// Most names the parameter store accepts in one request.
pub const MAX_NAMES_PER_REQUEST: usize = 10;

/// Read access to a remote parameter store.
///
/// `fetch` receives at most [`MAX_NAMES_PER_REQUEST`] fully qualified names and
/// returns whichever of them the store knows about. Names the store does not
/// return are not an error at this level.
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    async fn fetch(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> anyhow::Result<Vec<FetchedParameter>>;
}
