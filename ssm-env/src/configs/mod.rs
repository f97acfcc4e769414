pub mod loaders;
pub mod options;
pub mod store;

pub use options::{Options, ValidatedOptions};
pub use store::StoreConfig;

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}
