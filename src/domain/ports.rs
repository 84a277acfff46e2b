use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where a fetched fragment ends up. Writes replace the whole content.
#[async_trait]
pub trait RenderTarget: Send + Sync {
    async fn replace_markup(&self, markup: &str) -> Result<()>;
    async fn markup(&self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn container_id(&self) -> &str;
    /// `None` means requests may wait forever.
    fn timeout(&self) -> Option<Duration>;
}
