use crate::domain::ports::RenderTarget;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// In-memory container element. Clones of an `Arc<MemoryContainer>` all see
/// the same markup.
#[derive(Debug, Default)]
pub struct MemoryContainer {
    inner_html: Mutex<String>,
}

impl MemoryContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markup(markup: impl Into<String>) -> Self {
        Self {
            inner_html: Mutex::new(markup.into()),
        }
    }
}

#[async_trait]
impl RenderTarget for MemoryContainer {
    async fn replace_markup(&self, markup: &str) -> Result<()> {
        let mut inner_html = self.inner_html.lock().await;
        inner_html.clear();
        inner_html.push_str(markup);
        Ok(())
    }

    async fn markup(&self) -> Result<String> {
        Ok(self.inner_html.lock().await.clone())
    }
}
