use crate::domain::ports::RenderTarget;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Container backed by a file; each render overwrites the file.
#[derive(Debug, Clone)]
pub struct FileContainer {
    path: PathBuf,
}

impl FileContainer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RenderTarget for FileContainer {
    async fn replace_markup(&self, markup: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, markup).await?;
        tracing::debug!("Wrote {} bytes to {}", markup.len(), self.path.display());
        Ok(())
    }

    /// A file that was never written reads as an empty container.
    async fn markup(&self) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(markup) => Ok(markup),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let container = FileContainer::new(temp_dir.path().join("teachers.html"));
        assert_eq!(container.markup().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_creates_parent_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let container = FileContainer::new(temp_dir.path().join("out/page/teachers.html"));

        container.replace_markup("<ul><li>A</li><li>B</li></ul>").await.unwrap();
        container.replace_markup("<ul><li>C</li></ul>").await.unwrap();

        assert_eq!(container.markup().await.unwrap(), "<ul><li>C</li></ul>");
        assert!(container.path().exists());
    }
}
