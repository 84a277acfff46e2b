pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{Document, FileContainer, MemoryContainer};
pub use config::toml_config::FetcherConfig;
pub use core::fetcher::TeacherListFetcher;
pub use domain::model::{FailureReason, FetchOutcome, Fragment, ListParams, DEFAULT_CONTAINER_ID};
pub use domain::ports::{ConfigProvider, RenderTarget};
pub use utils::error::{FetchError, Result};
