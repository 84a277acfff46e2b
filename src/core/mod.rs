pub mod fetcher;
pub mod list_url;

pub use crate::domain::model::{FailureReason, FetchOutcome, Fragment, ListParams};
pub use crate::domain::ports::{ConfigProvider, RenderTarget};
pub use crate::utils::error::Result;
