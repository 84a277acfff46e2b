use crate::adapters::{Document, MemoryContainer};
use crate::core::list_url;
use crate::domain::model::{FailureReason, FetchOutcome, Fragment, ListParams};
use crate::domain::ports::{ConfigProvider, RenderTarget};
use crate::utils::error::Result;
use crate::utils::validation::validate_directory_url;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::task::JoinHandle;
use url::Url;

/// Requests the rendered teacher list and writes it into a [`RenderTarget`].
///
/// Every call is independent: there is no cancellation and no ordering
/// between overlapping fetches, so the last response to arrive owns the
/// target.
pub struct TeacherListFetcher<T: RenderTarget + ?Sized> {
    client: Client,
    base_url: Url,
    target: Arc<T>,
}

impl<T: RenderTarget + ?Sized> Clone for TeacherListFetcher<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            target: Arc::clone(&self.target),
        }
    }
}

impl<T: RenderTarget + ?Sized> TeacherListFetcher<T> {
    /// `base_url` is the address of the directory page the list belongs to.
    pub fn new(base_url: &str, target: Arc<T>) -> Result<Self> {
        Self::with_client(Client::new(), base_url, target)
    }

    pub fn with_client(client: Client, base_url: &str, target: Arc<T>) -> Result<Self> {
        Ok(Self {
            client,
            base_url: validate_directory_url("base_url", base_url)?,
            target,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C, target: Arc<T>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Self::with_client(builder.build()?, config.base_url(), target)
    }

    pub fn list_url(&self, params: &ListParams) -> Result<Url> {
        list_url::list_url(&self.base_url, params)
    }

    /// Performs one GET. Only a 200 touches the target; everything else is
    /// logged and reported back as [`FetchOutcome::Failure`].
    pub async fn fetch(&self, params: &ListParams) -> FetchOutcome {
        let url = match self.list_url(params) {
            Ok(url) => url,
            Err(e) => return search_error(FailureReason::Transport(e.to_string())),
        };

        tracing::debug!("Requesting teacher list: {}", url);
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return search_error(FailureReason::Transport(e.to_string())),
        };

        let status = response.status();
        tracing::debug!("Teacher list response status: {}", status);
        if status != StatusCode::OK {
            return search_error(FailureReason::Status(status.as_u16()));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return search_error(FailureReason::Transport(e.to_string())),
        };
        tracing::debug!("Teacher list fragment: {}", body);

        if let Err(e) = self.target.replace_markup(&body).await {
            return search_error(FailureReason::Render(e.to_string()));
        }

        tracing::info!(
            "Rendered teacher list page {} ({} bytes)",
            params.page_or_first(),
            body.len()
        );
        FetchOutcome::Success(Fragment::new(body))
    }
}

impl TeacherListFetcher<MemoryContainer> {
    /// Binds to the document element named by `config.container_id()`.
    /// Fails before any request if the page has no such element.
    pub fn for_document<C: ConfigProvider>(config: &C, document: &Document) -> Result<Self> {
        let container = document.get_element_by_id(config.container_id())?;
        Self::from_config(config, container)
    }
}

impl<T: RenderTarget + ?Sized + 'static> TeacherListFetcher<T> {
    /// Fire-and-forget variant of [`fetch`](Self::fetch). Returns at once;
    /// the handle may be dropped without affecting the request.
    pub fn spawn(&self, params: ListParams) -> JoinHandle<FetchOutcome> {
        let fetcher = self.clone();
        tokio::spawn(async move { fetcher.fetch(&params).await })
    }
}

fn search_error(reason: FailureReason) -> FetchOutcome {
    tracing::warn!("Search error! {}", reason);
    FetchOutcome::failure(reason)
}
