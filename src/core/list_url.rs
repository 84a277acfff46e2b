use crate::domain::model::ListParams;
use crate::utils::error::Result;
use url::{form_urlencoded, Url};

/// Path of the list endpoint, relative to the directory page.
pub const LIST_PATH: &str = "list/";

/// Relative request target: `list/?page=<page>[&query=<query>]`.
///
/// Both values are form-urlencoded. The query segment only appears for a
/// non-empty query.
pub fn list_path(params: &ListParams) -> String {
    let mut path = format!("{}?page={}", LIST_PATH, params.page_or_first());
    if let Some(query) = params.effective_query() {
        path.push_str("&query=");
        path.extend(form_urlencoded::byte_serialize(query.as_bytes()));
    }
    path
}

/// Resolves [`list_path`] against `base` the way a browser resolves a
/// relative URL against the current page.
pub fn list_url(base: &Url, params: &ListParams) -> Result<Url> {
    Ok(base.join(&list_path(params))?)
}
