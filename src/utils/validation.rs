use crate::utils::error::{FetchError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> FetchError {
    FetchError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Checks that `url_str` names a directory page that `list/` resolves under:
/// absolute http(s), a host, a path ending in `/`, no query or fragment.
pub fn validate_directory_url(field_name: &str, url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("not an absolute URL ({})", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("scheme '{}' is not http or https", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(invalid(field_name, url_str, "URL has no host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            url_str,
            "directory page URL must not carry a query or fragment",
        ));
    }
    if !url.path().ends_with('/') {
        return Err(invalid(
            field_name,
            url_str,
            "path must end with '/' or list/ resolves outside the directory page",
        ));
    }

    Ok(url)
}

/// The CLI writes the fragment here; it cannot be empty or a bare directory.
pub fn validate_output_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(invalid(field_name, path, "output file is required"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "path contains a NUL byte"));
    }
    if path.ends_with('/') || path.ends_with(std::path::MAIN_SEPARATOR) {
        return Err(invalid(field_name, path, "output must name a file, not a directory"));
    }
    Ok(())
}

pub fn validate_timeout_seconds(field_name: &str, seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(invalid(
            field_name,
            seconds,
            "a zero timeout fails every request; omit it to wait indefinitely",
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "value cannot be empty or whitespace-only"));
    }
    Ok(())
}
