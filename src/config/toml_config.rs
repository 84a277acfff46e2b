use crate::domain::model::DEFAULT_CONTAINER_ID;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    pub server: ServerConfig,
    pub page: Option<PageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address of the directory page; `list/` is resolved against it.
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub container_id: Option<String>,
}

impl FetcherConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            server: ServerConfig {
                base_url: base_url.into(),
                timeout_seconds: None,
            },
            page: None,
        }
    }

    /// Reads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = expand_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FetchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.server.base_url = base_url.into();
    }

    pub fn set_timeout_seconds(&mut self, seconds: u64) {
        self.server.timeout_seconds = Some(seconds);
    }

}

/// Expands `${NAME}` and `${NAME:-fallback}` from the environment. A
/// reference to an unset variable without a fallback is left untouched.
fn expand_env_vars(content: &str) -> Result<String> {
    let pattern = regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
        .map_err(|e| FetchError::ConfigError {
            message: format!("environment reference pattern: {}", e),
        })?;

    let expanded = pattern.replace_all(content, |caps: &regex::Captures| {
        match (std::env::var(&caps[1]), caps.get(2)) {
            (Ok(value), _) => value,
            (Err(_), Some(fallback)) => fallback.as_str().to_string(),
            (Err(_), None) => caps[0].to_string(),
        }
    });

    Ok(expanded.into_owned())
}

impl ConfigProvider for FetcherConfig {
    fn base_url(&self) -> &str {
        &self.server.base_url
    }

    fn container_id(&self) -> &str {
        self.page
            .as_ref()
            .and_then(|p| p.container_id.as_deref())
            .unwrap_or(DEFAULT_CONTAINER_ID)
    }

    fn timeout(&self) -> Option<Duration> {
        self.server.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for FetcherConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_directory_url("server.base_url", &self.server.base_url)?;
        if let Some(seconds) = self.server.timeout_seconds {
            validation::validate_timeout_seconds("server.timeout_seconds", seconds)?;
        }
        validation::validate_non_empty_string("page.container_id", self.container_id())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
base_url = "http://localhost:8000/teachers/directory/"
timeout_seconds = 10

[page]
container_id = "results"
"#;

        let config = FetcherConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_url(), "http://localhost:8000/teachers/directory/");
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.container_id(), "results");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_without_page_section() {
        let config = FetcherConfig::from_toml_str(
            r#"
[server]
base_url = "https://school.example.com/teachers/directory/"
"#,
        )
        .unwrap();

        assert_eq!(config.container_id(), "teachers-container");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEACHER_DIRECTORY_TEST_HOST", "https://directory.test");

        let config = FetcherConfig::from_toml_str(
            r#"
[server]
base_url = "${TEACHER_DIRECTORY_TEST_HOST}/teachers/directory/"
"#,
        )
        .unwrap();
        assert_eq!(config.base_url(), "https://directory.test/teachers/directory/");

        std::env::remove_var("TEACHER_DIRECTORY_TEST_HOST");
    }

    #[test]
    fn test_config_validation() {
        let config = FetcherConfig::from_toml_str(
            r#"
[server]
base_url = "teachers/directory/"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let mut config = FetcherConfig::new("http://localhost:8000/");
        config.set_timeout_seconds(0);
        assert!(config.validate().is_err());

        let config = FetcherConfig::from_toml_str(
            r#"
[server]
base_url = "http://localhost:8000/"

[page]
container_id = " "
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_must_be_directory_page() {
        let config = FetcherConfig::new("http://localhost:8000/teachers/directory");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            FetchError::InvalidConfigValueError { ref field, .. } if field == "server.base_url"
        ));

        assert!(FetcherConfig::new("http://localhost:8000/teachers/directory/")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_env_fallback_and_unset_reference() {
        std::env::remove_var("TEACHER_DIRECTORY_UNSET_HOST");

        let expanded = expand_env_vars(concat!(
            "a = \"${TEACHER_DIRECTORY_UNSET_HOST:-http://localhost:8000}/\"\n",
            "b = \"${TEACHER_DIRECTORY_UNSET_HOST}\"",
        ))
        .unwrap();

        assert_eq!(
            expanded,
            "a = \"http://localhost:8000/\"\nb = \"${TEACHER_DIRECTORY_UNSET_HOST}\""
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = FetcherConfig::from_toml_str("[server\nbase_url = 1").unwrap_err();
        assert!(matches!(err, FetchError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nbase_url = \"http://localhost:8000/teachers/directory/\"\n")
            .unwrap();

        let config = FetcherConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000/teachers/directory/");
    }
}
