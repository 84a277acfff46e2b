use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page index used when the caller does not pick one.
pub const FIRST_PAGE: u32 = 1;

/// Element id the directory page renders the teacher list into.
pub const DEFAULT_CONTAINER_ID: &str = "teachers-container";

/// Filter and page for one list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    pub query: Option<String>,
    pub page: Option<u32>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_or_first(&self) -> u32 {
        self.page.unwrap_or(FIRST_PAGE)
    }

    /// The query, if it would actually filter anything.
    pub fn effective_query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}

/// Pre-rendered markup returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub body: String,
    pub received_at: DateTime<Utc>,
}

impl Fragment {
    pub fn new(body: String) -> Self {
        Self {
            body,
            received_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    /// Server answered with anything but 200.
    Status(u16),
    /// No status was received.
    Transport(String),
    /// The render target rejected the write.
    Render(String),
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Status(code) => write!(f, "server responded with status {}", code),
            FailureReason::Transport(msg) => write!(f, "request failed: {}", msg),
            FailureReason::Render(msg) => write!(f, "could not render fragment: {}", msg),
        }
    }
}

/// Completion of a single list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    Success(Fragment),
    Failure { reason: FailureReason },
}

impl FetchOutcome {
    pub fn failure(reason: FailureReason) -> Self {
        FetchOutcome::Failure { reason }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn fragment(&self) -> Option<&Fragment> {
        match self {
            FetchOutcome::Success(fragment) => Some(fragment),
            FetchOutcome::Failure { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            FetchOutcome::Success(_) => None,
            FetchOutcome::Failure { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_not_effective() {
        let params = ListParams::new().with_query("");
        assert_eq!(params.effective_query(), None);

        let params = ListParams::new().with_query("smith");
        assert_eq!(params.effective_query(), Some("smith"));
    }

    #[test]
    fn test_page_defaults_to_first() {
        assert_eq!(ListParams::new().page_or_first(), 1);
        assert_eq!(ListParams::new().with_page(4).page_or_first(), 4);
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let outcome = FetchOutcome::failure(FailureReason::Status(404));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "failure");
        assert_eq!(json["reason"]["kind"], "status");
        assert_eq!(json["reason"]["detail"], 404);
    }
}
