pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::model::{ListParams, DEFAULT_CONTAINER_ID};
    use crate::domain::ports::ConfigProvider;
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::time::Duration;

    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/teachers/directory/";

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "teacher-directory")]
    #[command(about = "Fetch a page of the teachers directory and render it to a file")]
    pub struct CliConfig {
        /// Directory page URL the list endpoint is resolved against
        #[arg(long)]
        pub base_url: Option<String>,

        /// TOML configuration file; command-line values override it
        #[arg(short, long)]
        pub config: Option<String>,

        /// Filter by name or subject
        #[arg(short, long)]
        pub query: Option<String>,

        /// Page number (first page when omitted)
        #[arg(short, long)]
        pub page: Option<u32>,

        /// File the fragment is written to
        #[arg(short, long, default_value = "./teachers-container.html")]
        pub output: String,

        #[arg(long)]
        pub timeout_seconds: Option<u64>,

        /// Print the outcome as JSON on stdout
        #[arg(long)]
        pub json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn list_params(&self) -> ListParams {
            ListParams {
                query: self.query.clone(),
                page: self.page,
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn base_url(&self) -> &str {
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
        }

        fn container_id(&self) -> &str {
            DEFAULT_CONTAINER_ID
        }

        fn timeout(&self) -> Option<Duration> {
            self.timeout_seconds.map(Duration::from_secs)
        }
    }

}
