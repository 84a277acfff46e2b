use clap::Parser;
use std::sync::Arc;
use teacher_directory::utils::error::ErrorSeverity;
use teacher_directory::utils::logger;
use teacher_directory::utils::validation::{validate_output_path, Validate};
use teacher_directory::{
    CliConfig, ConfigProvider, FetchError, FetchOutcome, FetcherConfig, FileContainer,
    TeacherListFetcher,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting teacher-directory");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let target = Arc::new(FileContainer::new(cli.output.clone()));
    let fetcher = match TeacherListFetcher::from_config(&config, Arc::clone(&target)) {
        Ok(fetcher) => fetcher,
        Err(e) => exit_with(&e),
    };

    let params = cli.list_params();
    let outcome = fetcher.fetch(&params).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    match outcome {
        FetchOutcome::Success(fragment) => {
            if !cli.json {
                println!(
                    "✅ Page {} rendered to {} ({} bytes)",
                    params.page_or_first(),
                    target.path().display(),
                    fragment.body.len()
                );
            }
            Ok(())
        }
        FetchOutcome::Failure { reason } => {
            if !cli.json {
                eprintln!("❌ Search error: {}", reason);
            }
            std::process::exit(2);
        }
    }
}

fn load_config(cli: &CliConfig) -> teacher_directory::Result<FetcherConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            FetcherConfig::from_file(path)?
        }
        None => FetcherConfig::new(cli.base_url()),
    };

    if let Some(base_url) = &cli.base_url {
        config.set_base_url(base_url.clone());
    }
    if let Some(seconds) = cli.timeout_seconds {
        config.set_timeout_seconds(seconds);
    }

    config.validate()?;
    validate_output_path("output", &cli.output)?;
    Ok(config)
}

fn exit_with(e: &FetchError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Critical => 3,
        _ => 1,
    };
    std::process::exit(exit_code);
}
