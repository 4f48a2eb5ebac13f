use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviedemo::config::{AwsConfig, Config, StorageBackend, DEFAULT_REGION, SAMPLE_DATA_URL};
use moviedemo::loader::HttpSampleSource;
use moviedemo::prelude::p_b;
use moviedemo::repl::{CommandLoop, Console};
use moviedemo::storage::create_gateway;

/// moviedemo - Walk through DynamoDB operations on a movies table
#[derive(Parser, Debug)]
#[command(name = "moviedemo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Storage backend
    #[arg(long, value_enum, default_value_t = StorageBackend::Dynamodb, env = "MOVIEDEMO_STORAGE")]
    storage: StorageBackend,

    /// Custom DynamoDB endpoint (e.g. http://localhost:8000 for DynamoDB Local)
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// AWS region
    #[arg(long, default_value = DEFAULT_REGION, env = "AWS_REGION")]
    region: String,

    /// Location of the sample movie archive
    #[arg(long, default_value = SAMPLE_DATA_URL, env = "MOVIEDEMO_SAMPLE_URL")]
    sample_url: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            storage: cli.storage,
            aws: AwsConfig {
                endpoint_url: cli.endpoint_url,
                region: cli.region,
            },
            sample_url: cli.sample_url,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moviedemo=warn,moviedemo_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(?config, "Starting");

    let gateway = create_gateway(&config).await;
    let samples = Arc::new(HttpSampleSource::new(config.sample_url.clone()));

    let mut stdout = anstream::stdout();
    writeln!(stdout, "{} {}", p_b("Target:"), config.target_display())?;

    let console = Console::new(std::io::stdin().lock(), stdout);
    CommandLoop::new(gateway, samples, console).run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["moviedemo"]).unwrap();
        let config = Config::from(cli);

        assert_eq!(config.sample_url, SAMPLE_DATA_URL);
    }

    #[test]
    fn test_cli_memory_backend_with_endpoint() {
        let cli = Cli::try_parse_from([
            "moviedemo",
            "--storage",
            "memory",
            "--endpoint-url",
            "http://localhost:8000",
            "--region",
            "eu-west-1",
        ])
        .unwrap();
        let config = Config::from(cli);

        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(
            config.aws.endpoint_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert_eq!(config.aws.region, "eu-west-1");
    }

    #[test]
    fn test_cli_rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["moviedemo", "--storage", "postgres"]).is_err());
    }
}
