//! arXiv digest - entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use arxiv_digest::client::ArxivClient;
use arxiv_digest::config::Config;
use arxiv_digest::repl::Repl;
use arxiv_digest::session::Session;
use arxiv_digest::summary::{CompletionSource, FixtureSource, OpenAiSource, SummaryExtractor};

#[derive(Parser, Debug)]
#[command(name = "arxiv-digest")]
#[command(about = "Interactive arXiv search with structured paper summaries")]
#[command(version)]
struct Cli {
    /// OpenAI API key (fixture mode when absent)
    #[arg(long, env = "OPENAI_API_KEY")]
    api_key: Option<String>,

    /// Captured completion response used in fixture mode
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::new(cli.api_key.filter(|k| !k.is_empty()));
    if let Some(fixture) = cli.fixture {
        config.fixture_path = fixture;
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        live = config.has_api_key(),
        "starting arXiv digest session"
    );

    let client = ArxivClient::new(&config)?;

    let source: Box<dyn CompletionSource> = if config.has_api_key() {
        Box::new(OpenAiSource::new(&config)?)
    } else {
        tracing::info!(
            path = %config.fixture_path.display(),
            "no API key configured; replaying fixture responses"
        );
        Box::new(FixtureSource::new(config.fixture_path.clone()))
    };
    let extractor = SummaryExtractor::new(source, config.model.clone());

    let session = Session::new(client, extractor);
    Repl::new(session).run().await
}
