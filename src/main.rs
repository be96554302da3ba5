//! CLI entry point for the perf_rater tool.
//!
//! Provides subcommands for analyzing an entity's standing in a performance
//! feed and for listing the feed's ids in selector order.

use anyhow::Result;
use clap::{Parser, Subcommand};
use perf_rater::{
    fetch::{BasicClient, LoadToken, load_feed},
    output::{append_record, print_json},
    parser::parse_feed,
    ranking::engine::report,
    ranking::selector::{search, selector_order},
    ranking::types::Dataset,
    schema::FeedSchema,
    summary::RunSummary,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "perf_rater")]
#[command(about = "A tool to rank entities in a performance feed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute average, rank, percentile, and badge for an id in a feed
    Analyze {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// JSON file mapping feed fields (id/metrics/tier)
        #[arg(short, long)]
        schema: Option<String>,

        /// Entity id to rank; omit to report only the global average
        #[arg(short, long)]
        id: Option<String>,

        /// Metric to rank by; defaults to the schema's first metric
        #[arg(short, long)]
        metric: Option<String>,

        /// CSV file to append results to
        #[arg(short, long, default_value = "runs.csv")]
        output: String,
    },
    /// List feed ids in selector order (trailing-number ascending)
    ListIds {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// JSON file mapping feed fields (id/metrics/tier)
        #[arg(short, long)]
        schema: Option<String>,

        /// Case-insensitive substring filter on the id
        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/perf_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("perf_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            schema,
            id,
            metric,
            output,
        } => {
            let schema = load_schema(schema.as_deref())?;

            let dataset = match fetcher(&source, &schema).await {
                Ok(dataset) => dataset,
                Err(e) => {
                    // non-fatal: record the failure and leave the caller to retry
                    error!(error = %e, "Feed load failed");
                    let error_summary =
                        RunSummary::from_error("load_error", &e.to_string()).with_source(&source);
                    append_record(&output, &error_summary)?;
                    return Ok(());
                }
            };

            let metric = metric.unwrap_or_else(|| schema.default_metric().to_string());
            let result = report(&dataset, id.as_deref(), &metric);

            if id.is_some() && result.selected.is_none() {
                info!(id = id.as_deref(), "Selected id not found in feed");
            }

            print_json(&result)?;
            let summary = RunSummary::from_report(&result, &metric).with_source(&source);
            append_record(&output, &summary)?;
        }
        Commands::ListIds {
            source,
            schema,
            search: query,
        } => {
            let schema = load_schema(schema.as_deref())?;
            let dataset = fetcher(&source, &schema).await?;

            let ordered = selector_order(&dataset);
            let hits = search(&ordered, query.as_deref().unwrap_or(""));

            for row in &hits {
                info!(id = %row.id, tier = row.tier.as_deref(), "Entity");
            }

            info!(
                matched = hits.len(),
                total = ordered.len(),
                query = query.as_deref(),
                "Id list summary"
            );
        }
    }

    Ok(())
}

fn load_schema(path: Option<&str>) -> Result<FeedSchema> {
    match path {
        Some(path) => FeedSchema::load(path),
        None => Ok(FeedSchema::default()),
    }
}

/// Loads feed data from a local file path or fetches it over HTTP.
#[tracing::instrument(skip(schema), fields(source = %source))]
async fn fetcher(source: &str, schema: &FeedSchema) -> Result<Dataset> {
    let dataset = if source.starts_with("http") {
        let client = BasicClient::new();
        let token = LoadToken::new();
        // single-shot CLI load, the token is never revoked here
        load_feed(&client, source, schema, &token)
            .await?
            .unwrap_or_default()
    } else {
        let bytes = std::fs::read(source)?;
        parse_feed(&bytes, schema)?
    };

    info!(rows = dataset.len(), "Feed loaded");
    Ok(dataset)
}
