use clap::{Arg, Command};
use std::env;
use std::process;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

use pdf_summarizer::{start_server, AppState, SummarizerService};

#[tokio::main]
async fn main() {
    // Parse command line arguments first
    let matches = Command::new("pdf-summarizer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("HTTP API for PDF text extraction and summarization")
        .long_about(
            "This service provides the following endpoints:\n\
            - POST /extract-text: decode a base64 PDF data-URI, strip repeated\n\
              headers/footers and junk lines, and return the cleaned text\n\
            - POST /summarize-text: summarize text through the configured\n\
              remote summarization service\n\
            - GET /health: liveness probe",
        )
        .arg(
            Arg::new("listen")
                .long("listen")
                .short('l')
                .value_name("ADDR")
                .help("Address to bind the HTTP server to (default 127.0.0.1:5000)")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("summarizer-base-url")
                .long("summarizer-base-url")
                .value_name("URL")
                .help("Base URL of the remote summarization service")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("summarizer-api-key")
                .long("summarizer-api-key")
                .value_name("KEY")
                .help("API key for the remote summarization service")
                .action(clap::ArgAction::Set),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Initialize tracing to stderr; RUST_LOG wins over the quiet flag.
    let default_level = if matches.get_flag("quiet") {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Get configuration from command line arguments or environment variables
    let listen = matches
        .get_one::<String>("listen")
        .cloned()
        .or_else(|| env::var("PDF_SUMMARIZER_ADDR").ok())
        .unwrap_or_else(|| "127.0.0.1:5000".to_string());

    let summarizer_base_url = matches
        .get_one::<String>("summarizer-base-url")
        .cloned()
        .or_else(|| env::var("SUMMARIZER_BASE_URL").ok());

    let summarizer_api_key = matches
        .get_one::<String>("summarizer-api-key")
        .cloned()
        .or_else(|| env::var("SUMMARIZER_API_KEY").ok());

    // A misspelled URL should fail at startup, not on the first request.
    if let Some(base_url) = &summarizer_base_url {
        if let Err(e) = Url::parse(base_url) {
            error!("Invalid summarizer base URL '{}': {}", base_url, e);
            process::exit(1);
        }
    }

    // Log summarizer configuration status (without exposing secrets)
    match (&summarizer_base_url, &summarizer_api_key) {
        (Some(_), Some(_)) => {
            info!("Summarization service configured");
        }
        (Some(_), None) => {
            warn!("Summarizer base URL found but API key missing - /summarize-text will be disabled");
        }
        (None, Some(_)) => {
            warn!("Summarizer API key found but base URL missing - /summarize-text will be disabled");
        }
        (None, None) => {
            // Neither is set; extraction-only deployment
        }
    }

    let summarizer = if let (Some(base_url), Some(api_key)) =
        (summarizer_base_url, summarizer_api_key)
    {
        Some(SummarizerService::new(base_url, api_key))
    } else {
        None
    };

    info!("Starting pdf-summarizer...");

    let state = AppState::new(summarizer);
    if let Err(e) = start_server(&listen, state).await {
        error!("Failed to start server: {}", e);
        process::exit(1);
    }
}
