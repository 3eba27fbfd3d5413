//! Server binary for pdf2docx.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ServiceConfig` and starts the HTTP server.

use anyhow::{Context, Result};
use clap::Parser;
use pdf2docx::{http, ServiceConfig};
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Serve on the default address (0.0.0.0:8080)
  pdf2docx-server

  # Custom bind address and a 5 MiB upload limit
  pdf2docx-server --bind 127.0.0.1:9000 --max-upload-mib 5

ENDPOINTS:
  POST /api/conversion/convert   multipart PDF upload → DOCX download
  GET  /api/conversion/health    liveness probe
  GET  /api/conversion/info      service descriptor (formats, limits)

ENVIRONMENT VARIABLES:
  PDF2DOCX_BIND            Bind address (same as --bind)
  PDF2DOCX_MAX_UPLOAD_MIB  Upload limit in MiB (same as --max-upload-mib)
  RUST_LOG                 Tracing filter, e.g. RUST_LOG=pdf2docx=debug
"#;

/// HTTP service converting uploaded PDF documents to Word (DOCX).
#[derive(Parser, Debug)]
#[command(
    name = "pdf2docx-server",
    version,
    about = "HTTP service converting uploaded PDF documents to Word (DOCX)",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Socket address to listen on.
    #[arg(long, env = "PDF2DOCX_BIND", default_value = "0.0.0.0:8080")]
    bind: String,

    /// Maximum accepted upload size in MiB.
    #[arg(long, env = "PDF2DOCX_MAX_UPLOAD_MIB", default_value_t = 10)]
    max_upload_mib: usize,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "PDF2DOCX_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, env = "PDF2DOCX_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    let config = ServiceConfig::builder()
        .bind_addr(cli.bind)
        .max_upload_bytes(cli.max_upload_mib * 1024 * 1024)
        .build()
        .context("invalid service configuration")?;

    http::start_server(config)
        .await
        .context("server terminated with an error")
}
