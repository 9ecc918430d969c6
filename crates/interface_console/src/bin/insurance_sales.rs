//! Insurance Sales Console - Terminal Binary
//!
//! # Usage
//!
//! ```bash
//! # Run against a local backend
//! cargo run --bin insurance-sales
//!
//! # Run against another backend
//! SALES_API_BASE_URL=http://sales-api:8080 cargo run --bin insurance-sales
//! ```
//!
//! # Environment Variables
//!
//! * `SALES_API_BASE_URL` - Backend address (default: http://localhost:8080)
//! * `SALES_REQUEST_TIMEOUT_SECS` - Per-request timeout (default: none)
//! * `SALES_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `SALES_CONFIRMATION_DELAY_MS` - How long form confirmations stay up (default: 1500)

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_api::SalesClient;
use interface_console::{App, Command, ConsoleConfig, Reply};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ConsoleConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Ignoring invalid SALES_* configuration: {}", e);
        ConsoleConfig::default()
    });

    init_tracing(&config.log_level);

    tracing::info!(
        base_url = %config.api_base_url,
        timeout_secs = ?config.request_timeout_secs,
        "Starting insurance sales console"
    );

    let client = SalesClient::from_config(&config.client_config())
        .context("Failed to create API client")?;
    let mut app = App::new(client, config.confirmation_delay());

    println!("{}", app.render());
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    break;
                };
                match Command::parse(&line).map(|c| c.map(|c| app.execute(c))) {
                    Ok(None) => {}
                    Ok(Some(Ok(Reply::Render))) => println!("{}", app.render()),
                    Ok(Some(Ok(Reply::Text(text)))) => println!("{}", text),
                    Ok(Some(Ok(Reply::Quit))) => break,
                    Ok(Some(Err(e))) | Err(e) => println!("{}", e),
                }
            }
            Some(event) = app.next_event() => {
                if app.handle(event) {
                    println!("{}", app.render());
                }
            }
        }
    }

    tracing::info!("Console closed");
    Ok(())
}

/// Initializes the tracing subscriber; logs go to stderr so they do not
/// interleave with the rendered pages
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
