//! CLI administration tool for snapurl.
//!
//! Works directly on the data directory, without the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL for two hours under a chosen alias
//! cargo run --bin snapurl-admin -- shorten https://example.com --validity 120 --alias Promo1
//!
//! # Look up where an alias points
//! cargo run --bin snapurl-admin -- resolve Promo1
//!
//! # List every link
//! cargo run --bin snapurl-admin -- list
//!
//! # Statistics for all links or one alias
//! cargo run --bin snapurl-admin -- stats
//! cargo run --bin snapurl-admin -- stats Promo1
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATA_DIR`, `PUBLIC_BASE_URL`, `LISTEN`,
//! `DEFAULT_VALIDITY_MINUTES`.

use snapurl::AppError;
use snapurl::config::{self, Config};
use snapurl::domain::entities::RawShortenRequest;
use snapurl::infrastructure::clicks::NullClickIngestion;
use snapurl::infrastructure::logging::TracingEventLog;
use snapurl::infrastructure::storage::FileStore;
use snapurl::state::{AppState, ServiceOptions};
use snapurl::utils::origin::short_url;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing snapurl links.
#[derive(Parser)]
#[command(name = "snapurl-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a single URL
    Shorten {
        /// The URL to shorten
        url: String,

        /// Validity in minutes (defaults to DEFAULT_VALIDITY_MINUTES)
        #[arg(short, long)]
        validity: Option<String>,

        /// Custom alias (letters and digits only)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show where an alias redirects
    Resolve {
        alias: String,
    },

    /// List all links
    List,

    /// Show statistics for all links or a single alias
    Stats {
        alias: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let origin = cli_origin(&config);

    let store = FileStore::open(&config.data_dir)
        .await
        .with_context(|| format!("Failed to open {}", config.data_dir.display()))?;

    let state = AppState::new(
        Arc::new(store),
        Arc::new(TracingEventLog::new()),
        Arc::new(NullClickIngestion::new()),
        ServiceOptions::from(&config),
    );

    match cli.command {
        Commands::Shorten {
            url,
            validity,
            alias,
        } => shorten(&state, &origin, url, validity, alias).await?,
        Commands::Resolve { alias } => resolve(&state, &alias).await?,
        Commands::List => list(&state, &origin).await?,
        Commands::Stats { alias } => stats(&state, &origin, alias).await?,
    }

    Ok(())
}

/// Origin printed short URLs are rendered against.
fn cli_origin(config: &Config) -> String {
    match config.public_base_url {
        Some(ref base) => base.trim_end_matches('/').to_string(),
        None => format!("http://{}", config.listen_addr),
    }
}

async fn shorten(
    state: &AppState,
    origin: &str,
    url: String,
    validity: Option<String>,
    alias: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let request = RawShortenRequest {
        url,
        validity_minutes: validity,
        custom_alias: alias,
    };

    let links = match state.link_service.shorten_batch(&[request]).await {
        Ok(links) => links,
        Err(AppError::Validation { messages }) => {
            for message in &messages {
                println!("  {} {}", "✗".red().bold(), message.red());
            }
            anyhow::bail!("Validation failed");
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    };

    for link in &links {
        println!("  Original:  {}", link.original_url.cyan());
        println!(
            "  Short URL: {}",
            short_url(origin, &link.alias).bright_yellow().bold()
        );
        println!(
            "  Expires:   {}",
            link.expires_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("{}", "✅ Link created".green().bold());

    Ok(())
}

async fn resolve(state: &AppState, alias: &str) -> Result<()> {
    match state.resolver.resolve(alias).await {
        Ok(target) => {
            println!("  {} → {}", alias.cyan(), target.bright_yellow());
            Ok(())
        }
        Err(e) if e.is_resolution_failure() => {
            println!("  {} {}", "✗".red().bold(), e.to_string().red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to resolve '{}': {}", alias, e)),
    }
}

/// Lists all links with their status.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   Alias        Expires              Status   Original
///   ───────────────────────────────────────────────────────────────
///   k3x9qa       2026-10-19 10:30     ACTIVE   https://example.com
/// ```
async fn list(state: &AppState, origin: &str) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = state
        .link_service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<20} {:<8} {}",
        "Alias".bright_white().bold(),
        "Expires".bright_white().bold(),
        "Status".bright_white().bold(),
        "Original".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    let now = Utc::now();
    for link in &links {
        let status = if link.is_expired_at(now) {
            "EXPIRED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<12} {:<20} {:<8} {}",
            link.alias.cyan(),
            link.expires_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status,
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!("  Base:  {}", origin.bright_black());
    println!();

    Ok(())
}

async fn stats(state: &AppState, origin: &str, alias: Option<String>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let summaries = match alias {
        Some(alias) => vec![
            state
                .stats_service
                .report_alias(&alias, origin)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?,
        ],
        None => state
            .stats_service
            .report(origin)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to load statistics: {}", e))?,
    };

    let expired = summaries.iter().filter(|s| s.expired).count();
    let clicks: usize = summaries.iter().map(|s| s.total_clicks()).sum();

    for summary in &summaries {
        println!(
            "  {:<40} {:>6} clicks  {}",
            summary.short_url.cyan(),
            summary.total_clicks().to_string().bright_green(),
            if summary.expired {
                "expired".red()
            } else {
                "active".green()
            }
        );
    }

    println!();
    println!(
        "  Links:   {}",
        summaries.len().to_string().bright_green().bold()
    );
    println!("  Expired: {}", expired.to_string().bright_green().bold());
    println!("  Clicks:  {}", clicks.to_string().bright_green().bold());
    println!();

    Ok(())
}
