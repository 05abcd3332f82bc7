use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use reqwest::Client;
use tracing::{info, warn};

use electives::catalog::load_catalog;
use electives::config::ServerConfig;
use electives::filter::{filter_catalog_views, CatalogQuery};
use electives::server::create_router;
use electives::types::WrapperState;
use electives::{render, Availability, CatalogSource, DaySelection};

#[derive(Parser)]
#[command(name = "electives")]
#[command(about = "Browse the elective course catalog by weekly availability")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Filter the catalog and print the matching courses
    Browse {
        /// Catalog file path or http(s) URL
        #[arg(long, default_value = electives::config::DEFAULT_CATALOG)]
        catalog: String,

        /// Case-insensitive text matched against codes and names
        #[arg(short, long, default_value = "")]
        search: String,

        /// Drop courses without any published meeting time
        #[arg(long)]
        hide_unscheduled: bool,

        /// Available day, optionally limited to slots: `mon` or `mon:0,1,4`
        #[arg(long = "day")]
        days: Vec<DaySelection>,
    },

    /// Serve the catalog snapshot and the time grid over HTTP
    Serve {
        /// JSON config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Overrides the catalog source from the config
        #[arg(long)]
        catalog: Option<String>,

        /// Overrides the port from the config
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Browse {
            catalog,
            search,
            hide_unscheduled,
            days,
        } => browse(&catalog, search, hide_unscheduled, &days).await,
        Command::Serve {
            config,
            catalog,
            port,
        } => {
            let mut config = match config {
                Some(path) => ServerConfig::load_from_file(&path)
                    .map_err(|e| anyhow::anyhow!("{e}"))
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => ServerConfig::default(),
            };
            if let Some(catalog) = catalog {
                config.catalog = catalog;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await
        }
    }
}

async fn browse(
    source: &str,
    search: String,
    hide_unscheduled: bool,
    days: &[DaySelection],
) -> anyhow::Result<()> {
    let mut availability = Availability::new();
    for day in days {
        day.apply(&mut availability)?;
    }

    let source: CatalogSource = source.parse()?;
    let catalog = load_catalog(&source, &Client::new()).await?;
    if catalog.skipped > 0 {
        warn!("{} malformed course records were skipped", catalog.skipped);
    }

    let query = CatalogQuery {
        search,
        hide_unscheduled,
        availability,
    };
    let views = filter_catalog_views(&catalog.courses, &query);
    print!("{}", render::summary(&views));

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let source: CatalogSource = config.catalog.parse()?;
    let catalog = load_catalog(&source, &Client::new())
        .await
        .with_context(|| format!("failed to load catalog from {source}"))?;

    let address = config.bind_address();
    let state = Arc::new(WrapperState::new(catalog, config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Serving catalog on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await?;

    Ok(())
}
