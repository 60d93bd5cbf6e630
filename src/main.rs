use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tms::api::{self, AppState};
use tms::db::{migrations, pool};
use tms::libs::config::Config;
use tms::libs::messages::Message;
use tms::msg_info;
use tracing_subscriber::EnvFilter;

/// Connections kept in the SQLite pool.
const POOL_SIZE: u32 = 16;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// API server port
    #[arg(long)]
    port: Option<u16>,
    /// Environment (development|staging|production)
    #[arg(long)]
    env: Option<String>,
    /// Path to the SQLite database file
    #[arg(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tms=info,tower_http=info")))
        .init();

    let cli = Cli::parse();
    let config = Config::read()?;

    let port = cli.port.unwrap_or(config.server.port);
    let env = cli.env.unwrap_or_else(|| config.server.env.clone());
    let db_path = match cli.db_path {
        Some(path) => path,
        None => config.db_path()?,
    };

    let pool = pool::new_pool(&db_path, POOL_SIZE)?;
    {
        let mut conn = pool.get()?;
        migrations::init_with_migrations(&mut conn)?;
    }
    msg_info!(Message::DatabaseReady(db_path.display().to_string()));

    let state = AppState { pool, env: env.clone() };
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    msg_info!(Message::ServerStarting(env, addr));
    axum::serve(listener, app).await?;

    Ok(())
}
