//! Backend entry-point: wires the student CRUD endpoints and health probes.

use std::net::SocketAddr;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{ServerConfig, create_server};

/// Command-line and environment configuration.
#[derive(Debug, Parser)]
#[command(name = "backend", about = "Student records HTTP service")]
struct Args {
    /// Socket address the HTTP server binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,

    /// PostgreSQL connection URL for the students database.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://root@127.0.0.1:5432/schoolmanagement"
    )]
    database_url: String,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = Args::parse();

    let pool = DbPool::new(PoolConfig::new(&args.database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(args.bind_addr, pool))?;
    info!(addr = %args.bind_addr, "student records service listening");
    server.await
}
