use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use hotel_service::config::{load_config, AppConfig};
use hotel_service::http::HttpServer;
use hotel_service::repository::MySqlHotelRepository;
use hotel_service::service::HotelService;
use hotel_service::{db, observability};

#[derive(Debug, Parser)]
#[command(name = "hotel-service", about = "CRUD REST API for hotel records")]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    observability::logging::init(&config.observability);

    tracing::info!(
        bind_address = %config.server.bind_address,
        database = %config.database.name,
        "hotel-service v0.1.0 starting"
    );

    let pool = db::connect_pool(&config.database).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let repository = Arc::new(MySqlHotelRepository::new(pool));
    let service = HotelService::new(repository);

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(service);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
