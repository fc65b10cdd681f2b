use std::env;

use detailing_payroll::api::{AppState, create_router};
use detailing_payroll::config::ConfigLoader;
use env_logger::Env;
use tracing::{error, info};

const DEFAULT_CONFIG_DIR: &str = "config/detailing";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config_dir =
        env::var("DETAILING_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr =
        env::var("DETAILING_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };
    info!(
        shop = %config.shop().name,
        currency = %config.shop().currency,
        versions = config.config().versions().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind listener");
            std::process::exit(1);
        }
    };
    info!(bind_addr = %bind_addr, "Payroll API listening");

    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}
