use crate::config::DashboardConfig;
use crate::router::handle;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod charts;
mod config;
mod domain;
mod errors;
mod loader;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Configuration
    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load every source up front; the dashboard is useless without them
    let data = match loader::load_all(&config) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("data load failed, not starting: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    tracing::info!(
        addr = %config.bind_addr,
        workers = config.max_workers,
        "starting server at http://{}",
        config.bind_addr
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    // 4️⃣ Every worker borrows the same read-only data
    let result = server.serve(move |req, _info| match handle(req, &data) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}
