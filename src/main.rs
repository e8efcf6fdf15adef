use dioxus::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

use supplier_scout::ui::{self, AppContext};
use supplier_scout::{Config, HttpScoutClient, SupplierApi};

fn main() {
    // Use RUST_LOG env var if set, otherwise info level for this crate
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "supplier_scout=info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting Supplier Scout against {}", config.api_base_url);

    let api: Arc<dyn SupplierApi> = Arc::new(HttpScoutClient::new(config.api_base_url.clone()));
    let app_context = AppContext { config, api };

    LaunchBuilder::desktop()
        .with_cfg(ui::make_config())
        .with_context(app_context)
        .launch(ui::App);
}
