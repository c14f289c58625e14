//! EventTicket storefront entry point.
//!
//! The same binary serves the SSR host (default `server` feature) and boots
//! the WASM client (`web` feature).

use eventticket::app::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = tracing_wasm::try_set_as_global_default();
    }

    #[cfg(all(feature = "server", not(target_arch = "wasm32")))]
    if let Err(e) = init_server() {
        tracing::error!("Startup configuration failed, using defaults: {:#}", e);
    }

    dioxus::launch(App);
}

#[cfg(all(feature = "server", not(target_arch = "wasm32")))]
fn init_server() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    if let Err(e) = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventticket=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
    {
        eprintln!("Logging already initialized: {}", e);
    }

    tracing::info!("Starting EventTicket storefront");

    // Load configuration
    let config = eventticket::config::load_config()?;
    tracing::info!(?config, "Configuration loaded");
    eventticket::config::install(config);

    Ok(())
}
