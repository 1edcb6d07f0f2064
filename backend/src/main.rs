//! # events-service
//!
//! Thin entry point: load validated settings, initialize logging, delegate
//! to lib-web for server setup.

use lib_core::config::Settings;
use lib_utils::envs;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration errors are fatal: print the full aggregated list and
    // exit non-zero before the server ever binds.
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    init_tracing(settings.is_debug());
    tracing::info!(
        env = ?settings.app_env,
        host = %settings.host,
        port = settings.port,
        "configuration loaded"
    );

    lib_web::start_server(settings).await
}

/// Configure the tracing subscriber. `RUST_LOG` wins when set; otherwise
/// the default level follows the debug flag.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = envs::get_env("RUST_LOG")
        .ok()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
