mod app_state;
mod assets;
mod cli;
mod logging;
mod startup;

use msb_config::MsbConfig;
use winit::event_loop::EventLoop;

use crate::startup::StartupPlan;

/// Load the config file, logging through a temporary subscriber because the
/// final log filter depends on the config's own `[logging]` section.
fn load_config(args: &cli::Args, bootstrap_directive: &str) -> MsbConfig {
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter(bootstrap_directive))
        .finish();

    tracing::subscriber::with_default(bootstrap, || {
        let result = match &args.config {
            Some(path) => {
                tracing::info!("Using config override: {}", path.display());
                msb_config::load_config_from(path)
            }
            None => msb_config::load_config(),
        };
        result.unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            MsbConfig::default()
        })
    })
}

fn main() {
    let args = cli::parse();
    let env_directive = std::env::var("RUST_LOG").ok();

    let bootstrap_directive = logging::log_directive(
        args.log_level.as_deref(),
        env_directive.as_deref(),
        Default::default(),
    );
    let config = load_config(&args, &bootstrap_directive);

    let directive = logging::log_directive(
        args.log_level.as_deref(),
        env_directive.as_deref(),
        config.logging.level,
    );
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter(&directive))
        .init();

    tracing::info!("MSB v{} starting...", env!("CARGO_PKG_VERSION"));
    tracing::debug!(filter = %directive, "logging initialized");

    let plan = StartupPlan::resolve(args.split, &args.urls, &config.startup);

    // Create event loop and run
    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::MsbApp::new(config, plan);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
