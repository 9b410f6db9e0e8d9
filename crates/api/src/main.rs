//! BookWorld server entry point.

use bookworld_api::AppState;
use bookworld_api::config::Config;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // 1. Load configuration
    let config = Config::from_env();

    // 2. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.debug {
        tracing::warn!("debug mode is on; templates reload on every request");
    }

    // 3. Build the application
    let state = AppState::from_config(&config);
    let app = bookworld_api::create_app(state, &config.static_dir);

    // 4. Start server
    let addr = config.addr();
    tracing::info!(
        %addr,
        debug = config.debug,
        templates = %config.template_dir.display(),
        assets = %config.static_dir.display(),
        "starting BookWorld server"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await
}
