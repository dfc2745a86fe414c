use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wcdash::{config::Settings, fetch, server};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::default();

    // ─── 1) init logging ─────────────────────────────────────────────
    let default_level = if settings.debug { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {}", info);
    }));

    // ─── 2) load & clean finals ──────────────────────────────────────
    let client = fetch::client()?;
    let dataset = fetch::load_dataset(&client, &settings).await?;

    // ─── 3) build the view once, then serve ──────────────────────────
    let state = server::AppState::new(dataset);
    server::run(settings.bind, state, settings.debug).await
}
