mod config;
mod routes;

use leptos::config::get_configuration;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let settings = config::Settings::from_env(conf.leptos_options.site_addr)?;
    let addr = settings.addr();

    let app = routes::app(conf.leptos_options);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "stech-news listening");
    axum::serve(listener, app).await?;
    Ok(())
}
