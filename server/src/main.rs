mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let server_config = config::ServerConfig::from_env().expect("invalid server configuration");
    let catalog = config::load_catalog(&server_config.catalog_path).expect("catalog load failed");
    tracing::info!(
        path = %server_config.catalog_path.display(),
        apps = catalog.sorted_models.len(),
        base_url = %catalog.base_url,
        "catalog loaded"
    );

    let app = routes::app(catalog).expect("router setup failed");
    let port = server_config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "data browser listening");
    axum::serve(listener, app).await.expect("server failed");
}
