use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let db_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:cardranker.db?mode=rwc".to_string());
    let catalog_url =
        std::env::var("CATALOG_URL").unwrap_or_else(|_| "https://api.scryfall.com".to_string());
    let set_code = std::env::var("CARD_SET").unwrap_or_else(|_| "ffxvi".to_string());

    let (app, _state) = cardranker_server::build_app(&db_url, &catalog_url, &set_code).await;

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Voting on set {}", set_code);
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
