mod config;
mod routes;
mod state;
mod upstream;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(&config).expect("upstream client init failed");

    tracing::info!(
        classifier_url = %config.classifier_url,
        chat_url = %config.chat_url,
        max_upload_bytes = config.max_upload_bytes,
        "forwarding configured"
    );

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "food decoder listening");
    axum::serve(listener, app).await.expect("server failed");
}
