mod config;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let store = services::campsite::load_seed(config.seed_file.as_deref()).expect("campsite seed load failed");
    tracing::info!(
        campsites = store.list_campsites().len(),
        seed = ?config.seed_file,
        "campsite store seeded"
    );

    let state = state::AppState::new(store);

    // Fall back to the JSON API alone when Leptos config is missing.
    let app = match routes::leptos_app(state.clone(), &config.image_dir) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos SSR disabled; serving API only");
            routes::app(state, &config.image_dir)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, image_dir = %config.image_dir.display(), "campsite server listening");
    axum::serve(listener, app).await.expect("server failed");
}
