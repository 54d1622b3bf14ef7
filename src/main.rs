use axum::{
    routing::{get, post, put},
    Router,
};
use directory_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "directory_backend=debug,tower_http=info".to_string()),
        )
        .init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool.clone());

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/api/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/api/users/:id",
            put(routes::users::update_user).delete(routes::users::delete_user),
        )
        .route(
            "/api/users/:id/activity",
            get(routes::activity::get_user_activity),
        )
        .route(
            "/api/users/:id/activity/log",
            post(routes::activity::log_activity),
        )
        .route(
            "/api/users/:id/activity-pdf",
            get(routes::activity::download_activity_pdf),
        )
        .route("/api/auth/login", post(routes::auth::login))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
