//! REST server for the live quiz.
//!
//! Thin glue over the store and the scorer: every endpoint fully reads
//! the JSON documents it needs, mutates, and rewrites them. Clients
//! (admin, contestant, and ranking views) synchronize by polling.

mod routes;
mod state;

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get};
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::data::JsonStore;
use crate::error::QuizError;

pub use state::AppState;

/// Build the API router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/quiz-status",
            get(routes::get_quiz_status)
                .post(routes::post_quiz_status)
                .patch(routes::patch_quiz_status),
        )
        .route(
            "/api/questions",
            get(routes::get_questions).post(routes::post_questions),
        )
        .route("/api/questions/{id}", get(routes::get_question))
        .route(
            "/api/questions/{id}/ranking",
            get(routes::get_question_ranking),
        )
        .route(
            "/api/participants",
            get(routes::get_participants).post(routes::post_participant),
        )
        .route(
            "/api/responses",
            get(routes::get_responses).post(routes::post_response),
        )
        .route("/api/ranking", get(routes::get_ranking))
        .route("/api/clear-data", delete(routes::clear_data))
        .route("/api/health", get(routes::health))
        // The SPA polls from another origin during development.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Open the store, bind, and serve until SIGINT/SIGTERM.
pub async fn run<P: AsRef<Path>>(port: u16, data_dir: P) -> Result<(), QuizError> {
    let store = JsonStore::open(&data_dir).await?;
    info!(dir = %data_dir.as_ref().display(), "store initialized");

    let state = Arc::new(AppState::new(store));
    let app = router(state);

    let address = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&address).await?;
    info!("server listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let interrupt = async {
        if ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}
