use std::path::PathBuf;

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use common::{log, log_session};

use crate::session_manager::SessionManager;

// The browser UI numbers cells 1-9; the engine is 0-based.
const WIRE_POSITION_MIN: i64 = 1;
const WIRE_POSITION_MAX: i64 = 9;
const WIRE_POSITION_NONE: i64 = -1;

#[derive(Clone)]
pub struct WebServerState {
    pub session_manager: SessionManager,
}

#[derive(Serialize)]
struct SessionResponse {
    id: String,
    error: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DestroySessionRequest {
    session_id: String,
}

#[derive(Serialize)]
struct DestroySessionResponse {
    error: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayRequest {
    session_id: String,
    position: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayResponse {
    computer_move_position: i64,
    board_state: String,
    error: String,
}

impl PlayResponse {
    fn failure(message: &str) -> Self {
        Self {
            computer_move_position: WIRE_POSITION_NONE,
            board_state: String::new(),
            error: message.to_string(),
        }
    }
}

pub async fn run_web_server(
    session_manager: SessionManager,
    static_files_path: PathBuf,
    port: u16,
) {
    let state = WebServerState { session_manager };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/session/create", post(create_session_handler))
        .route("/session/destroy", post(destroy_session_handler))
        .route("/play", post(play_handler))
        .nest_service("/ui", ServeDir::new(&static_files_path))
        .layer(cors)
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    log!("Web server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Web server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    log!("Shutdown signal received, stopping web server");
}

async fn create_session_handler(State(state): State<WebServerState>) -> impl IntoResponse {
    let id = state.session_manager.create_session().await;
    let active = state.session_manager.session_count().await;
    log_session!(id, "Created new session ({} active)", active);

    Json(SessionResponse {
        id,
        error: String::new(),
    })
}

async fn destroy_session_handler(
    State(state): State<WebServerState>,
    Json(request): Json<DestroySessionRequest>,
) -> impl IntoResponse {
    let destroyed = state.session_manager.destroy_session(&request.session_id).await;

    let error = if destroyed {
        log_session!(request.session_id, "Destroyed session");
        String::new()
    } else {
        log!("Tried to destroy an unknown session; ignoring");
        "Invalid session ID".to_string()
    };

    Json(DestroySessionResponse { error })
}

async fn play_handler(
    State(state): State<WebServerState>,
    Json(request): Json<PlayRequest>,
) -> impl IntoResponse {
    if request.position < WIRE_POSITION_MIN || request.position > WIRE_POSITION_MAX {
        log!(
            "Player tried to play at position {}, but it was invalid",
            request.position
        );
        return Json(PlayResponse::failure("Invalid position (expected 1-9)"));
    }

    let position = (request.position - 1) as usize;

    match state.session_manager.play(&request.session_id, position).await {
        Ok((computer_position, board_state)) => {
            log_session!(request.session_id, "Player played at position {}", position);
            match computer_position {
                Some(computer_position) => log_session!(
                    request.session_id,
                    "Computer played at position {}",
                    computer_position
                ),
                None => log_session!(request.session_id, "Computer did not move"),
            }
            log_session!(request.session_id, "Board state: {}", board_state.as_str());

            Json(PlayResponse {
                computer_move_position: computer_position
                    .map_or(WIRE_POSITION_NONE, |p| p as i64 + 1),
                board_state: board_state.as_str().to_string(),
                error: String::new(),
            })
        }
        Err(message) => {
            log_session!(request.session_id, "Play request failed: {}", message);
            Json(PlayResponse::failure(&message))
        }
    }
}
