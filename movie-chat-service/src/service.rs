use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use movie_context::{ContextResolver, QueryExtractor, TmdbClient};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use uuid::Uuid;

use crate::chat::{ChatError, ChatService};
use crate::completion::CompletionClient;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse};

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn bad_request_error(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn internal_error(message: &str) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

pub fn create_app() -> Router {
    build_router(create_app_state())
}

fn create_app_state() -> AppState {
    let groq_key = std::env::var("GROQ_API_KEY").unwrap_or_else(|_| {
        error!("GROQ_API_KEY environment variable must be set");
        std::process::exit(1);
    });

    let resolver = match std::env::var("TMDB_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {
            Some(ContextResolver::new(Arc::new(TmdbClient::new(key))))
        }
        _ => {
            info!("TMDB_API_KEY not set, factual movie context disabled");
            None
        }
    };

    AppState {
        chat: Arc::new(ChatService::new(
            QueryExtractor::new(),
            resolver,
            CompletionClient::new(groq_key),
        )),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/chat", post(chat))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

async fn root() -> Json<Value> {
    Json(json!({
        "service": "Movie Chat Service",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Answers questions about films with TMDB facts and an LLM",
        "endpoints": {
            "POST /chat": "Ask a question about a movie",
            "GET /health": "Health check"
        }
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> ApiResult<ChatResponse> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "received chat message");

    match state.chat.handle_message(&request.message).await {
        Ok(reply) => {
            info!(%request_id, has_movie = reply.movie.is_some(), "chat reply ready");
            Ok(Json(ChatResponse::from(reply)))
        }
        Err(ChatError::EmptyMessage) => Err(bad_request_error("Please enter a valid question.")),
        Err(ChatError::Completion(details)) => {
            error!(%request_id, "completion failed: {}", details);
            Err(internal_error("LLM service error."))
        }
    }
}
