//! JSON frontend
//!
//! Exposes lexing over HTTP:
//!
//! - `GET /lex?language=lua&text=...&discard=blank,newline&annotate=true`
//! - `POST /lex` with the same fields as a JSON body (`discard` may be an array)
//! - `GET /languages`
//!
//! A successful call answers `{input, language, tokens, rendered}`. Anything that
//! goes wrong answers `{error: true, message}`; lexing errors are never turned
//! into a partial token list.
//!
//! The frontend, not the lexer, bounds input size and caches one lexer per
//! language (built at startup with the configured default discard set).

use crate::error::LexError;
use crate::languages::LanguageRegistry;
use crate::lexing::{Lexer, Token};
use crate::rendering;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use patlex_config::PatlexConfig;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Shared, read-only state behind every request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    registry: LanguageRegistry,
    lexers: HashMap<String, Lexer>,
    config: PatlexConfig,
}

impl AppState {
    /// Build one lexer per registered language with its configured discard set.
    pub fn new(registry: LanguageRegistry, config: PatlexConfig) -> Result<Self, LexError> {
        let mut lexers = HashMap::new();
        for name in registry.list_languages() {
            let lexer = registry.lexer(&name, config.discard_for(&name))?;
            lexers.insert(name, lexer);
        }
        Ok(AppState {
            inner: Arc::new(Inner {
                registry,
                lexers,
                config,
            }),
        })
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.inner.registry
    }

    pub fn config(&self) -> &PatlexConfig {
        &self.inner.config
    }
}

/// Request fields, shared by the query string and the JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct LexRequest {
    pub language: Option<String>,
    pub text: Option<String>,
    pub discard: Option<DiscardParam>,
    pub annotate: Option<bool>,
}

/// `discard` as a comma separated string (query) or an array (JSON).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DiscardParam {
    List(Vec<String>),
    Joined(String),
}

impl DiscardParam {
    fn into_set(self) -> HashSet<String> {
        match self {
            DiscardParam::List(items) => items.into_iter().collect(),
            DiscardParam::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LexResponse {
    pub input: String,
    pub language: String,
    pub tokens: Vec<Token>,
    pub rendered: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<String>,
}

/// An error answered as `{error: true, message}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<LexError> for ApiError {
    fn from(err: LexError) -> Self {
        let status = match err {
            LexError::Configuration(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        };
        ApiError {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: true,
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/lex", get(lex_query).post(lex_json))
        .route("/languages", get(languages))
        .with_state(state)
}

/// Bind `address` and serve until the process stops.
pub async fn serve(state: AppState, address: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "serving lexer endpoint");
    axum::serve(listener, router(state)).await
}

async fn lex_query(
    State(state): State<AppState>,
    request: Result<Query<LexRequest>, QueryRejection>,
) -> Result<Json<LexResponse>, ApiError> {
    let Query(request) = request.map_err(|e| ApiError::bad_request(e.body_text()))?;
    handle(&state, request).map(Json)
}

async fn lex_json(
    State(state): State<AppState>,
    request: Result<Json<LexRequest>, JsonRejection>,
) -> Result<Json<LexResponse>, ApiError> {
    let Json(request) = request.map_err(|e| ApiError::bad_request(e.body_text()))?;
    handle(&state, request).map(Json)
}

async fn languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: state.registry().list_languages(),
    })
}

fn handle(state: &AppState, request: LexRequest) -> Result<LexResponse, ApiError> {
    let language = request
        .language
        .ok_or_else(|| ApiError::bad_request("missing required parameter 'language'"))?;
    let text = request
        .text
        .ok_or_else(|| ApiError::bad_request("missing required parameter 'text'"))?;

    let limit = state.config().server.max_input_bytes;
    if text.len() > limit {
        return Err(ApiError {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: format!("input is {} bytes, the limit is {limit}", text.len()),
        });
    }

    let lexer = state
        .inner
        .lexers
        .get(&language)
        .ok_or_else(|| ApiError::bad_request(format!("unknown language '{language}'")))?;

    let discard = request.discard.map(DiscardParam::into_set);
    let tokens = lexer.lex_with(&text, discard.as_ref())?;

    let render = &state.config().render;
    let annotate = request.annotate.unwrap_or(render.annotate);
    let rendered = rendering::render(&tokens, &render.raw_categories, annotate);

    tracing::debug!(%language, tokens = tokens.len(), "lexed request");
    Ok(LexResponse {
        input: text,
        language,
        tokens,
        rendered,
    })
}
