use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::TokenError;
use crate::observability::metrics::{Metrics, NOT_FOUND, REDEEMED};
use crate::server::server::AppState;
use crate::service::TokenService;

pub const TOKENS_PATH: &str = "/tokens";
const TOKEN_PATH: &str = "/tokens/{token}";

#[derive(Clone)]
pub struct TokenState {
    pub service: Arc<TokenService>,
    pub metrics: Arc<Metrics>,
}

impl TokenState {
    pub fn new(service: Arc<TokenService>, metrics: Arc<Metrics>) -> Self {
        Self { service, metrics }
    }

    pub fn router(&self) -> Router<AppState> {
        Router::new()
            .route(TOKENS_PATH, post(issue_token))
            .route(TOKEN_PATH, get(lookup_token).delete(redeem_token))
    }
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    token: String,
}

#[derive(Debug, Serialize)]
struct OutstandingToken {
    token: String,
    issued_at_unix_ts: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn not_found(e: TokenError) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: e.to_string(),
        }),
    )
        .into_response()
}

async fn issue_token(State(state): State<AppState>) -> Response {
    let token_state = &state.token_state;
    let token = token_state.service.issue_token();

    token_state.metrics.tokens_issued.inc();
    token_state.metrics.outstanding_tokens.inc();
    debug!("issued token {}", token);

    (StatusCode::CREATED, Json(IssuedToken { token })).into_response()
}

async fn lookup_token(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    match state.token_state.service.lookup(&token) {
        Some(entry) => Json(OutstandingToken {
            token,
            issued_at_unix_ts: entry.issued_at_unix_ts,
        })
        .into_response(),
        None => not_found(TokenError::NotFound),
    }
}

async fn redeem_token(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    let token_state = &state.token_state;
    let start = Instant::now();
    let result = token_state.service.redeem_token(&token);
    let label = if result.is_ok() { REDEEMED } else { NOT_FOUND };

    token_state
        .metrics
        .token_redemptions
        .with_label_values(&[label])
        .inc();
    token_state
        .metrics
        .token_redeem_duration
        .with_label_values(&[label])
        .observe(start.elapsed().as_secs_f64());

    match result {
        Ok(()) => {
            token_state.metrics.outstanding_tokens.dec();
            debug!("redeemed token {}", token);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => {
            debug!("redeem rejected for {}: {}", token, e);
            not_found(e)
        }
    }
}
