use axum::{
    Json,
    body::{Body, Bytes},
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::metrics_manager::MetricsData,
    state::SharedState,
};

/// Largest chat body read into memory.
pub const BODY_LIMIT: usize = 2 * 1024 * 1024;

pub async fn chat_handler(State(state): State<SharedState>, req: Request) -> Response {
    // Browser pre-flight: no body, just the CORS headers added by the layer.
    if req.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let span = tracing::info_span!("chat", request_id = %Uuid::new_v4());
    async move {
        match relay(&state, req).await {
            Ok(reply) => {
                state.metrics.record_reply();
                tracing::debug!(reply_len = reply.len(), "reply relayed");
                Json(ChatResponse { reply }).into_response()
            }
            Err(err) => {
                state.metrics.record_error(&err);
                if matches!(err, AppError::UpstreamInvalidResponse) {
                    tracing::warn!("completion provider sent no usable choice");
                }
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

async fn relay(state: &SharedState, req: Request) -> Result<String, AppError> {
    // The method is checked before any of the body is read.
    if req.method() != Method::POST {
        return Err(AppError::MethodNotAllowed);
    }

    let body = read_body(req.into_body()).await?;
    let message = ChatRequest::parse_message(&body)?;
    tracing::debug!(message_len = message.len(), "forwarding message");

    state.completions.complete(&message).await
}

/// An unreadable or oversized body carries no usable message.
async fn read_body(body: Body) -> Result<Bytes, AppError> {
    axum::body::to_bytes(body, BODY_LIMIT)
        .await
        .map_err(|_| AppError::EmptyMessage)
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics())
}
