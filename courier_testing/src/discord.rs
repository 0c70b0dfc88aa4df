use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

pub async fn start_server(host: IpAddr, port: u16, token: String) -> anyhow::Result<()> {
    info!("Starting discord webhook testing server on {host}:{port}");
    info!("Webhook URL: http://{host}:{port}/api/webhooks/1/{token}");
    info!("Requests with any other token are answered with 404 Unknown Webhook");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(token))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(token: String) -> Router<()> {
    Router::new()
        .route(
            "/api/webhooks/:webhook_id/:token",
            routing::post(execute_webhook),
        )
        .with_state(token.into())
}

#[derive(Deserialize)]
struct ExecuteWebhookRequest {
    content: String,
}

#[derive(Serialize)]
struct UnknownWebhookResponse {
    message: &'static str,
    code: u32,
}

async fn execute_webhook(
    state: State<Arc<str>>,
    Path((webhook_id, token)): Path<(u64, String)>,
    Json(ExecuteWebhookRequest { content }): Json<ExecuteWebhookRequest>,
) -> Response {
    if token != **state {
        return (
            StatusCode::NOT_FOUND,
            Json(UnknownWebhookResponse {
                message: "Unknown Webhook",
                code: 10015,
            }),
        )
            .into_response();
    }

    info!("Webhook {webhook_id} received message:\n{content}");
    StatusCode::NO_CONTENT.into_response()
}
