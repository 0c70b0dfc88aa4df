use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use courier_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use super::error;
use crate::models::contact::{
    ApiCaptchaRejected, ApiContactRequest, ApiContactSuccess, ApiInvalidSubmission,
};

/// Maximum number of characters of the raw request body included in debug logs.
const BODY_LOG_LIMIT: usize = 512;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/contact",
            routing::post(submit).fallback(method_not_allowed),
        )
        .with_state(service)
}

async fn submit(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    tracing::debug!(
        body = %String::from_utf8_lossy(&body).chars().take(BODY_LOG_LIMIT).collect::<String>(),
        "received contact submission"
    );

    let Ok(request) = serde_json::from_slice::<ApiContactRequest>(&body) else {
        return error(StatusCode::BAD_REQUEST, "Invalid request body");
    };

    match service.submit(request.into()).await {
        Ok(()) => Json(ApiContactSuccess {
            success: true,
            message: "Your message has been sent. Thank you!",
        })
        .into_response(),
        Err(ContactSubmitError::InvalidFields(field_errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiInvalidSubmission {
                error: "Invalid submission",
                field_errors,
            }),
        )
            .into_response(),
        Err(ContactSubmitError::CaptchaRejected(verdict)) => (
            StatusCode::FORBIDDEN,
            Json(ApiCaptchaRejected {
                error: "Recaptcha failed",
                success: verdict.success,
                score: verdict.score,
            }),
        )
            .into_response(),
        Err(ContactSubmitError::CaptchaVerification(err)) => {
            tracing::error!("captcha verification failed: {err}");
            error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Captcha verification failed",
            )
        }
        Err(ContactSubmitError::Delivery(err)) => {
            tracing::error!("failed to deliver contact message: {err}");
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
    }
}

async fn method_not_allowed() -> Response {
    error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
