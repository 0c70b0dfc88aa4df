//! Cross-origin policy for the browser-facing endpoints

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    Router,
};

use crate::RestServerCorsConfig;

pub fn add<S: Clone + Send + Sync + 'static>(
    router: Router<S>,
    config: Arc<RestServerCorsConfig>,
) -> Router<S> {
    router.layer(from_fn(move |request: Request, next: Next| {
        middleware(config.clone(), request, next)
    }))
}

async fn middleware(config: Arc<RestServerCorsConfig>, request: Request, next: Next) -> Response {
    let allow_origin = config.allow_origin(request.headers().get(header::ORIGIN));

    // Preflight requests are answered here and never reach the router.
    let mut response = if request.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
    response
}
