//! Emit a span per request and log its lifecycle at debug level.

use std::time::Duration;

use axum::{extract::Request, response::Response, Router};
use tracing::{debug, Span};

use super::request_id::RequestId;

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    router.layer(
        tower_http::trace::TraceLayer::new_for_http()
            .make_span_with(request_span)
            .on_request(log_request)
            .on_response(log_response)
            .on_body_chunk(())
            .on_eos(())
            .on_failure(()),
    )
}

// The request ID extension is inserted by the request_id middleware, which
// wraps this layer.
fn request_span(request: &Request) -> Span {
    let request_id = *request.extensions().get::<RequestId>().unwrap();
    let method = request.method();
    let uri = request.uri();
    let version = request.version();

    tracing::debug_span!("request", %request_id, %method, %uri, ?version)
}

fn log_request(_request: &Request, _span: &Span) {
    debug!("request received")
}

fn log_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status();
    debug!(%status, ?latency, "response sent")
}
