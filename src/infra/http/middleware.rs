use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{Instrument, error, info_span, warn};
use uuid::Uuid;

use crate::application::error::ErrorReport;

const TARGET: &str = "suncrest::http::response";

#[derive(Clone)]
pub struct RequestContext {
    pub request_id: String,
}

/// Tags the request with a fresh id and runs the rest of the stack inside a
/// span carrying it, so every event logged while handling it is correlated.
pub async fn set_request_context(mut request: Request<Body>, next: Next) -> Response {
    let ctx = RequestContext {
        request_id: Uuid::new_v4().to_string(),
    };
    let span = info_span!(
        "request",
        request_id = %ctx.request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );
    request.extensions_mut().insert(ctx.clone());

    let mut response = next.run(request).instrument(span).await;
    response.extensions_mut().insert(ctx);
    response
}

/// Logs failed responses with the `ErrorReport` handlers attached.
pub async fn log_responses(request: Request<Body>, next: Next) -> Response {
    let query = request.uri().query().unwrap_or_default().to_string();
    let start = Instant::now();

    let mut response = next.run(request).await;
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let report = response.extensions_mut().remove::<ErrorReport>();
    let (source, chain) = report
        .map(|report| (report.source, report.messages))
        .unwrap_or(("unknown", Vec::new()));
    let detail = chain
        .first()
        .map_or("no diagnostic available", String::as_str);
    let elapsed_ms = start.elapsed().as_millis();

    macro_rules! failure {
        ($log:ident, $message:literal) => {
            $log!(
                target = TARGET,
                status = status.as_u16(),
                query = %query,
                elapsed_ms,
                source,
                detail,
                chain = ?chain,
                $message,
            )
        };
    }
    if status.is_server_error() {
        failure!(error, "request failed");
    } else {
        failure!(warn, "client request error");
    }

    response
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, middleware, response::IntoResponse, routing::get};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn request_id_is_echoed_into_response_extensions() {
        let app = Router::new()
            .route("/", get(|| async { StatusCode::NO_CONTENT }))
            .layer(middleware::from_fn(log_responses))
            .layer(middleware::from_fn(set_request_context));

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        let ctx = response
            .extensions()
            .get::<RequestContext>()
            .expect("request context");
        assert!(Uuid::parse_str(&ctx.request_id).is_ok());
    }

    #[tokio::test]
    async fn error_reports_are_consumed_by_the_logger() {
        let app = Router::new()
            .route(
                "/",
                get(|| async {
                    let mut response = StatusCode::BAD_GATEWAY.into_response();
                    ErrorReport::from_message("tests", StatusCode::BAD_GATEWAY, "upstream down")
                        .attach(&mut response);
                    response
                }),
            )
            .layer(middleware::from_fn(log_responses));

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.extensions().get::<ErrorReport>().is_none());
    }
}
