mod middleware;
mod public;

pub use middleware::RequestContext;
pub use public::{HttpState, build_router};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

fn health_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}
