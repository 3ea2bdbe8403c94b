//! REST API routes for the evidence mock service.

use axum::routing::get;
use axum::Router;

use crate::api::handlers::{get_evidences, openapi_document};
use crate::server::AppState;

/// Build the evidence router.
///
/// `/getEvidences` is kept as an alias of `/v1/evidences` for older clients.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/evidences", get(get_evidences))
        .route("/getEvidences", get(get_evidences))
        .route("/docs/openapi.json", get(openapi_document))
}
