//! Evidence handlers.

use axum::extract::{Query, State};
use axum::Json;
use tracing::{debug, warn};

use crate::api::error::ApiError;
use crate::api::types::EvidenceQuery;
use crate::domain::Evidence;
use crate::server::AppState;

/// GET /v1/evidences - Generate evidence records for a control.
///
/// Responds with a JSON array, `[]` when the control has no templates.
pub async fn get_evidences(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Evidence>>, ApiError> {
    let control_id = EvidenceQuery::from_pairs(pairs)
        .control_id()
        .inspect_err(|_| warn!("Evidence requested without a control ID"))?;

    let templates = state.catalog.matching(&control_id);
    let evidences = state.generator.generate(&templates, state.mode);

    debug!(
        control_id = %control_id,
        mode = %state.mode,
        templates = templates.len(),
        count = evidences.len(),
        "Generated evidence"
    );

    Ok(Json(evidences))
}

/// Fallback for unknown routes.
pub async fn route_not_found(uri: axum::http::Uri) -> ApiError {
    crate::api::error::not_found(uri.path())
}
