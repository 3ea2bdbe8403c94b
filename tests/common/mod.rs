//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use evidence_mock::server::{build_router, AppState};
use evidence_mock::{EvidenceGenerator, GenerationMode, TemplateCatalog};

/// Seed used by tests that need reproducible output
pub const TEST_SEED: u64 = 0x5eed;

/// Router over the default catalog in the given mode.
pub fn test_router(mode: GenerationMode) -> axum::Router {
    build_router(AppState::new(
        TemplateCatalog::default(),
        EvidenceGenerator::seeded(TEST_SEED),
        mode,
    ))
}

/// Router over a custom catalog.
pub fn router_with_catalog(catalog: TemplateCatalog, mode: GenerationMode) -> axum::Router {
    build_router(AppState::new(
        catalog,
        EvidenceGenerator::seeded(TEST_SEED),
        mode,
    ))
}

/// Send a GET request and return status, `x-error-code` header, and JSON body.
pub async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Option<String>, serde_json::Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let error_code = response
        .headers()
        .get("x-error-code")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&bytes) }))
    };

    (status, error_code, json)
}

/// Whether `id` has the `sys_` prefix followed by 32 lowercase hex characters.
pub fn is_evidence_id(id: &str) -> bool {
    id.strip_prefix("sys_").is_some_and(|rest| {
        rest.len() == 32 && rest.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    })
}
