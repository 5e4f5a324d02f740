//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec served
//! at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Muse Supporter API",
        version = "0.1.0",
        description = "Wallet-ownership verification with tier-gated content resolution, opaque RPC forwarding, and the supporter-tier sale table.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::verify::verify,
        crate::routes::rpc_proxy::forward,
        crate::routes::tiers::list_tiers,
    ),
    components(schemas(
        crate::routes::verify::VerifyRequest,
        crate::routes::verify::VerifyResponse,
        crate::routes::verify::DownloadLink,
        crate::error::ErrorBody,
    )),
    tags(
        (name = "verify", description = "Wallet-ownership verification"),
        (name = "rpc", description = "Opaque JSON-RPC forwarding"),
        (name = "tiers", description = "Supporter-tier sale table"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
