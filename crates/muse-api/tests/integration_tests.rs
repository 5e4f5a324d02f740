//! # Integration Tests for muse-api
//!
//! Exercises the verification pipeline end to end against a wiremock stand-in
//! for the DAS indexer: signature fail-fast, holdings outcomes, tier
//! resolution, cumulative entitlements, localization, RPC passthrough, and
//! degraded (unconfigured) modes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use ed25519_dalek::{Signer, SigningKey};
use http_body_util::BodyExt;
use rand_core::OsRng;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use muse_api::state::{AppConfig, AppState};
use muse_das_client::{DasClient, DasConfig};

const COLLECTION: &str = "J1S9H3QjnRtBbbuD4HjPV6RpRhwuk4zKbxsnCHuTgh9w";

/// A freshly generated wallet with base58 address and signing capability.
struct TestWallet {
    key: SigningKey,
    address: String,
}

impl TestWallet {
    fn generate() -> Self {
        let key = SigningKey::generate(&mut OsRng);
        let address = bs58::encode(key.verifying_key().as_bytes()).into_string();
        Self { key, address }
    }

    fn sign(&self, message: &str) -> String {
        bs58::encode(self.key.sign(message.as_bytes()).to_bytes()).into_string()
    }
}

/// Helper: build the app wired to a wiremock DAS upstream.
fn app_with_upstream(upstream_uri: &str) -> axum::Router {
    let das_client = DasClient::new(DasConfig::local_mock(upstream_uri).unwrap()).unwrap();
    let config = AppConfig {
        port: 8080,
        collection_address: Some(COLLECTION.to_string()),
    };
    muse_api::app(AppState::new(config, Some(das_client)))
}

/// Helper: build the app with no DAS client configured.
fn app_without_upstream() -> axum::Router {
    muse_api::app(AppState::default())
}

/// Helper: a searchAssets response body with one asset per tier value given.
fn das_response(tier_values: &[&str]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = tier_values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            serde_json::json!({
                "id": format!("mint{i}"),
                "grouping": [{"group_key": "collection", "group_value": COLLECTION}],
                "content": {"metadata": {
                    "attributes": [{"trait_type": "Tier", "value": value}]
                }}
            })
        })
        .collect();
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": "muse-verify",
        "result": {"total": items.len(), "limit": 100, "page": 1, "items": items}
    })
}

/// Helper: POST a JSON body to a route.
fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Helper: a valid verify request body for a wallet.
fn verify_body(wallet: &TestWallet) -> serde_json::Value {
    let message = "Sign in to the supporter dashboard: 1726000000000";
    serde_json::json!({
        "publicKey": wallet.address,
        "signature": wallet.sign(message),
        "message": message,
    })
}

/// Helper: parse a response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// -- Health Probes ------------------------------------------------------------

#[tokio::test]
async fn liveness_probe_answers_ok() {
    let response = app_without_upstream()
        .oneshot(
            Request::builder()
                .uri("/health/liveness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_probe_answers_ok() {
    let response = app_without_upstream()
        .oneshot(
            Request::builder()
                .uri("/health/readiness")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// -- Scenario A: qualifying holder gets cumulative entitlement -----------------

#[tokio::test]
async fn silver_holder_receives_bronze_plus_silver_downloads() {
    let mock_server = MockServer::start().await;
    let wallet = TestWallet::generate();

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "method": "searchAssets",
            "params": {"ownerAddress": wallet.address, "grouping": ["collection", COLLECTION]},
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(das_response(&["Silver"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post("/api/verify", verify_body(&wallet)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["tier"], "silver");

    let downloads = json["downloads"].as_array().unwrap();
    // Bronze catalog first, then silver — cumulative, lowest tier first.
    assert_eq!(downloads.len(), 2);
    assert_eq!(downloads[0]["label"], "Supporter Telegram Group");
    assert_eq!(downloads[1]["label"], "Report: The Road to Abu Dhabi");
    assert_eq!(downloads[1]["url"], "/contents/en/MuseSilver_EN.pdf");
}

#[tokio::test]
async fn japanese_lang_resolves_localized_labels_and_urls() {
    let mock_server = MockServer::start().await;
    let wallet = TestWallet::generate();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(das_response(&["Silver"])))
        .mount(&mock_server)
        .await;

    let mut body = verify_body(&wallet);
    body["lang"] = serde_json::json!("ja");

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post("/api/verify", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let downloads = json["downloads"].as_array().unwrap();
    assert_eq!(downloads[1]["url"], "/contents/ja/MuseSilver_JP.pdf");
}

#[tokio::test]
async fn highest_tier_wins_regardless_of_upstream_order() {
    for ordering in [&["Gold", "Bronze"], &["Bronze", "Gold"]] {
        let mock_server = MockServer::start().await;
        let wallet = TestWallet::generate();

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(das_response(ordering)))
            .mount(&mock_server)
            .await;

        let response = app_with_upstream(&mock_server.uri())
            .oneshot(json_post("/api/verify", verify_body(&wallet)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["tier"], "gold", "ordering {ordering:?}");
    }
}

#[tokio::test]
async fn repeated_identical_requests_yield_identical_bundles() {
    let mock_server = MockServer::start().await;
    let wallet = TestWallet::generate();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(das_response(&["Platinum"])))
        .mount(&mock_server)
        .await;

    let app = app_with_upstream(&mock_server.uri());
    let body = verify_body(&wallet);

    let first = app
        .clone()
        .oneshot(json_post("/api/verify", body.clone()))
        .await
        .unwrap();
    let second = app
        .oneshot(json_post("/api/verify", body))
        .await
        .unwrap();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(body_json(first).await, body_json(second).await);
}

#[tokio::test]
async fn platinum_holder_receives_entire_catalog() {
    let mock_server = MockServer::start().await;
    let wallet = TestWallet::generate();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(das_response(&["Platinum"])))
        .mount(&mock_server)
        .await;

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post("/api/verify", verify_body(&wallet)))
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(json["tier"], "platinum");
    // supporter_group + report_silver + report_gold + music_form + calendly + private_group
    assert_eq!(json["downloads"].as_array().unwrap().len(), 6);
}

// -- Scenario B: bad signature short-circuits -----------------------------------

#[tokio::test]
async fn invalid_signature_returns_401_and_never_calls_upstream() {
    let mock_server = MockServer::start().await;

    // The holdings service must never be contacted on a failed signature.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(das_response(&["Gold"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let wallet = TestWallet::generate();
    let other = TestWallet::generate();
    let message = "Sign in to the supporter dashboard: 1726000000000";
    let body = serde_json::json!({
        "publicKey": wallet.address,
        // Signature from a different key — well-formed but wrong.
        "signature": other.sign(message),
        "message": message,
    });

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post("/api/verify", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid signature");
    assert_eq!(json["code"], "INVALID_SIGNATURE");
}

#[tokio::test]
async fn malformed_base58_inputs_return_401() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(das_response(&["Gold"])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let body = serde_json::json!({
        "publicKey": "0OIl-not-base58",
        "signature": "also-not-base58-0OIl",
        "message": "hello",
    });

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post("/api/verify", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid signature");
    // Garbled input carries its own code, distinct from a failed verification.
    assert_eq!(json["code"], "INVALID_ENCODING");
}

// -- Scenario C: no holdings ----------------------------------------------------

#[tokio::test]
async fn zero_holdings_returns_403_nft_not_found() {
    let mock_server = MockServer::start().await;
    let wallet = TestWallet::generate();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(das_response(&[])))
        .mount(&mock_server)
        .await;

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post("/api/verify", verify_body(&wallet)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "NFT not found");
    assert_eq!(json["code"], "NFT_NOT_FOUND");
}

// -- Scenario D: holdings without a recognized tier ------------------------------

#[tokio::test]
async fn unrecognized_tier_values_return_403_tier_not_found() {
    let mock_server = MockServer::start().await;
    let wallet = TestWallet::generate();

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(das_response(&["diamond", "wood"])),
        )
        .mount(&mock_server)
        .await;

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post("/api/verify", verify_body(&wallet)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Valid Tier not found");
    assert_eq!(json["code"], "TIER_NOT_FOUND");
}

// -- Upstream failures ------------------------------------------------------------

#[tokio::test]
async fn upstream_500_maps_to_502_without_leaking_detail() {
    let mock_server = MockServer::start().await;
    let wallet = TestWallet::generate();

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("internal provider secret: key=abc123"),
        )
        .mount(&mock_server)
        .await;

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post("/api/verify", verify_body(&wallet)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert!(
        !json["error"].as_str().unwrap().contains("abc123"),
        "upstream body must not leak to the client"
    );
}

// -- Degraded mode: no upstream configured --------------------------------------

#[tokio::test]
async fn verify_returns_500_without_das_client() {
    let wallet = TestWallet::generate();
    let response = app_without_upstream()
        .oneshot(json_post("/api/verify", verify_body(&wallet)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "NOT_CONFIGURED");
}

#[tokio::test]
async fn rpc_forward_returns_500_without_das_client() {
    let response = app_without_upstream()
        .oneshot(json_post(
            "/api/solana-rpc",
            serde_json::json!({"jsonrpc": "2.0", "id": 1, "method": "getHealth"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "NOT_CONFIGURED");
}

// -- RPC forward passthrough ------------------------------------------------------

#[tokio::test]
async fn rpc_forward_relays_status_and_body_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({"method": "getLatestBlockhash"})))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"error":"rate limited"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = app_with_upstream(&mock_server.uri())
        .oneshot(json_post(
            "/api/solana-rpc",
            serde_json::json!({"jsonrpc": "2.0", "id": 1, "method": "getLatestBlockhash"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], br#"{"error":"rate limited"}"#);
}

// -- Tier sale table ---------------------------------------------------------------

#[tokio::test]
async fn tiers_endpoint_serves_sale_table_ascending() {
    let response = app_without_upstream()
        .oneshot(
            Request::builder()
                .uri("/api/tiers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let tiers = json.as_array().unwrap();
    assert_eq!(tiers.len(), 4);
    assert_eq!(tiers[0]["tier"], "bronze");
    assert_eq!(tiers[3]["tier"], "platinum");
    assert!(tiers[2]["candy_machine_id"].as_str().unwrap().len() > 30);
}

// -- OpenAPI -----------------------------------------------------------------------

#[tokio::test]
async fn openapi_spec_is_served() {
    let response = app_without_upstream()
        .oneshot(
            Request::builder()
                .uri("/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/api/verify"].is_object());
    assert!(json["paths"]["/api/tiers"].is_object());
}
