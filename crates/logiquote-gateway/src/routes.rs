//! REST routes for the quote builder

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use logiquote_common::{QuoteData, QuoteError};
use logiquote_pricing::{QuoteDocument, QuoteService, RateCard};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    service: Arc<QuoteService>,
}

/// Body of `POST /api/v1/quotes`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub quote: QuoteData,
    /// Falls back to the configured default when absent
    #[serde(default)]
    pub include_vat: Option<bool>,
}

/// Error returned by handlers
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] QuoteError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            QuoteError::Validation(issues) => {
                let issues: Vec<_> = issues
                    .iter()
                    .map(|issue| {
                        json!({
                            "field": issue.field(),
                            "message": issue.to_string(),
                        })
                    })
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"error": "validation_failed", "issues": issues})),
                )
                    .into_response()
            }
            other => {
                error!(error = %other, "quote request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": other.to_string()})),
                )
                    .into_response()
            }
        }
    }
}

/// Build the gateway router
pub fn router(service: Arc<QuoteService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/version", get(version))
        .route("/api/v1/rates", get(rates))
        .route("/api/v1/quotes", post(create_quote))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { service })
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "healthy"}))
}

async fn version() -> Json<serde_json::Value> {
    Json(json!({
        "service": "logiquote-gateway",
        "version": crate::GATEWAY_VERSION,
        "engine": logiquote_common::VERSION,
    }))
}

async fn rates(State(state): State<AppState>) -> Json<RateCard> {
    Json(state.service.rate_card())
}

async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteDocument>, ApiError> {
    let document = state.service.quote(request.quote, request.include_vat)?;
    Ok(Json(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use logiquote_pricing::QuoteSettings;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(settings: QuoteSettings) -> Router {
        router(Arc::new(QuoteService::new(settings)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    fn post_quote(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/quotes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn ambient_only() -> Value {
        json!({
            "warehousing": {
                "ambientStorage": {"enabled": true, "averageVolume": 30},
                "tempControlledStorage": {"enabled": false, "averageVolume": 0},
                "expectedMonths": 2
            },
            "fulfillment": {
                "monthlyOrders": 500,
                "averageItemsPerOrder": 1,
                "parcelSizeDistribution": {"small": 100, "medium": 0, "large": 0, "bulky": 0}
            }
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(QuoteSettings::default()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_rate_card() {
        let request = Request::get("/api/v1/rates").body(Body::empty()).unwrap();
        let (status, body) = send(app(QuoteSettings::default()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ambientStorageTiers"][0]["rate"], "650");
        assert_eq!(body["fulfillmentTiers"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_quote_with_vat() {
        let request = post_quote(json!({"quote": ambient_only(), "includeVat": true}));
        let (status, body) = send(app(QuoteSettings::default()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["currency"], "PHP");
        assert_eq!(body["costs"]["subtotal"], "52500.00");
        assert_eq!(body["costs"]["vat"], "6300.00");
        assert_eq!(body["costs"]["total"], "58800.00");
        assert!(body["quoteId"].is_string());
    }

    #[tokio::test]
    async fn test_quote_uses_configured_vat_default() {
        let settings = QuoteSettings {
            include_vat: true,
            strict_validation: false,
        };
        let (status, body) = send(app(settings), post_quote(json!({"quote": ambient_only()}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["includeVat"], true);
        assert_eq!(body["costs"]["total"], "58800.00");
    }

    #[tokio::test]
    async fn test_strict_mode_returns_issues() {
        let mut quote = ambient_only();
        quote["fulfillment"]["parcelSizeDistribution"]["small"] = json!(90);
        let settings = QuoteSettings {
            include_vat: false,
            strict_validation: true,
        };

        let (status, body) = send(app(settings), post_quote(json!({"quote": quote}))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(
            body["issues"][0]["field"],
            "fulfillment.parcelSizeDistribution"
        );
    }

    #[tokio::test]
    async fn test_permissive_mode_prices_invalid_quote() {
        let mut quote = ambient_only();
        quote["fulfillment"]["parcelSizeDistribution"]["small"] = json!(90);

        let (status, body) =
            send(app(QuoteSettings::default()), post_quote(json!({"quote": quote}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["costs"]["fulfillment"], "13500.00");
    }

    #[tokio::test]
    async fn test_extreme_volume_is_priced() {
        let mut quote = ambient_only();
        quote["warehousing"]["ambientStorage"]["averageVolume"] = json!("100000000000000000000000000");
        quote["fulfillment"]["monthlyOrders"] = json!("79228162514264337593543950335");
        let request = post_quote(json!({"quote": quote, "includeVat": true}));
        let (status, body) = send(app(QuoteSettings::default()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["costs"]["ambientStorage"], "79228162514264337593543950335");
        assert_eq!(body["costs"]["total"], "79228162514264337593543950335");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/quotes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"quote\": "))
            .unwrap();
        let (status, _) = send(app(QuoteSettings::default()), request).await;

        assert!(status.is_client_error());
    }
}
