// ticket-gateway-rs/src/lib.rs
// HTTP entry point for the ticket categorization service
// Validates untrusted ticket JSON, invokes the categorization engine, and
// serializes the resulting action plan

use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::State,
    http::header::HeaderMap,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use once_cell::sync::Lazy;
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};

use categorization_engine::{categorize, TicketInput};

pub mod validation;

use validation::{
    payload_limit_config, sanitize_json_input, validate_content_type, validate_ticket_request,
    ApiValidationError,
};

/// Service start time for uptime reporting
static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub service_name: String,
    pub uptime_seconds: i64,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Core gateway state and router assembly
pub struct TicketGateway {
    service_name: String,
}

impl TicketGateway {
    pub fn new() -> Self {
        Self {
            service_name: config_rs::get_formatted_service_name("TICKET_GATEWAY"),
        }
    }

    /// Create the Axum router with all routes and middleware
    pub fn create_router(self: Arc<Self>) -> Router {
        let _ = *START_TIME;

        Router::new()
            .route("/", get(Self::root_handler))
            .route("/health", get(Self::health_handler))
            .route("/categorize", post(Self::categorize_handler))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(payload_limit_config())
            .layer(
                CorsLayer::new()
                    .allow_origin(CorsAny)
                    .allow_methods(CorsAny)
                    .allow_headers(CorsAny),
            )
            .with_state(self)
    }

    /// GET / - Root endpoint with service metadata
    async fn root_handler() -> impl IntoResponse {
        Json(serde_json::json!({
            "service": "VibeFI AI Ticket Categorization Service",
            "description": "A service to categorize banking support tickets and generate an appropriate action plan.",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": [
                "GET /health",
                "POST /categorize"
            ]
        }))
    }

    /// GET /health - Health check endpoint
    async fn health_handler(State(state): State<Arc<Self>>) -> impl IntoResponse {
        let uptime = START_TIME.elapsed().as_secs() as i64;

        // No downstream dependencies: the gateway is healthy as long as it
        // can answer at all
        Json(HealthResponse {
            healthy: true,
            service_name: state.service_name.clone(),
            uptime_seconds: uptime,
            status: "SERVING".to_string(),
        })
    }

    /// POST /categorize - Categorize a support ticket into an action plan
    async fn categorize_handler(
        State(_state): State<Arc<Self>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        if let Err(err) = validate_content_type(&headers, "application/json") {
            log::warn!("Rejected categorize request: {}", err);
            let (status, body) = err.to_response();
            return (status, body).into_response();
        }

        let body_str = match std::str::from_utf8(&body) {
            Ok(s) => s,
            Err(_) => {
                let err =
                    ApiValidationError::InvalidFormat("Request body is not valid UTF-8".to_string());
                log::warn!("Rejected categorize request: {}", err);
                let (status, body) = err.to_response();
                return (status, body).into_response();
            }
        };

        let json_value = match sanitize_json_input(body_str) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Rejected categorize request: {}", err);
                let (status, body) = err.to_response();
                return (status, body).into_response();
            }
        };

        if let Err(err) = validate_ticket_request(&json_value) {
            log::warn!("Rejected categorize request: {}", err);
            let (status, body) = err.to_response();
            return (status, body).into_response();
        }

        let ticket: TicketInput = match serde_json::from_value(json_value) {
            Ok(ticket) => ticket,
            Err(e) => {
                // validate_ticket_request already vetted the shape, so the
                // two checks disagreeing is an internal fault
                log::error!("Validated ticket failed to deserialize: {}", e);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: format!("Internal classification error: {}", e),
                        code: 500,
                    }),
                )
                    .into_response();
            }
        };

        let request_id = uuid::Uuid::new_v4();
        log::info!(
            "Categorize request {}: channel={}, severity={}",
            request_id,
            ticket.channel,
            ticket.severity
        );

        let plan = categorize(&ticket);

        log::info!("Categorize request {}: decision={:?}", request_id, plan.decision);

        (StatusCode::OK, Json(plan)).into_response()
    }
}

impl Default for TicketGateway {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a handler panic into the generic 500 contract instead of tearing
/// down the connection
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    log::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Internal classification error: {}", detail),
            code: 500,
        }),
    )
        .into_response()
}
