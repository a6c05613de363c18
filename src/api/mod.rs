//! HTTP API surface
//!
//! One route: `GET /plan_trip`. The handler runs the linear
//! fetch → generate → respond flow; each request is independent and
//! stateless.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::TripAiConfig;
use crate::itinerary::{ItineraryGenerator, OpenAiChatClient};
use crate::models::{ItineraryOutcome, PointOfInterest, TripRequest};
use crate::poi::OverpassClient;

/// Error payload when no POIs match the city/hobby pair
pub const NO_POIS_ERROR: &str = "No POIs found for this city/hobby";
/// Error payload when every Overpass call failed
pub const POI_UPSTREAM_ERROR: &str = "POI service unavailable";
/// Error payload when the completion call itself failed
pub const ITINERARY_UPSTREAM_ERROR: &str = "Itinerary service unavailable";

/// Shared application state, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<TripAiConfig>,
    pub overpass: Arc<OverpassClient>,
    pub generator: Arc<ItineraryGenerator>,
}

impl AppState {
    /// Build the state from configuration, constructing both clients
    #[must_use]
    pub fn new(config: TripAiConfig) -> Self {
        let overpass = Arc::new(OverpassClient::new(&config));
        let chat = Arc::new(OpenAiChatClient::new(&config));
        Self {
            config: Arc::new(config),
            overpass,
            generator: Arc::new(ItineraryGenerator::new(chat)),
        }
    }
}

/// Successful planning response
#[derive(Serialize)]
struct ApiPlanResponse {
    plan: ItineraryOutcome,
    pois: Vec<PointOfInterest>,
}

/// In-payload error response
#[derive(Serialize)]
struct ApiErrorResponse {
    error: String,
}

impl ApiErrorResponse {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/plan_trip", get(plan_trip))
        .with_state(state)
}

async fn plan_trip(
    State(state): State<AppState>,
    Query(request): Query<TripRequest>,
) -> Response {
    info!(
        city = %request.city,
        hobby = %request.hobby,
        duration = request.duration,
        "Planning trip"
    );

    let report = state
        .overpass
        .fetch_pois(&request.city, &request.hobby, state.config.limits.poi_limit)
        .await;

    if report.pois.is_empty() {
        if report.every_tag_failed() {
            warn!(
                city = %request.city,
                hobby = %request.hobby,
                "All Overpass queries failed"
            );
            return (
                StatusCode::BAD_GATEWAY,
                Json(ApiErrorResponse::new(POI_UPSTREAM_ERROR)),
            )
                .into_response();
        }
        return Json(ApiErrorResponse::new(NO_POIS_ERROR)).into_response();
    }

    match state.generator.generate(&request, &report.pois).await {
        Ok(plan) => {
            let pois: Vec<PointOfInterest> = report
                .pois
                .into_iter()
                .take(state.config.limits.response_pois)
                .collect();
            Json(ApiPlanResponse { plan, pois }).into_response()
        }
        Err(e) => {
            error!("Itinerary generation failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(ApiErrorResponse::new(ITINERARY_UPSTREAM_ERROR)),
            )
                .into_response()
        }
    }
}
