use crate::api::error::{ApiError, ApiResult};
use crate::api::types::{AddressesRequest, MessageResponse};
use crate::metrics::render_subnet_metrics;
use crate::store::HostRecord;
use crate::subnet;
use crate::sweep::SweepCoordinator;
use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::collections::HashMap;
use std::sync::Arc;

pub struct RestApi {
    coordinator: Arc<SweepCoordinator>,
}

impl RestApi {
    pub fn new(coordinator: SweepCoordinator) -> Self {
        Self {
            coordinator: Arc::new(coordinator),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route("/ping", post(ping_hosts))
            .route("/reset", post(reset_hosts))
            .route("/result", get(get_results))
            .route("/metrics/:subnet", get(subnet_metrics))
            .with_state(self.coordinator.clone())
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn ping_hosts(
    State(coordinator): State<Arc<SweepCoordinator>>,
    payload: Result<Json<AddressesRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<HostRecord>>> {
    let Json(req) =
        payload.map_err(|_| ApiError::InvalidRequest("Address is required.".to_string()))?;

    if req.addresses.is_empty() {
        return Err(ApiError::InvalidRequest("Address is required.".to_string()));
    }

    let records = coordinator.ping_sweep(&req.addresses).await;
    Ok(Json(records))
}

async fn reset_hosts(
    State(coordinator): State<Arc<SweepCoordinator>>,
    payload: Result<Json<AddressesRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) =
        payload.map_err(|_| ApiError::InvalidRequest("Addresses are required.".to_string()))?;

    coordinator.reset(&req.addresses);

    // Confirmed regardless of how many records actually matched
    Ok(Json(MessageResponse {
        message: "Ping results have been reset.".to_string(),
    }))
}

async fn get_results(
    State(coordinator): State<Arc<SweepCoordinator>>,
) -> Json<HashMap<String, HostRecord>> {
    Json(coordinator.snapshot())
}

async fn subnet_metrics(
    State(coordinator): State<Arc<SweepCoordinator>>,
    Path(subnet): Path<String>,
) -> ApiResult<Response> {
    if !subnet::is_dotted_quad(&subnet) {
        return Err(ApiError::InvalidSubnet(subnet));
    }
    let prefix = subnet::subnet_prefix(&subnet)
        .ok_or_else(|| ApiError::InvalidSubnet(subnet.clone()))?;

    let sweep = coordinator.subnet_sweep(&prefix).await;
    let body = render_subnet_metrics(&subnet, &sweep)?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    )
        .into_response())
}
