use std::sync::Arc;
use std::time::Duration;

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
};
use railpath_core::prelude::*;
use serde::Deserialize;
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower::limit::ConcurrencyLimitLayer;
use tower::timeout::TimeoutLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::HttpError;

pub struct AppState {
    pub default_weights: ObjectiveWeights,
}

/// Node and edge records of the network a request is evaluated against
#[derive(Debug, Deserialize)]
pub struct NetworkPayload {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl NetworkPayload {
    fn into_graph(self) -> Result<RailGraph, HttpError> {
        Ok(RailGraph::new(self.nodes, self.edges)?)
    }
}

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub network: NetworkPayload,
    pub start: String,
    pub goal: String,
    #[serde(default)]
    pub criterion: OptimizationCriterion,
    #[serde(default)]
    pub algorithm: Algorithm,
}

#[derive(Debug, Deserialize)]
pub struct RankedRequest {
    pub network: NetworkPayload,
    pub start: String,
    pub goal: String,
    pub weights: Option<ObjectiveWeights>,
}

pub fn build_router(config: &Config) -> Router {
    let state = Arc::new(AppState {
        default_weights: config.routing.weights,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let limits = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_overload))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(ConcurrencyLimitLayer::new(config.server.concurrency_limit));

    Router::new()
        .route("/health", get(health))
        .route("/route", post(route))
        .route("/route/ranked", post(ranked_routes))
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        .layer(limits)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn handle_overload(err: BoxError) -> (StatusCode, Json<Value>) {
    let status = if err.is::<tower::timeout::error::Elapsed>() {
        StatusCode::REQUEST_TIMEOUT
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status,
        Json(json!({ "error": err.to_string(), "status": status.as_u16() })),
    )
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn route(Json(request): Json<RouteRequest>) -> Result<Json<PathResult>, HttpError> {
    let RouteRequest {
        network,
        start,
        goal,
        criterion,
        algorithm,
    } = request;

    let found = tokio::task::spawn_blocking(move || {
        let graph = network.into_graph()?;
        let found = find_path(
            &graph,
            &start,
            &goal,
            criterion,
            algorithm,
            &EuclideanDistance,
        )?;
        found.ok_or_else(|| HttpError::NotFound(format!("No path from {start} to {goal}")))
    })
    .await??;

    tracing::info!(
        %algorithm,
        %criterion,
        hops = found.hops(),
        "route found"
    );
    Ok(Json(found))
}

async fn ranked_routes(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RankedRequest>,
) -> Result<Json<Vec<RankedPath>>, HttpError> {
    let RankedRequest {
        network,
        start,
        goal,
        weights,
    } = request;
    let weights = weights.unwrap_or(state.default_weights);

    let ranked = tokio::task::spawn_blocking(move || {
        let graph = network.into_graph()?;
        multi_objective(&graph, &start, &goal, &EuclideanDistance, &weights)
            .map_err(HttpError::from)
    })
    .await??;

    tracing::info!(candidates = ranked.len(), "ranked routes computed");
    Ok(Json(ranked))
}
