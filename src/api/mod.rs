// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP API: routing, shared state, and the response envelope.

pub mod deployments;
pub mod pods;
pub mod response;

use crate::config::Config;
use crate::kubernetes::ClusterClients;
use axum::extract::State;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use response::ApiResponse;
use serde::Deserialize;

#[derive(Clone)]
pub struct AppState {
    pub clients: ClusterClients,
    pub config: Config,
}

/// Query parameters shared by the workload list endpoints
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub filter_name: String,
    #[serde(default)]
    pub limit: usize,
    #[serde(default)]
    pub page: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/clusters", get(clusters))
        .route("/api/pods", get(pods::list))
        .route("/api/pod/detail", get(pods::detail))
        .route("/api/pod/update", put(pods::update))
        .route("/api/pod/del", delete(pods::del))
        .route("/api/pod/container", get(pods::containers))
        .route("/api/pod/log", get(pods::logs))
        .route("/api/deployments", get(deployments::list))
        .route("/api/deployment/detail", get(deployments::detail))
        .route("/api/deployment/create", post(deployments::create))
        .route("/api/deployment/update", put(deployments::update))
        .route("/api/deployment/del", delete(deployments::del))
        .route("/api/deployment/scale", put(deployments::scale))
        .route("/api/deployment/restart", put(deployments::restart))
        .route("/api/deployment/numnp", get(deployments::per_namespace))
        .with_state(state)
}

async fn clusters(State(state): State<AppState>) -> Json<ApiResponse<Vec<String>>> {
    ApiResponse::ok("cluster list fetched", state.clients.clusters())
}
