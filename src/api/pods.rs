// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod endpoints: bind parameters, resolve the cluster client, delegate

use crate::api::response::ApiResponse;
use crate::api::{AppState, ListQuery};
use crate::error::Result;
use crate::workloads::pods::{self, PodsResponse};
use axum::extract::{Query, State};
use axum::Json;
use k8s_openapi::api::core::v1::Pod;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PodQuery {
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
    pub pod_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LogQuery {
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
    pub pod_name: String,
    pub container_name: String,
}

#[derive(Debug, Deserialize)]
pub struct PodUpdate {
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
    pub pod_name: String,
    /// Full Pod object JSON
    pub content: String,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ApiResponse<PodsResponse>>> {
    let client = state.clients.get(&params.cluster)?;
    let response = pods::list_pods(
        &client,
        &params.namespace,
        &params.filter_name,
        params.limit,
        params.page,
    )
    .await?;
    Ok(ApiResponse::ok("pod list fetched", response))
}

pub async fn detail(
    State(state): State<AppState>,
    Query(params): Query<PodQuery>,
) -> Result<Json<ApiResponse<Pod>>> {
    let client = state.clients.get(&params.cluster)?;
    let pod = pods::get_pod(&client, &params.namespace, &params.pod_name).await?;
    Ok(ApiResponse::ok("pod detail fetched", pod))
}

pub async fn update(
    State(state): State<AppState>,
    Json(params): Json<PodUpdate>,
) -> Result<Json<ApiResponse<()>>> {
    let client = state.clients.get(&params.cluster)?;
    pods::update_pod(&client, &params.namespace, &params.pod_name, &params.content).await?;
    Ok(ApiResponse::message("pod updated"))
}

pub async fn del(
    State(state): State<AppState>,
    Json(params): Json<PodQuery>,
) -> Result<Json<ApiResponse<()>>> {
    let client = state.clients.get(&params.cluster)?;
    pods::delete_pod(&client, &params.namespace, &params.pod_name).await?;
    Ok(ApiResponse::message("pod deleted"))
}

pub async fn containers(
    State(state): State<AppState>,
    Query(params): Query<PodQuery>,
) -> Result<Json<ApiResponse<Vec<String>>>> {
    let client = state.clients.get(&params.cluster)?;
    let containers = pods::pod_containers(&client, &params.namespace, &params.pod_name).await?;
    Ok(ApiResponse::ok("pod containers fetched", containers))
}

pub async fn logs(
    State(state): State<AppState>,
    Query(params): Query<LogQuery>,
) -> Result<Json<ApiResponse<String>>> {
    let client = state.clients.get(&params.cluster)?;
    let log = pods::pod_logs(
        &client,
        &params.namespace,
        &params.pod_name,
        &params.container_name,
        state.config.pod_log_tail_lines,
    )
    .await?;
    Ok(ApiResponse::ok("pod log fetched", log))
}
