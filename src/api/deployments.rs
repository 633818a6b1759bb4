// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment endpoints: bind parameters, resolve the cluster client, delegate

use crate::api::response::ApiResponse;
use crate::api::{AppState, ListQuery};
use crate::error::Result;
use crate::workloads::deployments::{
    self, DeploymentCreate, DeploymentsResponse, NamespaceDeployments,
};
use axum::extract::{Query, State};
use axum::Json;
use k8s_openapi::api::apps::v1::Deployment;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DeploymentQuery {
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
    pub deployment_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ScaleBody {
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
    pub deployment_name: String,
    pub scale_num: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub cluster: String,
    #[serde(default)]
    pub namespace: String,
    /// Full Deployment object JSON
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ClusterQuery {
    pub cluster: String,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<ApiResponse<DeploymentsResponse>>> {
    let client = state.clients.get(&params.cluster)?;
    let response = deployments::list_deployments(
        &client,
        &params.namespace,
        &params.filter_name,
        params.limit,
        params.page,
    )
    .await?;
    Ok(ApiResponse::ok("deployment list fetched", response))
}

pub async fn detail(
    State(state): State<AppState>,
    Query(params): Query<DeploymentQuery>,
) -> Result<Json<ApiResponse<Deployment>>> {
    let client = state.clients.get(&params.cluster)?;
    let deployment =
        deployments::get_deployment(&client, &params.namespace, &params.deployment_name).await?;
    Ok(ApiResponse::ok("deployment detail fetched", deployment))
}

pub async fn create(
    State(state): State<AppState>,
    Json(params): Json<DeploymentCreate>,
) -> Result<Json<ApiResponse<()>>> {
    let client = state.clients.get(&params.cluster)?;
    deployments::create_deployment(&client, &params).await?;
    Ok(ApiResponse::message("deployment created"))
}

pub async fn update(
    State(state): State<AppState>,
    Json(params): Json<UpdateBody>,
) -> Result<Json<ApiResponse<()>>> {
    let client = state.clients.get(&params.cluster)?;
    deployments::update_deployment(&client, &params.namespace, &params.content).await?;
    Ok(ApiResponse::message("deployment updated"))
}

pub async fn del(
    State(state): State<AppState>,
    Json(params): Json<DeploymentQuery>,
) -> Result<Json<ApiResponse<()>>> {
    let client = state.clients.get(&params.cluster)?;
    deployments::delete_deployment(&client, &params.namespace, &params.deployment_name).await?;
    Ok(ApiResponse::message("deployment deleted"))
}

pub async fn scale(
    State(state): State<AppState>,
    Json(params): Json<ScaleBody>,
) -> Result<Json<ApiResponse<i32>>> {
    let client = state.clients.get(&params.cluster)?;
    let replicas = deployments::scale_deployment(
        &client,
        &params.namespace,
        &params.deployment_name,
        params.scale_num,
    )
    .await?;
    Ok(ApiResponse::ok("deployment scaled", replicas))
}

pub async fn restart(
    State(state): State<AppState>,
    Json(params): Json<DeploymentQuery>,
) -> Result<Json<ApiResponse<()>>> {
    let client = state.clients.get(&params.cluster)?;
    deployments::restart_deployment(&client, &params.namespace, &params.deployment_name).await?;
    Ok(ApiResponse::message("deployment restarted"))
}

pub async fn per_namespace(
    State(state): State<AppState>,
    Query(params): Query<ClusterQuery>,
) -> Result<Json<ApiResponse<Vec<NamespaceDeployments>>>> {
    let client = state.clients.get(&params.cluster)?;
    let counts = deployments::deployments_per_namespace(&client).await?;
    Ok(ApiResponse::ok("deployment counts fetched", counts))
}
