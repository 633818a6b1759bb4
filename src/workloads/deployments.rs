// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment operations: list with selection, detail, create, update, delete,
//! scale, rolling restart, and per-namespace counts

use crate::dataselect::DataSelector;
use crate::error::{DroverError, Result};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, HTTPGetAction, Namespace, PodSpec, PodTemplateSpec, Probe,
    ResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::{Api, DeleteParams, ListParams, ObjectMeta, Patch, PatchParams, PostParams};
use kube::{Client, ResourceExt};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::instrument;

/// List payload: the selected page of deployments plus the post-filter total
#[derive(Debug, Serialize)]
pub struct DeploymentsResponse {
    pub items: Vec<Deployment>,
    pub total: usize,
}

/// Parameters for creating a deployment from a simple template
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentCreate {
    pub name: String,
    pub namespace: String,
    pub replicas: i32,
    pub image: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub cpu: String,
    #[serde(default)]
    pub memory: String,
    pub container_port: i32,
    #[serde(default)]
    pub health_check: bool,
    #[serde(default)]
    pub health_path: String,
    pub cluster: String,
}

/// Deployment count for one namespace
#[derive(Debug, Serialize)]
pub struct NamespaceDeployments {
    pub namespace: String,
    pub deployment_num: usize,
}

/// An empty namespace addresses deployments across all namespaces
fn deployments_api(client: &Client, namespace: &str) -> Api<Deployment> {
    if namespace.is_empty() {
        Api::all(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    }
}

/// List deployments, filtered by name substring, newest first, paginated
#[instrument(skip(client))]
pub async fn list_deployments(
    client: &Client,
    namespace: &str,
    filter: &str,
    limit: usize,
    page: usize,
) -> Result<DeploymentsResponse> {
    let deployments = deployments_api(client, namespace)
        .list(&ListParams::default())
        .await?;

    let selector = DataSelector::new(deployments.items).filter(filter).sort();
    let total = selector.total();
    let items = selector.paginate(limit, page).into_items();

    Ok(DeploymentsResponse { items, total })
}

#[instrument(skip(client))]
pub async fn get_deployment(client: &Client, namespace: &str, name: &str) -> Result<Deployment> {
    Ok(deployments_api(client, namespace).get(name).await?)
}

#[instrument(skip(client, create), fields(name = %create.name, namespace = %create.namespace))]
pub async fn create_deployment(client: &Client, create: &DeploymentCreate) -> Result<Deployment> {
    let deployment = build_deployment(create);
    Ok(deployments_api(client, &create.namespace)
        .create(&PostParams::default(), &deployment)
        .await?)
}

/// Replace a deployment with the full object JSON supplied by the caller.
/// The target name comes from the payload metadata.
#[instrument(skip(client, content))]
pub async fn update_deployment(
    client: &Client,
    namespace: &str,
    content: &str,
) -> Result<Deployment> {
    let deployment: Deployment = serde_json::from_str(content).map_err(|e| {
        DroverError::InvalidPayload(format!("not a valid Deployment object: {}", e))
    })?;
    let Some(name) = deployment.metadata.name.clone() else {
        return Err(DroverError::InvalidPayload(
            "deployment payload has no metadata.name".to_string(),
        ));
    };
    Ok(deployments_api(client, namespace)
        .replace(&name, &PostParams::default(), &deployment)
        .await?)
}

#[instrument(skip(client))]
pub async fn delete_deployment(client: &Client, namespace: &str, name: &str) -> Result<()> {
    deployments_api(client, namespace)
        .delete(name, &DeleteParams::default())
        .await?;
    Ok(())
}

/// Set the replica count through the scale subresource, returning the new count
#[instrument(skip(client))]
pub async fn scale_deployment(
    client: &Client,
    namespace: &str,
    name: &str,
    replicas: i32,
) -> Result<i32> {
    let api = deployments_api(client, namespace);
    let mut scale = api.get_scale(name).await?;
    scale.spec.get_or_insert_with(Default::default).replicas = Some(replicas);
    let updated = api
        .replace_scale(name, &PostParams::default(), serde_json::to_vec(&scale)?)
        .await?;
    Ok(updated.spec.and_then(|s| s.replicas).unwrap_or(replicas))
}

/// Force a rolling restart by stamping a RESTART_ env var with the current
/// unix time on the container matching the deployment name
#[instrument(skip(client))]
pub async fn restart_deployment(client: &Client, namespace: &str, name: &str) -> Result<()> {
    let patch = serde_json::json!({
        "spec": {
            "template": {
                "spec": {
                    "containers": [{
                        "name": name,
                        "env": [{
                            "name": "RESTART_",
                            "value": unix_now().to_string(),
                        }],
                    }],
                },
            },
        },
    });
    deployments_api(client, namespace)
        .patch(name, &PatchParams::default(), &Patch::Strategic(patch))
        .await?;
    Ok(())
}

/// Count deployments in every namespace of the cluster
#[instrument(skip(client))]
pub async fn deployments_per_namespace(client: &Client) -> Result<Vec<NamespaceDeployments>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces.list(&ListParams::default()).await?;

    let mut counts = Vec::with_capacity(namespace_list.items.len());
    for namespace in namespace_list.items {
        let name = namespace.name_any();
        let deployments = deployments_api(client, &name)
            .list(&ListParams::default())
            .await?;
        counts.push(NamespaceDeployments {
            namespace: name,
            deployment_num: deployments.items.len(),
        });
    }
    Ok(counts)
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Assemble the full Deployment object from the creation template
fn build_deployment(create: &DeploymentCreate) -> Deployment {
    let mut container = Container {
        name: create.name.clone(),
        image: Some(create.image.clone()),
        ports: Some(vec![ContainerPort {
            name: Some("http".to_string()),
            protocol: Some("TCP".to_string()),
            container_port: create.container_port,
            ..Default::default()
        }]),
        ..Default::default()
    };

    if create.health_check {
        container.readiness_probe = Some(http_probe(&create.health_path, create.container_port, 5));
        container.liveness_probe = Some(http_probe(&create.health_path, create.container_port, 15));

        let resources: BTreeMap<String, Quantity> = BTreeMap::from([
            ("cpu".to_string(), Quantity(create.cpu.clone())),
            ("memory".to_string(), Quantity(create.memory.clone())),
        ]);
        container.resources = Some(ResourceRequirements {
            limits: Some(resources.clone()),
            requests: Some(resources),
            ..Default::default()
        });
    }

    Deployment {
        metadata: ObjectMeta {
            name: Some(create.name.clone()),
            namespace: Some(create.namespace.clone()),
            labels: Some(create.labels.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(create.replicas),
            selector: LabelSelector {
                match_labels: Some(create.labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    name: Some(create.name.clone()),
                    labels: Some(create.labels.clone()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn http_probe(path: &str, port: i32, initial_delay: i32) -> Probe {
    Probe {
        http_get: Some(HTTPGetAction {
            path: Some(path.to_string()),
            port: IntOrString::Int(port),
            ..Default::default()
        }),
        initial_delay_seconds: Some(initial_delay),
        timeout_seconds: Some(5),
        period_seconds: Some(5),
        ..Default::default()
    }
}
