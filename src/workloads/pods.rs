// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod operations: list with selection, detail, update, delete, containers, logs

use crate::dataselect::DataSelector;
use crate::error::{DroverError, Result};
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, DeleteParams, ListParams, LogParams, PostParams};
use kube::Client;
use serde::Serialize;
use tracing::instrument;

/// List payload: the selected page of pods plus the post-filter total
#[derive(Debug, Serialize)]
pub struct PodsResponse {
    pub items: Vec<Pod>,
    pub total: usize,
}

/// An empty namespace addresses pods across all namespaces
fn pods_api(client: &Client, namespace: &str) -> Api<Pod> {
    if namespace.is_empty() {
        Api::all(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    }
}

/// List pods, filtered by name substring, newest first, paginated
#[instrument(skip(client))]
pub async fn list_pods(
    client: &Client,
    namespace: &str,
    filter: &str,
    limit: usize,
    page: usize,
) -> Result<PodsResponse> {
    let pods = pods_api(client, namespace).list(&ListParams::default()).await?;

    let selector = DataSelector::new(pods.items).filter(filter).sort();
    let total = selector.total();
    let items = selector.paginate(limit, page).into_items();

    Ok(PodsResponse { items, total })
}

#[instrument(skip(client))]
pub async fn get_pod(client: &Client, namespace: &str, name: &str) -> Result<Pod> {
    Ok(pods_api(client, namespace).get(name).await?)
}

/// Replace a pod with the full object JSON supplied by the caller
#[instrument(skip(client, content))]
pub async fn update_pod(
    client: &Client,
    namespace: &str,
    name: &str,
    content: &str,
) -> Result<Pod> {
    let pod: Pod = serde_json::from_str(content)
        .map_err(|e| DroverError::InvalidPayload(format!("not a valid Pod object: {}", e)))?;
    Ok(pods_api(client, namespace)
        .replace(name, &PostParams::default(), &pod)
        .await?)
}

#[instrument(skip(client))]
pub async fn delete_pod(client: &Client, namespace: &str, name: &str) -> Result<()> {
    pods_api(client, namespace)
        .delete(name, &DeleteParams::default())
        .await?;
    Ok(())
}

/// Container names from the pod spec
#[instrument(skip(client))]
pub async fn pod_containers(client: &Client, namespace: &str, name: &str) -> Result<Vec<String>> {
    let pod = get_pod(client, namespace, name).await?;
    Ok(pod
        .spec
        .map(|spec| spec.containers.into_iter().map(|c| c.name).collect())
        .unwrap_or_default())
}

/// Tail-limited logs for one container of a pod
#[instrument(skip(client))]
pub async fn pod_logs(
    client: &Client,
    namespace: &str,
    name: &str,
    container: &str,
    tail_lines: i64,
) -> Result<String> {
    let params = LogParams {
        container: Some(container.to_string()),
        tail_lines: Some(tail_lines),
        ..Default::default()
    };
    Ok(pods_api(client, namespace).logs(name, &params).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{not_found_json, pod_json, pod_list_json, MockService};

    fn list_fixture() -> String {
        pod_list_json(vec![
            pod_json("api-server-1", "default", "2025-01-01T10:00:00Z"),
            pod_json("worker-1", "default", "2025-01-02T10:00:00Z"),
            pod_json("api-server-2", "default", "2025-01-03T10:00:00Z"),
        ])
    }

    #[tokio::test]
    async fn lists_pods_newest_first() {
        let client = MockService::new()
            .on_get("/api/v1/namespaces/default/pods", 200, &list_fixture())
            .into_client();

        let resp = list_pods(&client, "default", "", 0, 0).await.unwrap();
        assert_eq!(resp.total, 3);
        let names: Vec<_> = resp
            .items
            .iter()
            .map(|p| p.metadata.name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["api-server-2", "worker-1", "api-server-1"]);
    }

    #[tokio::test]
    async fn list_filter_narrows_but_total_reflects_filter() {
        let client = MockService::new()
            .on_get("/api/v1/namespaces/default/pods", 200, &list_fixture())
            .into_client();

        let resp = list_pods(&client, "default", "api-server", 1, 1).await.unwrap();
        assert_eq!(resp.total, 2);
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].metadata.name.as_deref(), Some("api-server-2"));
    }

    #[tokio::test]
    async fn empty_namespace_lists_all_namespaces() {
        let client = MockService::new()
            .on_get("/api/v1/pods", 200, &list_fixture())
            .into_client();

        let resp = list_pods(&client, "", "", 0, 0).await.unwrap();
        assert_eq!(resp.total, 3);
    }

    #[tokio::test]
    async fn get_surfaces_upstream_not_found() {
        let client = MockService::new()
            .on_get(
                "/api/v1/namespaces/default/pods/gone",
                404,
                &not_found_json("pods", "gone"),
            )
            .into_client();

        let err = get_pod(&client, "default", "gone").await.unwrap_err();
        assert!(matches!(err, DroverError::Kube(kube::Error::Api(e)) if e.code == 404));
    }

    #[tokio::test]
    async fn containers_come_from_the_pod_spec() {
        let pod = pod_json("web", "default", "2025-01-01T10:00:00Z").to_string();
        let client = MockService::new()
            .on_get("/api/v1/namespaces/default/pods/web", 200, &pod)
            .into_client();

        let containers = pod_containers(&client, "default", "web").await.unwrap();
        assert_eq!(containers, vec!["app", "sidecar"]);
    }

    #[tokio::test]
    async fn update_rejects_malformed_payload() {
        let client = MockService::new().into_client();
        let err = update_pod(&client, "default", "web", "{not json")
            .await
            .unwrap_err();
        assert!(matches!(err, DroverError::InvalidPayload(_)));
    }

    #[tokio::test]
    async fn delete_forwards_to_the_cluster() {
        let pod = pod_json("web", "default", "2025-01-01T10:00:00Z").to_string();
        let client = MockService::new()
            .on_delete("/api/v1/namespaces/default/pods/web", 200, &pod)
            .into_client();

        delete_pod(&client, "default", "web").await.unwrap();
    }

    #[tokio::test]
    async fn logs_return_raw_text() {
        let client = MockService::new()
            .on_get(
                "/api/v1/namespaces/default/pods/web/log",
                200,
                "line one\nline two\n",
            )
            .into_client();

        let log = pod_logs(&client, "default", "web", "app", 500).await.unwrap();
        assert_eq!(log, "line one\nline two\n");
    }
}
