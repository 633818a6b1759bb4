// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-cluster client registry built from kubeconfig files at startup

use crate::error::{DroverError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KubeConfig};
use std::collections::HashMap;
use std::fs;
use tracing::{info, instrument};

/// Pre-authenticated `kube::Client` per configured cluster, keyed by cluster name.
#[derive(Clone)]
pub struct ClusterClients {
    clients: HashMap<String, Client>,
}

impl ClusterClients {
    pub fn new(clients: HashMap<String, Client>) -> Self {
        Self { clients }
    }

    /// Build one client per configured cluster. Fails on the first kubeconfig
    /// that cannot be read or parsed, naming the offending cluster.
    #[instrument(skip(kubeconfigs))]
    pub async fn from_kubeconfigs(kubeconfigs: &HashMap<String, String>) -> Result<Self> {
        let mut clients = HashMap::new();
        for (cluster, path) in kubeconfigs {
            let kubeconfig = fs::read_to_string(path).map_err(|e| {
                DroverError::Kubeconfig(format!(
                    "cluster {}: failed to read {}: {}",
                    cluster, path, e
                ))
            })?;
            let client = create_client_from_kubeconfig(&kubeconfig)
                .await
                .map_err(|e| DroverError::Kubeconfig(format!("cluster {}: {}", cluster, e)))?;
            info!("Initialized client for cluster {}", cluster);
            clients.insert(cluster.clone(), client);
        }
        Ok(Self { clients })
    }

    /// Look up the client for a cluster by name
    pub fn get(&self, cluster: &str) -> Result<Client> {
        self.clients
            .get(cluster)
            .cloned()
            .ok_or_else(|| DroverError::UnknownCluster(cluster.to_string()))
    }

    /// Sorted list of configured cluster names
    pub fn clusters(&self) -> Vec<String> {
        let mut names: Vec<String> = self.clients.keys().cloned().collect();
        names.sort();
        names
    }
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| DroverError::Kubeconfig(format!("failed to parse kubeconfig: {}", e)))?;

    let client_config = KubeConfig::from_custom_kubeconfig(parsed, &KubeConfigOptions::default())
        .await
        .map_err(|e| DroverError::Kubeconfig(format!("failed to create config: {}", e)))?;

    Client::try_from(client_config)
        .map_err(|e| DroverError::Kubeconfig(format!("failed to create client: {}", e)))
}
