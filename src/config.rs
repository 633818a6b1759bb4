// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env;

const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8081";
const DEFAULT_POD_LOG_TAIL_LINES: i64 = 500;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the API server binds to
    pub listen_address: String,
    /// Cluster name -> kubeconfig file path
    pub kubeconfigs: HashMap<String, String>,
    /// Number of lines returned when tailing pod logs
    pub pod_log_tail_lines: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let listen_address =
            env::var("LISTEN_ADDRESS").unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string());

        let raw = env::var("KUBECONFIGS").context("KUBECONFIGS environment variable not set")?;
        let kubeconfigs = parse_kubeconfigs(&raw)?;

        let pod_log_tail_lines = match env::var("POD_LOG_TAIL_LINES") {
            Ok(v) => v
                .parse()
                .context("POD_LOG_TAIL_LINES is not a valid number")?,
            Err(_) => DEFAULT_POD_LOG_TAIL_LINES,
        };

        Ok(Config {
            listen_address,
            kubeconfigs,
            pod_log_tail_lines,
        })
    }
}

/// Parse the KUBECONFIGS value: a JSON object mapping cluster name to kubeconfig path,
/// e.g. `{"prod":"/etc/drover/prod.yaml","staging":"/etc/drover/staging.yaml"}`
pub fn parse_kubeconfigs(raw: &str) -> Result<HashMap<String, String>> {
    serde_json::from_str(raw)
        .context("KUBECONFIGS must be a JSON object of cluster name to kubeconfig path")
}
