// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client construction and per-cluster lookup.

pub mod clients;

pub use clients::ClusterClients;
