// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Workload resource operations, all delegating to the cluster's API server.

pub mod deployments;
pub mod pods;
