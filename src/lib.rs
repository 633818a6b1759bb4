// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod api;
pub mod config;
pub mod dataselect;
pub mod error;
pub mod kubernetes;
pub mod workloads;

#[cfg(test)]
pub mod test_utils;
