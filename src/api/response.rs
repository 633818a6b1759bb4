// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use axum::Json;
use serde::Serialize;

/// Uniform response envelope: a human-readable summary plus the payload
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub msg: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(msg: &str, data: T) -> Json<Self> {
        Json(Self {
            msg: msg.to_string(),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    /// A message-only envelope for mutations with nothing to return
    pub fn message(msg: &str) -> Json<Self> {
        Json(Self {
            msg: msg.to_string(),
            data: None,
        })
    }
}
