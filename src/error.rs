// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DroverError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("cluster {0} is not configured")]
    UnknownCluster(String),

    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DroverError>;

impl DroverError {
    fn status(&self) -> StatusCode {
        match self {
            // Surface the upstream Kubernetes status code where there is one
            DroverError::Kube(kube::Error::Api(err)) => {
                StatusCode::from_u16(err.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            DroverError::UnknownCluster(_) => StatusCode::NOT_FOUND,
            DroverError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DroverError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "msg": self.to_string(),
            "data": null,
        }));
        (self.status(), body).into_response()
    }
}
