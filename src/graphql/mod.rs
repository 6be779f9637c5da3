// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! GraphQL transport, request envelope and query documents.

pub mod client;
pub mod queries;

pub use client::GraphqlClient;
pub use queries::{Operation, QuerySet};

use crate::constants::endpoints::CONTROL_PLANE_PATH;
use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

/// A single GraphQL operation ready to be posted
#[derive(Serialize, Debug, Clone)]
pub struct GraphqlRequest {
    #[serde(skip)]
    pub operation: Operation,
    pub query: String,
    pub variables: serde_json::Value,
}

/// Executes GraphQL requests against an endpoint and returns the `data` object
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, endpoint: &str, request: &GraphqlRequest) -> Result<serde_json::Value>;
}

/// GraphQL endpoint of the platform control plane
pub fn control_plane_endpoint(api_url: &str) -> String {
    format!("{}{}", api_url, CONTROL_PLANE_PATH)
}
