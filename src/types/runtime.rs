// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::endpoints::{DASHBOARD_PATH, PROXY_PATH};
use crate::error::{ArgoSyncError, Result};
use serde::Deserialize;

/// Where a runtime can be reached and which namespace it lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeDescriptor {
    pub ingress_host: String,
    pub namespace: String,
}

impl RuntimeDescriptor {
    /// Build a descriptor from the `data` object of a `getRuntime` response
    pub fn from_response(runtime: &str, data: serde_json::Value) -> Result<Self> {
        let response: GetRuntimeData = serde_json::from_value(data)?;

        let Some(node) = response.runtime else {
            return Err(ArgoSyncError::RuntimeNotFound(runtime.to_string()));
        };

        let Some(ingress_host) = node.ingress_host.filter(|h| !h.is_empty()) else {
            return Err(ArgoSyncError::NoIngressHost(runtime.to_string()));
        };

        Ok(RuntimeDescriptor {
            ingress_host,
            namespace: node.metadata.namespace,
        })
    }

    /// GraphQL endpoint of the runtime's app-proxy
    pub fn proxy_endpoint(&self) -> String {
        format!("{}{}", self.ingress_host, PROXY_PATH)
    }

    /// Link to the application's timeline in the applications dashboard
    pub fn dashboard_link(&self, api_url: &str, runtime: &str, application: &str) -> String {
        format!(
            "{}{}/{}/{}/{}/timeline",
            api_url, DASHBOARD_PATH, self.namespace, runtime, application
        )
    }
}

#[derive(Deserialize, Debug)]
struct GetRuntimeData {
    runtime: Option<RuntimeNode>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct RuntimeNode {
    ingress_host: Option<String>,
    metadata: RuntimeMetadata,
}

#[derive(Deserialize, Debug)]
struct RuntimeMetadata {
    namespace: String,
}
