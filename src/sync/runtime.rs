// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::graphql::{control_plane_endpoint, GraphqlTransport, Operation, QuerySet};
use crate::types::RuntimeDescriptor;
use serde_json::json;
use tracing::{info, instrument};

/// Look up a runtime's ingress host and namespace through the control plane
#[instrument(skip(transport, queries, api_url))]
pub async fn resolve_runtime<T>(
    transport: &T,
    queries: &QuerySet,
    api_url: &str,
    runtime: &str,
) -> Result<RuntimeDescriptor>
where
    T: GraphqlTransport + ?Sized,
{
    let request = queries.request(Operation::GetRuntime, json!({ "runtime": runtime }));
    let data = transport
        .execute(&control_plane_endpoint(api_url), &request)
        .await?;

    let descriptor = RuntimeDescriptor::from_response(runtime, data)?;
    info!(
        "Runtime {} resolved: ingress_host={}, namespace={}",
        runtime, descriptor.ingress_host, descriptor.namespace
    );

    Ok(descriptor)
}
