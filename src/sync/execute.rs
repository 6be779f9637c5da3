// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::graphql::{GraphqlTransport, Operation, QuerySet};
use crate::types::{RuntimeDescriptor, SyncOptions};
use serde_json::{json, Value};
use tracing::{info, instrument};

/// Variables of the sync mutation
pub fn sync_variables(application: &str, options: &SyncOptions) -> Result<Value> {
    Ok(json!({
        "applicationName": application,
        "options": serde_json::to_value(options.to_input(application))?,
    }))
}

/// Request a sync of the whole application through the runtime's proxy
#[instrument(skip(transport, queries, runtime, options), fields(ingress_host = %runtime.ingress_host))]
pub async fn execute_sync<T>(
    transport: &T,
    queries: &QuerySet,
    runtime: &RuntimeDescriptor,
    application: &str,
    options: &SyncOptions,
) -> Result<Value>
where
    T: GraphqlTransport + ?Sized,
{
    let variables = sync_variables(application, options)?;
    info!("Syncing app: {}", variables);

    let request = queries.request(Operation::ArgocdSync, variables);
    let result = transport.execute(&runtime.proxy_endpoint(), &request).await?;

    info!("Sync result: {}", result);
    Ok(result)
}
