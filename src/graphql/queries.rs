// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Query documents for the three operations the step performs.

use crate::error::{ArgoSyncError, Result};
use crate::graphql::GraphqlRequest;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetRuntime,
    Terminate,
    ArgocdSync,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::GetRuntime, Operation::Terminate, Operation::ArgocdSync];

    /// Document name, also the file stem under the queries directory
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetRuntime => "getRuntime",
            Operation::Terminate => "terminate",
            Operation::ArgocdSync => "argocd_sync",
        }
    }

    fn embedded(&self) -> &'static str {
        match self {
            Operation::GetRuntime => include_str!("../../queries/getRuntime.graphql"),
            Operation::Terminate => include_str!("../../queries/terminate.graphql"),
            Operation::ArgocdSync => include_str!("../../queries/argocd_sync.graphql"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The loaded documents, one per operation
#[derive(Debug, Clone)]
pub struct QuerySet {
    get_runtime: String,
    terminate: String,
    argocd_sync: String,
}

impl QuerySet {
    /// Documents compiled into the binary
    pub fn embedded() -> Self {
        Self {
            get_runtime: Operation::GetRuntime.embedded().to_string(),
            terminate: Operation::Terminate.embedded().to_string(),
            argocd_sync: Operation::ArgocdSync.embedded().to_string(),
        }
    }

    /// Read `<dir>/<name>.graphql` for every operation, or fall back to the
    /// embedded documents when no directory is configured
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        let Some(dir) = dir else {
            return Ok(Self::embedded());
        };

        let read = |operation: Operation| -> Result<String> {
            let path = dir.join(format!("{}.graphql", operation.name()));
            debug!("Loading query document {}", path.display());
            fs::read_to_string(&path).map_err(|source| ArgoSyncError::QueryLoad {
                name: operation.name(),
                path,
                source,
            })
        };

        Ok(Self {
            get_runtime: read(Operation::GetRuntime)?,
            terminate: read(Operation::Terminate)?,
            argocd_sync: read(Operation::ArgocdSync)?,
        })
    }

    pub fn document(&self, operation: Operation) -> &str {
        match operation {
            Operation::GetRuntime => &self.get_runtime,
            Operation::Terminate => &self.terminate,
            Operation::ArgocdSync => &self.argocd_sync,
        }
    }

    pub fn request(&self, operation: Operation, variables: serde_json::Value) -> GraphqlRequest {
        GraphqlRequest {
            operation,
            query: self.document(operation).to_string(),
            variables,
        }
    }
}
