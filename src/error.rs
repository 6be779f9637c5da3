// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgoSyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GraphQL endpoint returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("GraphQL errors: {0}")]
    Graphql(String),

    #[error("GraphQL response contained neither data nor errors")]
    MissingData,

    #[error("Unexpected GraphQL response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Runtime not found: {0}")]
    RuntimeNotFound(String),

    #[error("Runtime {0} has no ingress host")]
    NoIngressHost(String),

    #[error("Failed to load query document '{name}' from {}: {source}", .path.display())]
    QueryLoad {
        name: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error trying to terminate the current operation of the app: {0}")]
    TerminateRejected(String),

    #[error("Failed to export variable to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ArgoSyncError>;
