// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! HTTP GraphQL client with transport-level retries

use crate::config::ApiKey;
use crate::constants::retry::{BACKOFF_MILLIS, MAX_RETRIES, REQUEST_TIMEOUT_SECS};
use crate::error::{ArgoSyncError, Result};
use crate::graphql::{GraphqlRequest, GraphqlTransport};
use async_trait::async_trait;
use http::{header::AUTHORIZATION, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Status codes answered with a retry
const RETRY_STATUSES: [StatusCode; 5] = [
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

pub struct GraphqlClient {
    http: reqwest::Client,
    api_key: ApiKey,
    max_retries: u32,
    backoff: Duration,
}

impl GraphqlClient {
    pub fn new(api_key: ApiKey) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            api_key,
            max_retries: MAX_RETRIES,
            backoff: Duration::from_millis(BACKOFF_MILLIS),
        })
    }

    /// Override the base retry backoff
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    async fn try_execute(&self, endpoint: &str, request: &GraphqlRequest) -> Result<Value> {
        let response = self
            .http
            .post(endpoint)
            .header(AUTHORIZATION, self.api_key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if !RETRY_STATUSES.contains(&status) {
                if let Some(errors) = graphql_errors(&body) {
                    return Err(errors);
                }
            }
            return Err(ArgoSyncError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: graphql_client::Response<Value> = response.json().await?;
        into_data(envelope)
    }
}

#[async_trait]
impl GraphqlTransport for GraphqlClient {
    #[instrument(skip(self, request), fields(operation = %request.operation))]
    async fn execute(&self, endpoint: &str, request: &GraphqlRequest) -> Result<Value> {
        let mut attempt = 0;

        loop {
            match self.try_execute(endpoint, request).await {
                Err(e) if attempt < self.max_retries && is_transient(&e) => {
                    let delay = self.backoff * 2u32.pow(attempt);
                    attempt += 1;
                    warn!(
                        "Request to {} failed: {}, retry {}/{} in {:?}",
                        endpoint, e, attempt, self.max_retries, delay
                    );
                    sleep(delay).await;
                }
                result => {
                    debug!("Request to {} finished after {} retries", endpoint, attempt);
                    return result;
                }
            }
        }
    }
}

fn is_transient(err: &ArgoSyncError) -> bool {
    match err {
        ArgoSyncError::Http(e) => e.is_connect() || e.is_timeout(),
        ArgoSyncError::HttpStatus { status, .. } => RETRY_STATUSES
            .iter()
            .any(|s| s.as_u16() == *status),
        _ => false,
    }
}

/// Extract the `data` object, turning reported errors into a failure
fn into_data(envelope: graphql_client::Response<Value>) -> Result<Value> {
    if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
        return Err(join_errors(&errors));
    }
    envelope.data.ok_or(ArgoSyncError::MissingData)
}

/// GraphQL errors carried in the body of a non-success response, if any
fn graphql_errors(body: &str) -> Option<ArgoSyncError> {
    let envelope: graphql_client::Response<Value> = serde_json::from_str(body).ok()?;
    envelope
        .errors
        .filter(|e| !e.is_empty())
        .map(|errors| join_errors(&errors))
}

fn join_errors(errors: &[graphql_client::Error]) -> ArgoSyncError {
    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    ArgoSyncError::Graphql(messages.join("; "))
}
