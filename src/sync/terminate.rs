// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Best-effort termination of an application's in-flight operation.
//!
//! The proxy does not report "no operation in progress" with a distinct
//! status, so failures are told apart by their message: only a failure
//! mentioning [`BAD_REQUEST_MARKER`] is treated as a real rejection. Every
//! other failure is read as "nothing to terminate". This is a weak contract
//! and is kept in [`is_rejection`] alone.

use crate::constants::terminate::BAD_REQUEST_MARKER;
use crate::error::{ArgoSyncError, Result};
use crate::graphql::{GraphqlTransport, Operation, QuerySet};
use crate::types::RuntimeDescriptor;
use serde_json::json;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminateOutcome {
    /// An operation was terminated and the propagation wait has elapsed
    Terminated,
    /// The call failed in a way read as "no operation in progress"
    NothingToTerminate,
}

/// Whether a termination failure is a real rejection rather than
/// "nothing to terminate"
pub fn is_rejection(err: &ArgoSyncError) -> bool {
    err.to_string().contains(BAD_REQUEST_MARKER)
}

/// Terminate the application's current operation so the sync can proceed.
/// Waits `propagation_wait` after a successful termination.
#[instrument(skip(transport, queries, runtime, propagation_wait), fields(ingress_host = %runtime.ingress_host))]
pub async fn terminate_current_operation<T>(
    transport: &T,
    queries: &QuerySet,
    runtime: &RuntimeDescriptor,
    application: &str,
    propagation_wait: Duration,
) -> Result<TerminateOutcome>
where
    T: GraphqlTransport + ?Sized,
{
    let variables = json!({ "appName": application });
    info!("Terminating current operation in app: {}", variables);

    let request = queries.request(Operation::Terminate, variables);
    match transport.execute(&runtime.proxy_endpoint(), &request).await {
        Ok(result) => {
            info!("Terminate result: {}", result);
            info!(
                "Waiting {:?} for the current operation of {} to be terminated",
                propagation_wait, application
            );
            sleep(propagation_wait).await;
            Ok(TerminateOutcome::Terminated)
        }
        Err(e) if is_rejection(&e) => {
            error!("Error: {}", e);
            Err(ArgoSyncError::TerminateRejected(e.to_string()))
        }
        Err(e) => {
            warn!(
                "App {} has no current operation ({}), no need to terminate. Continuing...",
                application, e
            );
            Ok(TerminateOutcome::NothingToTerminate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::terminate::PROPAGATION_WAIT_SECS;
    use crate::test_utils::ScriptedTransport;
    use tokio::time::Instant;

    fn runtime() -> RuntimeDescriptor {
        RuntimeDescriptor {
            ingress_host: "https://rt.example.com".to_string(),
            namespace: "argocd-rt".to_string(),
        }
    }

    fn wait() -> Duration {
        Duration::from_secs(PROPAGATION_WAIT_SECS)
    }

    #[test]
    fn test_is_rejection_matches_marker_anywhere() {
        assert!(is_rejection(&ArgoSyncError::Graphql(
            "failed to terminate. Reason: Bad Request".to_string()
        )));
        assert!(is_rejection(&ArgoSyncError::HttpStatus {
            status: 400,
            body: "Reason: Bad Request".to_string()
        }));
    }

    #[test]
    fn test_is_rejection_ignores_other_errors() {
        assert!(!is_rejection(&ArgoSyncError::Graphql(
            "no operation is in progress".to_string()
        )));
        assert!(!is_rejection(&ArgoSyncError::Graphql("Bad Request".to_string())));
        assert!(!is_rejection(&ArgoSyncError::MissingData));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_waits_before_returning() {
        let transport = ScriptedTransport::new().on_ok(Operation::Terminate, json!({ "terminate": true }));
        let start = Instant::now();

        let outcome = terminate_current_operation(&transport, &QuerySet::embedded(), &runtime(), "guestbook", wait())
            .await
            .unwrap();

        assert_eq!(outcome, TerminateOutcome::Terminated);
        assert_eq!(start.elapsed(), Duration::from_secs(30));
        let calls = transport.calls();
        assert_eq!(calls[0].endpoint, "https://rt.example.com/app-proxy/api/graphql");
        assert_eq!(calls[0].variables, json!({ "appName": "guestbook" }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_failure_means_nothing_to_terminate() {
        let transport = ScriptedTransport::new().on_error(Operation::Terminate, "application has no operation");
        let start = Instant::now();

        let outcome = terminate_current_operation(&transport, &QuerySet::embedded(), &runtime(), "guestbook", wait())
            .await
            .unwrap();

        assert_eq!(outcome, TerminateOutcome::NothingToTerminate);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bad_request_is_fatal() {
        let transport = ScriptedTransport::new().on_error(Operation::Terminate, "terminate failed. Reason: Bad Request");

        let err = terminate_current_operation(&transport, &QuerySet::embedded(), &runtime(), "guestbook", wait())
            .await
            .unwrap_err();

        match err {
            ArgoSyncError::TerminateRejected(message) => {
                assert!(message.contains("Reason: Bad Request"))
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
