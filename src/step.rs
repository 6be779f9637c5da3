// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The pipeline step: resolve the runtime, terminate the running
//! operation, sync, then export the dashboard link.

use crate::config::Config;
use crate::constants::terminate::PROPAGATION_WAIT_SECS;
use crate::error::Result;
use crate::export::OutputExporter;
use crate::graphql::{GraphqlTransport, QuerySet};
use crate::sync::{execute_sync, resolve_runtime, terminate_current_operation, TerminateOutcome};
use crate::types::RuntimeDescriptor;
use std::time::Duration;
use tracing::{info, instrument};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub runtime: RuntimeDescriptor,
    pub terminate: TerminateOutcome,
    pub output_variable: String,
    pub dashboard_link: String,
}

pub struct SyncStep<T> {
    config: Config,
    transport: T,
    queries: QuerySet,
    exporter: OutputExporter,
}

impl<T: GraphqlTransport> SyncStep<T> {
    pub fn new(config: Config, transport: T, queries: QuerySet) -> Self {
        let exporter = OutputExporter::from_config(&config);
        Self {
            config,
            transport,
            queries,
            exporter,
        }
    }

    pub fn with_exporter(mut self, exporter: OutputExporter) -> Self {
        self.exporter = exporter;
        self
    }

    #[instrument(skip(self), fields(runtime = %self.config.runtime, application = %self.config.application))]
    pub async fn run(&self) -> Result<StepReport> {
        let config = &self.config;

        let runtime = resolve_runtime(&self.transport, &self.queries, &config.api_url, &config.runtime).await?;

        let terminate = terminate_current_operation(
            &self.transport,
            &self.queries,
            &runtime,
            &config.application,
            Duration::from_secs(PROPAGATION_WAIT_SECS),
        )
        .await?;

        execute_sync(
            &self.transport,
            &self.queries,
            &runtime,
            &config.application,
            &config.sync_options,
        )
        .await?;

        let output_variable = config.output_variable();
        let dashboard_link = runtime.dashboard_link(&config.api_url, &config.runtime, &config.application);
        self.exporter.export_variable(&output_variable, &dashboard_link)?;

        info!("Sync of {} requested", config.application);

        Ok(StepReport {
            runtime,
            terminate,
            output_variable,
            dashboard_link,
        })
    }
}
