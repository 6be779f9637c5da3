// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use argocd_sync::config::Config;
use argocd_sync::constants::defaults::LOG_FILTER;
use argocd_sync::graphql::{GraphqlClient, QuerySet};
use argocd_sync::step::SyncStep;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ArgoCD sync step");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: runtime={}, application={}, api_url={}",
        config.runtime, config.application, config.api_url
    );

    let queries = QuerySet::load(config.queries_dir.as_deref())?;
    let client = GraphqlClient::new(config.api_key.clone())?;

    let report = SyncStep::new(config, client, queries).run().await?;
    info!(
        "Sync step finished: terminate={:?}, {}={}",
        report.terminate, report.output_variable, report.dashboard_link
    );

    Ok(())
}
