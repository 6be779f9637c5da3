// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{defaults, env as vars, export};
use crate::types::SyncOptions;
use anyhow::{bail, Context, Result};
use std::env;
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// API key passed verbatim in the `authorization` header. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Step configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime hosting the application
    pub runtime: String,
    /// ArgoCD application to sync
    pub application: String,
    pub sync_options: SyncOptions,
    /// Platform API base URL, used for the control plane and the dashboard link
    pub api_url: String,
    pub api_key: ApiKey,
    pub step_name: String,
    /// Set when running inside a CI build
    pub build_id: Option<String>,
    pub volume_path: Option<PathBuf>,
    pub queries_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let runtime = required(&lookup, vars::RUNTIME)?;
        let application = required(&lookup, vars::APPLICATION)?;
        let api_key = ApiKey::new(required(&lookup, vars::API_KEY)?);

        let api_url = lookup(vars::API_URL).unwrap_or_else(|| defaults::API_URL.to_string());
        Url::parse(&api_url).with_context(|| format!("{} is not a valid URL: {}", vars::API_URL, api_url))?;

        let step_name = lookup(vars::STEP_NAME).unwrap_or_else(|| defaults::STEP_NAME.to_string());

        let flag = |key: &str, default: &str| {
            lookup(key)
                .unwrap_or_else(|| default.to_string())
                .to_lowercase()
        };

        let sync_options = SyncOptions {
            prune: flag(vars::SYNC_OPT_PRUNE, "false") == "true",
            force: flag(vars::SYNC_OPT_FORCE, "false") == "true",
            prune_last: flag(vars::SYNC_OPT_PRUNE_LAST, defaults::SYNC_OPT_PRUNE_LAST),
            apply_out_of_sync_only: flag(
                vars::SYNC_OPT_APPLY_OUT_OF_SYNC_ONLY,
                defaults::SYNC_OPT_APPLY_OUT_OF_SYNC_ONLY,
            ),
            server_side_apply: flag(
                vars::SYNC_OPT_SERVER_SIDE_APPLY,
                defaults::SYNC_OPT_SERVER_SIDE_APPLY,
            ),
        };

        Ok(Config {
            runtime,
            application,
            sync_options,
            api_url,
            api_key,
            step_name,
            build_id: lookup(vars::BUILD_ID),
            volume_path: lookup(vars::VOLUME_PATH).map(PathBuf::from),
            queries_dir: lookup(vars::QUERIES_DIR).map(PathBuf::from),
        })
    }

    /// Name of the pipeline variable carrying the dashboard link
    pub fn output_variable(&self) -> String {
        format!("{}{}", self.step_name, export::OUTPUT_URL_SUFFIX)
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).with_context(|| format!("{} environment variable not set", key))?;
    if value.is_empty() {
        bail!("{} environment variable is empty", key);
    }
    Ok(value)
}
