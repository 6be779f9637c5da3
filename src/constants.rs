// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by the step
pub mod env {
    pub const RUNTIME: &str = "RUNTIME";
    pub const APPLICATION: &str = "APPLICATION";
    pub const SYNC_OPT_PRUNE: &str = "SYNC_OPT_PRUNE";
    pub const SYNC_OPT_FORCE: &str = "SYNC_OPT_FORCE";
    pub const SYNC_OPT_PRUNE_LAST: &str = "SYNC_OPT_PRUNE_LAST";
    pub const SYNC_OPT_APPLY_OUT_OF_SYNC_ONLY: &str = "SYNC_OPT_APPLY_OUT_OF_SYNC_ONLY";
    pub const SYNC_OPT_SERVER_SIDE_APPLY: &str = "SYNC_OPT_SERVER_SIDE_APPLY";
    pub const API_URL: &str = "CF_URL";
    pub const API_KEY: &str = "CF_API_KEY";
    pub const STEP_NAME: &str = "CF_STEP_NAME";
    /// Presence marks execution inside a CI build
    pub const BUILD_ID: &str = "CF_BUILD_ID";
    pub const VOLUME_PATH: &str = "CF_VOLUME_PATH";
    /// Optional directory overriding the embedded query documents
    pub const QUERIES_DIR: &str = "QUERIES_DIR";
}

/// Defaults applied when an optional variable is unset
pub mod defaults {
    pub const API_URL: &str = "https://g.codefresh.io";
    pub const STEP_NAME: &str = "STEP_NAME";
    pub const SYNC_OPT_PRUNE_LAST: &str = "false";
    pub const SYNC_OPT_APPLY_OUT_OF_SYNC_ONLY: &str = "false";
    pub const SYNC_OPT_SERVER_SIDE_APPLY: &str = "true";
    pub const LOG_FILTER: &str = "info";
}

/// GraphQL endpoint paths
pub mod endpoints {
    /// Appended to the API base URL
    pub const CONTROL_PLANE_PATH: &str = "/2.0/api/graphql";
    /// Appended to a runtime's ingress host
    pub const PROXY_PATH: &str = "/app-proxy/api/graphql";
    pub const DASHBOARD_PATH: &str = "/2.0/applications-dashboard";
}

/// Transport retry policy
pub mod retry {
    /// Retries after the first attempt
    pub const MAX_RETRIES: u32 = 3;
    /// Base backoff, doubled after every retry
    pub const BACKOFF_MILLIS: u64 = 100;
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Operation termination policy
pub mod terminate {
    /// Wait after a successful termination before syncing
    pub const PROPAGATION_WAIT_SECS: u64 = 30;
    /// Weak contract: a termination failure whose message contains this text
    /// is a real rejection, anything else means there was nothing to terminate.
    pub const BAD_REQUEST_MARKER: &str = "Reason: Bad Request";
}

/// Output variable export files
pub mod export {
    pub const FILE_NAME: &str = "env_vars_to_export";
    /// Read by the CI platform when the step runs as a plugin
    pub const META_FILE: &str = "/meta/env_vars_to_export";
    pub const OUTPUT_URL_SUFFIX: &str = "_CF_OUTPUT_URL";
}
