// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use serde::Serialize;

/// Sync flags taken from configuration and passed through unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    pub prune: bool,
    pub force: bool,
    pub prune_last: String,
    pub apply_out_of_sync_only: String,
    pub server_side_apply: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            prune: false,
            force: false,
            prune_last: defaults::SYNC_OPT_PRUNE_LAST.to_string(),
            apply_out_of_sync_only: defaults::SYNC_OPT_APPLY_OUT_OF_SYNC_ONLY.to_string(),
            server_side_apply: defaults::SYNC_OPT_SERVER_SIDE_APPLY.to_string(),
        }
    }
}

impl SyncOptions {
    /// Build the `options` input of the sync mutation. Never a dry run, always
    /// foreground prune propagation.
    pub fn to_input(&self, application: &str) -> SyncInput {
        SyncInput {
            name: application.to_string(),
            dry_run: false,
            prune: self.prune,
            strategy: SyncStrategy {
                hook: HookStrategy { force: self.force },
            },
            sync_options: SyncOptionItems {
                items: vec![
                    format!("PruneLast={}", self.prune_last),
                    format!("ApplyOutOfSyncOnly={}", self.apply_out_of_sync_only),
                    format!("ServerSideApply={}", self.server_side_apply),
                    "PrunePropagationPolicy=foreground".to_string(),
                ],
            },
            resources: None,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncInput {
    pub name: String,
    pub dry_run: bool,
    pub prune: bool,
    pub strategy: SyncStrategy,
    pub sync_options: SyncOptionItems,
    /// Always null: the whole application is synced
    pub resources: Option<Vec<serde_json::Value>>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SyncStrategy {
    pub hook: HookStrategy,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HookStrategy {
    pub force: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SyncOptionItems {
    pub items: Vec<String>,
}
