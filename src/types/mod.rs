// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Values exchanged with the ArgoCD GraphQL API.

pub mod runtime;
pub mod sync_options;

pub use runtime::RuntimeDescriptor;
pub use sync_options::SyncOptions;
