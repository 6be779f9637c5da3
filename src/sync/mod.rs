// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The three API calls the step makes: runtime lookup, operation
//! termination and the sync itself.

pub mod execute;
pub mod runtime;
pub mod terminate;

pub use execute::execute_sync;
pub use runtime::resolve_runtime;
pub use terminate::{terminate_current_operation, TerminateOutcome};
