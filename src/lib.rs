// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod graphql;
pub mod step;
pub mod sync;
pub mod types;

#[cfg(test)]
mod test_utils;
