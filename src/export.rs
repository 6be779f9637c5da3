// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Export of pipeline output variables.
//!
//! Inside a CI build, every exported variable is appended as a `KEY=VALUE`
//! line to the per-build volume file (freestyle step) and to the plugin
//! metadata file. Values are written as-is: `=` or newlines in a value
//! corrupt the file format.

use crate::config::Config;
use crate::constants::export::{FILE_NAME, META_FILE};
use crate::error::{ArgoSyncError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct OutputExporter {
    build_id: Option<String>,
    volume_path: Option<PathBuf>,
    meta_path: PathBuf,
}

impl OutputExporter {
    pub fn new(build_id: Option<String>, volume_path: Option<PathBuf>) -> Self {
        Self {
            build_id,
            volume_path,
            meta_path: PathBuf::from(META_FILE),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.build_id.clone(), config.volume_path.clone())
    }

    /// Redirect the plugin metadata file
    pub fn with_meta_path(mut self, meta_path: impl Into<PathBuf>) -> Self {
        self.meta_path = meta_path.into();
        self
    }

    /// Whether the step runs inside a CI build
    pub fn in_build(&self) -> bool {
        self.build_id.is_some()
    }

    #[instrument(skip(self, value))]
    pub fn export_variable(&self, name: &str, value: &str) -> Result<()> {
        if self.in_build() {
            if value.contains('\n') {
                warn!("Value of {} contains a newline, the exported file will be malformed", name);
            }
            let line = format!("{}={}\n", name, value);

            match &self.volume_path {
                Some(volume) => append_line(&volume.join(FILE_NAME), &line)?,
                None => warn!("CF_VOLUME_PATH not set, skipping freestyle export of {}", name),
            }
            append_line(&self.meta_path, &line)?;
        }

        info!("Exporting variable: {}={}", name, value);
        Ok(())
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let export_error = |source| ArgoSyncError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(export_error)?;
    file.write_all(line.as_bytes()).map_err(export_error)
}
