// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reading the uninstall catalogs kept in the Windows registry.

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::UninstallRegistry;

use crate::config::ScanConfig;
use crate::error::Result;
use crate::models::UninstallEntry;

/// Anything that can list uninstall entries.
pub trait UninstallSource {
    /// Reads every entry. A failure aborts the whole scan.
    fn entries(&self) -> Result<Vec<UninstallEntry>>;
}

/// Opens the registry catalogs selected by `config`.
#[cfg(windows)]
pub fn open_registry(config: &ScanConfig) -> Result<Box<dyn UninstallSource>> {
    Ok(Box::new(UninstallRegistry::from_config(config)))
}

#[cfg(not(windows))]
pub fn open_registry(_config: &ScanConfig) -> Result<Box<dyn UninstallSource>> {
    Err(crate::error::QtScanError::UnsupportedPlatform(
        std::env::consts::OS.to_string(),
    ))
}

/// Fixed list of entries, for callers that already hold the catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryUninstallSource {
    entries: Vec<UninstallEntry>,
}

impl MemoryUninstallSource {
    pub fn new(entries: Vec<UninstallEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: UninstallEntry) {
        self.entries.push(entry);
    }
}

impl UninstallSource for MemoryUninstallSource {
    fn entries(&self) -> Result<Vec<UninstallEntry>> {
        Ok(self.entries.clone())
    }
}
