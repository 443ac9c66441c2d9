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

use crate::error::{QtScanError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "qtscan";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_UNINSTALL_SUBKEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Uninstall";
const DEFAULT_DISPLAY_NAME_MARKER: &str = "Qt";
const DEFAULT_VERSION_PREFIX: &str = "5.";

/// Registry hive (and view) holding an uninstall catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistryScope {
    CurrentUser,
    LocalMachine,
    /// 32-bit view of the machine-wide catalog on 64-bit Windows.
    LocalMachineWow64,
}

impl RegistryScope {
    pub fn hive_name(&self) -> &'static str {
        match self {
            RegistryScope::CurrentUser => "HKEY_CURRENT_USER",
            RegistryScope::LocalMachine | RegistryScope::LocalMachineWow64 => "HKEY_LOCAL_MACHINE",
        }
    }

    /// Only the per-user catalog is guaranteed to exist.
    pub fn is_required(&self) -> bool {
        matches!(self, RegistryScope::CurrentUser)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_uninstall_subkey")]
    pub uninstall_subkey: String,

    #[serde(default = "default_display_name_marker")]
    pub display_name_marker: String,

    #[serde(default = "default_version_prefix")]
    pub version_prefix: String,

    #[serde(default = "default_scopes")]
    pub scopes: Vec<RegistryScope>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            uninstall_subkey: default_uninstall_subkey(),
            display_name_marker: default_display_name_marker(),
            version_prefix: default_version_prefix(),
            scopes: default_scopes(),
        }
    }
}

fn default_uninstall_subkey() -> String {
    DEFAULT_UNINSTALL_SUBKEY.to_string()
}

fn default_display_name_marker() -> String {
    DEFAULT_DISPLAY_NAME_MARKER.to_string()
}

fn default_version_prefix() -> String {
    DEFAULT_VERSION_PREFIX.to_string()
}

fn default_scopes() -> Vec<RegistryScope> {
    vec![RegistryScope::CurrentUser]
}

impl ScanConfig {
    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// read when present and defaults are used otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load(&path)?,
                _ => {
                    log::debug!("No config file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            QtScanError::ConfigFile(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&contents).map_err(|e| match e {
            QtScanError::ConfigFile(msg) => {
                QtScanError::ConfigFile(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;

        log::debug!("Loaded config from {path:?}");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| QtScanError::ConfigFile(format!("Failed to parse config: {e}")))
    }

    pub fn validate(&self) -> Result<()> {
        if self.uninstall_subkey.trim().is_empty() {
            return Err(QtScanError::InvalidConfig(
                "uninstall_subkey cannot be empty".to_string(),
            ));
        }
        if self.display_name_marker.is_empty() {
            return Err(QtScanError::InvalidConfig(
                "display_name_marker cannot be empty".to_string(),
            ));
        }
        if self.version_prefix.is_empty() {
            return Err(QtScanError::InvalidConfig(
                "version_prefix cannot be empty".to_string(),
            ));
        }
        if self.scopes.is_empty() {
            return Err(QtScanError::InvalidConfig(
                "scopes must list at least one registry scope".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
