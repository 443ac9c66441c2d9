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

use crate::config::{RegistryScope, ScanConfig};
use crate::error::{QtScanError, Result};
use crate::models::UninstallEntry;
use crate::registry::UninstallSource;
use std::io;
use winreg::RegKey;
use winreg::enums::{
    HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_32KEY, KEY_WOW64_64KEY,
};
use winreg::types::FromRegValue;

/// Uninstall catalogs under one subkey path, read from each configured scope.
pub struct UninstallRegistry {
    subkey: String,
    scopes: Vec<RegistryScope>,
}

impl UninstallRegistry {
    pub fn new(subkey: impl Into<String>, scopes: Vec<RegistryScope>) -> Self {
        Self {
            subkey: subkey.into(),
            scopes,
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.uninstall_subkey.clone(), config.scopes.clone())
    }

    fn scan_scope(&self, scope: RegistryScope) -> Result<Vec<UninstallEntry>> {
        let (hive, flags) = match scope {
            RegistryScope::CurrentUser => (HKEY_CURRENT_USER, KEY_READ),
            RegistryScope::LocalMachine => (HKEY_LOCAL_MACHINE, KEY_READ | KEY_WOW64_64KEY),
            RegistryScope::LocalMachineWow64 => (HKEY_LOCAL_MACHINE, KEY_READ | KEY_WOW64_32KEY),
        };
        let catalog_path = format!("{}\\{}", scope.hive_name(), self.subkey);

        let root = RegKey::predef(hive);
        let catalog = match root.open_subkey_with_flags(&self.subkey, flags) {
            Ok(key) => key,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !scope.is_required() => {
                log::debug!("Skipping absent catalog {catalog_path}");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(QtScanError::Registry {
                    path: catalog_path,
                    source,
                });
            }
        };

        let mut entries = Vec::new();
        for key_name in catalog.enum_keys() {
            let key_name = key_name.map_err(|source| QtScanError::Registry {
                path: catalog_path.clone(),
                source,
            })?;
            let key_path = format!("{catalog_path}\\{key_name}");
            let key = catalog
                .open_subkey_with_flags(&key_name, flags)
                .map_err(|source| QtScanError::Registry {
                    path: key_path.clone(),
                    source,
                })?;

            entries.push(read_entry(&key, &key_name, &key_path)?);
        }

        log::debug!("Read {} entries from {catalog_path}", entries.len());
        Ok(entries)
    }
}

fn read_entry(key: &RegKey, key_name: &str, key_path: &str) -> Result<UninstallEntry> {
    let mut values = Vec::new();

    for value in key.enum_values() {
        let (name, data) = value.map_err(|source| QtScanError::Registry {
            path: key_path.to_string(),
            source,
        })?;

        match String::from_reg_value(&data) {
            Ok(text) => values.push((name, text)),
            Err(_) => log::trace!("Ignoring non-string value '{name}' in {key_path}"),
        }
    }

    Ok(UninstallEntry::from_values(key_name, values))
}

impl UninstallSource for UninstallRegistry {
    fn entries(&self) -> Result<Vec<UninstallEntry>> {
        let mut entries = Vec::new();
        for scope in &self.scopes {
            entries.extend(self.scan_scope(*scope)?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_current_user_catalog_is_fatal() {
        let registry = UninstallRegistry::new(
            r"Software\qtscan-test\DoesNotExist",
            vec![RegistryScope::CurrentUser],
        );
        match registry.entries() {
            Err(QtScanError::Registry { path, source }) => {
                assert!(path.starts_with("HKEY_CURRENT_USER"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected Registry error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_machine_catalog_is_skipped() {
        let registry = UninstallRegistry::new(
            r"Software\qtscan-test\DoesNotExist",
            vec![
                RegistryScope::LocalMachine,
                RegistryScope::LocalMachineWow64,
            ],
        );
        assert!(registry.entries().unwrap().is_empty());
    }
}
