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

use crate::config::ScanConfig;
use crate::error::Result;
use crate::matcher::SdkMatcher;
use crate::models::SdkVariant;
use crate::registry::{self, UninstallSource};
use crate::report::{ReportFormat, Reporter};
use crate::resolver::{InstallTree, VariantResolver};
use log::{debug, info};
use std::io::Write;

/// Scans the uninstall catalog and reports every Qt compiler variant found.
pub struct ListCommand<'a> {
    config: &'a ScanConfig,
}

impl<'a> ListCommand<'a> {
    pub fn new(config: &'a ScanConfig) -> Result<Self> {
        Ok(Self { config })
    }

    pub fn execute(&self, format: ReportFormat) -> Result<()> {
        let source = registry::open_registry(self.config)?;
        let variants = self.discover(source.as_ref(), &VariantResolver::new())?;

        Reporter::new(format).print(&variants)
    }

    /// Runs the pipeline against `source` and writes the report to `writer`.
    pub fn execute_with<T, W>(
        &self,
        source: &dyn UninstallSource,
        resolver: &VariantResolver<T>,
        format: ReportFormat,
        writer: &mut W,
    ) -> Result<()>
    where
        T: InstallTree,
        W: Write,
    {
        let variants = self.discover(source, resolver)?;
        Reporter::new(format).write(writer, &variants)
    }

    pub fn discover<T: InstallTree>(
        &self,
        source: &dyn UninstallSource,
        resolver: &VariantResolver<T>,
    ) -> Result<Vec<SdkVariant>> {
        let entries = source.entries()?;
        debug!("Scanned {} uninstall entries", entries.len());

        let matcher = SdkMatcher::from_config(self.config);
        let candidates: Vec<_> = matcher.match_all(&entries).collect();
        info!(
            "Found {} registered Qt installation{}",
            candidates.len(),
            if candidates.len() == 1 { "" } else { "s" }
        );

        let variants = resolver.resolve_all(&candidates);
        info!("Resolved {} compiler variants", variants.len());

        Ok(variants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QtScanError;
    use crate::models::UninstallEntry;
    use crate::registry::MemoryUninstallSource;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    struct BrokenSource;

    impl UninstallSource for BrokenSource {
        fn entries(&self) -> Result<Vec<UninstallEntry>> {
            Err(QtScanError::Registry {
                path: r"HKEY_CURRENT_USER\Software\Broken".to_string(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            })
        }
    }

    fn qt_entry(version: &str, location: &std::path::Path) -> UninstallEntry {
        UninstallEntry::new(format!("Qt {version}"))
            .with_display_name(format!("Qt {version}"))
            .with_install_location(location.to_string_lossy())
            .with_display_version(version)
    }

    #[test]
    fn test_list_no_matches_prints_header() {
        let config = ScanConfig::default();
        let command = ListCommand::new(&config).unwrap();
        let source = MemoryUninstallSource::new(vec![
            UninstallEntry::new("git").with_display_name("Git"),
        ]);

        let mut output = Vec::new();
        command
            .execute_with(
                &source,
                &VariantResolver::new(),
                ReportFormat::Plain,
                &mut output,
            )
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with(" # Version"));
    }

    #[test]
    fn test_discover_skips_missing_installations() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("present");
        let absent = temp_dir.path().join("absent");
        fs::create_dir_all(present.join("5.12.1").join("msvc2017_64")).unwrap();

        let source = MemoryUninstallSource::new(vec![
            qt_entry("5.9.0", &absent),
            qt_entry("5.12.1", &present),
        ]);

        let config = ScanConfig::default();
        let command = ListCommand::new(&config).unwrap();
        let variants = command.discover(&source, &VariantResolver::new()).unwrap();

        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].version(), "5.12.1");
        assert_eq!(variants[0].compiler(), "msvc2017_64");
    }

    #[test]
    fn test_registry_failure_aborts() {
        let config = ScanConfig::default();
        let command = ListCommand::new(&config).unwrap();

        let mut output = Vec::new();
        let result = command.execute_with(
            &BrokenSource,
            &VariantResolver::new(),
            ReportFormat::Plain,
            &mut output,
        );

        assert!(matches!(result, Err(QtScanError::Registry { .. })));
        assert!(output.is_empty());
    }

    #[test]
    #[cfg(not(windows))]
    fn test_execute_unsupported_platform() {
        let config = ScanConfig::default();
        let command = ListCommand::new(&config).unwrap();

        let result = command.execute(ReportFormat::Plain);
        assert!(matches!(result, Err(QtScanError::UnsupportedPlatform(_))));
    }
}
