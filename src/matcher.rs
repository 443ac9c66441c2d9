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
use crate::models::{SdkCandidate, UninstallEntry};
use std::path::PathBuf;

/// Picks SDK installations out of uninstall entries.
pub struct SdkMatcher {
    display_name_marker: String,
    version_prefix: String,
}

impl SdkMatcher {
    pub fn new(display_name_marker: impl Into<String>, version_prefix: impl Into<String>) -> Self {
        Self {
            display_name_marker: display_name_marker.into(),
            version_prefix: version_prefix.into(),
        }
    }

    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(
            config.display_name_marker.clone(),
            config.version_prefix.clone(),
        )
    }

    /// Returns a candidate when the entry names the SDK, records where it was
    /// installed, and carries a supported version. Most entries belong to
    /// unrelated software and yield `None`.
    pub fn match_entry(&self, entry: &UninstallEntry) -> Option<SdkCandidate> {
        let (Some(name), Some(location), Some(version)) = (
            entry.display_name.as_deref(),
            entry.install_location.as_deref(),
            entry.display_version.as_deref(),
        ) else {
            log::trace!("{}: missing name, location or version", entry.key_name);
            return None;
        };

        if !name.contains(&self.display_name_marker) {
            return None;
        }

        if location.trim().is_empty() {
            log::trace!(
                "{}: '{name}' has an empty install location",
                entry.key_name
            );
            return None;
        }

        if version.len() <= self.version_prefix.len()
            || !version.starts_with(&self.version_prefix)
        {
            log::trace!(
                "{}: '{name}' has unsupported version '{version}'",
                entry.key_name
            );
            return None;
        }

        log::debug!("Matched '{name}' {version} at {location}");
        Some(SdkCandidate {
            version: version.to_string(),
            location: PathBuf::from(location),
        })
    }

    pub fn match_all<'a, I>(&'a self, entries: I) -> impl Iterator<Item = SdkCandidate> + 'a
    where
        I: IntoIterator<Item = &'a UninstallEntry>,
        I::IntoIter: 'a,
    {
        entries
            .into_iter()
            .filter_map(move |entry| self.match_entry(entry))
    }
}

impl Default for SdkMatcher {
    fn default() -> Self {
        Self::from_config(&ScanConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qt_entry(version: &str) -> UninstallEntry {
        UninstallEntry::new("{qt}")
            .with_display_name(format!("Qt {version}"))
            .with_install_location(r"C:\Qt")
            .with_display_version(version)
    }

    #[test]
    fn test_match_entry() {
        let candidate = SdkMatcher::default()
            .match_entry(&qt_entry("5.9.0"))
            .unwrap();
        assert_eq!(candidate.version, "5.9.0");
        assert_eq!(candidate.location, PathBuf::from(r"C:\Qt"));
    }

    #[test]
    fn test_missing_fields_never_match() {
        let matcher = SdkMatcher::default();

        let mut entry = qt_entry("5.9.0");
        entry.display_name = None;
        assert!(matcher.match_entry(&entry).is_none());

        let mut entry = qt_entry("5.9.0");
        entry.install_location = None;
        assert!(matcher.match_entry(&entry).is_none());

        let mut entry = qt_entry("5.9.0");
        entry.display_version = None;
        assert!(matcher.match_entry(&entry).is_none());

        assert!(matcher.match_entry(&UninstallEntry::new("empty")).is_none());
    }

    #[test]
    fn test_empty_location_never_matches() {
        let matcher = SdkMatcher::default();
        let entry = qt_entry("5.9.0").with_install_location("");
        assert!(matcher.match_entry(&entry).is_none());

        let entry = qt_entry("5.9.0").with_install_location("  ");
        assert!(matcher.match_entry(&entry).is_none());
    }

    #[test]
    fn test_other_majors_never_match() {
        let matcher = SdkMatcher::default();
        for version in ["6.5.0", "4.8.7", "15.0", "v5.9.0", "50.1"] {
            assert!(
                matcher.match_entry(&qt_entry(version)).is_none(),
                "{version} should not match"
            );
        }
    }

    #[test]
    fn test_version_needs_more_than_prefix() {
        let matcher = SdkMatcher::default();
        assert!(matcher.match_entry(&qt_entry("5.")).is_none());
        assert!(matcher.match_entry(&qt_entry("5")).is_none());
        assert!(matcher.match_entry(&qt_entry("5.1")).is_some());
    }

    #[test]
    fn test_display_name_must_contain_marker() {
        let entry = UninstallEntry::new("{7zip}")
            .with_display_name("7-Zip 5.09")
            .with_install_location(r"C:\Program Files\7-Zip")
            .with_display_version("5.09");
        assert!(SdkMatcher::default().match_entry(&entry).is_none());

        // Marker matching is case-sensitive.
        let entry = qt_entry("5.9.0").with_display_name("QT Creator");
        assert!(SdkMatcher::default().match_entry(&entry).is_none());
    }

    #[test]
    fn test_custom_marker_and_prefix() {
        let matcher = SdkMatcher::new("Qt", "6.");
        assert!(matcher.match_entry(&qt_entry("6.5.0")).is_some());
        assert!(matcher.match_entry(&qt_entry("5.9.0")).is_none());
    }

    #[test]
    fn test_match_all_keeps_order() {
        let entries = vec![
            qt_entry("5.6.3"),
            UninstallEntry::new("{other}").with_display_name("Git"),
            qt_entry("5.12.1"),
        ];
        let matcher = SdkMatcher::default();
        let versions: Vec<String> = matcher.match_all(&entries).map(|c| c.version).collect();
        assert_eq!(versions, vec!["5.6.3", "5.12.1"]);
    }
}
