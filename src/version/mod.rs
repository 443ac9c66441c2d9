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

//! Parsing of the dotted versions recorded in uninstall entries.

use crate::error::{QtScanError, Result};
use std::fmt;
use std::str::FromStr;

/// Minor revision from which installers name the version directory after the
/// full version string instead of `major.minor`.
const FULL_VERSION_DIR_MINOR: u32 = 9;

/// First major release whose installers always use the full version string.
const FULL_VERSION_DIR_MAJOR: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkVersion {
    raw: String,
    major: u32,
    minor: u32,
    patch: Option<String>,
    /// Byte offset of the second dot, if any.
    second_dot: Option<usize>,
}

impl SdkVersion {
    pub fn parse(s: &str) -> Result<Self> {
        let first_dot = s
            .find('.')
            .ok_or_else(|| QtScanError::InvalidVersionFormat(s.to_string()))?;
        let second_dot = s[first_dot + 1..].find('.').map(|i| first_dot + 1 + i);

        let major = s[..first_dot]
            .parse::<u32>()
            .map_err(|_| QtScanError::InvalidVersionFormat(s.to_string()))?;

        let minor_str = match second_dot {
            Some(dot) => &s[first_dot + 1..dot],
            None => &s[first_dot + 1..],
        };
        let minor = minor_str
            .parse::<u32>()
            .map_err(|_| QtScanError::InvalidVersionFormat(s.to_string()))?;

        let patch = second_dot.map(|dot| s[dot + 1..].to_string());

        Ok(Self {
            raw: s.to_string(),
            major,
            minor,
            patch,
            second_dot,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> Option<&str> {
        self.patch.as_deref()
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Directory name the installer uses for this version under the install
    /// location.
    ///
    /// From 5.9 on, and for every later major, the full version string is
    /// used. Older releases drop the patch level, so `5.6.3` lives in `5.6`.
    pub fn install_dir_segment(&self) -> &str {
        if self.major >= FULL_VERSION_DIR_MAJOR || self.minor >= FULL_VERSION_DIR_MINOR {
            return &self.raw;
        }
        match self.second_dot {
            Some(dot) => &self.raw[..dot],
            None => &self.raw,
        }
    }
}

impl FromStr for SdkVersion {
    type Err = QtScanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let version = SdkVersion::parse("5.9.0").unwrap();
        assert_eq!(version.major(), 5);
        assert_eq!(version.minor(), 9);
        assert_eq!(version.patch(), Some("0"));
        assert_eq!(version.to_string(), "5.9.0");
    }

    #[test]
    fn test_parse_without_patch() {
        let version = SdkVersion::parse("5.12").unwrap();
        assert_eq!(version.major(), 5);
        assert_eq!(version.minor(), 12);
        assert_eq!(version.patch(), None);
    }

    #[test]
    fn test_parse_keeps_patch_suffix_verbatim() {
        let version: SdkVersion = "5.15.2.1".parse().unwrap();
        assert_eq!(version.minor(), 15);
        assert_eq!(version.patch(), Some("2.1"));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(SdkVersion::parse("").is_err());
        assert!(SdkVersion::parse("5").is_err());
        assert!(SdkVersion::parse("5.").is_err());
        assert!(SdkVersion::parse("5.x.1").is_err());
        assert!(SdkVersion::parse("v5.9.0").is_err());
    }

    #[test]
    fn test_segment_full_version_from_minor_nine() {
        assert_eq!(
            SdkVersion::parse("5.9.0").unwrap().install_dir_segment(),
            "5.9.0"
        );
        assert_eq!(
            SdkVersion::parse("5.15.2").unwrap().install_dir_segment(),
            "5.15.2"
        );
    }

    #[test]
    fn test_segment_truncates_patch_before_minor_nine() {
        assert_eq!(
            SdkVersion::parse("5.6.3").unwrap().install_dir_segment(),
            "5.6"
        );
        assert_eq!(
            SdkVersion::parse("5.8.0").unwrap().install_dir_segment(),
            "5.8"
        );
    }

    #[test]
    fn test_segment_without_second_dot() {
        assert_eq!(
            SdkVersion::parse("5.12").unwrap().install_dir_segment(),
            "5.12"
        );
        assert_eq!(
            SdkVersion::parse("5.6").unwrap().install_dir_segment(),
            "5.6"
        );
    }

    #[test]
    fn test_segment_full_version_for_later_majors() {
        assert_eq!(
            SdkVersion::parse("6.5.0").unwrap().install_dir_segment(),
            "6.5.0"
        );
        assert_eq!(
            SdkVersion::parse("6.2").unwrap().install_dir_segment(),
            "6.2"
        );
    }

    #[test]
    fn test_segment_truncates_earlier_majors() {
        assert_eq!(
            SdkVersion::parse("4.8.7").unwrap().install_dir_segment(),
            "4.8"
        );
    }
}
