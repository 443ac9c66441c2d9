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

use crate::error::QtScanError;
use std::fmt;
use std::io::ErrorKind;

pub struct ErrorContext<'a> {
    pub error: &'a QtScanError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a QtScanError) -> Self {
        let (suggestion, details) = match error {
            QtScanError::Registry { path, source } => {
                let suggestion = match source.kind() {
                    ErrorKind::NotFound => Some(format!(
                        "Check that the uninstall key exists under the selected hive, or set \
                         'uninstall_subkey' in the configuration file. Key: {path}"
                    )),
                    ErrorKind::PermissionDenied => Some(
                        "Run as Administrator or remove machine-wide scopes from 'scopes' in the \
                         configuration file."
                            .to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("Registry error: {source}"));
                (suggestion, details)
            }
            QtScanError::UnsupportedPlatform(os) => {
                let suggestion = Some(
                    "Qt installations are discovered through the Windows uninstall registry. \
                     Run qtscan on Windows."
                        .to_string(),
                );
                let details = Some(format!("Current platform: {os}"));
                (suggestion, details)
            }
            QtScanError::InvalidVersionFormat(msg) => {
                let suggestion = None;
                let details = Some(format!(
                    "Expected a dotted version such as '5.9.0' or '5.12': {msg}"
                ));
                (suggestion, details)
            }
            QtScanError::ConfigFile(msg) => {
                let suggestion =
                    Some("Check the path passed to --config and the TOML syntax.".to_string());
                let details = Some(msg.clone());
                (suggestion, details)
            }
            QtScanError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Remove the offending key to fall back to its default value.".to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            QtScanError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    ErrorKind::PermissionDenied => {
                        Some("Run as Administrator or check file permissions.".to_string())
                    }
                    ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
            QtScanError::Json(_) => (None, None),
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
