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

use crate::error::format::format_error_with_color;
use crate::error::*;
use std::io;

fn registry_error(kind: io::ErrorKind) -> QtScanError {
    QtScanError::Registry {
        path: r"HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Uninstall".to_string(),
        source: io::Error::from(kind),
    }
}

#[test]
fn test_error_context_registry_not_found() {
    let error = registry_error(io::ErrorKind::NotFound);
    let context = ErrorContext::new(&error);

    let suggestion = context.suggestion.unwrap();
    assert!(suggestion.contains("uninstall_subkey"));
    assert!(suggestion.contains("CurrentVersion"));
    assert!(context.details.is_some());
}

#[test]
fn test_error_context_registry_permission_denied() {
    let error = registry_error(io::ErrorKind::PermissionDenied);
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("Administrator"));
}

#[test]
fn test_error_context_unsupported_platform() {
    let error = QtScanError::UnsupportedPlatform("linux".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("Windows"));
    assert!(context.details.unwrap().contains("linux"));
}

#[test]
fn test_error_context_with_custom_suggestion() {
    let error = QtScanError::InvalidConfig("scopes is empty".to_string());
    let context =
        ErrorContext::new(&error).with_suggestion("Add \"current_user\" to scopes.".to_string());

    assert_eq!(
        context.suggestion,
        Some("Add \"current_user\" to scopes.".to_string())
    );
}

#[test]
fn test_error_context_display() {
    let error = QtScanError::ConfigFile("missing file".to_string());
    let context = ErrorContext::new(&error);
    let output = context.to_string();

    assert!(output.contains("Error:"));
    assert!(output.contains("Details:"));
    assert!(output.contains("Suggestion:"));
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        get_exit_code(&QtScanError::InvalidConfig("test".to_string())),
        2
    );
    assert_eq!(get_exit_code(&QtScanError::ConfigFile("test".to_string())), 2);
    assert_eq!(get_exit_code(&registry_error(io::ErrorKind::NotFound)), 3);
    assert_eq!(
        get_exit_code(&registry_error(io::ErrorKind::PermissionDenied)),
        13
    );
    assert_eq!(get_exit_code(&registry_error(io::ErrorKind::Other)), 1);
    assert_eq!(
        get_exit_code(&QtScanError::UnsupportedPlatform("linux".to_string())),
        4
    );
    assert_eq!(
        get_exit_code(&QtScanError::InvalidVersionFormat("x".to_string())),
        1
    );
}

#[test]
fn test_format_error_without_color_matches_chain() {
    let error = QtScanError::UnsupportedPlatform("macos".to_string());
    assert_eq!(
        format_error_with_color(&error, false),
        format_error_chain(&error)
    );
}

#[test]
fn test_format_error_with_color_lists_suggestions() {
    let error = registry_error(io::ErrorKind::PermissionDenied);
    let output = format_error_with_color(&error, true);

    assert!(output.contains("Suggestions:"));
    assert!(output.contains("• Run as Administrator"));
}
