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
use std::io::ErrorKind;

pub fn get_exit_code(error: &QtScanError) -> i32 {
    match error {
        QtScanError::ConfigFile(_) | QtScanError::InvalidConfig(_) => 2,

        QtScanError::Registry { source, .. } => match source.kind() {
            ErrorKind::NotFound => 3,
            ErrorKind::PermissionDenied => 13,
            _ => 1,
        },

        QtScanError::UnsupportedPlatform(_) => 4,

        _ => 1,
    }
}
