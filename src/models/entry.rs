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

pub const DISPLAY_NAME: &str = "DisplayName";
pub const INSTALL_LOCATION: &str = "InstallLocation";
pub const DISPLAY_VERSION: &str = "DisplayVersion";

/// Values read from one subkey of an uninstall catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallEntry {
    pub key_name: String,
    pub display_name: Option<String>,
    pub install_location: Option<String>,
    pub display_version: Option<String>,
}

impl UninstallEntry {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            key_name: key_name.into(),
            ..Self::default()
        }
    }

    /// Builds an entry from the `(name, data)` pairs enumerated under a key.
    /// Names other than the three the matcher needs are ignored.
    pub fn from_values<I, N, V>(key_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut entry = Self::new(key_name);
        for (name, data) in values {
            entry.set_value(name.as_ref(), data.into());
        }
        entry
    }

    pub fn set_value(&mut self, name: &str, data: String) {
        match name {
            DISPLAY_NAME => self.display_name = Some(data),
            INSTALL_LOCATION => self.install_location = Some(data),
            DISPLAY_VERSION => self.display_version = Some(data),
            _ => {}
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_install_location(mut self, location: impl Into<String>) -> Self {
        self.install_location = Some(location.into());
        self
    }

    pub fn with_display_version(mut self, version: impl Into<String>) -> Self {
        self.display_version = Some(version.into());
        self
    }
}
