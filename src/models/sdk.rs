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

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

const MSVC_PREFIX: &str = "msvc";
const MINGW_PREFIX: &str = "mingw";
const MSVC_64_MARKER: &str = "_64";
const MINGW_32_MARKER: &str = "_32";

/// An uninstall entry recognised as an SDK installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkCandidate {
    pub version: String,
    pub location: PathBuf,
}

/// Pointer width of a compiler variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Bits32,
    Bits64,
    Unknown,
}

impl Width {
    /// Classifies a compiler directory name.
    ///
    /// MSVC builds are 32-bit unless tagged `_64`; MinGW builds are 64-bit
    /// unless tagged `_32`. Anything else (Android, WinRT, ...) is unknown.
    pub fn from_compiler(compiler: &str) -> Self {
        if compiler.starts_with(MSVC_PREFIX) {
            if compiler.contains(MSVC_64_MARKER) {
                Width::Bits64
            } else {
                Width::Bits32
            }
        } else if compiler.starts_with(MINGW_PREFIX) {
            if compiler.contains(MINGW_32_MARKER) {
                Width::Bits32
            } else {
                Width::Bits64
            }
        } else {
            Width::Unknown
        }
    }

    pub fn bits(&self) -> Option<u8> {
        match self {
            Width::Bits32 => Some(32),
            Width::Bits64 => Some(64),
            Width::Unknown => None,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bits() {
            Some(bits) => write!(f, "{bits}"),
            None => f.write_str("unknown"),
        }
    }
}

impl Serialize for Width {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.bits() {
            Some(bits) => serializer.serialize_u8(bits),
            None => serializer.serialize_str("unknown"),
        }
    }
}

/// One compiler variant found under an SDK version root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SdkVariant {
    version: String,
    location: PathBuf,
    compiler: String,
    width: Width,
    root: PathBuf,
}

impl SdkVariant {
    /// `version_root` is the candidate location joined with its version
    /// directory; the variant root is that plus the compiler name.
    pub fn new(candidate: &SdkCandidate, version_root: &Path, compiler: &str) -> Self {
        Self {
            version: candidate.version.clone(),
            location: candidate.location.clone(),
            compiler: compiler.to_string(),
            width: Width::from_compiler(compiler),
            root: version_root.join(compiler),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn width(&self) -> Width {
        self.width
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
