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
use crate::models::{SdkCandidate, SdkVariant};
use crate::version::SdkVersion;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory listing used to find compiler variants.
pub trait InstallTree {
    /// Names of the immediate subdirectories of `root`, in listing order.
    fn subdirectories(&self, root: &Path) -> io::Result<Vec<String>>;
}

/// Lists the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsInstallTree;

impl InstallTree for FsInstallTree {
    fn subdirectories(&self, root: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }

            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::warn!(
                    "Skipping non UTF-8 directory {raw:?} in {}",
                    root.display()
                ),
            }
        }

        Ok(names)
    }
}

/// Outcome of looking for one candidate on disk.
#[derive(Debug)]
pub enum Resolution {
    Found(Vec<SdkVariant>),
    /// The version directory exists but holds no subdirectories.
    Empty { root: PathBuf },
    /// The version directory does not exist, usually after an incomplete uninstall.
    Missing { root: PathBuf },
    Unreadable { root: PathBuf, error: io::Error },
    InvalidVersion { version: String, error: QtScanError },
}

impl Resolution {
    pub fn exists(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn variants(&self) -> &[SdkVariant] {
        match self {
            Resolution::Found(variants) => variants,
            _ => &[],
        }
    }

    pub fn into_variants(self) -> Vec<SdkVariant> {
        match self {
            Resolution::Found(variants) => variants,
            _ => Vec::new(),
        }
    }
}

/// Directory holding the compiler variants of `candidate`.
pub fn version_root(candidate: &SdkCandidate) -> Result<PathBuf> {
    let version = SdkVersion::parse(&candidate.version)?;
    Ok(candidate.location.join(version.install_dir_segment()))
}

pub struct VariantResolver<T: InstallTree = FsInstallTree> {
    tree: T,
}

impl VariantResolver<FsInstallTree> {
    pub fn new() -> Self {
        Self {
            tree: FsInstallTree,
        }
    }
}

impl Default for VariantResolver<FsInstallTree> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InstallTree> VariantResolver<T> {
    pub fn with_tree(tree: T) -> Self {
        Self { tree }
    }

    pub fn resolve(&self, candidate: &SdkCandidate) -> Resolution {
        let root = match version_root(candidate) {
            Ok(root) => root,
            Err(error) => {
                return Resolution::InvalidVersion {
                    version: candidate.version.clone(),
                    error,
                };
            }
        };

        let compilers = match self.tree.subdirectories(&root) {
            Ok(compilers) => compilers,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Resolution::Missing { root },
            Err(error) => return Resolution::Unreadable { root, error },
        };

        if compilers.is_empty() {
            return Resolution::Empty { root };
        }

        log::debug!(
            "Found {} variants under {}",
            compilers.len(),
            root.display()
        );
        Resolution::Found(
            compilers
                .iter()
                .map(|compiler| SdkVariant::new(candidate, &root, compiler))
                .collect(),
        )
    }

    /// Resolves every candidate and flattens the variants, keeping candidate
    /// order. Candidates that cannot be resolved are logged and skipped.
    pub fn resolve_all<'a, I>(&self, candidates: I) -> Vec<SdkVariant>
    where
        I: IntoIterator<Item = &'a SdkCandidate>,
    {
        let mut variants = Vec::new();

        for candidate in candidates {
            let resolution = self.resolve(candidate);
            report_absence(candidate, &resolution);
            variants.extend(resolution.into_variants());
        }

        variants
    }
}

fn report_absence(candidate: &SdkCandidate, resolution: &Resolution) {
    match resolution {
        Resolution::Found(_) => {}
        Resolution::Empty { root } => log::warn!(
            "Qt {} is registered but {} has no compiler directories",
            candidate.version,
            root.display()
        ),
        Resolution::Missing { root } => log::warn!(
            "Qt {} is registered but {} does not exist",
            candidate.version,
            root.display()
        ),
        Resolution::Unreadable { root, error } => log::warn!(
            "Qt {}: cannot list {}: {error}",
            candidate.version,
            root.display()
        ),
        Resolution::InvalidVersion { version, error } => log::warn!(
            "Skipping {}: cannot parse version '{version}': {error}",
            candidate.location.display()
        ),
    }
}
