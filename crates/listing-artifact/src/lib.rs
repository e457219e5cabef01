//! Artifact storage for pipeline inputs and outputs.
//!
//! The cleaning step only needs two capabilities from an artifact store:
//! resolve a named reference to a readable local file ([`ArtifactStore::fetch`])
//! and durably register a produced file ([`ArtifactStore::publish`]).
//! [`LocalArtifactStore`] implements both on a plain directory tree:
//!
//! ```text
//! <root>/<name>/v<N>/<file>
//! <root>/<name>/v<N>/manifest.json
//! ```

mod checksum;
mod error;
mod local;
mod reference;

pub use checksum::{compute_file_sha256, verify_sha256};
pub use error::{ArtifactError, Result};
pub use local::LocalArtifactStore;
pub use reference::{ArtifactRef, VersionSpec};

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Descriptive fields attached to a published artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub description: String,
}

/// Durable record of one published artifact version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    #[serde(flatten)]
    pub metadata: ArtifactMetadata,
    pub version: u32,
    pub file_name: String,
    pub sha256: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
}

impl ArtifactManifest {
    /// Reference that resolves to exactly this version.
    pub fn reference(&self) -> ArtifactRef {
        ArtifactRef::exact(&self.metadata.name, self.version)
    }
}

/// Where pipeline steps read inputs from and publish outputs to.
pub trait ArtifactStore {
    /// Resolve `reference` to a local file path, verifying its integrity.
    ///
    /// # Errors
    ///
    /// Fails if the artifact does not exist or its content does not match
    /// the recorded checksum.
    fn fetch(&self, reference: &ArtifactRef) -> Result<PathBuf>;

    /// Register `path` as the next version of `metadata.name`.
    ///
    /// Returns only after the file and its manifest are durable.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or the store cannot be written.
    fn publish(&self, path: &Path, metadata: &ArtifactMetadata) -> Result<ArtifactManifest>;
}
