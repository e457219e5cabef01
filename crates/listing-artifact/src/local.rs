//! Artifact store backed by a local directory.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::checksum::{compute_file_sha256, verify_sha256};
use crate::error::{ArtifactError, Result};
use crate::reference::{ArtifactRef, VersionSpec, validate_name};
use crate::{ArtifactManifest, ArtifactMetadata, ArtifactStore};

const MANIFEST_FILE: &str = "manifest.json";

/// Versioned artifacts stored under a root directory.
#[derive(Debug, Clone)]
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn artifact_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn version_dir(&self, name: &str, version: u32) -> PathBuf {
        self.artifact_dir(name).join(format!("v{version}"))
    }

    /// Published version numbers of `name`, ascending. Empty if none.
    pub fn versions(&self, name: &str) -> Result<Vec<u32>> {
        validate_name(name)?;
        let dir = self.artifact_dir(name);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut versions = Vec::new();
        for entry in fs::read_dir(&dir).map_err(ArtifactError::io(&dir))? {
            let entry = entry.map_err(ArtifactError::io(&dir))?;
            let file_name = entry.file_name();
            let Some(version) = file_name
                .to_str()
                .and_then(|s| s.strip_prefix('v'))
                .and_then(|s| s.parse::<u32>().ok())
            else {
                continue;
            };
            // Only completed publishes carry a manifest.
            if entry.path().join(MANIFEST_FILE).is_file() {
                versions.push(version);
            }
        }
        versions.sort_unstable();
        Ok(versions)
    }

    /// Manifests of every published version of `name`, oldest first.
    pub fn list(&self, name: &str) -> Result<Vec<ArtifactManifest>> {
        self.versions(name)?
            .into_iter()
            .map(|version| self.read_manifest(name, version))
            .collect()
    }

    /// Resolve a reference to a concrete version number.
    pub fn resolve(&self, reference: &ArtifactRef) -> Result<u32> {
        let versions = self.versions(&reference.name)?;
        let found = match reference.version {
            VersionSpec::Latest => versions.last().copied(),
            VersionSpec::Exact(version) => versions.contains(&version).then_some(version),
        };
        found.ok_or_else(|| ArtifactError::NotFound {
            reference: reference.to_string(),
        })
    }

    /// Read the manifest of one version.
    pub fn read_manifest(&self, name: &str, version: u32) -> Result<ArtifactManifest> {
        let path = self.version_dir(name, version).join(MANIFEST_FILE);
        let bytes = fs::read(&path).map_err(ArtifactError::io(&path))?;
        serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Manifest { path, source })
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn fetch(&self, reference: &ArtifactRef) -> Result<PathBuf> {
        let version = self.resolve(reference)?;
        let manifest = self.read_manifest(&reference.name, version)?;
        let path = self
            .version_dir(&reference.name, version)
            .join(&manifest.file_name);
        verify_sha256(&path, &manifest.sha256)?;

        info!(artifact = %manifest.reference(), path = %path.display(), "fetched artifact");
        Ok(path)
    }

    fn publish(&self, path: &Path, metadata: &ArtifactMetadata) -> Result<ArtifactManifest> {
        validate_name(&metadata.name)?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ArtifactError::InvalidReference {
                reference: path.display().to_string(),
                reason: "published file must have a UTF-8 file name",
            })?
            .to_string();

        let version = self.next_version(&metadata.name)?;
        let artifact_dir = self.artifact_dir(&metadata.name);
        fs::create_dir_all(&artifact_dir).map_err(ArtifactError::io(&artifact_dir))?;

        // Stage next to the final location so the last step is a rename.
        let staging = artifact_dir.join(format!(".staging-v{version}-{}", std::process::id()));
        if staging.exists() {
            fs::remove_dir_all(&staging).map_err(ArtifactError::io(&staging))?;
        }
        fs::create_dir(&staging).map_err(ArtifactError::io(&staging))?;

        let manifest = match self.commit_staged(&staging, path, file_name, metadata, version) {
            Ok(manifest) => manifest,
            Err(error) => {
                if let Err(cleanup) = fs::remove_dir_all(&staging) {
                    warn!(path = %staging.display(), %cleanup, "failed to remove staging directory");
                }
                return Err(error);
            }
        };
        sync_dir(&artifact_dir)?;

        info!(
            artifact = %manifest.reference(),
            artifact_type = %manifest.metadata.artifact_type,
            size = manifest.size,
            "published artifact"
        );
        Ok(manifest)
    }
}

impl LocalArtifactStore {
    /// First version number not taken by a published or leftover `v<N>` directory.
    fn next_version(&self, name: &str) -> Result<u32> {
        let mut version = self.versions(name)?.last().map_or(1, |v| v + 1);
        while self.version_dir(name, version).exists() {
            warn!(
                path = %self.version_dir(name, version).display(),
                "skipping version directory without a manifest"
            );
            version += 1;
        }
        Ok(version)
    }

    fn commit_staged(
        &self,
        staging: &Path,
        source: &Path,
        file_name: String,
        metadata: &ArtifactMetadata,
        version: u32,
    ) -> Result<ArtifactManifest> {
        let stored = staging.join(&file_name);
        let size = fs::copy(source, &stored).map_err(ArtifactError::io(source))?;
        sync_file(&stored)?;
        let sha256 = compute_file_sha256(&stored)?;

        let manifest = ArtifactManifest {
            metadata: metadata.clone(),
            version,
            file_name,
            sha256,
            size,
            created_at: Utc::now(),
        };
        write_manifest(&staging.join(MANIFEST_FILE), &manifest)?;

        let target = self.version_dir(&metadata.name, version);
        fs::rename(staging, &target).map_err(ArtifactError::io(&target))?;
        Ok(manifest)
    }
}

fn write_manifest(path: &Path, manifest: &ArtifactManifest) -> Result<()> {
    let json = serde_json::to_vec_pretty(manifest).map_err(|source| ArtifactError::Manifest {
        path: path.to_path_buf(),
        source,
    })?;
    let mut file = File::create(path).map_err(ArtifactError::io(path))?;
    file.write_all(&json).map_err(ArtifactError::io(path))?;
    file.sync_all().map_err(ArtifactError::io(path))?;
    debug!(path = %path.display(), "wrote manifest");
    Ok(())
}

fn sync_file(path: &Path) -> Result<()> {
    File::open(path)
        .and_then(|file| file.sync_all())
        .map_err(ArtifactError::io(path))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> Result<()> {
    sync_file(path)
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn metadata(name: &str) -> ArtifactMetadata {
        ArtifactMetadata {
            name: name.to_string(),
            artifact_type: "raw_data".to_string(),
            description: "Raw listings sample".to_string(),
        }
    }

    #[test]
    fn test_versions_of_unknown_artifact_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = LocalArtifactStore::new(dir.path());
        assert!(store.versions("sample.csv").unwrap().is_empty());
    }

    #[test]
    fn test_incomplete_version_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = LocalArtifactStore::new(dir.path());
        fs::create_dir_all(dir.path().join("sample.csv").join("v7")).unwrap();
        assert!(store.versions("sample.csv").unwrap().is_empty());
    }

    #[test]
    fn test_publish_assigns_increasing_versions() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("sample.csv");
        fs::write(&source, "price\n10\n").unwrap();
        let store = LocalArtifactStore::new(dir.path().join("store"));

        let first = store.publish(&source, &metadata("sample.csv")).unwrap();
        let second = store.publish(&source, &metadata("sample.csv")).unwrap();

        assert_eq!(first.version, 1);
        assert_eq!(second.version, 2);
        assert_eq!(first.sha256, second.sha256);
        assert_eq!(store.versions("sample.csv").unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_publish_skips_leftover_version_directory() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("sample.csv");
        fs::write(&source, "price\n10\n").unwrap();
        let store = LocalArtifactStore::new(dir.path().join("store"));
        let leftover = dir.path().join("store").join("sample.csv").join("v1");
        fs::create_dir_all(&leftover).unwrap();
        fs::write(leftover.join("sample.csv"), "stray").unwrap();

        let manifest = store.publish(&source, &metadata("sample.csv")).unwrap();

        assert_eq!(manifest.version, 2);
        assert_eq!(store.versions("sample.csv").unwrap(), vec![2]);
        let fetched = store.fetch(&ArtifactRef::latest("sample.csv")).unwrap();
        assert_eq!(fs::read_to_string(fetched).unwrap(), "price\n10\n");
    }

    #[test]
    fn test_failed_publish_removes_staging_directory() {
        let dir = TempDir::new().unwrap();
        let store = LocalArtifactStore::new(dir.path().join("store"));
        let missing = dir.path().join("absent.csv");

        let error = store.publish(&missing, &metadata("sample.csv")).unwrap_err();

        assert!(matches!(error, ArtifactError::Io { .. }));
        let leftovers: Vec<_> = fs::read_dir(dir.path().join("store").join("sample.csv"))
            .unwrap()
            .collect();
        assert!(leftovers.is_empty());
    }
}
