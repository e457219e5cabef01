//! Artifact references: `name[:version]`.

use std::fmt;
use std::str::FromStr;

use crate::error::ArtifactError;

/// Which version of an artifact a reference selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionSpec {
    /// Highest published version.
    Latest,
    /// A specific version number (1-based).
    Exact(u32),
}

/// Named reference to an artifact, e.g. `sample.csv:latest` or `clean_sample.csv:v2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRef {
    pub name: String,
    pub version: VersionSpec,
}

impl ArtifactRef {
    pub fn latest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: VersionSpec::Latest,
        }
    }

    pub fn exact(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version: VersionSpec::Exact(version),
        }
    }
}

/// Check that `name` is usable as a single directory component.
pub(crate) fn validate_name(name: &str) -> Result<(), ArtifactError> {
    let reason = if name.trim().is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." || name.starts_with('.') {
        Some("name must not start with '.'")
    } else if name.contains(['/', '\\', ':']) {
        Some("name must not contain '/', '\\' or ':'")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ArtifactError::InvalidReference {
            reference: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn parse_version(raw: &str) -> Option<VersionSpec> {
    if raw.eq_ignore_ascii_case("latest") {
        return Some(VersionSpec::Latest);
    }
    let digits = raw.strip_prefix(['v', 'V']).unwrap_or(raw);
    match digits.parse::<u32>() {
        Ok(version) if version > 0 => Some(VersionSpec::Exact(version)),
        _ => None,
    }
}

impl FromStr for ArtifactRef {
    type Err = ArtifactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (name, version) = match trimmed.rsplit_once(':') {
            Some((name, raw)) => {
                let version = parse_version(raw).ok_or_else(|| ArtifactError::InvalidReference {
                    reference: trimmed.to_string(),
                    reason: "version must be 'latest', 'vN' or 'N' with N >= 1",
                })?;
                (name, version)
            }
            None => (trimmed, VersionSpec::Latest),
        };
        validate_name(name).map_err(|_| ArtifactError::InvalidReference {
            reference: trimmed.to_string(),
            reason: "artifact name must be a non-empty file name",
        })?;
        Ok(Self {
            name: name.to_string(),
            version,
        })
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            VersionSpec::Latest => write!(f, "{}:latest", self.name),
            VersionSpec::Exact(version) => write!(f, "{}:v{version}", self.name),
        }
    }
}
