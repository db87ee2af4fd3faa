//! GitHub Actions `repository_dispatch` client payloads.
//!
//! A remote test run posts its outcome together with base64-encoded artifact
//! files. This module reads that payload and unpacks the artifacts.

pub mod error;

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Component, Path};

use base64::engine::general_purpose;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

pub use error::PayloadError;
use error::Result;

/// Content marker the sender uses for artifacts it could not collect.
const NULL_CONTENT: &str = "null";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    pub success: bool,
    pub source: String,
    pub branch: String,
    pub commit: String,
    pub artifact_name: String,
    pub artifacts: BTreeMap<String, ArtifactContent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactContent {
    /// Base64 (standard alphabet) file contents
    pub content: String,
}

impl ArtifactContent {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.content == NULL_CONTENT
    }

    /// Decode the content, ignoring line breaks from wrapped encoders.
    pub fn decode(&self, name: &str) -> Result<Vec<u8>> {
        let unwrapped: String = self
            .content
            .chars()
            .filter(|c| !matches!(c, '\r' | '\n'))
            .collect();
        general_purpose::STANDARD
            .decode(unwrapped)
            .map_err(|source| PayloadError::Decode {
                name: name.to_string(),
                source,
            })
    }
}

impl Payload {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| PayloadError::io("read payload", path, e))?;
        serde_json::from_slice(&data).map_err(|source| PayloadError::Format {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Outcome of [`extract_artifacts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Decode every non-empty artifact of `payload` into `out_dir`.
///
/// Progress lines go to `out`. Empty and `"null"` artifacts are skipped with a
/// warning line; invalid base64 aborts the extraction. Unsafe names are
/// rejected before anything is written.
pub fn extract_artifacts<W: Write>(
    payload: &Payload,
    out_dir: &Path,
    out: &mut W,
) -> Result<ExtractStats> {
    if let Some(name) = payload
        .artifacts
        .iter()
        .filter(|(_, artifact)| !artifact.is_empty())
        .map(|(name, _)| name)
        .find(|name| !is_plain_file_name(name))
    {
        return Err(PayloadError::UnsafeName { name: name.clone() });
    }

    fs::create_dir_all(out_dir)
        .map_err(|e| PayloadError::io("create output directory", out_dir, e))?;

    let stdout_err = |e| PayloadError::io("write progress to", "<output>", e);
    writeln!(out, "📦 Extracting artifacts...").map_err(stdout_err)?;

    let mut stats = ExtractStats::default();
    for (name, artifact) in &payload.artifacts {
        if artifact.is_empty() {
            tracing::warn!(artifact = %name, "Skipping empty artifact");
            writeln!(out, "⚠️  Skipping empty artifact: {name}").map_err(stdout_err)?;
            stats.skipped.push(name.clone());
            continue;
        }

        let bytes = artifact.decode(name)?;
        let target = out_dir.join(name);
        fs::write(&target, &bytes).map_err(|e| PayloadError::io("write artifact", &target, e))?;

        tracing::debug!(artifact = %name, bytes = bytes.len(), "Decoded artifact");
        writeln!(out, "✅ Decoded: {name}").map_err(stdout_err)?;
        stats.written.push(name.clone());
    }

    Ok(stats)
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
