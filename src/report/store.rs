//! On-disk persistence for reports.
//!
//! Every write goes to a temp file in the report's own directory and is then
//! renamed over the target, so readers only ever observe the previous or the
//! new complete document.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::report::error::{ReportError, Result};
use crate::report::model::{Environment, Report, RunInfo};

/// First line of every report file.
pub const REPORT_HEADER: &str = "# E2E Test Report\n";

const TEMP_PREFIX: &str = ".home-ci-report-";

pub struct ReportStore;

impl ReportStore {
    /// Create a fresh report at `path`, creating its parent directory if needed.
    pub fn create(path: &Path, run: RunInfo, environment: Environment) -> Result<Report> {
        if let Some(parent) = non_empty_parent(path) {
            fs::create_dir_all(parent)
                .map_err(|e| ReportError::io("create directory", parent, e))?;
        }

        let report = Report::new(run, environment);
        Self::save(path, &report)?;
        tracing::info!(path = %path.display(), "Initialized report");
        Ok(report)
    }

    pub fn load(path: &Path) -> Result<Report> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ReportError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ReportError::io("read", path, e)
            }
        })?;

        let report: Report =
            serde_yaml::from_str(&contents).map_err(|source| ReportError::Format {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            steps = report.steps.len(),
            sealed = report.is_sealed(),
            "Loaded report"
        );
        Ok(report)
    }

    /// Atomically replace the report at `path` with `report`.
    pub fn save(path: &Path, report: &Report) -> Result<()> {
        let contents = Self::render(report)?;
        write_atomic_with(path, contents.as_bytes(), |_| Ok(()))?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "Saved report");
        Ok(())
    }

    /// The exact text `save` writes: header line followed by the YAML body.
    pub fn render(report: &Report) -> Result<String> {
        let body = serde_yaml::to_string(report)?;
        let mut out = String::with_capacity(REPORT_HEADER.len() + body.len());
        out.push_str(REPORT_HEADER);
        out.push_str(&body);
        Ok(out)
    }
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Write `contents` to a sibling temp file, run `before_commit` on it, then
/// rename it over `path`. The temp file is removed if any step fails.
pub(crate) fn write_atomic_with<F>(path: &Path, contents: &[u8], before_commit: F) -> Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let dir = non_empty_parent(path).unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| ReportError::io("create temp file for", path, e))?;

    tmp.write_all(contents)
        .and_then(|()| tmp.flush())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| ReportError::io("write temp file for", path, e))?;

    copy_permissions(path, tmp.as_file())
        .map_err(|e| ReportError::io("set permissions for", path, e))?;

    before_commit(tmp.path()).map_err(|e| ReportError::io("commit", path, e))?;

    tmp.persist(path)
        .map_err(|e| ReportError::io("replace", path, e.error))?;
    Ok(())
}

/// Keep the target's mode on rewrite; new files get the usual 0644 instead of
/// the temp file's private default.
#[cfg(unix)]
fn copy_permissions(target: &Path, file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = match fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    file.set_permissions(permissions)
}

#[cfg(not(unix))]
fn copy_permissions(_target: &Path, _file: &fs::File) -> io::Result<()> {
    Ok(())
}
