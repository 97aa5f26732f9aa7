//! # Filesystem Probe
//!
//! Appends one identity line to a scratch file on a shared mount and reads the
//! whole file back. The file is shared with every other running instance and
//! is never truncated here. No lock is taken; appends go through an
//! `O_APPEND` handle in a single write.

use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::constants::{INSTANCE_IDENTITY_ENV, UNKNOWN_INSTANCE_IDENTITY};
use crate::environment::EnvironmentSource;
use crate::error::{ProbeError, ProbeResult};

/// Append-only scratch file at a fixed path
#[derive(Debug, Clone)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `line` as-is, creating the file if needed
    pub async fn append(&self, line: &str) -> ProbeResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| ProbeError::file_io(&self.path, e))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| ProbeError::file_io(&self.path, e))?;

        // tokio defers the write to a blocking task; flush waits for it
        file.flush()
            .await
            .map_err(|e| ProbeError::file_io(&self.path, e))?;

        Ok(())
    }

    /// Exactly the bytes currently in the file
    ///
    /// Bytes that are not UTF-8 are replaced rather than failing the read,
    /// since other instances may write to the same file.
    pub async fn read_contents(&self) -> ProbeResult<String> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ProbeError::file_io(&self.path, e))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// The line recorded for one probe invocation
pub fn identity_line(identity: &str) -> String {
    format!("Container: {identity}<br />")
}

/// Instance identity from `HOSTNAME`
pub fn instance_identity(env: &dyn EnvironmentSource) -> String {
    env.var(INSTANCE_IDENTITY_ENV)
        .unwrap_or_else(|| UNKNOWN_INSTANCE_IDENTITY.to_string())
}

/// Append this instance's line, then return the whole file
pub async fn probe_scratch_file(scratch: &ScratchFile, identity: &str) -> ProbeResult<String> {
    scratch.append(&identity_line(identity)).await?;
    let contents = scratch.read_contents().await?;

    debug!(
        path = %scratch.path().display(),
        identity = %identity,
        bytes = contents.len(),
        "Scratch file appended and read back"
    );

    Ok(contents)
}
