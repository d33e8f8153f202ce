//! Snapshot service: loads precomputed topic-modeling results from disk.
//!
//! DESIGN
//! ======
//! The snapshot file is written by the external modeling process. It is read
//! on every request so a fresh export is served without restarting. Decoding
//! into the shared wire types rejects malformed files here instead of
//! forwarding them to the browser.

use std::path::{Path, PathBuf};

use client::net::types::TopicModelingData;
use tracing::debug;

/// Errors produced while loading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// No snapshot path is configured.
    #[error("no snapshot configured")]
    NotConfigured,

    /// The file could not be read.
    #[error("snapshot read failed: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid `{ topics, documents }` payload.
    #[error("snapshot decode failed: {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Decode snapshot bytes.
///
/// # Errors
///
/// Returns `SnapshotError::Decode` if `bytes` is not a valid payload.
pub fn decode_snapshot(path: &Path, bytes: &[u8]) -> Result<TopicModelingData, SnapshotError> {
    serde_json::from_slice(bytes).map_err(|source| SnapshotError::Decode { path: path.to_path_buf(), source })
}

/// Read and decode the configured snapshot.
///
/// # Errors
///
/// Returns `NotConfigured` when `path` is `None`, `Read` on I/O failure, and
/// `Decode` when the file contents are not a valid payload.
pub async fn load_snapshot(path: Option<&Path>) -> Result<TopicModelingData, SnapshotError> {
    let path = path.ok_or(SnapshotError::NotConfigured)?;
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| SnapshotError::Read { path: path.to_path_buf(), source })?;
    let data = decode_snapshot(path, &bytes)?;
    debug!(path = %path.display(), topics = data.topics.len(), documents = data.documents.len(), "snapshot loaded");
    Ok(data)
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod tests;
