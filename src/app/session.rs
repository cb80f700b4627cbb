// StaffSift - app/session.rs
//
// Session persistence: the API base URL, the auth token handed back by
// the backend, and the last dataset directory, restored between runs.
//
// Design principles:
// - The session is saved atomically (write→temp, rename→final) so a
//   crash during save never corrupts the previous good session.
// - Load errors are silently discarded (a corrupt or incompatible
//   session just starts fresh rather than surfacing errors).
// - The token is a pass-through: stored and returned verbatim, never
//   inspected or refreshed here. Authentication is the backend's
//   concern.

use crate::util::constants::SESSION_FILE_NAME;
use crate::util::error::SessionError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment this constant whenever `SessionData` gains or removes
/// fields in a breaking way. Version mismatches silently discard the
/// session.
pub const SESSION_VERSION: u32 = 1;

// =============================================================================
// On-disk data structure
// =============================================================================

/// Complete persistent session snapshot.
///
/// Every field except `version` carries a serde default so minor format
/// additions are tolerated without bumping the version.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version. Must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Base URL of the HR backend the snapshots came from. Recorded for
    /// operator context; StaffSift itself never calls it.
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Opaque bearer token from `staffsift login`. Pass-through only.
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Dataset directory used by the last run. List commands fall back
    /// to it when `--data-dir` is not given.
    #[serde(default)]
    pub dataset_dir: Option<PathBuf>,
}

impl SessionData {
    /// Fresh session with the current schema version.
    pub fn new() -> Self {
        Self {
            version: SESSION_VERSION,
            ..Default::default()
        }
    }
}

// =============================================================================
// I/O helpers
// =============================================================================

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed.
pub fn save(data: &SessionData, path: &Path) -> Result<(), SessionError> {
    // Ensure the parent directory exists before writing.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SessionError::Io {
            path: parent.to_path_buf(),
            operation: "create session directory",
            source: e,
        })?;
    }

    let json =
        serde_json::to_string_pretty(data).map_err(|e| SessionError::Serialise { source: e })?;

    // Atomic write: write to a sibling temp file then rename. A crash
    // between write and rename loses the new session but never corrupts
    // the previous one.
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| SessionError::Io {
        path: tmp.clone(),
        operation: "write session temp file",
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        SessionError::Io {
            path: path.to_path_buf(),
            operation: "finalise session file",
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller should treat `None` as "start fresh".
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // Distinguish "file not found" (normal first run) from other errors.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed, starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch, starting fresh"
        );
        return None;
    }

    tracing::debug!(path = %path.display(), "Session file loaded");
    Some(data)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_data() -> SessionData {
        SessionData {
            version: SESSION_VERSION,
            api_base_url: Some("https://hr.example.com/api".to_string()),
            auth_token: Some("tok-123".to_string()),
            dataset_dir: Some(PathBuf::from("/var/lib/staffsift/snapshots")),
        }
    }

    /// Save and load must round-trip all fields accurately.
    #[test]
    fn test_session_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let original = sample_data();

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should return Some after valid save");

        assert_eq!(loaded.version, SESSION_VERSION);
        assert_eq!(loaded.api_base_url, original.api_base_url);
        assert_eq!(loaded.auth_token.as_deref(), Some("tok-123"));
        assert_eq!(loaded.dataset_dir, original.dataset_dir);
    }

    /// Load must return None when the file does not exist (first run).
    #[test]
    fn test_session_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.json");
        assert!(load(&path).is_none());
    }

    /// Load must return None when the JSON is malformed rather than panicking.
    #[test]
    fn test_session_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    /// Load must return None when the version field is wrong.
    #[test]
    fn test_session_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut data = sample_data();
        data.version = 99;
        save(&data, &path).unwrap();
        // save() writes whatever version we give it; validation is in load().
        assert!(load(&path).is_none());
    }

    /// A leftover temp file from a crashed save must not corrupt anything.
    #[test]
    fn test_session_save_atomic_does_not_corrupt_original() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let original = sample_data();
        save(&original, &path).unwrap();

        // Simulate a leftover temp file from a previous crash.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, b"garbage").unwrap();

        let mut updated = sample_data();
        updated.auth_token = Some("tok-456".to_string());
        save(&updated, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.auth_token.as_deref(), Some("tok-456"));
    }
}
