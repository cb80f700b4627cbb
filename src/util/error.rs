// StaffSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every wrapper keeps its causal
// source so diagnostics can walk the full chain.
//
// The filtering core itself is infallible: malformed values degrade to
// null categories or the "Unknown" sentinel instead of surfacing here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all StaffSift operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum StaffSiftError {
    /// Snapshot loading failed.
    Load(LoadError),

    /// A filter value supplied by the user could not be parsed.
    Criteria(CriteriaError),

    /// Export operation failed.
    Export(ExportError),

    /// Session persistence failed.
    Session(SessionError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for StaffSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Load error: {e}"),
            Self::Criteria(e) => write!(f, "Filter error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Session(e) => write!(f, "Session error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StaffSiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Criteria(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Session(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors related to loading collection snapshots.
///
/// The `Record` variant never aborts a load on its own: the loader skips
/// the offending element and accumulates the error in its report.
#[derive(Debug)]
pub enum LoadError {
    /// The snapshot file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The snapshot file is not valid JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The snapshot's top-level JSON value is not an array.
    NotAnArray { path: PathBuf },

    /// A single element of the array does not match the record shape.
    Record {
        path: PathBuf,
        index: usize,
        source: serde_json::Error,
    },

    /// The snapshot holds more records than the configured cap.
    TooManyRecords {
        path: PathBuf,
        count: usize,
        max: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read snapshot '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "Snapshot '{}' is not valid JSON: {source}", path.display())
            }
            Self::NotAnArray { path } => write!(
                f,
                "Snapshot '{}' must be a JSON array of records",
                path.display()
            ),
            Self::Record {
                path,
                index,
                source,
            } => write!(
                f,
                "Snapshot '{}' record {index}: {source}",
                path.display()
            ),
            Self::TooManyRecords { path, count, max } => write!(
                f,
                "Snapshot '{}' holds {count} records, exceeds maximum of {max}. \
                 Raise [loader] max_records in config or trim the snapshot.",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::Record { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for StaffSiftError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Criteria errors
// ---------------------------------------------------------------------------

/// Errors produced while turning user-supplied filter values into typed
/// criteria. Raised at the CLI boundary, never inside the engine.
#[derive(Debug)]
pub enum CriteriaError {
    /// A categorical value is not part of the dimension's vocabulary.
    UnrecognisedValue {
        dimension: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A date bound is not a valid ISO date.
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}

impl CriteriaError {
    /// Shorthand for the common vocabulary-mismatch case.
    pub fn unrecognised(dimension: &'static str, value: &str, expected: &'static str) -> Self {
        Self::UnrecognisedValue {
            dimension,
            value: value.to_owned(),
            expected,
        }
    }
}

impl fmt::Display for CriteriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognisedValue {
                dimension,
                value,
                expected,
            } => write!(
                f,
                "'{value}' is not a valid {dimension}. Expected one of: {expected}"
            ),
            Self::InvalidDate { value, source } => {
                write!(f, "'{value}' is not a valid date (YYYY-MM-DD): {source}")
            }
        }
    }
}

impl std::error::Error for CriteriaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<CriteriaError> for StaffSiftError {
    fn from(e: CriteriaError) -> Self {
        Self::Criteria(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations. Path context is added by the
/// caller, which owns the output destination (exporters write to any
/// `Write` target and never open files themselves).
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the export stream.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },

    /// Export would exceed the configured record cap.
    TooManyRecords { count: usize, max: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "I/O failure: {source}"),
            Self::Csv { source } => write!(f, "CSV serialisation failed: {source}"),
            Self::Json { source } => write!(f, "JSON serialisation failed: {source}"),
            Self::TooManyRecords { count, max } => write!(
                f,
                "Export of {count} records exceeds maximum of {max}. \
                 Apply filters to reduce the result set."
            ),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
            _ => None,
        }
    }
}

impl From<ExportError> for StaffSiftError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors related to session persistence. Load failures are deliberately
/// not represented: a session that cannot be read is discarded and the
/// application starts fresh.
#[derive(Debug)]
pub enum SessionError {
    /// The session could not be serialised.
    Serialise { source: serde_json::Error },

    /// I/O error writing the session file.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialise { source } => {
                write!(f, "Cannot serialise session: {source}")
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "Session {operation} failed for '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialise { source } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<SessionError> for StaffSiftError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// Convenience type alias for StaffSift results.
pub type Result<T> = std::result::Result<T, StaffSiftError>;
