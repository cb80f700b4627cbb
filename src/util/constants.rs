// StaffSift - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// The classification thresholds are contract values: they must reproduce
// the behaviour of the HRMS screens this tool replaces, so they are named
// constants rather than configuration.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "StaffSift";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "StaffSift";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Classification thresholds (contract values)
// =============================================================================

/// Start of the on-time check-in window, minutes since midnight (08:45).
/// A check-in strictly before this is classified early.
pub const ON_TIME_WINDOW_START_MINUTES: u32 = 8 * 60 + 45;

/// End of the on-time check-in window, minutes since midnight (09:00).
/// The boundary itself is on-time; anything later is late.
pub const ON_TIME_WINDOW_END_MINUTES: u32 = 9 * 60;

/// Longest leave (in days) still classified short. The boundary is short.
pub const SHORT_LEAVE_MAX_DAYS: f64 = 2.0;

/// Longest leave (in days) still classified medium. The boundary is medium;
/// anything longer is long.
pub const MEDIUM_LEAVE_MAX_DAYS: f64 = 5.0;

/// Experience band edges in years. Bands are half-open: [0, 2), [2, 5),
/// [5, 10), [10, +). Exactly 2 years falls in the second band.
pub const EXPERIENCE_BAND_EDGES_YEARS: [f64; 3] = [2.0, 5.0, 10.0];

/// Salary band edges in currency units. Bands are half-open: below 50k,
/// [50k, 80k), [80k, 120k), 120k and above.
pub const SALARY_BAND_EDGES: [f64; 3] = [50_000.0, 80_000.0, 120_000.0];

/// Sentinel value used when an indirect reference (employee, job opening)
/// cannot be resolved. Participates in filtering and search like any other
/// string value.
pub const UNKNOWN: &str = "Unknown";

// =============================================================================
// Loader limits
// =============================================================================

/// Default maximum number of records accepted per collection snapshot.
pub const DEFAULT_MAX_RECORDS: usize = 100_000;

/// Minimum sensible value for the per-collection record cap.
pub const MIN_MAX_RECORDS: usize = 100;

/// Hard upper bound on the per-collection record cap. At roughly 1 KB per
/// record this keeps a full dataset comfortably inside ordinary heap sizes.
pub const ABSOLUTE_MAX_RECORDS: usize = 1_000_000;

/// Maximum number of malformed-record errors retained per collection.
/// Further failures are still counted, just not stored individually.
pub const MAX_LOAD_ERRORS_PER_COLLECTION: usize = 100;

// =============================================================================
// Export limits
// =============================================================================

/// Default maximum number of records in a single export operation.
pub const DEFAULT_MAX_EXPORT_RECORDS: usize = 1_000_000;

/// Minimum sensible value for the export cap.
pub const MIN_MAX_EXPORT_RECORDS: usize = 100;

/// Hard upper bound on the export cap.
pub const ABSOLUTE_MAX_EXPORT_RECORDS: usize = 5_000_000;

// =============================================================================
// CLI output
// =============================================================================

/// Default number of table rows printed before the listing is elided.
/// Exports are never truncated by this limit; it bounds terminal output only.
pub const DEFAULT_ROW_LIMIT: usize = 500;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config set one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// File names
// =============================================================================

/// Configuration file name (looked up in the platform config directory).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";

/// Snapshot file name for the employees collection.
pub const EMPLOYEES_SNAPSHOT: &str = "employees.json";

/// Snapshot file name for the attendance collection.
pub const ATTENDANCE_SNAPSHOT: &str = "attendance.json";

/// Snapshot file name for the leave requests collection.
pub const LEAVES_SNAPSHOT: &str = "leaves.json";

/// Snapshot file name for the candidates collection.
pub const CANDIDATES_SNAPSHOT: &str = "candidates.json";

/// Snapshot file name for the job openings collection.
pub const JOBS_SNAPSHOT: &str = "jobs.json";
