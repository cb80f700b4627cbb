// StaffSift - app/loader.rs
//
// Tolerant loading of JSON snapshot files into typed collections.
//
// Each collection is one JSON array, one file per REST endpoint
// snapshot. Loading is tolerant per element: the array is parsed as raw
// values first, each value converts to its typed record individually,
// and failures are skipped and reported instead of failing the batch.
// One bad record never poisons a snapshot; a missing file yields an
// empty collection.

use crate::core::filter::Lookups;
use crate::core::model::{AttendanceRecord, Candidate, Employee, JobOpening, LeaveRequest};
use crate::core::resolve::{EmployeeDirectory, JobCatalog};
use crate::util::constants::{
    ATTENDANCE_SNAPSHOT, CANDIDATES_SNAPSHOT, EMPLOYEES_SNAPSHOT, JOBS_SNAPSHOT, LEAVES_SNAPSHOT,
    MAX_LOAD_ERRORS_PER_COLLECTION,
};
use crate::util::error::LoadError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Outcome of loading one collection file.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Collection this report covers (file stem, e.g. "employees").
    pub collection: String,

    /// Records successfully converted.
    pub loaded: usize,

    /// Elements skipped due to per-record conversion errors.
    pub skipped: usize,

    /// File was absent; the collection defaulted to empty.
    pub missing: bool,

    /// Per-record errors, capped at `MAX_LOAD_ERRORS_PER_COLLECTION`.
    pub errors: Vec<LoadError>,
}

impl LoadReport {
    fn new(collection: &str) -> Self {
        Self {
            collection: collection.to_owned(),
            ..Default::default()
        }
    }
}

/// The five record collections of a dataset directory, plus the lookup
/// indexes built from them. Collections are read-only once loaded.
#[derive(Debug, Default)]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
    pub leaves: Vec<LeaveRequest>,
    pub candidates: Vec<Candidate>,
    pub jobs: Vec<JobOpening>,

    /// Employee id → name/department index, built once at load.
    pub directory: EmployeeDirectory,

    /// Job id → title index, built once at load.
    pub catalog: JobCatalog,
}

impl Dataset {
    /// Load every collection snapshot from `dir`.
    ///
    /// Hard failures (unreadable file, invalid JSON, a non-array
    /// payload, a collection over `max_records`) abort the load;
    /// per-record conversion failures only land in the reports.
    pub fn load_dir(dir: &Path, max_records: usize) -> Result<(Self, Vec<LoadReport>), LoadError> {
        let mut reports = Vec::with_capacity(5);

        let (employees, report) =
            load_collection::<Employee>(&dir.join(EMPLOYEES_SNAPSHOT), max_records)?;
        reports.push(report);

        let (attendance, report) =
            load_collection::<AttendanceRecord>(&dir.join(ATTENDANCE_SNAPSHOT), max_records)?;
        reports.push(report);

        let (leaves, report) =
            load_collection::<LeaveRequest>(&dir.join(LEAVES_SNAPSHOT), max_records)?;
        reports.push(report);

        let (candidates, report) =
            load_collection::<Candidate>(&dir.join(CANDIDATES_SNAPSHOT), max_records)?;
        reports.push(report);

        let (jobs, report) = load_collection::<JobOpening>(&dir.join(JOBS_SNAPSHOT), max_records)?;
        reports.push(report);

        let directory = EmployeeDirectory::new(&employees);
        let catalog = JobCatalog::new(&jobs);

        let dataset = Self {
            employees,
            attendance,
            leaves,
            candidates,
            jobs,
            directory,
            catalog,
        };

        tracing::info!(
            employees = dataset.employees.len(),
            attendance = dataset.attendance.len(),
            leaves = dataset.leaves.len(),
            candidates = dataset.candidates.len(),
            jobs = dataset.jobs.len(),
            "Dataset loaded"
        );

        Ok((dataset, reports))
    }

    /// Borrow the lookup context used by every filter pass.
    pub fn lookups(&self) -> Lookups<'_> {
        Lookups::new(&self.directory, &self.catalog)
    }

    /// Total records across all collections.
    pub fn total_records(&self) -> usize {
        self.employees.len()
            + self.attendance.len()
            + self.leaves.len()
            + self.candidates.len()
            + self.jobs.len()
    }
}

/// Load one collection file as a JSON array of `T`.
fn load_collection<T: DeserializeOwned>(
    path: &Path,
    max_records: usize,
) -> Result<(Vec<T>, LoadReport), LoadError> {
    let collection = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut report = LoadReport::new(&collection);

    if !path.exists() {
        tracing::warn!(path = %path.display(), "Snapshot file missing, collection empty");
        report.missing = true;
        return Ok((Vec::new(), report));
    }

    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let values: Vec<serde_json::Value> = match serde_json::from_str(&content) {
        Ok(serde_json::Value::Array(values)) => values,
        Ok(_) => {
            return Err(LoadError::NotAnArray {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(LoadError::Json {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    if values.len() > max_records {
        return Err(LoadError::TooManyRecords {
            path: path.to_path_buf(),
            count: values.len(),
            max: max_records,
        });
    }

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                report.skipped += 1;
                tracing::debug!(
                    collection = %report.collection,
                    index,
                    error = %e,
                    "Skipping malformed record"
                );
                if report.errors.len() < MAX_LOAD_ERRORS_PER_COLLECTION {
                    report.errors.push(LoadError::Record {
                        path: path.to_path_buf(),
                        index,
                        source: e,
                    });
                }
            }
        }
    }

    report.loaded = records.len();
    if report.skipped > 0 {
        tracing::warn!(
            collection = %report.collection,
            loaded = report.loaded,
            skipped = report.skipped,
            "Collection loaded with skipped records"
        );
    }

    Ok((records, report))
}
