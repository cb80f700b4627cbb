// StaffSift - core/resolve.rs
//
// Resolution of indirect record dimensions. Attendance and leave
// records carry an `employee_id`, candidates a `job_id`; filtering and
// display work on the resolved display values. Lookups are built once
// per dataset as owned hash indexes so a filter pass never scans the
// employee list per record.

use crate::core::model::{Employee, JobOpening};
use crate::util::constants::UNKNOWN;
use std::collections::HashMap;

// =============================================================================
// Employee resolution
// =============================================================================

/// Lookup capability for employee display dimensions.
///
/// The `display_*` methods apply the "Unknown" sentinel for ids that do
/// not resolve, so a record referencing a purged employee still renders
/// and still matches a free-text search for "unknown".
pub trait EmployeeResolver {
    /// Full display name, if the id resolves.
    fn full_name(&self, employee_id: &str) -> Option<&str>;

    /// Department, if the id resolves. An employee with an empty
    /// department resolves to the empty string, which is distinct from
    /// an unresolvable id.
    fn department(&self, employee_id: &str) -> Option<&str>;

    /// Display name with the sentinel applied.
    fn display_name(&self, employee_id: &str) -> String {
        self.full_name(employee_id).unwrap_or(UNKNOWN).to_owned()
    }

    /// Department with the sentinel applied.
    fn display_department(&self, employee_id: &str) -> String {
        self.department(employee_id).unwrap_or(UNKNOWN).to_owned()
    }
}

/// Hash-indexed employee directory. Owns its display strings so it can
/// live alongside the record collections without borrowing them.
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    entries: HashMap<String, DirectoryEntry>,
}

#[derive(Debug)]
struct DirectoryEntry {
    full_name: String,
    department: String,
}

impl EmployeeDirectory {
    /// Build the index from an employee collection. Later duplicates of
    /// an id win, matching a snapshot where a re-imported employee
    /// appears twice.
    pub fn new(employees: &[Employee]) -> Self {
        let mut entries = HashMap::with_capacity(employees.len());
        for emp in employees {
            entries.insert(
                emp.id.clone(),
                DirectoryEntry {
                    full_name: emp.full_name(),
                    department: emp.department.clone(),
                },
            );
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EmployeeResolver for EmployeeDirectory {
    fn full_name(&self, employee_id: &str) -> Option<&str> {
        self.entries.get(employee_id).map(|e| e.full_name.as_str())
    }

    fn department(&self, employee_id: &str) -> Option<&str> {
        self.entries.get(employee_id).map(|e| e.department.as_str())
    }
}

// =============================================================================
// Job resolution
// =============================================================================

/// Hash-indexed job-title catalogue for candidate records.
#[derive(Debug, Default)]
pub struct JobCatalog {
    titles: HashMap<String, String>,
}

impl JobCatalog {
    /// Build the index from a job collection. Later duplicates win.
    pub fn new(jobs: &[JobOpening]) -> Self {
        let mut titles = HashMap::with_capacity(jobs.len());
        for job in jobs {
            titles.insert(job.id.clone(), job.title.clone());
        }
        Self { titles }
    }

    /// Job title, if the id resolves.
    pub fn title(&self, job_id: &str) -> Option<&str> {
        self.titles.get(job_id).map(String::as_str)
    }

    /// Job title with the "Unknown" sentinel applied.
    pub fn display_title(&self, job_id: &str) -> String {
        self.title(job_id).unwrap_or(UNKNOWN).to_owned()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
