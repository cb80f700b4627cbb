// StaffSift - core/filter/mod.rs
//
// Composable filter engine for HR record collections.
// All active criteria are AND-combined; within one set-valued dimension
// membership is an OR. Core layer: pure logic, no I/O or UI dependencies.
//
// Shared machinery lives here; each record type gets its own submodule
// with its criteria struct and `filter_*` entry point. Every entry point
// returns indices into the input slice, in input order, so callers keep
// one owned copy of the records and any number of filtered views.

pub mod attendance;
pub mod candidate;
pub mod employee;
pub mod leave;

pub use attendance::{filter_attendance, AttendanceFilter};
pub use candidate::{filter_candidates, CandidateFilter};
pub use employee::{filter_employees, EmployeeFilter};
pub use leave::{filter_leaves, LeaveFilter};

use crate::core::resolve::{EmployeeResolver, JobCatalog};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::hash::Hash;

// =============================================================================
// Lookup context
// =============================================================================

/// Read-only lookup context handed through every filter pass, used to
/// resolve indirect record dimensions (employee name and department,
/// job title). One struct rather than per-type parameters so the entry
/// points share a uniform shape.
pub struct Lookups<'a> {
    pub employees: &'a dyn EmployeeResolver,
    pub jobs: &'a JobCatalog,
}

impl<'a> Lookups<'a> {
    pub fn new(employees: &'a dyn EmployeeResolver, jobs: &'a JobCatalog) -> Self {
        Self { employees, jobs }
    }
}

// =============================================================================
// Free-text search
// =============================================================================

/// Capability exposed by every filterable record type: the designated
/// searchable fields, rendered as display strings.
///
/// The field list is explicit per type, not derived from the struct;
/// resolved fields (employee name, job title) participate, including
/// the "Unknown" sentinel for dangling references.
pub trait Searchable {
    /// Append this record's searchable fields to `out`.
    fn searchable_fields(&self, lookups: &Lookups<'_>, out: &mut Vec<String>);
}

/// Case-insensitive substring search over a record's searchable fields.
/// `query_lower` must already be lower-cased (hoisted out of the
/// per-record loop by the filter entry points).
pub fn matches_search<R: Searchable>(
    record: &R,
    lookups: &Lookups<'_>,
    query_lower: &str,
) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    let mut fields = Vec::new();
    record.searchable_fields(lookups, &mut fields);
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Insert `value` into `set` if absent, remove it if present. The
/// checkbox transition for multi-select dimensions.
pub fn toggle<T: Eq + Hash>(set: &mut HashSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// Stable index filter: enumerate `records`, keep indices whose record
/// passes `keep`. Preserves input order and never copies a record.
pub(crate) fn matching_indices<T>(records: &[T], mut keep: impl FnMut(&T) -> bool) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| keep(record))
        .map(|(idx, _)| idx)
        .collect()
}

/// Point-record date test: `date` within `[from, to]`, each bound
/// optional and inclusive.
pub(crate) fn within_date_bounds(
    date: NaiveDate,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    if let Some(from) = from {
        if date < from {
            return false;
        }
    }
    if let Some(to) = to {
        if date > to {
            return false;
        }
    }
    true
}

/// Interval-record overlap test: the inclusive interval
/// `[start, end]` intersects `[from, to]`. An interval that merely
/// straddles a bound is kept; it is excluded only when it ends before
/// `from` or starts after `to`.
pub(crate) fn overlaps_date_bounds(
    start: NaiveDate,
    end: NaiveDate,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    if let Some(from) = from {
        if end < from {
            return false;
        }
    }
    if let Some(to) = to {
        if start > to {
            return false;
        }
    }
    true
}
