// StaffSift - core/filter/employee.rs
//
// Criteria and predicate chain for the employee roster. Every dimension
// here is direct (no resolution), so this is the shortest chain.

use crate::core::filter::{matches_search, matching_indices, toggle, Lookups, Searchable};
use crate::core::model::{Employee, EmploymentStatus};
use std::collections::HashSet;

/// Complete roster criteria. All fields are AND-combined when applied;
/// an empty set leaves that dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    /// Substring text search (case-insensitive). Empty = no filter.
    pub search: String,

    /// Departments to include, compared verbatim (empty = all).
    pub departments: HashSet<String>,

    /// Employment statuses to include (empty = all).
    pub statuses: HashSet<EmploymentStatus>,
}

impl EmployeeFilter {
    /// Returns true if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.departments.is_empty() && self.statuses.is_empty()
    }

    pub fn toggle_department(&mut self, department: String) {
        toggle(&mut self.departments, department);
    }

    pub fn toggle_status(&mut self, status: EmploymentStatus) {
        toggle(&mut self.statuses, status);
    }
}

impl Searchable for Employee {
    fn searchable_fields(&self, _lookups: &Lookups<'_>, out: &mut Vec<String>) {
        out.push(self.full_name());
        out.push(self.email.clone());
        out.push(self.department.clone());
    }
}

/// Apply roster criteria, returning indices of matching employees.
///
/// Indices point into the original slice, in input order.
pub fn filter_employees(
    records: &[Employee],
    filter: &EmployeeFilter,
    lookups: &Lookups<'_>,
) -> Vec<usize> {
    if filter.is_empty() {
        return (0..records.len()).collect();
    }

    let query_lower = filter.search.to_lowercase();

    matching_indices(records, |record| {
        matches_all(record, filter, lookups, &query_lower)
    })
}

/// Check if a single employee matches all active criteria.
fn matches_all(
    record: &Employee,
    filter: &EmployeeFilter,
    lookups: &Lookups<'_>,
    query_lower: &str,
) -> bool {
    // Text search
    if !query_lower.is_empty() && !matches_search(record, lookups, query_lower) {
        return false;
    }

    // Department filter (verbatim record value, no sentinel here)
    if !filter.departments.is_empty() && !filter.departments.contains(&record.department) {
        return false;
    }

    // Status filter
    if !filter.statuses.is_empty() && !filter.statuses.contains(&record.status) {
        return false;
    }

    true
}
