// StaffSift - core/filter/attendance.rs
//
// Criteria and predicate chain for attendance records. Attendance dates
// are point values, so the date dimension is a simple inclusive range;
// the punctuality dimension classifies the raw check-in on the fly.

use crate::core::classify::{punctuality, Punctuality};
use crate::core::filter::{
    matches_search, matching_indices, toggle, within_date_bounds, Lookups, Searchable,
};
use crate::core::model::{AttendanceRecord, AttendanceStatus};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Complete attendance criteria. All fields are AND-combined when
/// applied; an empty set or `None` bound leaves that dimension
/// unconstrained.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    /// Substring text search (case-insensitive). Empty = no filter.
    pub search: String,

    /// Employee ids to include (empty = all).
    pub employees: HashSet<String>,

    /// Resolved departments to include (empty = all). Compared against
    /// the sentinel-resolved department, so "Unknown" selects records
    /// whose employee no longer exists.
    pub departments: HashSet<String>,

    /// Statuses to include (empty = all).
    pub statuses: HashSet<AttendanceStatus>,

    /// Start of date range (inclusive). None = no lower bound.
    pub date_from: Option<NaiveDate>,

    /// End of date range (inclusive). None = no upper bound.
    pub date_to: Option<NaiveDate>,

    /// Punctuality categories to include (empty = all). A record whose
    /// check-in has no category never matches a non-empty selection.
    pub punctuality: HashSet<Punctuality>,
}

impl AttendanceFilter {
    /// Returns true if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.employees.is_empty()
            && self.departments.is_empty()
            && self.statuses.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.punctuality.is_empty()
    }

    pub fn toggle_employee(&mut self, employee_id: String) {
        toggle(&mut self.employees, employee_id);
    }

    pub fn toggle_department(&mut self, department: String) {
        toggle(&mut self.departments, department);
    }

    pub fn toggle_status(&mut self, status: AttendanceStatus) {
        toggle(&mut self.statuses, status);
    }

    pub fn toggle_punctuality(&mut self, category: Punctuality) {
        toggle(&mut self.punctuality, category);
    }
}

impl Searchable for AttendanceRecord {
    fn searchable_fields(&self, lookups: &Lookups<'_>, out: &mut Vec<String>) {
        out.push(lookups.employees.display_name(&self.employee_id));
        out.push(self.date.to_string());
        out.push(self.status.label().to_string());
        if let Some(check_in) = &self.check_in {
            out.push(check_in.clone());
        }
        if let Some(check_out) = &self.check_out {
            out.push(check_out.clone());
        }
    }
}

/// Apply attendance criteria, returning indices of matching records.
///
/// Indices point into the original slice, in input order. Records are
/// never copied or mutated.
pub fn filter_attendance(
    records: &[AttendanceRecord],
    filter: &AttendanceFilter,
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

/// Check if a single record matches all active criteria.
fn matches_all(
    record: &AttendanceRecord,
    filter: &AttendanceFilter,
    lookups: &Lookups<'_>,
    query_lower: &str,
) -> bool {
    // Text search
    if !query_lower.is_empty() && !matches_search(record, lookups, query_lower) {
        return false;
    }

    // Date range
    if !within_date_bounds(record.date, filter.date_from, filter.date_to) {
        return false;
    }

    // Employee filter
    if !filter.employees.is_empty() && !filter.employees.contains(&record.employee_id) {
        return false;
    }

    // Status filter
    if !filter.statuses.is_empty() && !filter.statuses.contains(&record.status) {
        return false;
    }

    // Department filter (resolved, sentinel included)
    if !filter.departments.is_empty() {
        let department = lookups.employees.display_department(&record.employee_id);
        if !filter.departments.contains(&department) {
            return false;
        }
    }

    // Punctuality filter (classified on the fly; no category never matches)
    if !filter.punctuality.is_empty() {
        match punctuality(record.check_in.as_deref()) {
            Some(category) if filter.punctuality.contains(&category) => {}
            _ => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Employee, EmploymentStatus};
    use crate::core::resolve::{EmployeeDirectory, JobCatalog};

    fn make_employee(id: &str, first: &str, last: &str, dept: &str) -> Employee {
        Employee {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{}@example.com", first.to_lowercase()),
            department: dept.into(),
            position: String::new(),
            employment_type: None,
            phone: None,
            join_date: None,
            salary: None,
            status: EmploymentStatus::Active,
        }
    }

    fn make_record(
        id: &str,
        employee_id: &str,
        date: &str,
        check_in: Option<&str>,
        status: AttendanceStatus,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            employee_id: employee_id.into(),
            date: date.parse().unwrap(),
            check_in: check_in.map(str::to_string),
            check_out: None,
            status,
            notes: None,
        }
    }

    fn make_dataset() -> (Vec<Employee>, Vec<AttendanceRecord>) {
        let employees = vec![
            make_employee("e1", "Ada", "Lovelace", "Engineering"),
            make_employee("e2", "Grace", "Hopper", "Research"),
        ];
        let records = vec![
            make_record("a1", "e1", "2024-12-02", Some("08:30"), AttendanceStatus::Present),
            make_record("a2", "e2", "2024-12-02", Some("09:20"), AttendanceStatus::Late),
            make_record("a3", "e1", "2024-12-03", None, AttendanceStatus::Absent),
            make_record("a4", "ghost", "2024-12-04", Some("08:50"), AttendanceStatus::Present),
        ];
        (employees, records)
    }

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let result = filter_attendance(&records, &AttendanceFilter::default(), &lookups);
        assert_eq!(result, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_search_matches_resolved_employee_name() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let filter = AttendanceFilter {
            search: "LOVELACE".into(),
            ..Default::default()
        };
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![0, 2]);
    }

    #[test]
    fn test_search_matches_unknown_sentinel() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let filter = AttendanceFilter {
            search: "unknown".into(),
            ..Default::default()
        };
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![3]);
    }

    #[test]
    fn test_status_dimension_is_membership() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let mut filter = AttendanceFilter::default();
        filter.toggle_status(AttendanceStatus::Present);
        filter.toggle_status(AttendanceStatus::Late);
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![0, 1, 3]);
    }

    #[test]
    fn test_department_dimension_resolves_through_directory() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let mut filter = AttendanceFilter::default();
        filter.toggle_department("Engineering".into());
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![0, 2]);

        // Selecting the sentinel finds records with dangling employee ids.
        let mut filter = AttendanceFilter::default();
        filter.toggle_department("Unknown".into());
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![3]);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let filter = AttendanceFilter {
            date_from: Some("2024-12-02".parse().unwrap()),
            date_to: Some("2024-12-03".parse().unwrap()),
            ..Default::default()
        };
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn test_punctuality_dimension_classifies_check_in() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let mut filter = AttendanceFilter::default();
        filter.toggle_punctuality(Punctuality::Late);
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![1]);
    }

    #[test]
    fn test_missing_check_in_never_matches_active_punctuality() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        // All three categories selected still excludes the record with
        // no check-in; it only passes when the dimension is inactive.
        let mut filter = AttendanceFilter::default();
        for category in Punctuality::all() {
            filter.toggle_punctuality(category);
        }
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![0, 1, 3]);
    }

    #[test]
    fn test_combined_dimensions_are_conjunctive() {
        let (employees, records) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let mut filter = AttendanceFilter {
            search: "2024-12".into(),
            ..Default::default()
        };
        filter.toggle_status(AttendanceStatus::Present);
        filter.toggle_department("Engineering".into());
        let result = filter_attendance(&records, &filter, &lookups);
        assert_eq!(result, vec![0]);
    }

    #[test]
    fn test_toggle_employee_round_trip() {
        let mut filter = AttendanceFilter::default();
        filter.toggle_employee("e1".into());
        assert!(!filter.is_empty());
        filter.toggle_employee("e1".into());
        assert!(filter.is_empty());
    }
}
