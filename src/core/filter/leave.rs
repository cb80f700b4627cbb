// StaffSift - core/filter/leave.rs
//
// Criteria and predicate chain for leave requests. Leaves span an
// inclusive date interval, so the date dimension is an overlap test
// rather than a point range: a leave that straddles either bound is
// still shown.

use crate::core::classify::{leave_duration, LeaveDuration};
use crate::core::filter::{
    matches_search, matching_indices, overlaps_date_bounds, toggle, Lookups, Searchable,
};
use crate::core::model::{LeaveRequest, LeaveStatus, LeaveType};
use chrono::NaiveDate;
use std::collections::HashSet;

/// Complete leave criteria. All fields are AND-combined when applied;
/// an empty set or `None` bound leaves that dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct LeaveFilter {
    /// Substring text search (case-insensitive). Empty = no filter.
    pub search: String,

    /// Employee ids to include (empty = all).
    pub employees: HashSet<String>,

    /// Resolved departments to include (empty = all).
    pub departments: HashSet<String>,

    /// Leave types to include (empty = all).
    pub leave_types: HashSet<LeaveType>,

    /// Approval statuses to include (empty = all).
    pub statuses: HashSet<LeaveStatus>,

    /// Start of date window (inclusive). None = no lower bound.
    pub date_from: Option<NaiveDate>,

    /// End of date window (inclusive). None = no upper bound.
    pub date_to: Option<NaiveDate>,

    /// Duration categories to include (empty = all).
    pub durations: HashSet<LeaveDuration>,
}

impl LeaveFilter {
    /// Returns true if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.employees.is_empty()
            && self.departments.is_empty()
            && self.leave_types.is_empty()
            && self.statuses.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.durations.is_empty()
    }

    pub fn toggle_employee(&mut self, employee_id: String) {
        toggle(&mut self.employees, employee_id);
    }

    pub fn toggle_department(&mut self, department: String) {
        toggle(&mut self.departments, department);
    }

    pub fn toggle_leave_type(&mut self, leave_type: LeaveType) {
        toggle(&mut self.leave_types, leave_type);
    }

    pub fn toggle_status(&mut self, status: LeaveStatus) {
        toggle(&mut self.statuses, status);
    }

    pub fn toggle_duration(&mut self, duration: LeaveDuration) {
        toggle(&mut self.durations, duration);
    }
}

impl Searchable for LeaveRequest {
    fn searchable_fields(&self, lookups: &Lookups<'_>, out: &mut Vec<String>) {
        out.push(lookups.employees.display_name(&self.employee_id));
        out.push(self.leave_type.label().to_string());
        out.push(self.status.label().to_string());
        out.push(self.start_date.to_string());
        out.push(self.end_date.to_string());
        if let Some(reason) = &self.reason {
            out.push(reason.clone());
        }
    }
}

/// Apply leave criteria, returning indices of matching requests.
///
/// Indices point into the original slice, in input order.
pub fn filter_leaves(
    records: &[LeaveRequest],
    filter: &LeaveFilter,
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

/// Check if a single request matches all active criteria.
fn matches_all(
    record: &LeaveRequest,
    filter: &LeaveFilter,
    lookups: &Lookups<'_>,
    query_lower: &str,
) -> bool {
    // Text search
    if !query_lower.is_empty() && !matches_search(record, lookups, query_lower) {
        return false;
    }

    // Date window: overlap, not containment
    if !overlaps_date_bounds(
        record.start_date,
        record.end_date,
        filter.date_from,
        filter.date_to,
    ) {
        return false;
    }

    // Employee filter
    if !filter.employees.is_empty() && !filter.employees.contains(&record.employee_id) {
        return false;
    }

    // Leave type filter
    if !filter.leave_types.is_empty() && !filter.leave_types.contains(&record.leave_type) {
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

    // Duration filter (classified from the day count)
    if !filter.durations.is_empty() && !filter.durations.contains(&leave_duration(record.days_count))
    {
        return false;
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

    fn make_leave(
        id: &str,
        employee_id: &str,
        leave_type: LeaveType,
        start: &str,
        end: &str,
        days: f64,
        status: LeaveStatus,
    ) -> LeaveRequest {
        LeaveRequest {
            id: id.into(),
            employee_id: employee_id.into(),
            leave_type,
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            days_count: days,
            reason: None,
            status,
        }
    }

    fn make_dataset() -> (Vec<Employee>, Vec<LeaveRequest>) {
        let employees = vec![
            make_employee("e1", "Ada", "Lovelace", "Engineering"),
            make_employee("e2", "Grace", "Hopper", "Research"),
        ];
        let leaves = vec![
            make_leave("l1", "e1", LeaveType::Vacation, "2024-12-20", "2024-12-26", 5.0, LeaveStatus::Approved),
            make_leave("l2", "e2", LeaveType::Sick, "2024-12-01", "2024-12-10", 8.0, LeaveStatus::Pending),
            make_leave("l3", "e1", LeaveType::Casual, "2024-12-27", "2024-12-27", 1.0, LeaveStatus::Rejected),
        ];
        (employees, leaves)
    }

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let (employees, leaves) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let result = filter_leaves(&leaves, &LeaveFilter::default(), &lookups);
        assert_eq!(result, vec![0, 1, 2]);
    }

    #[test]
    fn test_date_window_keeps_straddling_leave() {
        let (employees, leaves) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        // l1 runs 12-20..12-26 and straddles the window start; l2 ends
        // before the window and is excluded.
        let filter = LeaveFilter {
            date_from: Some("2024-12-25".parse().unwrap()),
            date_to: Some("2024-12-30".parse().unwrap()),
            ..Default::default()
        };
        let result = filter_leaves(&leaves, &filter, &lookups);
        assert_eq!(result, vec![0, 2]);
    }

    #[test]
    fn test_leave_type_dimension() {
        let (employees, leaves) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let mut filter = LeaveFilter::default();
        filter.toggle_leave_type(LeaveType::Sick);
        filter.toggle_leave_type(LeaveType::Casual);
        let result = filter_leaves(&leaves, &filter, &lookups);
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_duration_dimension_classifies_day_count() {
        let (employees, leaves) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let mut filter = LeaveFilter::default();
        filter.toggle_duration(LeaveDuration::Medium);
        let result = filter_leaves(&leaves, &filter, &lookups);
        assert_eq!(result, vec![0]);

        let mut filter = LeaveFilter::default();
        filter.toggle_duration(LeaveDuration::Short);
        filter.toggle_duration(LeaveDuration::Long);
        let result = filter_leaves(&leaves, &filter, &lookups);
        assert_eq!(result, vec![1, 2]);
    }

    #[test]
    fn test_search_covers_reason_and_dates() {
        let (employees, mut leaves) = make_dataset();
        leaves[2].reason = Some("Moving house".into());
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let filter = LeaveFilter {
            search: "moving".into(),
            ..Default::default()
        };
        assert_eq!(filter_leaves(&leaves, &filter, &lookups), vec![2]);

        let filter = LeaveFilter {
            search: "2024-12-10".into(),
            ..Default::default()
        };
        assert_eq!(filter_leaves(&leaves, &filter, &lookups), vec![1]);
    }

    #[test]
    fn test_status_and_department_combined() {
        let (employees, leaves) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let mut filter = LeaveFilter::default();
        filter.toggle_status(LeaveStatus::Approved);
        filter.toggle_status(LeaveStatus::Rejected);
        filter.toggle_department("Engineering".into());
        let result = filter_leaves(&leaves, &filter, &lookups);
        assert_eq!(result, vec![0, 2]);
    }

    #[test]
    fn test_refiltering_selection_is_idempotent() {
        let (employees, leaves) = make_dataset();
        let dir = EmployeeDirectory::new(&employees);
        let jobs = JobCatalog::default();
        let lookups = Lookups::new(&dir, &jobs);

        let mut filter = LeaveFilter::default();
        filter.toggle_status(LeaveStatus::Approved);
        let first = filter_leaves(&leaves, &filter, &lookups);

        let selected: Vec<LeaveRequest> = first.iter().map(|&i| leaves[i].clone()).collect();
        let second = filter_leaves(&selected, &filter, &lookups);
        assert_eq!(second, (0..selected.len()).collect::<Vec<_>>());
    }
}
