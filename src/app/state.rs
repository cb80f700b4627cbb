// StaffSift - app/state.rs
//
// Application state: the loaded dataset, one criteria struct per
// screen, and the matching visible-index vectors. The core owns no
// state; this is the single owner of criteria transitions.
//
// Contract: mutate a filter (directly or via its toggle_* methods),
// then call the matching refresh_*(). Refresh re-filters the full
// collection synchronously; there is no caching or incremental state.

use crate::app::loader::{Dataset, LoadReport};
use crate::core::filter::{
    filter_attendance, filter_candidates, filter_employees, filter_leaves, AttendanceFilter,
    CandidateFilter, EmployeeFilter, LeaveFilter,
};

/// Central state for one loaded dataset.
#[derive(Debug, Default)]
pub struct AppState {
    /// The loaded collections and their lookup indexes. Read-only.
    pub dataset: Dataset,

    /// Current criteria, one per screen.
    pub attendance_filter: AttendanceFilter,
    pub leave_filter: LeaveFilter,
    pub candidate_filter: CandidateFilter,
    pub employee_filter: EmployeeFilter,

    /// Indices of records matching the current criteria (into the
    /// corresponding `dataset` collection, in collection order).
    pub visible_attendance: Vec<usize>,
    pub visible_leaves: Vec<usize>,
    pub visible_candidates: Vec<usize>,
    pub visible_employees: Vec<usize>,

    /// Non-fatal warnings accumulated while loading the dataset.
    pub warnings: Vec<String>,
}

impl AppState {
    /// Build state over a loaded dataset, with every record visible.
    pub fn new(dataset: Dataset) -> Self {
        let mut state = Self {
            dataset,
            ..Default::default()
        };
        state.refresh_all();
        state
    }

    /// Build state and derive user-facing warnings from load reports.
    pub fn with_reports(dataset: Dataset, reports: &[LoadReport]) -> Self {
        let mut state = Self::new(dataset);
        for report in reports {
            if report.missing {
                state.warnings.push(format!(
                    "{} snapshot missing; collection is empty",
                    report.collection
                ));
            } else if report.skipped > 0 {
                state.warnings.push(format!(
                    "{}: skipped {} malformed record(s), loaded {}",
                    report.collection, report.skipped, report.loaded
                ));
            }
        }
        state
    }

    /// Recompute the attendance view from the current criteria.
    pub fn refresh_attendance(&mut self) {
        self.visible_attendance = filter_attendance(
            &self.dataset.attendance,
            &self.attendance_filter,
            &self.dataset.lookups(),
        );
    }

    /// Recompute the leave view from the current criteria.
    pub fn refresh_leaves(&mut self) {
        self.visible_leaves = filter_leaves(
            &self.dataset.leaves,
            &self.leave_filter,
            &self.dataset.lookups(),
        );
    }

    /// Recompute the candidate view from the current criteria.
    pub fn refresh_candidates(&mut self) {
        self.visible_candidates = filter_candidates(
            &self.dataset.candidates,
            &self.candidate_filter,
            &self.dataset.lookups(),
        );
    }

    /// Recompute the roster view from the current criteria.
    pub fn refresh_employees(&mut self) {
        self.visible_employees = filter_employees(
            &self.dataset.employees,
            &self.employee_filter,
            &self.dataset.lookups(),
        );
    }

    /// Recompute every view.
    pub fn refresh_all(&mut self) {
        self.refresh_attendance();
        self.refresh_leaves();
        self.refresh_candidates();
        self.refresh_employees();
    }

    /// Reset the attendance criteria and view.
    pub fn clear_attendance_filter(&mut self) {
        self.attendance_filter = AttendanceFilter::default();
        self.refresh_attendance();
    }

    /// Reset the leave criteria and view.
    pub fn clear_leave_filter(&mut self) {
        self.leave_filter = LeaveFilter::default();
        self.refresh_leaves();
    }

    /// Reset the candidate criteria and view.
    pub fn clear_candidate_filter(&mut self) {
        self.candidate_filter = CandidateFilter::default();
        self.refresh_candidates();
    }

    /// Reset the roster criteria and view.
    pub fn clear_employee_filter(&mut self) {
        self.employee_filter = EmployeeFilter::default();
        self.refresh_employees();
    }
}
