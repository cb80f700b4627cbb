// StaffSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies (Atlas Layer Rule: Core depends on std,
// serde and chrono only).
//
// These types mirror the HR backend's JSON wire shapes. Deserialisation
// is deliberately tolerant: unrecognised categorical values collapse to
// the `Unknown` variant and optional fields default, so one incomplete
// record never poisons a snapshot.

use crate::util::error::CriteriaError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Employee
// =============================================================================

/// An employee master record.
///
/// Doubles as the resolution source for the indirect name and department
/// dimensions on attendance and leave records (see `core::resolve`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Backend-assigned unique ID, referenced by attendance and leave
    /// records as `employee_id`.
    pub id: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// May be empty on incomplete records. An empty department is kept
    /// as-is (it is not the same as an unresolvable employee).
    #[serde(default)]
    pub department: String,

    /// Job position / title within the department.
    #[serde(default)]
    pub position: String,

    /// Contract category ("full-time", "part-time", "contract").
    /// Free-form: StaffSift displays and exports it, never branches
    /// on it.
    #[serde(default)]
    pub employment_type: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub join_date: Option<NaiveDate>,

    #[serde(default)]
    pub salary: Option<f64>,

    #[serde(default)]
    pub status: EmploymentStatus,
}

impl Employee {
    /// Display name used everywhere an employee is shown or searched.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Employment lifecycle state of an `Employee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentStatus {
    Active,
    Inactive,
    Terminated,

    /// Unrecognised wire value (or missing field). Never matches an
    /// explicit status selection but survives deserialisation.
    #[default]
    #[serde(other)]
    Unknown,
}

impl EmploymentStatus {
    /// Canonical lowercase label, matching the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "active",
            EmploymentStatus::Inactive => "inactive",
            EmploymentStatus::Terminated => "terminated",
            EmploymentStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EmploymentStatus {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(EmploymentStatus::Active),
            "inactive" => Ok(EmploymentStatus::Inactive),
            "terminated" => Ok(EmploymentStatus::Terminated),
            other => Err(CriteriaError::unrecognised(
                "employment status",
                other,
                "active, inactive, terminated",
            )),
        }
    }
}

// =============================================================================
// Attendance
// =============================================================================

/// A single day's attendance entry for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,

    /// References `Employee::id`. Resolution may fail for stale records;
    /// display falls back to the "Unknown" sentinel.
    pub employee_id: String,

    pub date: NaiveDate,

    /// Raw clock-in time as recorded, "HH:MM". Kept as a string: the
    /// punctuality classifier parses it leniently and a malformed value
    /// simply has no category (see `core::classify`).
    #[serde(default)]
    pub check_in: Option<String>,

    /// Raw clock-out time, "HH:MM".
    #[serde(default)]
    pub check_out: Option<String>,

    #[serde(default)]
    pub status: AttendanceStatus,

    #[serde(default)]
    pub notes: Option<String>,
}

/// Recorded attendance outcome for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    HalfDay,
    OnLeave,

    #[default]
    #[serde(other)]
    Unknown,
}

impl AttendanceStatus {
    /// Canonical lowercase label, matching the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::HalfDay => "half-day",
            AttendanceStatus::OnLeave => "on-leave",
            AttendanceStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AttendanceStatus {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "half-day" => Ok(AttendanceStatus::HalfDay),
            "on-leave" => Ok(AttendanceStatus::OnLeave),
            other => Err(CriteriaError::unrecognised(
                "attendance status",
                other,
                "present, absent, late, half-day, on-leave",
            )),
        }
    }
}

// =============================================================================
// Leave
// =============================================================================

/// A leave request spanning an inclusive date interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,

    /// References `Employee::id`.
    pub employee_id: String,

    #[serde(default)]
    pub leave_type: LeaveType,

    /// First day of leave (inclusive).
    pub start_date: NaiveDate,

    /// Last day of leave (inclusive). The backend guarantees
    /// `start_date <= end_date`; filtering does not re-check it.
    pub end_date: NaiveDate,

    /// Requested length in days. Fractional values are allowed
    /// (half-day leave).
    pub days_count: f64,

    #[serde(default)]
    pub reason: Option<String>,

    #[serde(default)]
    pub status: LeaveStatus,
}

/// Category of leave being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveType {
    Casual,
    Sick,
    Vacation,
    Personal,
    Maternity,
    Paternity,

    #[default]
    #[serde(other)]
    Unknown,
}

impl LeaveType {
    /// Canonical lowercase label, matching the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Casual => "casual",
            LeaveType::Sick => "sick",
            LeaveType::Vacation => "vacation",
            LeaveType::Personal => "personal",
            LeaveType::Maternity => "maternity",
            LeaveType::Paternity => "paternity",
            LeaveType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LeaveType {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(LeaveType::Casual),
            "sick" => Ok(LeaveType::Sick),
            "vacation" => Ok(LeaveType::Vacation),
            "personal" => Ok(LeaveType::Personal),
            "maternity" => Ok(LeaveType::Maternity),
            "paternity" => Ok(LeaveType::Paternity),
            other => Err(CriteriaError::unrecognised(
                "leave type",
                other,
                "casual, sick, vacation, personal, maternity, paternity",
            )),
        }
    }
}

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,

    #[default]
    #[serde(other)]
    Unknown,
}

impl LeaveStatus {
    /// Canonical lowercase label, matching the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LeaveStatus {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            other => Err(CriteriaError::unrecognised(
                "leave status",
                other,
                "pending, approved, rejected",
            )),
        }
    }
}

// =============================================================================
// Recruitment
// =============================================================================

/// A candidate in the recruitment pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,

    /// References `JobOpening::id`. Resolution may fail for archived
    /// jobs; display falls back to the "Unknown" sentinel.
    pub job_id: String,

    pub full_name: String,
    pub email: String,

    /// Kept as entered. Searched without case folding (digits and
    /// punctuation only).
    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub current_company: Option<String>,

    /// Years of professional experience. Fractional values allowed.
    pub experience_years: f64,

    /// Expected annual salary in the backend's currency unit.
    pub expected_salary: f64,

    #[serde(default)]
    pub stage: CandidateStage,
}

/// Pipeline stage of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateStage {
    Screening,
    Interview,
    Technical,
    Offer,
    Rejected,
    Hired,

    #[default]
    #[serde(other)]
    Unknown,
}

impl CandidateStage {
    /// Canonical lowercase label, matching the wire form.
    pub fn label(&self) -> &'static str {
        match self {
            CandidateStage::Screening => "screening",
            CandidateStage::Interview => "interview",
            CandidateStage::Technical => "technical",
            CandidateStage::Offer => "offer",
            CandidateStage::Rejected => "rejected",
            CandidateStage::Hired => "hired",
            CandidateStage::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CandidateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CandidateStage {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "screening" => Ok(CandidateStage::Screening),
            "interview" => Ok(CandidateStage::Interview),
            "technical" => Ok(CandidateStage::Technical),
            "offer" => Ok(CandidateStage::Offer),
            "rejected" => Ok(CandidateStage::Rejected),
            "hired" => Ok(CandidateStage::Hired),
            other => Err(CriteriaError::unrecognised(
                "candidate stage",
                other,
                "screening, interview, technical, offer, rejected, hired",
            )),
        }
    }
}

/// A job opening candidates apply against. Only the fields StaffSift
/// resolves or displays are modelled; the rest of the backend's job
/// shape is ignored on deserialisation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobOpening {
    pub id: String,
    pub title: String,

    #[serde(default)]
    pub department: Option<String>,

    /// "open" or an archival state. Not an enum: StaffSift never
    /// branches on it beyond display.
    #[serde(default)]
    pub status: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_full_name() {
        let emp = Employee {
            id: "e1".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            department: "Engineering".into(),
            position: "Engineer".into(),
            employment_type: Some("full-time".into()),
            phone: None,
            join_date: None,
            salary: None,
            status: EmploymentStatus::Active,
        };
        assert_eq!(emp.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_status_labels_round_trip_from_str() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::HalfDay,
            AttendanceStatus::OnLeave,
        ] {
            assert_eq!(status.label().parse::<AttendanceStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_from_str_rejects_unrecognised_value() {
        assert!("weekend".parse::<AttendanceStatus>().is_err());
        assert!("sabbatical".parse::<LeaveType>().is_err());
        assert!("onboarding".parse::<CandidateStage>().is_err());
    }

    #[test]
    fn test_from_str_is_case_insensitive_and_trimmed() {
        assert_eq!(
            " Half-Day ".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::HalfDay
        );
        assert_eq!("SICK".parse::<LeaveType>().unwrap(), LeaveType::Sick);
    }

    #[test]
    fn test_unrecognised_wire_status_becomes_unknown() {
        let json = r#"{
            "id": "a1",
            "employee_id": "e1",
            "date": "2024-12-05",
            "check_in": "08:30",
            "status": "jury-duty"
        }"#;
        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, AttendanceStatus::Unknown);
        assert_eq!(record.check_in.as_deref(), Some("08:30"));
        assert!(record.check_out.is_none());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{
            "id": "l1",
            "employee_id": "e1",
            "start_date": "2024-12-20",
            "end_date": "2024-12-26",
            "days_count": 5
        }"#;
        let leave: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(leave.leave_type, LeaveType::Unknown);
        assert_eq!(leave.status, LeaveStatus::Unknown);
        assert!(leave.reason.is_none());
        assert_eq!(leave.days_count, 5.0);
    }

    #[test]
    fn test_extra_wire_fields_are_ignored() {
        let json = r#"{
            "id": "j1",
            "title": "Senior Engineer",
            "department": "Engineering",
            "status": "open",
            "description": "unused",
            "salary_range": "unused"
        }"#;
        let job: JobOpening = serde_json::from_str(json).unwrap();
        assert_eq!(job.title, "Senior Engineer");
        assert_eq!(job.status.as_deref(), Some("open"));
    }
}
