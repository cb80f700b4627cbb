// StaffSift - core/export.rs
//
// CSV and JSON export of a filtered record view.
// Core layer: writes to any Write target. Callers own the output
// destination and add path context to errors; indices must come from a
// filter pass over the same slice.

use crate::core::model::{AttendanceRecord, Candidate, Employee, LeaveRequest};
use crate::core::resolve::{EmployeeResolver, JobCatalog};
use crate::util::error::ExportError;
use serde::Serialize;
use std::io::Write;

/// Reject exports larger than the configured cap.
fn check_cap(count: usize, max: usize) -> Result<(), ExportError> {
    if count > max {
        return Err(ExportError::TooManyRecords { count, max });
    }
    Ok(())
}

/// Export the selected records of any collection as a JSON array.
///
/// Serialises the wire shapes unchanged, so a JSON export round-trips
/// through the loader.
pub fn export_json<T: Serialize, W: Write>(
    records: &[T],
    indices: &[usize],
    writer: W,
    max_records: usize,
) -> Result<usize, ExportError> {
    check_cap(indices.len(), max_records)?;

    let selected: Vec<&T> = indices.iter().map(|&idx| &records[idx]).collect();
    serde_json::to_writer_pretty(writer, &selected)
        .map_err(|e| ExportError::Json { source: e })?;
    Ok(selected.len())
}

/// Export selected attendance records to CSV with the employee name
/// resolved.
///
/// Columns: Employee, Date, Check In, Check Out, Status
pub fn export_attendance_csv<W: Write>(
    records: &[AttendanceRecord],
    indices: &[usize],
    resolver: &dyn EmployeeResolver,
    writer: W,
    max_records: usize,
) -> Result<usize, ExportError> {
    check_cap(indices.len(), max_records)?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Employee", "Date", "Check In", "Check Out", "Status"])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for &idx in indices {
        let record = &records[idx];
        csv_writer
            .write_record([
                resolver.display_name(&record.employee_id).as_str(),
                &record.date.to_string(),
                record.check_in.as_deref().unwrap_or(""),
                record.check_out.as_deref().unwrap_or(""),
                record.status.label(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export selected leave requests to CSV with the employee name
/// resolved.
///
/// Columns: Employee, Type, Start Date, End Date, Days, Status, Reason
pub fn export_leaves_csv<W: Write>(
    records: &[LeaveRequest],
    indices: &[usize],
    resolver: &dyn EmployeeResolver,
    writer: W,
    max_records: usize,
) -> Result<usize, ExportError> {
    check_cap(indices.len(), max_records)?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Employee",
            "Type",
            "Start Date",
            "End Date",
            "Days",
            "Status",
            "Reason",
        ])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for &idx in indices {
        let record = &records[idx];
        csv_writer
            .write_record([
                resolver.display_name(&record.employee_id).as_str(),
                record.leave_type.label(),
                &record.start_date.to_string(),
                &record.end_date.to_string(),
                &record.days_count.to_string(),
                record.status.label(),
                record.reason.as_deref().unwrap_or(""),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export selected candidates to CSV with the job title resolved.
///
/// Columns: Name, Job Title, Email, Phone, Company, Experience (years),
/// Expected Salary, Stage
pub fn export_candidates_csv<W: Write>(
    records: &[Candidate],
    indices: &[usize],
    jobs: &JobCatalog,
    writer: W,
    max_records: usize,
) -> Result<usize, ExportError> {
    check_cap(indices.len(), max_records)?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Name",
            "Job Title",
            "Email",
            "Phone",
            "Company",
            "Experience (years)",
            "Expected Salary",
            "Stage",
        ])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for &idx in indices {
        let record = &records[idx];
        csv_writer
            .write_record([
                record.full_name.as_str(),
                &jobs.display_title(&record.job_id),
                &record.email,
                &record.phone,
                record.current_company.as_deref().unwrap_or(""),
                &record.experience_years.to_string(),
                &record.expected_salary.to_string(),
                record.stage.label(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export selected employees to CSV.
///
/// Columns: First Name, Last Name, Email, Department, Position,
/// Employment Type, Join Date, Status
pub fn export_employees_csv<W: Write>(
    records: &[Employee],
    indices: &[usize],
    writer: W,
    max_records: usize,
) -> Result<usize, ExportError> {
    check_cap(indices.len(), max_records)?;

    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "First Name",
            "Last Name",
            "Email",
            "Department",
            "Position",
            "Employment Type",
            "Join Date",
            "Status",
        ])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for &idx in indices {
        let record = &records[idx];
        let join_date = record
            .join_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        csv_writer
            .write_record([
                record.first_name.as_str(),
                &record.last_name,
                &record.email,
                &record.department,
                &record.position,
                record.employment_type.as_deref().unwrap_or(""),
                &join_date,
                record.status.label(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{AttendanceStatus, CandidateStage, EmploymentStatus, JobOpening};
    use crate::core::resolve::EmployeeDirectory;

    fn make_employee(id: &str, first: &str, last: &str, dept: &str) -> Employee {
        Employee {
            id: id.into(),
            first_name: first.into(),
            last_name: last.into(),
            email: format!("{}@example.com", first.to_lowercase()),
            department: dept.into(),
            position: "Engineer".into(),
            employment_type: Some("full-time".into()),
            phone: None,
            join_date: Some("2020-03-01".parse().unwrap()),
            salary: Some(90_000.0),
            status: EmploymentStatus::Active,
        }
    }

    fn make_record(id: &str, employee_id: &str, date: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.into(),
            employee_id: employee_id.into(),
            date: date.parse().unwrap(),
            check_in: Some("08:30".into()),
            check_out: Some("17:00".into()),
            status: AttendanceStatus::Present,
            notes: None,
        }
    }

    #[test]
    fn test_attendance_csv_resolves_employee_name() {
        let employees = vec![make_employee("e1", "Ada", "Lovelace", "Engineering")];
        let dir = EmployeeDirectory::new(&employees);
        let records = vec![make_record("a1", "e1", "2024-12-02")];

        let mut buf = Vec::new();
        let count = export_attendance_csv(&records, &[0], &dir, &mut buf, 1_000).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Employee,Date,Check In,Check Out,Status"));
        assert!(output.contains("Ada Lovelace,2024-12-02,08:30,17:00,present"));
    }

    #[test]
    fn test_attendance_csv_dangling_id_exports_sentinel() {
        let dir = EmployeeDirectory::default();
        let records = vec![make_record("a1", "ghost", "2024-12-02")];

        let mut buf = Vec::new();
        export_attendance_csv(&records, &[0], &dir, &mut buf, 1_000).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Unknown,2024-12-02"));
    }

    #[test]
    fn test_csv_exports_only_selected_indices_in_order() {
        let employees = vec![make_employee("e1", "Ada", "Lovelace", "Engineering")];
        let dir = EmployeeDirectory::new(&employees);
        let records = vec![
            make_record("a1", "e1", "2024-12-02"),
            make_record("a2", "e1", "2024-12-03"),
            make_record("a3", "e1", "2024-12-04"),
        ];

        let mut buf = Vec::new();
        let count = export_attendance_csv(&records, &[2, 0], &dir, &mut buf, 1_000).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("2024-12-04"));
        assert!(lines[2].contains("2024-12-02"));
    }

    #[test]
    fn test_candidates_csv_numeric_formatting() {
        let jobs = vec![JobOpening {
            id: "j1".into(),
            title: "Senior Engineer".into(),
            department: None,
            status: Some("open".into()),
        }];
        let catalog = JobCatalog::new(&jobs);
        let candidates = vec![Candidate {
            id: "c1".into(),
            job_id: "j1".into(),
            full_name: "Niklaus Wirth".into(),
            email: "nw@example.com".into(),
            phone: "+1-555-0100".into(),
            current_company: None,
            experience_years: 7.5,
            expected_salary: 150_000.0,
            stage: CandidateStage::Offer,
        }];

        let mut buf = Vec::new();
        export_candidates_csv(&candidates, &[0], &catalog, &mut buf, 1_000).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Senior Engineer"));
        assert!(output.contains("7.5"));
        assert!(output.contains("150000"));
    }

    #[test]
    fn test_employees_csv_headers_and_blanks() {
        let mut employee = make_employee("e1", "Ada", "Lovelace", "Engineering");
        employee.employment_type = None;
        employee.join_date = None;

        let mut buf = Vec::new();
        export_employees_csv(&[employee], &[0], &mut buf, 1_000).unwrap();

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains(
            "First Name,Last Name,Email,Department,Position,Employment Type,Join Date,Status"
        ));
        assert!(output.contains("Ada,Lovelace,ada@example.com,Engineering,Engineer,,,active"));
    }

    #[test]
    fn test_json_export_selects_and_counts() {
        let employees = vec![
            make_employee("e1", "Ada", "Lovelace", "Engineering"),
            make_employee("e2", "Grace", "Hopper", "Research"),
        ];

        let mut buf = Vec::new();
        let count = export_json(&employees, &[1], &mut buf, 1_000).unwrap();
        assert_eq!(count, 1);

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Grace"));
        assert!(!output.contains("Ada"));
    }

    #[test]
    fn test_export_cap_is_enforced() {
        let employees = vec![
            make_employee("e1", "Ada", "Lovelace", "Engineering"),
            make_employee("e2", "Grace", "Hopper", "Research"),
        ];

        let mut buf = Vec::new();
        let result = export_json(&employees, &[0, 1], &mut buf, 1);
        assert!(matches!(
            result,
            Err(ExportError::TooManyRecords { count: 2, max: 1 })
        ));
    }
}
