// StaffSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (one subcommand per record collection)
// 2. Logging initialisation (debug mode support)
// 3. Dataset loading and filter construction from flags
// 4. Table rendering or export of the filtered view

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use staffsift::app::loader::Dataset;
use staffsift::app::session::{self, SessionData};
use staffsift::app::state::AppState;
use staffsift::core::classify::{ExperienceBand, LeaveDuration, Punctuality, SalaryBand};
use staffsift::core::export;
use staffsift::core::filter::{AttendanceFilter, CandidateFilter, EmployeeFilter, LeaveFilter};
use staffsift::core::model::{
    AttendanceStatus, CandidateStage, EmploymentStatus, LeaveStatus, LeaveType,
};
use staffsift::core::resolve::EmployeeResolver;
use staffsift::platform::config::{load_config, AppConfig, PlatformPaths};
use staffsift::util;
use staffsift::util::constants;
use staffsift::util::error::{CriteriaError, ExportError, Result, StaffSiftError};

// =============================================================================
// CLI definition
// =============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "staffsift",
    version,
    about = "Filter, inspect and export HR dataset snapshots"
)]
struct Cli {
    /// Directory holding the dataset snapshots (employees.json, attendance.json, ...).
    /// Defaults to the directory remembered from the last run, then the
    /// current directory.
    #[arg(long = "data-dir", global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug logging to stderr.
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List and filter attendance records.
    Attendance(AttendanceArgs),

    /// List and filter leave requests.
    Leaves(LeavesArgs),

    /// List and filter recruitment candidates.
    Candidates(CandidatesArgs),

    /// List and filter the employee roster.
    Employees(EmployeesArgs),

    /// Store the backend URL and bearer token for later tooling.
    Login(LoginArgs),

    /// Clear the stored bearer token.
    Logout,
}

#[derive(Args, Debug)]
struct AttendanceArgs {
    /// Free-text search over employee name, date, status and check times.
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Employee id to include; repeat for several.
    #[arg(long = "employee", value_name = "ID")]
    employees: Vec<String>,

    /// Department name to include; repeat for several.
    #[arg(long = "department", value_name = "NAME")]
    departments: Vec<String>,

    /// Attendance status to include (present, absent, late, half-day, on-leave).
    #[arg(long = "status", value_parser = AttendanceStatus::from_str, value_name = "STATUS")]
    statuses: Vec<AttendanceStatus>,

    /// Check-in punctuality to include (early, on-time, late).
    #[arg(long = "punctuality", value_parser = Punctuality::from_str, value_name = "CATEGORY")]
    punctuality: Vec<Punctuality>,

    /// Earliest date to include, YYYY-MM-DD (inclusive).
    #[arg(long, value_parser = parse_iso_date, value_name = "DATE")]
    from: Option<NaiveDate>,

    /// Latest date to include, YYYY-MM-DD (inclusive).
    #[arg(long, value_parser = parse_iso_date, value_name = "DATE")]
    to: Option<NaiveDate>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct LeavesArgs {
    /// Free-text search over employee name, leave type, status, dates and reason.
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Employee id to include; repeat for several.
    #[arg(long = "employee", value_name = "ID")]
    employees: Vec<String>,

    /// Department name to include; repeat for several.
    #[arg(long = "department", value_name = "NAME")]
    departments: Vec<String>,

    /// Leave type to include (casual, sick, vacation, personal, maternity, paternity).
    #[arg(long = "leave-type", value_parser = LeaveType::from_str, value_name = "TYPE")]
    leave_types: Vec<LeaveType>,

    /// Request status to include (pending, approved, rejected).
    #[arg(long = "status", value_parser = LeaveStatus::from_str, value_name = "STATUS")]
    statuses: Vec<LeaveStatus>,

    /// Duration category to include (short, medium, long).
    #[arg(long = "duration", value_parser = LeaveDuration::from_str, value_name = "CATEGORY")]
    durations: Vec<LeaveDuration>,

    /// Keep leaves overlapping the range starting here, YYYY-MM-DD (inclusive).
    #[arg(long, value_parser = parse_iso_date, value_name = "DATE")]
    from: Option<NaiveDate>,

    /// Keep leaves overlapping the range ending here, YYYY-MM-DD (inclusive).
    #[arg(long, value_parser = parse_iso_date, value_name = "DATE")]
    to: Option<NaiveDate>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct CandidatesArgs {
    /// Free-text search over name, contact details, company, job title and stage.
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Job title to include (resolved from the job opening); repeat for several.
    #[arg(long = "job-title", value_name = "TITLE")]
    job_titles: Vec<String>,

    /// Pipeline stage to include (screening, interview, technical, offer, rejected, hired).
    #[arg(long = "stage", value_parser = CandidateStage::from_str, value_name = "STAGE")]
    stages: Vec<CandidateStage>,

    /// Experience band to include (0-2 years, 2-5 years, 5-10 years, 10+ years).
    #[arg(long = "experience", value_parser = ExperienceBand::from_str, value_name = "BAND")]
    experience_bands: Vec<ExperienceBand>,

    /// Salary band to include (< $50k, $50k - $80k, $80k - $120k, $120k+).
    #[arg(long = "salary", value_parser = SalaryBand::from_str, value_name = "BAND")]
    salary_bands: Vec<SalaryBand>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct EmployeesArgs {
    /// Free-text search over name, email and department.
    #[arg(short, long, value_name = "TEXT")]
    search: Option<String>,

    /// Department name to include; repeat for several.
    #[arg(long = "department", value_name = "NAME")]
    departments: Vec<String>,

    /// Employment status to include (active, inactive, terminated).
    #[arg(long = "status", value_parser = EmploymentStatus::from_str, value_name = "STATUS")]
    statuses: Vec<EmploymentStatus>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct LoginArgs {
    /// Base URL of the HR backend the snapshots came from.
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// Bearer token to store. StaffSift never sends it anywhere itself.
    #[arg(long, value_name = "TOKEN")]
    token: String,
}

/// Output options shared by every list subcommand.
#[derive(Args, Debug)]
struct OutputArgs {
    /// Write the filtered view in this format instead of printing a table.
    #[arg(long = "export", value_enum, value_name = "FORMAT")]
    format: Option<ExportFormat>,

    /// Destination file for --export; stdout when omitted.
    #[arg(long, value_name = "FILE", requires = "format")]
    out: Option<PathBuf>,

    /// Maximum number of table rows to display.
    #[arg(long, default_value_t = constants::DEFAULT_ROW_LIMIT, value_name = "N")]
    limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    /// Comma-separated values with the same columns as the table.
    Csv,
    /// Pretty-printed JSON array of the selected records.
    Json,
}

/// Parse an inclusive date bound in ISO `YYYY-MM-DD` form.
fn parse_iso_date(value: &str) -> std::result::Result<NaiveDate, CriteriaError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| CriteriaError::InvalidDate {
        value: value.to_owned(),
        source: e,
    })
}

// =============================================================================
// Entry point
// =============================================================================

fn main() {
    let cli = Cli::parse();

    // Config is read before logging is up, so its warnings are collected
    // and emitted right after initialisation.
    let paths = PlatformPaths::resolve();
    let (config, config_warnings) = load_config(&paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::debug!(
        version = constants::APP_VERSION,
        "{} starting",
        constants::APP_NAME
    );
    for warning in &config_warnings {
        tracing::warn!("{warning}");
    }

    if let Err(e) = run(cli, &paths, &config) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, paths: &PlatformPaths, config: &AppConfig) -> Result<()> {
    match cli.command {
        Command::Attendance(args) => {
            let mut state = load_state(cli.data_dir.as_deref(), paths, config)?;
            cmd_attendance(args, &mut state, config)
        }
        Command::Leaves(args) => {
            let mut state = load_state(cli.data_dir.as_deref(), paths, config)?;
            cmd_leaves(args, &mut state, config)
        }
        Command::Candidates(args) => {
            let mut state = load_state(cli.data_dir.as_deref(), paths, config)?;
            cmd_candidates(args, &mut state, config)
        }
        Command::Employees(args) => {
            let mut state = load_state(cli.data_dir.as_deref(), paths, config)?;
            cmd_employees(args, &mut state, config)
        }
        Command::Login(args) => cmd_login(args, paths),
        Command::Logout => cmd_logout(paths),
    }
}

// =============================================================================
// Dataset loading
// =============================================================================

/// Load the dataset for a list command.
///
/// Directory precedence: `--data-dir` flag, then the directory remembered
/// in the session, then the current directory. A directory given
/// explicitly is remembered for the next run.
fn load_state(
    flag_dir: Option<&Path>,
    paths: &PlatformPaths,
    config: &AppConfig,
) -> Result<AppState> {
    let session_file = session::session_path(&paths.data_dir);
    let mut session_data = session::load(&session_file).unwrap_or_else(SessionData::new);

    let dataset_dir = flag_dir
        .map(Path::to_path_buf)
        .or_else(|| session_data.dataset_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    tracing::debug!(dir = %dataset_dir.display(), "Loading dataset");
    let (dataset, reports) = Dataset::load_dir(&dataset_dir, config.max_records)?;

    if flag_dir.is_some() && session_data.dataset_dir.as_deref() != Some(&dataset_dir) {
        session_data.dataset_dir = Some(dataset_dir);
        // Remembering the directory is a convenience; a failure here must
        // not fail the command itself.
        if let Err(e) = session::save(&session_data, &session_file) {
            tracing::warn!(error = %e, "Failed to remember dataset directory");
        }
    }

    let state = AppState::with_reports(dataset, &reports);
    for warning in &state.warnings {
        tracing::warn!("{warning}");
    }
    Ok(state)
}

// =============================================================================
// List commands
// =============================================================================

fn cmd_attendance(args: AttendanceArgs, state: &mut AppState, config: &AppConfig) -> Result<()> {
    state.attendance_filter = AttendanceFilter {
        search: args.search.unwrap_or_default(),
        employees: args.employees.into_iter().collect(),
        departments: args.departments.into_iter().collect(),
        statuses: args.statuses.into_iter().collect(),
        date_from: args.from,
        date_to: args.to,
        punctuality: args.punctuality.into_iter().collect(),
    };
    state.refresh_attendance();

    if let Some(format) = args.output.format {
        let written = match format {
            ExportFormat::Csv => with_export_writer(args.output.out.as_deref(), |w| {
                export::export_attendance_csv(
                    &state.dataset.attendance,
                    &state.visible_attendance,
                    &state.dataset.directory,
                    w,
                    config.max_export_records,
                )
            })?,
            ExportFormat::Json => with_export_writer(args.output.out.as_deref(), |w| {
                export::export_json(
                    &state.dataset.attendance,
                    &state.visible_attendance,
                    w,
                    config.max_export_records,
                )
            })?,
        };
        report_export(written, args.output.out.as_deref());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = state
        .visible_attendance
        .iter()
        .take(args.output.limit)
        .map(|&idx| {
            let record = &state.dataset.attendance[idx];
            vec![
                state.dataset.directory.display_name(&record.employee_id),
                record.date.to_string(),
                record.check_in.clone().unwrap_or_default(),
                record.check_out.clone().unwrap_or_default(),
                record.status.label().to_owned(),
            ]
        })
        .collect();
    print_table(
        &["Employee", "Date", "Check In", "Check Out", "Status"],
        &rows,
    );
    print_footer(
        state.visible_attendance.len(),
        state.dataset.attendance.len(),
        args.output.limit,
    );
    Ok(())
}

fn cmd_leaves(args: LeavesArgs, state: &mut AppState, config: &AppConfig) -> Result<()> {
    state.leave_filter = LeaveFilter {
        search: args.search.unwrap_or_default(),
        employees: args.employees.into_iter().collect(),
        departments: args.departments.into_iter().collect(),
        leave_types: args.leave_types.into_iter().collect(),
        statuses: args.statuses.into_iter().collect(),
        date_from: args.from,
        date_to: args.to,
        durations: args.durations.into_iter().collect(),
    };
    state.refresh_leaves();

    if let Some(format) = args.output.format {
        let written = match format {
            ExportFormat::Csv => with_export_writer(args.output.out.as_deref(), |w| {
                export::export_leaves_csv(
                    &state.dataset.leaves,
                    &state.visible_leaves,
                    &state.dataset.directory,
                    w,
                    config.max_export_records,
                )
            })?,
            ExportFormat::Json => with_export_writer(args.output.out.as_deref(), |w| {
                export::export_json(
                    &state.dataset.leaves,
                    &state.visible_leaves,
                    w,
                    config.max_export_records,
                )
            })?,
        };
        report_export(written, args.output.out.as_deref());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = state
        .visible_leaves
        .iter()
        .take(args.output.limit)
        .map(|&idx| {
            let record = &state.dataset.leaves[idx];
            vec![
                state.dataset.directory.display_name(&record.employee_id),
                record.leave_type.label().to_owned(),
                record.start_date.to_string(),
                record.end_date.to_string(),
                record.days_count.to_string(),
                record.status.label().to_owned(),
            ]
        })
        .collect();
    print_table(
        &["Employee", "Type", "Start Date", "End Date", "Days", "Status"],
        &rows,
    );
    print_footer(
        state.visible_leaves.len(),
        state.dataset.leaves.len(),
        args.output.limit,
    );
    Ok(())
}

fn cmd_candidates(args: CandidatesArgs, state: &mut AppState, config: &AppConfig) -> Result<()> {
    state.candidate_filter = CandidateFilter {
        search: args.search.unwrap_or_default(),
        job_titles: args.job_titles.into_iter().collect(),
        stages: args.stages.into_iter().collect(),
        experience_bands: args.experience_bands.into_iter().collect(),
        salary_bands: args.salary_bands.into_iter().collect(),
    };
    state.refresh_candidates();

    if let Some(format) = args.output.format {
        let written = match format {
            ExportFormat::Csv => with_export_writer(args.output.out.as_deref(), |w| {
                export::export_candidates_csv(
                    &state.dataset.candidates,
                    &state.visible_candidates,
                    &state.dataset.catalog,
                    w,
                    config.max_export_records,
                )
            })?,
            ExportFormat::Json => with_export_writer(args.output.out.as_deref(), |w| {
                export::export_json(
                    &state.dataset.candidates,
                    &state.visible_candidates,
                    w,
                    config.max_export_records,
                )
            })?,
        };
        report_export(written, args.output.out.as_deref());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = state
        .visible_candidates
        .iter()
        .take(args.output.limit)
        .map(|&idx| {
            let record = &state.dataset.candidates[idx];
            vec![
                record.full_name.clone(),
                state.dataset.catalog.display_title(&record.job_id),
                record.stage.label().to_owned(),
                record.experience_years.to_string(),
                record.expected_salary.to_string(),
            ]
        })
        .collect();
    print_table(
        &["Name", "Job Title", "Stage", "Experience", "Expected Salary"],
        &rows,
    );
    print_footer(
        state.visible_candidates.len(),
        state.dataset.candidates.len(),
        args.output.limit,
    );
    Ok(())
}

fn cmd_employees(args: EmployeesArgs, state: &mut AppState, config: &AppConfig) -> Result<()> {
    state.employee_filter = EmployeeFilter {
        search: args.search.unwrap_or_default(),
        departments: args.departments.into_iter().collect(),
        statuses: args.statuses.into_iter().collect(),
    };
    state.refresh_employees();

    if let Some(format) = args.output.format {
        let written = match format {
            ExportFormat::Csv => with_export_writer(args.output.out.as_deref(), |w| {
                export::export_employees_csv(
                    &state.dataset.employees,
                    &state.visible_employees,
                    w,
                    config.max_export_records,
                )
            })?,
            ExportFormat::Json => with_export_writer(args.output.out.as_deref(), |w| {
                export::export_json(
                    &state.dataset.employees,
                    &state.visible_employees,
                    w,
                    config.max_export_records,
                )
            })?,
        };
        report_export(written, args.output.out.as_deref());
        return Ok(());
    }

    let rows: Vec<Vec<String>> = state
        .visible_employees
        .iter()
        .take(args.output.limit)
        .map(|&idx| {
            let record = &state.dataset.employees[idx];
            vec![
                record.full_name(),
                record.email.clone(),
                record.department.clone(),
                record.position.clone(),
                record.status.label().to_owned(),
            ]
        })
        .collect();
    print_table(
        &["Name", "Email", "Department", "Position", "Status"],
        &rows,
    );
    print_footer(
        state.visible_employees.len(),
        state.dataset.employees.len(),
        args.output.limit,
    );
    Ok(())
}

// =============================================================================
// Session commands
// =============================================================================

fn cmd_login(args: LoginArgs, paths: &PlatformPaths) -> Result<()> {
    let session_file = session::session_path(&paths.data_dir);
    let mut data = session::load(&session_file).unwrap_or_else(SessionData::new);

    if args.api_url.is_some() {
        data.api_base_url = args.api_url;
    }
    data.auth_token = Some(args.token);

    session::save(&data, &session_file)?;
    println!("Session stored at {}", session_file.display());
    Ok(())
}

fn cmd_logout(paths: &PlatformPaths) -> Result<()> {
    let session_file = session::session_path(&paths.data_dir);
    match session::load(&session_file) {
        Some(mut data) if data.auth_token.is_some() => {
            data.auth_token = None;
            session::save(&data, &session_file)?;
            println!("Signed out; stored token cleared.");
        }
        Some(_) => println!("No stored token; nothing to do."),
        None => println!("No session found; nothing to do."),
    }
    Ok(())
}

// =============================================================================
// Export plumbing
// =============================================================================

/// Run an export against a file or stdout.
///
/// Exporters write to any `Write` target; opening and flushing the
/// destination is this function's job.
fn with_export_writer<F>(out: Option<&Path>, f: F) -> Result<usize>
where
    F: FnOnce(&mut dyn Write) -> std::result::Result<usize, ExportError>,
{
    match out {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| StaffSiftError::Io {
                path: path.to_path_buf(),
                operation: "create",
                source: e,
            })?;
            let mut writer = io::BufWriter::new(file);
            let written = f(&mut writer)?;
            writer.flush().map_err(|e| StaffSiftError::Io {
                path: path.to_path_buf(),
                operation: "flush",
                source: e,
            })?;
            Ok(written)
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            let written = f(&mut lock)?;
            lock.flush().map_err(|e| StaffSiftError::Io {
                path: PathBuf::from("stdout"),
                operation: "flush",
                source: e,
            })?;
            Ok(written)
        }
    }
}

fn report_export(written: usize, out: Option<&Path>) {
    tracing::info!(records = written, "Export complete");
    if let Some(path) = out {
        println!("Exported {written} records to {}", path.display());
    }
}

// =============================================================================
// Table rendering
// =============================================================================

/// Print rows as space-aligned columns with a header and rule line.
fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(col, h)| format!("{:<width$}", h, width = widths[col]))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", header_line.trim_end());

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{rule}");

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(col, cell)| format!("{:<width$}", cell, width = widths[col]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

/// Counter footer. Always reports the full filtered count, even when the
/// table itself is truncated.
fn print_footer(visible: usize, total: usize, limit: usize) {
    println!();
    if visible > limit {
        println!("Showing {visible} of {total} records (first {limit} displayed)");
    } else {
        println!("Showing {visible} of {total} records");
    }
}
