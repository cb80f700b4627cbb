// StaffSift - core/filter/candidate.rs
//
// Criteria and predicate chain for recruitment candidates. The job
// title dimension works on resolved titles (not ids) so a selection
// survives job re-posting; experience and salary band dimensions
// classify the numeric fields on the fly.

use crate::core::classify::{experience_band, salary_band, ExperienceBand, SalaryBand};
use crate::core::filter::{matches_search, matching_indices, toggle, Lookups, Searchable};
use crate::core::model::{Candidate, CandidateStage};
use std::collections::HashSet;

/// Complete candidate criteria. All fields are AND-combined when
/// applied; an empty set leaves that dimension unconstrained.
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    /// Substring text search (case-insensitive). Empty = no filter.
    pub search: String,

    /// Resolved job titles to include (empty = all). "Unknown" selects
    /// candidates whose job no longer exists.
    pub job_titles: HashSet<String>,

    /// Pipeline stages to include (empty = all).
    pub stages: HashSet<CandidateStage>,

    /// Experience bands to include (empty = all). A candidate with a
    /// degenerate years value sits outside every band and never matches
    /// a non-empty selection.
    pub experience_bands: HashSet<ExperienceBand>,

    /// Expected-salary bands to include (empty = all).
    pub salary_bands: HashSet<SalaryBand>,
}

impl CandidateFilter {
    /// Returns true if no criteria are active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.job_titles.is_empty()
            && self.stages.is_empty()
            && self.experience_bands.is_empty()
            && self.salary_bands.is_empty()
    }

    pub fn toggle_job_title(&mut self, title: String) {
        toggle(&mut self.job_titles, title);
    }

    pub fn toggle_stage(&mut self, stage: CandidateStage) {
        toggle(&mut self.stages, stage);
    }

    pub fn toggle_experience_band(&mut self, band: ExperienceBand) {
        toggle(&mut self.experience_bands, band);
    }

    pub fn toggle_salary_band(&mut self, band: SalaryBand) {
        toggle(&mut self.salary_bands, band);
    }
}

impl Searchable for Candidate {
    fn searchable_fields(&self, lookups: &Lookups<'_>, out: &mut Vec<String>) {
        out.push(self.full_name.clone());
        out.push(self.email.clone());
        out.push(self.phone.clone());
        if let Some(company) = &self.current_company {
            out.push(company.clone());
        }
        out.push(lookups.jobs.display_title(&self.job_id));
        out.push(self.stage.label().to_string());
        out.push(self.experience_years.to_string());
        out.push(self.expected_salary.to_string());
    }
}

/// Apply candidate criteria, returning indices of matching candidates.
///
/// Indices point into the original slice, in input order.
pub fn filter_candidates(
    records: &[Candidate],
    filter: &CandidateFilter,
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

/// Check if a single candidate matches all active criteria.
fn matches_all(
    record: &Candidate,
    filter: &CandidateFilter,
    lookups: &Lookups<'_>,
    query_lower: &str,
) -> bool {
    // Text search
    if !query_lower.is_empty() && !matches_search(record, lookups, query_lower) {
        return false;
    }

    // Job title filter (resolved, sentinel included)
    if !filter.job_titles.is_empty() {
        let title = lookups.jobs.display_title(&record.job_id);
        if !filter.job_titles.contains(&title) {
            return false;
        }
    }

    // Experience band filter (no band never matches)
    if !filter.experience_bands.is_empty() {
        match experience_band(record.experience_years) {
            Some(band) if filter.experience_bands.contains(&band) => {}
            _ => return false,
        }
    }

    // Salary band filter (no band never matches)
    if !filter.salary_bands.is_empty() {
        match salary_band(record.expected_salary) {
            Some(band) if filter.salary_bands.contains(&band) => {}
            _ => return false,
        }
    }

    // Stage filter
    if !filter.stages.is_empty() && !filter.stages.contains(&record.stage) {
        return false;
    }

    true
}
