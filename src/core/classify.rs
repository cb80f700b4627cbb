// StaffSift - core/classify.rs
//
// Derived-category classifiers. Each category is a pure function of a
// single record field with fixed thresholds, recomputed on every filter
// pass and never stored on the record. Classifiers that can face
// missing or malformed input return `Option`: a record with no category
// never matches an explicit selection on that dimension, but still
// passes when the dimension is inactive.

use crate::util::constants::{
    EXPERIENCE_BAND_EDGES_YEARS, MEDIUM_LEAVE_MAX_DAYS, ON_TIME_WINDOW_END_MINUTES,
    ON_TIME_WINDOW_START_MINUTES, SALARY_BAND_EDGES, SHORT_LEAVE_MAX_DAYS,
};
use crate::util::error::CriteriaError;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Punctuality (attendance check-in)
// =============================================================================

/// Time-of-day category of a check-in relative to the on-time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuality {
    /// Strictly before the window opens (before 08:45).
    Early,
    /// Inside the window, both ends inclusive of the nine o'clock edge
    /// (08:45 through 09:00).
    OnTime,
    /// Strictly after nine o'clock.
    Late,
}

impl Punctuality {
    pub fn label(&self) -> &'static str {
        match self {
            Punctuality::Early => "early",
            Punctuality::OnTime => "on-time",
            Punctuality::Late => "late",
        }
    }

    /// Every category, in display order.
    pub fn all() -> [Punctuality; 3] {
        [Punctuality::Early, Punctuality::OnTime, Punctuality::Late]
    }
}

impl fmt::Display for Punctuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Punctuality {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "early" => Ok(Punctuality::Early),
            "on-time" | "ontime" => Ok(Punctuality::OnTime),
            "late" => Ok(Punctuality::Late),
            other => Err(CriteriaError::unrecognised(
                "punctuality",
                other,
                "early, on-time, late",
            )),
        }
    }
}

/// Classify a raw "HH:MM" check-in value.
///
/// Returns `None` for a missing value or anything that does not parse
/// as a clock time. Trailing ":SS" parts are tolerated and ignored.
pub fn punctuality(check_in: Option<&str>) -> Option<Punctuality> {
    let minutes = minutes_since_midnight(check_in?)?;
    Some(if minutes < ON_TIME_WINDOW_START_MINUTES {
        Punctuality::Early
    } else if minutes <= ON_TIME_WINDOW_END_MINUTES {
        Punctuality::OnTime
    } else {
        Punctuality::Late
    })
}

/// Parse "HH:MM" into minutes since midnight. `None` when the value
/// does not look like a clock time (missing parts, non-numeric parts,
/// hours above 23 or minutes above 59).
fn minutes_since_midnight(raw: &str) -> Option<u32> {
    let mut parts = raw.split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

// =============================================================================
// Leave duration
// =============================================================================

/// Length category of a leave request's day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveDuration {
    /// Up to two days inclusive.
    Short,
    /// More than two, up to five days inclusive.
    Medium,
    /// More than five days.
    Long,
}

impl LeaveDuration {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveDuration::Short => "short",
            LeaveDuration::Medium => "medium",
            LeaveDuration::Long => "long",
        }
    }

    /// Every category, in display order.
    pub fn all() -> [LeaveDuration; 3] {
        [
            LeaveDuration::Short,
            LeaveDuration::Medium,
            LeaveDuration::Long,
        ]
    }
}

impl fmt::Display for LeaveDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LeaveDuration {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(LeaveDuration::Short),
            "medium" => Ok(LeaveDuration::Medium),
            "long" => Ok(LeaveDuration::Long),
            other => Err(CriteriaError::unrecognised(
                "leave duration",
                other,
                "short, medium, long",
            )),
        }
    }
}

/// Classify a leave's day count. Total over all inputs: boundaries
/// belong to the shorter category, and anything that is not a sensible
/// day count (negative, NaN) still lands in a category rather than
/// dropping the record from an active duration filter's complement.
pub fn leave_duration(days: f64) -> LeaveDuration {
    if days <= SHORT_LEAVE_MAX_DAYS {
        LeaveDuration::Short
    } else if days <= MEDIUM_LEAVE_MAX_DAYS {
        LeaveDuration::Medium
    } else {
        LeaveDuration::Long
    }
}

// =============================================================================
// Experience band (candidates)
// =============================================================================

/// Half-open experience band a candidate's years fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceBand {
    /// [0, 2) years.
    UnderTwo,
    /// [2, 5) years.
    TwoToFive,
    /// [5, 10) years.
    FiveToTen,
    /// 10 years and up.
    TenPlus,
}

impl ExperienceBand {
    /// Display label matching the recruitment vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBand::UnderTwo => "0-2 years",
            ExperienceBand::TwoToFive => "2-5 years",
            ExperienceBand::FiveToTen => "5-10 years",
            ExperienceBand::TenPlus => "10+ years",
        }
    }

    /// Every band, ascending.
    pub fn all() -> [ExperienceBand; 4] {
        [
            ExperienceBand::UnderTwo,
            ExperienceBand::TwoToFive,
            ExperienceBand::FiveToTen,
            ExperienceBand::TenPlus,
        ]
    }
}

impl fmt::Display for ExperienceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExperienceBand {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the display label ("2-5 years") and the compact
        // form ("2-5") users type at a prompt.
        let normalised = s.trim().to_lowercase().replace(' ', "");
        match normalised.trim_end_matches("years").trim_end_matches('y') {
            "0-2" => Ok(ExperienceBand::UnderTwo),
            "2-5" => Ok(ExperienceBand::TwoToFive),
            "5-10" => Ok(ExperienceBand::FiveToTen),
            "10+" => Ok(ExperienceBand::TenPlus),
            _ => Err(CriteriaError::unrecognised(
                "experience band",
                s.trim(),
                "0-2, 2-5, 5-10, 10+",
            )),
        }
    }
}

/// Classify a candidate's years of experience. `None` when the value is
/// negative or not finite; such candidates sit outside every band.
pub fn experience_band(years: f64) -> Option<ExperienceBand> {
    if !years.is_finite() || years < 0.0 {
        return None;
    }
    let [mid, senior, veteran] = EXPERIENCE_BAND_EDGES_YEARS;
    Some(if years < mid {
        ExperienceBand::UnderTwo
    } else if years < senior {
        ExperienceBand::TwoToFive
    } else if years < veteran {
        ExperienceBand::FiveToTen
    } else {
        ExperienceBand::TenPlus
    })
}

// =============================================================================
// Salary band (candidates)
// =============================================================================

/// Half-open expected-salary band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalaryBand {
    /// Below 50,000.
    UnderFifty,
    /// [50,000, 80,000).
    FiftyToEighty,
    /// [80,000, 120,000).
    EightyToOneTwenty,
    /// 120,000 and up.
    OneTwentyPlus,
}

impl SalaryBand {
    /// Display label matching the recruitment vocabulary.
    pub fn label(&self) -> &'static str {
        match self {
            SalaryBand::UnderFifty => "< $50k",
            SalaryBand::FiftyToEighty => "$50k - $80k",
            SalaryBand::EightyToOneTwenty => "$80k - $120k",
            SalaryBand::OneTwentyPlus => "$120k+",
        }
    }

    /// Every band, ascending.
    pub fn all() -> [SalaryBand; 4] {
        [
            SalaryBand::UnderFifty,
            SalaryBand::FiftyToEighty,
            SalaryBand::EightyToOneTwenty,
            SalaryBand::OneTwentyPlus,
        ]
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SalaryBand {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the display label ("$50k - $80k") and the compact form
        // ("50k-80k").
        let normalised = s
            .trim()
            .to_lowercase()
            .replace([' ', '$', ','], "");
        match normalised.as_str() {
            "<50k" => Ok(SalaryBand::UnderFifty),
            "50k-80k" => Ok(SalaryBand::FiftyToEighty),
            "80k-120k" => Ok(SalaryBand::EightyToOneTwenty),
            "120k+" => Ok(SalaryBand::OneTwentyPlus),
            _ => Err(CriteriaError::unrecognised(
                "salary band",
                s.trim(),
                "<50k, 50k-80k, 80k-120k, 120k+",
            )),
        }
    }
}

/// Classify an expected salary. `None` only for NaN; negative values
/// fall into the lowest band, matching how the bands partition the
/// real line.
pub fn salary_band(amount: f64) -> Option<SalaryBand> {
    if amount.is_nan() {
        return None;
    }
    let [low, mid, high] = SALARY_BAND_EDGES;
    Some(if amount < low {
        SalaryBand::UnderFifty
    } else if amount < mid {
        SalaryBand::FiftyToEighty
    } else if amount < high {
        SalaryBand::EightyToOneTwenty
    } else {
        SalaryBand::OneTwentyPlus
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuality_window_edges() {
        assert_eq!(punctuality(Some("08:44")), Some(Punctuality::Early));
        assert_eq!(punctuality(Some("08:45")), Some(Punctuality::OnTime));
        assert_eq!(punctuality(Some("09:00")), Some(Punctuality::OnTime));
        assert_eq!(punctuality(Some("09:01")), Some(Punctuality::Late));
    }

    #[test]
    fn test_punctuality_extremes() {
        assert_eq!(punctuality(Some("00:00")), Some(Punctuality::Early));
        assert_eq!(punctuality(Some("23:59")), Some(Punctuality::Late));
    }

    #[test]
    fn test_punctuality_tolerates_seconds() {
        assert_eq!(punctuality(Some("08:45:59")), Some(Punctuality::OnTime));
    }

    #[test]
    fn test_punctuality_missing_or_malformed_has_no_category() {
        assert_eq!(punctuality(None), None);
        assert_eq!(punctuality(Some("")), None);
        assert_eq!(punctuality(Some("morning")), None);
        assert_eq!(punctuality(Some("9")), None);
        assert_eq!(punctuality(Some("25:00")), None);
        assert_eq!(punctuality(Some("09:75")), None);
        assert_eq!(punctuality(Some("09:")), None);
    }

    #[test]
    fn test_leave_duration_boundaries_belong_to_shorter_category() {
        assert_eq!(leave_duration(0.5), LeaveDuration::Short);
        assert_eq!(leave_duration(2.0), LeaveDuration::Short);
        assert_eq!(leave_duration(2.5), LeaveDuration::Medium);
        assert_eq!(leave_duration(5.0), LeaveDuration::Medium);
        assert_eq!(leave_duration(5.5), LeaveDuration::Long);
        assert_eq!(leave_duration(30.0), LeaveDuration::Long);
    }

    #[test]
    fn test_leave_duration_is_total() {
        assert_eq!(leave_duration(-1.0), LeaveDuration::Short);
        assert_eq!(leave_duration(f64::NAN), LeaveDuration::Long);
    }

    #[test]
    fn test_experience_band_edges_are_half_open() {
        assert_eq!(experience_band(0.0), Some(ExperienceBand::UnderTwo));
        assert_eq!(experience_band(1.9), Some(ExperienceBand::UnderTwo));
        assert_eq!(experience_band(2.0), Some(ExperienceBand::TwoToFive));
        assert_eq!(experience_band(4.9), Some(ExperienceBand::TwoToFive));
        assert_eq!(experience_band(5.0), Some(ExperienceBand::FiveToTen));
        assert_eq!(experience_band(10.0), Some(ExperienceBand::TenPlus));
        assert_eq!(experience_band(40.0), Some(ExperienceBand::TenPlus));
    }

    #[test]
    fn test_experience_band_rejects_degenerate_input() {
        assert_eq!(experience_band(-0.5), None);
        assert_eq!(experience_band(f64::NAN), None);
        assert_eq!(experience_band(f64::INFINITY), None);
    }

    #[test]
    fn test_salary_band_edges_are_half_open() {
        assert_eq!(salary_band(49_999.99), Some(SalaryBand::UnderFifty));
        assert_eq!(salary_band(50_000.0), Some(SalaryBand::FiftyToEighty));
        assert_eq!(salary_band(79_999.0), Some(SalaryBand::FiftyToEighty));
        assert_eq!(salary_band(80_000.0), Some(SalaryBand::EightyToOneTwenty));
        assert_eq!(salary_band(120_000.0), Some(SalaryBand::OneTwentyPlus));
    }

    #[test]
    fn test_salary_band_negative_lands_in_lowest() {
        assert_eq!(salary_band(-10.0), Some(SalaryBand::UnderFifty));
    }

    #[test]
    fn test_salary_band_nan_has_no_band() {
        assert_eq!(salary_band(f64::NAN), None);
    }

    #[test]
    fn test_band_labels_parse_back() {
        for band in ExperienceBand::all() {
            assert_eq!(band.label().parse::<ExperienceBand>().unwrap(), band);
        }
        for band in SalaryBand::all() {
            assert_eq!(band.label().parse::<SalaryBand>().unwrap(), band);
        }
    }

    #[test]
    fn test_band_compact_forms_parse() {
        assert_eq!("2-5".parse::<ExperienceBand>().unwrap(), ExperienceBand::TwoToFive);
        assert_eq!("10+".parse::<ExperienceBand>().unwrap(), ExperienceBand::TenPlus);
        assert_eq!("50k-80k".parse::<SalaryBand>().unwrap(), SalaryBand::FiftyToEighty);
        assert_eq!("<50k".parse::<SalaryBand>().unwrap(), SalaryBand::UnderFifty);
    }
}
