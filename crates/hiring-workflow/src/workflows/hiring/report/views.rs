use serde::Serialize;

use super::super::candidates::Candidate;

/// Candidate counts per pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineMetrics {
    pub applied: usize,
    pub screening: usize,
    pub interview: usize,
    pub offer: usize,
    pub hired: usize,
    pub rejected: usize,
}

impl PipelineMetrics {
    pub fn total(&self) -> usize {
        self.applied + self.screening + self.interview + self.offer + self.hired + self.rejected
    }
}

/// Review-status breakdown shown while monitoring applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationStats {
    pub total_applications: usize,
    pub qualified: usize,
    pub under_review: usize,
    pub shortlisted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobPostingStatus {
    pub job_title: String,
    pub status: &'static str,
    pub total_applicants: usize,
    pub applications_today: usize,
    pub applications_this_week: usize,
    /// Days since the first application arrived; zero with no dated applications.
    pub days_active: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistCriteria {
    pub min_score: u8,
    pub required_skills: Vec<String>,
    pub preferred_locations: Vec<&'static str>,
    pub experience_range: &'static str,
}

/// Input for the monitor -> shortlist hand-off.
#[derive(Debug, Clone, Serialize)]
pub struct ShortlistingData {
    pub job_title: String,
    pub total_candidates: usize,
    pub qualified_candidates: usize,
    pub recommended_for_shortlist: Vec<Candidate>,
    pub shortlist_criteria: ShortlistCriteria,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextStepHint {
    pub title: &'static str,
    pub description: String,
    pub action: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortlistData {
    pub all_candidates: Vec<Candidate>,
    pub shortlisted_candidates: Vec<Candidate>,
    pub shortlisted_count: usize,
    pub ready_for_interview: usize,
    pub next_steps: Vec<NextStepHint>,
}
