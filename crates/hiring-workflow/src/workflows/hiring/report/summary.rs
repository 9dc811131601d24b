use chrono::{Duration, NaiveDate};

use super::super::candidates::{Candidate, CandidateStatus, PipelineStage};
use super::super::job::JobData;
use super::views::{
    ApplicationStats, JobPostingStatus, NextStepHint, PipelineMetrics, ShortlistCriteria,
    ShortlistData, ShortlistingData,
};

pub(crate) const SHORTLIST_MIN_SCORE: u8 = 85;
const WEEK_DAYS: i64 = 7;
const RECOMMENDATION_LIMIT: usize = 5;
const PREFERRED_LOCATIONS: [&str; 3] = ["Jaipur", "Delhi", "Mumbai"];

pub fn pipeline_metrics(candidates: &[Candidate]) -> PipelineMetrics {
    candidates
        .iter()
        .fold(PipelineMetrics::default(), |mut metrics, candidate| {
            let slot = match candidate.stage {
                PipelineStage::Applied => &mut metrics.applied,
                PipelineStage::Screening => &mut metrics.screening,
                PipelineStage::Interview => &mut metrics.interview,
                PipelineStage::Offer => &mut metrics.offer,
                PipelineStage::Hired => &mut metrics.hired,
                PipelineStage::Rejected => &mut metrics.rejected,
            };
            *slot += 1;
            metrics
        })
}

fn is_qualified(candidate: &Candidate) -> bool {
    candidate.score >= SHORTLIST_MIN_SCORE && candidate.status != CandidateStatus::Rejected
}

pub fn application_stats(candidates: &[Candidate]) -> ApplicationStats {
    let with_status =
        |status: CandidateStatus| candidates.iter().filter(|c| c.status == status).count();

    ApplicationStats {
        total_applications: candidates.len(),
        qualified: candidates.iter().filter(|c| is_qualified(c)).count(),
        under_review: with_status(CandidateStatus::UnderReview),
        shortlisted: with_status(CandidateStatus::Shortlisted),
        rejected: with_status(CandidateStatus::Rejected),
    }
}

/// Posting activity as of `today`. The week window covers `today` and the six days before it.
pub fn job_posting_status(
    job: &JobData,
    candidates: &[Candidate],
    today: NaiveDate,
) -> JobPostingStatus {
    let week_start = today - Duration::days(WEEK_DAYS - 1);
    let applied: Vec<NaiveDate> = candidates
        .iter()
        .filter_map(|candidate| candidate.applied_date)
        .filter(|date| *date <= today)
        .collect();

    JobPostingStatus {
        job_title: job.job_title.clone(),
        status: "Open",
        total_applicants: candidates.len(),
        applications_today: applied.iter().filter(|date| **date == today).count(),
        applications_this_week: applied.iter().filter(|date| **date >= week_start).count(),
        days_active: applied
            .iter()
            .min()
            .map_or(0, |first| (today - *first).num_days()),
    }
}

pub fn shortlisting_data(job: &JobData, candidates: &[Candidate]) -> ShortlistingData {
    let qualified: Vec<&Candidate> = candidates.iter().filter(|c| is_qualified(c)).collect();

    ShortlistingData {
        job_title: job.job_title.clone(),
        total_candidates: candidates.len(),
        qualified_candidates: qualified.len(),
        recommended_for_shortlist: qualified
            .into_iter()
            .take(RECOMMENDATION_LIMIT)
            .cloned()
            .collect(),
        shortlist_criteria: ShortlistCriteria {
            min_score: SHORTLIST_MIN_SCORE,
            required_skills: job.skills(),
            preferred_locations: PREFERRED_LOCATIONS.to_vec(),
            experience_range: "4-8 years",
        },
    }
}

pub fn shortlist_data(candidates: &[Candidate]) -> ShortlistData {
    let shortlisted: Vec<Candidate> = candidates
        .iter()
        .filter(|candidate| candidate.is_shortlisted())
        .cloned()
        .collect();
    let count = shortlisted.len();

    ShortlistData {
        all_candidates: candidates.to_vec(),
        shortlisted_candidates: shortlisted,
        shortlisted_count: count,
        ready_for_interview: count,
        next_steps: vec![
            NextStepHint {
                title: "Schedule Interviews",
                description: format!("{count} candidates ready for interviews"),
                action: "Schedule",
            },
            NextStepHint {
                title: "Send Notifications",
                description: "Notify shortlisted candidates".to_string(),
                action: "Send",
            },
        ],
    }
}

/// Highest scoring shortlisted candidate. On a tie the later candidate wins.
pub fn top_shortlisted(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates
        .iter()
        .filter(|candidate| candidate.is_shortlisted())
        .reduce(|best, candidate| if best.score > candidate.score { best } else { candidate })
}
