use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u32);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Applied,
    UnderReview,
    Shortlisted,
    Rejected,
    Interviewed,
}

impl CandidateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::UnderReview => "Under Review",
            Self::Shortlisted => "Shortlisted",
            Self::Rejected => "Rejected",
            Self::Interviewed => "Interviewed",
        }
    }
}

/// Where a candidate sits in the recruiting funnel, independent of review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Applied,
    Screening,
    Interview,
    Offer,
    Hired,
    Rejected,
}

impl PipelineStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Hired => "Hired",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub title: String,
    /// Screening score out of 100.
    pub score: u8,
    pub status: CandidateStatus,
    /// Interview panel score out of 10; zero until interviewed.
    #[serde(default)]
    pub interview_score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<NaiveDate>,
    pub stage: PipelineStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
}

impl Candidate {
    pub fn is_shortlisted(&self) -> bool {
        self.status == CandidateStatus::Shortlisted
    }
}

/// Storage abstraction for the candidate pool. `list` returns candidates ordered by id.
pub trait CandidateRepository: Send + Sync {
    fn list(&self) -> Result<Vec<Candidate>, RepositoryError>;
    fn fetch(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn insert(&self, candidate: Candidate) -> Result<Candidate, RepositoryError>;
    /// Sets a candidate's status in one step, so concurrent writers cannot
    /// overwrite each other's changes. Unknown ids yield [`RepositoryError::NotFound`].
    fn update_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
    ) -> Result<Candidate, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("candidate already exists")]
    Conflict,
    #[error("candidate not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
