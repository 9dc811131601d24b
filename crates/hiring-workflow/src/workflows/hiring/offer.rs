use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::candidates::Candidate;
use super::job::JobData;

const BASE_SALARY: u32 = 150_000;
const ANNUAL_BONUS: u32 = 25_000;
const START_DATE_LEAD_DAYS: i64 = 14;
const OFFER_VALIDITY_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OfferBenefits {
    pub health_insurance: bool,
    pub retirement: bool,
    pub remote_work: bool,
    pub stock_options: bool,
    pub paid_time_off: bool,
    pub learning_budget: bool,
}

/// Compensation package extended to the selected candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferPackage {
    pub base_salary: u32,
    pub annual_bonus: u32,
    pub equity_pct: f32,
    pub total_package: u32,
    pub start_date: NaiveDate,
    pub work_location: String,
    pub benefits: OfferBenefits,
}

impl OfferPackage {
    pub fn standard(today: NaiveDate) -> Self {
        Self {
            base_salary: BASE_SALARY,
            annual_bonus: ANNUAL_BONUS,
            equity_pct: 0.5,
            total_package: BASE_SALARY + ANNUAL_BONUS,
            start_date: today + Duration::days(START_DATE_LEAD_DAYS),
            work_location: "Remote".to_string(),
            benefits: OfferBenefits {
                health_insurance: true,
                retirement: true,
                remote_work: true,
                stock_options: true,
                paid_time_off: false,
                learning_budget: false,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApprovalCheckpoint {
    pub completed: bool,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApprovalWorkflow {
    pub hr_review: ApprovalCheckpoint,
    pub manager_approval: ApprovalCheckpoint,
    pub final_review: ApprovalCheckpoint,
}

impl ApprovalWorkflow {
    pub fn is_approved(&self) -> bool {
        self.hr_review.completed && self.manager_approval.completed && self.final_review.completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl OfferEmail {
    pub fn compose(job: &JobData, candidate: &Candidate) -> Self {
        let subject = format!("Job Offer - {} Position", job.job_title);
        let body = format!(
            "Dear {name},\n\n\
             We are excited to extend this offer for the {title} position at {company}.\n\n\
             We believe your skills and experience make you an excellent fit for our team, \
             and we look forward to working with you.\n\n\
             Please review the attached offer letter and let us know if you have any questions.\n\n\
             Best regards,\n\
             HR Team",
            name = candidate.name,
            title = job.job_title,
            company = job.company_name,
        );

        Self {
            recipient: candidate.name.clone(),
            subject,
            body,
        }
    }
}

/// Everything the send-offer step shows for the selected candidate.
#[derive(Debug, Clone, Serialize)]
pub struct OfferData {
    pub selected_candidate: Candidate,
    pub offer_details: OfferPackage,
    pub approval_status: &'static str,
    pub approval_workflow: ApprovalWorkflow,
    pub legal_documents: Vec<&'static str>,
    pub email_template: OfferEmail,
}

impl OfferData {
    pub fn draft(job: &JobData, candidate: &Candidate, today: NaiveDate) -> Self {
        let reviewed = ApprovalCheckpoint {
            completed: true,
            date: Some(today),
        };
        let approval_workflow = ApprovalWorkflow {
            hr_review: reviewed,
            manager_approval: reviewed,
            final_review: reviewed,
        };

        Self {
            selected_candidate: candidate.clone(),
            offer_details: OfferPackage::standard(today),
            approval_status: if approval_workflow.is_approved() {
                "Approved"
            } else {
                "Pending"
            },
            approval_workflow,
            legal_documents: vec![
                "Offer Letter.pdf",
                "Employee Handbook.pdf",
                "NDA Agreement.pdf",
                "Benefits Guide.pdf",
            ],
            email_template: OfferEmail::compose(job, candidate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferStage {
    Draft,
    Sent,
    Viewed,
    Responded,
}

impl OfferStage {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Viewed => "Viewed",
            Self::Responded => "Responded",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OfferTimeline {
    pub drafted: Option<NaiveDate>,
    pub sent: Option<NaiveDate>,
    pub viewed: Option<NaiveDate>,
    pub responded: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferStatus {
    pub stage: OfferStage,
    pub timeline: OfferTimeline,
    pub candidate_response: Option<String>,
    pub last_activity: String,
    pub expiry_date: NaiveDate,
    /// Whether the offer had lapsed on the date this status was read.
    pub expired: bool,
}

impl OfferStatus {
    pub fn drafted(on: NaiveDate) -> Self {
        Self {
            stage: OfferStage::Draft,
            timeline: OfferTimeline {
                drafted: Some(on),
                ..OfferTimeline::default()
            },
            candidate_response: None,
            last_activity: "Offer drafted".to_string(),
            expiry_date: on + Duration::days(OFFER_VALIDITY_DAYS),
            expired: false,
        }
    }

    /// Refreshes the `expired` flag for `today`.
    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.expired = self.is_expired(today);
        self
    }

    /// Moves the offer forward to `stage`. Stages may be skipped but never
    /// revisited, and the candidate cannot view or answer an offer that was
    /// never sent. Lapsed offers accept no transition at all.
    pub fn advanced(
        &self,
        stage: OfferStage,
        response: Option<String>,
        today: NaiveDate,
    ) -> Result<Self, OfferError> {
        if stage <= self.stage {
            return Err(OfferError::InvalidTransition {
                from: self.stage,
                to: stage,
            });
        }
        if self.is_expired(today) {
            return Err(OfferError::Expired {
                expiry: self.expiry_date,
            });
        }
        if self.stage < OfferStage::Sent && stage > OfferStage::Sent {
            return Err(OfferError::NotSent { to: stage });
        }

        let mut next = self.clone();
        next.expired = false;
        next.stage = stage;
        match stage {
            OfferStage::Draft => {}
            OfferStage::Sent => {
                next.timeline.sent = Some(today);
                next.last_activity = "Offer sent to candidate".to_string();
            }
            OfferStage::Viewed => {
                next.timeline.viewed = Some(today);
                next.last_activity = "Candidate viewed offer".to_string();
            }
            OfferStage::Responded => {
                next.timeline.responded = Some(today);
                next.last_activity = match &response {
                    Some(answer) => format!("Candidate {answer} offer"),
                    None => "Candidate responded to offer".to_string(),
                };
                next.candidate_response = response;
            }
        }
        Ok(next)
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.stage < OfferStage::Responded && today > self.expiry_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OfferError {
    #[error("offer cannot move from {} to {}", .from.label(), .to.label())]
    InvalidTransition { from: OfferStage, to: OfferStage },
    #[error("offer expired on {expiry}")]
    Expired { expiry: NaiveDate },
    #[error("offer must be sent before it can be {}", .to.label().to_lowercase())]
    NotSent { to: OfferStage },
}

/// Outbound hook for delivering offers (e-mail, document signing, ...).
pub trait OfferNotifier: Send + Sync {
    fn send_offer(&self, email: &OfferEmail) -> Result<(), NotifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotifierError {
    #[error("offer transport unavailable: {0}")]
    Transport(String),
}
