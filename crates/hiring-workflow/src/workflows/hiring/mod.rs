//! Eight-step hiring workflow: job creation through onboarding.
//!
//! [`StepController`] owns which step is current and which steps are done.
//! [`HiringWorkflowService`] layers the job posting, candidate pool, interviews,
//! offer, and onboarding state on top of it and [`hiring_router`] exposes it over HTTP.

pub mod candidates;
pub mod controller;
pub mod domain;
pub mod interviews;
pub mod job;
pub mod offer;
pub mod onboarding;
pub mod report;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use candidates::{
    Candidate, CandidateId, CandidateRepository, CandidateStatus, PipelineStage, RepositoryError,
};
pub use controller::{StepController, WorkflowSnapshot, WorkflowView};
pub use domain::{HiringStage, NextButton, StepAction, StepError, WorkflowStep, STEP_COUNT};
pub use interviews::{
    EvaluationRequest, InterviewBoard, InterviewDecision, InterviewError, InterviewEvaluation,
    InterviewInvitation, InterviewMode, InterviewOverview, InterviewRatings, InterviewRequest,
    InterviewSchedule, InterviewStatus, InterviewType, TimeSlots,
};
pub use job::{generate_job_description, EmploymentType, JobData, JobDataPatch};
pub use offer::{
    NotifierError, OfferData, OfferEmail, OfferError, OfferNotifier, OfferPackage, OfferStage,
    OfferStatus,
};
pub use onboarding::{
    OnboardingError, OnboardingPlan, OnboardingProgress, OnboardingTask, OnboardingTaskStatus,
};
pub use router::hiring_router;
pub use service::{HiringServiceError, HiringWorkflowService};
