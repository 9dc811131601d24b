use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde_json::json;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::candidates::{
    Candidate, CandidateId, CandidateRepository, CandidateStatus, RepositoryError,
};
use super::controller::{StepController, WorkflowSnapshot};
use super::domain::{StepAction, StepError};
use super::interviews::{
    self, EvaluationRequest, InterviewBoard, InterviewDecision, InterviewError,
    InterviewEvaluation, InterviewInvitation, InterviewOverview, InterviewRequest,
    InterviewSchedule, TimeSlots,
};
use super::job::{JobData, JobDataPatch};
use super::offer::{
    NotifierError, OfferData, OfferError, OfferNotifier, OfferPackage, OfferStage, OfferStatus,
};
use super::onboarding::{
    self, OnboardingError, OnboardingPlan, OnboardingProgress, OnboardingTask,
};
use super::report::views::{
    ApplicationStats, JobPostingStatus, PipelineMetrics, ShortlistData, ShortlistingData,
};
use super::report;
use super::seed;

/// Service composing the step controller with the job posting, candidate pool,
/// interview board, offer, and onboarding state.
pub struct HiringWorkflowService<R, N> {
    steps: StepController,
    job: watch::Sender<JobData>,
    candidates: Arc<R>,
    notifier: Arc<N>,
    interviews: Mutex<InterviewBoard>,
    offer: Mutex<Option<OfferStatus>>,
    onboarding: Mutex<Vec<OnboardingTask>>,
}

impl<R, N> HiringWorkflowService<R, N>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    pub fn new(candidates: Arc<R>, notifier: Arc<N>, job: JobData, steps: StepController) -> Self {
        let (job, _) = watch::channel(job);
        Self {
            steps,
            job,
            candidates,
            notifier,
            interviews: Mutex::new(seed::sample_interviews()),
            offer: Mutex::new(None),
            onboarding: Mutex::new(onboarding::standard_tasks()),
        }
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn workflow(&self) -> WorkflowSnapshot {
        self.steps.snapshot()
    }

    /// Runs the advance action bound to the current step.
    pub fn advance(&self, action: StepAction) -> Result<WorkflowSnapshot, HiringServiceError> {
        Ok(self.steps.perform(action)?)
    }

    pub fn complete_workflow(&self) -> Result<WorkflowSnapshot, HiringServiceError> {
        self.advance(StepAction::CompleteWorkflow)
    }

    pub fn job(&self) -> JobData {
        self.job.borrow().clone()
    }

    pub fn subscribe_job(&self) -> watch::Receiver<JobData> {
        self.job.subscribe()
    }

    pub fn update_job_data(&self, patch: JobDataPatch) -> JobData {
        self.job.send_modify(|job| *job = job.merged(patch));
        let job = self.job();
        info!(title = %job.job_title, company = %job.company_name, "job posting updated");
        job
    }

    pub fn candidates(&self) -> Result<Vec<Candidate>, HiringServiceError> {
        Ok(self.candidates.list()?)
    }

    pub fn add_candidate(&self, candidate: Candidate) -> Result<Candidate, HiringServiceError> {
        let stored = self.candidates.insert(candidate)?;
        debug!(candidate = stored.id.0, "candidate added");
        Ok(stored)
    }

    pub fn update_candidate_status(
        &self,
        id: CandidateId,
        status: CandidateStatus,
    ) -> Result<Candidate, HiringServiceError> {
        let candidate = self
            .candidates
            .update_status(id, status)
            .map_err(|err| match err {
                RepositoryError::NotFound => HiringServiceError::CandidateNotFound(id),
                other => other.into(),
            })?;
        info!(candidate = id.0, status = status.label(), "candidate status updated");
        Ok(candidate)
    }

    pub fn mark_for_shortlist(
        &self,
        id: CandidateId,
        shortlisted: bool,
    ) -> Result<Candidate, HiringServiceError> {
        let status = if shortlisted {
            CandidateStatus::Shortlisted
        } else {
            CandidateStatus::UnderReview
        };
        self.update_candidate_status(id, status)
    }

    pub fn pipeline_metrics(&self) -> Result<PipelineMetrics, HiringServiceError> {
        Ok(report::pipeline_metrics(&self.candidates()?))
    }

    pub fn application_stats(&self) -> Result<ApplicationStats, HiringServiceError> {
        Ok(report::application_stats(&self.candidates()?))
    }

    pub fn job_posting_status(
        &self,
        today: NaiveDate,
    ) -> Result<JobPostingStatus, HiringServiceError> {
        Ok(report::job_posting_status(
            &self.job(),
            &self.candidates()?,
            today,
        ))
    }

    pub fn shortlisting_data(&self) -> Result<ShortlistingData, HiringServiceError> {
        Ok(report::shortlisting_data(&self.job(), &self.candidates()?))
    }

    pub fn shortlist_data(&self) -> Result<ShortlistData, HiringServiceError> {
        Ok(report::shortlist_data(&self.candidates()?))
    }

    fn candidate(&self, id: CandidateId) -> Result<Candidate, HiringServiceError> {
        self.candidates
            .fetch(id)?
            .ok_or(HiringServiceError::CandidateNotFound(id))
    }

    pub fn interview_overview(&self) -> Result<InterviewOverview, HiringServiceError> {
        let candidates = self.candidates()?;
        let board = self.interviews.lock().expect("interview mutex poisoned");
        Ok(board.overview(&candidates))
    }

    pub fn interview_schedules(&self) -> Vec<InterviewSchedule> {
        let board = self.interviews.lock().expect("interview mutex poisoned");
        board.schedules().to_vec()
    }

    pub fn interview_evaluations(&self) -> Vec<InterviewEvaluation> {
        let board = self.interviews.lock().expect("interview mutex poisoned");
        board.evaluations().to_vec()
    }

    pub fn available_time_slots(&self, today: NaiveDate) -> TimeSlots {
        interviews::available_time_slots(today)
    }

    /// Books an interview, replacing any earlier booking for the candidate.
    pub fn schedule_interview(
        &self,
        id: CandidateId,
        request: InterviewRequest,
    ) -> Result<InterviewSchedule, HiringServiceError> {
        let candidate = self.candidate(id)?;
        let schedule = self
            .interviews
            .lock()
            .expect("interview mutex poisoned")
            .schedule(&candidate, request)?;
        info!(
            candidate = id.0,
            date = %schedule.date,
            time = %schedule.time,
            "interview scheduled"
        );
        Ok(schedule)
    }

    pub fn send_interview_invitation(
        &self,
        id: CandidateId,
    ) -> Result<InterviewInvitation, HiringServiceError> {
        let invitation = self
            .interviews
            .lock()
            .expect("interview mutex poisoned")
            .send_invitation(id)?;
        info!(
            candidate = id.0,
            recipients = invitation.recipients.len(),
            "interview invitation sent"
        );
        Ok(invitation)
    }

    /// Records feedback and marks the candidate's interview completed.
    pub fn save_interview_evaluation(
        &self,
        id: CandidateId,
        request: EvaluationRequest,
        today: NaiveDate,
    ) -> Result<InterviewEvaluation, HiringServiceError> {
        let candidate = self.candidate(id)?;
        let evaluation = self
            .interviews
            .lock()
            .expect("interview mutex poisoned")
            .record_evaluation(&candidate, request, today)?;
        debug!(candidate = id.0, score = evaluation.overall_score, "interview evaluation saved");
        Ok(evaluation)
    }

    pub fn apply_interview_decision(
        &self,
        id: CandidateId,
        decision: InterviewDecision,
    ) -> Result<Candidate, HiringServiceError> {
        debug!(candidate = id.0, decision = decision.label(), "interview decision");
        self.update_candidate_status(id, decision.candidate_status())
    }

    fn selected_candidate(&self) -> Result<Candidate, HiringServiceError> {
        let candidates = self.candidates()?;
        report::top_shortlisted(&candidates)
            .cloned()
            .ok_or(HiringServiceError::NoShortlistedCandidates)
    }

    pub fn offer_data(&self, today: NaiveDate) -> Result<OfferData, HiringServiceError> {
        let candidate = self.selected_candidate()?;
        Ok(OfferData::draft(&self.job(), &candidate, today))
    }

    /// Current offer status; the offer is drafted on first access.
    pub fn offer_status(&self, today: NaiveDate) -> OfferStatus {
        let mut guard = self.offer.lock().expect("offer mutex poisoned");
        guard
            .get_or_insert_with(|| OfferStatus::drafted(today))
            .clone()
            .as_of(today)
    }

    /// Moves the offer forward. Sending dispatches the offer e-mail before the
    /// new status is recorded; viewing or answering requires a sent offer.
    pub fn update_offer_status(
        &self,
        stage: OfferStage,
        response: Option<String>,
        today: NaiveDate,
    ) -> Result<OfferStatus, HiringServiceError> {
        let mut guard = self.offer.lock().expect("offer mutex poisoned");
        let current = guard.get_or_insert_with(|| OfferStatus::drafted(today));
        let next = current.advanced(stage, response, today).map_err(|err| {
            warn!(stage = stage.label(), %err, "rejected offer status change");
            err
        })?;

        if stage == OfferStage::Sent {
            let offer = self.offer_data(today)?;
            self.notifier.send_offer(&offer.email_template)?;
        }

        info!(stage = stage.label(), "offer status updated");
        *current = next.clone();
        Ok(next)
    }

    pub fn onboarding_plan(&self, today: NaiveDate) -> Result<OnboardingPlan, HiringServiceError> {
        let new_hire = self.selected_candidate()?;
        let start_date = OfferPackage::standard(today).start_date;
        let tasks = self.onboarding.lock().expect("onboarding mutex poisoned").clone();
        Ok(OnboardingPlan::new(
            new_hire,
            start_date,
            self.job().department,
            tasks,
        ))
    }

    pub fn complete_onboarding_task(
        &self,
        task: &str,
    ) -> Result<OnboardingProgress, HiringServiceError> {
        let mut tasks = self.onboarding.lock().expect("onboarding mutex poisoned");
        onboarding::complete_task(&mut tasks, task)?;
        debug!(task, "onboarding task completed");
        Ok(OnboardingProgress::of(&tasks))
    }
}

/// Error raised by the hiring workflow service.
#[derive(Debug, thiserror::Error)]
pub enum HiringServiceError {
    #[error(transparent)]
    Step(#[from] StepError),
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error("no shortlisted candidates to extend an offer to")]
    NoShortlistedCandidates,
    #[error(transparent)]
    Interview(#[from] InterviewError),
    #[error(transparent)]
    Offer(#[from] OfferError),
    #[error(transparent)]
    Onboarding(#[from] OnboardingError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Notifier(#[from] NotifierError),
}

impl HiringServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Step(_)
            | Self::Interview(
                InterviewError::NoInterviewers
                | InterviewError::InvalidTime(_)
                | InterviewError::RatingOutOfRange { .. },
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::CandidateNotFound(_)
            | Self::Onboarding(_)
            | Self::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Self::NoShortlistedCandidates
            | Self::Interview(InterviewError::NotShortlisted(_) | InterviewError::NotScheduled(_))
            | Self::Offer(_)
            | Self::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            Self::Repository(RepositoryError::Unavailable(_)) | Self::Notifier(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for HiringServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
