use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::candidates::{Candidate, CandidateId, CandidateRepository, CandidateStatus};
use super::controller::WorkflowView;
use super::domain::StepAction;
use super::interviews::{
    EvaluationRequest, InterviewDecision, InterviewEvaluation, InterviewInvitation,
    InterviewOverview, InterviewRequest, InterviewSchedule, TimeSlots,
};
use super::job::{JobData, JobDataPatch};
use super::offer::{OfferData, OfferNotifier, OfferStage, OfferStatus};
use super::onboarding::{OnboardingPlan, OnboardingProgress};
use super::report::views::{
    ApplicationStats, JobPostingStatus, PipelineMetrics, ShortlistData, ShortlistingData,
};
use super::service::{HiringServiceError, HiringWorkflowService};

type SharedService<R, N> = State<Arc<HiringWorkflowService<R, N>>>;
type ApiResult<T> = Result<Json<T>, HiringServiceError>;

#[derive(Debug, Deserialize)]
pub struct SetStepRequest {
    pub step: i64,
}

#[derive(Debug, Deserialize)]
pub struct CandidateStatusRequest {
    pub status: CandidateStatus,
}

#[derive(Debug, Deserialize)]
pub struct ShortlistRequest {
    #[serde(default = "default_shortlisted")]
    pub shortlisted: bool,
}

fn default_shortlisted() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct InterviewDecisionRequest {
    pub decision: InterviewDecision,
}

#[derive(Debug, Deserialize)]
pub struct OfferStatusRequest {
    pub stage: OfferStage,
    #[serde(default)]
    pub candidate_response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteTaskRequest {
    pub task: String,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Router exposing the workflow, job, candidate, interview, offer, and onboarding endpoints.
pub fn hiring_router<R, N>(service: Arc<HiringWorkflowService<R, N>>) -> Router
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Router::new()
        .route("/api/v1/workflow", get(workflow_handler::<R, N>))
        .route(
            "/api/v1/workflow/current-step",
            put(set_step_handler::<R, N>),
        )
        .route(
            "/api/v1/workflow/steps/:step/complete",
            post(complete_step_handler::<R, N>),
        )
        .route(
            "/api/v1/workflow/steps/:step/navigate",
            post(navigate_handler::<R, N>),
        )
        .route("/api/v1/workflow/next", post(next_handler::<R, N>))
        .route("/api/v1/workflow/previous", post(previous_handler::<R, N>))
        .route("/api/v1/workflow/reset", post(reset_handler::<R, N>))
        .route(
            "/api/v1/workflow/actions/:action",
            post(action_handler::<R, N>),
        )
        .route(
            "/api/v1/job",
            get(job_handler::<R, N>).patch(update_job_handler::<R, N>),
        )
        .route("/api/v1/job/status", get(job_status_handler::<R, N>))
        .route(
            "/api/v1/candidates",
            get(candidates_handler::<R, N>).post(add_candidate_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:id/status",
            put(candidate_status_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:id/shortlist",
            put(shortlist_candidate_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:id/interview",
            put(schedule_interview_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:id/interview/invitation",
            post(invitation_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:id/interview/evaluation",
            post(evaluation_handler::<R, N>),
        )
        .route(
            "/api/v1/candidates/:id/interview/decision",
            post(decision_handler::<R, N>),
        )
        .route("/api/v1/interviews", get(interviews_handler::<R, N>))
        .route(
            "/api/v1/interviews/schedules",
            get(schedules_handler::<R, N>),
        )
        .route(
            "/api/v1/interviews/evaluations",
            get(evaluations_handler::<R, N>),
        )
        .route("/api/v1/interviews/slots", get(slots_handler::<R, N>))
        .route("/api/v1/pipeline/metrics", get(metrics_handler::<R, N>))
        .route("/api/v1/pipeline/stats", get(stats_handler::<R, N>))
        .route(
            "/api/v1/pipeline/shortlisting",
            get(shortlisting_handler::<R, N>),
        )
        .route("/api/v1/pipeline/shortlist", get(shortlist_handler::<R, N>))
        .route("/api/v1/offer", get(offer_handler::<R, N>))
        .route(
            "/api/v1/offer/status",
            get(offer_status_handler::<R, N>).post(update_offer_status_handler::<R, N>),
        )
        .route("/api/v1/onboarding", get(onboarding_handler::<R, N>))
        .route(
            "/api/v1/onboarding/tasks/complete",
            post(complete_task_handler::<R, N>),
        )
        .with_state(service)
}

pub(crate) async fn workflow_handler<R, N>(State(service): SharedService<R, N>) -> Json<WorkflowView>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Json(service.workflow().view())
}

pub(crate) async fn set_step_handler<R, N>(
    State(service): SharedService<R, N>,
    Json(request): Json<SetStepRequest>,
) -> ApiResult<WorkflowView>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    let snapshot = service
        .steps()
        .set_current_step(request.step)
        .map_err(HiringServiceError::from)?;
    Ok(Json(snapshot.view()))
}

pub(crate) async fn complete_step_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(step): Path<i64>,
) -> ApiResult<WorkflowView>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    let snapshot = service
        .steps()
        .complete_step(step)
        .map_err(HiringServiceError::from)?;
    Ok(Json(snapshot.view()))
}

pub(crate) async fn navigate_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(step): Path<i64>,
) -> ApiResult<WorkflowView>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    let snapshot = service
        .steps()
        .navigate_to_step(step)
        .map_err(HiringServiceError::from)?;
    Ok(Json(snapshot.view()))
}

pub(crate) async fn next_handler<R, N>(State(service): SharedService<R, N>) -> ApiResult<WorkflowView>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    let snapshot = service.steps().next_step().map_err(HiringServiceError::from)?;
    Ok(Json(snapshot.view()))
}

pub(crate) async fn previous_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<WorkflowView>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    let snapshot = service
        .steps()
        .previous_step()
        .map_err(HiringServiceError::from)?;
    Ok(Json(snapshot.view()))
}

pub(crate) async fn reset_handler<R, N>(State(service): SharedService<R, N>) -> Json<WorkflowView>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Json(service.steps().reset_workflow().view())
}

pub(crate) async fn action_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(action): Path<StepAction>,
) -> ApiResult<WorkflowView>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    let snapshot = service.advance(action)?;
    Ok(Json(snapshot.view()))
}

pub(crate) async fn job_handler<R, N>(State(service): SharedService<R, N>) -> Json<JobData>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Json(service.job())
}

pub(crate) async fn update_job_handler<R, N>(
    State(service): SharedService<R, N>,
    Json(patch): Json<JobDataPatch>,
) -> Json<JobData>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Json(service.update_job_data(patch))
}

pub(crate) async fn job_status_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<JobPostingStatus>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.job_posting_status(today())?))
}

pub(crate) async fn candidates_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<Vec<Candidate>>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.candidates()?))
}

pub(crate) async fn add_candidate_handler<R, N>(
    State(service): SharedService<R, N>,
    Json(candidate): Json<Candidate>,
) -> Response
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    match service.add_candidate(candidate) {
        Ok(stored) => (StatusCode::CREATED, Json(stored)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn candidate_status_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(id): Path<u32>,
    Json(request): Json<CandidateStatusRequest>,
) -> ApiResult<Candidate>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(
        service.update_candidate_status(CandidateId(id), request.status)?,
    ))
}

pub(crate) async fn shortlist_candidate_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(id): Path<u32>,
    Json(request): Json<ShortlistRequest>,
) -> ApiResult<Candidate>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(
        service.mark_for_shortlist(CandidateId(id), request.shortlisted)?,
    ))
}

pub(crate) async fn schedule_interview_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(id): Path<u32>,
    Json(request): Json<InterviewRequest>,
) -> ApiResult<InterviewSchedule>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.schedule_interview(CandidateId(id), request)?))
}

pub(crate) async fn invitation_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(id): Path<u32>,
) -> ApiResult<InterviewInvitation>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.send_interview_invitation(CandidateId(id))?))
}

pub(crate) async fn evaluation_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(id): Path<u32>,
    Json(request): Json<EvaluationRequest>,
) -> ApiResult<InterviewEvaluation>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.save_interview_evaluation(
        CandidateId(id),
        request,
        today(),
    )?))
}

pub(crate) async fn decision_handler<R, N>(
    State(service): SharedService<R, N>,
    Path(id): Path<u32>,
    Json(request): Json<InterviewDecisionRequest>,
) -> ApiResult<Candidate>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(
        service.apply_interview_decision(CandidateId(id), request.decision)?,
    ))
}

pub(crate) async fn interviews_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<InterviewOverview>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.interview_overview()?))
}

pub(crate) async fn schedules_handler<R, N>(
    State(service): SharedService<R, N>,
) -> Json<Vec<InterviewSchedule>>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Json(service.interview_schedules())
}

pub(crate) async fn evaluations_handler<R, N>(
    State(service): SharedService<R, N>,
) -> Json<Vec<InterviewEvaluation>>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Json(service.interview_evaluations())
}

pub(crate) async fn slots_handler<R, N>(State(service): SharedService<R, N>) -> Json<TimeSlots>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Json(service.available_time_slots(today()))
}

pub(crate) async fn stats_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<ApplicationStats>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.application_stats()?))
}

pub(crate) async fn metrics_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<PipelineMetrics>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.pipeline_metrics()?))
}

pub(crate) async fn shortlisting_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<ShortlistingData>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.shortlisting_data()?))
}

pub(crate) async fn shortlist_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<ShortlistData>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.shortlist_data()?))
}

pub(crate) async fn offer_handler<R, N>(State(service): SharedService<R, N>) -> ApiResult<OfferData>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.offer_data(today())?))
}

pub(crate) async fn offer_status_handler<R, N>(
    State(service): SharedService<R, N>,
) -> Json<OfferStatus>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Json(service.offer_status(today()))
}

pub(crate) async fn update_offer_status_handler<R, N>(
    State(service): SharedService<R, N>,
    Json(request): Json<OfferStatusRequest>,
) -> ApiResult<OfferStatus>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    let OfferStatusRequest {
        stage,
        candidate_response,
    } = request;
    Ok(Json(service.update_offer_status(
        stage,
        candidate_response,
        today(),
    )?))
}

pub(crate) async fn onboarding_handler<R, N>(
    State(service): SharedService<R, N>,
) -> ApiResult<OnboardingPlan>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.onboarding_plan(today())?))
}

pub(crate) async fn complete_task_handler<R, N>(
    State(service): SharedService<R, N>,
    Json(request): Json<CompleteTaskRequest>,
) -> ApiResult<OnboardingProgress>
where
    R: CandidateRepository + 'static,
    N: OfferNotifier + 'static,
{
    Ok(Json(service.complete_onboarding_task(&request.task)?))
}
