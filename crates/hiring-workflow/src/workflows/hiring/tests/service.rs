use super::common::*;
use std::sync::Arc;

use axum::http::StatusCode;
use chrono::NaiveDate;

use crate::workflows::hiring::candidates::{CandidateId, CandidateRepository, CandidateStatus};
use crate::workflows::hiring::interviews::{
    EvaluationRequest, InterviewDecision, InterviewError, InterviewMode, InterviewRatings,
    InterviewRequest, InterviewStatus, InterviewType,
};
use crate::workflows::hiring::job::JobDataPatch;
use crate::workflows::hiring::offer::{OfferError, OfferStage};
use crate::workflows::hiring::onboarding::OnboardingError;
use crate::workflows::hiring::seed::sample_job;
use crate::workflows::hiring::{
    HiringServiceError, HiringStage, HiringWorkflowService, RepositoryError, StepAction,
    StepController, StepError,
};

#[test]
fn advance_rejects_actions_from_other_steps() {
    let (service, _, _) = build_service();

    match service.advance(StepAction::PrepareOffers) {
        Err(HiringServiceError::Step(StepError::ActionUnavailable { action, current })) => {
            assert_eq!(action, StepAction::PrepareOffers);
            assert_eq!(current, HiringStage::CreateJob);
        }
        other => panic!("expected unavailable action, got {other:?}"),
    }
    assert_eq!(service.workflow().current_step(), HiringStage::CreateJob);
}

#[test]
fn full_walk_finishes_the_workflow() {
    let (service, _, _) = build_service();

    for action in [
        StepAction::Next,
        StepAction::ApproveJobDescription,
        StepAction::StartMonitoring,
        StepAction::ProceedToShortlisting,
        StepAction::StartInterviews,
        StepAction::PrepareOffers,
        StepAction::BeginOnboarding,
    ] {
        service.advance(action).expect("action on its own step");
    }
    let finished = service.complete_workflow().expect("final step");

    assert!(finished.is_finished());
    assert_eq!(finished.current_step(), HiringStage::Onboarding);
}

#[test]
fn update_job_data_regenerates_description_and_notifies() {
    let (service, _, _) = build_service();
    let mut updates = service.subscribe_job();

    let job = service.update_job_data(JobDataPatch {
        job_title: Some("Front Office Lead".to_string()),
        ..JobDataPatch::default()
    });

    assert_eq!(job.company_name, "NVIDIA");
    assert!(job.job_description.starts_with("# Front Office Lead\n"));
    assert!(updates.has_changed().expect("sender alive"));
    assert_eq!(updates.borrow_and_update().job_title, "Front Office Lead");
}

#[test]
fn clearing_a_required_field_keeps_previous_description() {
    let (service, _, _) = build_service();
    let before = service.job().job_description;

    let job = service.update_job_data(JobDataPatch {
        location: Some(String::new()),
        ..JobDataPatch::default()
    });

    assert!(!job.has_required_fields());
    assert_eq!(job.job_description, before);
}

#[test]
fn status_update_is_persisted() {
    let (service, repository, _) = build_service();

    let updated = service
        .update_candidate_status(CandidateId(9), CandidateStatus::Interviewed)
        .expect("known candidate");
    assert_eq!(updated.status, CandidateStatus::Interviewed);

    let stored = repository
        .fetch(CandidateId(9))
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.status, CandidateStatus::Interviewed);
}

#[test]
fn status_update_propagates_not_found() {
    let (service, _, _) = build_service();

    let err = service
        .update_candidate_status(CandidateId(404), CandidateStatus::Rejected)
        .expect_err("unknown candidate");
    assert!(matches!(err, HiringServiceError::CandidateNotFound(CandidateId(404))));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn concurrent_status_updates_are_all_kept() {
    let (service, repository, _) = build_service();

    std::thread::scope(|scope| {
        for id in 1..=10 {
            let service = &service;
            scope.spawn(move || {
                for round in 0..25 {
                    let status = if round % 2 == 0 {
                        CandidateStatus::Rejected
                    } else {
                        CandidateStatus::Interviewed
                    };
                    service
                        .update_candidate_status(CandidateId(id), status)
                        .expect("known candidate");
                }
            });
        }
    });

    let stored = repository.list().expect("list");
    assert_eq!(stored.len(), 10);
    assert!(stored
        .iter()
        .all(|candidate| candidate.status == CandidateStatus::Rejected));
}

#[test]
fn shortlisting_changes_the_shortlist_view() {
    let (service, _, _) = build_service();
    assert_eq!(service.shortlist_data().expect("report").shortlisted_count, 7);

    service
        .mark_for_shortlist(CandidateId(6), true)
        .expect("shortlist");
    service
        .mark_for_shortlist(CandidateId(1), false)
        .expect("unshortlist");

    let shortlist = service.shortlist_data().expect("report");
    assert_eq!(shortlist.shortlisted_count, 7);
    assert!(shortlist
        .shortlisted_candidates
        .iter()
        .all(|candidate| candidate.id != CandidateId(1)));
}

#[test]
fn add_candidate_reports_conflicts() {
    let (service, _, _) = build_service();

    service
        .add_candidate(walk_in_candidate(11))
        .expect("new candidate");
    let err = service
        .add_candidate(walk_in_candidate(11))
        .expect_err("duplicate id");

    assert!(matches!(err, HiringServiceError::Repository(RepositoryError::Conflict)));
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
    assert_eq!(service.pipeline_metrics().expect("metrics").total(), 11);
}

#[test]
fn offer_goes_to_the_top_shortlisted_candidate() {
    let (service, _, _) = build_service();
    let offer = service.offer_data(today()).expect("offer");
    assert_eq!(offer.selected_candidate.name, "Sarah Chen");

    service
        .mark_for_shortlist(CandidateId(1), false)
        .expect("unshortlist");
    let offer = service.offer_data(today()).expect("offer");
    assert_eq!(offer.selected_candidate.name, "Michael Rodriguez");
}

#[test]
fn offer_requires_a_shortlisted_candidate() {
    let service = HiringWorkflowService::new(
        Arc::new(MemoryRepository::default()),
        Arc::new(MemoryNotifier::default()),
        sample_job(),
        StepController::new(),
    );

    let err = service.offer_data(today()).expect_err("empty pool");
    assert!(matches!(err, HiringServiceError::NoShortlistedCandidates));
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
    assert!(service.onboarding_plan(today()).is_err());
}

#[test]
fn sending_an_offer_dispatches_the_email_once() {
    let (service, _, notifier) = build_service();

    let status = service
        .update_offer_status(OfferStage::Sent, None, today())
        .expect("send");
    assert_eq!(status.stage, OfferStage::Sent);
    service
        .update_offer_status(OfferStage::Viewed, None, today())
        .expect("view");

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "Sarah Chen");
    assert_eq!(service.offer_status(today()).stage, OfferStage::Viewed);
}

#[test]
fn offer_status_rejects_backward_moves() {
    let (service, _, _) = build_service();
    service
        .update_offer_status(OfferStage::Sent, None, today())
        .expect("send");
    service
        .update_offer_status(OfferStage::Responded, Some("accepted".to_string()), today())
        .expect("respond");

    let err = service
        .update_offer_status(OfferStage::Viewed, None, today())
        .expect_err("backwards");
    assert!(matches!(
        err,
        HiringServiceError::Offer(OfferError::InvalidTransition {
            from: OfferStage::Responded,
            to: OfferStage::Viewed,
        })
    ));
    assert_eq!(
        service.offer_status(today()).candidate_response.as_deref(),
        Some("accepted")
    );
}

#[test]
fn unsent_offers_cannot_be_answered() {
    let (service, _, notifier) = build_service();

    let err = service
        .update_offer_status(OfferStage::Responded, Some("accepted".to_string()), today())
        .expect_err("never sent");
    assert!(matches!(
        err,
        HiringServiceError::Offer(OfferError::NotSent {
            to: OfferStage::Responded
        })
    ));
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
    assert!(service
        .update_offer_status(OfferStage::Viewed, None, today())
        .is_err());

    let status = service.offer_status(today());
    assert_eq!(status.stage, OfferStage::Draft);
    assert_eq!(status.candidate_response, None);
    assert!(notifier.sent().is_empty());
}

#[test]
fn lapsed_offers_can_no_longer_be_sent_or_accepted() {
    let (service, _, notifier) = build_service();
    let drafted_on = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");
    let months_later = NaiveDate::from_ymd_opt(2025, 12, 1).expect("valid date");
    assert!(!service.offer_status(drafted_on).expired);

    let status = service.offer_status(months_later);
    assert!(status.expired);
    assert_eq!(status.expiry_date.to_string(), "2025-09-08");

    let err = service
        .update_offer_status(OfferStage::Sent, None, months_later)
        .expect_err("expired");
    assert!(matches!(err, HiringServiceError::Offer(OfferError::Expired { .. })));
    assert_eq!(err.status_code(), StatusCode::CONFLICT);
    assert!(notifier.sent().is_empty());

    service
        .update_offer_status(OfferStage::Sent, None, drafted_on)
        .expect("sent in time");
    let err = service
        .update_offer_status(OfferStage::Responded, Some("accepted".to_string()), months_later)
        .expect_err("expired");
    assert_eq!(err.to_string(), "offer expired on 2025-09-08");
    assert_eq!(service.offer_status(months_later).stage, OfferStage::Sent);
}

#[test]
fn failed_delivery_leaves_offer_in_draft() {
    let service = HiringWorkflowService::new(
        Arc::new(MemoryRepository::seeded()),
        Arc::new(FailingNotifier),
        sample_job(),
        StepController::new(),
    );

    let err = service
        .update_offer_status(OfferStage::Sent, None, today())
        .expect_err("transport down");
    assert!(matches!(err, HiringServiceError::Notifier(_)));
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(service.offer_status(today()).stage, OfferStage::Draft);
}

#[test]
fn onboarding_plan_tracks_task_completion() {
    let (service, _, _) = build_service();

    let plan = service.onboarding_plan(today()).expect("plan");
    assert_eq!(plan.department, "Administration");
    assert_eq!(plan.start_date.to_string(), "2025-10-02");
    assert_eq!(plan.progress.percentage, 42);

    let progress = service
        .complete_onboarding_task("Setup IT Equipment")
        .expect("known task");
    assert_eq!(progress.completed, 4);
    assert_eq!(progress.percentage, 57);

    let plan = service.onboarding_plan(today()).expect("plan");
    assert!(!plan.next_steps.iter().any(|task| task == "Setup IT Equipment"));
}

#[test]
fn unknown_onboarding_task_is_not_found() {
    let (service, _, _) = build_service();

    let err = service
        .complete_onboarding_task("Parking pass")
        .expect_err("unknown task");
    assert!(matches!(
        err,
        HiringServiceError::Onboarding(OnboardingError::TaskNotFound(_))
    ));
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
}

#[test]
fn repository_outage_surfaces_as_internal_error() {
    let service = HiringWorkflowService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryNotifier::default()),
        sample_job(),
        StepController::new(),
    );

    let err = service.pipeline_metrics().expect_err("offline");
    assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        err.to_string(),
        "repository unavailable: database offline"
    );
}

fn panel_booking(interviewers: &[&str]) -> InterviewRequest {
    InterviewRequest {
        date: NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date"),
        time: "09:00".to_string(),
        interview_type: InterviewType::Panel,
        mode: InterviewMode::InPerson,
        interviewers: interviewers.iter().map(|name| name.to_string()).collect(),
        meeting_link: None,
        location: Some("Conference Room B".to_string()),
    }
}

#[test]
fn interview_round_trip_for_a_shortlisted_candidate() {
    let (service, repository, _) = build_service();
    let emily = CandidateId(3);

    let err = service
        .send_interview_invitation(emily)
        .expect_err("nothing booked yet");
    assert!(matches!(
        err,
        HiringServiceError::Interview(InterviewError::NotScheduled(CandidateId(3)))
    ));
    assert_eq!(err.status_code(), StatusCode::CONFLICT);

    let schedule = service
        .schedule_interview(emily, panel_booking(&["Lisa Wang"]))
        .expect("shortlisted");
    assert_eq!(schedule.candidate_name, "Emily Wang");
    assert_eq!(service.interview_schedules().len(), 4);

    let invitation = service.send_interview_invitation(emily).expect("booked");
    assert_eq!(invitation.recipients, ["Emily Wang", "Lisa Wang"]);

    let evaluation = service
        .save_interview_evaluation(
            emily,
            EvaluationRequest {
                ratings: InterviewRatings {
                    technical_skills: 3,
                    communication: 4,
                    problem_solving: 3,
                    culture_fit: 4,
                },
                notes: "Solid fundamentals".to_string(),
            },
            today(),
        )
        .expect("valid ratings");
    assert_eq!(evaluation.overall_score, 3.5);
    let overview = service.interview_overview().expect("overview");
    assert_eq!(overview.completed_interviews, 2);
    assert_eq!(overview.pending_feedback, 0);
    assert!(service
        .interview_schedules()
        .iter()
        .any(|s| s.candidate_id == emily && s.status == InterviewStatus::Completed));

    let candidate = service
        .apply_interview_decision(emily, InterviewDecision::Reject)
        .expect("known candidate");
    assert_eq!(candidate.status, CandidateStatus::Rejected);
    let stored = repository.fetch(emily).expect("fetch").expect("present");
    assert_eq!(stored.status, CandidateStatus::Rejected);

    let err = service
        .schedule_interview(emily, panel_booking(&["Lisa Wang"]))
        .expect_err("rejected candidates are not interviewed");
    assert!(matches!(
        err,
        HiringServiceError::Interview(InterviewError::NotShortlisted(CandidateId(3)))
    ));
}

#[test]
fn scheduling_validates_the_booking() {
    let (service, _, _) = build_service();

    let err = service
        .schedule_interview(CandidateId(1), panel_booking(&[]))
        .expect_err("no panel");
    assert!(matches!(
        err,
        HiringServiceError::Interview(InterviewError::NoInterviewers)
    ));
    assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let err = service
        .schedule_interview(CandidateId(404), panel_booking(&["John Smith"]))
        .expect_err("unknown candidate");
    assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

    let unchanged = service.interview_schedules();
    assert_eq!(unchanged.len(), 3);
    assert_eq!(unchanged[0].time, "10:00");
}

#[test]
fn passing_a_round_keeps_the_candidate_shortlisted() {
    let (service, _, _) = build_service();
    service
        .update_candidate_status(CandidateId(6), CandidateStatus::Interviewed)
        .expect("known candidate");
    let candidate = service
        .apply_interview_decision(CandidateId(6), InterviewDecision::PassToNextRound)
        .expect("known candidate");
    assert!(candidate.is_shortlisted());
}

#[test]
fn monitor_step_reports_posting_activity() {
    let (service, _, _) = build_service();
    service
        .add_candidate(walk_in_candidate(11))
        .expect("new candidate");

    let stats = service.application_stats().expect("stats");
    assert_eq!(stats.total_applications, 11);
    assert_eq!(stats.qualified, 9);

    let posting = service.job_posting_status(today()).expect("posting");
    assert_eq!(posting.total_applicants, 11);
    assert_eq!(posting.applications_today, 3);
    assert_eq!(posting.job_title, service.job().job_title);
}

