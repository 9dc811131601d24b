use crate::infra::{InMemoryCandidateRepository, LoggingOfferNotifier};
use chrono::{Local, NaiveDate};
use clap::Args;
use hiring_workflow::error::AppError;
use hiring_workflow::workflows::hiring::seed::sample_job;
use hiring_workflow::workflows::hiring::{
    CandidateId, EvaluationRequest, HiringStage, HiringWorkflowService, InterviewDecision,
    InterviewMode, InterviewRatings, InterviewRequest, InterviewType, OfferStage, StepAction,
    StepController, WorkflowSnapshot,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the full candidate pool before shortlisting.
    #[arg(long)]
    pub(crate) list_candidates: bool,
    /// Print the generated job posting.
    #[arg(long)]
    pub(crate) show_posting: bool,
}

pub(crate) fn print_steps() {
    println!("Hiring workflow steps");
    for stage in HiringStage::ordered() {
        let button = stage.action().button();
        println!(
            "  {}. {} - {} [{} {}]",
            stage.number(),
            stage.title(),
            stage.subtitle(),
            button.icon,
            button.label
        );
    }
}

fn render_progress(snapshot: &WorkflowSnapshot) -> String {
    snapshot
        .completed_flags()
        .into_iter()
        .map(|done| if done { '#' } else { '.' })
        .collect()
}

fn advance(
    service: &HiringWorkflowService<InMemoryCandidateRepository, LoggingOfferNotifier>,
    action: StepAction,
) -> Result<(), AppError> {
    let snapshot = service.advance(action)?;
    let step = snapshot.current_step_info();
    println!(
        "\n[{}] {} -> step {}: {}",
        render_progress(&snapshot),
        action.label(),
        snapshot.current_step().number(),
        step.title
    );
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        list_candidates,
        show_posting,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let notifier = Arc::new(LoggingOfferNotifier::default());
    let service = HiringWorkflowService::new(
        Arc::new(InMemoryCandidateRepository::seeded()),
        notifier.clone(),
        sample_job(),
        StepController::new(),
    );

    let job = service.job();
    println!("Hiring workflow demo ({today})");
    println!(
        "- {} at {} ({}, {})",
        job.job_title,
        job.company_name,
        job.location,
        job.employment_type.label()
    );
    if show_posting {
        println!("\n{}", job.job_description);
    }

    advance(&service, StepAction::Next)?;
    advance(&service, StepAction::ApproveJobDescription)?;
    advance(&service, StepAction::StartMonitoring)?;

    let posting = service.job_posting_status(today)?;
    println!(
        "  Posting {} | {} applicants, {} this week, {} today",
        posting.status,
        posting.total_applicants,
        posting.applications_this_week,
        posting.applications_today
    );
    let metrics = service.pipeline_metrics()?;
    println!(
        "  {} applicants | applied {} | screening {} | interview {} | offer {} | hired {} | rejected {}",
        metrics.total(),
        metrics.applied,
        metrics.screening,
        metrics.interview,
        metrics.offer,
        metrics.hired,
        metrics.rejected
    );
    advance(&service, StepAction::ProceedToShortlisting)?;

    let shortlisting = service.shortlisting_data()?;
    println!(
        "  {} of {} candidates score {}+",
        shortlisting.qualified_candidates,
        shortlisting.total_candidates,
        shortlisting.shortlist_criteria.min_score
    );
    if list_candidates {
        for candidate in service.candidates()? {
            println!(
                "    #{} {} ({}) score {} - {}",
                candidate.id,
                candidate.name,
                candidate.title,
                candidate.score,
                candidate.status.label()
            );
        }
    }
    let promoted = service.mark_for_shortlist(CandidateId(6), true)?;
    println!("  Shortlisted {} after review", promoted.name);
    let shortlist = service.shortlist_data()?;
    for hint in &shortlist.next_steps {
        println!("  Next: {} - {}", hint.title, hint.description);
    }
    advance(&service, StepAction::StartInterviews)?;

    let slots = service.available_time_slots(today);
    let emily = CandidateId(3);
    let booked = service.schedule_interview(
        emily,
        InterviewRequest {
            date: slots.available_dates[0],
            time: slots.time_slots[0].to_string(),
            interview_type: InterviewType::Technical,
            mode: InterviewMode::VideoCall,
            interviewers: vec!["John Smith".to_string(), "Mike Chen".to_string()],
            meeting_link: None,
            location: None,
        },
    )?;
    let invitation = service.send_interview_invitation(emily)?;
    println!(
        "  {} booked {} {} | invited {}",
        booked.candidate_name,
        booked.date,
        booked.time,
        invitation.recipients.join(", ")
    );
    let evaluation = service.save_interview_evaluation(
        emily,
        EvaluationRequest {
            ratings: InterviewRatings {
                technical_skills: 4,
                communication: 4,
                problem_solving: 5,
                culture_fit: 4,
            },
            notes: "Strong fundamentals".to_string(),
        },
        today,
    )?;
    let decision = InterviewDecision::PassToNextRound;
    service.apply_interview_decision(emily, decision)?;
    println!(
        "  Scored {:.2}/5 -> {}",
        evaluation.overall_score,
        decision.label()
    );
    advance(&service, StepAction::PrepareOffers)?;

    let offer = service.offer_data(today)?;
    println!(
        "  Offer for {}: {} base + {} bonus, starting {} ({})",
        offer.selected_candidate.name,
        offer.offer_details.base_salary,
        offer.offer_details.annual_bonus,
        offer.offer_details.start_date,
        offer.approval_status
    );
    service.update_offer_status(OfferStage::Sent, None, today)?;
    let status = service.update_offer_status(
        OfferStage::Responded,
        Some("accepted".to_string()),
        today,
    )?;
    println!(
        "  {} | {} e-mail(s) sent | expires {}",
        status.last_activity,
        notifier.outbox().len(),
        status.expiry_date
    );
    advance(&service, StepAction::BeginOnboarding)?;

    let plan = service.onboarding_plan(today)?;
    println!(
        "  Onboarding {} ({}) with {} | HR contact {}",
        plan.new_hire.name, plan.department, plan.manager, plan.hr_contact
    );
    for task in &plan.tasks {
        println!("    - {} [{}]", task.task, task.status.label());
    }
    let mut progress = plan.progress;
    for task in plan.next_steps {
        progress = service.complete_onboarding_task(&task)?;
    }
    println!(
        "  Onboarding {}/{} tasks complete ({}%)",
        progress.completed, progress.total, progress.percentage
    );

    let finished = service.complete_workflow()?;
    println!(
        "\n[{}] Workflow finished: {}",
        render_progress(&finished),
        finished.is_finished()
    );
    Ok(())
}
