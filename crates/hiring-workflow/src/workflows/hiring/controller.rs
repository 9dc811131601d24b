use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::domain::{HiringStage, NextButton, StepAction, StepError, WorkflowStep, STEP_COUNT};

/// Immutable view of the workflow. Every accepted mutation publishes a new
/// snapshot; rejected ones publish nothing.
///
/// The step table always holds one entry per stage in stage order, so the
/// current step can be looked up by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowSnapshot {
    current_step: HiringStage,
    steps: [WorkflowStep; STEP_COUNT as usize],
}

impl WorkflowSnapshot {
    pub fn fresh() -> Self {
        Self {
            current_step: HiringStage::CreateJob,
            steps: HiringStage::ordered().map(WorkflowStep::pending),
        }
    }

    /// Positions the workflow on `stage` with every earlier step completed.
    pub fn resumed_at(stage: HiringStage) -> Self {
        let mut snapshot = Self::fresh();
        snapshot.current_step = stage;
        for step in &mut snapshot.steps {
            step.completed = step.id < stage;
        }
        snapshot
    }

    pub fn current_step(&self) -> HiringStage {
        self.current_step
    }

    pub fn steps(&self) -> &[WorkflowStep] {
        &self.steps
    }

    pub fn step(&self, stage: HiringStage) -> &WorkflowStep {
        &self.steps[stage.index()]
    }

    pub fn current_step_info(&self) -> &WorkflowStep {
        self.step(self.current_step)
    }

    pub fn is_completed(&self, stage: HiringStage) -> bool {
        self.step(stage).completed
    }

    /// Sidebar rule: only completed steps and the current one are reachable.
    pub fn can_navigate_to(&self, stage: HiringStage) -> bool {
        stage == self.current_step || self.is_completed(stage)
    }

    pub fn completed_flags(&self) -> Vec<bool> {
        self.steps.iter().map(|step| step.completed).collect()
    }

    pub fn is_finished(&self) -> bool {
        self.steps.iter().all(|step| step.completed)
    }

    pub fn next_button(&self) -> NextButton {
        self.current_step.action().button()
    }

    fn with_current(&self, stage: HiringStage) -> Self {
        Self {
            current_step: stage,
            steps: self.steps.clone(),
        }
    }

    fn with_completed(&self, stage: HiringStage) -> Self {
        let mut next = self.clone();
        next.steps[stage.index()].completed = true;
        next
    }

    pub fn view(&self) -> WorkflowView {
        WorkflowView {
            current_step: self.current_step,
            current_step_info: self.current_step_info().clone(),
            next_button: self.next_button(),
            finished: self.is_finished(),
            navigable: HiringStage::ordered()
                .into_iter()
                .filter(|stage| self.can_navigate_to(*stage))
                .collect(),
            steps: self.steps.to_vec(),
        }
    }
}

impl Default for WorkflowSnapshot {
    fn default() -> Self {
        Self::fresh()
    }
}

/// Serializable payload handed to consumers rendering the wizard.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowView {
    pub current_step: HiringStage,
    pub current_step_info: WorkflowStep,
    pub next_button: NextButton,
    pub finished: bool,
    /// Steps the sidebar may jump to.
    pub navigable: Vec<HiringStage>,
    pub steps: Vec<WorkflowStep>,
}

/// Owns the step state and publishes each new snapshot to subscribers.
#[derive(Debug)]
pub struct StepController {
    state: watch::Sender<WorkflowSnapshot>,
}

impl StepController {
    pub fn new() -> Self {
        Self::from_snapshot(WorkflowSnapshot::fresh())
    }

    pub fn resume_at(stage: HiringStage) -> Self {
        Self::from_snapshot(WorkflowSnapshot::resumed_at(stage))
    }

    pub fn from_snapshot(snapshot: WorkflowSnapshot) -> Self {
        let (state, _) = watch::channel(snapshot);
        Self { state }
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.state.subscribe()
    }

    pub fn current_step(&self) -> HiringStage {
        self.state.borrow().current_step
    }

    pub fn current_step_info(&self) -> WorkflowStep {
        self.state.borrow().current_step_info().clone()
    }

    /// Jumps to `requested` regardless of completion.
    pub fn set_current_step(&self, requested: i64) -> Result<WorkflowSnapshot, StepError> {
        let stage = HiringStage::try_from(requested).map_err(|err| {
            warn!(requested, "rejected navigation outside the workflow");
            err
        })?;
        self.apply(|snapshot| Ok(snapshot.with_current(stage)))
    }

    /// Sidebar navigation: like [`Self::set_current_step`] but only to a
    /// completed step or the current one.
    pub fn navigate_to_step(&self, requested: i64) -> Result<WorkflowSnapshot, StepError> {
        let stage = HiringStage::try_from(requested)?;
        self.apply(|snapshot| {
            if !snapshot.can_navigate_to(stage) {
                return Err(StepError::NavigationLocked { requested: stage });
            }
            Ok(snapshot.with_current(stage))
        })
        .map_err(|err| {
            warn!(requested, %err, "rejected sidebar navigation");
            err
        })
    }

    pub fn complete_step(&self, requested: i64) -> Result<WorkflowSnapshot, StepError> {
        let stage = HiringStage::try_from(requested).map_err(|err| {
            warn!(requested, "rejected completion of unknown step");
            err
        })?;
        self.apply(|snapshot| Ok(snapshot.with_completed(stage)))
    }

    /// Completes the current step and advances. Rejected on the last step.
    pub fn next_step(&self) -> Result<WorkflowSnapshot, StepError> {
        self.apply(|snapshot| {
            let current = snapshot.current_step;
            let next = current.next().ok_or(StepError::AtLastStep)?;
            Ok(snapshot.with_completed(current).with_current(next))
        })
    }

    pub fn previous_step(&self) -> Result<WorkflowSnapshot, StepError> {
        self.apply(|snapshot| {
            let previous = snapshot
                .current_step
                .previous()
                .ok_or(StepError::AtFirstStep)?;
            Ok(snapshot.with_current(previous))
        })
    }

    /// Runs the advance action bound to the current step.
    pub fn perform(&self, action: StepAction) -> Result<WorkflowSnapshot, StepError> {
        let result = self.apply(|snapshot| {
            let current = snapshot.current_step;
            if action.stage() != current {
                return Err(StepError::ActionUnavailable { action, current });
            }

            let completed = snapshot.with_completed(current);
            match action {
                StepAction::CompleteWorkflow => Ok(completed),
                _ => {
                    let next = current.next().ok_or(StepError::AtLastStep)?;
                    Ok(completed.with_current(next))
                }
            }
        });

        match &result {
            Ok(snapshot) if action == StepAction::CompleteWorkflow => {
                info!(finished = snapshot.is_finished(), "hiring workflow completed");
            }
            Ok(snapshot) => {
                info!(
                    action = action.label(),
                    step = snapshot.current_step.number(),
                    "advanced hiring workflow"
                );
            }
            Err(err) => warn!(action = action.label(), %err, "rejected step action"),
        }

        result
    }

    pub fn approve_job_description(&self) -> Result<WorkflowSnapshot, StepError> {
        self.perform(StepAction::ApproveJobDescription)
    }

    pub fn start_monitoring(&self) -> Result<WorkflowSnapshot, StepError> {
        self.perform(StepAction::StartMonitoring)
    }

    pub fn proceed_to_shortlisting(&self) -> Result<WorkflowSnapshot, StepError> {
        self.perform(StepAction::ProceedToShortlisting)
    }

    pub fn start_interviews(&self) -> Result<WorkflowSnapshot, StepError> {
        self.perform(StepAction::StartInterviews)
    }

    pub fn prepare_offers(&self) -> Result<WorkflowSnapshot, StepError> {
        self.perform(StepAction::PrepareOffers)
    }

    pub fn begin_onboarding(&self) -> Result<WorkflowSnapshot, StepError> {
        self.perform(StepAction::BeginOnboarding)
    }

    pub fn complete_workflow(&self) -> Result<WorkflowSnapshot, StepError> {
        self.perform(StepAction::CompleteWorkflow)
    }

    pub fn reset_workflow(&self) -> WorkflowSnapshot {
        let reset = self.state.send_if_modified(|current| {
            let fresh = WorkflowSnapshot::fresh();
            if *current == fresh {
                return false;
            }
            *current = fresh;
            true
        });
        if reset {
            info!("hiring workflow reset");
        }
        self.snapshot()
    }

    fn apply<F>(&self, transition: F) -> Result<WorkflowSnapshot, StepError>
    where
        F: FnOnce(&WorkflowSnapshot) -> Result<WorkflowSnapshot, StepError>,
    {
        let mut outcome = None;
        self.state.send_if_modified(|current| match transition(&*current) {
            Ok(next) => {
                let modified = next != *current;
                *current = next.clone();
                outcome = Some(Ok(next));
                modified
            }
            Err(err) => {
                outcome = Some(Err(err));
                false
            }
        });

        // send_if_modified runs the closure exactly once
        let outcome = outcome.unwrap_or_else(|| Ok(self.snapshot()));
        if let Ok(snapshot) = &outcome {
            debug!(step = snapshot.current_step.number(), "workflow snapshot updated");
        }
        outcome
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}
