use serde::{Deserialize, Serialize};

/// One stage of the linear hiring pipeline. Serialized as its step number (1..=8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum HiringStage {
    CreateJob,
    ReviewApprove,
    PostJob,
    MonitorApplications,
    ShortlistCandidates,
    ConductInterviews,
    SendOffer,
    Onboarding,
}

pub const STEP_COUNT: u8 = 8;

impl HiringStage {
    pub const fn ordered() -> [Self; STEP_COUNT as usize] {
        [
            Self::CreateJob,
            Self::ReviewApprove,
            Self::PostJob,
            Self::MonitorApplications,
            Self::ShortlistCandidates,
            Self::ConductInterviews,
            Self::SendOffer,
            Self::Onboarding,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::CreateJob => 1,
            Self::ReviewApprove => 2,
            Self::PostJob => 3,
            Self::MonitorApplications => 4,
            Self::ShortlistCandidates => 5,
            Self::ConductInterviews => 6,
            Self::SendOffer => 7,
            Self::Onboarding => 8,
        }
    }

    /// Zero-based position, for indexing per-step arrays.
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::CreateJob => "Create Job Description",
            Self::ReviewApprove => "Review & Approve",
            Self::PostJob => "Post Job",
            Self::MonitorApplications => "Monitor Applications",
            Self::ShortlistCandidates => "Shortlist Candidates",
            Self::ConductInterviews => "Conduct Interviews",
            Self::SendOffer => "Send Offer",
            Self::Onboarding => "Onboarding",
        }
    }

    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::CreateJob => "Define role requirements and company details",
            Self::ReviewApprove => "Review generated job description",
            Self::PostJob => "Publish to job boards and platforms",
            Self::MonitorApplications => "Track incoming applications",
            Self::ShortlistCandidates => "Filter and select promising candidates",
            Self::ConductInterviews => "Interview shortlisted candidates",
            Self::SendOffer => "Extend job offer to selected candidate",
            Self::Onboarding => "Welcome new hire",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::try_from(i64::from(self.number()) + 1).ok()
    }

    pub fn previous(self) -> Option<Self> {
        Self::try_from(i64::from(self.number()) - 1).ok()
    }

    /// The advance action the UI offers while this stage is current.
    pub const fn action(self) -> StepAction {
        match self {
            Self::CreateJob => StepAction::Next,
            Self::ReviewApprove => StepAction::ApproveJobDescription,
            Self::PostJob => StepAction::StartMonitoring,
            Self::MonitorApplications => StepAction::ProceedToShortlisting,
            Self::ShortlistCandidates => StepAction::StartInterviews,
            Self::ConductInterviews => StepAction::PrepareOffers,
            Self::SendOffer => StepAction::BeginOnboarding,
            Self::Onboarding => StepAction::CompleteWorkflow,
        }
    }
}

impl From<HiringStage> for u8 {
    fn from(stage: HiringStage) -> Self {
        stage.number()
    }
}

impl TryFrom<i64> for HiringStage {
    type Error = StepError;

    fn try_from(requested: i64) -> Result<Self, Self::Error> {
        requested
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| Self::ordered().get(index).copied())
            .ok_or(StepError::OutOfRange { requested })
    }
}

impl TryFrom<u8> for HiringStage {
    type Error = StepError;

    fn try_from(requested: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(requested))
    }
}

/// Advance actions offered per step. Each one completes its own step and moves
/// to the following one, except [`StepAction::CompleteWorkflow`] which only
/// completes the final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepAction {
    Next,
    ApproveJobDescription,
    StartMonitoring,
    ProceedToShortlisting,
    StartInterviews,
    PrepareOffers,
    BeginOnboarding,
    CompleteWorkflow,
}

impl StepAction {
    pub const fn stage(self) -> HiringStage {
        match self {
            Self::Next => HiringStage::CreateJob,
            Self::ApproveJobDescription => HiringStage::ReviewApprove,
            Self::StartMonitoring => HiringStage::PostJob,
            Self::ProceedToShortlisting => HiringStage::MonitorApplications,
            Self::StartInterviews => HiringStage::ShortlistCandidates,
            Self::PrepareOffers => HiringStage::ConductInterviews,
            Self::BeginOnboarding => HiringStage::SendOffer,
            Self::CompleteWorkflow => HiringStage::Onboarding,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::ApproveJobDescription => "Approve & Continue",
            Self::StartMonitoring => "Start Monitoring",
            Self::ProceedToShortlisting => "Proceed to Shortlisting",
            Self::StartInterviews => "Start Interviews",
            Self::PrepareOffers => "Prepare Offers",
            Self::BeginOnboarding => "Begin Onboarding",
            Self::CompleteWorkflow => "Complete Workflow",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Next => "→",
            Self::ApproveJobDescription => "✓",
            Self::StartMonitoring => "📊",
            Self::ProceedToShortlisting => "⭐",
            Self::StartInterviews => "🎯",
            Self::PrepareOffers => "💼",
            Self::BeginOnboarding => "🎉",
            Self::CompleteWorkflow => "✓✓",
        }
    }

    pub fn button(self) -> NextButton {
        NextButton {
            action: self,
            label: self.label(),
            icon: self.icon(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextButton {
    pub action: StepAction,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Descriptor for a single step; `id` mirrors the stage's position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowStep {
    pub id: HiringStage,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub completed: bool,
}

impl WorkflowStep {
    pub fn pending(stage: HiringStage) -> Self {
        Self {
            id: stage,
            title: stage.title(),
            subtitle: stage.subtitle(),
            completed: false,
        }
    }
}

/// Rejected navigation requests. State is left untouched whenever one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("step {requested} is outside the workflow range 1..={max}", max = STEP_COUNT)]
    OutOfRange { requested: i64 },
    #[error("already on the first step")]
    AtFirstStep,
    #[error("already on the last step")]
    AtLastStep,
    #[error("step {} is neither completed nor current", .requested.number())]
    NavigationLocked { requested: HiringStage },
    #[error(
        "'{}' belongs to step {} but the workflow is on step {}",
        .action.label(),
        .action.stage().number(),
        .current.number()
    )]
    ActionUnavailable {
        action: StepAction,
        current: HiringStage,
    },
}
