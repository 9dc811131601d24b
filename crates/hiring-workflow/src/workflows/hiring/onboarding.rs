use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::candidates::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingTaskStatus {
    Completed,
    Pending,
    InProgress,
}

impl OnboardingTaskStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingTask {
    pub task: String,
    pub status: OnboardingTaskStatus,
}

impl OnboardingTask {
    fn new(task: &str, status: OnboardingTaskStatus) -> Self {
        Self {
            task: task.to_string(),
            status,
        }
    }
}

pub fn standard_tasks() -> Vec<OnboardingTask> {
    use OnboardingTaskStatus::{Completed, InProgress, Pending};

    vec![
        OnboardingTask::new("Offer letter signed", Completed),
        OnboardingTask::new("Background verification", Completed),
        OnboardingTask::new("Employment paperwork", Completed),
        OnboardingTask::new("Setup IT Equipment", Pending),
        OnboardingTask::new("Security badge creation", Pending),
        OnboardingTask::new("Benefits enrollment", InProgress),
        OnboardingTask::new("First day orientation", Pending),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnboardingProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

impl OnboardingProgress {
    pub fn of(tasks: &[OnboardingTask]) -> Self {
        let total = tasks.len();
        let completed = tasks
            .iter()
            .filter(|task| task.status == OnboardingTaskStatus::Completed)
            .count();
        let percentage = if total == 0 {
            100
        } else {
            u8::try_from(completed * 100 / total).unwrap_or(100)
        };

        Self {
            completed,
            total,
            percentage,
        }
    }
}

/// Marks `name` completed. Matching ignores ASCII case.
pub fn complete_task(tasks: &mut [OnboardingTask], name: &str) -> Result<(), OnboardingError> {
    let task = tasks
        .iter_mut()
        .find(|task| task.task.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| OnboardingError::TaskNotFound(name.to_string()))?;
    task.status = OnboardingTaskStatus::Completed;
    Ok(())
}

#[derive(Debug, Clone, Serialize)]
pub struct OnboardingPlan {
    pub new_hire: Candidate,
    pub start_date: NaiveDate,
    pub department: String,
    pub manager: &'static str,
    pub hr_contact: &'static str,
    pub tasks: Vec<OnboardingTask>,
    pub progress: OnboardingProgress,
    pub next_steps: Vec<String>,
}

impl OnboardingPlan {
    pub fn new(
        new_hire: Candidate,
        start_date: NaiveDate,
        department: String,
        tasks: Vec<OnboardingTask>,
    ) -> Self {
        let progress = OnboardingProgress::of(&tasks);
        let next_steps = tasks
            .iter()
            .filter(|task| task.status != OnboardingTaskStatus::Completed)
            .map(|task| task.task.clone())
            .collect();

        Self {
            new_hire,
            start_date,
            department,
            manager: "John Smith",
            hr_contact: "Sarah Johnson",
            tasks,
            progress,
            next_steps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OnboardingError {
    #[error("onboarding task '{0}' not found")]
    TaskNotFound(String),
}
