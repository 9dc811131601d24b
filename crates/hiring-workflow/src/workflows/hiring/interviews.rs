use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::candidates::{Candidate, CandidateId, CandidateStatus};

const TIME_SLOTS: [&str; 6] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00"];
const SLOT_DAYS: i64 = 3;
const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interviewer {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
}

pub const INTERVIEW_PANEL: [Interviewer; 4] = [
    Interviewer { id: 1, name: "John Smith", role: "Technical Lead" },
    Interviewer { id: 2, name: "Sarah Johnson", role: "HR Manager" },
    Interviewer { id: 3, name: "Mike Chen", role: "Senior Developer" },
    Interviewer { id: 4, name: "Lisa Wang", role: "Product Manager" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    Screening,
    Technical,
    Behavioral,
    Panel,
}

impl InterviewType {
    pub const ALL: [Self; 4] = [Self::Screening, Self::Technical, Self::Behavioral, Self::Panel];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Screening => "Screening Interview",
            Self::Technical => "Technical Interview",
            Self::Behavioral => "HR / Behavioral Interview",
            Self::Panel => "Final / Panel Interview",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewMode {
    VideoCall,
    InPerson,
    PhoneCall,
}

impl InterviewMode {
    pub const ALL: [Self; 3] = [Self::VideoCall, Self::InPerson, Self::PhoneCall];

    pub const fn label(self) -> &'static str {
        match self {
            Self::VideoCall => "Video Call",
            Self::InPerson => "In-person",
            Self::PhoneCall => "Phone Call",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Scheduled,
    Completed,
}

/// Booking details submitted when scheduling an interview.
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewRequest {
    pub date: NaiveDate,
    /// `HH:MM`, 24-hour clock.
    pub time: String,
    pub interview_type: InterviewType,
    pub mode: InterviewMode,
    pub interviewers: Vec<String>,
    #[serde(default)]
    pub meeting_link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewSchedule {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub interview_type: InterviewType,
    pub mode: InterviewMode,
    pub status: InterviewStatus,
    pub interviewers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub invitation_sent: bool,
}

/// Scores from 1 to 5 per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRatings {
    pub technical_skills: u8,
    pub communication: u8,
    pub problem_solving: u8,
    pub culture_fit: u8,
}

impl InterviewRatings {
    fn categories(&self) -> [(&'static str, u8); 4] {
        [
            ("technical_skills", self.technical_skills),
            ("communication", self.communication),
            ("problem_solving", self.problem_solving),
            ("culture_fit", self.culture_fit),
        ]
    }

    fn validate(&self) -> Result<(), InterviewError> {
        match self
            .categories()
            .into_iter()
            .find(|(_, rating)| !(1..=MAX_RATING).contains(rating))
        {
            Some((category, rating)) => Err(InterviewError::RatingOutOfRange { category, rating }),
            None => Ok(()),
        }
    }

    pub fn overall(&self) -> f32 {
        let categories = self.categories();
        let sum: u32 = categories.iter().map(|(_, rating)| u32::from(*rating)).sum();
        sum as f32 / categories.len() as f32
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRequest {
    pub ratings: InterviewRatings,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewEvaluation {
    pub candidate_id: CandidateId,
    pub candidate_name: String,
    pub interview_date: NaiveDate,
    pub interviewers: Vec<String>,
    pub ratings: InterviewRatings,
    pub notes: String,
    pub overall_score: f32,
}

/// Outcome chosen after an interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterviewDecision {
    PassToNextRound,
    Reject,
    SendOffer,
}

impl InterviewDecision {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PassToNextRound => "Pass to Next Round",
            Self::Reject => "Reject",
            Self::SendOffer => "Send Offer",
        }
    }

    /// Offers go to shortlisted candidates, so sending one keeps the candidate shortlisted.
    pub const fn candidate_status(self) -> CandidateStatus {
        match self {
            Self::PassToNextRound | Self::SendOffer => CandidateStatus::Shortlisted,
            Self::Reject => CandidateStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewInvitation {
    pub candidate_id: CandidateId,
    pub recipients: Vec<String>,
    pub subject: String,
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlots {
    pub available_dates: Vec<NaiveDate>,
    pub time_slots: Vec<&'static str>,
}

/// The three days after `today`, each offering the standard slots.
pub fn available_time_slots(today: NaiveDate) -> TimeSlots {
    TimeSlots {
        available_dates: (1..=SLOT_DAYS).map(|offset| today + Duration::days(offset)).collect(),
        time_slots: TIME_SLOTS.to_vec(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewOverview {
    pub shortlisted_candidates: Vec<Candidate>,
    pub total_interviews: usize,
    pub scheduled_interviews: usize,
    pub completed_interviews: usize,
    /// Completed interviews still waiting for an evaluation.
    pub pending_feedback: usize,
    pub interviewers: Vec<Interviewer>,
    pub interview_types: Vec<&'static str>,
    pub interview_modes: Vec<&'static str>,
}

/// Interview schedules and evaluations, at most one of each per candidate.
#[derive(Debug, Clone, Default)]
pub struct InterviewBoard {
    schedules: Vec<InterviewSchedule>,
    evaluations: Vec<InterviewEvaluation>,
}

impl InterviewBoard {
    pub fn new(schedules: Vec<InterviewSchedule>, evaluations: Vec<InterviewEvaluation>) -> Self {
        Self {
            schedules,
            evaluations,
        }
    }

    pub fn schedules(&self) -> &[InterviewSchedule] {
        &self.schedules
    }

    pub fn evaluations(&self) -> &[InterviewEvaluation] {
        &self.evaluations
    }

    pub fn schedule_for(&self, id: CandidateId) -> Option<&InterviewSchedule> {
        self.schedules.iter().find(|schedule| schedule.candidate_id == id)
    }

    /// Books an interview for a shortlisted candidate, replacing any earlier booking.
    pub fn schedule(
        &mut self,
        candidate: &Candidate,
        request: InterviewRequest,
    ) -> Result<InterviewSchedule, InterviewError> {
        if !candidate.is_shortlisted() {
            return Err(InterviewError::NotShortlisted(candidate.id));
        }
        let interviewers: Vec<String> = request
            .interviewers
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if interviewers.is_empty() {
            return Err(InterviewError::NoInterviewers);
        }
        let time = NaiveTime::parse_from_str(request.time.trim(), "%H:%M")
            .map_err(|_| InterviewError::InvalidTime(request.time.clone()))?
            .format("%H:%M")
            .to_string();

        let schedule = InterviewSchedule {
            candidate_id: candidate.id,
            candidate_name: candidate.name.clone(),
            date: request.date,
            time,
            interview_type: request.interview_type,
            mode: request.mode,
            status: InterviewStatus::Scheduled,
            interviewers,
            meeting_link: request.meeting_link,
            location: request.location,
            invitation_sent: false,
        };
        self.schedules.retain(|existing| existing.candidate_id != candidate.id);
        self.schedules.push(schedule.clone());
        Ok(schedule)
    }

    /// Addresses the candidate and the panel. Requires a booked interview.
    pub fn send_invitation(&mut self, id: CandidateId) -> Result<InterviewInvitation, InterviewError> {
        let schedule = self
            .schedules
            .iter_mut()
            .find(|schedule| schedule.candidate_id == id)
            .ok_or(InterviewError::NotScheduled(id))?;
        schedule.invitation_sent = true;

        let mut recipients = vec![schedule.candidate_name.clone()];
        recipients.extend(schedule.interviewers.iter().cloned());
        Ok(InterviewInvitation {
            candidate_id: id,
            recipients,
            subject: format!(
                "{} with {}",
                schedule.interview_type.label(),
                schedule.candidate_name
            ),
            date: schedule.date,
            time: schedule.time.clone(),
        })
    }

    /// Stores the evaluation, replacing any earlier one, and marks the
    /// candidate's interview completed.
    pub fn record_evaluation(
        &mut self,
        candidate: &Candidate,
        request: EvaluationRequest,
        today: NaiveDate,
    ) -> Result<InterviewEvaluation, InterviewError> {
        request.ratings.validate()?;

        let (interview_date, interviewers) = match self
            .schedules
            .iter_mut()
            .find(|schedule| schedule.candidate_id == candidate.id)
        {
            Some(schedule) => {
                schedule.status = InterviewStatus::Completed;
                (schedule.date, schedule.interviewers.clone())
            }
            None => (today, Vec::new()),
        };

        let evaluation = InterviewEvaluation {
            candidate_id: candidate.id,
            candidate_name: candidate.name.clone(),
            interview_date,
            interviewers,
            ratings: request.ratings,
            notes: request.notes,
            overall_score: request.ratings.overall(),
        };
        self.evaluations.retain(|existing| existing.candidate_id != candidate.id);
        self.evaluations.push(evaluation.clone());
        Ok(evaluation)
    }

    pub fn overview(&self, candidates: &[Candidate]) -> InterviewOverview {
        let with_status = |status: InterviewStatus| {
            self.schedules
                .iter()
                .filter(|schedule| schedule.status == status)
                .count()
        };
        let pending_feedback = self
            .schedules
            .iter()
            .filter(|schedule| schedule.status == InterviewStatus::Completed)
            .filter(|schedule| {
                !self
                    .evaluations
                    .iter()
                    .any(|evaluation| evaluation.candidate_id == schedule.candidate_id)
            })
            .count();

        InterviewOverview {
            shortlisted_candidates: candidates
                .iter()
                .filter(|candidate| candidate.is_shortlisted())
                .cloned()
                .collect(),
            total_interviews: self.schedules.len(),
            scheduled_interviews: with_status(InterviewStatus::Scheduled),
            completed_interviews: with_status(InterviewStatus::Completed),
            pending_feedback,
            interviewers: INTERVIEW_PANEL.to_vec(),
            interview_types: InterviewType::ALL.iter().map(|kind| kind.label()).collect(),
            interview_modes: InterviewMode::ALL.iter().map(|mode| mode.label()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterviewError {
    #[error("select at least one interviewer")]
    NoInterviewers,
    #[error("'{0}' is not a valid HH:MM interview time")]
    InvalidTime(String),
    #[error("candidate {0} is not shortlisted")]
    NotShortlisted(CandidateId),
    #[error("no interview scheduled for candidate {0}")]
    NotScheduled(CandidateId),
    #[error("{category} rating {rating} is outside 1..={max}", max = MAX_RATING)]
    RatingOutOfRange { category: &'static str, rating: u8 },
}
