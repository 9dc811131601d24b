//! Sample posting, candidate pool, and interview board used by the demo and the default service.

use chrono::NaiveDate;

use super::candidates::{Candidate, CandidateId, CandidateStatus, PipelineStage};
use super::interviews::{
    InterviewBoard, InterviewEvaluation, InterviewMode, InterviewRatings, InterviewSchedule,
    InterviewStatus, InterviewType,
};
use super::job::{generate_job_description, EmploymentType, JobData};

pub fn sample_job() -> JobData {
    let mut job = JobData {
        company_name: "NVIDIA".to_string(),
        department: "Administration".to_string(),
        job_title: "Receptionist & Event Assistant".to_string(),
        location: "Jaipur, Rajasthan".to_string(),
        employment_type: EmploymentType::Contract,
        min_salary: 120_000,
        max_salary: 300_000,
        experience_level: "senior experience level".to_string(),
        education: "masters degree preferred".to_string(),
        key_skills: "JAVA".to_string(),
        benefits: vec!["Health Insurance".to_string(), "Remote Work".to_string()],
        job_description: String::new(),
    };
    job.job_description = generate_job_description(&job);
    job
}

struct Row {
    id: u32,
    name: &'static str,
    title: &'static str,
    score: u8,
    status: CandidateStatus,
    interview_score: f32,
    applied_day: u32,
    stage: PipelineStage,
    location: &'static str,
    experience: &'static str,
    education: &'static str,
}

const ROWS: [Row; 10] = [
    Row { id: 1, name: "Sarah Chen", title: "Senior ML Engineer", score: 95, status: CandidateStatus::Shortlisted, interview_score: 9.2, applied_day: 16, stage: PipelineStage::Interview, location: "Mumbai", experience: "8 years", education: "PhD in Computer Science" },
    Row { id: 2, name: "Michael Rodriguez", title: "AI Research Scientist", score: 92, status: CandidateStatus::Shortlisted, interview_score: 8.8, applied_day: 15, stage: PipelineStage::Interview, location: "Delhi", experience: "6 years", education: "MS in Machine Learning" },
    Row { id: 3, name: "Emily Wang", title: "Deep Learning Engineer", score: 88, status: CandidateStatus::Shortlisted, interview_score: 0.0, applied_day: 14, stage: PipelineStage::Screening, location: "Bangalore", experience: "5 years", education: "BS in Computer Science" },
    Row { id: 4, name: "David Kim", title: "Computer Vision Engineer", score: 87, status: CandidateStatus::Shortlisted, interview_score: 8.1, applied_day: 13, stage: PipelineStage::Interview, location: "Hyderabad", experience: "7 years", education: "MS in Computer Vision" },
    Row { id: 5, name: "Alex Johnson", title: "NLP Specialist", score: 85, status: CandidateStatus::Shortlisted, interview_score: 0.0, applied_day: 12, stage: PipelineStage::Applied, location: "Chennai", experience: "4 years", education: "BS in Linguistics" },
    Row { id: 6, name: "Jennifer Lee", title: "Data Scientist", score: 89, status: CandidateStatus::UnderReview, interview_score: 0.0, applied_day: 11, stage: PipelineStage::Screening, location: "Pune", experience: "6 years", education: "MS in Statistics" },
    Row { id: 7, name: "Robert Smith", title: "Software Engineer", score: 76, status: CandidateStatus::Rejected, interview_score: 0.0, applied_day: 10, stage: PipelineStage::Rejected, location: "Kolkata", experience: "3 years", education: "BS in Engineering" },
    Row { id: 8, name: "Lisa Zhang", title: "Product Manager", score: 91, status: CandidateStatus::Shortlisted, interview_score: 8.9, applied_day: 9, stage: PipelineStage::Offer, location: "Gurgaon", experience: "9 years", education: "MBA in Product Management" },
    Row { id: 9, name: "James Wilson", title: "Backend Developer", score: 82, status: CandidateStatus::UnderReview, interview_score: 0.0, applied_day: 18, stage: PipelineStage::Applied, location: "Noida", experience: "4 years", education: "BS in Software Engineering" },
    Row { id: 10, name: "Priya Sharma", title: "Frontend Developer", score: 90, status: CandidateStatus::Shortlisted, interview_score: 0.0, applied_day: 18, stage: PipelineStage::Screening, location: "Jaipur", experience: "5 years", education: "BS in Computer Science" },
];

pub fn sample_candidates() -> Vec<Candidate> {
    ROWS.iter()
        .map(|row| Candidate {
            id: CandidateId(row.id),
            name: row.name.to_string(),
            title: row.title.to_string(),
            score: row.score,
            status: row.status,
            interview_score: row.interview_score,
            applied_date: NaiveDate::from_ymd_opt(2025, 9, row.applied_day),
            stage: row.stage,
            location: Some(row.location.to_string()),
            experience: Some(row.experience.to_string()),
            education: Some(row.education.to_string()),
        })
        .collect()
}

struct Booking {
    id: u32,
    name: &'static str,
    day: u32,
    time: &'static str,
    interview_type: InterviewType,
    mode: InterviewMode,
    status: InterviewStatus,
    interviewers: &'static [&'static str],
    meeting_link: Option<&'static str>,
    location: Option<&'static str>,
}

const BOOKINGS: [Booking; 3] = [
    Booking { id: 1, name: "Sarah Chen", day: 20, time: "10:00", interview_type: InterviewType::Technical, mode: InterviewMode::VideoCall, status: InterviewStatus::Scheduled, interviewers: &["John Smith"], meeting_link: Some("https://zoom.us/j/123456789"), location: None },
    Booking { id: 2, name: "Michael Rodriguez", day: 21, time: "14:00", interview_type: InterviewType::Behavioral, mode: InterviewMode::VideoCall, status: InterviewStatus::Completed, interviewers: &["Sarah Johnson"], meeting_link: Some("https://teams.microsoft.com/l/meetup-join/123"), location: None },
    Booking { id: 4, name: "David Kim", day: 22, time: "11:00", interview_type: InterviewType::Panel, mode: InterviewMode::InPerson, status: InterviewStatus::Scheduled, interviewers: &["John Smith", "Mike Chen"], meeting_link: None, location: Some("Conference Room A") },
];

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Bookings for candidates 1, 2, and 4, with feedback recorded for candidate 2.
pub fn sample_interviews() -> InterviewBoard {
    let schedules = BOOKINGS
        .iter()
        .filter_map(|booking| {
            Some(InterviewSchedule {
                candidate_id: CandidateId(booking.id),
                candidate_name: booking.name.to_string(),
                date: NaiveDate::from_ymd_opt(2025, 9, booking.day)?,
                time: booking.time.to_string(),
                interview_type: booking.interview_type,
                mode: booking.mode,
                status: booking.status,
                interviewers: to_strings(booking.interviewers),
                meeting_link: booking.meeting_link.map(str::to_string),
                location: booking.location.map(str::to_string),
                invitation_sent: true,
            })
        })
        .collect();

    let ratings = InterviewRatings {
        technical_skills: 4,
        communication: 5,
        problem_solving: 4,
        culture_fit: 5,
    };
    let evaluations = NaiveDate::from_ymd_opt(2025, 9, 21)
        .map(|interview_date| InterviewEvaluation {
            candidate_id: CandidateId(2),
            candidate_name: "Michael Rodriguez".to_string(),
            interview_date,
            interviewers: to_strings(&["Sarah Johnson"]),
            ratings,
            notes: "Excellent communication skills and strong technical background. \
                    Shows great enthusiasm for the role."
                .to_string(),
            overall_score: ratings.overall(),
        })
        .into_iter()
        .collect();

    InterviewBoard::new(schedules, evaluations)
}
