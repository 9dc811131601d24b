use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Internship => "Internship",
            Self::Contract => "Contract",
        }
    }
}

/// The role being hired for, including the generated posting text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobData {
    pub company_name: String,
    pub department: String,
    pub job_title: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub min_salary: u32,
    pub max_salary: u32,
    pub experience_level: String,
    pub education: String,
    pub key_skills: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub job_description: String,
}

impl JobData {
    /// A description is only generated once the posting names a role, a company and a place.
    pub fn has_required_fields(&self) -> bool {
        [&self.job_title, &self.company_name, &self.location]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Comma separated `key_skills` split into trimmed entries.
    pub fn skills(&self) -> Vec<String> {
        self.key_skills
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Applies every field present in `patch` and regenerates the description
    /// when the required fields are filled in.
    pub fn merged(&self, patch: JobDataPatch) -> Self {
        let mut job = self.clone();
        let JobDataPatch {
            company_name,
            department,
            job_title,
            location,
            employment_type,
            min_salary,
            max_salary,
            experience_level,
            education,
            key_skills,
            benefits,
            job_description,
        } = patch;

        if let Some(value) = company_name {
            job.company_name = value;
        }
        if let Some(value) = department {
            job.department = value;
        }
        if let Some(value) = job_title {
            job.job_title = value;
        }
        if let Some(value) = location {
            job.location = value;
        }
        if let Some(value) = employment_type {
            job.employment_type = value;
        }
        if let Some(value) = min_salary {
            job.min_salary = value;
        }
        if let Some(value) = max_salary {
            job.max_salary = value;
        }
        if let Some(value) = experience_level {
            job.experience_level = value;
        }
        if let Some(value) = education {
            job.education = value;
        }
        if let Some(value) = key_skills {
            job.key_skills = value;
        }
        if let Some(value) = benefits {
            job.benefits = value;
        }
        if let Some(value) = job_description {
            job.job_description = value;
        }

        if job.has_required_fields() {
            job.job_description = generate_job_description(&job);
        }
        job
    }
}

/// Partial update for [`JobData`]; absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDataPatch {
    pub company_name: Option<String>,
    pub department: Option<String>,
    pub job_title: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub min_salary: Option<u32>,
    pub max_salary: Option<u32>,
    pub experience_level: Option<String>,
    pub education: Option<String>,
    pub key_skills: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub job_description: Option<String>,
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Renders the markdown posting for `job`.
pub fn generate_job_description(job: &JobData) -> String {
    let summary = if job.department.trim().is_empty() {
        "Role details to be confirmed.".to_string()
    } else {
        format!(
            "We are looking for a {} to join our {} team.",
            job.job_title, job.department
        )
    };

    let benefits = if job.benefits.is_empty() {
        "Health Insurance, Remote Work".to_string()
    } else {
        job.benefits.join(", ")
    };

    let compensation = if job.min_salary > 0 && job.max_salary > 0 {
        format!("{} - {}", job.min_salary, job.max_salary)
    } else {
        "Competitive salary".to_string()
    };

    format!(
        "# {title}\n\
         \n\
         ## About {company}\n\
         Join our dynamic team at {company} in {location}.\n\
         \n\
         ## Job Description\n\
         {summary}\n\
         \n\
         ## Key Responsibilities\n\
         - Lead innovative projects in {focus}\n\
         - Collaborate with cross-functional teams\n\
         - Drive technical excellence and best practices\n\
         - Mentor junior team members\n\
         \n\
         ## Requirements\n\
         - {experience}\n\
         - {education}\n\
         - Skills: {skills}\n\
         \n\
         ## Benefits\n\
         {benefits}\n\
         \n\
         ## Compensation\n\
         {compensation}",
        title = job.job_title,
        company = job.company_name,
        location = job.location,
        focus = or_fallback(&job.key_skills, "product"),
        experience = or_fallback(&job.experience_level, "Experience level not specified"),
        education = or_fallback(&job.education, "Education requirements not specified"),
        skills = or_fallback(&job.key_skills, "Skills not specified"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting() -> JobData {
        JobData {
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
        }
    }

    #[test]
    fn description_contains_every_section() {
        let text = generate_job_description(&posting());
        assert!(text.starts_with("# Receptionist & Event Assistant\n"));
        assert!(text.contains("Join our dynamic team at NVIDIA in Jaipur, Rajasthan."));
        assert!(text.contains("join our Administration team"));
        assert!(text.contains("- Lead innovative projects in JAVA"));
        assert!(text.contains("- Skills: JAVA"));
        assert!(text.contains("## Benefits\nHealth Insurance, Remote Work"));
        assert!(text.ends_with("## Compensation\n120000 - 300000"));
    }

    #[test]
    fn description_falls_back_for_missing_fields() {
        let job = JobData {
            department: String::new(),
            key_skills: String::new(),
            experience_level: String::new(),
            education: String::new(),
            benefits: Vec::new(),
            max_salary: 0,
            ..posting()
        };
        let text = generate_job_description(&job);
        assert!(text.contains("Role details to be confirmed."));
        assert!(text.contains("- Lead innovative projects in product"));
        assert!(text.contains("- Experience level not specified"));
        assert!(text.contains("- Education requirements not specified"));
        assert!(text.contains("- Skills: Skills not specified"));
        assert!(text.contains("## Benefits\nHealth Insurance, Remote Work"));
        assert!(text.ends_with("Competitive salary"));
    }

    #[test]
    fn merge_regenerates_when_required_fields_present() {
        let job = posting();
        let updated = job.merged(JobDataPatch {
            job_title: Some("Event Coordinator".to_string()),
            ..JobDataPatch::default()
        });
        assert_eq!(updated.job_title, "Event Coordinator");
        assert_eq!(updated.company_name, "NVIDIA");
        assert!(updated.job_description.starts_with("# Event Coordinator"));
    }

    #[test]
    fn merge_keeps_manual_description_when_incomplete() {
        let job = JobData::default();
        let updated = job.merged(JobDataPatch {
            company_name: Some("Acme".to_string()),
            job_description: Some("draft notes".to_string()),
            ..JobDataPatch::default()
        });
        assert!(!updated.has_required_fields());
        assert_eq!(updated.job_description, "draft notes");
    }

    #[test]
    fn skills_split_on_commas() {
        let job = JobData {
            key_skills: "Rust, SQL,, Kubernetes ".to_string(),
            ..JobData::default()
        };
        assert_eq!(job.skills(), ["Rust", "SQL", "Kubernetes"]);
    }

    #[test]
    fn patch_deserializes_partial_payloads() {
        let patch: JobDataPatch =
            serde_json::from_str(r#"{"location":"Pune","employment_type":"part-time"}"#)
                .expect("partial patch");
        assert_eq!(patch.location.as_deref(), Some("Pune"));
        assert_eq!(patch.employment_type, Some(EmploymentType::PartTime));
        assert!(patch.job_title.is_none());
    }
}
