//! Embedded fallback dataset
//!
//! Substituted for the work experience list when the remote document cannot
//! be read, so the timeline is never empty.

use crate::models::{Description, ExperienceRecord};
use crate::utils::constants::PLACEHOLDER_LOGO_URL;

/// What a resource shows in place of its list when the fetch fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Keep the list empty and show only the error
    Empty,
    /// Substitute the embedded work experience dataset
    EmbeddedWorkExperience,
}

impl FallbackPolicy {
    /// Items to publish after a failed fetch
    pub fn items(&self) -> Vec<ExperienceRecord> {
        match self {
            FallbackPolicy::Empty => Vec::new(),
            FallbackPolicy::EmbeddedWorkExperience => work_experience(),
        }
    }

    /// True when a failure still yields a populated list
    pub fn substitutes(&self) -> bool {
        matches!(self, FallbackPolicy::EmbeddedWorkExperience)
    }
}

fn record(
    role: &str,
    company_name: &str,
    location: &str,
    start_date: &str,
    end_date: &str,
    description: Vec<&str>,
) -> ExperienceRecord {
    ExperienceRecord {
        company_image: PLACEHOLDER_LOGO_URL.to_string(),
        role: role.to_string(),
        company_name: company_name.to_string(),
        location: location.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        description: Description::from(description),
    }
}

/// The three work experience entries from the current resume
pub fn work_experience() -> Vec<ExperienceRecord> {
    vec![
        record(
            "Computer Science Intern",
            "Hawthorn Football Club",
            "Mulgrave, VIC",
            "August 2025",
            "Present",
            vec![
                "Working with the technology team to build workflow optimisation projects for the coaches and staff.",
                "Developing an agentic pipeline with an environment setup by Google on their novel platform, Google Agentspace.",
                "Giving AI agents access to ChampionData hosted on the Snowflake platform.",
            ],
        ),
        record(
            "Software Engineer",
            "Plandid",
            "Remote, VIC",
            "July 2025",
            "Present",
            vec![
                "Developing the backend using FastAPI and SQLAlchemy for Plandid's vendor marketplace mobile application. Built for couples looking for wedding photographers, videographers, and content creators.",
                "Implementing a GraphQL based matching system to match vendors and couples based on content style and preferences.",
            ],
        ),
        record(
            "Programming Tutor",
            "Digimaker - Programming for Young Makers",
            "Eastern Suburbs, VIC",
            "October 2024",
            "Present",
            vec![
                "Teaching weekly Python, Java, C & JavaScript classes to primary school students across 8 different schools, achieving an average 90% in-class completion rate for my students.",
                "Used supplied lesson sheets to break down core programming concepts, allowing students to independently complete each coding challenge.",
                "Schools: Leibler Yavneh College, McKinnon PS, Ruskin Park PS, Mulgrave PS, ...",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_experience_fallback_has_three_entries() {
        let items = work_experience();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].company_name, "Hawthorn Football Club");
        assert_eq!(items[1].company_name, "Plandid");
        assert_eq!(items[2].role, "Programming Tutor");
        assert_eq!(items[1].description.bullets().len(), 2);
    }

    #[test]
    fn test_policies() {
        assert!(FallbackPolicy::Empty.items().is_empty());
        assert!(!FallbackPolicy::Empty.substitutes());
        assert_eq!(FallbackPolicy::EmbeddedWorkExperience.items(), work_experience());
        assert!(FallbackPolicy::EmbeddedWorkExperience.substitutes());
    }
}
