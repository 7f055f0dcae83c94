//! Experience list rendering
//!
//! Precedence is error > loading > data. A resource whose fallback policy
//! substituted embedded records renders them as ordinary data, without the
//! error line.

use super::escape;
use crate::core::{FetchState, Resource};
use crate::models::ExperienceRecord;

/// What a list section shows for a given fetch state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Error(Resource),
    Loading(Resource),
    Records(&'a [ExperienceRecord]),
}

impl<'a> ListView<'a> {
    pub fn from_state(resource: Resource, state: &'a FetchState) -> Self {
        let substituted = resource.fallback().substitutes() && !state.items.is_empty();
        if state.error.is_some() && !substituted {
            ListView::Error(resource)
        } else if state.loading {
            ListView::Loading(resource)
        } else {
            ListView::Records(&state.items)
        }
    }
}

/// `Error fetching work experience...`
pub fn error_line(resource: Resource) -> String {
    format!("Error fetching {}...", resource.label())
}

/// `Loading work experience...`
pub fn loading_line(resource: Resource) -> String {
    format!("Loading {}...", resource.label())
}

/// Render the body of a list section
pub fn render_list(resource: Resource, state: &FetchState) -> String {
    match ListView::from_state(resource, state) {
        ListView::Error(resource) => format!(
            "<p class=\"list-status list-error\">{}</p>\n",
            escape(&error_line(resource))
        ),
        ListView::Loading(resource) => format!(
            "<p class=\"list-status list-loading\">{}</p>\n",
            escape(&loading_line(resource))
        ),
        ListView::Records(records) => records.iter().map(render_record).collect(),
    }
}

/// One record block: logo, role, company, period and description bullets
pub fn render_record(record: &ExperienceRecord) -> String {
    let bullets: String = record
        .description
        .bullets()
        .into_iter()
        .map(|bullet| {
            format!(
                "<li><span class=\"bullet\">•</span><span>{}</span></li>\n",
                escape(bullet)
            )
        })
        .collect();

    format!(
        "<article class=\"experience\">\n\
         <img class=\"company-logo\" src=\"{image}\" alt=\"{company} logo\">\n\
         <div class=\"experience-details\">\n\
         <h3 class=\"role\">{role}</h3>\n\
         <p class=\"company\">{company}</p>\n\
         <p class=\"period\">{period}</p>\n\
         <ul class=\"description\">\n\
         {bullets}\
         </ul>\n\
         </div>\n\
         </article>\n",
        image = escape(&record.company_image),
        company = escape(&record.company_name),
        role = escape(&record.role),
        period = escape(&record.period_line()),
        bullets = bullets,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback::work_experience;
    use crate::models::Description;

    fn record(role: &str, description: Description) -> ExperienceRecord {
        ExperienceRecord {
            company_image: "logo.png".to_string(),
            role: role.to_string(),
            company_name: "Acme".to_string(),
            location: "Melbourne".to_string(),
            start_date: "2024".to_string(),
            end_date: "Present".to_string(),
            description,
        }
    }

    fn bullets(html: &str) -> Vec<String> {
        html.split("<span class=\"bullet\">•</span><span>")
            .skip(1)
            .map(|rest| rest.split("</span>").next().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_multiple_description_renders_bullets_in_order() {
        let html = render_record(&record("Dev", Description::from(vec!["a", "b"])));
        assert_eq!(html.matches("<li>").count(), 2);
        assert_eq!(bullets(&html), vec!["a", "b"]);
    }

    #[test]
    fn test_single_description_renders_one_bullet() {
        let html = render_record(&record("Dev", Description::from("a")));
        assert_eq!(html.matches("<li>").count(), 1);
        assert_eq!(bullets(&html), vec!["a"]);
    }

    #[test]
    fn test_records_render_in_order() {
        let state = FetchState::succeeded(vec![
            record("First", Description::from("x")),
            record("Second", Description::from("y")),
            record("Third", Description::from("z")),
        ]);
        let html = render_list(Resource::Volunteering, &state);
        assert_eq!(html.matches("<article class=\"experience\">").count(), 3);

        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        let third = html.find("Third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_loading_line() {
        let html = render_list(Resource::WorkExperience, &FetchState::pending());
        assert!(html.contains("Loading work experience..."));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_error_takes_precedence_for_volunteering() {
        let state = FetchState::failed("Failed to fetch: 404", Vec::new());
        let html = render_list(Resource::Volunteering, &state);
        assert!(html.contains("Error fetching volunteering..."));
        assert!(!html.contains("Loading"));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn test_fallback_renders_as_plain_data() {
        let state = FetchState::failed("Failed to fetch: 404", work_experience());
        assert_eq!(
            ListView::from_state(Resource::WorkExperience, &state),
            ListView::Records(&state.items)
        );

        let html = render_list(Resource::WorkExperience, &state);
        assert_eq!(html.matches("<article class=\"experience\">").count(), 3);
        assert!(!html.contains("Error fetching"));
    }

    #[test]
    fn test_work_experience_error_without_items_shows_error() {
        let state = FetchState::failed("boom", Vec::new());
        assert_eq!(
            ListView::from_state(Resource::WorkExperience, &state),
            ListView::Error(Resource::WorkExperience)
        );
    }

    #[test]
    fn test_empty_success_renders_nothing() {
        let html = render_list(Resource::Volunteering, &FetchState::succeeded(Vec::new()));
        assert!(html.is_empty());
    }

    #[test]
    fn test_record_text_is_escaped() {
        let html = render_record(&record("<script>", Description::from("a & b")));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }
}
