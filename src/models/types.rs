//! Core data types for the experience timeline

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Remote resource envelope: `{ "experiences": [...] }`
#[derive(Debug, Default)]
pub struct ExperiencesDocument {
    pub experiences: Vec<ExperienceRecord>,
    /// Entries dropped because they are not a valid record
    pub skipped: usize,
}

impl ExperiencesDocument {
    /// Read the envelope from an already parsed JSON body.
    ///
    /// A body that is not an object, or whose `experiences` is missing or
    /// not an array, yields no records. Entries that fail to deserialize are
    /// skipped one at a time; the rest keep their order.
    pub fn from_value(body: Value) -> Self {
        let entries = match body {
            Value::Object(mut fields) => match fields.remove("experiences") {
                Some(Value::Array(entries)) => entries,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        let mut document = Self::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<ExperienceRecord>(entry) {
                Ok(record) => document.experiences.push(record),
                Err(e) => {
                    warn!(index, error = %e, "Skipping invalid experience record");
                    document.skipped += 1;
                }
            }
        }
        document
    }

    pub fn into_records(self) -> Vec<ExperienceRecord> {
        self.experiences
    }
}

/// One entry in a timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    /// Logo URL or path
    pub company_image: String,
    pub role: String,
    pub company_name: String,
    pub location: String,
    /// Display string, never parsed as a date
    pub start_date: String,
    /// Display string, never parsed as a date
    pub end_date: String,
    pub description: Description,
}

impl ExperienceRecord {
    /// "Location • Start - End" line shown under the company name
    pub fn period_line(&self) -> String {
        format!("{} • {} - {}", self.location, self.start_date, self.end_date)
    }
}

/// Record description: a single sentence or an ordered list of bullets.
///
/// The shape is decided once, at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Single(String),
    Multiple(Vec<String>),
}

impl Description {
    /// Bullet texts in display order
    pub fn bullets(&self) -> Vec<&str> {
        match self {
            Description::Single(text) => vec![text.as_str()],
            Description::Multiple(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Single(text.to_string())
    }
}

impl From<Vec<&str>> for Description {
    fn from(items: Vec<&str>) -> Self {
        Description::Multiple(items.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(description: &str) -> String {
        format!(
            r#"{{
                "companyImage": "https://example.com/logo.png",
                "role": "Engineer",
                "companyName": "Acme",
                "location": "Melbourne, VIC",
                "startDate": "Jan 2024",
                "endDate": "Present",
                "description": {}
            }}"#,
            description
        )
    }

    #[test]
    fn test_description_list_parses_as_multiple() {
        let record: ExperienceRecord = serde_json::from_str(&record_json(r#"["a", "b"]"#)).unwrap();
        assert_eq!(record.description, Description::Multiple(vec!["a".into(), "b".into()]));
        assert_eq!(record.description.bullets(), vec!["a", "b"]);
    }

    #[test]
    fn test_description_string_parses_as_single() {
        let record: ExperienceRecord = serde_json::from_str(&record_json(r#""a""#)).unwrap();
        assert_eq!(record.description, Description::Single("a".into()));
        assert_eq!(record.description.bullets(), vec!["a"]);
    }

    #[test]
    fn test_description_other_shapes_rejected() {
        assert!(serde_json::from_str::<ExperienceRecord>(&record_json("42")).is_err());
        assert!(serde_json::from_str::<ExperienceRecord>(&record_json(r#"{"text": "a"}"#)).is_err());
        assert!(serde_json::from_str::<ExperienceRecord>(&record_json("[1, 2]")).is_err());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let json = r#"{"role": "Engineer", "description": "a"}"#;
        assert!(serde_json::from_str::<ExperienceRecord>(json).is_err());
    }

    fn document(json: &str) -> ExperiencesDocument {
        ExperiencesDocument::from_value(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_document_missing_or_non_array_experiences_is_empty() {
        for json in [
            r#"{"other": 1}"#,
            r#"{"experiences": null}"#,
            r#"{"experiences": false}"#,
            r#"{"experiences": ""}"#,
            r#"{"experiences": {"role": "x"}}"#,
        ] {
            let doc = document(json);
            assert!(doc.experiences.is_empty(), "{}", json);
            assert_eq!(doc.skipped, 0);
        }
    }

    #[test]
    fn test_non_object_body_is_empty() {
        for json in ["42", "\"text\"", "[1, 2]", "null", "true"] {
            assert!(document(json).into_records().is_empty(), "{}", json);
        }
    }

    #[test]
    fn test_invalid_entries_are_skipped_individually() {
        let json = format!(
            r#"{{"experiences": [{}, {{"role": "Missing fields"}}, 7, {}]}}"#,
            record_json(r#""first""#),
            record_json(r#""second""#)
        );
        let doc = document(&json);
        assert_eq!(doc.skipped, 2);
        let records = doc.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description.bullets(), vec!["first"]);
        assert_eq!(records[1].description.bullets(), vec!["second"]);
    }

    #[test]
    fn test_document_preserves_order() {
        let json = format!(
            r#"{{"experiences": [{}, {}]}}"#,
            record_json(r#""first""#),
            record_json(r#""second""#)
        );
        let records = document(&json).into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description.bullets(), vec!["first"]);
        assert_eq!(records[1].description.bullets(), vec!["second"]);
    }

    #[test]
    fn test_period_line() {
        let record: ExperienceRecord = serde_json::from_str(&record_json(r#""a""#)).unwrap();
        assert_eq!(record.period_line(), "Melbourne, VIC • Jan 2024 - Present");
    }
}
