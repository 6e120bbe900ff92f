use serde::{Deserialize, Serialize};

use crate::error::CourseError;

/// The four free-text fields describing a course topic.
///
/// Built up from user keystrokes in the form, read once at submission
/// time, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRequest {
    pub domain: String,
    pub skill: String,
    pub subject: String,
    /// Comma-separated keywords; may be empty.
    pub keywords: String,
}

impl CourseRequest {
    /// "{skill} : {subject}", used in the generated course title.
    pub fn topic(&self) -> String {
        format!("{} : {}", self.skill, self.subject)
    }

    /// Domain, skill and subject must be non-empty after trimming before
    /// a generation request may be issued. Keywords may be empty.
    pub fn validate(&self) -> Result<(), CourseError> {
        if self.domain.trim().is_empty()
            || self.skill.trim().is_empty()
            || self.subject.trim().is_empty()
        {
            return Err(CourseError::MissingRequiredFields);
        }
        Ok(())
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CourseRequest {
        CourseRequest {
            domain: "Développement Web".into(),
            skill: "React.js".into(),
            subject: "Introduction aux Hooks et au state".into(),
            keywords: String::new(),
        }
    }

    #[test]
    fn complete_request_validates() {
        assert!(filled().validate().is_ok());
        assert!(filled().is_submittable());
    }

    #[test]
    fn empty_keywords_are_allowed() {
        let mut req = filled();
        req.keywords = String::new();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn each_required_field_is_checked() {
        for clear in [
            |r: &mut CourseRequest| r.domain.clear(),
            |r: &mut CourseRequest| r.skill.clear(),
            |r: &mut CourseRequest| r.subject.clear(),
        ] {
            let mut req = filled();
            clear(&mut req);
            assert_eq!(req.validate(), Err(CourseError::MissingRequiredFields));
            assert!(!req.is_submittable());
        }
    }

    #[test]
    fn whitespace_only_required_field_is_rejected() {
        let mut req = filled();
        req.subject = "   \t".into();
        assert_eq!(req.validate(), Err(CourseError::MissingRequiredFields));
    }

    #[test]
    fn topic_joins_skill_and_subject() {
        assert_eq!(
            filled().topic(),
            "React.js : Introduction aux Hooks et au state"
        );
    }
}
