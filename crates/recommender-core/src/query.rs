use serde::{Deserialize, Serialize};

/// Structured job profile collected by a front end.
///
/// The recommender never looks inside it; it only sees the flattened text
/// produced by [`JobProfile::to_query`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobProfile {
    #[serde(default)]
    pub job_role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub experience: String,
    /// Free-text job description, e.g. text already extracted from an uploaded document.
    #[serde(default)]
    pub description: String,
}

impl JobProfile {
    /// `"{role} {skills joined by space} {industry} {experience} {description}"`
    pub fn to_query(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.job_role,
            self.skills.join(" "),
            self.industry,
            self.experience,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assembles_fields_in_order() {
        let profile = JobProfile {
            job_role: "Software Engineer".to_string(),
            skills: vec!["coding".to_string(), "problem solving".to_string()],
            industry: "Technology".to_string(),
            experience: "Mid-Level".to_string(),
            description: "Builds backend services.".to_string(),
        };
        assert_eq!(
            profile.to_query(),
            "Software Engineer coding problem solving Technology Mid-Level Builds backend services."
        );
    }

    #[test]
    fn empty_profile_is_blank() {
        assert!(JobProfile::default().to_query().trim().is_empty());
    }
}
