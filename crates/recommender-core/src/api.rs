/// Wire types shared by the HTTP and MCP adapters.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalogue::CatalogueEntry;
use crate::error::RecommendError;
use crate::query::JobProfile;
use crate::recommender::{Recommender, ScoredResult};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct RecommendParams {
    /// Raw query text. When present and non-blank it is used as-is and the
    /// profile fields below only contribute `skills` for the explanation.
    #[serde(default)]
    pub query: Option<String>,
    /// Job role, e.g. "Software Engineer".
    #[serde(default)]
    pub job_role: String,
    /// Key skills, e.g. ["coding", "problem solving"].
    #[serde(default)]
    pub skills: Vec<String>,
    /// Industry, e.g. "Technology".
    #[serde(default)]
    pub industry: String,
    /// Experience level, e.g. "Mid-Level".
    #[serde(default)]
    pub experience: String,
    /// Free-text job description (already extracted from any uploaded document).
    #[serde(default)]
    pub description: String,
    /// Number of recommendations to return (default: 5, capped at catalogue size).
    #[serde(default)]
    pub top_k: Option<i64>,
}

impl RecommendParams {
    /// The text handed to the recommender.
    pub fn query_text(&self) -> String {
        match self.query.as_deref() {
            Some(q) if !q.trim().is_empty() => q.to_string(),
            _ => self.profile().to_query(),
        }
    }

    pub fn profile(&self) -> JobProfile {
        JobProfile {
            job_role: self.job_role.clone(),
            skills: self.skills.clone(),
            industry: self.industry.clone(),
            experience: self.experience.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentRecommendation {
    pub assessment_name: String,
    pub url: String,
    pub description: String,
    /// Similarity in [0, 1], two decimals. Only comparable within one response.
    pub match_score: f64,
    pub why_recommended: String,
    /// Minutes.
    pub duration: u32,
    pub remote_support: bool,
    pub adaptive_support: bool,
    pub test_type: Vec<String>,
}

impl From<ScoredResult<'_>> for AssessmentRecommendation {
    fn from(result: ScoredResult<'_>) -> Self {
        let entry = result.entry;
        Self {
            assessment_name: entry.name.clone(),
            url: entry.url.clone(),
            description: entry.description.clone(),
            match_score: result.similarity_score,
            why_recommended: result.reason,
            duration: entry.duration,
            remote_support: entry.remote_support,
            adaptive_support: entry.adaptive_support,
            test_type: entry.test_types.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecommendResponse {
    pub recommended_assessments: Vec<AssessmentRecommendation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssessmentInfo {
    pub assessment_name: String,
    pub url: String,
    pub description: String,
    pub duration: u32,
    pub remote_support: bool,
    pub adaptive_support: bool,
    pub test_type: Vec<String>,
}

impl From<&CatalogueEntry> for AssessmentInfo {
    fn from(entry: &CatalogueEntry) -> Self {
        Self {
            assessment_name: entry.name.clone(),
            url: entry.url.clone(),
            description: entry.description.clone(),
            duration: entry.duration,
            remote_support: entry.remote_support,
            adaptive_support: entry.adaptive_support,
            test_type: entry.test_types.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogueResponse {
    pub assessments: Vec<AssessmentInfo>,
}

/// Resolve `params` against the recommender.
///
/// `top_k` falls back to `default_top_k`; values below 1 are `InvalidInput`.
pub fn recommend_assessments(
    recommender: &Recommender,
    params: &RecommendParams,
    default_top_k: usize,
) -> Result<RecommendResponse, RecommendError> {
    let query = params.query_text();
    let k = match params.top_k {
        Some(k) if k < 1 => {
            return Err(RecommendError::InvalidInput(format!(
                "top_k must be at least 1, got {k}"
            )));
        }
        Some(k) => usize::try_from(k).unwrap_or(usize::MAX),
        None => default_top_k,
    };
    let results = recommender.recommend(&query, &params.skills, k)?;
    Ok(RecommendResponse {
        recommended_assessments: results.into_iter().map(Into::into).collect(),
    })
}

pub fn list_assessments(recommender: &Recommender) -> CatalogueResponse {
    CatalogueResponse {
        assessments: recommender.catalogue().iter().map(Into::into).collect(),
    }
}
