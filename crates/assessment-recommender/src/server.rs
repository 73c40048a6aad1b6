/// MCP server exposing the assessment recommender.
///
/// Tools:
/// - `recommend_assessments`: rank the catalogue against a job profile or raw query
/// - `list_assessments`: list the catalogue in its fixed order
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::info;

use recommender_core::api::{self, CatalogueResponse, RecommendParams, RecommendResponse};
use recommender_core::recommender::Recommender;

#[derive(Clone)]
pub struct AssessmentServer {
    recommender: Arc<Recommender>,
    default_top_k: usize,
    tool_router: ToolRouter<AssessmentServer>,
}

impl AssessmentServer {
    pub fn new(recommender: Arc<Recommender>, default_top_k: usize) -> Self {
        Self {
            recommender,
            default_top_k,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl AssessmentServer {
    #[tool(description = "Recommend assessments for a job profile. Pass either a raw `query` or the profile fields (job_role, skills, industry, experience, description). Scores are TF-IDF cosine similarities and are only comparable within one response.")]
    async fn recommend_assessments(
        &self,
        Parameters(params): Parameters<RecommendParams>,
    ) -> Result<Json<RecommendResponse>, String> {
        let response = api::recommend_assessments(&self.recommender, &params, self.default_top_k)
            .map_err(|e| format!("recommendation failed: {e}"))?;
        info!(
            results = response.recommended_assessments.len(),
            "recommend_assessments served"
        );
        Ok(Json(response))
    }

    #[tool(description = "List every assessment in the catalogue with its metadata (duration, remote/adaptive support, test types).")]
    async fn list_assessments(&self) -> Result<Json<CatalogueResponse>, String> {
        Ok(Json(api::list_assessments(&self.recommender)))
    }
}

#[tool_handler]
impl ServerHandler for AssessmentServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "assessment-recommender".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Assessment recommendation MCP server. Use recommend_assessments with a job \
                 role, skills, industry, experience level and optional job description text \
                 to get ranked assessments with a short justification. Use list_assessments \
                 to browse the catalogue."
                    .to_string(),
            ),
        }
    }
}
