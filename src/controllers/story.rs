use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::story::{StoryRequest, StoryResponse, StoryService, StoryServiceApi, StoryServiceError},
    error::{AppError, AppResult},
};

pub struct StoryController {
    story_service: Arc<StoryService>,
    soft_validation_errors: bool,
}

impl StoryController {
    pub fn new(story_service: Arc<StoryService>, soft_validation_errors: bool) -> Self {
        Self {
            story_service,
            soft_validation_errors,
        }
    }

    /// POST /generate_story/ - Generate a storybook for a child profile
    ///
    /// Validation failures answer 422 with the warning as `message`, or 200
    /// with the warning as `markdown_story` when soft validation errors are on.
    pub async fn generate_story(
        State(controller): State<Arc<StoryController>>,
        Json(request): Json<StoryRequest>,
    ) -> AppResult<Json<StoryResponse>> {
        match controller.story_service.generate_story(request).await {
            Ok(document) => Ok(Json(StoryResponse {
                markdown_story: document.markdown,
            })),
            Err(StoryServiceError::Validation(warning)) if controller.soft_validation_errors => {
                tracing::info!(warning = %warning, "Returning validation warning as document");
                Ok(Json(StoryResponse {
                    markdown_story: warning,
                }))
            }
            Err(e) => Err(AppError::from(e)),
        }
    }
}
