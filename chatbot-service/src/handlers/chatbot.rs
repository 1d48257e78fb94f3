use axum::{extract::State, Json};

use crate::error::AppError;
use crate::models::{AnswerEnvelope, AskRequest, PromptsResponse};
use crate::services::prompt::{compose_prompt, WEBSITE_CONTEXT};
use crate::startup::AppState;

/// Return the fixed preset prompt catalog.
pub async fn list_prompts(State(state): State<AppState>) -> Json<PromptsResponse> {
    Json(PromptsResponse {
        success: true,
        prompts: state.prompts,
    })
}

/// Answer a user question, preset or free-form.
///
/// Model-layer failures are reported inside the envelope with a 200 status;
/// callers must inspect the `success` field.
#[tracing::instrument(skip(state, request))]
pub async fn ask_question(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AnswerEnvelope>, AppError> {
    let question = request.question.trim();
    if question.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "No question provided"
        )));
    }

    let prompt = compose_prompt(WEBSITE_CONTEXT, question);

    match state.text_provider.generate(&prompt).await {
        Ok(answer) => Ok(Json(AnswerEnvelope::answer(answer))),
        Err(e) => {
            tracing::error!(error = %e, "Failed to generate answer");
            Ok(Json(AnswerEnvelope::failure(format!(
                "Error generating response: {}",
                e
            ))))
        }
    }
}
