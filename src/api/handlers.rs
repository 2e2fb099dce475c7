use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::prompt::SYSTEM_PROMPT;
use crate::AppState;

use super::models::{AskRequest, AskResponse, ErrorResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Validate the question, run the completion, persist the interaction,
/// answer.
///
/// Provider failures do not become HTTP errors. The failure description is
/// embedded in an ordinary answer so the client contract stays a single
/// 200-with-response shape, and it is logged like any other response.
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>, (StatusCode, Json<ErrorResponse>)> {
    let question = payload.question.trim();
    if question.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "question must not be empty".to_string(),
            }),
        ));
    }

    let response = match state.groq.complete(SYSTEM_PROMPT, question).await {
        Ok(answer) => answer,
        Err(err) => {
            error!("Groq API error: {err}");
            format!("An error occurred: {err}")
        }
    };

    if let Err(err) = state.log.record(question, &response).await {
        error!("failed to persist interaction: {err}");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "failed to persist interaction".to_string(),
            }),
        ));
    }

    Ok(Json(AskResponse { response }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
