//! Natural-language command endpoint.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use cmdr_core::{AgentRequest, AgentResponse};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::state::{ActiveRequest, AppState};

/// Create agent router
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/agent", post(handle_agent_request))
}

/// POST /agent - Translate a request into commands, run them, return output
///
/// Failures the pipeline does not absorb (provider errors, commands that
/// cannot be launched) are logged and answered with an opaque 500.
pub async fn handle_agent_request(
    State(state): State<Arc<AppState>>,
    Json(input): Json<AgentRequest>,
) -> Result<Json<AgentResponse>, (StatusCode, String)> {
    let request_id = Uuid::new_v4();
    let span = info_span!("agent_request", %request_id);

    async move {
        let _active = ActiveRequest::start(&state.active_requests);
        info!(msg_chars = input.msg.len(), "Agent request received");

        match state.agent.handle_request(&input.msg).await {
            Ok(response) => {
                info!(output_chars = response.output.len(), "Agent request completed");
                Ok(Json(response))
            }
            Err(e) => {
                error!(error = %e, "Agent request failed");
                Err((
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                ))
            }
        }
    }
    .instrument(span)
    .await
}
