use axum::extract::{Path, State};
use axum::response::Response;
use tracing::debug;

use super::find_account;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// Events listed in the participant's history. Ids that no longer resolve are skipped.
pub async fn past_events(
    State(state): State<AppState>,
    Path(firebase_uid): Path<String>,
) -> Result<Response, AppError> {
    let participant = find_account(state.participants.as_ref(), &firebase_uid)
        .await?
        .ok_or_else(|| AppError::NotFound("Participant not found".to_string()))?;

    let mut events = Vec::with_capacity(participant.past_event_ids.len());
    for event_id in &participant.past_event_ids {
        match state.events.find_by_id(event_id).await? {
            Some(event) => events.push(event),
            None => debug!(event_id = %event_id, "Past event no longer exists"),
        }
    }

    Ok(success(events, "Past events retrieved"))
}
