use axum::extract::{Path, State};
use axum::response::Response;

use crate::models::fields;
use crate::state::AppState;
use crate::store::Filter;
use crate::utils::error::AppError;
use crate::utils::response::success;

async fn by_verification(
    state: &AppState,
    organization_id: String,
    verified: bool,
) -> Result<Response, AppError> {
    let organizers = state
        .organizers
        .find_many(&[
            Filter::eq(fields::ORGANIZATION_ID, organization_id),
            Filter::eq("verified", verified),
        ])
        .await?;

    let label = if verified { "Verified" } else { "Unverified" };
    Ok(success(organizers, format!("{} organizers", label)))
}

pub async fn verified_organizers(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Response, AppError> {
    by_verification(&state, organization_id, true).await
}

pub async fn unverified_organizers(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Response, AppError> {
    by_verification(&state, organization_id, false).await
}
