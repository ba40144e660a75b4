use axum::extract::{Path, State};
use axum::response::Response;
use tracing::info;

use crate::models::{fields, Skill};
use crate::state::AppState;
use crate::store::Filter;
use crate::utils::error::AppError;
use crate::utils::extract::ApiJson;
use crate::utils::response::{empty_success, success};

pub async fn list_skills(State(state): State<AppState>) -> Result<Response, AppError> {
    let skills = state.skills.find_all().await?;
    Ok(success(skills, "Skills retrieved"))
}

pub async fn create_skill(
    State(state): State<AppState>,
    ApiJson(mut skill): ApiJson<Skill>,
) -> Result<Response, AppError> {
    if skill.name.trim().is_empty() {
        return Err(AppError::ValidationError("Skill name is required".to_string()));
    }

    let taken = state
        .skills
        .exists(&[Filter::eq(fields::NAME, skill.name.as_str())])
        .await?;
    if taken {
        return Err(AppError::Conflict(
            "Skill with this name already exists".to_string(),
        ));
    }

    skill.id.clear();
    let saved = state.skills.insert(skill).await?;

    info!(skill_id = %saved.id, name = %saved.name, "Skill created");
    Ok(success(saved, "Skill created"))
}

/// Only name, description and the active flag are taken from the body.
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(changes): ApiJson<Skill>,
) -> Result<Response, AppError> {
    let mut skill = state
        .skills
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Skill not found".to_string()))?;

    skill.apply(changes);
    state.skills.save(&skill).await?;

    Ok(success(skill, "Skill updated"))
}

pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if !state.skills.delete_by_id(&id).await? {
        return Err(AppError::NotFound("Skill not found".to_string()));
    }

    info!(skill_id = %id, "Skill deleted");
    Ok(empty_success("Skill deleted"))
}
