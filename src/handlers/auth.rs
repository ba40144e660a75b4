//! Registration, role lookup and profile endpoints, keyed by Firebase uid.

use axum::extract::{Path, State};
use axum::response::Response;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use super::find_account;
use crate::models::{fields, Account, RoleProfile};
use crate::state::{AppState, Collection};
use crate::store::Filter;
use crate::utils::error::AppError;
use crate::utils::extract::ApiJson;
use crate::utils::response::success;

pub async fn register<T>(
    State(state): State<AppState>,
    ApiJson(mut account): ApiJson<T>,
) -> Result<Response, AppError>
where
    T: Account,
    AppState: Collection<T>,
{
    if account.firebase_uid().trim().is_empty() {
        return Err(AppError::ValidationError("Missing Firebase UID".to_string()));
    }

    account.set_id(String::new());
    account.stamp_new(Utc::now());
    let saved = Collection::<T>::collection(&state).insert(account).await?;

    info!(role = T::ROLE.as_str(), id = %saved.id(), "Account registered");
    Ok(success(saved, format!("{} registered", T::ROLE.label())))
}

/// First match wins: admin, organization, organizer, participant.
pub async fn user_role(
    State(state): State<AppState>,
    Path(firebase_uid): Path<String>,
) -> Result<Response, AppError> {
    let profile = lookup_role(&state, &firebase_uid)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(success(profile, "Role resolved"))
}

async fn lookup_role(state: &AppState, firebase_uid: &str) -> Result<Option<RoleProfile>, AppError> {
    if let Some(admin) = find_account(state.admins.as_ref(), firebase_uid).await? {
        return Ok(Some(RoleProfile::Admin(admin)));
    }
    if let Some(org) = find_account(state.organizations.as_ref(), firebase_uid).await? {
        return Ok(Some(RoleProfile::Organization(org)));
    }
    if let Some(organizer) = find_account(state.organizers.as_ref(), firebase_uid).await? {
        return Ok(Some(RoleProfile::Organizer(organizer)));
    }
    if let Some(participant) = find_account(state.participants.as_ref(), firebase_uid).await? {
        return Ok(Some(RoleProfile::Participant(participant)));
    }
    Ok(None)
}

pub async fn get_profile<T>(
    State(state): State<AppState>,
    Path(firebase_uid): Path<String>,
) -> Result<Response, AppError>
where
    T: Account,
    AppState: Collection<T>,
{
    let account = find_account(Collection::<T>::collection(&state), &firebase_uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", T::ROLE.label())))?;

    Ok(success(account, format!("{} profile", T::ROLE.label())))
}

/// Full replacement: only the id, uid and creation time survive from the stored copy.
pub async fn update_profile<T>(
    State(state): State<AppState>,
    Path(firebase_uid): Path<String>,
    ApiJson(mut replacement): ApiJson<T>,
) -> Result<Response, AppError>
where
    T: Account,
    AppState: Collection<T>,
{
    let repo = Collection::<T>::collection(&state);
    let existing = find_account(repo, &firebase_uid)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", T::ROLE.label())))?;

    replacement.set_id(existing.id().to_string());
    replacement.set_firebase_uid(firebase_uid);
    replacement.set_created_at(existing.created_at());
    replacement.set_updated_at(Utc::now());
    repo.save(&replacement).await?;

    info!(role = T::ROLE.as_str(), id = %replacement.id(), "Profile updated");
    Ok(success(replacement, format!("{} profile updated", T::ROLE.label())))
}

#[derive(Serialize)]
struct UsernameCheck {
    exists: bool,
}

pub async fn check_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Response, AppError> {
    let filter = [Filter::eq(fields::USERNAME, username.as_str())];
    let exists = state.admins.exists(&filter).await?
        || state.organizations.exists(&filter).await?
        || state.organizers.exists(&filter).await?
        || state.participants.exists(&filter).await?;

    Ok(success(UsernameCheck { exists }, "Username checked"))
}
