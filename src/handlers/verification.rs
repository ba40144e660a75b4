//! Admin approval workflow shared by organizations, organizers and participants.

use axum::extract::{Path, State};
use axum::response::Response;
use chrono::Utc;
use tracing::{error, info};

use crate::models::{Account, Verifiable};
use crate::state::{AppState, Collection};
use crate::store::{Filter, Repository};
use crate::utils::error::AppError;
use crate::utils::response::{empty_success, success};

pub async fn list_all<T>(State(state): State<AppState>) -> Result<Response, AppError>
where
    T: Account,
    AppState: Collection<T>,
{
    let accounts = Collection::<T>::collection(&state).find_all().await?;
    Ok(success(accounts, format!("{} list", T::ROLE.label())))
}

pub async fn list_unverified<T>(State(state): State<AppState>) -> Result<Response, AppError>
where
    T: Verifiable,
    AppState: Collection<T>,
{
    let pending = Collection::<T>::collection(&state)
        .find_many(&[Filter::eq(T::VERIFIED_FIELD, false)])
        .await?;
    Ok(success(pending, format!("Unverified {} list", T::ROLE.as_str())))
}

async fn load<T: Verifiable>(repo: &dyn Repository<T>, id: &str) -> Result<T, AppError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", T::ROLE.label())))
}

pub async fn approve<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError>
where
    T: Verifiable,
    AppState: Collection<T>,
{
    let repo = Collection::<T>::collection(&state);
    let mut account = load(repo, &id).await?;

    account.set_verified(true);
    account.set_updated_at(Utc::now());
    repo.save(&account).await?;

    info!(role = T::ROLE.as_str(), id = %id, "Account approved");
    Ok(success(account, format!("{} approved", T::ROLE.label())))
}

/// Deletes the identity account before the local document. If the identity provider
/// refuses, the local document is left as it was.
pub async fn reject<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError>
where
    T: Verifiable,
    AppState: Collection<T>,
{
    let repo = Collection::<T>::collection(&state);
    let account = load(repo, &id).await?;

    let uid = account.firebase_uid();
    if !uid.is_empty() {
        if let Err(err) = state.identity.delete_account(uid).await {
            error!(role = T::ROLE.as_str(), id = %id, error = %err, "Identity deletion failed, keeping local record");
            return Err(err.into());
        }
    }

    repo.delete_by_id(&id).await?;

    info!(role = T::ROLE.as_str(), id = %id, "Account rejected");
    Ok(empty_success(format!("{} rejected", T::ROLE.label())))
}
