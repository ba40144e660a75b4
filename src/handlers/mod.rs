use axum::response::Response;
use serde::Serialize;

use crate::models::{fields, Account};
use crate::store::{Filter, Repository, StoreError, StoreResult};
use crate::utils::error::AppError;
use crate::utils::response::success;

pub mod auth;
pub mod events;
pub mod organizers;
pub mod participants;
pub mod payload;
pub mod skills;
pub mod verification;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "eventlagbe-api",
    };

    success(payload, "Health check successful")
}

pub(crate) async fn find_account<T: Account>(
    repo: &dyn Repository<T>,
    firebase_uid: &str,
) -> StoreResult<Option<T>> {
    repo.find_one(&[Filter::eq(fields::FIREBASE_UID, firebase_uid)])
        .await
}

/// Logs a store failure and replaces it with a generic message for the client.
pub(crate) fn internal(message: &'static str) -> impl Fn(StoreError) -> AppError {
    move |err| {
        tracing::error!(error = ?err, "{}", message);
        AppError::InternalServerError(message.to_string())
    }
}
