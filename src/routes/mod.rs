use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_layer};
use crate::handlers::{auth, events, health_check, organizers, participants, skills, verification};
use crate::models::{Account, Admin, Organization, Organizer, Participant, Verifiable};
use crate::state::{AppState, Collection};

pub fn create_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .nest("/auth", auth_routes())
        .nest("/events", event_routes())
        .nest("/organization", organization_routes())
        .nest("/organizations", organization_routes())
        .nest("/organizer", organizer_routes())
        .nest("/participant", participant_routes())
        .nest("/skills", skill_routes());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_layer())
        .layer(create_cors_layer())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/admin", post(auth::register::<Admin>))
        .route("/register/organization", post(auth::register::<Organization>))
        .route("/register/organizer", post(auth::register::<Organizer>))
        .route("/register/participant", post(auth::register::<Participant>))
        .route("/role/:id", get(auth::user_role))
        .route("/check-username/:username", get(auth::check_username))
        .route("/admin/:id", profile::<Admin>())
        .route("/organization/:id", profile::<Organization>())
        .route("/organizer/:id", profile::<Organizer>())
        .route("/participant/:id", profile::<Participant>())
}

fn profile<T>() -> axum::routing::MethodRouter<AppState>
where
    T: Account,
    AppState: Collection<T>,
{
    get(auth::get_profile::<T>).put(auth::update_profile::<T>)
}

fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route("/:id", get(events::get_event))
        .route("/:id/bookmark", post(events::toggle_bookmark))
        .route("/:id/going", post(events::toggle_going))
        .route("/:id/user-status", get(events::user_status))
}

/// `/unverified`, `/:id/approve` and `/:id/reject` for one verifiable role.
fn approval_routes<T>() -> Router<AppState>
where
    T: Verifiable,
    AppState: Collection<T>,
{
    Router::new()
        .route("/unverified", get(verification::list_unverified::<T>))
        .route("/:id/approve", put(verification::approve::<T>))
        .route("/:id/reject", delete(verification::reject::<T>))
}

fn organization_routes() -> Router<AppState> {
    approval_routes::<Organization>().route("/", get(verification::list_all::<Organization>))
}

fn organizer_routes() -> Router<AppState> {
    approval_routes::<Organizer>()
        .route("/", get(verification::list_all::<Organizer>))
        .route("/:id/verified-organizers", get(organizers::verified_organizers))
        .route("/:id/unverified-organizers", get(organizers::unverified_organizers))
}

fn participant_routes() -> Router<AppState> {
    approval_routes::<Participant>().route("/:id/past-events", get(participants::past_events))
}

fn skill_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list_skills).post(skills::create_skill))
        .route("/:id", put(skills::update_skill).delete(skills::delete_skill))
}
