use axum::extract::{Path, State};
use axum::response::Response;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::payload::{text, text_list, timeslot_from};
use super::{find_account, internal};
use crate::models::{
    append_unique, fields, toggle_membership, Event, EventTimeslot, Participant, Timestamped,
};
use crate::state::AppState;
use crate::store::{Filter, PageRequest, DEFAULT_PAGE_SIZE};
use crate::utils::error::AppError;
use crate::utils::extract::{ApiJson, ApiQuery};
use crate::utils::response::success;

#[derive(Serialize)]
pub struct EventDetails {
    pub event: Event,
    pub timeslots: Vec<EventTimeslot>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub owner_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRef {
    pub participant_id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookmarkState {
    is_bookmarked: bool,
    interested_count: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoingState {
    is_going: bool,
    going_count: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserStatus {
    is_bookmarked: bool,
    is_going: bool,
}

/// Creates an event from a loosely shaped payload, links it to its owner and
/// stores any timeslots with a parseable start.
pub async fn create_event(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> Result<Response, AppError> {
    let mut event = Event {
        owner_id: text(&payload, "ownerId"),
        title: text(&payload, "title").unwrap_or_default(),
        description: text(&payload, "description"),
        location: text(&payload, "location"),
        event_type: text(&payload, "eventType"),
        event_scope: text(&payload, "eventScope"),
        cover_image_url: text(&payload, "coverImageUrl").unwrap_or_default(),
        banner_image_url: text(&payload, "bannerImageUrl").unwrap_or_default(),
        venue: text(&payload, "venue"),
        start_date: text(&payload, "startDate"),
        start_time: text(&payload, "startTime"),
        end_date: text(&payload, "endDate"),
        end_time: text(&payload, "endTime"),
        organizer_name: text(&payload, "organizerName"),
        active: true,
        required_skills: text_list(&payload, &["requiredSkills", "requiredSkillIds"]),
        co_hosts: text_list(&payload, &["coHosts"]),
        sponsors: text_list(&payload, &["sponsors", "sponsorNames"]),
        tags: text_list(&payload, &["tags"]),
        ..Default::default()
    };

    for skill_id in &event.required_skills {
        if state.skills.find_by_id(skill_id).await?.is_none() {
            return Err(AppError::ValidationError(format!(
                "Unknown skill id '{}'",
                skill_id
            )));
        }
    }

    event.apply_image_fallbacks();
    event.stamp_new(Utc::now());
    let saved = state.events.insert(event).await?;
    info!(event_id = %saved.id, owner_id = ?saved.owner_id, "Event created");

    link_to_owner(&state, &saved).await?;

    if let Some(entries) = payload.get("timeslots").and_then(Value::as_array) {
        debug!(event_id = %saved.id, count = entries.len(), "Received timeslots");
        for entry in entries {
            if let Some(slot) = timeslot_from(entry, &saved.id) {
                let slot = state.timeslots.insert(slot).await?;
                debug!(event_id = %saved.id, timeslot_id = %slot.id, start = %slot.start, "Saved timeslot");
            }
        }
    }

    let timeslots = timeslots_for(&state, &saved.id).await?;
    Ok(success(
        EventDetails {
            event: saved,
            timeslots,
        },
        "Event created",
    ))
}

/// Records the event on its owner, looked up as an organization first, then an organizer.
async fn link_to_owner(state: &AppState, event: &Event) -> Result<(), AppError> {
    let Some(owner_id) = event.owner_id.as_deref().filter(|id| !id.is_empty()) else {
        return Ok(());
    };

    if let Some(mut org) = find_account(state.organizations.as_ref(), owner_id).await? {
        if append_unique(&mut org.event_ids, &event.id) {
            org.set_updated_at(Utc::now());
            state.organizations.save(&org).await?;
        }
        return Ok(());
    }

    if let Some(mut organizer) = find_account(state.organizers.as_ref(), owner_id).await? {
        if append_unique(&mut organizer.event_ids, &event.id) {
            organizer.set_updated_at(Utc::now());
            state.organizers.save(&organizer).await?;
        }
        return Ok(());
    }

    debug!(owner_id = %owner_id, "Event owner matches no organization or organizer");
    Ok(())
}

async fn timeslots_for(state: &AppState, event_id: &str) -> Result<Vec<EventTimeslot>, AppError> {
    Ok(state
        .timeslots
        .find_many(&[Filter::eq(fields::EVENT_ID, event_id)])
        .await?)
}

pub async fn list_events(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListEventsQuery>,
) -> Result<Response, AppError> {
    let request = PageRequest::new(
        query.page.unwrap_or(0),
        query.size.unwrap_or(DEFAULT_PAGE_SIZE),
    );
    if request.size == 0 {
        return Err(AppError::ValidationError(
            "Page size must be at least 1".to_string(),
        ));
    }

    let filters: Vec<Filter> = query
        .owner_id
        .filter(|id| !id.is_empty())
        .map(|id| Filter::eq(fields::OWNER_ID, id))
        .into_iter()
        .collect();

    let page = state.events.find_page(&filters, request).await?;
    Ok(success(page, "Events retrieved"))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Response, AppError> {
    let event = state
        .events
        .find_by_id(&event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
    let timeslots = timeslots_for(&state, &event.id).await?;

    Ok(success(EventDetails { event, timeslots }, "Event retrieved"))
}

fn require_participant(participant_id: Option<String>) -> Result<String, AppError> {
    participant_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::ValidationError("Participant ID is required".to_string()))
}

async fn load_participation(
    state: &AppState,
    participant_uid: &str,
    event_id: &str,
    failure: &'static str,
) -> Result<(Participant, Event), AppError> {
    let participant = find_account(state.participants.as_ref(), participant_uid)
        .await
        .map_err(internal(failure))?
        .ok_or_else(|| AppError::NotFound("Participant not found".to_string()))?;

    let event = state
        .events
        .find_by_id(event_id)
        .await
        .map_err(internal(failure))?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok((participant, event))
}

/// Participant first, then event. The two writes are not atomic.
async fn save_participation(
    state: &AppState,
    participant: &mut Participant,
    event: &mut Event,
    failure: &'static str,
) -> Result<(), AppError> {
    let now = Utc::now();
    participant.set_updated_at(now);
    event.set_updated_at(now);

    state
        .participants
        .save(participant)
        .await
        .map_err(internal(failure))?;
    state.events.save(event).await.map_err(internal(failure))?;
    Ok(())
}

pub async fn toggle_bookmark(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    ApiJson(body): ApiJson<ParticipantRef>,
) -> Result<Response, AppError> {
    const FAILURE: &str = "Failed to toggle bookmark";

    let participant_uid = require_participant(body.participant_id)?;
    let (mut participant, mut event) =
        load_participation(&state, &participant_uid, &event_id, FAILURE).await?;

    let bookmarked = toggle_membership(&mut participant.bookmarked_event_ids, &event_id);
    event.record_bookmark(&participant_uid, bookmarked);
    save_participation(&state, &mut participant, &mut event, FAILURE).await?;

    info!(event_id = %event_id, participant = %participant_uid, bookmarked, "Bookmark toggled");
    Ok(success(
        BookmarkState {
            is_bookmarked: bookmarked,
            interested_count: event.interested_count,
        },
        "Bookmark toggled",
    ))
}

pub async fn toggle_going(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    ApiJson(body): ApiJson<ParticipantRef>,
) -> Result<Response, AppError> {
    const FAILURE: &str = "Failed to toggle going status";

    let participant_uid = require_participant(body.participant_id)?;
    let (mut participant, mut event) =
        load_participation(&state, &participant_uid, &event_id, FAILURE).await?;

    let going = toggle_membership(&mut participant.registered_event_ids, &event_id);
    event.record_going(going);
    save_participation(&state, &mut participant, &mut event, FAILURE).await?;

    info!(event_id = %event_id, participant = %participant_uid, going, "Going status toggled");
    Ok(success(
        GoingState {
            is_going: going,
            going_count: event.going_count,
        },
        "Going status toggled",
    ))
}

/// Read-only; an unknown participant simply has no bookmarks or registrations.
pub async fn user_status(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    ApiQuery(query): ApiQuery<ParticipantRef>,
) -> Result<Response, AppError> {
    let participant_uid = require_participant(query.participant_id)?;
    let participant = find_account(state.participants.as_ref(), &participant_uid)
        .await
        .map_err(internal("Failed to get user status"))?;

    let status = match participant {
        Some(p) => UserStatus {
            is_bookmarked: p.has_bookmarked(&event_id),
            is_going: p.is_going(&event_id),
        },
        None => UserStatus {
            is_bookmarked: false,
            is_going: false,
        },
    };

    Ok(success(status, "User status retrieved"))
}
