use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use eventlagbe_server::identity::{IdentityError, IdentityProvider};
use eventlagbe_server::models::event::DEFAULT_COVER_IMAGE_URL;
use eventlagbe_server::models::{Admin, Event, Organization, Organizer, Participant, Skill};
use eventlagbe_server::routes::create_routes;
use eventlagbe_server::state::AppState;

/// Records deletions and optionally refuses them.
#[derive(Default)]
struct ScriptedIdentity {
    fail: bool,
    deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl IdentityProvider for ScriptedIdentity {
    async fn delete_account(&self, uid: &str) -> Result<(), IdentityError> {
        if self.fail {
            return Err(IdentityError::Rejected {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        self.deleted.lock().unwrap().push(uid.to_string());
        Ok(())
    }
}

struct TestApp {
    router: Router,
    state: AppState,
    identity: Arc<ScriptedIdentity>,
}

fn app_with(identity: ScriptedIdentity) -> TestApp {
    let identity = Arc::new(identity);
    let state = AppState::in_memory(identity.clone());
    TestApp {
        router: create_routes(state.clone()),
        state,
        identity,
    }
}

fn app() -> TestApp {
    app_with(ScriptedIdentity::default())
}

impl TestApp {
    async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(body)).await
    }

    async fn seed_participant(&self, uid: &str) -> Participant {
        self.state
            .participants
            .insert(Participant {
                firebase_uid: uid.to_string(),
                ..Default::default()
            })
            .await
            .unwrap()
    }

    async fn seed_event(&self, title: &str) -> Event {
        self.state
            .events
            .insert(Event {
                title: title.to_string(),
                active: true,
                ..Default::default()
            })
            .await
            .unwrap()
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = app.get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
}

// ---------------------------------------------------------------------
// Registration & role lookup
// ---------------------------------------------------------------------

#[tokio::test]
async fn test_register_without_firebase_uid_is_rejected() {
    let app = app();
    let (status, body) = app
        .post("/api/auth/register/participant", json!({ "email": "p@uni.edu" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(app.state.participants.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_register_then_fetch_and_update_profile() {
    let app = app();
    let (status, body) = app
        .post(
            "/api/auth/register/organization",
            json!({ "firebaseUid": "org-1", "email": "team@club.org", "username": "club", "type": "student" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(body["data"]["verified"], false);

    let (status, body) = app.get("/api/auth/organization/org-1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["type"], "student");

    let (status, body) = app
        .call(
            Method::PUT,
            "/api/auth/organization/org-1",
            Some(json!({ "id": "forged", "email": "new@club.org", "username": "club", "firebaseUid": "someone-else" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["firebaseUid"], "org-1");
    assert_eq!(body["data"]["email"], "new@club.org");

    let (status, _) = app.get("/api/auth/organizer/org-1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_email_is_a_conflict() {
    let app = app();
    let first = json!({ "firebaseUid": "a1", "email": "root@site.io", "username": "root" });
    let second = json!({ "firebaseUid": "a2", "email": "root@site.io", "username": "other" });

    let (status, _) = app.post("/api/auth/register/admin", first).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.post("/api/auth/register/admin", second).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(app.state.admins.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_role_lookup_prefers_admin() {
    let app = app();
    app.seed_participant("shared").await;
    app.state
        .admins
        .insert(Admin {
            firebase_uid: "shared".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let (status, body) = app.get("/api/auth/role/shared").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], "admin");
    assert_eq!(body["data"]["user"]["firebaseUid"], "shared");

    app.seed_participant("only-participant").await;
    let (_, body) = app.get("/api/auth/role/only-participant").await;
    assert_eq!(body["data"]["role"], "participant");

    let (status, body) = app.get("/api/auth/role/nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_check_username_spans_all_roles() {
    let app = app();
    app.state
        .organizers
        .insert(Organizer {
            username: "taken".to_string(),
            firebase_uid: "o1".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let (_, body) = app.get("/api/auth/check-username/taken").await;
    assert_eq!(body["data"]["exists"], true);

    let (_, body) = app.get("/api/auth/check-username/free").await;
    assert_eq!(body["data"]["exists"], false);
}

// ---------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------

#[tokio::test]
async fn test_create_event_parses_timeslots_and_links_owner() {
    let app = app();
    let org = app
        .state
        .organizations
        .insert(Organization {
            firebase_uid: "org-uid".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let skill = app
        .state
        .skills
        .insert(Skill {
            name: "Rust".to_string(),
            is_active: true,
            ..Default::default()
        })
        .await
        .unwrap();

    let (status, body) = app
        .post(
            "/api/events",
            json!({
                "title": "Systems night",
                "ownerId": "org-uid",
                "coverImageUrl": "https://cdn/cover.png",
                "requiredSkills": [{ "id": skill.id, "name": "Rust" }],
                "sponsors": ["Acme"],
                "timeslots": [
                    { "start": "2024-05-01" },
                    { "title": "Talks", "start": "2024-05-01T10:00:00Z", "end": "2024-05-01T14:00:00+02:00" },
                    { "start": "2024-05-01T09:30" },
                    { "start": "not-a-date" }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let event = &body["data"]["event"];
    let event_id = event["id"].as_str().unwrap().to_string();
    assert_eq!(event["active"], true);
    assert_eq!(event["requiredSkills"], json!([skill.id]));
    assert_eq!(event["sponsors"], json!(["Acme"]));
    assert_eq!(event["bannerImageUrl"], "https://cdn/cover.png");

    let slots = body["data"]["timeslots"].as_array().unwrap();
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["start"], "2024-05-01T00:00:00Z");
    assert_eq!(slots[0]["title"], "Session");
    assert_eq!(slots[1]["end"], "2024-05-01T12:00:00Z");
    assert_eq!(slots[2]["start"], "2024-05-01T09:30:00Z");

    let org = app.state.organizations.find_by_id(&org.id).await.unwrap().unwrap();
    assert_eq!(org.event_ids, vec![event_id.clone()]);

    let (status, body) = app.get(&format!("/api/events/{}", event_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["timeslots"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_event_links_organizer_owner() {
    let app = app();
    let organizer = app
        .state
        .organizers
        .insert(Organizer {
            firebase_uid: "solo".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let (status, body) = app
        .post("/api/events", json!({ "title": "Meetup", "ownerId": "solo" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["event"]["coverImageUrl"], DEFAULT_COVER_IMAGE_URL);
    assert_eq!(body["data"]["event"]["bannerImageUrl"], DEFAULT_COVER_IMAGE_URL);

    let organizer = app.state.organizers.find_by_id(&organizer.id).await.unwrap().unwrap();
    assert_eq!(organizer.event_ids.len(), 1);
}

#[tokio::test]
async fn test_create_event_rejects_unknown_skill() {
    let app = app();
    let (status, body) = app
        .post("/api/events", json!({ "title": "Bad", "requiredSkillIds": ["missing"] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(app.state.events.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_unknown_event_is_not_found() {
    let app = app();
    let (status, _) = app.get("/api/events/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_event_listing_pages() {
    let app = app();
    for i in 0..15 {
        app.seed_event(&format!("Event {}", i)).await;
    }

    let (status, body) = app.get("/api/events?page=0&size=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["content"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"]["totalElements"], 15);
    assert_eq!(body["data"]["totalPages"], 2);
    assert_eq!(body["data"]["content"][0]["title"], "Event 0");

    let (_, body) = app.get("/api/events?page=1").await;
    assert_eq!(body["data"]["content"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"]["content"][0]["title"], "Event 10");

    let (status, _) = app.get("/api/events?size=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_event_listing_filters_by_owner() {
    let app = app();
    app.seed_event("Unowned").await;
    app.state
        .events
        .insert(Event {
            title: "Owned".to_string(),
            owner_id: Some("owner-1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let (_, body) = app.get("/api/events?ownerId=owner-1").await;
    let content = body["data"]["content"].as_array().unwrap();
    assert_eq!(content.len(), 1);
    assert_eq!(content[0]["title"], "Owned");
    assert_eq!(body["data"]["totalElements"], 1);
}

#[tokio::test]
async fn test_bookmark_toggle_round_trips() {
    let app = app();
    let participant = app.seed_participant("p1").await;
    let event = app.seed_event("Workshop").await;
    let uri = format!("/api/events/{}/bookmark", event.id);

    let (status, body) = app.post(&uri, json!({ "participantId": "p1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "isBookmarked": true, "interestedCount": 1 }));

    let stored = app.state.events.find_by_id(&event.id).await.unwrap().unwrap();
    assert_eq!(stored.bookmarked_by, vec!["p1"]);

    let (_, body) = app.post(&uri, json!({ "participantId": "p1" })).await;
    assert_eq!(body["data"], json!({ "isBookmarked": false, "interestedCount": 0 }));

    let stored = app.state.events.find_by_id(&event.id).await.unwrap().unwrap();
    assert_eq!(stored.interested_count, 0);
    assert!(stored.bookmarked_by.is_empty());
    let participant = app
        .state
        .participants
        .find_by_id(&participant.id)
        .await
        .unwrap()
        .unwrap();
    assert!(participant.bookmarked_event_ids.is_empty());
}

#[tokio::test]
async fn test_going_toggle_and_user_status() {
    let app = app();
    app.seed_participant("p1").await;
    let event = app.seed_event("Hackathon").await;
    let status_uri = format!("/api/events/{}/user-status?participantId=p1", event.id);

    let (_, body) = app.get(&status_uri).await;
    assert_eq!(body["data"], json!({ "isBookmarked": false, "isGoing": false }));

    let (_, body) = app
        .post(&format!("/api/events/{}/going", event.id), json!({ "participantId": "p1" }))
        .await;
    assert_eq!(body["data"], json!({ "isGoing": true, "goingCount": 1 }));

    let (_, body) = app.get(&status_uri).await;
    assert_eq!(body["data"], json!({ "isBookmarked": false, "isGoing": true }));

    let (_, body) = app
        .post(&format!("/api/events/{}/going", event.id), json!({ "participantId": "p1" }))
        .await;
    assert_eq!(body["data"], json!({ "isGoing": false, "goingCount": 0 }));

    let (status, body) = app
        .get(&format!("/api/events/{}/user-status?participantId=ghost", event.id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "isBookmarked": false, "isGoing": false }));
}

#[tokio::test]
async fn test_toggle_requires_known_participant_and_event() {
    let app = app();
    app.seed_participant("p1").await;
    let event = app.seed_event("Demo day").await;
    let uri = format!("/api/events/{}/bookmark", event.id);

    let (status, body) = app.post(&uri, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, _) = app.post(&uri, json!({ "participantId": "ghost" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post("/api/events/missing/going", json!({ "participantId": "p1" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.get(&format!("/api/events/{}/user-status", event.id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_requests_use_error_envelope() {
    let app = app();
    app.seed_participant("p1").await;
    let event = app.seed_event("Open house").await;

    let (status, body) = app.get("/api/events?page=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = app
        .post(&format!("/api/events/{}/bookmark", event.id), json!({ "participantId": 5 }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let (status, body) = app.call(Method::POST, "/api/skills", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let stored = app.state.events.find_by_id(&event.id).await.unwrap().unwrap();
    assert_eq!(stored.interested_count, 0);
}

#[tokio::test]
async fn test_timeslots_without_seconds_or_with_zone_id_are_kept() {
    let app = app();
    let (status, body) = app
        .post(
            "/api/events",
            json!({
                "title": "Dhaka meetup",
                "timeslots": [
                    { "start": "2024-05-01T10:00Z" },
                    { "start": "2024-05-01T12:00+02:00" },
                    { "start": "2024-05-01T16:00:00+06:00[Asia/Dhaka]" }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    let slots = body["data"]["timeslots"].as_array().unwrap();
    assert_eq!(slots.len(), 3);
    for slot in slots {
        assert_eq!(slot["start"], "2024-05-01T10:00:00Z");
    }
}

// ---------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------

async fn seed_organizer(app: &TestApp, uid: &str, organization_id: &str, verified: bool) -> Organizer {
    app.state
        .organizers
        .insert(Organizer {
            firebase_uid: uid.to_string(),
            organization_id: Some(organization_id.to_string()),
            verified,
            ..Default::default()
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_approve_moves_organizer_out_of_unverified() {
    let app = app();
    let pending = seed_organizer(&app, "o1", "org-a", false).await;
    seed_organizer(&app, "o2", "org-a", true).await;

    let (_, body) = app.get("/api/organizer/unverified").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .call(Method::PUT, &format!("/api/organizer/{}/approve", pending.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["verified"], true);

    let (_, body) = app.get("/api/organizer/unverified").await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = app.call(Method::PUT, "/api/organizer/missing/approve", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_participant_verification_uses_admin_flag() {
    let app = app();
    let participant = app.seed_participant("p1").await;

    let (_, body) = app.get("/api/participant/unverified").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = app
        .call(Method::PUT, &format!("/api/participant/{}/approve", participant.id), None)
        .await;
    assert_eq!(body["data"]["verifiedByAdmin"], true);
}

#[tokio::test]
async fn test_failed_identity_deletion_keeps_organizer() {
    let app = app_with(ScriptedIdentity {
        fail: true,
        ..Default::default()
    });
    let organizer = seed_organizer(&app, "o1", "org-a", false).await;

    let (status, body) = app
        .call(Method::DELETE, &format!("/api/organizer/{}/reject", organizer.id), None)
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "EXTERNAL_SERVICE_ERROR");

    let kept = app.state.organizers.find_by_id(&organizer.id).await.unwrap();
    assert!(matches!(kept, Some(o) if !o.verified));
}

#[tokio::test]
async fn test_reject_deletes_identity_then_document() {
    let app = app();
    let org = app
        .state
        .organizations
        .insert(Organization {
            firebase_uid: "org-uid".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let (status, body) = app
        .call(Method::DELETE, &format!("/api/organizations/{}/reject", org.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("data").is_none());
    assert_eq!(*app.identity.deleted.lock().unwrap(), vec!["org-uid"]);
    assert!(app.state.organizations.find_by_id(&org.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_reject_without_identity_skips_provider() {
    let app = app_with(ScriptedIdentity {
        fail: true,
        ..Default::default()
    });
    let participant = app.seed_participant("").await;

    let (status, _) = app
        .call(Method::DELETE, &format!("/api/participant/{}/reject", participant.id), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(app.state.participants.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_organizers_by_organization_and_flag() {
    let app = app();
    seed_organizer(&app, "o1", "org-a", true).await;
    seed_organizer(&app, "o2", "org-a", false).await;
    seed_organizer(&app, "o3", "org-b", true).await;

    let (_, body) = app.get("/api/organizer/org-a/verified-organizers").await;
    let verified = body["data"].as_array().unwrap();
    assert_eq!(verified.len(), 1);
    assert_eq!(verified[0]["firebaseUid"], "o1");

    let (_, body) = app.get("/api/organizer/org-a/unverified-organizers").await;
    assert_eq!(body["data"][0]["firebaseUid"], "o2");

    let (_, body) = app.get("/api/organizer").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_organization_routes_answer_on_both_prefixes() {
    let app = app();
    app.state
        .organizations
        .insert(Organization::default())
        .await
        .unwrap();

    let (_, singular) = app.get("/api/organization").await;
    let (_, plural) = app.get("/api/organizations").await;
    assert_eq!(singular["data"].as_array().unwrap().len(), 1);
    assert_eq!(singular["data"], plural["data"]);
}

// ---------------------------------------------------------------------
// Participants & skills
// ---------------------------------------------------------------------

#[tokio::test]
async fn test_past_events_skip_missing_ids() {
    let app = app();
    let event = app.seed_event("Last year").await;
    app.state
        .participants
        .insert(Participant {
            firebase_uid: "p1".to_string(),
            past_event_ids: vec![event.id.clone(), "deleted".to_string()],
            ..Default::default()
        })
        .await
        .unwrap();

    let (status, body) = app.get("/api/participant/p1/past-events").await;
    assert_eq!(status, StatusCode::OK);
    let events = body["data"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"], event.id.as_str());

    let (status, _) = app.get("/api/participant/ghost/past-events").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_skill_leaves_catalog_unchanged() {
    let app = app();
    let (status, _) = app.post("/api/skills", json!({ "name": "Go", "isActive": true })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.post("/api/skills", json!({ "name": "Go" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(body["error"]["message"], "Skill with this name already exists");

    let (_, body) = app.get("/api/skills").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, _) = app.post("/api/skills", json!({ "name": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_skill_update_and_delete() {
    let app = app();
    let (_, body) = app
        .post("/api/skills", json!({ "name": "Python", "description": "Scripting" }))
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .call(
            Method::PUT,
            &format!("/api/skills/{}", id),
            Some(json!({ "id": "ignored", "name": "Python 3", "isActive": true })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], id.as_str());
    assert_eq!(body["data"]["name"], "Python 3");
    assert_eq!(body["data"]["isActive"], true);

    let (status, _) = app.call(Method::DELETE, &format!("/api/skills/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.call(Method::DELETE, &format!("/api/skills/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .call(Method::PUT, "/api/skills/missing", Some(json!({ "name": "x" })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
