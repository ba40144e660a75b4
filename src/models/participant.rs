use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Account, Role, Verifiable};
use crate::store::Document;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub id_document_urls: Vec<String>,
    #[serde(default)]
    pub verified_by_admin: bool,
    /// Skill document ids.
    #[serde(default)]
    pub interested_skills: Vec<String>,
    #[serde(default)]
    pub registered_event_ids: Vec<String>,
    #[serde(default)]
    pub past_event_ids: Vec<String>,
    #[serde(default)]
    pub favorite_organizer_ids: Vec<String>,
    #[serde(default)]
    pub bookmarked_event_ids: Vec<String>,
    #[serde(default)]
    pub firebase_uid: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Participant {
    pub fn has_bookmarked(&self, event_id: &str) -> bool {
        self.bookmarked_event_ids.iter().any(|id| id == event_id)
    }

    pub fn is_going(&self, event_id: &str) -> bool {
        self.registered_event_ids.iter().any(|id| id == event_id)
    }
}

impl Document for Participant {
    const COLLECTION: &'static str = "participants";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email", "name"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Account for Participant {
    const ROLE: Role = Role::Participant;

    fn firebase_uid(&self) -> &str {
        &self.firebase_uid
    }

    fn set_firebase_uid(&mut self, uid: String) {
        self.firebase_uid = uid;
    }
}

impl Verifiable for Participant {
    const VERIFIED_FIELD: &'static str = "verifiedByAdmin";

    fn set_verified(&mut self, verified: bool) {
        self.verified_by_admin = verified;
    }
}
