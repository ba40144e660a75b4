use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Account, Role, Verifiable};
use crate::store::Document;

/// An individual who runs events, optionally on behalf of an organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    /// Id of the owning organization document.
    #[serde(default)]
    pub organization_id: Option<String>,
    #[serde(default)]
    pub event_ids: Vec<String>,
    #[serde(default)]
    pub firebase_uid: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Document for Organizer {
    const COLLECTION: &'static str = "organizers";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email", "username"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Account for Organizer {
    const ROLE: Role = Role::Organizer;

    fn firebase_uid(&self) -> &str {
        &self.firebase_uid
    }

    fn set_firebase_uid(&mut self, uid: String) {
        self.firebase_uid = uid;
    }
}

impl Verifiable for Organizer {
    const VERIFIED_FIELD: &'static str = "verified";

    fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }
}
