use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Account, Role};
use crate::store::Document;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_super_admin: bool,
    #[serde(default)]
    pub firebase_uid: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Document for Admin {
    const COLLECTION: &'static str = "admins";
    const UNIQUE_FIELDS: &'static [&'static str] = &["email", "username"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Account for Admin {
    const ROLE: Role = Role::Admin;

    fn firebase_uid(&self) -> &str {
        &self.firebase_uid
    }

    fn set_firebase_uid(&mut self, uid: String) {
        self.firebase_uid = uid;
    }
}
