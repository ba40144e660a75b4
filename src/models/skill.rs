use serde::{Deserialize, Serialize};

use crate::store::Document;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

impl Skill {
    /// Copies the editable fields from `changes`, leaving the id untouched.
    pub fn apply(&mut self, changes: Skill) {
        self.name = changes.name;
        self.description = changes.description;
        self.is_active = changes.is_active;
    }
}

impl Document for Skill {
    const COLLECTION: &'static str = "skills";
    const UNIQUE_FIELDS: &'static [&'static str] = &["name"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
