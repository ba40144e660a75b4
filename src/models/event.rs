use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::append_unique;
use crate::store::Document;

/// Used when an event is created without any cover image.
pub const DEFAULT_COVER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=1200";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// "on-site" or "online".
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_scope: Option<String>,
    /// Firebase uid of the owning organization or organizer.
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub cover_image_url: String,
    #[serde(default)]
    pub banner_image_url: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub organizer_name: Option<String>,
    #[serde(default = "active_by_default")]
    pub active: bool,
    /// Skill document ids.
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub co_hosts: Vec<String>,
    #[serde(default)]
    pub sponsors: Vec<String>,
    /// Firebase uids of participants who bookmarked the event.
    #[serde(default)]
    pub bookmarked_by: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub interested_count: u32,
    #[serde(default)]
    pub going_count: u32,
    #[serde(default)]
    pub share_count: u32,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn active_by_default() -> bool {
    true
}

impl Event {
    /// Fills empty image slots: banner falls back to cover, cover to the default image.
    pub fn apply_image_fallbacks(&mut self) {
        if self.cover_image_url.trim().is_empty() {
            self.cover_image_url = DEFAULT_COVER_IMAGE_URL.to_string();
        }
        if self.banner_image_url.trim().is_empty() {
            self.banner_image_url = self.cover_image_url.clone();
        }
    }

    pub fn record_bookmark(&mut self, participant_uid: &str, bookmarked: bool) {
        if bookmarked {
            append_unique(&mut self.bookmarked_by, participant_uid);
            self.interested_count += 1;
        } else {
            self.bookmarked_by.retain(|uid| uid != participant_uid);
            self.interested_count = self.interested_count.saturating_sub(1);
        }
    }

    pub fn record_going(&mut self, going: bool) {
        if going {
            self.going_count += 1;
        } else {
            self.going_count = self.going_count.saturating_sub(1);
        }
    }
}

impl Document for Event {
    const COLLECTION: &'static str = "events";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
