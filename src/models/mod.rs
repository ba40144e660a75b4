use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::store::Document;

pub mod admin;
pub mod event;
pub mod organization;
pub mod organizer;
pub mod participant;
pub mod skill;
pub mod timeslot;

pub use admin::Admin;
pub use event::Event;
pub use organization::Organization;
pub use organizer::Organizer;
pub use participant::Participant;
pub use skill::Skill;
pub use timeslot::EventTimeslot;

/// JSON field names used in store filters.
pub mod fields {
    pub const FIREBASE_UID: &str = "firebaseUid";
    pub const USERNAME: &str = "username";
    pub const ORGANIZATION_ID: &str = "organizationId";
    pub const OWNER_ID: &str = "ownerId";
    pub const EVENT_ID: &str = "eventId";
    pub const NAME: &str = "name";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Organization,
    Organizer,
    Participant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Organization => "organization",
            Role::Organizer => "organizer",
            Role::Participant => "participant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Organization => "Organization",
            Role::Organizer => "Organizer",
            Role::Participant => "Participant",
        }
    }
}

/// A user document tagged with the collection it was found in.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", content = "user", rename_all = "lowercase")]
pub enum RoleProfile {
    Admin(Admin),
    Organization(Organization),
    Organizer(Organizer),
    Participant(Participant),
}

impl RoleProfile {
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Admin(_) => Role::Admin,
            RoleProfile::Organization(_) => Role::Organization,
            RoleProfile::Organizer(_) => Role::Organizer,
            RoleProfile::Participant(_) => Role::Participant,
        }
    }
}

/// Creation/update stamps, written by handlers rather than the store.
pub trait Timestamped {
    fn created_at(&self) -> DateTime<Utc>;

    fn set_created_at(&mut self, at: DateTime<Utc>);

    fn set_updated_at(&mut self, at: DateTime<Utc>);

    fn stamp_new(&mut self, now: DateTime<Utc>) {
        self.set_created_at(now);
        self.set_updated_at(now);
    }
}

/// A role document keyed by its Firebase uid.
pub trait Account: Document + Timestamped {
    const ROLE: Role;

    fn firebase_uid(&self) -> &str;

    fn set_firebase_uid(&mut self, uid: String);
}

/// An account that goes through admin approval.
pub trait Verifiable: Account {
    const VERIFIED_FIELD: &'static str;

    fn set_verified(&mut self, verified: bool);
}

/// Flips `value`'s membership in `list`, returning whether it is now present.
pub fn toggle_membership(list: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
        false
    } else {
        list.push(value.to_string());
        true
    }
}

/// Appends `value` unless it is already present. Returns whether the list changed.
pub fn append_unique(list: &mut Vec<String>, value: &str) -> bool {
    if list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}

macro_rules! timestamped {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Timestamped for $ty {
                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }

                fn set_created_at(&mut self, at: DateTime<Utc>) {
                    self.created_at = at;
                }

                fn set_updated_at(&mut self, at: DateTime<Utc>) {
                    self.updated_at = at;
                }
            }
        )+
    };
}

timestamped!(Admin, Organization, Organizer, Participant, Event);
