use std::sync::Arc;

use sqlx::postgres::PgPool;

use crate::identity::IdentityProvider;
use crate::models::{Admin, Event, EventTimeslot, Organization, Organizer, Participant, Skill};
use crate::store::{Document, MemoryRepository, PgRepository, Repository};

/// Shared handler state: one repository per collection plus the identity bridge.
#[derive(Clone)]
pub struct AppState {
    pub admins: Arc<dyn Repository<Admin>>,
    pub organizations: Arc<dyn Repository<Organization>>,
    pub organizers: Arc<dyn Repository<Organizer>>,
    pub participants: Arc<dyn Repository<Participant>>,
    pub events: Arc<dyn Repository<Event>>,
    pub timeslots: Arc<dyn Repository<EventTimeslot>>,
    pub skills: Arc<dyn Repository<Skill>>,
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    pub fn postgres(pool: PgPool, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            admins: Arc::new(PgRepository::new(pool.clone())),
            organizations: Arc::new(PgRepository::new(pool.clone())),
            organizers: Arc::new(PgRepository::new(pool.clone())),
            participants: Arc::new(PgRepository::new(pool.clone())),
            events: Arc::new(PgRepository::new(pool.clone())),
            timeslots: Arc::new(PgRepository::new(pool.clone())),
            skills: Arc::new(PgRepository::new(pool)),
            identity,
        }
    }

    pub fn in_memory(identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            admins: Arc::new(MemoryRepository::new()),
            organizations: Arc::new(MemoryRepository::new()),
            organizers: Arc::new(MemoryRepository::new()),
            participants: Arc::new(MemoryRepository::new()),
            events: Arc::new(MemoryRepository::new()),
            timeslots: Arc::new(MemoryRepository::new()),
            skills: Arc::new(MemoryRepository::new()),
            identity,
        }
    }
}

/// Resolves the repository for a document type, so handlers can be generic over roles.
pub trait Collection<T: Document> {
    fn collection(&self) -> &dyn Repository<T>;
}

macro_rules! collection {
    ($($ty:ty => $field:ident),+ $(,)?) => {
        $(
            impl Collection<$ty> for AppState {
                fn collection(&self) -> &dyn Repository<$ty> {
                    self.$field.as_ref()
                }
            }
        )+
    };
}

collection!(
    Admin => admins,
    Organization => organizations,
    Organizer => organizers,
    Participant => participants,
    Event => events,
    EventTimeslot => timeslots,
    Skill => skills,
);
