use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Document;

pub const DEFAULT_TIMESLOT_TITLE: &str = "Session";

/// Offset-aware layouts. `%#z` takes `Z`, `+02`, `+0200` or `+02:00`.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Local date-time layouts tried after the offset-aware ones, in order.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTimeslot {
    #[serde(default)]
    pub id: String,
    pub event_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub all_day: bool,
}

impl Document for EventTimeslot {
    const COLLECTION: &'static str = "event_timeslots";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Parses a timeslot boundary.
///
/// Accepted, in order: a plain `YYYY-MM-DD` date (midnight), an RFC 3339 instant,
/// an ISO date-time with offset (seconds optional, a trailing `[Zone]` id ignored),
/// then local date-times which are taken as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if is_plain_date(s) {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    if let Ok(instant) = s.parse::<DateTime<Utc>>() {
        return Some(instant);
    }

    // `2024-05-01T10:00+06:00[Asia/Dhaka]`: the offset already fixes the instant.
    let s = strip_zone_id(s);
    if let Some(offset) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(offset.with_timezone(&Utc));
    }

    if let Some(utc) = s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        return parse_local(utc);
    }

    parse_local(s)
}

fn parse_local(s: &str) -> Option<DateTime<Utc>> {
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.and_utc())
}

fn strip_zone_id(s: &str) -> &str {
    match s.strip_suffix(']').and_then(|rest| rest.rfind('[').map(|i| &rest[..i])) {
        Some(rest) => rest.trim_end(),
        None => s,
    }
}

fn is_plain_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}
