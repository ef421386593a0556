//! Session identifiers.
//!
//! Sessions use UUIDv7, so ids sort by creation time and the creation time
//! can be read back from the id.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Fresh session id.
pub fn new_session_id() -> Uuid {
    Uuid::now_v7()
}

/// Creation time embedded in a v7 id. `None` for other versions.
pub fn created_at(id: Uuid) -> Option<DateTime<Utc>> {
    let (secs, nanos) = id.get_timestamp()?.to_unix();
    DateTime::from_timestamp(i64::try_from(secs).ok()?, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_v7_and_ordered() {
        let a = new_session_id();
        let b = new_session_id();
        assert_eq!(a.get_version(), Some(uuid::Version::SortRand));
        assert!(b >= a);
    }

    #[test]
    fn creation_time_round_trips() {
        let before = Utc::now().timestamp_millis();
        let at = created_at(new_session_id()).expect("v7 timestamp");
        let after = Utc::now().timestamp_millis();
        assert!((before..=after).contains(&at.timestamp_millis()));
    }

    #[test]
    fn nil_id_has_no_creation_time() {
        assert!(created_at(Uuid::nil()).is_none());
    }
}
