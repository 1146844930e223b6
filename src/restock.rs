//! Working out which favourites came back into stock since the last look.
//! By: Curtis Jones <mail@curtisjones.ca>
//! Started on: October 7, 2026

use super::session::{ListingSnapshot, Session};

#[derive(Debug, Clone, PartialEq)]
pub struct RestockEvent {
    pub listing: ListingSnapshot,
    pub previous: u32,
}

/// What one pass over a fetch turned up.
#[derive(Debug, Default, PartialEq)]
pub struct Detection {
    pub events: Vec<RestockEvent>,
    // Only ever set on the seeding pass, used to prove the webhook works.
    pub test_notification: Option<ListingSnapshot>,
}

impl Detection {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.test_notification.is_none()
    }
}

/// Compare a fresh fetch against the session's baseline.
///
/// The first call only seeds the baseline and picks the first listing as a test
/// notification. After that a listing is reported when its count is strictly above what we
/// last stored for it, a listing we have never seen counting as 0. Reported listings replace
/// their baseline entry; everything else in the baseline is left alone, including listings
/// missing from this fetch.
pub fn detect(session: &mut Session, snapshots: Vec<ListingSnapshot>) -> Detection {
    let mut detection = Detection::default();
    if !session.baseline_initialized {
        detection.test_notification = snapshots.first().cloned();
        for snap in snapshots {
            session.baseline.insert(snap.id.clone(), snap);
        }
        session.baseline_initialized = true;
        return detection;
    }
    for snap in snapshots {
        let previous = session
            .baseline
            .get(&snap.id)
            .map(|prior| prior.available)
            .unwrap_or(0);
        if previous < snap.available {
            session.baseline.insert(snap.id.clone(), snap.clone());
            detection.events.push(RestockEvent {
                listing: snap,
                previous,
            });
        }
    }
    detection
}
