//! Session wishlist: the set of favorited catalog records.
//!
//! Membership is keyed by record id, but entries keep the full record
//! snapshot so a favorited badge can re-render after reload without a
//! catalog roundtrip. The set is persisted in full after every mutation.
//! Persistence is fail-soft in both directions: unreadable or malformed
//! payloads load as an empty wishlist, and write failures are swallowed.

use crate::model::Car;
use crate::store::StorageBackend;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub car: Car,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    /// The notification text shown to the user after a toggle.
    pub fn event(&self, name: &str) -> String {
        match self {
            ToggleOutcome::Added => format!("{} added to wishlist.", name),
            ToggleOutcome::Removed => format!("{} removed from wishlist.", name),
        }
    }
}

pub struct Wishlist<B: StorageBackend> {
    backend: B,
    entries: Vec<WishlistEntry>,
}

impl<B: StorageBackend> Wishlist<B> {
    /// Read the persisted set once at session start. Missing or malformed
    /// data initializes an empty wishlist; a parse failure never reaches
    /// the caller.
    pub fn load(backend: B) -> Self {
        let entries = match backend.read() {
            Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or_default(),
            _ => Vec::new(),
        };
        Self { backend, entries }
    }

    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, car: &Car) -> bool {
        self.contains_id(&car.id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.car.id == id)
    }

    /// Flip membership of a record and persist the updated set
    /// synchronously. Always succeeds; the outcome reports which way the
    /// toggle went.
    pub fn toggle(&mut self, car: &Car) -> ToggleOutcome {
        let outcome = if self.contains_id(&car.id) {
            self.entries.retain(|entry| entry.car.id != car.id);
            ToggleOutcome::Removed
        } else {
            self.entries.push(WishlistEntry {
                car: car.clone(),
                added_at: Utc::now(),
            });
            ToggleOutcome::Added
        };
        self.persist();
        outcome
    }

    /// Write the full set back to the backend. A failed write is
    /// swallowed: losing a wishlist write must never break the session.
    fn persist(&mut self) {
        if let Ok(payload) = serde_json::to_string(&self.entries) {
            let _ = self.backend.write(&payload);
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CarType, Transmission};
    use crate::store::memory::InMemoryBackend;

    fn car(id: &str) -> Car {
        Car {
            id: id.to_string(),
            name: format!("Car {}", id),
            brand: "Test".to_string(),
            car_type: CarType::Sedan,
            fuel_capacity: 60.0,
            transmission: Transmission::Automatic,
            seating_capacity: 4,
            price_per_day: 80.0,
            original_price: None,
            tags: Vec::new(),
            image_url: String::new(),
            slug: id.to_string(),
            favorite: None,
        }
    }

    #[test]
    fn starts_empty_without_persisted_data() {
        let wishlist = Wishlist::load(InMemoryBackend::new());
        assert!(wishlist.is_empty());
    }

    #[test]
    fn malformed_payload_loads_as_empty() {
        let wishlist = Wishlist::load(InMemoryBackend::with_payload("not json {"));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut wishlist = Wishlist::load(InMemoryBackend::new());
        let a = car("car_A");

        assert_eq!(wishlist.toggle(&a), ToggleOutcome::Added);
        assert!(wishlist.contains(&a));
        assert_eq!(wishlist.len(), 1);

        assert_eq!(wishlist.toggle(&a), ToggleOutcome::Removed);
        assert!(!wishlist.contains(&a));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut wishlist = Wishlist::load(InMemoryBackend::new());
        let a = car("a");
        let before = wishlist.contains(&a);
        wishlist.toggle(&a);
        wishlist.toggle(&a);
        assert_eq!(wishlist.contains(&a), before);
    }

    #[test]
    fn every_toggle_persists_the_full_set() {
        let mut wishlist = Wishlist::load(InMemoryBackend::new());
        wishlist.toggle(&car("a"));
        wishlist.toggle(&car("b"));

        let payload = wishlist.backend().payload().unwrap().to_string();
        let entries: Vec<WishlistEntry> = serde_json::from_str(&payload).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].car.id, "a");
        assert_eq!(entries[1].car.id, "b");
    }

    #[test]
    fn persisted_set_survives_reload() {
        let mut wishlist = Wishlist::load(InMemoryBackend::new());
        wishlist.toggle(&car("a"));
        let payload = wishlist.backend().payload().unwrap().to_string();

        let reloaded = Wishlist::load(InMemoryBackend::with_payload(payload));
        assert!(reloaded.contains_id("a"));
    }

    #[test]
    fn write_failures_are_swallowed() {
        let mut wishlist = Wishlist::load(InMemoryBackend::failing());
        let a = car("a");
        // The in-memory membership still updates even though persistence
        // failed.
        assert_eq!(wishlist.toggle(&a), ToggleOutcome::Added);
        assert!(wishlist.contains(&a));
    }

    #[test]
    fn event_strings_match_the_notification_text() {
        assert_eq!(
            ToggleOutcome::Added.event("Koenigsegg"),
            "Koenigsegg added to wishlist."
        );
        assert_eq!(
            ToggleOutcome::Removed.event("Koenigsegg"),
            "Koenigsegg removed from wishlist."
        );
    }
}
