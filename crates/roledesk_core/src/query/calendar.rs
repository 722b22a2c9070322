//! Calendar projections.

use crate::model::event::Event;
use crate::store::DomainStore;
use crate::time::local_date;
use chrono::NaiveDate;

/// Number of entries in the "upcoming events" side panel.
pub const UPCOMING_EVENTS_LIMIT: usize = 5;

/// Events at or after `now`, soonest first, at most `limit`.
pub fn upcoming_events(store: &DomainStore, now: i64, limit: usize) -> Vec<&Event> {
    let mut events: Vec<&Event> = store
        .events()
        .iter()
        .filter(|event| event.date >= now)
        .collect();
    events.sort_by_key(|event| event.date);
    events.truncate(limit);
    events
}

/// Events starting on the given local calendar day, in insertion order.
pub fn events_on_day(store: &DomainStore, day: NaiveDate) -> Vec<&Event> {
    store
        .events()
        .iter()
        .filter(|event| local_date(event.date) == day)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{events_on_day, upcoming_events};
    use crate::model::event::NewEvent;
    use crate::store::DomainStore;
    use crate::time::{local_date, DAY_MS, HOUR_MS};

    fn fixed_now() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn upcoming_is_sorted_and_limited() {
        let mut store = DomainStore::seeded_with_clock(fixed_now);
        store.create_event(NewEvent::new("Soon", fixed_now() + HOUR_MS, "2"));
        store.create_event(NewEvent::new("Past", fixed_now() - HOUR_MS, "2"));

        let titles: Vec<_> = upcoming_events(&store, fixed_now(), 2)
            .into_iter()
            .map(|event| event.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Soon", "Team Meeting"]);
    }

    #[test]
    fn day_view_matches_local_date() {
        let store = DomainStore::seeded_with_clock(fixed_now);
        let day = local_date(fixed_now() + 5 * DAY_MS);
        let events = events_on_day(&store, day);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Client Presentation");
    }
}
