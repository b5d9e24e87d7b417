// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use anaue_ical::FeedEvent;
use jiff::civil::Date;

/// Status of a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// The day is free.
    Available,

    /// The day falls inside a reservation.
    Booked,
}

/// Day-granularity availability map, derived fresh from each feed fetch.
///
/// Only booked days are stored; any absent date is [`DayStatus::Available`].
/// Serializes as a `date → status` object, which is exactly the shape the
/// availability endpoint returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Availability(BTreeMap<Date, DayStatus>);

impl Availability {
    /// An empty map (everything available).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the map from a fetch cycle's events.
    ///
    /// Every day in the half-open interval `[start, end)` of each event is
    /// marked booked; the checkout day stays free by convention. Events with
    /// `end <= start` contribute nothing.
    #[must_use]
    pub fn from_events(events: &[FeedEvent]) -> Self {
        let mut days = BTreeMap::new();
        for event in events {
            let mut day = event.start;
            while day < event.end {
                days.insert(day, DayStatus::Booked);
                let Ok(next) = day.tomorrow() else {
                    break;
                };
                day = next;
            }
        }
        Self(days)
    }

    /// Status of a date; absent dates are available.
    #[must_use]
    pub fn status(&self, date: Date) -> DayStatus {
        self.0.get(&date).copied().unwrap_or(DayStatus::Available)
    }

    /// Whether the date falls inside a reservation.
    #[must_use]
    pub fn is_booked(&self, date: Date) -> bool {
        self.status(date) == DayStatus::Booked
    }

    /// Number of booked days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no day is booked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Booked days in ascending order.
    pub fn booked_days(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn event(start: Date, end: Date) -> FeedEvent {
        FeedEvent {
            start,
            end,
            summary: "Reserva".to_string(),
        }
    }

    #[test]
    fn checkout_day_is_not_blocked() {
        let events = [event(date(2024, 1, 17), date(2024, 1, 19))];
        let availability = Availability::from_events(&events);

        let booked: Vec<_> = availability.booked_days().collect();
        assert_eq!(booked, vec![date(2024, 1, 17), date(2024, 1, 18)]);
        assert!(!availability.is_booked(date(2024, 1, 19)));
    }

    #[test]
    fn map_is_the_union_of_event_intervals() {
        let events = [
            event(date(2024, 1, 17), date(2024, 1, 19)),
            event(date(2024, 1, 23), date(2024, 1, 25)),
            // Overlapping stay, union not double counting.
            event(date(2024, 1, 18), date(2024, 1, 20)),
        ];
        let availability = Availability::from_events(&events);

        let booked: Vec<_> = availability.booked_days().collect();
        assert_eq!(
            booked,
            vec![
                date(2024, 1, 17),
                date(2024, 1, 18),
                date(2024, 1, 19),
                date(2024, 1, 23),
                date(2024, 1, 24),
            ]
        );
    }

    #[test]
    fn inverted_interval_contributes_nothing() {
        let events = [event(date(2024, 1, 19), date(2024, 1, 17))];
        assert!(Availability::from_events(&events).is_empty());
    }

    #[test]
    fn single_night_blocks_only_checkin() {
        let events = [event(date(2024, 1, 17), date(2024, 1, 18))];
        let availability = Availability::from_events(&events);
        assert_eq!(availability.len(), 1);
        assert!(availability.is_booked(date(2024, 1, 17)));
    }

    #[test]
    fn absent_dates_are_available() {
        let availability = Availability::new();
        assert_eq!(availability.status(date(2024, 6, 1)), DayStatus::Available);
    }

    #[test]
    fn serializes_as_date_to_status_object() {
        let events = [event(date(2024, 1, 17), date(2024, 1, 18))];
        let availability = Availability::from_events(&events);

        let json = serde_json::to_value(&availability).unwrap();
        assert_eq!(json, serde_json::json!({ "2024-01-17": "booked" }));
    }
}
