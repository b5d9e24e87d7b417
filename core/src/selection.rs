// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use jiff::civil::Date;

use crate::availability::Availability;

/// Outcome of toggling a date in a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The date joined the selection.
    Added,

    /// The date left the selection.
    Removed,

    /// The date is booked and the selection was left untouched.
    Rejected,
}

/// The visitor's per-session set of chosen dates.
///
/// Unordered and deduplicated; lives only as long as the browser tab and is
/// cleared by explicit action or page reload. Iteration is always sorted, so
/// the reservation message lists dates in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<Date>);

impl Selection {
    /// An empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a date, refusing dates the availability map marks booked.
    ///
    /// Toggling the same date twice returns the selection to its prior
    /// state.
    pub fn toggle(&mut self, date: Date, availability: &Availability) -> Toggle {
        if availability.is_booked(date) {
            return Toggle::Rejected;
        }
        if self.0.remove(&date) {
            Toggle::Removed
        } else {
            self.0.insert(date);
            Toggle::Added
        }
    }

    /// Removes a single date, as the "Datas Selecionadas" list does.
    pub fn remove(&mut self, date: Date) -> bool {
        self.0.remove(&date)
    }

    /// Drops every selected date ("Limpar Seleção").
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether the selection holds a date.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.0.contains(&date)
    }

    /// Number of selected dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing is selected. The reserve action is unavailable while
    /// this holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected dates in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.iter().copied()
    }

    /// The reservation request sent when the visitor reserves the selected
    /// dates, or `None` while the selection is empty.
    #[must_use]
    pub fn reservation_message(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let dates = self
            .dates()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!(
            "Olá! Gostaria de fazer uma reserva para as seguintes datas: {dates}"
        ))
    }
}
