// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::Date;

/// pt-BR month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// pt-BR weekday abbreviations, Sunday first, matching the grid columns.
pub const WEEKDAYS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// One month of the calendar view.
///
/// The grid is seven columns wide starting on Sunday: blank cells pad the
/// first week up to the weekday of day 1, then the days of the month follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: Date,
}

impl MonthGrid {
    /// The grid of the month containing `date`.
    #[must_use]
    pub fn containing(date: Date) -> Self {
        Self {
            first: date.first_of_month(),
        }
    }

    /// Year shown.
    #[must_use]
    pub fn year(&self) -> i16 {
        self.first.year()
    }

    /// Month shown (1–12).
    #[must_use]
    pub fn month(&self) -> i8 {
        self.first.month()
    }

    /// Header label, e.g. `"Janeiro 2024"`.
    #[must_use]
    pub fn title(&self) -> String {
        let name = MONTH_NAMES
            .get(usize::from(self.first.month().unsigned_abs()) - 1)
            .copied()
            .unwrap_or_default();
        format!("{name} {}", self.first.year())
    }

    /// Blank cells before day 1 (the weekday of day 1, Sunday-based).
    #[must_use]
    pub fn leading_blanks(&self) -> usize {
        usize::from(self.first.weekday().to_sunday_zero_offset().unsigned_abs())
    }

    /// Days in the month shown.
    #[must_use]
    pub fn days_in_month(&self) -> i8 {
        self.first.days_in_month()
    }

    /// Grid cells in render order: `None` padding, then `Some(day)`.
    #[must_use]
    pub fn cells(&self) -> Vec<Option<i8>> {
        let mut cells = vec![None; self.leading_blanks()];
        cells.extend((1..=self.days_in_month()).map(Some));
        cells
    }

    /// The date of a day cell, or `None` outside the month.
    #[must_use]
    pub fn date(&self, day: i8) -> Option<Date> {
        (day >= 1 && day <= self.days_in_month())
            .then(|| Date::new(self.first.year(), self.first.month(), day).ok())
            .flatten()
    }

    /// The previous month's grid, saturating at the calendar's lower bound.
    #[must_use]
    pub fn prev(&self) -> Self {
        match self.first.checked_sub(1.month()) {
            Ok(first) => Self { first },
            Err(_) => *self,
        }
    }

    /// The next month's grid, saturating at the calendar's upper bound.
    #[must_use]
    pub fn next(&self) -> Self {
        match self.first.checked_add(1.month()) {
            Ok(first) => Self { first },
            Err(_) => *self,
        }
    }
}
