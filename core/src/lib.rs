// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

//! Domain model for the Anauê Jungle Chalés booking-inquiry site.
//!
//! Everything here is plain data and pure functions: the availability map
//! derived from feed events, the visitor's date selection, the contact form,
//! the month grid the calendar view renders, and the WhatsApp messages the
//! whole flow funnels into. Nothing is persisted; each value lives for one
//! fetch cycle or one browser session.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod availability;
mod inquiry;
mod month;
mod selection;
mod whatsapp;

pub use crate::availability::{Availability, DayStatus};
pub use crate::inquiry::InquiryForm;
pub use crate::month::MonthGrid;
pub use crate::selection::{Selection, Toggle};
pub use crate::whatsapp::{OTHER_DATES_INQUIRY, chat_link, whatsapp_link};
