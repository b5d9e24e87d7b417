// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

/// Placeholder for optional fields the visitor left blank.
const NOT_INFORMED: &str = "Não informado";

/// Placeholder for an empty free-text message.
const NO_MESSAGE: &str = "Nenhuma mensagem adicional";

/// The contact form as the visitor filled it in.
///
/// Per-session state: it lives while the form is visible and is destroyed on
/// submission, when [`InquiryForm::into_message`] converts it into the
/// outbound WhatsApp text. Name and phone are the only required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct InquiryForm {
    /// Visitor's full name (required).
    pub name: String,

    /// Contact email.
    #[serde(default)]
    pub email: String,

    /// Contact phone (required).
    pub phone: String,

    /// Desired check-in day.
    #[serde(default)]
    pub check_in: Option<Date>,

    /// Desired checkout day.
    #[serde(default)]
    pub check_out: Option<Date>,

    /// Guest count choice as the form offers it ("1" through "6+").
    #[serde(default)]
    pub guests: String,

    /// Free-text message.
    #[serde(default)]
    pub message: String,
}

impl InquiryForm {
    /// Whether the two required fields are filled. The submit action stays
    /// disabled until this holds; there is no recoverable validation error.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }

    /// Consumes the form and renders the reservation-request message, or
    /// `None` while a required field is missing.
    ///
    /// Optional fields the visitor skipped render the literal
    /// `"Não informado"`; a blank free-text message renders
    /// `"Nenhuma mensagem adicional"`. Dates render in pt-BR day-first
    /// order.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        if !self.is_submittable() {
            return None;
        }

        Some(format!(
            "🏠 *Nova Solicitação de Reserva - Anauê Jungle Chalés*\n\
             \n\
             👤 *Nome:* {name}\n\
             📧 *Email:* {email}\n\
             📱 *Telefone:* {phone}\n\
             \n\
             📅 *Check-in:* {check_in}\n\
             📅 *Check-out:* {check_out}\n\
             👥 *Hóspedes:* {guests}\n\
             \n\
             💬 *Mensagem:*\n\
             {message}\n\
             \n\
             ---\n\
             Enviado através do site oficial",
            name = self.name,
            email = filled_or(&self.email, NOT_INFORMED),
            phone = self.phone,
            check_in = date_or_placeholder(self.check_in),
            check_out = date_or_placeholder(self.check_out),
            guests = filled_or(&self.guests, NOT_INFORMED),
            message = filled_or(&self.message, NO_MESSAGE),
        ))
    }
}

fn filled_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Formats a date the way pt-BR readers expect (`17/01/2024`).
fn date_or_placeholder(date: Option<Date>) -> String {
    match date {
        Some(d) => d.strftime("%d/%m/%Y").to_string(),
        None => NOT_INFORMED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn required_fields_gate_submission() {
        let mut form = InquiryForm {
            name: "Maria Silva".to_string(),
            ..InquiryForm::default()
        };
        assert!(!form.is_submittable());

        form.phone = "(92) 99999-9999".to_string();
        assert!(form.is_submittable());
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let form = InquiryForm {
            name: "   ".to_string(),
            phone: "(92) 99999-9999".to_string(),
            ..InquiryForm::default()
        };
        assert!(!form.is_submittable());
    }

    #[test]
    fn minimal_form_renders_placeholders_everywhere() {
        let form = InquiryForm {
            name: "Maria Silva".to_string(),
            phone: "(92) 99999-9999".to_string(),
            ..InquiryForm::default()
        };

        let message = form.into_message().unwrap();
        assert!(message.contains("👤 *Nome:* Maria Silva"));
        assert!(message.contains("📱 *Telefone:* (92) 99999-9999"));
        assert!(message.contains("📧 *Email:* Não informado"));
        assert!(message.contains("📅 *Check-in:* Não informado"));
        assert!(message.contains("📅 *Check-out:* Não informado"));
        assert!(message.contains("👥 *Hóspedes:* Não informado"));
        assert!(message.contains("💬 *Mensagem:*\nNenhuma mensagem adicional"));
    }

    #[test]
    fn full_form_renders_pt_br_dates() {
        let form = InquiryForm {
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            phone: "(92) 99999-9999".to_string(),
            check_in: Some(date(2024, 1, 17)),
            check_out: Some(date(2024, 1, 19)),
            guests: "2".to_string(),
            message: "Chegaremos à noite.".to_string(),
        };

        let message = form.into_message().unwrap();
        assert!(message.contains("📅 *Check-in:* 17/01/2024"));
        assert!(message.contains("📅 *Check-out:* 19/01/2024"));
        assert!(message.contains("👥 *Hóspedes:* 2"));
        assert!(message.contains("💬 *Mensagem:*\nChegaremos à noite."));
        assert!(message.ends_with("---\nEnviado através do site oficial"));
    }

    #[test]
    fn unsubmittable_form_yields_no_message() {
        assert_eq!(InquiryForm::default().into_message(), None);
    }
}
