// SPDX-FileCopyrightText: 2025-2026 Anauê Jungle Chalés <contato@anauechales.com.br>
//
// SPDX-License-Identifier: Apache-2.0

/// The property's WhatsApp number in international format.
const PROPERTY_NUMBER: &str = "559294197052";

/// Canned inquiry for dates the calendar does not show.
pub const OTHER_DATES_INQUIRY: &str =
    "Olá! Gostaria de verificar a disponibilidade para outras datas.";

/// Deep link that opens WhatsApp with `text` pre-filled.
#[must_use]
pub fn whatsapp_link(text: &str) -> String {
    format!(
        "https://wa.me/{PROPERTY_NUMBER}?text={}",
        urlencoding::encode(text)
    )
}

/// Plain chat link without a pre-filled message ("Conversar Agora").
#[must_use]
pub fn chat_link() -> String {
    format!("https://wa.me/{PROPERTY_NUMBER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_url_encodes_the_text() {
        let link = whatsapp_link("Olá! Reserva para 2024-01-20, 2024-01-22");
        assert!(link.starts_with("https://wa.me/559294197052?text="));
        assert!(link.contains("Ol%C3%A1%21%20Reserva"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn chat_link_has_no_text_parameter() {
        assert_eq!(chat_link(), "https://wa.me/559294197052");
    }
}
