use log::{info, warn};
use web_sys::window;

use crate::config::DEMO_ANCHOR;
use crate::content::{Contact, Phone};

/// A fire-and-forget navigation away from the page state.
#[derive(Clone, Debug, PartialEq)]
pub enum Outbound {
    Anchor(&'static str),
    Mail { to: String, subject: String },
    Chat { number: String, text: String },
    Dial(String),
}

impl Outbound {
    pub fn demo() -> Self {
        Outbound::Anchor(DEMO_ANCHOR)
    }

    pub fn demo_request(contact: &Contact) -> Self {
        Outbound::Mail {
            to: contact.demo_mailbox.clone(),
            subject: contact.demo_subject.clone(),
        }
    }

    pub fn chat(contact: &Contact) -> Self {
        Outbound::Chat {
            number: contact.whatsapp.number.clone(),
            text: contact.whatsapp.message.clone(),
        }
    }

    pub fn dial(phone: &Phone) -> Self {
        Outbound::Dial(phone.dial.clone())
    }

    pub fn href(&self) -> String {
        match self {
            Outbound::Anchor(anchor) => format!("#{}", anchor),
            Outbound::Mail { to, subject } => {
                format!("mailto:{}?subject={}", to, urlencoding::encode(subject))
            }
            Outbound::Chat { number, text } => {
                let digits: String = number.chars().filter(|c| c.is_ascii_digit()).collect();
                format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text))
            }
            Outbound::Dial(number) => {
                let number: String = number.chars().filter(|c| !c.is_whitespace()).collect();
                format!("tel:{}", number)
            }
        }
    }

    pub fn opens_new_tab(&self) -> bool {
        matches!(self, Outbound::Chat { .. })
    }

    pub fn follow(&self) {
        let href = self.href();
        info!("Following outbound link {}", href);
        if let Some(window) = window() {
            let result = if self.opens_new_tab() {
                window
                    .open_with_url_and_target_and_features(&href, "_blank", "noopener,noreferrer")
                    .map(|_| ())
            } else {
                window.location().set_href(&href)
            };
            if let Err(err) = result {
                warn!("Failed to open {}: {:?}", href, err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WhatsApp;

    fn contact() -> Contact {
        Contact {
            demo_mailbox: "contact@yourdomain.com".to_string(),
            demo_subject: "Demo Request".to_string(),
            email: "sales@example.com".to_string(),
            phones: vec![Phone {
                display: "+92 300 1234567".to_string(),
                dial: "+92 317 0218290".to_string(),
            }],
            whatsapp: WhatsApp {
                label: "WhatsApp Chat".to_string(),
                number: "+92 317-0218290".to_string(),
                message: "Hello! I'm interested & ready.".to_string(),
            },
        }
    }

    #[test]
    fn demo_button_targets_the_in_page_anchor() {
        assert_eq!(Outbound::demo().href(), "#demo");
        assert!(!Outbound::demo().opens_new_tab());
    }

    #[test]
    fn demo_request_prefills_the_subject() {
        assert_eq!(
            Outbound::demo_request(&contact()).href(),
            "mailto:contact@yourdomain.com?subject=Demo%20Request"
        );
    }

    #[test]
    fn chat_link_encodes_the_message_and_opens_a_new_tab() {
        let chat = Outbound::chat(&contact());
        let href = chat.href();
        let (base, text) = href.split_once("?text=").unwrap();
        assert_eq!(base, "https://wa.me/923170218290");
        assert!(!text.contains(' ') && !text.contains('&'));
        assert_eq!(urlencoding::decode(text).unwrap(), "Hello! I'm interested & ready.");
        assert!(chat.opens_new_tab());
    }

    #[test]
    fn dial_link_strips_spacing() {
        let contact = contact();
        assert_eq!(Outbound::dial(&contact.phones[0]).href(), "tel:+923170218290");
    }
}
