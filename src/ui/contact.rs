use iced::widget::{button, center, column, container, mouse_area, opaque, stack, text};
use iced::{Color, Element, Length};

use super::{bold, AMBER, AMBER_DARK, MUTED};
use crate::state::data::RugDetails;
use crate::Message;

/// Overlay `content` on a dimmed `base`; clicking the backdrop closes it
pub fn modal<'a>(base: Element<'a, Message>, content: Element<'a, Message>) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.6,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(Message::HideContact)
        )
    ]
    .into()
}

/// Contact dialog for the selected rug (or a general enquiry)
pub fn dialog<'a>(details: Option<&RugDetails<'a>>, messaging_link: String, phone_link: String) -> Element<'a, Message> {
    let subject: Element<'a, Message> = match details {
        Some(rug) => column![
            text(rug.name).size(20).font(bold()).color(AMBER_DARK),
            text(format!("Product Number: {}", rug.product_code)).color(AMBER),
        ]
        .spacing(4)
        .into(),
        None => text("We'd love to hear from you.").size(20).font(bold()).color(AMBER_DARK).into(),
    };

    let phone_label = format!("Call {}", phone_link.trim_start_matches("tel:"));

    container(
        column![
            subject,
            text("Send us a message with the details of this piece, or give us a call.").color(MUTED),
            button(text("Message on WhatsApp").font(bold()))
                .on_press(Message::OpenLink(messaging_link))
                .padding(12)
                .width(Length::Fill)
                .style(button::success),
            button(text(phone_label))
                .on_press(Message::OpenLink(phone_link))
                .padding(12)
                .width(Length::Fill)
                .style(button::primary),
            button(text("Close"))
                .on_press(Message::HideContact)
                .style(button::text),
        ]
        .spacing(14),
    )
    .width(Length::Fixed(420.0))
    .padding(24)
    .style(container::rounded_box)
    .into()
}
