//! Views for the three screens plus the pieces they share

pub mod collection;
pub mod contact;
pub mod detail;
pub mod home;
pub mod zoom;

use iced::widget::{button, column, container, horizontal_space, image, row, text, Column, Space};
use iced::{Alignment, Color, ContentFit, Element, Font, Length};
use iced_aw::Wrap;

use crate::config::ContactSettings;
use crate::media::{ImageStore, Resolved};
use crate::state::catalog::Catalog;
use crate::state::contact::{messaging_link, phone_link};
use crate::state::navigator::NavigationState;
use crate::Message;

/// Everything a screen reads while rendering
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub catalog: &'a Catalog,
    pub nav: &'a NavigationState,
    pub images: &'a ImageStore,
    pub contact: &'a ContactSettings,
}

pub const BRAND: &str = "Aladdin's Ride";

/// Amber accents used for titles
pub const AMBER_DARK: Color = Color { r: 0.47, g: 0.21, b: 0.06, a: 1.0 };
pub const AMBER: Color = Color { r: 0.71, g: 0.33, b: 0.04, a: 1.0 };
pub const MUTED: Color = Color { r: 0.42, g: 0.42, b: 0.45, a: 1.0 };

const CARD_WIDTH: f32 = 240.0;
const CARD_IMAGE_HEIGHT: f32 = 190.0;

pub fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    }
}

/// Top bar: optional back button, brand, contact menu
pub fn header<'a>(ctx: Context<'a>, back_label: Option<&'a str>) -> Element<'a, Message> {
    let back: Element<'a, Message> = match back_label {
        Some(label) => button(text(format!("← {}", label)))
            .on_press(Message::GoBack)
            .style(button::text)
            .into(),
        None => Space::with_width(Length::Fixed(0.0)).into(),
    };

    let brand = button(text(BRAND).size(26).font(bold()).color(AMBER_DARK))
        .on_press(Message::GoHome)
        .style(button::text);

    let mut contact = column![button("Contact Us")
        .on_press(Message::ToggleContactOptions)
        .padding([8, 16])
        .style(button::primary)]
    .spacing(6)
    .align_x(Alignment::End);

    if ctx.nav.contact().options {
        contact = contact.push(
            container(
                column![
                    button("Message us")
                        .on_press(Message::OpenLink(messaging_link(ctx.contact, None)))
                        .style(button::text),
                    button("Call us")
                        .on_press(Message::OpenLink(phone_link(ctx.contact)))
                        .style(button::text),
                ]
                .spacing(4),
            )
            .padding(6)
            .style(container::rounded_box),
        );
    }

    container(
        row![back, horizontal_space(), brand, horizontal_space(), contact]
            .align_y(Alignment::Center)
            .padding([8, 24]),
    )
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}

/// Image for `url` at grid-card tier, or a text stand-in while loading / unavailable
pub fn thumbnail<'a>(images: &'a ImageStore, url: Option<&'a String>, width: f32, height: f32) -> Element<'a, Message> {
    let resolved = url.map_or(Resolved::Unavailable, |u| images.resolve(u));
    match resolved {
        Resolved::Ready(loaded) => image(loaded.thumbnail.clone())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        Resolved::Pending => stand_in("Loading…", width, height),
        Resolved::Unavailable => stand_in("Image unavailable", width, height),
    }
}

pub fn stand_in<'a>(label: &'a str, width: f32, height: f32) -> Element<'a, Message> {
    container(text(label).color(MUTED))
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(container::rounded_box)
        .into()
}

/// Clickable product card used on the home and collection grids
pub fn card<'a>(
    images: &'a ImageStore,
    cover: Option<&'a String>,
    title: &'a str,
    lines: Vec<String>,
    on_press: Message,
) -> Element<'a, Message> {
    let mut body = Column::new()
        .push(thumbnail(images, cover, CARD_WIDTH, CARD_IMAGE_HEIGHT))
        .push(text(title).size(18).font(bold()))
        .spacing(6);
    for line in lines {
        body = body.push(text(line).size(13).color(MUTED));
    }

    button(container(body).padding(10).width(Length::Fixed(CARD_WIDTH + 20.0)))
        .on_press(on_press)
        .padding(0)
        .style(button::secondary)
        .into()
}

/// Cards laid out left to right, wrapping to the window width
pub fn grid<'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    Wrap::with_elements(cards)
        .spacing(18.0)
        .line_spacing(18.0)
        .into()
}

/// "Label: value" line for the detail panel
pub fn spec_row<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).color(MUTED),
        horizontal_space(),
        text(value).font(bold()),
    ]
    .width(Length::Fill)
    .into()
}
