use iced::widget::image::Handle;
use iced::widget::{button, canvas, column, container, image, row, scrollable, stack, text, Column};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::zoom::ZoomSurface;
use super::{bold, header, spec_row, stand_in, thumbnail, Context, AMBER, AMBER_DARK, MUTED};
use crate::media::Resolved;
use crate::state::data::{RugDetails, Selection};
use crate::Message;

const MAIN_IMAGE_SIZE: f32 = 520.0;
const STRIP_SIZE: f32 = 80.0;

/// Detail view: gallery on the left, specifications and quote button on the right
pub fn view<'a>(ctx: Context<'a>, zoomed: Option<&'a Handle>) -> Element<'a, Message> {
    let selection = ctx.nav.selection();
    let Some(details) = selection.and_then(|s| ctx.catalog.details(s)) else {
        return column![header(ctx, Some("Back"))].into();
    };

    let body = row![gallery(ctx, &details, zoomed), info(ctx, selection, &details)]
        .spacing(48)
        .padding(32);

    column![
        header(ctx, Some("Back")),
        scrollable(container(body).width(Length::Fill).center_x(Length::Fill)),
    ]
    .into()
}

fn gallery<'a>(ctx: Context<'a>, details: &RugDetails<'a>, zoomed: Option<&'a Handle>) -> Element<'a, Message> {
    let images = details.images;
    let index = ctx.nav.image_index();
    let zoom = ctx.nav.zoom();

    let main: Element<'a, Message> = match (zoomed, images.get(index).map(|u| ctx.images.resolve(u))) {
        (Some(handle), _) if zoom.enabled => fitted(handle.clone()),
        (_, Some(Resolved::Ready(loaded))) => fitted(loaded.working.clone()),
        (_, Some(Resolved::Unavailable)) | (_, None) => {
            stand_in("Image unavailable", MAIN_IMAGE_SIZE, MAIN_IMAGE_SIZE)
        }
        (_, Some(Resolved::Pending)) => stand_in("Loading…", MAIN_IMAGE_SIZE, MAIN_IMAGE_SIZE),
    };

    let surface = canvas(ZoomSurface { enabled: zoom.enabled })
        .width(Length::Fixed(MAIN_IMAGE_SIZE))
        .height(Length::Fixed(MAIN_IMAGE_SIZE));

    let mut column = Column::new()
        .push(container(stack![main, surface]).style(container::rounded_box))
        .spacing(14)
        .align_x(Alignment::Center);

    if images.len() > 1 {
        column = column.push(
            row![
                button(text("←")).on_press(Message::PrevImage).style(button::secondary),
                text(format!("{} / {}", index + 1, images.len())).color(MUTED),
                button(text("→")).on_press(Message::NextImage).style(button::secondary),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        );

        let strip: Vec<Element<'a, Message>> = images
            .iter()
            .enumerate()
            .map(|(i, url)| {
                let style = if i == index {
                    button::primary
                } else {
                    button::text
                };
                button(thumbnail(ctx.images, Some(url), STRIP_SIZE, STRIP_SIZE))
                    .on_press(Message::SelectImage(i))
                    .padding(2)
                    .style(style)
                    .into()
            })
            .collect();
        column = column.push(Wrap::with_elements(strip).spacing(8.0).line_spacing(8.0));
    }

    column.width(Length::Fixed(MAIN_IMAGE_SIZE)).into()
}

/// Square frame with cover fit; `media::zoom::zoom_window` relies on this
fn fitted<'a>(handle: Handle) -> Element<'a, Message> {
    image(handle)
        .width(Length::Fixed(MAIN_IMAGE_SIZE))
        .height(Length::Fixed(MAIN_IMAGE_SIZE))
        .content_fit(ContentFit::Cover)
        .into()
}

fn info<'a>(ctx: Context<'a>, selection: Option<&'a Selection>, details: &RugDetails<'a>) -> Element<'a, Message> {
    let mut specs = Column::new()
        .push(text("Specifications").size(20).font(bold()))
        .push(spec_row("Material:", details.material.to_string()))
        .push(spec_row("Origin:", details.origin.to_string()))
        .push(spec_row("Size:", details.size.to_string()))
        .spacing(10);
    if let Some(price) = details.price {
        specs = specs.push(spec_row("Price:", price.to_string()));
    }
    if let Some(stock) = details.stock.filter(|s| *s > 0) {
        specs = specs.push(spec_row("Stock:", format!("{} available", stock)));
    }

    let mut info = Column::new()
        .push(text(details.name).size(34).font(bold()).color(AMBER_DARK))
        .push(text(format!("Product Number: {}", details.product_code)).size(17).color(AMBER))
        .push(container(specs).padding(20).width(Length::Fill).style(container::rounded_box))
        .spacing(22)
        .width(Length::Fill);

    if !details.description.is_empty() {
        info = info.push(
            container(
                column![
                    text("Description").size(20).font(bold()),
                    text(details.description).color(MUTED),
                ]
                .spacing(10),
            )
            .padding(20)
            .width(Length::Fill)
            .style(container::rounded_box),
        );
    }

    if let Some(collection) = selection
        .and_then(Selection::origin_collection)
        .and_then(|key| ctx.catalog.collection(key))
    {
        info = info.push(
            button(text(format!("More from {}", collection.name)))
                .on_press(Message::OpenCollection(collection.key.clone()))
                .style(button::text),
        );
    }

    let quote = container(
        column![
            text("Interested in this piece?").size(20).font(bold()).color(AMBER_DARK),
            text("Contact us for pricing, availability, and custom sizing options.").color(AMBER),
            button(
                container(text("Get Quote & Information").font(bold()))
                    .width(Length::Fill)
                    .center_x(Length::Fill)
            )
            .on_press(Message::ShowContact)
            .padding(12)
            .width(Length::Fill)
            .style(button::primary),
        ]
        .spacing(12),
    )
    .padding(20)
    .width(Length::Fill)
    .style(container::bordered_box);

    info.push(quote).into()
}
