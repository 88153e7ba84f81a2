use iced::widget::{column, container, horizontal_rule, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use super::{bold, card, grid, header, Context, AMBER, AMBER_DARK, MUTED};
use crate::state::data::Collection;
use crate::Message;

/// Collection view. A combined collection renders each member as its own section.
pub fn view(ctx: Context<'_>) -> Element<'_, Message> {
    let Some(collection) = ctx.nav.collection().and_then(|key| ctx.catalog.collection(key)) else {
        return column![header(ctx, Some("Back to Collections"))].into();
    };

    let mut content = Column::new()
        .push(text(collection.name.as_str()).size(40).font(bold()).color(AMBER_DARK))
        .push(text(collection.description.as_str()).size(17).color(AMBER))
        .spacing(20)
        .padding(32)
        .align_x(Alignment::Center);

    let sections = ctx.catalog.sections(&collection.key);
    if collection.is_combined() {
        for (i, member) in sections.into_iter().enumerate() {
            if i > 0 {
                content = content.push(horizontal_rule(1));
            }
            content = content
                .push(text(member.name.as_str()).size(28).font(bold()).color(AMBER_DARK))
                .push(text(member.description.as_str()).color(AMBER))
                .push(metadata(member))
                .push(rug_grid(ctx, member));
        }
    } else {
        content = content.push(metadata(collection)).push(rug_grid(ctx, collection));
    }

    column![
        header(ctx, Some("Back to Collections")),
        scrollable(container(content).width(Length::Fill).center_x(Length::Fill)),
    ]
    .into()
}

fn metadata(collection: &Collection) -> Element<'_, Message> {
    row![
        text("Material:").font(bold()).color(MUTED),
        text(collection.material.as_str()).color(MUTED),
        text("Origin:").font(bold()).color(MUTED),
        text(collection.origin.as_str()).color(MUTED),
        text("Size:").font(bold()).color(MUTED),
        text(collection.size.as_str()).color(MUTED),
    ]
    .spacing(8)
    .into()
}

fn rug_grid<'a>(ctx: Context<'a>, collection: &'a Collection) -> Element<'a, Message> {
    if collection.items.is_empty() {
        return text("New pieces are arriving soon.").color(MUTED).into();
    }

    let cards = collection
        .items
        .iter()
        .map(|rug| {
            card(
                ctx.images,
                rug.images.first(),
                &rug.name,
                vec![
                    format!("{} · {}", rug.material, rug.origin),
                    format!("Product: {}", rug.product_code),
                ],
                Message::OpenCollectionRug {
                    collection: collection.key.clone(),
                    rug: rug.id.clone(),
                },
            )
        })
        .collect();

    grid(cards)
}
