use iced::widget::{button, column, container, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::{bold, card, grid, header, Context, AMBER, AMBER_DARK, MUTED};
use crate::Message;

/// Home view: hero text, size tabs and the cards of the active size
pub fn view(ctx: Context<'_>) -> Element<'_, Message> {
    let active = ctx.nav.active_category();

    let tabs: Vec<Element<'_, Message>> = ctx
        .catalog
        .size_categories()
        .iter()
        .map(|category| {
            let style = if category.id == active {
                button::primary
            } else {
                button::secondary
            };
            button(text(category.name.as_str()).size(14))
                .on_press(Message::SelectCategory(category.id.clone()))
                .padding([8, 16])
                .style(style)
                .into()
        })
        .collect();
    let tabs = Wrap::with_elements(tabs).spacing(10.0).line_spacing(10.0);

    let description = ctx
        .catalog
        .size_category(active)
        .map(|c| c.description.as_str())
        .unwrap_or_default();

    let cards: Vec<Element<'_, Message>> = ctx
        .catalog
        .rugs_in_category(active)
        .map(|rug| {
            card(
                ctx.images,
                rug.images.first(),
                &rug.name,
                vec![
                    rug.size.clone(),
                    format!("{} · {}", rug.material, rug.origin),
                    rug.price.clone().unwrap_or_else(|| format!("Product: {}", rug.product_code)),
                ],
                Message::ActivateRug(rug.id.clone()),
            )
        })
        .collect();

    let listing: Element<'_, Message> = if cards.is_empty() {
        text("Choose a size above to browse its collections.")
            .color(MUTED)
            .into()
    } else {
        grid(cards)
    };

    let content = column![
        text("Exquisite Handwoven Rugs")
            .size(44)
            .font(bold())
            .color(AMBER_DARK),
        text(
            "Discover our curated collection of premium Persian and Arabian rugs, \
             each piece a masterwork of traditional craftsmanship and timeless elegance."
        )
        .size(17)
        .color(AMBER),
        tabs,
        text(description).color(MUTED),
        listing,
    ]
    .spacing(24)
    .padding(32)
    .align_x(Alignment::Center);

    column![
        header(ctx, None),
        scrollable(container(content).width(Length::Fill).center_x(Length::Fill)),
    ]
    .into()
}
