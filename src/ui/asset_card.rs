use eframe::egui::{Align, CursorIcon, Layout, RichText, Sense, Ui};

use crate::config::PLOT_CONFIG;
use crate::domain::Asset;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::{format_number, format_price};

/// What the user asked for by interacting with a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardAction {
    Select,
}

/// One asset's summary: name, symbol, rank, price, 24h change, market cap and volume.
/// The whole card is clickable.
pub(crate) fn render_asset_card(ui: &mut Ui, asset: &Asset) -> Option<CardAction> {
    let id = ui.make_persistent_id(("asset_card", &asset.id));
    let hovered = ui
        .ctx()
        .read_response(id)
        .is_some_and(|r| r.hovered());
    let border = if hovered {
        PLOT_CONFIG.color_widget_border_hover
    } else {
        PLOT_CONFIG.color_widget_border
    };

    let frame = UI_CONFIG.card_frame(border).show(ui, |ui| {
        ui.set_width(UI_CONFIG.card.width);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(&asset.name)
                        .size(20.0)
                        .strong()
                        .color(PLOT_CONFIG.color_text_primary),
                );
                ui.label_subdued(&asset.symbol);
            });
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                ui.label(RichText::new(asset.rank_label()).monospace().size(16.0));
            });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.stat(&UI_TEXT.label_price, &format_price(&asset.price_usd), 18.0);
            ui.with_layout(Layout::right_to_left(Align::Max), |ui| {
                ui.change_badge(&asset.change_percent_24h, 14.0);
            });
        });

        ui.add_space(8.0);
        ui.columns(2, |cols| {
            cols[0].stat(
                &UI_TEXT.label_market_cap,
                &format!("${}", format_number(&asset.market_cap_usd)),
                14.0,
            );
            cols[1].stat(
                &UI_TEXT.label_volume_24h,
                &format!("${}", format_number(&asset.volume_usd_24h)),
                14.0,
            );
        });
    });

    let response = ui
        .interact(frame.response.rect, id, Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand);

    response.clicked().then_some(CardAction::Select)
}
