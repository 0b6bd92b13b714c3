use eframe::egui::{
    Align, Align2, Context, CursorIcon, Grid, Id, Layout, RichText, Ui, Vec2, Window,
};
use egui_plot::{Line, Plot, PlotPoints};

use crate::config::PLOT_CONFIG;
use crate::domain::{Asset, AssetHistoryPoint};
use crate::engine::SelectedAsset;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::{
    epoch_ms_to_date_string, epoch_ms_to_datetime_string, format_number, format_price,
    format_price_value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DetailAction {
    Close,
}

/// Modal-style window with the selected asset's expanded stats and price chart.
pub(crate) fn render_asset_detail(ctx: &Context, selected: &SelectedAsset) -> Option<DetailAction> {
    let asset = &selected.asset;
    let mut open = true;
    let mut close_clicked = false;

    Window::new(RichText::new(&asset.name).strong())
        .id(Id::new("asset_detail_window"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(UI_CONFIG.detail_window_width)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            close_clicked = render_header(ui, asset);
            ui.separator();
            render_stats(ui, asset);
            ui.add_space(12.0);

            match selected.history.points() {
                Some(points) => render_price_chart(ui, &asset.id, points),
                None => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(PLOT_CONFIG.chart_height / 2.0);
                        ui.spinner();
                        ui.label_subdued(&UI_TEXT.chart_loading);
                        ui.add_space(PLOT_CONFIG.chart_height / 2.0);
                    });
                }
            }
        });

    (!open || close_clicked).then_some(DetailAction::Close)
}

// Returns true when the close button was clicked.
fn render_header(ui: &mut Ui, asset: &Asset) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(RichText::new(&asset.name).size(26.0).strong());
            ui.label_subheader(&asset.symbol);
        });
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            clicked = ui
                .button(&UI_TEXT.icon_close)
                .on_hover_text(&UI_TEXT.hover_close)
                .on_hover_cursor(CursorIcon::PointingHand)
                .clicked();
            ui.label(RichText::new(asset.rank_label()).monospace().size(18.0));
        });
    });
    clicked
}

fn render_stats(ui: &mut Ui, asset: &Asset) {
    ui.columns(2, |cols| {
        cols[0].stat(
            &UI_TEXT.label_current_price,
            &format_price(&asset.price_usd),
            26.0,
        );
        cols[0].change_badge(&asset.change_percent_24h, 18.0);

        Grid::new("asset_detail_stats")
            .num_columns(2)
            .spacing([24.0, 12.0])
            .show(&mut cols[1], |ui| {
                ui.stat(
                    &UI_TEXT.label_market_cap,
                    &format!("${}", format_number(&asset.market_cap_usd)),
                    16.0,
                );
                ui.stat(
                    &UI_TEXT.label_volume_24h,
                    &format!("${}", format_number(&asset.volume_usd_24h)),
                    16.0,
                );
                ui.end_row();

                ui.stat(
                    &UI_TEXT.label_supply,
                    &format!("{} {}", format_number(&asset.supply), asset.symbol),
                    16.0,
                );
                if let Some(max_supply) = &asset.max_supply {
                    ui.stat(
                        &UI_TEXT.label_max_supply,
                        &format!("{} {}", format_number(max_supply), asset.symbol),
                        16.0,
                    );
                }
                ui.end_row();

                ui.stat(&UI_TEXT.label_vwap_24h, &format_price(&asset.vwap_24h), 16.0);
                ui.end_row();
            });
    });
}

/// Line chart of price over time. An empty series draws an empty plot.
fn render_price_chart(ui: &mut Ui, asset_id: &str, points: &[AssetHistoryPoint]) {
    let series: Vec<[f64; 2]> = points.iter().filter_map(|p| p.plot_point()).collect();

    Plot::new(("price_history", asset_id))
        .height(PLOT_CONFIG.chart_height)
        .allow_scroll(false)
        .set_margin_fraction(Vec2::new(0.0, PLOT_CONFIG.plot_y_padding_pct as f32))
        .x_axis_formatter(|mark, _range| epoch_ms_to_date_string(mark.value as i64))
        .y_axis_formatter(|mark, _range| format_price_value(mark.value))
        .label_formatter(|_name, value| {
            format!(
                "{}\n{}",
                epoch_ms_to_datetime_string(value.x as i64),
                format_price_value(value.y)
            )
        })
        .show(ui, |plot_ui| {
            if !series.is_empty() {
                plot_ui.line(
                    Line::new(UI_TEXT.chart_series.as_str(), PlotPoints::new(series))
                        .color(PLOT_CONFIG.price_line_color)
                        .width(PLOT_CONFIG.price_line_width),
                );
            }
        });
}
