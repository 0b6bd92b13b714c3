use eframe::egui::{Align, CentralPanel, Context, Layout, RichText, ScrollArea, TopBottomPanel};

use crate::{
    App,
    config::{COINCAP, PLOT_CONFIG},
    ui::{
        CardAction, DetailAction, UI_CONFIG, UI_TEXT, UiStyleExt, render_asset_card,
        render_asset_detail, render_filter_bar,
    },
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.filter_bar_frame();
        TopBottomPanel::top("filter_bar").frame(frame).show(ctx, |ui| {
            ui.heading(
                RichText::new(&UI_TEXT.app_title)
                    .strong()
                    .color(UI_CONFIG.colors.title),
            );
            ui.add_space(4.0);
            let edits = render_filter_bar(ui, self.engine.board.filters());
            for edit in edits {
                self.engine.board.set_filter(edit.field, edit.value);
            }
        });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.status_bar_frame();
        TopBottomPanel::bottom("status_panel").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                let board = &self.engine.board;
                ui.label_subdued(format!(
                    "{} {} / {}",
                    UI_TEXT.sp_showing,
                    board.filtered_assets().len(),
                    board.assets().len()
                ));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label_subdued(format!(
                        "{} {}s",
                        UI_TEXT.sp_refresh_every, COINCAP.refresh.interval_secs
                    ));
                    if let Some(updated) = board.last_updated() {
                        ui.label_subdued(format!("{} {}", UI_TEXT.sp_updated, updated));
                    }
                });
            });
        });
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.card_grid_frame();
        let mut clicked: Option<String> = None;

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let shown = self.engine.board.filtered_assets();
            if shown.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        RichText::new(&UI_TEXT.label_no_matches)
                            .italics()
                            .color(PLOT_CONFIG.color_text_neutral),
                    );
                });
                return;
            }

            ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
                ui.spacing_mut().item_spacing = [UI_CONFIG.card.spacing; 2].into();
                ui.horizontal_wrapped(|ui| {
                    for asset in shown {
                        if let Some(CardAction::Select) = render_asset_card(ui, asset) {
                            clicked = Some(asset.id.clone());
                        }
                    }
                });
            });
        });

        if let Some(id) = clicked {
            self.select_asset(&id);
        }
    }

    pub(crate) fn render_detail_window(&mut self, ctx: &Context) {
        let Some(selected) = self.selection.current() else {
            return;
        };
        if let Some(DetailAction::Close) = render_asset_detail(ctx, selected) {
            self.selection.close();
        }
    }
}
