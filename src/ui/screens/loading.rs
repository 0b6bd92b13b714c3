use {
    crate::{
        config::PLOT_CONFIG,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

/// Spinner in place of the card grid until the first list arrives.
/// The filter bar is drawn by the caller and stays usable meanwhile.
pub(crate) fn render_loading(ctx: &Context) {
    CentralPanel::default()
        .frame(UI_CONFIG.card_grid_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.spinner();
                ui.add_space(8.0);
                ui.label(
                    RichText::new(&UI_TEXT.ls_loading)
                        .italics()
                        .color(PLOT_CONFIG.color_text_neutral),
                );
            });
        });
}
