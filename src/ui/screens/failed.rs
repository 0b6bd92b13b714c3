use {
    crate::{
        config::PLOT_CONFIG,
        ui::{UI_TEXT, ui_text::warning_banner},
    },
    eframe::egui::{CentralPanel, Context, Frame, Margin, RichText, Stroke},
};

/// Replaces the whole dashboard while the latest list refresh is failing.
pub(crate) fn render_fetch_failed(ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            Frame {
                fill: PLOT_CONFIG.color_widget_background,
                stroke: Stroke::new(4.0, PLOT_CONFIG.color_loss),
                inner_margin: Margin::same(32),
                ..Default::default()
            }
            .show(ui, |ui| {
                ui.label(
                    RichText::new(warning_banner(&UI_TEXT.error_fetch_failed))
                        .size(20.0)
                        .strong()
                        .color(PLOT_CONFIG.color_loss),
                );
            });
        });
    });
}
