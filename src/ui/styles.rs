use {
    crate::{
        config::PLOT_CONFIG,
        ui::{UI_CONFIG, UI_TEXT},
        utils::{ChangeDirection, format_change},
    },
    eframe::egui::{Color32, RichText, Ui},
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.caption)
}

pub trait DirectionColor {
    fn color(&self) -> Color32;
    fn icon(&self) -> &str;
}

impl DirectionColor for ChangeDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => PLOT_CONFIG.color_profit,
            Self::Down => PLOT_CONFIG.color_loss,
        }
    }

    fn icon(&self) -> &str {
        match self {
            Self::Up => &UI_TEXT.icon_trend_up,
            Self::Down => &UI_TEXT.icon_trend_down,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_subheader(&mut self, text: impl Into<String>);
    /// Small caption above a large monospace value.
    fn stat(&mut self, label: &str, value: &str, size: f32);
    /// Arrow plus absolute 24h change, coloured by direction.
    fn change_badge(&mut self, raw_change: &str, size: f32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn stat(&mut self, label: &str, value: &str, size: f32) {
        self.vertical(|ui| {
            ui.label_subdued(label);
            ui.label(
                RichText::new(value)
                    .monospace()
                    .strong()
                    .size(size)
                    .color(PLOT_CONFIG.color_text_primary),
            );
        });
    }

    fn change_badge(&mut self, raw_change: &str, size: f32) {
        let (text, direction) = format_change(raw_change);
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label(RichText::new(direction.icon()).size(size).color(direction.color()));
            ui.label(
                RichText::new(text)
                    .strong()
                    .size(size)
                    .color(direction.color()),
            );
        });
    }
}
