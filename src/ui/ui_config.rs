use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// Dashboard palette. Values and deltas take their colours from `PLOT_CONFIG`.
#[derive(Clone, Copy, Default)]
pub struct DashboardColors {
    pub text: Color32,
    pub title: Color32,
    pub caption: Color32,
    /// Filter bar and status bar background.
    pub chrome: Color32,
    pub grid_background: Color32,
    pub card_fill: Color32,
}

#[derive(Clone, Copy, Default)]
pub struct CardLayout {
    pub width: f32,
    pub spacing: f32,
    pub corner_radius: u8,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: DashboardColors,
    pub card: CardLayout,
    pub detail_window_width: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: DashboardColors {
        text: Color32::GRAY,
        title: Color32::YELLOW,
        caption: Color32::ORANGE,
        chrome: Color32::from_rgb(22, 22, 26),
        grid_background: Color32::from_rgb(30, 30, 36),
        card_fill: Color32::from_rgb(40, 40, 48),
    },
    card: CardLayout {
        width: 300.0,
        spacing: 12.0,
        corner_radius: 8,
    },
    detail_window_width: 820.0,
};

impl UiConfig {
    fn chrome_frame(&self, margin: Margin) -> Frame {
        Frame {
            fill: self.colors.chrome,
            inner_margin: margin,
            ..Default::default()
        }
    }

    /// Title and filter controls.
    pub fn filter_bar_frame(&self) -> Frame {
        self.chrome_frame(Margin::symmetric(12, 10))
    }

    pub fn status_bar_frame(&self) -> Frame {
        self.chrome_frame(Margin::symmetric(12, 4))
    }

    pub fn card_grid_frame(&self) -> Frame {
        Frame {
            fill: self.colors.grid_background,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Border colour changes on hover, so the caller picks it.
    pub fn card_frame(&self, border: Color32) -> Frame {
        Frame {
            fill: self.colors.card_fill,
            stroke: Stroke::new(1.5, border),
            corner_radius: CornerRadius::same(self.card.corner_radius),
            inner_margin: Margin::same(14),
            ..Default::default()
        }
    }
}
