//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Colour of the price history line
    pub price_line_color: Color32,
    /// Width of the price history line
    pub price_line_width: f32,
    /// Height of the chart inside the detail window
    pub chart_height: f32,
    /// Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_y_padding_pct: f64,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_text_neutral: Color32, // Main values (white)
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,

    // UI WIDGET STYLES
    pub color_widget_background: Color32, // Dark background for cards
    pub color_widget_border: Color32,     // Subtle border
    pub color_widget_border_hover: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    price_line_color: Color32::from_rgb(255, 215, 0), // Gold
    price_line_width: 2.0,
    chart_height: 400.0,
    plot_y_padding_pct: 0.05,

    // SEMANTICS
    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),

    color_text_primary: Color32::WHITE,
    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,

    // UI WIDGETS
    color_widget_background: Color32::from_black_alpha(40),
    color_widget_border: Color32::from_gray(60),
    color_widget_border_hover: Color32::from_gray(160),
};
