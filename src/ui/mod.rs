mod asset_card;
mod asset_detail;
mod filter_panel;
mod screens;
mod styles;
mod ui_config;
mod ui_render;
mod ui_text;

pub(crate) use asset_card::{CardAction, render_asset_card};
pub(crate) use asset_detail::{DetailAction, render_asset_detail};
pub(crate) use filter_panel::render_filter_bar;
pub(crate) use screens::{render_fetch_failed, render_loading};
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
