use {
    anyhow::{Context as _, Result},
    eframe::{
        Frame,
        egui::{Context, Key, Visuals},
    },
    std::{mem, sync::Arc},
};

use crate::{
    Cli,
    app::{AppState, PhaseView},
    config::DF,
    data::{CoinCapProvider, MarketDataProvider},
    engine::{DashboardEngine, RepaintSignal, Selection},
    ui::{UI_CONFIG, render_fetch_failed, render_loading},
};

pub struct App {
    pub(crate) engine: DashboardEngine,
    pub(crate) selection: Selection,
    state: AppState,
}

impl App {
    /// Starts the refresh schedule. Must run inside the tokio runtime entered by `main`.
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        let provider = CoinCapProvider::new(&args.api_base_url)
            .with_context(|| format!("Cannot use API base URL '{}'", args.api_base_url))?;

        let ctx = cc.egui_ctx.clone();
        let repaint: RepaintSignal = Arc::new(move || ctx.request_repaint());

        log::info!("Polling {} for assets", args.api_base_url);

        Ok(Self::with_provider(Arc::new(provider), repaint))
    }

    pub(crate) fn with_provider(
        provider: Arc<dyn MarketDataProvider>,
        repaint: RepaintSignal,
    ) -> Self {
        Self {
            engine: DashboardEngine::start(provider, repaint),
            selection: Selection::default(),
            state: AppState::default(),
        }
    }

    pub(crate) fn select_asset(&mut self, asset_id: &str) {
        match self.engine.board.find(asset_id) {
            Some(asset) => self.selection.select(asset, self.engine.provider()),
            None => log::warn!("Clicked asset {} is no longer in the list", asset_id),
        }
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            // Typing in the search box must not close the detail view.
            return;
        }

        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.selection.close();
        }
    }

    pub(crate) fn tick_loading_state(&mut self, ctx: &Context) -> AppState {
        self.render_top_panel(ctx);
        render_loading(ctx);
        AppState::for_status(self.engine.board.status())
    }

    pub(crate) fn tick_failed_state(&mut self, ctx: &Context) -> AppState {
        render_fetch_failed(ctx);
        AppState::for_status(self.engine.board.status())
    }

    pub(crate) fn tick_running_state(&mut self, ctx: &Context) -> AppState {
        self.handle_global_shortcuts(ctx);

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        self.render_detail_window(ctx);

        AppState::for_status(self.engine.board.status())
    }

    /// Pulls refresh outcomes into the board and keeps the detail snapshot current.
    fn sync_feed(&mut self) {
        if self.engine.update() {
            self.selection.sync_snapshot(self.engine.board.assets());
        }

        // A status change takes effect this frame rather than one frame late.
        let next = AppState::for_status(self.engine.board.status());
        if next.name() != self.state.name() {
            if DF.log_refresh_ticks {
                log::info!("Screen {} -> {}", self.state.name(), next.name());
            }
            self.state = next;
        }
    }

    fn run_frame(&mut self, ctx: &Context) {
        apply_dashboard_theme(ctx);
        self.sync_feed();

        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Loading(mut s) => s.tick(self, ctx),
            AppState::Failed(mut s) => s.tick(self, ctx),
            AppState::Running(mut s) => s.tick(self, ctx),
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.run_frame(ctx);
    }
}

fn apply_dashboard_theme(ctx: &Context) {
    let colors = UI_CONFIG.colors;
    let mut visuals = Visuals::dark();
    visuals.window_fill = colors.card_fill;
    visuals.panel_fill = colors.chrome;
    visuals.extreme_bg_color = colors.grid_background;
    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
    ] {
        widget.fg_stroke.color = colors.text;
    }
    for widget in [&mut visuals.widgets.hovered, &mut visuals.widgets.active] {
        widget.fg_stroke.color = colors.title;
    }
    ctx.set_visuals(visuals);
    // Cards are clicked as a whole; label text selection would steal the click.
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::{MockProvider, noop_repaint, settle};
    use eframe::egui::{Id, RawInput, containers::panel::PanelState};
    use std::time::Duration;

    fn filter_bar_shown(ctx: &Context) -> bool {
        PanelState::load(ctx, Id::new("filter_bar")).is_some()
    }

    #[tokio::test(start_paused = true)]
    async fn filter_bar_stays_visible_while_loading() {
        let provider = Arc::new(
            MockProvider::with_assets(&["bitcoin"]).with_asset_delay(Duration::from_secs(5)),
        );
        let mut app = App::with_provider(provider, noop_repaint());
        let ctx = Context::default();

        let _ = ctx.run(RawInput::default(), |ctx| app.run_frame(ctx));
        assert_eq!(app.state.name(), "Loading");
        assert!(filter_bar_shown(&ctx));
    }

    #[tokio::test(start_paused = true)]
    async fn first_list_moves_to_running() {
        let provider = Arc::new(MockProvider::with_assets(&["bitcoin"]));
        let mut app = App::with_provider(provider, noop_repaint());
        let ctx = Context::default();

        let _ = ctx.run(RawInput::default(), |ctx| app.run_frame(ctx));
        settle().await;
        let _ = ctx.run(RawInput::default(), |ctx| app.run_frame(ctx));

        assert_eq!(app.state.name(), "Running");
        assert!(filter_bar_shown(&ctx));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_list_replaces_the_dashboard() {
        let mut app = App::with_provider(Arc::new(MockProvider::failing()), noop_repaint());
        let ctx = Context::default();

        settle().await;
        let _ = ctx.run(RawInput::default(), |ctx| app.run_frame(ctx));

        assert_eq!(app.state.name(), "Failed");
        assert!(!filter_bar_shown(&ctx));
    }
}
