//! Desktop window for `rollavg`.
//!
//! Owns the Iced application loop and wires together:
//! - The window averaging engine (refreshed on tick, button press, or feed switch)
//! - The periodic tick subscription (cadence comes from config)
//! - The config file watcher (live reload on change)

use chrono::Local;
use futures::channel::mpsc::Sender;
use iced::{
    widget::{button, column, container, row, text},
    Alignment, Element, Length, Subscription, Task,
};
use rollavg_config::{default_path, load as load_config, AppConfig, ConfigWatcher};
use rollavg_core::{event::Message, state::AppState, WindowEngine};
use rollavg_theme::Theme;
use rollavg_widgets::{AverageWidget, PoolWidget, SelectorWidget, StatusWidget, WindowsWidget};
use std::time::Duration;
use tracing::{info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Start the applet.  Returns when the window is closed.
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .style(App::style)
        .window_size(iced::Size::new(640.0, 420.0))
        .run()
}

// ── State ─────────────────────────────────────────────────────────────────────

struct App {
    state:  AppState,
    engine: WindowEngine,
    config: AppConfig,
    theme:  Theme,
    selector: SelectorWidget,
    windows:  WindowsWidget,
    average:  AverageWidget,
    pool:     PoolWidget,
    status:   StatusWidget,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let config = load_config(default_path()).unwrap_or_else(|e| {
            warn!("Config unusable ({e}); falling back to defaults");
            AppConfig::default()
        });
        let theme = Theme::from_config(&config.theme);

        let mut app = Self {
            state: AppState {
                selected: config.global.startup_category(),
                ..AppState::default()
            },
            engine: WindowEngine::new(config.global.window_size),
            config,
            theme,
            selector: SelectorWidget::new(),
            windows:  WindowsWidget::new(),
            average:  AverageWidget::new(),
            pool:     PoolWidget::new(),
            status:   StatusWidget::new(),
        };

        // Seed the display so the window isn't blank until the first tick.
        app.refresh();

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Sliding Window Average")
    }

    /// Run one ingest with the currently selected feed and update the render
    /// snapshot.  The selection is read here, at call time — a tick that
    /// fires after a feed switch uses the new feed.
    fn refresh(&mut self) {
        let batch = rollavg_feeds::resolve(Some(self.state.selected));
        self.state.report = self.engine.ingest(batch);
        self.state.pool = self.engine.pool().to_vec();
        self.state.last_refresh = Some(Local::now());
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick | Message::RefreshRequested => self.refresh(),
            Message::CategorySelected(category) => {
                info!("feed switched to '{}'", category.code());
                self.state.selected = category;
                self.refresh();
            }
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    if cfg.global.window_size != self.engine.window_size() {
                        warn!(
                            "window_size changed to {}; restart to apply",
                            cfg.global.window_size
                        );
                    }
                    self.theme = Theme::from_config(&cfg.theme);
                    self.config = cfg;
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let gap = self.theme.gap as f32;

        let heading = column![
            text("Sliding Window Average Calculator").size(self.theme.font_size + 6.0),
            text("Qualified feeds: 'p' prime, 'f' fibonacci, 'e' even, 'r' random.")
                .size(self.theme.font_size - 2.0),
        ]
        .spacing(gap / 2.0);

        let selector = self.selector.view(&self.state, &self.theme);

        let mut readout = column![
            self.windows.view(&self.state, &self.theme),
            self.average.view(&self.state, &self.theme),
        ]
        .spacing(gap);

        if self.config.global.show_pool {
            if let Some(pool) = self.pool.view(&self.state, &self.theme) {
                readout = readout.push(pool);
            }
        }

        let controls = row![
            button(text("Fetch new numbers").size(self.theme.font_size))
                .on_press(Message::RefreshRequested),
        ]
        .align_y(Alignment::Center);

        let content = column![
            heading,
            selector,
            readout,
            controls,
            self.status.view(&self.state, &self.theme),
        ]
        .spacing(gap * 2.0)
        .padding(self.theme.padding);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        // Re-derived after every update, so a reloaded interval_ms takes
        // effect without a restart.
        let tick = iced::time::every(Duration::from_millis(self.config.global.interval_ms))
            .map(|_| Message::Tick);

        Subscription::batch([tick, Subscription::run(config_stream)])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        let bg = self.theme.background.with_alpha(self.theme.opacity);
        iced::theme::Style {
            background_color: bg.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher task exited — shouldn't happen; stall rather than crash.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
