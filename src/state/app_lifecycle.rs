//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - `process_messages()` - Drains the message channel

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::constants::TICK_RATE;
use crate::domain::AllocatorRecord;
use crate::tui::Tui;
use crate::ui;

use super::{AllocatorGrid, App, AppConfig, AppMessage, SortChannel, StartupOptions, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App over already loaded rows.
    ///
    /// Startup options take precedence over the configuration.
    #[must_use]
    pub fn new(rows: Vec<AllocatorRecord>, config: AppConfig, options: StartupOptions) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let network = options.network.unwrap_or(config.network);

        tracing::info!(
            rows = rows.len(),
            %network,
            sort = ?options.sort,
            "starting"
        );

        Self {
            grid: AllocatorGrid::with_sort(rows, options.sort),
            ui: UiState::new(),
            config,
            network,
            exit: false,
            page_size: 1,
            sort_channel: SortChannel { tx: message_tx },
            message_rx,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        // Apply a sort queued by this key before the next draw.
                        self.process_messages();
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if self.ui.tick_toast() {
                    terminal.draw(|frame| ui::render(self, frame))?;
                }
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// Applies every queued message.
    ///
    /// Each sort request swaps the grid's state and reorders its rows in one
    /// step, so the following frame renders both consistently.
    pub fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::SortRequested(request) => {
                    self.grid.apply_sort(request);
                }
            }
        }
    }
}
