//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//! - Network handlers are spawned via `spawn_effect`

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use signon_core::auth::AuthClient;
use signon_core::config::Config;
use tokio::sync::mpsc;
use tracing::info;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Session};
use crate::{render, terminal, update};

/// Target frame rate while something is animating (60fps = ~16ms per frame).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing
/// is happening, while the countdown still advances on whole seconds.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

/// Hooks invoked when the sign-in flow completes.
///
/// `on_complete` always runs before `on_redirect`.
pub struct SessionHooks {
    pub on_complete: Box<dyn FnMut(&Session) + Send>,
    pub on_redirect: Box<dyn FnMut(&Session) + Send>,
}

impl Default for SessionHooks {
    fn default() -> Self {
        Self {
            on_complete: Box::new(|session| info!(outcome = %session.message, "sign-in complete")),
            on_redirect: Box::new(|_| info!("leaving sign-in flow")),
        }
    }
}

/// Runs both hooks in their fixed order.
fn run_session_hooks(hooks: &mut SessionHooks, session: &Session) {
    (hooks.on_complete)(session);
    (hooks.on_redirect)(session);
}

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop and
/// panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: AuthClient,
    hooks: SessionHooks,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    last_tick: std::time::Instant,
    last_terminal_event: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime, entering the alternate screen.
    pub fn new(config: Config, email_prefill: Option<String>) -> Result<Self> {
        Self::with_hooks(config, email_prefill, SessionHooks::default())
    }

    /// Creates a runtime with caller-supplied session hooks.
    pub fn with_hooks(
        config: Config,
        email_prefill: Option<String>,
        hooks: SessionHooks,
    ) -> Result<Self> {
        // Panic hook must be in place before entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let client = AuthClient::from_config(&config);
        let state = AppState::new(config, email_prefill);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = std::time::Instant::now();
        Ok(Self {
            terminal,
            state,
            client,
            hooks,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Takes the completed session out of the runtime, if any.
    pub fn take_session(&mut self) -> Option<Session> {
        self.state.tui.session.take()
    }

    /// Runs the main event loop until quit.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = std::time::Instant::now();
                }

                // Renders are batched to the tick cadence; terminal events
                // update state but draw on the next Tick.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the terminal, the inbox, and the tick timer.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.request_in_flight()
            || self.state.tui.notice.is_some()
            || recent_terminal_activity;

        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::SubmitLogin { req, credentials } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::submit_login(client, req, credentials));
            }
            UiEffect::SubmitVerify { req, code } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::submit_verify(client, req, code));
            }
            UiEffect::CompleteSession { session } => {
                run_session_hooks(&mut self.hooks, &session);
                self.state.tui.session = Some(session);
                self.state.tui.should_quit = true;
            }
        }
    }

    /// Spawns an async effect, sending its result event to the inbox.
    ///
    /// Handlers stay pure async functions that return `UiEvent`; the
    /// runtime owns spawning and delivery.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_session_hooks_run_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let complete_log = Arc::clone(&order);
        let redirect_log = Arc::clone(&order);

        let mut hooks = SessionHooks {
            on_complete: Box::new(move |_| complete_log.lock().unwrap().push("complete")),
            on_redirect: Box::new(move |_| redirect_log.lock().unwrap().push("redirect")),
        };

        let session = Session {
            token: Some("fake-token".to_string()),
            message: "2FA verified".to_string(),
        };
        run_session_hooks(&mut hooks, &session);

        assert_eq!(*order.lock().unwrap(), vec!["complete", "redirect"]);
    }
}
