use crate::state::{Screen, State};
use anyhow::Result;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if let Ok(true) = event::poll(tick_rate) {
                if let Ok(CrosstermEvent::Key(key)) = event::read() {
                    if tx_clone.send(Event::Input(key)).is_err() {
                        break;
                    }
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => Ok(true),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Dispatch a key event against the current screen. Returns false when the
/// application should exit.
///
fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.kind == KeyEventKind::Release {
        return true;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    match state.current_screen() {
        Screen::Landing => match key.code {
            // The search affordance.
            KeyCode::Char('/') | KeyCode::Char('s') => state.enter_search(),
            KeyCode::Char('q') => {
                debug!("Processing exit terminal event '{:?}'...", key);
                return false;
            }
            _ => {}
        },
        Screen::Search => match key.code {
            // The back affordance.
            KeyCode::Esc => state.leave_search(),
            KeyCode::Enter => state.launch_first_match(),
            KeyCode::Backspace => state.remove_query_char(),
            // Everything else edits the live query, including 'q' and 's'.
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.add_query_char(c)
            }
            _ => {}
        },
    }
    true
}
