use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent};

use crate::error::{PaletteError, Result};
use crate::models::{Item, ItemSource};

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick for UI updates
    Tick,
    /// The item source finished loading
    ItemsLoaded(Result<Vec<Item>>),
}

/// Event handler with a background input thread and a one-shot loader thread
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate in milliseconds.
    /// Items are read from `source` off the UI thread.
    pub fn new(tick_rate: u64, source: ItemSource) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sender, receiver) = mpsc::channel();

        let loader = sender.clone();
        thread::spawn(move || {
            let result = source.load();
            if let Err(ref e) = result {
                tracing::warn!(error = %e, "failed to load items");
            }
            // The UI may already be gone; nothing to do then
            let _ = loader.send(Event::ItemsLoaded(result));
        });

        let handler = thread::spawn(move || loop {
            let next = if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(terminal_event) => translate(terminal_event),
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read terminal event");
                        None
                    }
                }
            } else {
                Some(Event::Tick)
            };

            if let Some(next) = next {
                if sender.send(next).is_err() {
                    break;
                }
            }
        });

        Self { receiver, handler }
    }

    /// Get the next event, blocking until one is available
    pub fn next(&self) -> Result<Event> {
        self.receiver
            .recv()
            .map_err(|e| PaletteError::Tui(e.to_string()))
    }
}

/// Keep the terminal events the palette reacts to
fn translate(terminal_event: event::Event) -> Option<Event> {
    match terminal_event {
        event::Event::Key(key) => Some(Event::Key(key)),
        event::Event::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}
