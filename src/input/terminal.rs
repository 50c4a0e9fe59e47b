use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

use super::handler::{InputHandler, KeyAction};
use super::{InputSource, TickInput};
use crate::game::ReplayChoice;

/// Keyboard input read from the terminal
#[derive(Default)]
pub struct TerminalInput {
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_key_action(&self, timeout: Option<Duration>) -> Result<Option<KeyAction>> {
        if let Some(timeout) = timeout {
            if !event::poll(timeout).context("Failed to poll terminal events")? {
                return Ok(None);
            }
        }

        match event::read().context("Failed to read terminal event")? {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(Some(self.handler.handle_key_event(key)))
            }
            _ => Ok(Some(KeyAction::None)),
        }
    }
}

impl InputSource for TerminalInput {
    /// Waits out the whole tick so ticks stay evenly spaced; the first
    /// steering key of the tick wins.
    fn poll_direction(&mut self, timeout: Duration) -> Result<TickInput> {
        let deadline = Instant::now() + timeout;
        let mut steer = None;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }
            match self.next_key_action(Some(remaining))? {
                None => break,
                Some(KeyAction::Quit) => return Ok(TickInput::Quit),
                Some(KeyAction::Steer(direction)) => {
                    steer.get_or_insert(direction);
                }
                Some(KeyAction::Replay(_) | KeyAction::None) => {}
            }
        }

        Ok(steer.map_or(TickInput::Idle, TickInput::Steer))
    }

    fn poll_replay_choice(&mut self) -> Result<ReplayChoice> {
        loop {
            match self.next_key_action(None)? {
                Some(KeyAction::Replay(choice)) => return Ok(choice),
                Some(KeyAction::Quit) => return Ok(ReplayChoice::No),
                _ => {}
            }
        }
    }
}
