//! Touch contact tracking.
//!
//! Turns the sequence of raw contacts reported by the touch controller
//! into per-button events, updating each button's pressed state.
//! Buttons are not press-locked: sliding off cancels the press, and the
//! later lift emits nothing.

use super::{Button, EventKind};
use embedded_graphics::prelude::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    /// No contact.
    #[default]
    Idle,
    /// Contact holding the button at this index.
    Pressing(usize),
    /// Contact that started off-widget or slid off; ignored until lifted.
    Lost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerTracker {
    state: State,
}

impl PointerTracker {
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Index of the button currently held, if any.
    pub fn pressed(&self) -> Option<usize> {
        match self.state {
            State::Pressing(i) => Some(i),
            _ => None,
        }
    }

    /// Feed one contact sample (`None` = finger lifted).
    ///
    /// `emit` is called for every event in the order it happens, whether or
    /// not the button subscribes to it.
    pub fn update(
        &mut self,
        contact: Option<Point>,
        buttons: &mut [Button],
        mut emit: impl FnMut(&Button, EventKind),
    ) {
        self.state = match (self.state, contact) {
            (State::Idle, None) => State::Idle,
            (State::Idle, Some(p)) => match buttons.iter().position(|b| b.contains(p)) {
                Some(i) => {
                    buttons[i].set_pressed(true);
                    emit(&buttons[i], EventKind::Pressed);
                    State::Pressing(i)
                }
                None => State::Lost,
            },
            (State::Pressing(i), Some(p)) => match buttons.get_mut(i) {
                Some(button) if button.contains(p) => State::Pressing(i),
                Some(button) => {
                    button.set_pressed(false);
                    emit(button, EventKind::PressLost);
                    State::Lost
                }
                None => State::Lost,
            },
            (State::Pressing(i), None) => {
                if let Some(button) = buttons.get_mut(i) {
                    button.set_pressed(false);
                    emit(button, EventKind::Released);
                    emit(button, EventKind::Clicked);
                }
                State::Idle
            }
            (State::Lost, Some(_)) => State::Lost,
            (State::Lost, None) => State::Idle,
        };
    }

    /// Drop any in-progress contact without emitting events.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }
}
