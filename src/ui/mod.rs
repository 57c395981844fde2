//! User interface subsystem - touch panel + button grid.
//!
//! A `View` describes the widgets of one screen; the `Screen` owns the
//! view, lays it out, feeds it touch input and redraws what changed.
//!
//! ## Components
//!
//! - **Layout**: flex row-wrap grid with evenly distributed free space
//! - **Button**: bordered rectangle + centred label, pressed state
//! - **Pointer**: turns raw contacts into press/release/click events
//! - **Main view**: the six-button application screen

pub mod button;
pub mod layout;
pub mod main_view;
pub mod pointer;
pub mod screen;


pub use button::{Button, ButtonId, ButtonStyle};
pub use main_view::MainView;
pub use screen::Screen;

use crate::error::Error;
use embedded_graphics::primitives::Rectangle;

/// Root content of a screen.
///
/// `init` builds and positions widgets but must not draw; the `Screen`
/// renders them once `init` returns.
pub trait View {
    /// Create the widgets inside `root`.
    fn init(&mut self, root: Rectangle) -> Result<(), Error>;

    /// Called once per granted refresh, before rendering.
    fn update(&mut self, _now_ms: u32) {}

    fn title(&self) -> &str;

    fn buttons(&self) -> &[Button];

    fn buttons_mut(&mut self) -> &mut [Button];

    /// Handle a subscribed button event. Returns a line for the log.
    fn on_event(&mut self, event: ButtonEvent) -> Option<&'static str>;
}

/// Pointer events a button can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// Contact started on the button.
    Pressed,
    /// Contact ended on the button.
    Released,
    /// Press followed by release on the same button.
    Clicked,
    /// Contact slid off the button while pressed.
    PressLost,
}

impl EventKind {
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of `EventKind`s a button forwards to its view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EventMask(u8);

impl EventMask {
    pub const EMPTY: Self = Self(0);

    pub const fn of(kind: EventKind) -> Self {
        Self(kind.bit())
    }

    pub const fn with(self, kind: EventKind) -> Self {
        Self(self.0 | kind.bit())
    }

    pub const fn contains(self, kind: EventKind) -> bool {
        self.0 & kind.bit() != 0
    }
}

/// A button event delivered to `View::on_event`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub id: ButtonId,
    pub kind: EventKind,
}
