//! The application screen: six buttons in a two-column grid.

use super::layout::FlexGrid;
use super::{Button, ButtonEvent, ButtonId, EventKind, EventMask, View};
use crate::config::{
    BUTTON_HEIGHT, BUTTON_WIDTH, GRID_COLUMN_GAP, GRID_PADDING, GRID_ROW_GAP, MAX_BUTTONS,
};
use crate::error::Error;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

pub struct MainView {
    grid: FlexGrid,
    buttons: Vec<Button, MAX_BUTTONS>,
}

impl MainView {
    pub const fn new() -> Self {
        Self {
            grid: FlexGrid::new(GRID_PADDING, GRID_COLUMN_GAP, GRID_ROW_GAP),
            buttons: Vec::new(),
        }
    }

    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id() == id)
    }
}

impl Default for MainView {
    fn default() -> Self {
        Self::new()
    }
}

/// Events each button reports to the view.
fn subscriptions(id: ButtonId) -> EventMask {
    match id {
        ButtonId::Stop | ButtonId::Settings => EventMask::of(EventKind::Clicked),
        ButtonId::Reset => EventMask::of(EventKind::Pressed).with(EventKind::Released),
        ButtonId::Start | ButtonId::Menu | ButtonId::Home => EventMask::EMPTY,
    }
}

impl View for MainView {
    fn init(&mut self, root: Rectangle) -> Result<(), Error> {
        self.buttons.clear();
        for id in ButtonId::ALL {
            let button = Button::new(id, Size::new(BUTTON_WIDTH, BUTTON_HEIGHT))
                .subscribe(subscriptions(id));
            self.buttons.push(button).map_err(|_| Error::Layout)?;
        }

        let sizes: Vec<Size, MAX_BUTTONS> = self.buttons.iter().map(Button::size).collect();
        let areas = self.grid.arrange(root, &sizes)?;
        for (button, area) in self.buttons.iter_mut().zip(areas) {
            button.place(area);
        }
        Ok(())
    }

    fn title(&self) -> &str {
        "Main"
    }

    fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    fn buttons_mut(&mut self) -> &mut [Button] {
        &mut self.buttons
    }

    fn on_event(&mut self, event: ButtonEvent) -> Option<&'static str> {
        match (event.id, event.kind) {
            (ButtonId::Stop, EventKind::Clicked) => Some("STOP Button clicked"),
            (ButtonId::Settings, EventKind::Clicked) => Some("SETTINGS Button clicked"),
            (ButtonId::Reset, EventKind::Pressed | EventKind::Released) => {
                Some("RESET Button pressed/released")
            }
            _ => None,
        }
    }
}
