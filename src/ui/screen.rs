//! Screen - owns the root view and connects it to display and touch.

use super::pointer::PointerTracker;
use super::{ButtonEvent, View};
use crate::config::MAX_NOTICES;
use crate::error::Error;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use heapless::Vec;

/// One touch sample produces at most this many events (release + click).
const MAX_EVENTS_PER_SAMPLE: usize = 2;

pub struct Screen<V> {
    view: V,
    pointer: PointerTracker,
    background: Rgb888,
}

impl<V: View> Screen<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            pointer: PointerTracker::new(),
            background: Rgb888::BLACK,
        }
    }

    pub fn with_background(mut self, background: Rgb888) -> Self {
        self.background = background;
        self
    }

    pub fn title(&self) -> &str {
        self.view.title()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Build the view over the whole display and paint it.
    pub fn init<D>(&mut self, display: &mut D) -> Result<(), Error>
    where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        self.pointer.reset();
        self.view.init(display.bounding_box())?;

        display
            .clear(D::Color::from(self.background))
            .map_err(|_| Error::Display)?;
        for button in self.view.buttons_mut() {
            button.draw(display).map_err(|_| Error::Display)?;
        }
        Ok(())
    }

    /// Route one contact sample to the view.
    ///
    /// Returns the log lines produced by the view's handlers.
    pub fn handle_touch(&mut self, contact: Option<Point>) -> Vec<&'static str, MAX_NOTICES> {
        let mut events: Vec<ButtonEvent, MAX_EVENTS_PER_SAMPLE> = Vec::new();
        self.pointer
            .update(contact, self.view.buttons_mut(), |button, kind| {
                if button.subscribed(kind) {
                    let _ = events.push(ButtonEvent {
                        id: button.id(),
                        kind,
                    });
                }
            });

        let mut notices = Vec::new();
        for event in events {
            if let Some(notice) = self.view.on_event(event) {
                let _ = notices.push(notice);
            }
        }
        notices
    }

    pub fn update(&mut self, now_ms: u32) {
        self.view.update(now_ms);
    }

    /// Redraw the buttons whose state changed. Returns how many were drawn.
    pub fn render<D>(&mut self, display: &mut D) -> Result<usize, Error>
    where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let mut drawn = 0;
        for button in self.view.buttons_mut().iter_mut().filter(|b| b.is_dirty()) {
            button.draw(display).map_err(|_| Error::Display)?;
            drawn += 1;
        }
        Ok(drawn)
    }
}
