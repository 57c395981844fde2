//! Push button widget.

use super::{EventKind, EventMask};
use crate::config::{
    BUTTON_BG_RGB, BUTTON_BORDER_RGB, BUTTON_BORDER_WIDTH, BUTTON_PRESSED_BG_RGB,
};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Buttons known to the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Start,
    Stop,
    Menu,
    Settings,
    Reset,
    Home,
}

impl ButtonId {
    /// Grid order, left to right then top to bottom.
    pub const ALL: [ButtonId; 6] = [
        ButtonId::Start,
        ButtonId::Stop,
        ButtonId::Menu,
        ButtonId::Settings,
        ButtonId::Reset,
        ButtonId::Home,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ButtonId::Start => "Start",
            ButtonId::Stop => "Stop",
            ButtonId::Menu => "Menu",
            ButtonId::Settings => "Settings",
            ButtonId::Reset => "Reset",
            ButtonId::Home => "Home",
        }
    }
}

/// Convert a `0xRRGGBB` constant.
pub fn rgb(hex: u32) -> Rgb888 {
    Rgb888::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonStyle {
    pub background: Rgb888,
    pub pressed_background: Rgb888,
    pub border: Rgb888,
    pub border_width: u32,
    pub text: Rgb888,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background: rgb(BUTTON_BG_RGB),
            pressed_background: rgb(BUTTON_PRESSED_BG_RGB),
            border: rgb(BUTTON_BORDER_RGB),
            border_width: BUTTON_BORDER_WIDTH,
            text: Rgb888::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    id: ButtonId,
    area: Rectangle,
    style: ButtonStyle,
    subscriptions: EventMask,
    pressed: bool,
    dirty: bool,
}

impl Button {
    /// New button at the origin; the layout moves it into place.
    pub fn new(id: ButtonId, size: Size) -> Self {
        Self {
            id,
            area: Rectangle::new(Point::zero(), size),
            style: ButtonStyle::default(),
            subscriptions: EventMask::EMPTY,
            pressed: false,
            dirty: true,
        }
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Forward `events` to the owning view.
    pub fn subscribe(mut self, events: EventMask) -> Self {
        self.subscriptions = events;
        self
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn area(&self) -> Rectangle {
        self.area
    }

    pub fn size(&self) -> Size {
        self.area.size
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Needs redrawing.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn subscribed(&self, kind: EventKind) -> bool {
        self.subscriptions.contains(kind)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.area.contains(point)
    }

    pub(crate) fn place(&mut self, area: Rectangle) {
        self.area = area;
        self.dirty = true;
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.dirty = true;
        }
    }

    /// Render the button and clear its dirty flag.
    pub fn draw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget,
        D::Color: From<Rgb888>,
    {
        let background = if self.pressed {
            self.style.pressed_background
        } else {
            self.style.background
        };

        let frame = PrimitiveStyleBuilder::new()
            .fill_color(D::Color::from(background))
            .stroke_color(D::Color::from(self.style.border))
            .stroke_width(self.style.border_width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        self.area.into_styled(frame).draw(target)?;

        let character_style = MonoTextStyle::new(&FONT_10X20, D::Color::from(self.style.text));
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            self.id.label(),
            self.area.center(),
            character_style,
            text_style,
        )
        .draw(target)?;

        self.dirty = false;
        Ok(())
    }
}
