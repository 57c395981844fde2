//! Common-anode RGB status LED driven by three PWM channels.
//!
//! The CYD wires the LED cathodes to GPIO, so a channel is fully lit at
//! 0 % duty and dark at 100 %.

use crate::error::Error;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_hal::pwm::SetDutyCycle;

/// RGB LED over any three `SetDutyCycle` outputs.
pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    current: Rgb888,
}

impl<R, G, B> RgbLed<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Take ownership of the channels and switch the LED off.
    pub fn new(red: R, green: G, blue: B) -> Result<Self, Error> {
        let mut led = Self {
            red,
            green,
            blue,
            current: Rgb888::BLACK,
        };
        led.off()?;
        Ok(led)
    }

    /// Drive all three channels to `color`.
    pub fn set(&mut self, color: Rgb888) -> Result<(), Error> {
        write_channel(&mut self.red, color.r())?;
        write_channel(&mut self.green, color.g())?;
        write_channel(&mut self.blue, color.b())?;
        self.current = color;
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), Error> {
        self.set(Rgb888::BLACK)
    }

    /// Last colour successfully written.
    pub fn color(&self) -> Rgb888 {
        self.current
    }

    /// Give the channels back.
    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

fn write_channel<C: SetDutyCycle>(channel: &mut C, level: u8) -> Result<(), Error> {
    // Active low: full brightness is zero duty.
    channel
        .set_duty_cycle_fraction(u16::from(u8::MAX - level), u16::from(u8::MAX))
        .map_err(|_| Error::Led)
}
