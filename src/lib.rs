//! Hardware-independent core of the cyd-panel firmware.
//!
//! Everything here builds for both the ESP32 and the host, so the
//! colour wheel, refresh gate, touch driver and UI logic can be tested
//! without a board attached.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with `--features embedded` for the Xtensa target.

#![cfg_attr(not(test), no_std)]

pub mod color;
pub mod config;
pub mod error;
pub mod led;
pub mod refresh;
pub mod touch;
pub mod ui;

pub use error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::color::{wheel, ColorCycle, DEFAULT_STEP};
    use super::led::RgbLed;
    use super::refresh::RefreshGate;
    use core::convert::Infallible;
    use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
    use embedded_hal::pwm::{ErrorKind, ErrorType, SetDutyCycle};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn color_at(position: u8) -> Rgb888 {
        let mut rgb = Rgb888::BLACK;
        wheel(&mut rgb, position, DEFAULT_STEP);
        rgb
    }

    // ════════════════════════════════════════════════════════════════════════
    // Colour Wheel Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn wheel_position_zero_is_green() {
        // curr = 255 -> band 2, curr' = 85
        assert_eq!(color_at(0), Rgb888::new(0, 255, 0));
    }

    #[test]
    fn wheel_position_128() {
        // curr = 127 -> band 1, curr' = 42
        assert_eq!(color_at(128), Rgb888::new(129, 0, 126));
    }

    #[test]
    fn wheel_position_255_is_pure_green_start_of_band_0() {
        // curr = 0 -> band 0
        assert_eq!(color_at(255), Rgb888::new(0, 255, 0));
    }

    #[test]
    fn wheel_curr_85_falls_in_band_1() {
        // position 170 -> curr 85 -> curr' 0: red full, no blue
        assert_eq!(color_at(170), Rgb888::new(255, 0, 0));
    }

    #[test]
    fn wheel_curr_170_falls_in_band_2() {
        // position 85 -> curr 170 -> curr' 0: blue full, no green
        assert_eq!(color_at(85), Rgb888::new(0, 0, 255));
    }

    #[test]
    fn wheel_last_value_of_each_band() {
        // curr 84 (band 0 edge)
        assert_eq!(color_at(171), Rgb888::new(252, 3, 0));
        // curr 169 (band 1 edge)
        assert_eq!(color_at(86), Rgb888::new(3, 0, 252));
        // curr 254 (band 2 edge)
        assert_eq!(color_at(1), Rgb888::new(0, 252, 3));
    }

    #[test]
    fn wheel_channels_always_sum_to_255() {
        for p in 0..=255u8 {
            let c = color_at(p);
            let sum = u16::from(c.r()) + u16::from(c.g()) + u16::from(c.b());
            assert_eq!(sum, 255, "position {p}");
            // At most two channels are lit.
            assert!(c.r() == 0 || c.g() == 0 || c.b() == 0, "position {p}");
        }
    }

    #[test]
    fn wheel_returns_next_position_with_wraparound() {
        let mut rgb = Rgb888::BLACK;
        assert_eq!(wheel(&mut rgb, 10, 1), 11);
        assert_eq!(wheel(&mut rgb, 255, 1), 0);
        assert_eq!(wheel(&mut rgb, 0, -1), 255);
        assert_eq!(wheel(&mut rgb, 100, -128), 228);
        assert_eq!(wheel(&mut rgb, 200, 127), 71);
    }

    #[test]
    fn wheel_full_cycle_returns_to_start() {
        for start in 0..=255u8 {
            let mut rgb = Rgb888::BLACK;
            let mut p = start;
            for _ in 0..256 {
                p = wheel(&mut rgb, p, 1);
            }
            assert_eq!(p, start);
        }
    }

    #[test]
    fn wheel_step_zero_is_idempotent() {
        let mut first = Rgb888::BLACK;
        let next = wheel(&mut first, 77, 0);
        assert_eq!(next, 77);
        for _ in 0..5 {
            let mut again = Rgb888::BLACK;
            assert_eq!(wheel(&mut again, next, 0), 77);
            assert_eq!(again, first);
        }
    }

    #[test]
    fn wheel_overwrites_previous_output() {
        let mut rgb = Rgb888::new(9, 9, 9);
        wheel(&mut rgb, 85, 1);
        assert_eq!(rgb, Rgb888::new(0, 0, 255));
    }

    #[test]
    fn color_cycle_advances_through_wheel() {
        let mut cycle = ColorCycle::default();
        assert_eq!(cycle.position(), 0);
        assert_eq!(cycle.advance(), color_at(0));
        assert_eq!(cycle.position(), 1);
        assert_eq!(cycle.advance(), color_at(1));

        let mut backwards = ColorCycle::new(0, -1);
        backwards.advance();
        assert_eq!(backwards.position(), 255);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Refresh Gate Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn gate_throttles_to_period() {
        let mut gate = RefreshGate::<20>::new();
        assert!(gate.ready(0));
        assert!(!gate.ready(10));
        assert!(gate.ready(25));
        assert!(!gate.ready(44));
        assert!(gate.ready(45));
    }

    #[test]
    fn gate_boundary_is_inclusive() {
        let mut gate = RefreshGate::<20>::new();
        assert!(gate.ready(100));
        assert!(!gate.ready(119));
        assert!(gate.ready(120));
    }

    #[test]
    fn gate_first_call_always_granted() {
        let mut gate = RefreshGate::<1000>::new();
        assert!(gate.ready(5));
        assert!(!gate.ready(6));
    }

    #[test]
    fn gate_denied_calls_do_not_move_the_window() {
        let mut gate = RefreshGate::<20>::new();
        assert!(gate.ready(0));
        for t in 1..20 {
            assert!(!gate.ready(t));
        }
        assert!(gate.ready(20));
    }

    #[test]
    fn gate_zero_period_always_passes() {
        let mut gate = RefreshGate::<0>::new();
        for t in [0, 0, 5, 3, 3, u32::MAX, 0] {
            assert!(gate.ready(t));
        }
        assert_eq!(gate, RefreshGate::<0>::new());
    }

    #[test]
    fn gate_survives_timer_rollover() {
        let mut gate = RefreshGate::<20>::new();
        assert!(gate.ready(u32::MAX - 5));
        // 9 ms elapsed across the wrap.
        assert!(!gate.ready(3));
        // 20 ms elapsed across the wrap.
        assert!(gate.ready(14));
    }

    #[test]
    fn gate_backwards_clock_is_granted_and_resyncs() {
        let mut gate = RefreshGate::<20>::new();
        assert!(gate.ready(1000));
        assert!(gate.ready(5));
        assert!(!gate.ready(10));
        assert!(gate.ready(25));
    }

    #[test]
    fn gate_reset_and_independent_instances() {
        let mut a = RefreshGate::<20>::new();
        let mut b = RefreshGate::<20>::new();
        assert!(a.ready(0));
        assert!(!a.ready(5));
        assert!(b.ready(5));

        a.reset();
        assert!(a.ready(6));
        assert_eq!(a.period(), 20);
    }

    #[test]
    fn gate_default_period_comes_from_config() {
        let gate: RefreshGate = RefreshGate::new();
        assert_eq!(gate.period(), crate::config::REFRESH_PERIOD_MS);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Status LED Tests
    // ════════════════════════════════════════════════════════════════════════

    /// PWM channel that records the last duty fraction.
    #[derive(Clone, Default)]
    struct FakeChannel {
        duty: Rc<RefCell<Option<(u16, u16)>>>,
    }

    impl ErrorType for FakeChannel {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakeChannel {
        fn max_duty_cycle(&self) -> u16 {
            255
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            *self.duty.borrow_mut() = Some((duty, 255));
            Ok(())
        }
    }

    struct BrokenChannel;

    impl ErrorType for BrokenChannel {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for BrokenChannel {
        fn max_duty_cycle(&self) -> u16 {
            255
        }

        fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    fn duty(ch: &FakeChannel) -> u16 {
        let written = *ch.duty.borrow();
        written.unwrap().0
    }

    #[test]
    fn led_starts_off_active_low() {
        let (r, g, b) = (FakeChannel::default(), FakeChannel::default(), FakeChannel::default());
        let led = RgbLed::new(r.clone(), g.clone(), b.clone()).unwrap();
        assert_eq!(led.color(), Rgb888::BLACK);
        // Dark = fully high on a common-anode LED.
        assert_eq!(duty(&r), 255);
        assert_eq!(duty(&g), 255);
        assert_eq!(duty(&b), 255);
    }

    #[test]
    fn led_set_inverts_channels() {
        let (r, g, b) = (FakeChannel::default(), FakeChannel::default(), FakeChannel::default());
        let mut led = RgbLed::new(r.clone(), g.clone(), b.clone()).unwrap();
        led.set(Rgb888::new(255, 0, 100)).unwrap();
        assert_eq!(duty(&r), 0);
        assert_eq!(duty(&g), 255);
        assert_eq!(duty(&b), 155);
        assert_eq!(led.color(), Rgb888::new(255, 0, 100));

        led.off().unwrap();
        assert_eq!(duty(&r), 255);
    }

    #[test]
    fn led_release_returns_channels_as_left() {
        let (r, g, b) = (FakeChannel::default(), FakeChannel::default(), FakeChannel::default());
        let mut led = RgbLed::new(r, g, b).unwrap();
        led.set(Rgb888::new(0, 255, 0)).unwrap();

        let (r, g, b) = led.release();
        assert_eq!((duty(&r), duty(&g), duty(&b)), (255, 0, 255));
    }

    #[test]
    fn led_channel_failure_maps_to_led_error() {
        let result = RgbLed::new(BrokenChannel, BrokenChannel, BrokenChannel);
        assert!(matches!(result, Err(crate::Error::Led)));
    }

    #[test]
    fn led_follows_color_cycle() {
        let (r, g, b) = (FakeChannel::default(), FakeChannel::default(), FakeChannel::default());
        let mut led = RgbLed::new(r.clone(), g.clone(), b.clone()).unwrap();
        let mut cycle = ColorCycle::new(85, DEFAULT_STEP);
        led.set(cycle.advance()).unwrap();
        // Position 85 is pure blue.
        assert_eq!((duty(&r), duty(&g), duty(&b)), (255, 255, 0));
    }

    // ════════════════════════════════════════════════════════════════════════
    // Configuration / Error Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn config_button_grid_fits_panel() {
        use crate::config::*;
        let content_w = DISPLAY_WIDTH - 2 * GRID_PADDING;
        let content_h = DISPLAY_HEIGHT - 2 * GRID_PADDING;
        assert!(2 * BUTTON_WIDTH + GRID_COLUMN_GAP <= content_w);
        assert!(3 * BUTTON_HEIGHT + 2 * GRID_ROW_GAP <= content_h);
        assert!(crate::ui::ButtonId::ALL.len() <= MAX_BUTTONS);
    }

    #[test]
    fn touch_error_converts_into_crate_error() {
        use crate::error::{Error, TouchError};
        let e: Error = TouchError::InvalidPointCount.into();
        assert_eq!(e, Error::Touch(TouchError::InvalidPointCount));
        assert_eq!(
            std::format!("{}", Error::Layout),
            "layout capacity exceeded"
        );
    }
}
