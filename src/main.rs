//! cyd-panel firmware entry point (ESP32-3248S035C).
//!
//! Brings up the panel, touch controller and status LED, then runs the
//! refresh loop: drain touch input into the screen, and whenever the
//! refresh gate allows, update and redraw the view.

#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

mod display;

use core::convert::Infallible;

use cyd_panel::color::ColorCycle;
use cyd_panel::config;
use cyd_panel::led::RgbLed;
use cyd_panel::refresh::RefreshGate;
use cyd_panel::touch::Gt911;
use cyd_panel::ui::{MainView, Screen};
use cyd_panel::Error;
use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Sender};
use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::prelude::Point;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::{Peripherals, GPIO32, GPIO33, I2C0};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::Async;
use esp_println as _;

// This creates a default app-descriptor required by the esp-idf bootloader.
esp_bootloader_esp_idf::esp_app_desc!();

const TOUCH_DEPTH: usize = config::TOUCH_CHANNEL_DEPTH;

/// Touch contacts, sent only when they change (`None` = lifted).
static TOUCH_CHANNEL: Channel<CriticalSectionRawMutex, Option<Point>, TOUCH_DEPTH> =
    Channel::new();

/// Poll the GT911 and forward contact changes to the UI loop.
#[embassy_executor::task]
async fn touch_task(
    mut touch: Gt911<I2c<'static, Async>>,
    tx: Sender<'static, CriticalSectionRawMutex, Option<Point>, TOUCH_DEPTH>,
) -> ! {
    let mut last: Option<Point> = None;

    loop {
        match touch.read().await {
            Ok(report) => {
                if let Some(contact) = report.contact() {
                    if contact != last {
                        last = contact;
                        tx.send(contact).await;
                    }
                }
            }
            Err(e) => warn!("Touch: read failed: {}", Error::from(e)),
        }

        Timer::after(Duration::from_millis(config::TOUCH_POLL_MS)).await;
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Embassy time needs a timer.
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    info!("Starting application...");

    if let Err(e) = run(spawner, peripherals).await {
        error!("Startup failed: {}", e);
    }

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}

/// Initialise the board and run the refresh loop. Only returns on error.
async fn run(spawner: Spawner, p: Peripherals) -> Result<Infallible, Error> {
    let mut display = display::init(display::DisplayPins {
        spi: p.SPI2,
        sck: p.GPIO14,
        mosi: p.GPIO13,
        miso: p.GPIO12,
        cs: p.GPIO15,
        dc: p.GPIO2,
        backlight: p.GPIO27,
    })?;

    // Status LED on three LEDC channels; 100 % duty is dark (active low).
    let mut ledc = Ledc::new(p.LEDC);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);
    let mut led_timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    led_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(config::STATUS_LED_PWM_KHZ),
        })
        .map_err(|_| Error::Led)?;

    let led_config = || channel::config::Config {
        timer: &led_timer,
        duty_pct: 100,
        pin_config: channel::config::PinConfig::PushPull,
    };
    let mut red = ledc.channel(channel::Number::Channel0, p.GPIO4);
    red.configure(led_config()).map_err(|_| Error::Led)?;
    let mut green = ledc.channel(channel::Number::Channel1, p.GPIO16);
    green.configure(led_config()).map_err(|_| Error::Led)?;
    let mut blue = ledc.channel(channel::Number::Channel2, p.GPIO17);
    blue.configure(led_config()).map_err(|_| Error::Led)?;
    let mut led = RgbLed::new(red, green, blue)?;

    let mut screen = Screen::new(MainView::new());
    screen.init(&mut display.panel)?;
    info!("View: {=str}", screen.title());

    // The GUI stays up without input if the controller is missing.
    if let Err(e) = start_touch(spawner, p.I2C0, p.GPIO33, p.GPIO32).await {
        warn!("Touch: {}, running without input", e);
    }

    let mut gate: RefreshGate = RefreshGate::new();
    let mut cycle = ColorCycle::default();
    let touch_rx = TOUCH_CHANNEL.receiver();

    loop {
        while let Ok(contact) = touch_rx.try_receive() {
            for notice in screen.handle_touch(contact) {
                info!("{=str}", notice);
            }
        }

        let now = Instant::now().as_millis() as u32;
        if gate.ready(now) {
            screen.update(now);
            if let Err(e) = screen.render(&mut display.panel) {
                warn!("Render failed: {}", e);
            }
            if config::STATUS_LED_CYCLE {
                if let Err(e) = led.set(cycle.advance()) {
                    warn!("Status LED update failed: {}", e);
                }
            }
        }

        Timer::after(Duration::from_millis(config::LOOP_YIELD_MS)).await;
    }
}

/// Probe the GT911 on I2C0 and hand it to `touch_task`.
async fn start_touch(
    spawner: Spawner,
    i2c0: I2C0<'static>,
    sda: GPIO33<'static>,
    scl: GPIO32<'static>,
) -> Result<(), Error> {
    let i2c = I2c::new(
        i2c0,
        I2cConfig::default().with_frequency(Rate::from_khz(config::TOUCH_I2C_KHZ)),
    )
    .map_err(|_| Error::Bus)?
    .with_sda(sda)
    .with_scl(scl)
    .into_async();
    let touch = Gt911::new(
        i2c,
        config::TOUCH_I2C_ADDRESS,
        config::DISPLAY_WIDTH,
        config::DISPLAY_HEIGHT,
    )
    .await?;
    info!("Touch: GT911 at {=u8:#x}", config::TOUCH_I2C_ADDRESS);

    if spawner
        .spawn(touch_task(touch, TOUCH_CHANNEL.sender()))
        .is_err()
    {
        warn!("Touch: task spawn failed, running without input");
    }
    Ok(())
}
