//! ST7796 TFT panel wrapper.

use cyd_panel::config::{DISPLAY_BUFFER_SIZE, DISPLAY_HEIGHT, DISPLAY_SPI_MHZ, DISPLAY_WIDTH};
use cyd_panel::Error;
use defmt::info;
use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{GPIO12, GPIO13, GPIO14, GPIO15, GPIO2, GPIO27, SPI2};
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::Blocking;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7796;
use mipidsi::options::ColorOrder;
use mipidsi::{Builder, NoResetPin};
use static_cell::StaticCell;

/// Type alias for the concrete display driver.
pub type Panel = mipidsi::Display<
    SpiInterface<
        'static,
        ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, Delay>,
        Output<'static>,
    >,
    ST7796,
    NoResetPin,
>;

static DI_BUFFER: StaticCell<[u8; DISPLAY_BUFFER_SIZE]> = StaticCell::new();

/// Peripherals wired to the panel on the ESP32-3248S035C.
pub struct DisplayPins {
    pub spi: SPI2<'static>,
    pub sck: GPIO14<'static>,
    pub mosi: GPIO13<'static>,
    pub miso: GPIO12<'static>,
    pub cs: GPIO15<'static>,
    pub dc: GPIO2<'static>,
    pub backlight: GPIO27<'static>,
}

/// Initialised panel plus the backlight pin that must stay driven.
pub struct Display {
    pub panel: Panel,
    _backlight: Output<'static>,
}

/// Bring up SPI2 and the ST7796, then switch the backlight on.
///
/// Must be called exactly once.  The interface buffer is consumed here.
pub fn init(pins: DisplayPins) -> Result<Display, Error> {
    let spi = Spi::new(
        pins.spi,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(DISPLAY_SPI_MHZ))
            .with_mode(Mode::_0),
    )
    .map_err(|_| Error::Bus)?
    .with_sck(pins.sck)
    .with_mosi(pins.mosi)
    .with_miso(pins.miso);

    let cs = Output::new(pins.cs, Level::High, OutputConfig::default());
    let dc = Output::new(pins.dc, Level::Low, OutputConfig::default());
    let spi_device = ExclusiveDevice::new(spi, cs, Delay::new()).map_err(|_| Error::Display)?;

    let buffer = DI_BUFFER.init([0u8; DISPLAY_BUFFER_SIZE]);
    let di = SpiInterface::new(spi_device, dc, buffer);

    // The panel has no reset line; mipidsi falls back to a software reset.
    let mut delay = Delay::new();
    let panel = Builder::new(ST7796, di)
        .display_size(DISPLAY_WIDTH as u16, DISPLAY_HEIGHT as u16)
        .color_order(ColorOrder::Bgr)
        .init(&mut delay)
        .map_err(|_| Error::Display)?;

    let backlight = Output::new(pins.backlight, Level::High, OutputConfig::default());
    info!("Display: ST7796 {}x{} ready", DISPLAY_WIDTH, DISPLAY_HEIGHT);

    Ok(Display {
        panel,
        _backlight: backlight,
    })
}
