//! Asynchronous I2C driver for the Goodix GT911 capacitive touch controller

pub mod error;
pub mod reg;

use core::fmt::Debug;

use embedded_graphics::prelude::Point;
use embedded_hal_async::i2c::I2c;

use self::{error::Error, reg::*};

/// Result of one poll of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchReport {
    /// No new frame since the last read; keep the previous state.
    NotReady,
    /// Fresh frame with no contacts.
    Released,
    /// Fresh frame; first contact position in panel coordinates.
    Touched(Point),
}

impl TouchReport {
    /// Contact state to feed into the UI, or `None` for a stale frame.
    pub fn contact(self) -> Option<Option<Point>> {
        match self {
            TouchReport::NotReady => None,
            TouchReport::Released => Some(None),
            TouchReport::Touched(p) => Some(Some(p)),
        }
    }
}

pub struct Gt911<BUS> {
    address: u8,
    bus: BUS,
    width: u32,
    height: u32,
}

impl<BUS, E> Gt911<BUS>
where
    BUS: I2c<Error = E>,
    E: Debug,
{
    /// Probe the controller and check its product ID.
    ///
    /// `width`/`height` bound the reported coordinates.
    pub async fn new(bus: BUS, address: u8, width: u32, height: u32) -> Result<Self, Error<E>> {
        let mut device = Self {
            address,
            bus,
            width,
            height,
        };
        let mut id = [0u8; PRODUCT_ID_LEN];
        device.read_registers(RegisterAddress::ProductId, &mut id).await?;
        if &id[..PRODUCT_ID.len()] != PRODUCT_ID {
            return Err(Error::UnexpectedProductId(id));
        }
        Ok(device)
    }

    /// Read the current touch frame and acknowledge it.
    pub async fn read(&mut self) -> Result<TouchReport, Error<E>> {
        let mut status = [0u8; 1];
        self.read_registers(RegisterAddress::Status, &mut status)
            .await?;
        let status = status[0];

        if status & STATUS_BUFFER_READY == 0 {
            return Ok(TouchReport::NotReady);
        }

        let points = status & STATUS_POINT_COUNT_MASK;
        let report = if points > MAX_POINTS {
            // Still acknowledge so the chip produces a fresh frame.
            self.clear_status().await?;
            return Err(Error::InvalidPointCount(points));
        } else if points == 0 {
            TouchReport::Released
        } else {
            let mut record = [0u8; POINT_RECORD_LEN];
            self.read_registers(RegisterAddress::Point1, &mut record)
                .await?;
            let x = u16::from_le_bytes([record[1], record[2]]);
            let y = u16::from_le_bytes([record[3], record[4]]);
            TouchReport::Touched(self.clamp(x, y))
        };

        self.clear_status().await?;
        Ok(report)
    }

    /// Give the bus back.
    pub fn release(self) -> BUS {
        self.bus
    }

    fn clamp(&self, x: u16, y: u16) -> Point {
        let x = u32::from(x).min(self.width.saturating_sub(1));
        let y = u32::from(y).min(self.height.saturating_sub(1));
        Point::new(x as i32, y as i32)
    }

    async fn clear_status(&mut self) -> Result<(), Error<E>> {
        let [hi, lo] = RegisterAddress::Status.to_be_bytes();
        self.bus
            .write(self.address, &[hi, lo, 0])
            .await
            .map_err(Error::BusError)
    }

    async fn read_registers(
        &mut self,
        register: RegisterAddress,
        buf: &mut [u8],
    ) -> Result<(), Error<E>> {
        self.bus
            .write_read(self.address, &register.to_be_bytes(), buf)
            .await
            .map_err(Error::BusError)
    }
}
