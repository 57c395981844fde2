//! GT911 register map (the subset this firmware touches).
//!
//! Register addresses are 16 bits wide and sent big-endian.

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterAddress {
    /// Four ASCII bytes, "911\0" on a GT911.
    ProductId = 0x8140,
    /// Bit 7: buffer ready. Bits 0-3: number of touch points.
    Status = 0x814E,
    /// First touch point record.
    Point1 = 0x814F,
}

impl RegisterAddress {
    pub fn to_be_bytes(self) -> [u8; 2] {
        (self as u16).to_be_bytes()
    }
}

pub const PRODUCT_ID_LEN: usize = 4;

/// Expected product ID prefix.
pub const PRODUCT_ID: &[u8; 3] = b"911";

/// Point record: track id, x (le u16), y (le u16), size (le u16), reserved.
pub const POINT_RECORD_LEN: usize = 8;

pub const STATUS_BUFFER_READY: u8 = 0x80;
pub const STATUS_POINT_COUNT_MASK: u8 = 0x0F;

/// The GT911 tracks at most five contacts.
pub const MAX_POINTS: u8 = 5;
