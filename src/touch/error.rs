use core::fmt::Debug;

use crate::error::TouchError;

#[derive(Debug)]
pub enum Error<E>
where
    E: Debug,
{
    BusError(E),
    UnexpectedProductId([u8; 4]),
    InvalidPointCount(u8),
}

impl<E: Debug> Error<E> {
    /// Bus-independent summary for the crate-wide error.
    pub fn kind(&self) -> TouchError {
        match self {
            Error::BusError(_) => TouchError::Bus,
            Error::UnexpectedProductId(_) => TouchError::UnexpectedProductId,
            Error::InvalidPointCount(_) => TouchError::InvalidPointCount,
        }
    }
}

impl<E: Debug> From<Error<E>> for crate::error::Error {
    fn from(error: Error<E>) -> Self {
        crate::error::Error::Touch(error.kind())
    }
}
