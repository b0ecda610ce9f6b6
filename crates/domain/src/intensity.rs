use derive_more::{Display, Into};

use crate::zone::Zone;

/// Intensity of a set as a percentage of the one-rep max.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Intensity(u8);

impl Intensity {
    pub fn new(value: u8) -> Result<Self, IntensityError> {
        if value > 100 {
            return Err(IntensityError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Total constructor for values derived by stepping, capped at 100 %.
    pub(crate) fn clamped(value: u8) -> Self {
        Self(value.min(100))
    }

    #[must_use]
    pub fn percent(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn zone(self) -> Zone {
        Zone::of(self)
    }

    /// The load formula divides by `100 - intensity`, so 100 % is degenerate.
    #[must_use]
    pub fn is_maximal(self) -> bool {
        self.0 == 100
    }
}

impl TryFrom<&str> for Intensity {
    type Error = IntensityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u8>() {
            Ok(parsed_value) => Intensity::new(parsed_value),
            Err(_) => Err(IntensityError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum IntensityError {
    #[error("Intensity must be in the range 0 to 100 %")]
    OutOfRange,
    #[error("Intensity must be an integer")]
    ParseError,
}
