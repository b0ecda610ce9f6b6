use derive_more::{Display, Into};

use crate::Intensity;

/// Weight on the bar in kilograms.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !(0.0..1000.0).contains(&value) {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// The fraction of this weight prescribed at `intensity`.
    #[must_use]
    pub fn at_intensity(self, intensity: Intensity) -> Weight {
        Weight(self.0 * f32::from(intensity.percent()) / 100.0)
    }

    /// Nearest weight loadable with 1.25 kg plate pairs.
    #[must_use]
    pub fn rounded_to_plates(self) -> Weight {
        Weight((self.0 / 2.5).round() * 2.5)
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be in the range 0.0 to 999.9 kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}
