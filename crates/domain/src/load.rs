use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use derive_more::Into;

use crate::Intensity;

/// INOL training-load score of one or more sets.
///
/// One set contributes `reps / (100 - intensity)`.
#[derive(Debug, Default, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Load(f32);

impl Load {
    pub const NONE: Load = Load(0.0);

    pub fn new(value: f32) -> Result<Self, LoadError> {
        if !value.is_finite() || value < 0.0 {
            return Err(LoadError::OutOfRange);
        }

        Ok(Self(value))
    }

    /// Contribution of `reps` repetitions at `intensity`.
    ///
    /// Callers must rule out 100 % intensity first.
    pub(crate) fn of_reps(intensity: Intensity, reps: u32) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let reps = reps as f32;
        Self(reps / f32::from(100 - intensity.percent()))
    }
}

impl TryFrom<&str> for Load {
    type Error = LoadError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Load::new(parsed_value),
            Err(_) => Err(LoadError::ParseError),
        }
    }
}

impl Add for Load {
    type Output = Load;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Load {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self(self.0 + rhs.0);
    }
}

impl Sum for Load {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Load::NONE, Add::add)
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LoadError {
    #[error("Load must be a non-negative number")]
    OutOfRange,
    #[error("Load must be a decimal")]
    ParseError,
}
