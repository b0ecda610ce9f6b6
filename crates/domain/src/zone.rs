use std::slice::Iter;

use crate::Intensity;

/// Prilepin intensity band.
///
/// | Zone     | Intensity | Rep range | Optimal | Max |
/// |----------|-----------|-----------|---------|-----|
/// | Light    | <70%      | 3-6       | 24      | 30  |
/// | Moderate | 70-79%    | 3-6       | 18      | 24  |
/// | Heavy    | 80-89%    | 2-4       | 15      | 20  |
/// | Maximal  | >=90%     | 1-2       | 7       | 10  |
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Zone {
    Light,
    Moderate,
    Heavy,
    Maximal,
}

impl Zone {
    #[must_use]
    pub fn of(intensity: Intensity) -> Zone {
        match intensity.percent() {
            0..=69 => Zone::Light,
            70..=79 => Zone::Moderate,
            80..=89 => Zone::Heavy,
            _ => Zone::Maximal,
        }
    }

    #[must_use]
    pub fn rep_range(self) -> RepRange {
        match self {
            Zone::Light => RepRange {
                low: 3,
                high: 6,
                optimal: 24,
                max: 30,
            },
            Zone::Moderate => RepRange {
                low: 3,
                high: 6,
                optimal: 18,
                max: 24,
            },
            Zone::Heavy => RepRange {
                low: 2,
                high: 4,
                optimal: 15,
                max: 20,
            },
            Zone::Maximal => RepRange {
                low: 1,
                high: 2,
                optimal: 7,
                max: 10,
            },
        }
    }

    #[must_use]
    pub fn band(self) -> &'static str {
        match self {
            Zone::Light => "<70%",
            Zone::Moderate => "70-79%",
            Zone::Heavy => "80-89%",
            Zone::Maximal => ">=90%",
        }
    }

    pub fn iter() -> Iter<'static, Zone> {
        static ZONES: [Zone; 4] = [Zone::Light, Zone::Moderate, Zone::Heavy, Zone::Maximal];
        ZONES.iter()
    }
}

/// Recommended repetitions per set and per session within a zone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RepRange {
    pub low: u32,
    pub high: u32,
    pub optimal: u32,
    pub max: u32,
}
