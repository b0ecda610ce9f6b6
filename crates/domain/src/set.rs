use crate::{Intensity, Load, Weight};

/// Lowest intensity whose sets count toward the load budget.
pub const MIN_COUNTED_INTENSITY: u8 = 50;

/// One prescribed set, immutable once created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    intensity: Intensity,
    reps: u32,
    weight: Weight,
    load: Load,
}

impl Set {
    pub fn new(intensity: Intensity, reps: u32, one_rep_max: Weight) -> Result<Self, SetError> {
        if intensity.is_maximal() {
            return Err(SetError::MaximalIntensity);
        }

        Ok(Self {
            intensity,
            reps,
            weight: one_rep_max.at_intensity(intensity).rounded_to_plates(),
            load: Load::of_reps(intensity, reps),
        })
    }

    #[must_use]
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    #[must_use]
    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Prescribed weight, rounded to the nearest 2.5 kg.
    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn load(&self) -> Load {
        self.load
    }

    /// The load contribution toward the session budget. Sets below 50 %
    /// intensity never count.
    #[must_use]
    pub fn counted_load(&self) -> Load {
        if self.intensity.percent() >= MIN_COUNTED_INTENSITY {
            self.load
        } else {
            Load::NONE
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SetError {
    #[error("The load of a set at 100 % intensity is undefined")]
    MaximalIntensity,
}

/// Ordered, append-only collection of sets in generation order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetSequence(Vec<Set>);

impl SetSequence {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, set: Set) {
        self.0.push(set);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Set> {
        self.0.iter()
    }

    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.0.iter().map(Set::reps).sum()
    }

    /// Aggregate load of all sets at or above 50 % intensity.
    #[must_use]
    pub fn total_load(&self) -> Load {
        self.0.iter().map(Set::counted_load).sum()
    }
}

impl<'a> IntoIterator for &'a SetSequence {
    type Item = &'a Set;
    type IntoIter = std::slice::Iter<'a, Set>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Extend<Set> for SetSequence {
    fn extend<T: IntoIterator<Item = Set>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
