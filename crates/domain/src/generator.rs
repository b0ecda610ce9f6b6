use crate::{Intensity, Load, Set, Weight, ZoneLedger, zone::RepRange};

/// Rep-count selection within a zone's rep range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoadPolicy {
    /// Always a single rep.
    Minimal,
    /// The low end of the rep range.
    Low,
    /// Halfway up the rep range, rounded up.
    Normal,
    /// The high end of the rep range.
    High,
}

impl LoadPolicy {
    #[must_use]
    pub fn reps(self, range: RepRange) -> u32 {
        match self {
            LoadPolicy::Minimal => 1,
            LoadPolicy::Low => range.low,
            LoadPolicy::Normal => range.low + (range.high - range.low).div_ceil(2),
            LoadPolicy::High => range.high,
        }
    }
}

impl TryFrom<&str> for LoadPolicy {
    type Error = LoadPolicyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "minimal" => Ok(LoadPolicy::Minimal),
            "low" => Ok(LoadPolicy::Low),
            "normal" => Ok(LoadPolicy::Normal),
            "high" => Ok(LoadPolicy::High),
            _ => Err(LoadPolicyError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LoadPolicyError {
    #[error("Unknown load policy \"{0}\"")]
    Unknown(String),
}

/// Tunable behavior of one generation phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub start: Intensity,
    pub end: Intensity,
    /// Intensity increment between groups of sets.
    pub step: u8,
    /// Sets per intensity step; 0 keeps emitting at the same intensity
    /// until another stop condition fires.
    pub sets_per_step: u32,
    pub policy: LoadPolicy,
    /// Load already accumulated by prior phases.
    pub initial_load: Load,
    pub target_load: Load,
    /// Force single-rep sets at or above this intensity.
    pub singles_from: Option<Intensity>,
    /// Step past saturated zones instead of ending the sequence.
    pub descend_on_saturation: bool,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GeneratorError {
    #[error("Intensity step size must not be zero")]
    ZeroStep,
}

/// Lazy, finite producer of prescribed sets for one phase.
///
/// Emission stops as soon as any of three conditions holds: the intensity
/// has crossed past the configured end, the running load total exceeds the
/// target, or the current zone has reached its optimal rep count in the
/// shared ledger. A generator is not resumable; restart by constructing a
/// fresh one.
pub struct SetGenerator<'a> {
    config: GeneratorConfig,
    one_rep_max: Weight,
    ledger: &'a mut ZoneLedger,
    current: i16,
    sets_in_step: u32,
    total: Load,
    produced: Load,
    goal_reached: bool,
    in_optimal_range: bool,
}

impl<'a> SetGenerator<'a> {
    /// Intensity the warm-up ramp is anchored at.
    pub const WARMUP_BASE: u8 = 50;
    /// Warm-up sets at or above this intensity are always singles.
    pub const WARMUP_SINGLES_FROM: u8 = 75;
    /// Warm-up sets per intensity step.
    pub const WARMUP_SETS_PER_STEP: u32 = 2;
    /// Intensity increment between groups of sets.
    pub const STEP: u8 = 10;
    /// Back-off never descends below this intensity.
    pub const BACKOFF_FLOOR: u8 = 50;

    pub fn new(
        config: GeneratorConfig,
        one_rep_max: Weight,
        ledger: &'a mut ZoneLedger,
    ) -> Result<Self, GeneratorError> {
        if config.step == 0 {
            return Err(GeneratorError::ZeroStep);
        }

        Ok(Self::unvalidated(config, one_rep_max, ledger))
    }

    /// Ascending ramp from `50 + (peak mod 10)` up to `peak - 10`.
    #[must_use]
    pub fn warmup(
        peak: Intensity,
        policy: LoadPolicy,
        target_load: Load,
        one_rep_max: Weight,
        ledger: &'a mut ZoneLedger,
    ) -> Self {
        Self::unvalidated(
            GeneratorConfig {
                start: Intensity::clamped(Self::WARMUP_BASE + peak.percent() % 10),
                end: Intensity::clamped(peak.percent().saturating_sub(Self::STEP)),
                step: Self::STEP,
                sets_per_step: Self::WARMUP_SETS_PER_STEP,
                policy,
                initial_load: Load::NONE,
                target_load,
                singles_from: Some(Intensity::clamped(Self::WARMUP_SINGLES_FROM)),
                descend_on_saturation: false,
            },
            one_rep_max,
            ledger,
        )
    }

    /// Sets at the peak intensity until the peak zone saturates or the
    /// load target is exceeded.
    #[must_use]
    pub fn work(
        peak: Intensity,
        policy: LoadPolicy,
        initial_load: Load,
        target_load: Load,
        one_rep_max: Weight,
        ledger: &'a mut ZoneLedger,
    ) -> Self {
        Self::unvalidated(
            GeneratorConfig {
                start: peak,
                end: peak,
                step: Self::STEP,
                sets_per_step: 0,
                policy,
                initial_load,
                target_load,
                singles_from: None,
                descend_on_saturation: false,
            },
            one_rep_max,
            ledger,
        )
    }

    /// Descending taper from `peak - 10` toward the 50 % floor, always at
    /// the high end of each zone's rep range.
    #[must_use]
    pub fn backoff(
        peak: Intensity,
        initial_load: Load,
        target_load: Load,
        one_rep_max: Weight,
        ledger: &'a mut ZoneLedger,
    ) -> Self {
        let start = Intensity::clamped(peak.percent().saturating_sub(Self::STEP));
        let end = Intensity::clamped(Self::BACKOFF_FLOOR);
        let mut generator = Self::unvalidated(
            GeneratorConfig {
                start,
                end,
                step: Self::STEP,
                sets_per_step: 0,
                policy: LoadPolicy::High,
                initial_load,
                target_load,
                singles_from: None,
                descend_on_saturation: true,
            },
            one_rep_max,
            ledger,
        );
        // descending from below the floor is meaningless
        generator.goal_reached = start < end;
        generator
    }

    fn unvalidated(config: GeneratorConfig, one_rep_max: Weight, ledger: &'a mut ZoneLedger) -> Self {
        Self {
            current: i16::from(config.start.percent()),
            sets_in_step: 0,
            total: config.initial_load,
            produced: Load::NONE,
            goal_reached: false,
            in_optimal_range: true,
            config,
            one_rep_max,
            ledger,
        }
    }

    /// Load accumulated by this generator's own sets, excluding the seed.
    #[must_use]
    pub fn produced(&self) -> Load {
        self.produced
    }

    fn current_intensity(&self) -> Option<Intensity> {
        u8::try_from(self.current)
            .ok()
            .and_then(|value| Intensity::new(value).ok())
    }
}

impl Iterator for SetGenerator<'_> {
    type Item = Set;

    fn next(&mut self) -> Option<Set> {
        if self.goal_reached || self.total > self.config.target_load || !self.in_optimal_range {
            return None;
        }

        if self.config.descend_on_saturation {
            while self
                .current_intensity()
                .is_some_and(|intensity| self.ledger.is_saturated(intensity.zone()))
            {
                self.current -= i16::from(self.config.step);
            }
            if self.current < i16::from(self.config.end.percent()) {
                self.goal_reached = true;
                return None;
            }
        }

        let intensity = self.current_intensity()?;
        let zone = intensity.zone();
        let mut reps = self.config.policy.reps(zone.rep_range());
        if let Some(threshold) = self.config.singles_from {
            if intensity >= threshold {
                reps = 1;
            }
        }

        let Ok(set) = Set::new(intensity, reps, self.one_rep_max) else {
            self.goal_reached = true;
            return None;
        };

        self.total += set.load();
        self.produced += set.load();
        self.ledger.add(zone, reps);

        if !self.config.descend_on_saturation && self.ledger.is_saturated(zone) {
            self.in_optimal_range = false;
        }

        self.sets_in_step += 1;
        if self.config.sets_per_step > 0 && self.sets_in_step == self.config.sets_per_step {
            self.sets_in_step = 0;
            if self.config.start < self.config.end {
                self.current += i16::from(self.config.step);
            } else if self.config.start > self.config.end {
                self.current -= i16::from(self.config.step);
            } else {
                self.goal_reached = true;
            }
        }

        let end = i16::from(self.config.end.percent());
        if self.config.start < self.config.end && self.current > end
            || self.config.start > self.config.end && self.current < end
        {
            self.goal_reached = true;
        }

        Some(set)
    }
}
