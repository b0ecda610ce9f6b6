use std::fmt;

use log::debug;

use crate::{
    Intensity, Load, LoadPolicy, Set, SetGenerator, SetSequence, Weight, Zone, ZoneLedger,
};

/// Sessions below this target load or at this peak and above keep the
/// per-set rep count low.
const NORMAL_POLICY_MIN_LOAD: f32 = 1.0;
const NORMAL_POLICY_MAX_PEAK: u8 = 90;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Warmup,
    Work,
    Backoff,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Warmup, Phase::Work, Phase::Backoff];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Warmup => "Warm-up",
            Phase::Work => "Work",
            Phase::Backoff => "Back-off",
        })
    }
}

/// Load accumulated by each phase's own sets.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PhaseTotals {
    pub warmup: Load,
    pub work: Load,
    pub backoff: Load,
}

impl PhaseTotals {
    #[must_use]
    pub fn of(&self, phase: Phase) -> Load {
        match phase {
            Phase::Warmup => self.warmup,
            Phase::Work => self.work,
            Phase::Backoff => self.backoff,
        }
    }

    #[must_use]
    pub fn overall(&self) -> Load {
        self.warmup + self.work + self.backoff
    }
}

/// Reps issued to a zone compared to its optimal rep count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneUsage {
    pub zone: Zone,
    pub reps: u32,
    pub optimal: u32,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlanError {
    #[error("A session cannot peak at 100 % intensity")]
    MaximalPeak,
    #[error("The one-rep max must be positive")]
    NonPositiveOneRepMax,
}

/// One prescribed session: warm-up, work and back-off sets in order.
///
/// The plan owns the zone ledger its phases wrote to; phase order matters,
/// as earlier phases determine which zones are already saturated for later
/// ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    warmup: SetSequence,
    work: SetSequence,
    backoff: SetSequence,
    totals: PhaseTotals,
    ledger: ZoneLedger,
}

impl SessionPlan {
    pub fn generate(
        peak: Intensity,
        target_load: Load,
        one_rep_max: Weight,
    ) -> Result<Self, PlanError> {
        if peak.is_maximal() {
            return Err(PlanError::MaximalPeak);
        }

        if f32::from(one_rep_max) <= 0.0 {
            return Err(PlanError::NonPositiveOneRepMax);
        }

        let policy = if f32::from(target_load) >= NORMAL_POLICY_MIN_LOAD
            && peak.percent() < NORMAL_POLICY_MAX_PEAK
        {
            LoadPolicy::Normal
        } else {
            LoadPolicy::Low
        };

        let mut ledger = ZoneLedger::new();

        let (warmup, warmup_load) = {
            let mut generator =
                SetGenerator::warmup(peak, policy, target_load, one_rep_max, &mut ledger);
            let mut sequence = SetSequence::new();
            sequence.extend(generator.by_ref());
            (sequence, generator.produced())
        };
        debug!("warm-up phase: {} sets, load {warmup_load}", warmup.len());

        let (work, work_load) = {
            let mut generator = SetGenerator::work(
                peak,
                policy,
                warmup_load,
                target_load,
                one_rep_max,
                &mut ledger,
            );
            let mut sequence = SetSequence::new();
            sequence.extend(generator.by_ref());
            (sequence, generator.produced())
        };
        debug!("work phase: {} sets, load {work_load}", work.len());

        let (backoff, backoff_load) = {
            let mut generator = SetGenerator::backoff(
                peak,
                warmup_load + work_load,
                target_load,
                one_rep_max,
                &mut ledger,
            );
            let mut sequence = SetSequence::new();
            sequence.extend(generator.by_ref());
            (sequence, generator.produced())
        };
        debug!("back-off phase: {} sets, load {backoff_load}", backoff.len());

        Ok(Self {
            warmup,
            work,
            backoff,
            totals: PhaseTotals {
                warmup: warmup_load,
                work: work_load,
                backoff: backoff_load,
            },
            ledger,
        })
    }

    #[must_use]
    pub fn phase(&self, phase: Phase) -> &SetSequence {
        match phase {
            Phase::Warmup => &self.warmup,
            Phase::Work => &self.work,
            Phase::Backoff => &self.backoff,
        }
    }

    /// All sets in phase order.
    pub fn sets(&self) -> impl Iterator<Item = &Set> {
        self.warmup.iter().chain(&self.work).chain(&self.backoff)
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.warmup.len() + self.work.len() + self.backoff.len()
    }

    #[must_use]
    pub fn total_reps(&self) -> u32 {
        self.warmup.total_reps() + self.work.total_reps() + self.backoff.total_reps()
    }

    #[must_use]
    pub fn totals(&self) -> PhaseTotals {
        self.totals
    }

    /// Aggregate load of all sets at or above 50 % intensity.
    #[must_use]
    pub fn achieved_load(&self) -> Load {
        self.warmup.total_load() + self.work.total_load() + self.backoff.total_load()
    }

    #[must_use]
    pub fn zone_usage(&self) -> Vec<ZoneUsage> {
        self.ledger
            .entries()
            .map(|(zone, reps)| ZoneUsage {
                zone,
                reps,
                optimal: zone.rep_range().optimal,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn intensity(percent: u8) -> Intensity {
        Intensity::new(percent).unwrap()
    }

    fn load(value: f32) -> Load {
        Load::new(value).unwrap()
    }

    fn one_rep_max() -> Weight {
        Weight::new(100.0).unwrap()
    }

    fn generate(peak: u8, target: f32) -> SessionPlan {
        SessionPlan::generate(intensity(peak), load(target), one_rep_max()).unwrap()
    }

    fn percents(sequence: &SetSequence) -> Vec<u8> {
        sequence.iter().map(|s| s.intensity().percent()).collect()
    }

    fn reps(sequence: &SetSequence) -> Vec<u32> {
        sequence.iter().map(Set::reps).collect()
    }

    #[test]
    fn test_maximal_peak_rejected() {
        assert_eq!(
            SessionPlan::generate(intensity(100), load(1.5), one_rep_max()),
            Err(PlanError::MaximalPeak)
        );
    }

    #[test]
    fn test_non_positive_one_rep_max_rejected() {
        assert_eq!(
            SessionPlan::generate(intensity(80), load(1.5), Weight::new(0.0).unwrap()),
            Err(PlanError::NonPositiveOneRepMax)
        );
    }

    #[test]
    fn test_moderate_session() {
        let plan = generate(80, 1.5);

        // target >= 1.0 and peak < 90 select the normal policy
        assert_eq!(
            percents(plan.phase(Phase::Warmup)),
            vec![50, 50, 60, 60, 70, 70]
        );
        assert_eq!(reps(plan.phase(Phase::Warmup)), vec![5, 5, 5, 5, 5, 5]);
        assert_eq!(percents(plan.phase(Phase::Work)), vec![80, 80, 80, 80, 80]);
        assert_eq!(reps(plan.phase(Phase::Work)), vec![3, 3, 3, 3, 3]);
        assert!(plan.phase(Phase::Backoff).is_empty());

        assert_approx_eq!(f32::from(plan.totals().warmup), 0.783_333, 1e-4);
        assert_approx_eq!(f32::from(plan.totals().work), 0.75, 1e-4);
        assert_approx_eq!(f32::from(plan.totals().overall()), 1.533_333, 1e-4);
        assert_approx_eq!(f32::from(plan.achieved_load()), 1.533_333, 1e-4);
        assert_eq!(plan.num_sets(), 11);
        assert_eq!(plan.total_reps(), 45);
    }

    #[test]
    fn test_heavy_session() {
        let plan = generate(95, 2.0);

        // peak >= 90 selects the low policy, warm-up goes to singles at 75
        assert_eq!(
            percents(plan.phase(Phase::Warmup)),
            vec![55, 55, 65, 65, 75, 75, 85, 85]
        );
        assert_eq!(
            reps(plan.phase(Phase::Warmup)),
            vec![3, 3, 3, 3, 1, 1, 1, 1]
        );
        assert_eq!(percents(plan.phase(Phase::Work)), vec![95; 7]);
        assert_eq!(reps(plan.phase(Phase::Work)), vec![1; 7]);
        assert_eq!(percents(plan.phase(Phase::Backoff)), vec![85]);
        assert_eq!(reps(plan.phase(Phase::Backoff)), vec![4]);

        assert_approx_eq!(f32::from(plan.totals().warmup), 0.518_095, 1e-4);
        assert_approx_eq!(f32::from(plan.totals().work), 1.4, 1e-4);
        assert_approx_eq!(f32::from(plan.totals().backoff), 0.266_667, 1e-4);
        assert_approx_eq!(f32::from(plan.achieved_load()), 2.184_762, 1e-4);
    }

    #[test]
    fn test_backoff_tapers_across_zones() {
        let plan = generate(90, 3.0);

        assert_eq!(
            percents(plan.phase(Phase::Warmup)),
            vec![50, 50, 60, 60, 70, 70, 80, 80]
        );
        assert_eq!(
            reps(plan.phase(Phase::Warmup)),
            vec![3, 3, 3, 3, 3, 3, 1, 1]
        );
        assert_eq!(percents(plan.phase(Phase::Work)), vec![90; 7]);
        assert_eq!(
            percents(plan.phase(Phase::Backoff)),
            vec![80, 80, 80, 80, 70, 70, 60, 60]
        );
        assert_eq!(
            reps(plan.phase(Phase::Backoff)),
            vec![4, 4, 4, 4, 6, 6, 6, 6]
        );

        assert_approx_eq!(f32::from(plan.achieved_load()), 3.036_667, 1e-4);
    }

    #[rstest]
    #[case(80, 1.5)]
    #[case(90, 3.0)]
    #[case(95, 2.0)]
    #[case(75, 0.8)]
    fn test_achieved_load_converges(#[case] peak: u8, #[case] target: f32) {
        let plan = generate(peak, target);

        // the overshoot is bounded by one worst-case set contribution
        let worst_case = plan
            .sets()
            .map(|set| f32::from(set.load()))
            .fold(0.0, f32::max);
        assert!(f32::from(plan.achieved_load()) - target <= worst_case);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(generate(80, 1.5), generate(80, 1.5));
        assert_eq!(generate(95, 2.0), generate(95, 2.0));
    }

    #[test]
    fn test_zone_usage_reports_all_zones() {
        let plan = generate(80, 1.5);
        let usage = plan.zone_usage();

        assert_eq!(usage.len(), 4);
        assert_eq!(
            usage
                .iter()
                .map(|u| (u.zone, u.reps, u.optimal))
                .collect::<Vec<_>>(),
            vec![
                (Zone::Light, 20, 24),
                (Zone::Moderate, 10, 18),
                (Zone::Heavy, 15, 15),
                (Zone::Maximal, 0, 7)
            ]
        );
    }
}
