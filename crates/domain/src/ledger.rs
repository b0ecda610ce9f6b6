use std::collections::BTreeMap;

use crate::Zone;

/// Cumulative reps issued per zone over one session.
///
/// The ledger is the only state shared between the warm-up, work and
/// back-off phases. Counts only ever grow; a zone whose count has reached
/// its optimal rep number is saturated and stops further prescription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneLedger(BTreeMap<Zone, u32>);

impl ZoneLedger {
    #[must_use]
    pub fn new() -> Self {
        Self(Zone::iter().map(|zone| (*zone, 0)).collect())
    }

    pub fn add(&mut self, zone: Zone, reps: u32) {
        *self.0.entry(zone).or_insert(0) += reps;
    }

    #[must_use]
    pub fn count(&self, zone: Zone) -> u32 {
        self.0.get(&zone).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn is_saturated(&self, zone: Zone) -> bool {
        self.count(zone) >= zone.rep_range().optimal
    }

    pub fn entries(&self) -> impl Iterator<Item = (Zone, u32)> + '_ {
        self.0.iter().map(|(zone, reps)| (*zone, *reps))
    }
}

impl Default for ZoneLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_ledger_starts_with_all_zones_at_zero() {
        let ledger = ZoneLedger::new();

        assert_eq!(
            ledger.entries().collect::<Vec<_>>(),
            vec![
                (Zone::Light, 0),
                (Zone::Moderate, 0),
                (Zone::Heavy, 0),
                (Zone::Maximal, 0)
            ]
        );
    }

    #[test]
    fn test_ledger_accumulates() {
        let mut ledger = ZoneLedger::new();

        ledger.add(Zone::Heavy, 3);
        ledger.add(Zone::Heavy, 4);
        ledger.add(Zone::Heavy, 2);

        assert_eq!(ledger.count(Zone::Heavy), 9);
    }

    #[test]
    fn test_ledger_isolation() {
        let mut ledger = ZoneLedger::new();

        ledger.add(Zone::Moderate, 6);

        assert_eq!(ledger.count(Zone::Light), 0);
        assert_eq!(ledger.count(Zone::Heavy), 0);
        assert_eq!(ledger.count(Zone::Maximal), 0);
    }

    #[rstest]
    #[case(Zone::Heavy, 14, false)]
    #[case(Zone::Heavy, 15, true)]
    #[case(Zone::Heavy, 16, true)]
    #[case(Zone::Maximal, 7, true)]
    fn test_ledger_saturation(#[case] zone: Zone, #[case] reps: u32, #[case] expected: bool) {
        let mut ledger = ZoneLedger::new();

        ledger.add(zone, reps);

        assert_eq!(ledger.is_saturated(zone), expected);
    }
}
