#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod generator;
mod intensity;
mod ledger;
mod load;
mod session;
mod set;
mod sink;
mod weight;
mod zone;

pub use generator::{GeneratorConfig, GeneratorError, LoadPolicy, LoadPolicyError, SetGenerator};
pub use intensity::{Intensity, IntensityError};
pub use ledger::ZoneLedger;
pub use load::{Load, LoadError};
pub use session::{Phase, PhaseTotals, PlanError, SessionPlan, ZoneUsage};
pub use set::{MIN_COUNTED_INTENSITY, Set, SetError, SetSequence};
pub use sink::{SetSink, SinkError};
pub use weight::{Weight, WeightError};
pub use zone::{RepRange, Zone};
