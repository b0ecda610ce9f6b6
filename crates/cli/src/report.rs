use repforge_domain::{Intensity, Load, Phase, SessionPlan, Set, Weight};

pub fn print(plan: &SessionPlan, peak: Intensity, target_load: Load, one_rep_max: Weight) {
    println!("{}% peak for target INOL {target_load} with one-rep max {one_rep_max} kg", peak.percent());

    for phase in Phase::ALL {
        let sets = plan.phase(phase);
        if sets.is_empty() {
            continue;
        }

        println!();
        println!("---- {phase}");
        for set in sets {
            println!("{}", format_set(set));
        }
    }

    let totals = plan.totals();
    println!();
    println!("Statistics:");
    println!("* Warm-up: {}", totals.warmup);
    println!("* Work: {}", totals.work);
    if !plan.phase(Phase::Backoff).is_empty() {
        println!("* Back-off: {}", totals.backoff);
    }
    println!("Total: {}", totals.overall());

    println!();
    println!("Reps:");
    for usage in plan.zone_usage() {
        println!(
            "* {}: {} of {} optimal",
            usage.zone.band(),
            usage.reps,
            usage.optimal
        );
    }

    println!();
    println!(
        "Total INOL {} at peak intensity {}%",
        plan.achieved_load(),
        peak.percent()
    );
}

fn format_set(set: &Set) -> String {
    format!(
        "{:>3}%: {:>6.1} kg x {:<2} INOL {}",
        set.intensity().percent(),
        f32::from(set.weight()),
        set.reps(),
        set.load()
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use repforge_domain::{Intensity, Weight};

    use super::*;

    #[test]
    fn test_format_set() {
        let set = Set::new(
            Intensity::new(80).unwrap(),
            3,
            Weight::new(100.0).unwrap(),
        )
        .unwrap();

        assert_eq!(format_set(&set), " 80%:   80.0 kg x 3  INOL 0.15");
    }
}
