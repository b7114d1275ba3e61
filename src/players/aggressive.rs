use super::*;
use crate::Width;
use crate::gameplay::Decision;
use rand::RngCore;

/// Quotes readily and narrows hard.
#[derive(Debug, Clone)]
pub struct Aggressive(Snapshot);

impl From<Snapshot> for Aggressive {
    fn from(snapshot: Snapshot) -> Self {
        Self(snapshot)
    }
}

impl Policy for Aggressive {
    fn snapshot(&self) -> &Snapshot {
        &self.0
    }
    fn snapshot_mut(&mut self) -> &mut Snapshot {
        &mut self.0
    }
    fn into_snapshot(self: Box<Self>) -> Snapshot {
        self.0
    }
    fn update_belief(&mut self, decision: Decision, width: Width, _: &mut dyn RngCore) {
        if decision == Decision::ReduceWidth {
            self.0.current_estimate = converge(self.0.current_estimate, self.0.true_value, width);
            let line = format!("Belief updated, estimate {:.2}", self.0.current_estimate);
            self.0.record(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn narrowing_pulls_estimate_to_truth() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut snapshot = Snapshot::new(Strategy::Aggressive, Strategy::Aggressive.profile(), 100., false, rng);
        snapshot.current_estimate = 130.;
        let mut bot = Aggressive::from(snapshot);
        bot.update_belief(Decision::ReduceWidth, 1, rng);
        assert!(bot.estimate() == (130. * 2. + 100.) / 3.);
        assert!(bot.snapshot().log.len() == 1);
    }

    #[test]
    fn market_election_changes_nothing() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let snapshot = Snapshot::new(Strategy::Aggressive, Strategy::Aggressive.profile(), 100., false, rng);
        let before = snapshot.current_estimate;
        let mut bot = Aggressive::from(snapshot);
        bot.update_belief(Decision::MakeMarket, 40, rng);
        assert!(bot.estimate() == before);
        assert!(bot.snapshot().log.is_empty());
    }
}
