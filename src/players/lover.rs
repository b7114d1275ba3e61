use super::*;
use crate::Price;
use crate::Width;
use crate::gameplay::Decision;
use rand::RngCore;

/// Quotes at the slightest excuse and leans its quotes against the bias it
/// reads into the other side's narrowing.
#[derive(Debug, Clone)]
pub struct Lover(Snapshot);

impl From<Snapshot> for Lover {
    fn from(snapshot: Snapshot) -> Self {
        Self(snapshot)
    }
}

impl Policy for Lover {
    fn snapshot(&self) -> &Snapshot {
        &self.0
    }
    fn snapshot_mut(&mut self) -> &mut Snapshot {
        &mut self.0
    }
    fn into_snapshot(self: Box<Self>) -> Snapshot {
        self.0
    }
    fn tolerance(&self) -> f64 {
        1.5
    }
    fn skew(&self) -> Price {
        self.0.player_bias
    }
    fn update_belief(&mut self, decision: Decision, width: Width, _: &mut dyn RngCore) {
        if decision == Decision::ReduceWidth {
            absorb(&mut self.0, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn lover(estimate: Price) -> Lover {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut snapshot = Snapshot::new(Strategy::MarketLover, Strategy::MarketLover.profile(), 100., false, rng);
        snapshot.current_estimate = estimate;
        Lover::from(snapshot)
    }

    #[test]
    fn narrowing_moves_bias_and_estimate() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut bot = lover(120.);
        bot.update_belief(Decision::ReduceWidth, 140, rng);
        assert!(bot.snapshot().player_bias == -10.);
        assert!(bot.estimate() == 95.);
    }

    #[test]
    fn quote_is_skewed_by_bias() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut bot = lover(120.);
        bot.update_belief(Decision::ReduceWidth, 140, rng);
        // center = 95 - (-10)
        let quote = bot.make_market(20);
        assert!(quote.bid == 95.);
        assert!(quote.ask == 115.);
    }

    #[test]
    fn tolerant_threshold() {
        let bot = lover(100.);
        assert!((bot.risk_threshold() - 100. * 0.5 * 0.9 * 1.5).abs() < 1e-9);
    }
}
