use super::*;
use crate::Width;
use crate::gameplay::Decision;
use crate::gameplay::Quote;
use crate::gameplay::Trade;
use rand::Rng;
use rand::RngCore;

/// Flips coins where the others reason.
///
/// Unless `frozen`, narrowing still nudges the estimate toward the truth with
/// randomized weights.
#[derive(Debug, Clone)]
pub struct Random(Snapshot);

impl From<Snapshot> for Random {
    fn from(snapshot: Snapshot) -> Self {
        Self(snapshot)
    }
}

impl Policy for Random {
    fn snapshot(&self) -> &Snapshot {
        &self.0
    }
    fn snapshot_mut(&mut self) -> &mut Snapshot {
        &mut self.0
    }
    fn into_snapshot(self: Box<Self>) -> Snapshot {
        self.0
    }
    fn update_belief(&mut self, decision: Decision, width: Width, rng: &mut dyn RngCore) {
        if decision != Decision::ReduceWidth {
            return;
        }
        if self.0.frozen {
            self.0.record(String::from("Belief not updated"));
            return;
        }
        let inertia = rng.random_range(1. ..=width as f64 + 1.);
        let pull = rng.random_range(0. ..=1.);
        self.0.current_estimate =
            (self.0.current_estimate * inertia + self.0.true_value * pull) / (inertia + pull);
        let line = format!("Belief updated, estimate {:.2}", self.0.current_estimate);
        self.0.record(line);
    }
    fn choose_action(&mut self, width: Width, rng: &mut dyn RngCore) -> Decision {
        let decision = Decision::random(rng);
        let line = format!("Width {}, estimate {:.2}: {}", width, self.estimate(), decision);
        self.0.record(line);
        decision
    }
    fn trade(&mut self, quote: &Quote, rng: &mut dyn RngCore) -> Trade {
        let estimate = self.estimate();
        let trade = if estimate > quote.ask {
            Trade::Buy
        } else if estimate < quote.bid {
            Trade::Sell
        } else {
            Trade::random(rng)
        };
        let line = format!("Estimate {:.2} against {}: {}", estimate, quote, trade);
        self.0.record(line);
        trade
    }
}
