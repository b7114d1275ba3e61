use super::*;
use crate::Width;
use crate::gameplay::Decision;
use rand::RngCore;

/// Prefers narrowing; only quotes once the range is tight around its estimate.
#[derive(Debug, Clone)]
pub struct Passive(Snapshot);

impl From<Snapshot> for Passive {
    fn from(snapshot: Snapshot) -> Self {
        Self(snapshot)
    }
}

impl Policy for Passive {
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
