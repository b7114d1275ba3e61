use super::*;
use crate::Width;
use crate::gameplay::Decision;
use rand::RngCore;

/// Holds out for a narrow width before it will quote.
#[derive(Debug, Clone)]
pub struct Hater(Snapshot);

impl From<Snapshot> for Hater {
    fn from(snapshot: Snapshot) -> Self {
        Self(snapshot)
    }
}

impl Policy for Hater {
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
        0.2
    }
    fn update_belief(&mut self, decision: Decision, width: Width, _: &mut dyn RngCore) {
        if decision == Decision::ReduceWidth {
            absorb(&mut self.0, width);
        }
    }
}
