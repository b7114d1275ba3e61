use super::*;
use crate::Price;
use crate::gameplay::Error;
use rand::Rng;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;

/// Everything a bot needs to survive between turns.
///
/// Turns are handled statelessly: the snapshot is stored inside the game after
/// every bot action and a fresh [`Policy`] is revived from it at the start of
/// the next. `strategy` is the discriminator that decides which policy owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub strategy: Strategy,
    pub true_value: Price,
    pub estimate_noise: f64,
    pub std_dev_multiplier: f64,
    pub width_reduction_multiplier: f64,
    pub market_willingness: f64,
    pub current_estimate: Price,
    /// Running skew learned from the other side's narrowing.
    #[serde(default)]
    pub player_bias: Price,
    /// RandomBot only: leave the estimate alone when the other side narrows.
    #[serde(default)]
    pub frozen: bool,
    pub log: Vec<String>,
}

impl Snapshot {
    /// Fresh bot for a round whose answer is `truth`.
    pub fn new(
        strategy: Strategy,
        profile: Profile,
        truth: Price,
        frozen: bool,
        rng: &mut dyn RngCore,
    ) -> Self {
        Self {
            strategy,
            true_value: truth,
            estimate_noise: profile.noise,
            std_dev_multiplier: profile.std_dev_multiplier,
            width_reduction_multiplier: profile.width_reduction_multiplier,
            market_willingness: profile.market_willingness,
            current_estimate: Self::estimate(truth, profile.noise, rng),
            player_bias: 0.,
            frozen,
            log: Vec::new(),
        }
    }
    /// Same temperament and parameters, new question.
    pub fn renew(&self, truth: Price, rng: &mut dyn RngCore) -> Self {
        Self::new(self.strategy, self.profile(), truth, self.frozen, rng)
    }
    /// `truth * (1 + U(-noise, noise))`
    pub fn estimate(truth: Price, noise: f64, rng: &mut dyn RngCore) -> Price {
        let noise = noise.abs();
        truth * (1. + rng.random_range(-noise..=noise))
    }
    pub fn profile(&self) -> Profile {
        Profile {
            noise: self.estimate_noise,
            std_dev_multiplier: self.std_dev_multiplier,
            width_reduction_multiplier: self.width_reduction_multiplier,
            market_willingness: self.market_willingness,
        }
    }
    pub fn record(&mut self, line: String) {
        log::trace!("[{}] {}", self.strategy, line);
        self.log.push(line);
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize bot snapshot")
    }
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
