use serde::Deserialize;
use serde::Serialize;

/// Tunable temperament of a bot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Half-range of the uniform relative error on the initial estimate.
    pub noise: f64,
    /// Standard deviations below the estimate a quote may reach.
    pub std_dev_multiplier: f64,
    /// Fraction of the width kept when the bot narrows.
    pub width_reduction_multiplier: f64,
    /// Base appetite for quoting rather than narrowing.
    pub market_willingness: f64,
}

impl Profile {
    pub const fn new(width_reduction_multiplier: f64, market_willingness: f64) -> Self {
        Self {
            noise: crate::ESTIMATE_NOISE,
            std_dev_multiplier: crate::STD_DEV_MULTIPLIER,
            width_reduction_multiplier,
            market_willingness,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new(0.9, 0.5)
    }
}
