use super::*;
use crate::Damage;
use crate::Price;
use serde::Deserialize;
use serde::Serialize;

/// Outcome of one round.
///
/// The trader wins when the trade was advantageous given the truth; otherwise
/// the market maker wins. Damage is always charged to the loser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub round: u32,
    pub truth: Price,
    pub quote: Quote,
    pub trade: Trade,
    pub trader: Party,
    pub damage: Damage,
    pub winner: Party,
}

impl Settlement {
    pub fn new(
        round: u32,
        truth: Price,
        quote: Quote,
        trade: Trade,
        trader: Party,
        damage: Damage,
    ) -> Self {
        let winner = if quote.favors(trade, truth) {
            trader
        } else {
            trader.other()
        };
        Self {
            round,
            truth,
            quote,
            trade,
            trader,
            damage,
            winner,
        }
    }
    pub fn loser(&self) -> Party {
        self.winner.other()
    }
    pub fn maker(&self) -> Party {
        self.trader.other()
    }
    /// Price the trade went through at.
    pub fn price(&self) -> Price {
        self.quote.price(self.trade)
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "round {}: {} {} at {} (true value {}), {} wins, {} takes {} damage",
            self.round,
            self.trader,
            self.trade,
            self.price(),
            self.truth,
            self.winner,
            self.loser(),
            self.damage
        )
    }
}
