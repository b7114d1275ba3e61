use super::*;
use crate::Price;
use serde::Deserialize;
use serde::Serialize;

/// A two-sided market: the market maker buys at `bid` and sells at `ask`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: Price,
    pub ask: Price,
}

impl Quote {
    pub fn new(bid: Price, ask: Price) -> Self {
        Self { bid, ask }
    }
    /// Distance between ask and bid.
    pub fn spread(&self) -> Price {
        self.ask - self.bid
    }
    /// Price the counter-party transacts at.
    pub fn price(&self, trade: Trade) -> Price {
        match trade {
            Trade::Buy => self.ask,
            Trade::Sell => self.bid,
        }
    }
    /// True if `value` lies inside the market, boundaries included.
    pub fn contains(&self, value: Price) -> bool {
        self.bid <= value && value <= self.ask
    }
    /// Nearest side of the market to `value`.
    pub fn nearest(&self, value: Price) -> Price {
        if value > self.ask { self.ask } else { self.bid }
    }
    /// True if trading against this quote profits the trader given the truth.
    /// Trades exactly at the bid or ask count as inside the market.
    pub fn favors(&self, trade: Trade, truth: Price) -> bool {
        match trade {
            Trade::Buy => truth > self.ask,
            Trade::Sell => truth < self.bid,
        }
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.bid, self.ask)
    }
}
