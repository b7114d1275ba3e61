use super::*;
use rand::Rng;
use rand::RngCore;
use serde::Deserialize;
use serde::Serialize;

/// What a party does with the floor during narrowing.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    ReduceWidth,
    MakeMarket,
}

impl Decision {
    /// Fair coin flip between the two.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        if rng.random_bool(0.5) {
            Self::ReduceWidth
        } else {
            Self::MakeMarket
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::ReduceWidth => "Reduce width",
            Self::MakeMarket => "Make market",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReduceWidth => write!(f, "reduce_width"),
            Self::MakeMarket => write!(f, "make_market"),
        }
    }
}

/// Counter-party's response to a quote.
///
/// Buying pays the ask, selling receives the bid.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trade {
    Buy,
    Sell,
}

impl Trade {
    /// Fair coin flip between buying and selling.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        if rng.random_bool(0.5) {
            Self::Buy
        } else {
            Self::Sell
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }
}

impl TryFrom<&str> for Trade {
    type Error = Rejection;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(Rejection::UnknownTrade {
                input: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trades() {
        assert!(Trade::try_from("BUY").unwrap() == Trade::Buy);
        assert!(Trade::try_from("sell ").unwrap() == Trade::Sell);
    }

    #[test]
    fn rejects_unknown_trade() {
        match Trade::try_from("hold") {
            Err(Rejection::UnknownTrade { input }) => assert!(input == "hold"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }
}
