use super::*;
use crate::Damage;
use crate::Price;
use serde::Deserialize;
use serde::Serialize;

/// Maps a resolved trade to the capital penalty of the round's loser.
///
/// Implementations must return a non-negative integer for any finite input.
pub trait DamageModel {
    fn assess(&self, truth: Price, quote: &Quote, trade: Trade) -> Damage;
}

/// The damage formulas the game knows about.
///
/// All of them start from the same miss: if the truth lies inside the quote,
/// the distance from the truth to the price actually traded; otherwise the
/// distance to the nearest side of the market. They differ in how that miss
/// is normalized.
///
/// - `Combined`: miss over (truth + width), scaled by 10000. Canonical.
/// - `Relative`: miss as per-mille of the truth
/// - `Spread`: miss as per-mille of the width
/// - `Logarithmic`: 10000 · ln(1 + miss / truth)
#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    #[default]
    Combined,
    Relative,
    Spread,
    Logarithmic,
}

impl Formula {
    pub const ALL: [Self; 4] = [
        Self::Combined,
        Self::Relative,
        Self::Spread,
        Self::Logarithmic,
    ];

    /// Distance between the truth and the relevant side of the market.
    pub fn miss(truth: Price, quote: &Quote, trade: Trade) -> Price {
        if quote.contains(truth) {
            (truth - quote.price(trade)).abs()
        } else {
            (truth - quote.nearest(truth)).abs()
        }
    }
}

impl DamageModel for Formula {
    fn assess(&self, truth: Price, quote: &Quote, trade: Trade) -> Damage {
        let miss = Self::miss(truth, quote, trade);
        let width = quote.spread();
        match self {
            Self::Combined => scale(ratio(miss, truth + width), crate::DAMAGE_SCALE),
            Self::Relative => scale(ratio(miss, truth), 1000.),
            Self::Spread => scale(ratio(miss, width), 1000.),
            Self::Logarithmic => scale(ratio(miss, truth).ln_1p(), crate::DAMAGE_SCALE),
        }
    }
}

/// Non-negative ratio, zero when the denominator vanishes.
fn ratio(numerator: Price, denominator: Price) -> f64 {
    match denominator.abs() {
        d if d > 0. => numerator.abs() / d,
        _ => 0.,
    }
}

fn scale(ratio: f64, factor: f64) -> Damage {
    (ratio * factor).round().max(0.) as Damage
}

impl TryFrom<&str> for Formula {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "combined" => Ok(Self::Combined),
            "relative" => Ok(Self::Relative),
            "spread" => Ok(Self::Spread),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            _ => Err(Error::Configuration {
                field: "formula",
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combined => write!(f, "combined"),
            Self::Relative => write!(f, "relative"),
            Self::Spread => write!(f, "spread"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_buy_inside_market() {
        let quote = Quote::new(90., 110.);
        assert!(Formula::Combined.assess(100., &quote, Trade::Buy) == 833);
    }

    #[test]
    fn combined_sell_inside_market() {
        let quote = Quote::new(40., 60.);
        assert!(Formula::Combined.assess(50., &quote, Trade::Sell) == 1429);
    }

    #[test]
    fn outside_market_uses_nearest_side() {
        let quote = Quote::new(40., 60.);
        // miss is |80 - 60| regardless of direction
        assert!(Formula::miss(80., &quote, Trade::Buy) == 20.);
        assert!(Formula::miss(80., &quote, Trade::Sell) == 20.);
        assert!(Formula::miss(10., &quote, Trade::Buy) == 30.);
        assert!(Formula::Combined.assess(80., &quote, Trade::Buy) == 2000);
    }

    #[test]
    fn alternates() {
        let quote = Quote::new(90., 110.);
        assert!(Formula::Relative.assess(100., &quote, Trade::Buy) == 100);
        assert!(Formula::Spread.assess(100., &quote, Trade::Buy) == 500);
        assert!(Formula::Logarithmic.assess(100., &quote, Trade::Buy) == 953);
    }

    #[test]
    fn never_negative() {
        let quotes = [
            Quote::new(1., 2.),
            Quote::new(-50., 50.),
            Quote::new(0., 1e9),
            Quote::new(999., 1000.),
        ];
        for formula in Formula::ALL {
            for quote in quotes.iter() {
                for truth in [-100., 0., 0.5, 1., 500., 1e7] {
                    for trade in [Trade::Buy, Trade::Sell] {
                        assert!(formula.assess(truth, quote, trade) >= 0);
                    }
                }
            }
        }
    }

    #[test]
    fn parses_names() {
        assert!(Formula::try_from("LOG").unwrap() == Formula::Logarithmic);
        assert!(Formula::try_from("cubic").is_err());
    }
}
