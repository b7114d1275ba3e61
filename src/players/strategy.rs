use super::*;
use crate::gameplay::Error;
use rand::RngCore;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use serde::Serialize;

/// Closed set of bot temperaments.
///
/// Serialized under the bot's class-style name so persisted snapshots stay
/// readable, and used as the discriminator when reviving a [`Policy`].
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Strategy {
    #[serde(rename = "AggressiveBot")]
    Aggressive,
    #[serde(rename = "PassiveBot")]
    Passive,
    #[serde(rename = "MarketLoverBot")]
    MarketLover,
    #[serde(rename = "MarketHaterBot")]
    MarketHater,
    #[serde(rename = "RandomBot")]
    Random,
}

impl Strategy {
    pub const ALL: [Self; 5] = [
        Self::Aggressive,
        Self::Passive,
        Self::MarketLover,
        Self::MarketHater,
        Self::Random,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Aggressive => "AggressiveBot",
            Self::Passive => "PassiveBot",
            Self::MarketLover => "MarketLoverBot",
            Self::MarketHater => "MarketHaterBot",
            Self::Random => "RandomBot",
        }
    }
    /// Default parameters for this temperament.
    pub fn profile(&self) -> Profile {
        match self {
            Self::Aggressive => Profile::new(0.8, 0.7),
            Self::Passive => Profile::new(0.9, 0.3),
            Self::MarketLover => Profile::new(0.85, 0.9),
            Self::MarketHater => Profile::new(0.95, 0.1),
            Self::Random => Profile::new(0.9, 0.5),
        }
    }
    /// Uniformly random temperament.
    pub fn random(rng: &mut dyn RngCore) -> Self {
        *Self::ALL.choose(rng).expect("non empty strategies")
    }
    /// Rebuilds the policy that owns `snapshot`.
    pub fn revive(snapshot: Snapshot) -> Box<dyn Policy> {
        match snapshot.strategy {
            Self::Aggressive => Box::new(Aggressive::from(snapshot)),
            Self::Passive => Box::new(Passive::from(snapshot)),
            Self::MarketLover => Box::new(Lover::from(snapshot)),
            Self::MarketHater => Box::new(Hater::from(snapshot)),
            Self::Random => Box::new(Random::from(snapshot)),
        }
    }
}

impl TryFrom<&str> for Strategy {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let key = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>();
        match key.strip_suffix("bot").unwrap_or(&key) {
            "aggressive" => Ok(Self::Aggressive),
            "passive" => Ok(Self::Passive),
            "marketlover" | "lover" => Ok(Self::MarketLover),
            "markethater" | "hater" => Ok(Self::MarketHater),
            "random" => Ok(Self::Random),
            _ => Err(Error::Configuration {
                field: "bot strategy",
                name: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn parses_class_and_short_names() {
        for strategy in Strategy::ALL {
            assert!(Strategy::try_from(strategy.name()).unwrap() == strategy);
        }
        assert!(Strategy::try_from("lover").unwrap() == Strategy::MarketLover);
        assert!(Strategy::try_from("market-hater").unwrap() == Strategy::MarketHater);
        assert!(Strategy::try_from("AGGRESSIVE").unwrap() == Strategy::Aggressive);
    }

    #[test]
    fn unknown_name_is_configuration_error() {
        assert!(matches!(
            Strategy::try_from("TimidBot"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn revives_matching_variant() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for strategy in Strategy::ALL {
            let snapshot = Snapshot::new(strategy, strategy.profile(), 100., false, rng);
            let policy = Strategy::revive(snapshot);
            assert!(policy.snapshot().strategy == strategy);
        }
    }

    #[test]
    fn random_strategy_is_a_member() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        assert!(Strategy::ALL.contains(&Strategy::random(rng)));
    }
}
