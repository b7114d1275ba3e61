use crate::Capital;
use crate::Damage;
use crate::gameplay::Game;
use crate::gameplay::Party;
use crate::gameplay::Settlement;
use crate::players::Strategy;

/// What is left to show once a game is over.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub winner: Option<Party>,
    pub player_capital: Capital,
    pub bot_capital: Capital,
    pub strategy: Option<Strategy>,
    pub rounds: Vec<Settlement>,
    pub log: Vec<String>,
}

impl Summary {
    /// Total damage `party` took over the game.
    pub fn damage(&self, party: Party) -> Damage {
        self.rounds
            .iter()
            .filter(|s| s.loser() == party)
            .map(|s| s.damage)
            .sum()
    }
}

impl From<&Game> for Summary {
    fn from(game: &Game) -> Self {
        let bot = game.bot();
        Self {
            winner: game.winner(),
            player_capital: game.player_capital(),
            bot_capital: game.bot_capital(),
            strategy: bot.map(|b| b.strategy),
            rounds: game.history().to_vec(),
            log: game
                .log()
                .iter()
                .cloned()
                .chain(bot.into_iter().flat_map(|b| {
                    b.log.iter().map(move |line| format!("[{}] {}", b.strategy, line))
                }))
                .collect(),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.winner {
            Some(winner) => writeln!(f, "winner: {}", winner)?,
            None => writeln!(f, "winner: none")?,
        }
        if let Some(strategy) = self.strategy {
            writeln!(f, "opponent: {}", strategy)?;
        }
        writeln!(
            f,
            "capital: player {} (-{}), bot {} (-{})",
            self.player_capital,
            self.damage(Party::Player),
            self.bot_capital,
            self.damage(Party::Bot)
        )?;
        for round in &self.rounds {
            writeln!(f, "  {}", round)?;
        }
        writeln!(f, "log:")?;
        for line in &self.log {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Quote;
    use crate::gameplay::Trade;

    #[test]
    fn damage_sums_losses() {
        let quote = Quote::new(90., 110.);
        let summary = Summary {
            winner: Some(Party::Bot),
            player_capital: 9000,
            bot_capital: 9500,
            strategy: Some(Strategy::Passive),
            rounds: vec![
                Settlement::new(1, 100., quote, Trade::Buy, Party::Player, 700),
                Settlement::new(2, 100., quote, Trade::Sell, Party::Bot, 500),
                Settlement::new(3, 150., quote, Trade::Buy, Party::Player, 300),
            ],
            log: Vec::new(),
        };
        assert!(summary.damage(Party::Player) == 700);
        assert!(summary.damage(Party::Bot) == 800);
        assert!(summary.to_string().starts_with("winner: bot\n"));
    }

    #[test]
    fn unavailable_game_summary() {
        let game = Game::unavailable(crate::gameplay::Mode::Single, 10_000);
        let summary = Summary::from(&game);
        assert!(summary.winner.is_none());
        assert!(summary.strategy.is_none());
        assert!(summary.log == vec![String::from("No question available")]);
    }
}
