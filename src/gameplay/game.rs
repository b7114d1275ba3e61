use super::*;
use crate::Capital;
use crate::Damage;
use crate::Price;
use crate::Width;
use crate::players::Snapshot;
use serde::Deserialize;
use serde::Serialize;

/// Complete, serializable state of a duel.
///
/// A game is handled one command at a time: whoever hosts it may serialize
/// it between turns and the next transition picks up from the fields alone.
/// The [`Phase`] is never stored; it is read off which fields are set.
///
/// Capitals carry over between rounds, everything from `width` through
/// `settlement` is reset when a new round starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) mode: Mode,
    pub(crate) round: u32,
    pub(crate) question: String,
    pub(crate) true_value: Price,
    pub(crate) units: String,
    pub(crate) mover: Party,
    pub(crate) width: Option<Width>,
    pub(crate) market_made: bool,
    pub(crate) market_maker: Option<Party>,
    pub(crate) bid: Option<Price>,
    pub(crate) ask: Option<Price>,
    pub(crate) player_capital: Capital,
    pub(crate) bot_capital: Capital,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Party>,
    pub(crate) bot: Option<Snapshot>,
    pub(crate) settlement: Option<Settlement>,
    pub(crate) history: Vec<Settlement>,
    pub(crate) log: Vec<String>,
}

impl Game {
    /// First round of a fresh game.
    pub fn new(
        mode: Mode,
        capital: Capital,
        mover: Party,
        question: String,
        true_value: Price,
        units: String,
        bot: Snapshot,
    ) -> Self {
        let mut game = Self {
            mode,
            round: 1,
            question,
            true_value,
            units,
            mover,
            width: None,
            market_made: false,
            market_maker: None,
            bid: None,
            ask: None,
            player_capital: capital,
            bot_capital: capital,
            game_over: false,
            winner: None,
            bot: Some(bot),
            settlement: None,
            history: Vec::new(),
            log: Vec::new(),
        };
        game.record(format!("Round 1: {}, {} moves first", game.prompt(), mover));
        game
    }
    /// Terminal placeholder for when no question could be supplied.
    pub fn unavailable(mode: Mode, capital: Capital) -> Self {
        Self {
            mode,
            round: 0,
            question: String::from("No question found"),
            true_value: 0.,
            units: String::new(),
            mover: Party::Player,
            width: None,
            market_made: false,
            market_maker: None,
            bid: None,
            ask: None,
            player_capital: capital,
            bot_capital: capital,
            game_over: true,
            winner: None,
            bot: None,
            settlement: None,
            history: Vec::new(),
            log: vec![String::from("No question available")],
        }
    }
    /// Starts the following round on a new question, keeping capitals,
    /// history and the game log.
    pub(crate) fn next_round(
        &mut self,
        question: String,
        true_value: Price,
        units: String,
        mover: Party,
        bot: Snapshot,
    ) {
        self.round += 1;
        self.question = question;
        self.true_value = true_value;
        self.units = units;
        self.mover = mover;
        self.width = None;
        self.market_made = false;
        self.market_maker = None;
        self.bid = None;
        self.ask = None;
        self.bot = Some(bot);
        self.settlement = None;
        let line = format!("Round {}: {}, {} moves first", self.round, self.prompt(), mover);
        self.record(line);
    }
}

impl Game {
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.settlement.is_some() {
            Phase::Resolution
        } else if self.width.is_none() {
            Phase::WidthSetting
        } else if self.market_maker.is_none() {
            Phase::Narrowing
        } else if !self.market_made {
            Phase::Quoting
        } else {
            Phase::Trading
        }
    }
    /// The standing market, once one has been made.
    pub fn quote(&self) -> Option<Quote> {
        self.bid.zip(self.ask).map(|(bid, ask)| Quote::new(bid, ask))
    }
    /// Question text with its units, as shown to the player.
    pub fn prompt(&self) -> String {
        if self.units.is_empty() {
            self.question.clone()
        } else {
            format!("{} (in {})", self.question, self.units)
        }
    }
    pub fn capital(&self, party: Party) -> Capital {
        match party {
            Party::Player => self.player_capital,
            Party::Bot => self.bot_capital,
        }
    }
    /// Party with more capital left, if either.
    pub fn leader(&self) -> Option<Party> {
        match self.player_capital.cmp(&self.bot_capital) {
            std::cmp::Ordering::Greater => Some(Party::Player),
            std::cmp::Ordering::Less => Some(Party::Bot),
            std::cmp::Ordering::Equal => None,
        }
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn round(&self) -> u32 {
        self.round
    }
    pub fn question(&self) -> &str {
        &self.question
    }
    pub fn true_value(&self) -> Price {
        self.true_value
    }
    pub fn units(&self) -> &str {
        &self.units
    }
    pub fn mover(&self) -> Party {
        self.mover
    }
    pub fn width(&self) -> Option<Width> {
        self.width
    }
    pub fn market_made(&self) -> bool {
        self.market_made
    }
    pub fn market_maker(&self) -> Option<Party> {
        self.market_maker
    }
    pub fn player_capital(&self) -> Capital {
        self.player_capital
    }
    pub fn bot_capital(&self) -> Capital {
        self.bot_capital
    }
    pub fn is_over(&self) -> bool {
        self.game_over
    }
    pub fn winner(&self) -> Option<Party> {
        self.winner
    }
    pub fn bot(&self) -> Option<&Snapshot> {
        self.bot.as_ref()
    }
    /// Outcome of the round currently being resolved, or of the last round
    /// once the game is over.
    pub fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }
    pub fn history(&self) -> &[Settlement] {
        &self.history
    }
    pub fn log(&self) -> &[String] {
        &self.log
    }
}

impl Game {
    pub(crate) fn record(&mut self, line: String) {
        log::debug!("{}", line);
        self.log.push(line);
    }
    /// Takes `damage` out of `party`'s capital, never below zero.
    pub(crate) fn charge(&mut self, party: Party, damage: Damage) {
        let capital = match party {
            Party::Player => &mut self.player_capital,
            Party::Bot => &mut self.bot_capital,
        };
        *capital = capital.saturating_sub(damage).max(0);
    }
    pub(crate) fn finish(&mut self, winner: Option<Party>) {
        self.game_over = true;
        self.winner = winner;
        match winner {
            Some(party) => self.record(format!("Game over, {} wins", party)),
            None => self.record(String::from("Game over")),
        }
    }
}

impl Game {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize game")
    }
    /// Parses a persisted game and refuses one whose fields contradict
    /// each other.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let game = serde_json::from_str::<Self>(json)?;
        game.validate()?;
        Ok(game)
    }
    /// Cross-field invariants every reachable game satisfies.
    pub fn validate(&self) -> Result<(), Error> {
        if self.width.is_some_and(|w| w < crate::MINIMUM_WIDTH || w > crate::MAXIMUM_WIDTH) {
            return Err(Error::Inconsistent("width out of range"));
        }
        if self.market_maker.is_some() && self.width.is_none() {
            return Err(Error::Inconsistent("market maker elected before any width"));
        }
        if self.bid.is_some() != self.ask.is_some() {
            return Err(Error::Inconsistent("one-sided quote"));
        }
        if self.market_made != self.quote().is_some() {
            return Err(Error::Inconsistent("market made flag disagrees with quote"));
        }
        if let Some(quote) = self.quote() {
            let (Some(width), Some(_)) = (self.width, self.market_maker) else {
                return Err(Error::Inconsistent("quote without width and market maker"));
            };
            if quote.bid.is_nan() || quote.bid < crate::MINIMUM_BID {
                return Err(Error::Inconsistent("bid below minimum"));
            }
            if (quote.spread() - width as Price).abs() >= crate::SPREAD_TOLERANCE {
                return Err(Error::Inconsistent("spread differs from width"));
            }
        }
        if self.settlement.is_some() && !self.market_made {
            return Err(Error::Inconsistent("settled without a market"));
        }
        if self.player_capital < 0 || self.bot_capital < 0 {
            return Err(Error::Inconsistent("negative capital"));
        }
        if !self.game_over && self.bot.is_none() {
            return Err(Error::Inconsistent("live game without a bot"));
        }
        Ok(())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "round {} ({})", self.round, self.mode)?;
        writeln!(f, "{}", self.prompt())?;
        writeln!(
            f,
            "capital: player {}, bot {}",
            self.player_capital, self.bot_capital
        )?;
        match (self.width, self.quote()) {
            (_, Some(quote)) => writeln!(f, "market: {}", quote)?,
            (Some(width), None) => writeln!(f, "width: {}", width)?,
            (None, None) => writeln!(f, "width: unset")?,
        }
        write!(f, "{} to move ({})", self.mover, self.phase())
    }
}
