use super::*;
use crate::gameplay::*;
use crate::players::Snapshot;
use crate::players::Strategy;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Hosts games from first question to final summary.
///
/// The room plays every bot move itself, so after [`Room::open`] and
/// [`Room::submit`] return, either the player is to move or the game is over.
/// Between rounds it charges the loser, checks for game over and draws the
/// next question. All randomness of a game flows from the room's rng, so a
/// seeded room replays identically given the same player commands.
pub struct Room<Q> {
    engine: Engine,
    provider: Q,
    rng: SmallRng,
}

impl<Q> Room<Q>
where
    Q: QuestionProvider,
{
    pub fn new(engine: Engine, provider: Q) -> Self {
        Self {
            engine,
            provider,
            rng: SmallRng::from_os_rng(),
        }
    }
    pub fn seeded(engine: Engine, provider: Q, seed: u64) -> Self {
        Self {
            engine,
            provider,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Starts a game against the named strategy, or a random one.
    pub fn open(&mut self, mode: Mode, strategy: Option<&str>) -> Result<Game, Error> {
        let strategy = match strategy {
            Some(name) => Strategy::try_from(name)?,
            None => Strategy::random(&mut self.rng),
        };
        let rules = *self.engine.rules();
        let Some(question) = self.draw() else {
            log::warn!("no question available, {} game over before it began", mode);
            return Ok(Game::unavailable(mode, rules.capital));
        };
        let bot = Snapshot::new(
            strategy,
            strategy.profile(),
            question.answer,
            rules.frozen,
            &mut self.rng,
        );
        let mover = Party::random(&mut self.rng);
        log::info!("opening {} game against {}", mode, strategy);
        let mut game = Game::new(
            mode,
            rules.capital,
            mover,
            question.text,
            question.answer,
            question.units,
            bot,
        );
        self.advance(&mut game)?;
        Ok(game)
    }

    /// Applies a player command, then plays on until the player is to move again.
    pub fn submit(&mut self, game: &mut Game, command: Command) -> Result<(), Error> {
        self.engine.submit(game, command, &mut self.rng)?;
        self.advance(game)
    }

    /// Plays bot moves and resolves rounds until the player must act or the
    /// game ends.
    pub fn advance(&mut self, game: &mut Game) -> Result<(), Error> {
        loop {
            match game.phase() {
                Phase::GameOver => return Ok(()),
                Phase::Resolution => self.resolve(game),
                _ if game.mover().is_bot() => self.engine.respond(game, &mut self.rng)?,
                _ => return Ok(()),
            }
        }
    }
}

impl<Q> Room<Q>
where
    Q: QuestionProvider,
{
    /// Charges the round's loser, then either ends the game or starts the next round.
    fn resolve(&mut self, game: &mut Game) {
        let Some(settlement) = game.settlement.clone() else {
            return;
        };
        let loser = settlement.loser();
        game.charge(loser, settlement.damage);
        game.history.push(settlement.clone());
        log::info!(
            "round {} resolved, capital: player {}, bot {}",
            settlement.round,
            game.player_capital(),
            game.bot_capital()
        );
        if game.capital(loser) <= 0 || game.mode().is_single() {
            game.finish(Some(settlement.winner));
        } else {
            self.reset(game);
        }
    }

    /// Next question from the provider, passing over unplayable answers
    /// as if the supply had run dry.
    fn draw(&mut self) -> Option<Question> {
        let question = self.provider.question(&mut self.rng)?;
        if question.is_playable() {
            Some(question)
        } else {
            log::warn!("answer {} to {:?} is out of range", question.answer, question.text);
            None
        }
    }

    fn reset(&mut self, game: &mut Game) {
        let Some(question) = self.draw() else {
            log::warn!("no question available for round {}", game.round() + 1);
            game.record(String::from("No question available"));
            return game.finish(game.leader());
        };
        let Some(old) = game.bot.take() else {
            log::warn!("round {} ended without a bot", game.round());
            return game.finish(game.leader());
        };
        let bot = old.renew(question.answer, &mut self.rng);
        game.log
            .extend(old.log.iter().map(|line| format!("[{}] {}", old.strategy, line)));
        let mover = Party::random(&mut self.rng);
        game.next_round(question.text, question.answer, question.units, mover, bot);
    }
}
