use super::*;
use crate::Price;
use crate::Width;
use crate::players::Policy;
use crate::players::Strategy;
use rand::RngCore;

/// Drives a [`Game`] through its phases.
///
/// Player moves arrive as [`Command`]s and are validated before anything is
/// touched, so a rejected command always leaves the game as it was. Bot moves
/// are produced by reviving the bot's [`Policy`] from its snapshot, letting it
/// act once, and storing the updated snapshot back into the game.
///
/// The engine stops at [`Phase::Resolution`]; charging capital and moving on
/// to the next round is left to whoever owns the game across rounds.
pub struct Engine {
    rules: Rules,
    model: Box<dyn DamageModel>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl Engine {
    /// Engine assessing damage with the formula named in `rules`.
    pub fn new(rules: Rules) -> Self {
        Self {
            model: Box::new(rules.formula),
            rules,
        }
    }
    pub fn with_model(rules: Rules, model: Box<dyn DamageModel>) -> Self {
        Self { rules, model }
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl Engine {
    /// Validates a player command against the current state.
    ///
    /// Only the elected market maker may quote.
    pub fn check(&self, game: &Game, command: &Command) -> Result<(), Error> {
        let phase = game.phase();
        let maker = game.market_maker() == Some(Party::Player);
        let quoting = matches!(command, Command::Quote(..));
        if phase != command.phase() || !game.mover().is_player() || (quoting && !maker) {
            return Err(Rejection::OutOfTurn {
                command: command.name(),
                phase,
                mover: game.mover(),
            }
            .into());
        }
        match *command {
            Command::InitialWidth(width) => {
                self.rules.open(width)?;
            }
            Command::ReduceWidth(width) => {
                self.rules.reduce(Self::width(game)?, width)?;
            }
            Command::Quote(bid, ask) => {
                self.quotable(Self::width(game)?, bid, ask)?;
            }
            Command::ElectMarketMaker | Command::Trade(_) => {}
        }
        Ok(())
    }

    /// Applies a player command.
    pub fn submit(
        &self,
        game: &mut Game,
        command: Command,
        rng: &mut dyn RngCore,
    ) -> Result<(), Error> {
        self.check(game, &command)?;
        match command {
            Command::InitialWidth(width) => {
                game.width = Some(width);
                game.mover = Party::Bot;
                game.record(format!("Player sets the width to {}", width));
            }
            Command::ReduceWidth(width) => {
                let mut bot = Self::revive(game)?;
                bot.update_belief(Decision::ReduceWidth, width, rng);
                game.bot = Some(bot.into_snapshot());
                game.width = Some(width);
                game.mover = Party::Bot;
                game.record(format!("Player reduces the width to {}", width));
            }
            Command::ElectMarketMaker => {
                game.market_maker = Some(Party::Player);
                game.record(String::from("Player elects to make a market"));
            }
            Command::Quote(bid, ask) => {
                let quote = self.quotable(Self::width(game)?, bid, ask)?;
                self.publish(game, Party::Player, quote);
            }
            Command::Trade(trade) => self.settle(game, Party::Player, trade)?,
        }
        Ok(())
    }

    /// Lets the bot make its next move.
    ///
    /// Electing to make a market and quoting happen in the same step, so the
    /// bot never leaves the game waiting in [`Phase::Quoting`].
    pub fn respond(&self, game: &mut Game, rng: &mut dyn RngCore) -> Result<(), Error> {
        let phase = game.phase();
        if !game.mover().is_bot() || matches!(phase, Phase::Resolution | Phase::GameOver) {
            return Err(Rejection::OutOfTurn {
                command: "bot move",
                phase,
                mover: game.mover(),
            }
            .into());
        }
        let mut bot = Self::revive(game)?;
        match phase {
            Phase::WidthSetting => {
                let width = bot.initial_width().max(self.rules.minimum);
                game.width = Some(width);
                game.mover = Party::Player;
                game.record(format!("Bot sets the width to {}", width));
            }
            Phase::Narrowing => {
                let width = Self::width(game)?;
                match self.rules.ceiling(width) {
                    None => {
                        log::warn!("width {} cannot be reduced, bot must make a market", width);
                        self.elect(game, &mut *bot, width);
                    }
                    Some(ceiling) => match bot.choose_action(width, rng) {
                        Decision::MakeMarket => self.elect(game, &mut *bot, width),
                        Decision::ReduceWidth => {
                            let width = bot.reduce_width(width).clamp(self.rules.minimum, ceiling);
                            game.width = Some(width);
                            game.mover = Party::Player;
                            game.record(format!("Bot reduces the width to {}", width));
                        }
                    },
                }
            }
            Phase::Quoting => {
                let width = Self::width(game)?;
                let quote = bot.make_market(width);
                self.publish(game, Party::Bot, quote);
            }
            Phase::Trading => {
                let quote = Self::market(game)?;
                let trade = bot.trade(&quote, rng);
                self.settle(game, Party::Bot, trade)?;
            }
            Phase::Resolution | Phase::GameOver => unreachable!("rejected above"),
        }
        game.bot = Some(bot.into_snapshot());
        Ok(())
    }
}

impl Engine {
    /// Checks a quote at `width` and normalizes the ask to `bid + width`.
    fn quotable(&self, width: Width, bid: Price, ask: Price) -> Result<Quote, Rejection> {
        let spread = ask - bid;
        let exact = (spread - width as Price).abs() < crate::SPREAD_TOLERANCE;
        if !exact {
            return Err(Rejection::SpreadMismatch {
                expected: width,
                actual: spread,
            });
        }
        if bid.is_nan() || bid < crate::MINIMUM_BID {
            return Err(Rejection::BidTooLow {
                minimum: crate::MINIMUM_BID,
                actual: bid,
            });
        }
        Ok(Quote::new(bid, bid + width as Price))
    }
    fn elect(&self, game: &mut Game, bot: &mut dyn Policy, width: Width) {
        game.market_maker = Some(Party::Bot);
        game.record(String::from("Bot elects to make a market"));
        let quote = bot.make_market(width);
        self.publish(game, Party::Bot, quote);
    }
    fn publish(&self, game: &mut Game, maker: Party, quote: Quote) {
        game.bid = Some(quote.bid);
        game.ask = Some(quote.ask);
        game.market_made = true;
        game.mover = maker.other();
        game.record(format!("{} quotes {}", maker, quote));
    }
    fn settle(&self, game: &mut Game, trader: Party, trade: Trade) -> Result<(), Error> {
        let quote = Self::market(game)?;
        let damage = self.model.assess(game.true_value, &quote, trade);
        let settlement = Settlement::new(game.round, game.true_value, quote, trade, trader, damage);
        log::info!("{}", settlement);
        game.record(settlement.to_string());
        game.settlement = Some(settlement);
        Ok(())
    }
}

impl Engine {
    /// Copy of the bot's policy; the stored snapshot stays put until the
    /// move succeeds.
    fn revive(game: &Game) -> Result<Box<dyn Policy>, Error> {
        game.bot.clone().map(Strategy::revive).ok_or(Error::Unavailable)
    }
    fn width(game: &Game) -> Result<Width, Error> {
        game.width.ok_or(Error::Inconsistent("no width past width setting"))
    }
    fn market(game: &Game) -> Result<Quote, Error> {
        game.quote().ok_or(Error::Inconsistent("no quote standing while trading"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Snapshot;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn game(strategy: Strategy, truth: Price, mover: Party) -> Game {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let bot = Snapshot::new(strategy, strategy.profile(), truth, false, rng);
        Game::new(
            Mode::Battle,
            crate::STARTING_CAPITAL,
            mover,
            String::from("q"),
            truth,
            String::new(),
            bot,
        )
    }

    fn submit(engine: &Engine, game: &mut Game, command: Command) -> Result<(), Error> {
        let ref mut rng = SmallRng::seed_from_u64(1);
        engine.submit(game, command, rng)
    }

    #[test]
    fn rejected_commands_change_nothing() {
        let engine = Engine::default();
        let mut game = game(Strategy::Passive, 100., Party::Player);
        let before = game.clone();
        let rejected = [
            Command::InitialWidth(0),
            Command::ReduceWidth(50),
            Command::ElectMarketMaker,
            Command::Quote(10., 20.),
            Command::Trade(Trade::Buy),
        ];
        for command in rejected {
            assert!(submit(&engine, &mut game, command).is_err());
            assert!(game == before);
        }
    }

    #[test]
    fn reductions_obey_bounds() {
        let engine = Engine::default();
        let mut game = game(Strategy::Passive, 100., Party::Player);
        game.width = Some(400);
        let before = game.clone();
        let error = submit(&engine, &mut game, Command::ReduceWidth(361)).unwrap_err();
        assert!(error.rejection() == Some(&Rejection::ReductionTooSmall { maximum: 360, actual: 361 }));
        let error = submit(&engine, &mut game, Command::ReduceWidth(0)).unwrap_err();
        assert!(error.rejection() == Some(&Rejection::WidthTooSmall { minimum: 1, actual: 0 }));
        assert!(game == before);
        submit(&engine, &mut game, Command::ReduceWidth(360)).unwrap();
        assert!(game.width() == Some(360));
        assert!(game.mover() == Party::Bot);
    }

    #[test]
    fn smallest_width_is_irreducible() {
        let engine = Engine::default();
        let mut game = game(Strategy::Passive, 100., Party::Player);
        game.width = Some(1);
        let error = submit(&engine, &mut game, Command::ReduceWidth(1)).unwrap_err();
        assert!(error.rejection() == Some(&Rejection::Irreducible { width: 1 }));
        submit(&engine, &mut game, Command::ElectMarketMaker).unwrap();
        assert!(game.phase() == Phase::Quoting);
        assert!(game.mover() == Party::Player);
    }

    #[test]
    fn player_quote_must_match_width() {
        let engine = Engine::default();
        let mut game = game(Strategy::Passive, 100., Party::Player);
        game.width = Some(20);
        game.market_maker = Some(Party::Player);
        let before = game.clone();
        let error = submit(&engine, &mut game, Command::Quote(90., 111.)).unwrap_err();
        assert!(matches!(error.rejection(), Some(Rejection::SpreadMismatch { expected: 20, .. })));
        let error = submit(&engine, &mut game, Command::Quote(0.5, 20.5)).unwrap_err();
        assert!(matches!(error.rejection(), Some(Rejection::BidTooLow { .. })));
        assert!(game == before);
        submit(&engine, &mut game, Command::Quote(90., 110.)).unwrap();
        assert!(game.market_made());
        assert!(game.quote() == Some(Quote::new(90., 110.)));
        assert!(game.phase() == Phase::Trading);
        assert!(game.mover() == Party::Bot);
    }

    #[test]
    fn bot_trades_against_player_quote() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let engine = Engine::default();
        let mut game = game(Strategy::Aggressive, 50., Party::Player);
        game.width = Some(20);
        game.market_maker = Some(Party::Player);
        submit(&engine, &mut game, Command::Quote(40., 60.)).unwrap();
        engine.respond(&mut game, rng).unwrap();
        let settlement = game.settlement().unwrap();
        assert!(game.phase() == Phase::Resolution);
        assert!(settlement.trader == Party::Bot);
        assert!(settlement.winner == Party::Player);
        assert!(settlement.damage == Formula::Combined.assess(50., &Quote::new(40., 60.), settlement.trade));
    }

    #[test]
    fn player_trade_settles() {
        let engine = Engine::default();
        let mut game = game(Strategy::Aggressive, 100., Party::Player);
        game.width = Some(20);
        game.market_maker = Some(Party::Bot);
        game.market_made = true;
        game.bid = Some(90.);
        game.ask = Some(110.);
        submit(&engine, &mut game, Command::Trade(Trade::Buy)).unwrap();
        let settlement = game.settlement().unwrap();
        assert!(settlement.damage == 833);
        assert!(settlement.winner == Party::Bot);
        assert!(settlement.loser() == Party::Player);
        assert!(game.player_capital() == crate::STARTING_CAPITAL);
    }

    #[test]
    fn bot_markets_always_match_width() {
        let engine = Engine::default();
        for seed in 0..64 {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let strategy = Strategy::random(rng);
            let mut game = game(strategy, rng.random_range(1. ..10_000.), Party::Bot);
            engine.respond(&mut game, rng).unwrap();
            while game.phase() == Phase::Narrowing {
                let width = game.width().unwrap();
                if game.mover().is_player() {
                    let next = engine.rules().ceiling(width).unwrap_or(width);
                    match submit(&engine, &mut game, Command::ReduceWidth(next)) {
                        Ok(()) => assert!(next <= width * 9 / 10),
                        Err(_) => submit(&engine, &mut game, Command::ElectMarketMaker).unwrap(),
                    }
                } else {
                    engine.respond(&mut game, rng).unwrap();
                    assert!(game.width().unwrap() >= 1);
                }
            }
            if game.phase() == Phase::Quoting {
                let bid = (game.true_value() - game.width().unwrap() as Price / 2.).max(1.).round();
                let ask = bid + game.width().unwrap() as Price;
                submit(&engine, &mut game, Command::Quote(bid, ask)).unwrap();
            }
            assert!(game.market_made());
            let quote = game.quote().unwrap();
            assert!(quote.bid < quote.ask);
            assert!(quote.spread() == game.width().unwrap() as Price);
        }
    }

    #[test]
    fn bot_waits_its_turn() {
        let ref mut rng = SmallRng::seed_from_u64(3);
        let engine = Engine::default();
        let mut game = game(Strategy::Random, 100., Party::Player);
        assert!(matches!(
            engine.respond(&mut game, rng),
            Err(Error::Validation(Rejection::OutOfTurn { .. }))
        ));
    }

    #[test]
    fn bot_opens_at_twice_its_estimate() {
        let ref mut rng = SmallRng::seed_from_u64(4);
        let engine = Engine::default();
        let mut game = game(Strategy::Aggressive, 180., Party::Bot);
        game.bot.as_mut().unwrap().current_estimate = 200.;
        engine.respond(&mut game, rng).unwrap();
        assert!(game.width() == Some(400));
        assert!(game.mover() == Party::Player);
        assert!(game.phase() == Phase::Narrowing);
    }

    #[test]
    fn bot_forced_to_quote_at_smallest_width() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let engine = Engine::default();
        let mut game = game(Strategy::MarketHater, 100., Party::Bot);
        game.width = Some(1);
        engine.respond(&mut game, rng).unwrap();
        assert!(game.market_maker() == Some(Party::Bot));
        assert!(game.phase() == Phase::Trading);
        assert!(game.mover() == Party::Player);
        assert!(game.quote().unwrap().spread() == 1.);
    }

    #[test]
    fn player_narrowing_informs_bot() {
        let engine = Engine::default();
        let mut game = game(Strategy::Aggressive, 100., Party::Player);
        game.width = Some(400);
        game.bot.as_mut().unwrap().current_estimate = 130.;
        submit(&engine, &mut game, Command::ReduceWidth(300)).unwrap();
        let bot = game.bot().unwrap();
        assert!(bot.current_estimate < 130.);
        assert!(bot.log.len() == 1);
    }

    #[test]
    fn quote_requires_player_as_market_maker() {
        let engine = Engine::default();
        let mut game = game(Strategy::Passive, 100., Party::Player);
        game.width = Some(20);
        game.market_maker = Some(Party::Bot);
        let before = game.clone();
        let error = submit(&engine, &mut game, Command::Quote(90., 110.)).unwrap_err();
        assert!(matches!(error.rejection(), Some(Rejection::OutOfTurn { command: "quote", .. })));
        assert!(game == before);
    }

    #[test]
    fn contradictory_state_is_an_error() {
        let ref mut rng = SmallRng::seed_from_u64(6);
        let engine = Engine::default();
        let mut game = game(Strategy::Random, 100., Party::Player);
        game.width = Some(20);
        game.market_maker = Some(Party::Bot);
        game.market_made = true;
        let before = game.clone();
        assert!(game.phase() == Phase::Trading);
        let error = submit(&engine, &mut game, Command::Trade(Trade::Buy)).unwrap_err();
        assert!(matches!(error, Error::Inconsistent(_)));
        assert!(game == before);
        game.mover = Party::Bot;
        game.market_maker = Some(Party::Player);
        let before = game.clone();
        assert!(matches!(engine.respond(&mut game, rng), Err(Error::Inconsistent(_))));
        assert!(game == before);
        assert!(game.bot().is_some());
    }
}
