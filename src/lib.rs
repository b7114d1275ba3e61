//! Heads-up market-making duel.
//!
//! A human and a bot take turns narrowing a price range around the hidden
//! answer to a trivia question. Whoever stops narrowing quotes a bid/ask at
//! the current width, the other side buys or sells against it, and the party
//! whose read of the answer was worse pays damage out of its capital.
//!
//! - [`gameplay`]: the negotiation state machine and damage accounting
//! - [`players`]: the bot policies and the interactive human
//! - [`gameroom`]: round lifecycle, capital bookkeeping, question supply
pub mod gameplay;
pub mod gameroom;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Bids, asks, estimates and true values.
pub type Price = f64;
/// Full distance between bid and ask, in whole units.
pub type Width = u64;
/// Remaining life total of either party.
pub type Capital = i64;
/// Capital penalty charged to the loser of a round.
pub type Damage = i64;

// ============================================================================
// PROTOCOL PARAMETERS
// ============================================================================
/// Capital both parties start a game with.
pub const STARTING_CAPITAL: Capital = 10_000;
/// A reduced width may be at most this fraction of the previous width.
pub const REDUCTION_FACTOR: f64 = 0.9;
/// Smallest legal width, initial or reduced.
pub const MINIMUM_WIDTH: Width = 1;
/// Largest legal width. Keeps `bid + width` exact in an `f64`.
pub const MAXIMUM_WIDTH: Width = 1 << 51;
/// Largest answer magnitude a question may carry, so every estimate and
/// quote derived from it stays exactly representable.
pub const MAXIMUM_ANSWER: Price = 1_125_899_906_842_624.0;
/// Smallest bid a quote may carry.
pub const MINIMUM_BID: Price = 1.0;
/// Normalized error is scaled by this to get integer damage.
pub const DAMAGE_SCALE: f64 = 10_000.0;
/// Tolerance when comparing a submitted spread against the current width.
pub const SPREAD_TOLERANCE: f64 = 1e-9;

// ============================================================================
// BOT PARAMETERS
// Defaults shared by every strategy unless its profile overrides them.
// ============================================================================
/// Initial estimate is drawn from `truth * (1 + U(-noise, noise))`.
pub const ESTIMATE_NOISE: f64 = 0.5;
/// How many standard deviations below the estimate a bid may reach.
pub const STD_DEV_MULTIPLIER: f64 = 4.0;
/// Initial width is this multiple of the bot's absolute estimate.
pub const INITIAL_WIDTH_MULTIPLE: f64 = 2.0;
/// Fraction of observed narrowing folded into a market lover's quote skew.
pub const BIAS_RATE: f64 = 0.25;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
