//! Duel Binary
//!
//! Plays a market-making duel against a bot at the terminal.
//!
//! Options: --mode, --bot, --seed, --questions, --formula, --minimum, --frozen-random
use clap::Parser;
use colored::Colorize;
use titan::gameplay::*;
use titan::gameroom::*;
use titan::players::Human;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// single or battle
    #[arg(long, default_value = "single")]
    mode: String,
    /// Bot strategy, random when omitted
    #[arg(long)]
    bot: Option<String>,
    /// Seed for a replayable game
    #[arg(long)]
    seed: Option<u64>,
    /// JSON question table, built-in catalog when omitted
    #[arg(long)]
    questions: Option<std::path::PathBuf>,
    /// combined, relative, spread or log
    #[arg(long, default_value = "combined")]
    formula: String,
    /// Smallest legal width
    #[arg(long, default_value_t = titan::MINIMUM_WIDTH)]
    minimum: titan::Width,
    /// Random bot ignores the player's narrowing
    #[arg(long)]
    frozen_random: bool,
}

fn main() -> anyhow::Result<()> {
    titan::log()?;
    let args = Args::parse();
    let mode = Mode::try_from(args.mode.as_str())?;
    let rules = Rules {
        formula: Formula::try_from(args.formula.as_str())?,
        minimum: args.minimum.max(1),
        frozen: args.frozen_random,
        ..Rules::default()
    };
    let catalog = match args.questions {
        Some(ref path) => Catalog::load(path)?,
        None => Catalog::default(),
    };
    let engine = Engine::new(rules);
    let mut room = match args.seed {
        Some(seed) => Room::seeded(engine, catalog, seed),
        None => Room::new(engine, catalog),
    };
    let mut game = room.open(mode, args.bot.as_deref())?;
    let ref mut seen = 0;
    let ref mut settled = 0;
    report(&game, seen, settled);
    while !game.is_over() {
        println!("\n{}", game.to_string().bold());
        let command = Human.act(&game, room.engine().rules())?;
        match room.submit(&mut game, command) {
            Ok(()) => report(&game, seen, settled),
            Err(Error::Validation(rejection)) => eprintln!("{}", rejection.to_string().red()),
            Err(e) => return Err(e.into()),
        }
    }
    println!("\n{}", Summary::from(&game));
    Ok(())
}

/// Prints whatever happened since the last report.
fn report(game: &Game, seen: &mut usize, settled: &mut usize) {
    for line in &game.log()[*seen..] {
        if !line.starts_with('[') {
            println!("{}", line.dimmed());
        }
    }
    *seen = game.log().len();
    for settlement in &game.history()[*settled..] {
        let line = format!(
            "{} takes {} damage (true value {})",
            settlement.loser(),
            settlement.damage,
            settlement.truth
        );
        match settlement.winner {
            Party::Player => println!("{}", line.green()),
            Party::Bot => println!("{}", line.red()),
        }
    }
    *settled = game.history().len();
}
