use crate::Width;
use crate::gameplay::*;
use dialoguer::Input;
use dialoguer::Select;

/// The player at the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Human;

impl Human {
    /// Prompts for a move that fits the current phase. Bounds the engine
    /// would reject anyway are checked up front where the prompt allows it.
    pub fn act(&self, game: &Game, rules: &Rules) -> anyhow::Result<Command> {
        match game.phase() {
            Phase::WidthSetting => Ok(Command::InitialWidth(self.width(
                "Initial width",
                rules.minimum,
                None,
            )?)),
            Phase::Narrowing => self.narrow(game, rules),
            Phase::Quoting => self.quote(game),
            Phase::Trading => self.trade(game),
            phase => Err(anyhow::anyhow!("nothing to do during {}", phase)),
        }
    }
}

impl Human {
    fn narrow(&self, game: &Game, rules: &Rules) -> anyhow::Result<Command> {
        let width = Self::current(game)?;
        let Some(ceiling) = rules.ceiling(width) else {
            println!("width {} cannot be reduced any further", width);
            return Ok(Command::ElectMarketMaker);
        };
        let choices = [Decision::ReduceWidth, Decision::MakeMarket];
        let labels = choices.map(|d| d.label());
        let selection = Select::new()
            .with_prompt(format!("Width is {}", width))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()?;
        match choices[selection] {
            Decision::MakeMarket => Ok(Command::ElectMarketMaker),
            Decision::ReduceWidth => Ok(Command::ReduceWidth(self.width(
                "New width",
                rules.minimum,
                Some(ceiling),
            )?)),
        }
    }
    fn quote(&self, game: &Game) -> anyhow::Result<Command> {
        let width = Self::current(game)?;
        let bid = Input::<f64>::new()
            .with_prompt(format!("Bid (spread must be {})", width))
            .validate_with(|bid: &f64| -> Result<(), String> {
                match *bid >= crate::MINIMUM_BID {
                    true => Ok(()),
                    false => Err(format!("bid must be at least {}", crate::MINIMUM_BID)),
                }
            })
            .interact_text()?;
        let ask = Input::<f64>::new()
            .with_prompt("Ask")
            .default(bid + width as f64)
            .interact_text()?;
        Ok(Command::Quote(bid, ask))
    }
    fn trade(&self, game: &Game) -> anyhow::Result<Command> {
        let quote = game
            .quote()
            .ok_or_else(|| anyhow::anyhow!("no market to trade against"))?;
        let choices = [Trade::Buy, Trade::Sell];
        let labels = choices.map(|t| t.label());
        let selection = Select::new()
            .with_prompt(format!("Market is {}", quote))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()?;
        Ok(Command::Trade(choices[selection]))
    }
    fn width(&self, prompt: &str, minimum: Width, maximum: Option<Width>) -> anyhow::Result<Width> {
        Ok(Input::<Width>::new()
            .with_prompt(prompt)
            .validate_with(move |width: &Width| -> Result<(), String> {
                match maximum {
                    _ if *width < minimum => Err(format!("width must be at least {}", minimum)),
                    Some(max) if *width > max => Err(format!("reduce by at least 10%, to {} or less", max)),
                    _ => Ok(()),
                }
            })
            .interact_text()?)
    }
    fn current(game: &Game) -> anyhow::Result<Width> {
        game.width()
            .ok_or_else(|| anyhow::anyhow!("width has not been set"))
    }
}
