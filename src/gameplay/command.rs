use super::*;
use crate::Price;
use crate::Width;

/// A move submitted by the human side of the duel.
///
/// Text form, one command per line:
/// `width 400`, `reduce 360`, `market`, `quote 40 60`, `buy`, `sell`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    InitialWidth(Width),
    ReduceWidth(Width),
    ElectMarketMaker,
    Quote(Price, Price),
    Trade(Trade),
}

impl Command {
    /// Short name used in rejections and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InitialWidth(_) => "initial width",
            Self::ReduceWidth(_) => "width reduction",
            Self::ElectMarketMaker => "market election",
            Self::Quote(..) => "quote",
            Self::Trade(_) => "trade",
        }
    }
    /// Phase in which this command is legal.
    pub fn phase(&self) -> Phase {
        match self {
            Self::InitialWidth(_) => Phase::WidthSetting,
            Self::ReduceWidth(_) => Phase::Narrowing,
            Self::ElectMarketMaker => Phase::Narrowing,
            Self::Quote(..) => Phase::Quoting,
            Self::Trade(_) => Phase::Trading,
        }
    }
    /// Parses a whole-number width.
    pub fn width(input: &str) -> Result<Width, Rejection> {
        input
            .trim()
            .parse::<Width>()
            .map_err(|_| Rejection::Malformed {
                field: "width",
                input: input.to_string(),
            })
    }
    /// Parses a finite price.
    pub fn price(field: &'static str, input: &str) -> Result<Price, Rejection> {
        input
            .trim()
            .parse::<Price>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or_else(|| Rejection::Malformed {
                field,
                input: input.to_string(),
            })
    }
}

impl TryFrom<&str> for Command {
    type Error = Rejection;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts = s.split_whitespace().collect::<Vec<&str>>();
        let arg = |i: usize| parts.get(i).copied().unwrap_or("");
        match arg(0).to_lowercase().as_str() {
            "width" => Self::width(arg(1)).map(Self::InitialWidth),
            "reduce" => Self::width(arg(1)).map(Self::ReduceWidth),
            "market" => Ok(Self::ElectMarketMaker),
            "quote" => Ok(Self::Quote(
                Self::price("bid", arg(1))?,
                Self::price("ask", arg(2))?,
            )),
            _ => Trade::try_from(arg(0)).map(Self::Trade),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InitialWidth(w) => write!(f, "width {}", w),
            Self::ReduceWidth(w) => write!(f, "reduce {}", w),
            Self::ElectMarketMaker => write!(f, "market"),
            Self::Quote(bid, ask) => write!(f, "quote {} {}", bid, ask),
            Self::Trade(trade) => write!(f, "{}", trade),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        assert!(Command::try_from("width 400").unwrap() == Command::InitialWidth(400));
        assert!(Command::try_from("reduce 360").unwrap() == Command::ReduceWidth(360));
        assert!(Command::try_from("market").unwrap() == Command::ElectMarketMaker);
        assert!(Command::try_from("quote 40 60.5").unwrap() == Command::Quote(40., 60.5));
        assert!(Command::try_from("Buy").unwrap() == Command::Trade(Trade::Buy));
        assert!(Command::try_from("sell").unwrap() == Command::Trade(Trade::Sell));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(matches!(
            Command::try_from("width -3"),
            Err(Rejection::Malformed { field: "width", .. })
        ));
        assert!(matches!(
            Command::try_from("reduce ten"),
            Err(Rejection::Malformed { field: "width", .. })
        ));
        assert!(matches!(
            Command::try_from("quote 40"),
            Err(Rejection::Malformed { field: "ask", .. })
        ));
        assert!(matches!(
            Command::try_from("quote NaN 4"),
            Err(Rejection::Malformed { field: "bid", .. })
        ));
    }

    #[test]
    fn rejects_unknown_words() {
        assert!(matches!(
            Command::try_from("hold"),
            Err(Rejection::UnknownTrade { .. })
        ));
        assert!(Command::try_from("").is_err());
    }

    #[test]
    fn display_parses_back() {
        for command in [
            Command::InitialWidth(12),
            Command::ReduceWidth(10),
            Command::ElectMarketMaker,
            Command::Quote(3., 13.),
            Command::Trade(Trade::Sell),
        ] {
            assert!(Command::try_from(command.to_string().as_str()).unwrap() == command);
        }
    }
}
