/// Stage of the negotiation a [`super::Game`] is in.
///
/// Never stored; always derived from the game's fields so a deserialized
/// snapshot cannot disagree with itself.
///
/// - `WidthSetting`: first mover picks the opening width
/// - `Narrowing`: parties alternate shrinking the width or electing to quote
/// - `Quoting`: the market maker owes a bid/ask
/// - `Trading`: the counter-party buys or sells against the quote
/// - `Resolution`: a trade happened, damage not yet charged
/// - `GameOver`: terminal
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Phase {
    WidthSetting,
    Narrowing,
    Quoting,
    Trading,
    Resolution,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WidthSetting => write!(f, "width setting"),
            Self::Narrowing => write!(f, "narrowing"),
            Self::Quoting => write!(f, "quoting"),
            Self::Trading => write!(f, "trading"),
            Self::Resolution => write!(f, "resolution"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}
