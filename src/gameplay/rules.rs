use super::*;
use crate::Capital;
use crate::Width;
use serde::Deserialize;
use serde::Serialize;

/// Runtime knobs of the protocol.
///
/// `Rules::default()` is the canonical rule set. Raising `minimum` to 10
/// reproduces the stricter opening-width variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Capital each party starts the game with.
    pub capital: Capital,
    /// Largest fraction of the previous width a reduction may keep.
    pub reduction: f64,
    /// Smallest legal width.
    pub minimum: Width,
    /// How damage is assessed at resolution.
    pub formula: Formula,
    /// Whether RandomBot ignores the counter-party's narrowing.
    pub frozen: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            capital: crate::STARTING_CAPITAL,
            reduction: crate::REDUCTION_FACTOR,
            minimum: crate::MINIMUM_WIDTH,
            formula: Formula::default(),
            frozen: false,
        }
    }
}

impl Rules {
    /// Largest width a reduction from `width` may land on, if any.
    /// None when even the smallest legal width is not a 10% cut.
    pub fn ceiling(&self, width: Width) -> Option<Width> {
        Some((width as f64 * self.reduction).floor() as Width).filter(|w| *w >= self.minimum)
    }
    /// Checks a width reduction from `from` to `to`.
    pub fn reduce(&self, from: Width, to: Width) -> Result<Width, Rejection> {
        if to < self.minimum {
            return Err(Rejection::WidthTooSmall {
                minimum: self.minimum,
                actual: to,
            });
        }
        match self.ceiling(from) {
            None => Err(Rejection::Irreducible { width: from }),
            Some(maximum) if to > maximum => Err(Rejection::ReductionTooSmall {
                maximum,
                actual: to,
            }),
            Some(_) => Ok(to),
        }
    }
    /// Checks an opening width.
    pub fn open(&self, width: Width) -> Result<Width, Rejection> {
        if width < self.minimum {
            Err(Rejection::WidthTooSmall {
                minimum: self.minimum,
                actual: width,
            })
        } else if width > crate::MAXIMUM_WIDTH {
            Err(Rejection::WidthTooLarge {
                maximum: crate::MAXIMUM_WIDTH,
                actual: width,
            })
        } else {
            Ok(width)
        }
    }
}
