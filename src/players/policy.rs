use super::*;
use crate::Price;
use crate::Width;
use crate::gameplay::Decision;
use crate::gameplay::Quote;
use crate::gameplay::Trade;
use rand::RngCore;

/// Capability contract shared by every bot temperament.
///
/// Implementors only own a [`Snapshot`] and override the hooks that make them
/// distinct; the reasoning below is common to all of them.
///
/// - `tolerance` scales the risk threshold that decides when to quote
/// - `skew` shifts the quote center away from the estimate
pub trait Policy {
    fn snapshot(&self) -> &Snapshot;
    fn snapshot_mut(&mut self) -> &mut Snapshot;
    fn into_snapshot(self: Box<Self>) -> Snapshot;

    /// Called after the other side acted during narrowing.
    fn update_belief(&mut self, decision: Decision, width: Width, rng: &mut dyn RngCore);

    fn tolerance(&self) -> f64 {
        1.
    }
    fn skew(&self) -> Price {
        0.
    }

    fn estimate(&self) -> Price {
        self.snapshot().current_estimate
    }
    /// Opening width: twice the absolute estimate.
    fn initial_width(&mut self) -> Width {
        let width = ((self.estimate().abs() * crate::INITIAL_WIDTH_MULTIPLE).round() as Width)
            .clamp(crate::MINIMUM_WIDTH, crate::MAXIMUM_WIDTH);
        self.snapshot_mut()
            .record(format!("Setting initial width: {}", width));
        width
    }
    /// Proposed narrowing; the engine clamps it into the legal range.
    fn reduce_width(&mut self, width: Width) -> Width {
        let proposal =
            (width as f64 * self.snapshot().width_reduction_multiplier).round() as Width;
        self.snapshot_mut()
            .record(format!("Reducing width: {} -> {}", width, proposal));
        proposal
    }
    /// What quoting at `width` around the estimate stands to lose.
    fn potential_loss(&self, width: Width) -> f64 {
        let estimate = self.estimate();
        let truth = self.snapshot().true_value;
        let half = width as f64 / 2.;
        if estimate > truth {
            (estimate - (estimate - half).round()).abs()
        } else if estimate < truth {
            ((estimate + half).round() - estimate).abs()
        } else {
            half
        }
    }
    fn uncertainty(&self) -> f64 {
        self.estimate().abs() * self.snapshot().estimate_noise
    }
    fn risk_threshold(&self) -> f64 {
        self.uncertainty() * self.snapshot().market_willingness * self.tolerance()
    }
    /// Quote when the potential loss is under the risk threshold.
    fn choose_action(&mut self, width: Width, _: &mut dyn RngCore) -> Decision {
        let loss = self.potential_loss(width);
        let threshold = self.risk_threshold();
        let decision = if loss < threshold {
            Decision::MakeMarket
        } else {
            Decision::ReduceWidth
        };
        let line = format!(
            "Width {}, estimate {:.2}: {} (potential loss {:.2}, risk threshold {:.2})",
            width,
            self.estimate(),
            decision,
            loss,
            threshold
        );
        self.snapshot_mut().record(line);
        decision
    }
    /// Quote of exactly `width` around the (skewed) estimate.
    fn make_market(&mut self, width: Width) -> Quote {
        let center = self.estimate() - self.skew();
        let span = width as Price;
        let (bid, _) = self.validate_market(center - span / 2., center + span / 2.);
        let bid = bid.max(crate::MINIMUM_BID);
        let quote = Quote::new(bid, bid + span);
        self.snapshot_mut()
            .record(format!("Making market: bid {}, ask {}", quote.bid, quote.ask));
        quote
    }
    /// Trade toward the estimate; coin flip when it sits inside the quote.
    fn trade(&mut self, quote: &Quote, rng: &mut dyn RngCore) -> Trade {
        let estimate = self.estimate();
        let trade = if quote.bid < crate::MINIMUM_BID {
            if estimate < quote.ask * 2. {
                Trade::Sell
            } else {
                Trade::Buy
            }
        } else if estimate > quote.ask {
            Trade::Buy
        } else if estimate < quote.bid {
            Trade::Sell
        } else {
            Trade::random(rng)
        };
        let line = format!("Estimate {:.2} against {}: {}", estimate, quote, trade);
        self.snapshot_mut().record(line);
        trade
    }
    /// Rounds a raw quote to whole units, keeps the bid above the lowest
    /// plausible value and guarantees `bid < ask`.
    fn validate_market(&self, bid: Price, ask: Price) -> (Price, Price) {
        let snapshot = self.snapshot();
        let estimate = snapshot.current_estimate;
        let std_dev = estimate.abs() * snapshot.estimate_noise;
        let floor = (estimate - snapshot.std_dev_multiplier * std_dev)
            .round()
            .max(0.);
        let bid = bid.round().max(floor);
        let ask = ask.round().max(floor + 1.);
        if bid >= ask { (bid, bid + 1.) } else { (bid, ask) }
    }
}

/// Weighted average of the estimate and the truth, heavier on the estimate
/// the wider the other side left the range.
pub fn converge(estimate: Price, truth: Price, width: Width) -> Price {
    let inertia = width as f64 + 1.;
    (estimate * inertia + truth) / (inertia + 1.)
}

/// Halfway between the estimate and the midpoint of `[0, width]`, the only
/// center a bare width implies.
pub fn recenter(estimate: Price, width: Width) -> Price {
    (estimate + width as f64 / 2.) / 2.
}

/// Folds a narrowing into the running bias and recenters the estimate.
pub fn absorb(snapshot: &mut Snapshot, width: Width) {
    snapshot.player_bias -= (width as Price - snapshot.true_value) * crate::BIAS_RATE;
    snapshot.current_estimate = recenter(snapshot.current_estimate, width);
    let line = format!(
        "Belief updated, estimate {:.2}, player bias {:.2}",
        snapshot.current_estimate, snapshot.player_bias
    );
    snapshot.record(line);
}
