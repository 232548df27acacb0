// Inputs change on every keystroke; the payout only changes when the
// calculator runs, so it can lag behind the inputs until the next trigger.

use crate::calc::{calculate, Payout};
use crate::config::{CalculatorSettings, Trigger};
use crate::format::format_amount;
use crate::sanitize::{sanitize_odds, sanitize_stake};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatorState {
    stake: f64,
    odds: f64,
    payout: Option<Payout>, // None until the first calculation
}

#[derive(Clone, Debug, PartialEq)]
pub struct PayoutDisplay {
    pub profit: String,
    pub total_return: String,
}

impl CalculatorState {
    pub fn new(stake: f64, odds: f64) -> Self {
        Self { stake, odds, payout: None }
    }

    // With `Trigger::OnLoad` the calculator runs here, once.
    pub fn initialize(settings: &CalculatorSettings) -> Self {
        let settings = settings.sanitized();
        let mut state = Self::new(settings.initial_stake, settings.initial_odds);
        if settings.trigger == Trigger::OnLoad {
            state.on_calculate();
        }
        state
    }

    pub fn on_stake_change(&mut self, raw: &str) {
        self.stake = sanitize_stake(raw);
    }

    pub fn on_odds_change(&mut self, raw: &str) {
        self.odds = sanitize_odds(raw);
    }

    pub fn on_calculate(&mut self) -> Payout {
        let payout = calculate(self.stake, self.odds);
        self.payout = Some(payout);
        payout
    }

    pub fn stake(&self) -> f64 { self.stake }
    pub fn odds(&self) -> f64 { self.odds }
    pub fn payout(&self) -> Option<Payout> { self.payout }
    pub fn is_calculated(&self) -> bool { self.payout.is_some() }

    pub fn display(&self, currency: &str) -> Option<PayoutDisplay> {
        self.payout.map(|p| PayoutDisplay {
            profit: format_amount(p.profit, currency),
            total_return: format_amount(p.total_return, currency),
        })
    }
}
