use crate::sanitize::{MIN_ODDS, MIN_STAKE};

pub const DEFAULT_STAKE: f64 = 100.0;
pub const DEFAULT_ODDS: f64 = 1.5;
pub const DEFAULT_CURRENCY: &str = "₽";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trigger {
    #[default]
    OnDemand,
    OnLoad, // once at initialization, then on demand
}

#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorSettings {
    pub initial_stake: f64,
    pub initial_odds: f64,
    pub trigger: Trigger,
    pub currency: String,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            initial_stake: DEFAULT_STAKE,
            initial_odds: DEFAULT_ODDS,
            trigger: Trigger::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl CalculatorSettings {
    pub fn auto_calculating() -> Self {
        Self { trigger: Trigger::OnLoad, ..Self::default() }
    }

    // initial values get the same domain checks as typed input
    pub fn sanitized(&self) -> Self {
        let keep = |v: f64, min: f64| if v.is_finite() && v >= min { v } else { min };
        Self {
            initial_stake: keep(self.initial_stake, MIN_STAKE),
            initial_odds: keep(self.initial_odds, MIN_ODDS),
            ..self.clone()
        }
    }
}
