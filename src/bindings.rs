use wasm_bindgen::prelude::*;

use crate::calc::{calculate, Payout};
use crate::sanitize::{sanitize_odds, sanitize_stake};

// Sanitizer + calculator for host pages that only want the numbers.
#[wasm_bindgen(js_name = calculatePayout)]
pub fn calculate_payout(stake_input: &str, odds_input: &str) -> Payout {
    calculate(sanitize_stake(stake_input), sanitize_odds(odds_input))
}
