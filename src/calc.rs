use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Payout { // full precision, rounded only for display
    #[wasm_bindgen(readonly)]
    pub profit: f64,
    #[wasm_bindgen(readonly, js_name = totalReturn)]
    pub total_return: f64,
}

pub fn calculate(stake: f64, odds: f64) -> Payout {
    let total_return = stake * odds;
    let profit = total_return - stake;
    Payout { profit, total_return }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool { (a - b).abs() <= 1e-9 * b.abs().max(1.0) }

    #[test]
    fn test_formula_holds_across_domain() {
        for &stake in &[0.0, 0.01, 1.0, 10.0, 99.99, 100.0, 1234.5, 1e6] {
            for &odds in &[1.0, 1.01, 1.5, 2.0, 3.75, 10.0, 101.0] {
                let p = calculate(stake, odds);
                assert!(close(p.total_return, stake * odds), "total_return for {} @ {}", stake, odds);
                assert!(close(p.profit, stake * odds - stake), "profit for {} @ {}", stake, odds);
                assert!(p.profit >= 0.0);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(calculate(37.3, 2.17), calculate(37.3, 2.17));
    }

    #[test]
    fn test_zero_stake() {
        for &odds in &[1.0, 2.0, 50.0] {
            let p = calculate(0.0, odds);
            assert_eq!(p.total_return, 0.0);
            assert_eq!(p.profit, 0.0);
        }
    }

    #[test]
    fn test_even_odds_return_stake() {
        let p = calculate(200.0, 1.0);
        assert_eq!(p.total_return, 200.0);
        assert_eq!(p.profit, 0.0);
    }

    #[test]
    fn test_default_scenario() {
        let p = calculate(100.0, 1.5);
        assert_eq!(p.total_return, 150.0);
        assert_eq!(p.profit, 50.0);
    }
}
