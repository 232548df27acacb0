pub mod app;
pub mod bindings;
pub mod calc;
pub mod config;
pub mod format;
pub mod sanitize;
pub mod state;

pub use app::{App, ProfitCalculator};
pub use calc::{calculate, Payout};
pub use config::{CalculatorSettings, Trigger};
pub use state::CalculatorState;
