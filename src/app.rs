use gloo::console;
use yew::prelude::*;
use yew::TargetCast;
use web_sys::HtmlInputElement;

use crate::config::{CalculatorSettings, Trigger};
use crate::format::format_input;
use crate::state::CalculatorState;

#[derive(Properties, PartialEq)]
pub struct ProfitCalculatorProps {
    #[prop_or_default]
    pub settings: CalculatorSettings,
}

#[function_component(ProfitCalculator)]
pub fn profit_calculator(props: &ProfitCalculatorProps) -> Html {
    let settings = props.settings.clone();
    let state = {
        let settings = settings.clone();
        use_state(move || {
            let state = CalculatorState::initialize(&settings);
            if settings.trigger == Trigger::OnLoad {
                console::debug!(format!("calculated on load: {:?}", state.payout()));
            }
            state
        })
    };

    // Handlers
    let on_stake_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = *state;
            next.on_stake_change(&target.value());
            console::debug!(format!("stake input {:?} -> {}", target.value(), next.stake()));
            state.set(next);
        })
    };
    let on_odds_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            let mut next = *state;
            next.on_odds_change(&target.value());
            console::debug!(format!("odds input {:?} -> {}", target.value(), next.odds()));
            state.set(next);
        })
    };
    let on_calculate = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            let payout = next.on_calculate();
            console::debug!(format!(
                "calculated: stake {} odds {} -> profit {} total {}",
                next.stake(), next.odds(), payout.profit, payout.total_return
            ));
            state.set(next);
        })
    };

    let display = state.display(&settings.currency);

    html! {
        <section class="profit-calculator">
            <div class="card">
                <h2>{"Рассчитайте свой потенциальный выигрыш"}</h2>

                <div class="input-group">
                    <label for="bet-amount">{format!("Сумма ставки ({})", settings.currency)}</label>
                    <input
                        id="bet-amount"
                        type="number"
                        min="0"
                        value={format_input(state.stake())}
                        oninput={on_stake_input}
                        aria-label="Stake amount" />
                </div>

                <div class="input-group">
                    <label for="odds">{"Коэффициент"}</label>
                    <input
                        id="odds"
                        type="number"
                        step="0.01"
                        min="1"
                        value={format_input(state.odds())}
                        oninput={on_odds_input}
                        aria-label="Decimal odds" />
                </div>

                { if let Some(d) = display {
                    html!{
                        <div class="results">
                            <div class="metric-item">
                                <div class="metric-label">{"Чистая прибыль:"}</div>
                                <div class="metric-value success">{d.profit}</div>
                            </div>
                            <div class="metric-item">
                                <div class="metric-label">{"Общий возврат:"}</div>
                                <div class="metric-value">{d.total_return}</div>
                            </div>
                        </div>
                    }
                } else { html!{} }}

                <button onclick={on_calculate} style="margin-top:16px; width: 100%;" aria-label="Calculate profit">
                    {"Рассчитать"}
                </button>
            </div>
        </section>
    }
}

// Mounts the on-demand variant; host pages embedding `ProfitCalculator` pick
// the variant through its `settings` prop (`CalculatorSettings::auto_calculating`).
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="container">
            <header>
                <h1>{"Калькулятор прибыли"}</h1>
            </header>
            <ProfitCalculator settings={CalculatorSettings::default()} />
        </div>
    }
}
