use profit_calculator::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
