use matrix_explorer::components::app::App;
use matrix_explorer::util;

fn main() {
    util::init_browser();
    yew::Renderer::<App>::new().render();
}
