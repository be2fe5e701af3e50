use super::{config_form::ConfigForm, matrix_provider::MatrixProvider, matrix_table::MatrixTable};
use crate::config::MatrixConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Last submitted configuration; None until the first Generate.
    let active = use_state(|| None::<MatrixConfig>);
    let generation = use_state(|| 0_u32);

    let on_generate = {
        let active = active.clone();
        let generation = generation.clone();
        Callback::from(move |cfg: MatrixConfig| {
            log::info!(
                "generate: {} rows, {} cols, highlight {}",
                cfg.rows,
                cfg.cols,
                cfg.highlight_amount
            );
            active.set(Some(cfg));
            generation.set(generation.wrapping_add(1));
        })
    };

    let content = match *active {
        Some(cfg) => html! {
            <MatrixProvider config={cfg} generation={*generation}>
                <MatrixTable />
            </MatrixProvider>
        },
        None => html! {
            <div style="opacity:0.7; font-size:14px;">{"Press generate button to inspect the Matrix"}</div>
        },
    };

    html! {
        <div id="root" style="display:flex; flex-direction:column; gap:16px; padding:16px; color:#c9d1d9; background:#0e1116; min-height:100vh; font-family:sans-serif;">
            <ConfigForm on_generate={on_generate} />
            { content }
        </div>
    }
}
