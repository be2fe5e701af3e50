use yew::prelude::*;

use super::number_input::NumberInput;
use crate::config::{MatrixConfig, MAX_COLS, MAX_HIGHLIGHT, MAX_ROWS};

#[derive(Properties, PartialEq, Clone)]
pub struct ConfigFormProps {
    pub on_generate: Callback<MatrixConfig>,
}

#[function_component]
pub fn ConfigForm(props: &ConfigFormProps) -> Html {
    let defaults = MatrixConfig::default();
    let rows = use_state(|| defaults.rows.to_string());
    let cols = use_state(|| defaults.cols.to_string());
    let highlight = use_state(|| defaults.highlight_amount.to_string());

    let setter = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |v: String| handle.set(v))
    };

    let generate_cb = {
        let cb = props.on_generate.clone();
        let rows = rows.clone();
        let cols = cols.clone();
        let highlight = highlight.clone();
        Callback::from(move |_| cb.emit(MatrixConfig::from_inputs(&rows, &cols, &highlight)))
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:12px; align-items:flex-start;">
            <div style="display:flex; gap:12px; flex-wrap:wrap;">
                <NumberInput title="Rows" value={(*rows).clone()} max={MAX_ROWS} on_change={setter(&rows)} />
                <NumberInput title="Columns" value={(*cols).clone()} max={MAX_COLS} on_change={setter(&cols)} />
                <NumberInput title="Amount of highlight cells" value={(*highlight).clone()} max={MAX_HIGHLIGHT} on_change={setter(&highlight)} />
            </div>
            <button onclick={generate_cb} style="padding:6px 14px;">{"Generate Matrix"}</button>
        </div>
    }
}
