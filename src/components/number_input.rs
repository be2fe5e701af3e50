use yew::prelude::*;

use crate::config::{cap_input, MIN_VALUE};

#[derive(Properties, PartialEq, Clone)]
pub struct NumberInputProps {
    pub title: AttrValue,
    pub value: String,
    pub max: u32,
    pub on_change: Callback<String>,
}

#[function_component]
pub fn NumberInput(props: &NumberInputProps) -> Html {
    let oninput = {
        let cb = props.on_change.clone();
        let max = props.max;
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            cb.emit(cap_input(&input.value(), max));
        })
    };
    html! {
        <label style="display:flex; flex-direction:column; gap:4px; font-size:13px;">
            <span style="opacity:0.8;">{ props.title.clone() }</span>
            <input
                type="number"
                min={MIN_VALUE.to_string()}
                max={props.max.to_string()}
                value={props.value.clone()}
                oninput={oninput}
                style="width:140px; padding:6px 8px; background:#0e1116; color:#c9d1d9; border:1px solid #30363d; border-radius:6px;"
            />
        </label>
    }
}
