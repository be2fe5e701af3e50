use crate::aggregates::format_one_decimal;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ColumnAveragesProps {
    pub averages: Vec<f64>,
}

#[function_component]
pub fn ColumnAverages(props: &ColumnAveragesProps) -> Html {
    let cell_style = "padding:6px 10px; text-align:right; font-size:12px; opacity:0.8; border-top:2px solid #30363d; font-variant-numeric:tabular-nums;";
    html! {
        <tfoot>
            <tr>
                { for props.averages.iter().map(|avg| html! {
                    <th style={cell_style}><span>{ format_one_decimal(*avg) }</span></th>
                }) }
                <th></th>
            </tr>
        </tfoot>
    }
}
