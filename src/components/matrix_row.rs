use crate::aggregates::row_summary;
use crate::model::Cell;
use crate::state::{CellView, PointerEvent, RowDisplay};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MatrixRowProps {
    pub row_index: usize,
    pub cells: Vec<Cell>,
    /// Parallel to `cells`.
    pub highlighted: Vec<bool>,
    pub on_pointer: Callback<PointerEvent>,
    pub on_remove: Callback<usize>,
}

#[function_component]
pub fn MatrixRow(props: &MatrixRowProps) -> Html {
    let display = use_state(RowDisplay::default);
    let summary = row_summary(&props.cells);
    let row = props.row_index;

    let cells = props.cells.iter().enumerate().map(|(col, cell)| {
        let view = CellView {
            amount: cell.amount,
            highlighted: props.highlighted.get(col).copied().unwrap_or(false),
            display: *display,
            summary,
        };
        let onclick = {
            let cb = props.on_pointer.clone();
            Callback::from(move |e: MouseEvent| {
                // keep the body handler from treating this as an outside click
                e.stop_propagation();
                cb.emit(PointerEvent::CellClick { row, col });
            })
        };
        let onmouseenter = {
            let cb = props.on_pointer.clone();
            Callback::from(move |_: MouseEvent| cb.emit(PointerEvent::CellEnter { row, col }))
        };
        html! {
            <td key={cell.id} style={view.style()} onclick={onclick} onmouseenter={onmouseenter}>
                <span>{ view.label() }</span>
            </td>
        }
    });

    let show_share = {
        let display = display.clone();
        Callback::from(move |_: MouseEvent| display.set(RowDisplay::Share))
    };
    let show_normal = {
        let display = display.clone();
        Callback::from(move |_: MouseEvent| display.set(RowDisplay::Normal))
    };
    let remove_cb = {
        let cb = props.on_remove.clone();
        Callback::from(move |_: MouseEvent| cb.emit(row))
    };

    html! {
        <tr>
            { for cells }
            <th style="padding:4px 8px; border:1px solid #30363d;">
                <div style="display:flex; align-items:center; gap:8px; justify-content:space-between;">
                    <span style="font-weight:600; cursor:help; font-variant-numeric:tabular-nums;" onmouseenter={show_share} onmouseleave={show_normal}>
                        { summary.total }
                    </span>
                    <button onclick={remove_cb} title="Remove row" style="padding:0 6px; color:#f85149;">{"✕"}</button>
                </div>
            </th>
        </tr>
    }
}
