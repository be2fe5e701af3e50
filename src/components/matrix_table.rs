use super::{column_averages::ColumnAverages, matrix_provider::use_matrix, matrix_row::MatrixRow};
use crate::aggregates::column_averages;
use crate::model::MatrixAction;
use crate::state::{action_for, PointerEvent};
use yew::prelude::*;

#[function_component]
pub fn MatrixTable() -> Html {
    let ctx = use_matrix();
    let state = ctx.state.clone();

    let on_pointer = {
        let ctx = ctx.clone();
        Callback::from(move |ev: PointerEvent| ctx.dispatch(action_for(ev)))
    };
    let on_remove = {
        let ctx = ctx.clone();
        Callback::from(move |row: usize| ctx.dispatch(MatrixAction::RemoveRow { row }))
    };
    let body_click = {
        let cb = on_pointer.clone();
        Callback::from(move |_: MouseEvent| cb.emit(PointerEvent::OutsideClick))
    };
    let body_leave = {
        let cb = on_pointer.clone();
        Callback::from(move |_: MouseEvent| cb.emit(PointerEvent::BodyLeave))
    };
    let add_row = {
        let ctx = ctx.clone();
        Callback::from(move |_: MouseEvent| ctx.dispatch(MatrixAction::AddRow))
    };

    let rows = state.grid.iter().enumerate().map(|(row_index, cells)| {
        let highlighted: Vec<bool> = cells.iter().map(|c| state.is_highlighted(c.id)).collect();
        // rows are keyed by their first cell's id so hover state follows the row
        let key = cells.first().map(|c| c.id.to_string()).unwrap_or_else(|| format!("empty-{}", row_index));
        html! {
            <MatrixRow
                key={key}
                row_index={row_index}
                cells={cells.clone()}
                highlighted={highlighted}
                on_pointer={on_pointer.clone()}
                on_remove={on_remove.clone()}
            />
        }
    });

    html! {
        <div style="display:flex; flex-direction:column; gap:10px; align-items:flex-start;">
            <div class="matrix-summary" style="font-size:12px; opacity:0.7;">
                { format!("{} × {} ({} cells, {} highlighted)", state.rows(), state.cols(), state.cell_count(), state.highlighted.len()) }
            </div>
            <div style="max-width:100%; overflow:auto; border:1px solid #30363d; border-radius:8px;">
                <table style="border-collapse:collapse; font-size:13px;">
                    <tbody onclick={body_click} onmouseleave={body_leave}>
                        { for rows }
                    </tbody>
                    <ColumnAverages averages={column_averages(&state.grid)} />
                </table>
            </div>
            <button onclick={add_row} style="padding:6px 14px;">{"Add Row"}</button>
        </div>
    }
}
