// Pointer events over the matrix body, already resolved to cell coordinates
use crate::model::MatrixAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    CellClick { row: usize, col: usize },
    CellEnter { row: usize, col: usize },
    /// Pointer left the table body.
    BodyLeave,
    /// Click inside the body that did not land on a cell.
    OutsideClick,
}

pub fn action_for(event: PointerEvent) -> MatrixAction {
    match event {
        PointerEvent::CellClick { row, col } => MatrixAction::IncrementCell { row, col },
        PointerEvent::CellEnter { row, col } => MatrixAction::HighlightNearest { row, col },
        PointerEvent::BodyLeave | PointerEvent::OutsideClick => MatrixAction::ClearHighlight,
    }
}
