pub mod display;
pub mod pointer;

pub use display::{CellView, RowDisplay};
pub use pointer::{action_for, PointerEvent};
