//! Core matrix state: cells, the grid, the highlight set and the reducer that
//! drives them.

use std::collections::BTreeSet;
use std::rc::Rc;
use yew::Reducible;

use crate::config::MatrixConfig;
use crate::error::{MatrixError, Result};
use crate::nearest::nearest_cells;

pub const MIN_AMOUNT: u32 = 100;
pub const MAX_AMOUNT: u32 = 999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Stable identity; survives row removal, never reused within one grid.
    pub id: u32,
    pub amount: u32,
}

/// Row-major cells; every row holds `config.cols` cells.
pub type Grid = Vec<Vec<Cell>>;

/// Supplies the starting amount for freshly created cells.
pub trait AmountSource {
    fn next_amount(&mut self) -> u32;
}

impl<F: FnMut() -> u32> AmountSource for F {
    fn next_amount(&mut self) -> u32 {
        self()
    }
}

/// Uniform amounts in `MIN_AMOUNT..=MAX_AMOUNT` from the browser's RNG.
pub struct JsRandom;

impl AmountSource for JsRandom {
    fn next_amount(&mut self) -> u32 {
        let span = (MAX_AMOUNT - MIN_AMOUNT + 1) as f64;
        MIN_AMOUNT + (js_sys::Math::random() * span).floor() as u32
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixState {
    /// Frozen at generation time.
    pub config: MatrixConfig,
    pub grid: Grid,
    pub highlighted: BTreeSet<u32>,
    /// Next id to hand out; independent of how many cells currently exist.
    pub next_id: u32,
    /// Bumped on every accepted mutation.
    pub version: u64,
}

impl MatrixState {
    /// Builds a fresh `rows × cols` grid with ids `0..rows*cols` in row-major order.
    pub fn generate(config: MatrixConfig, source: &mut impl AmountSource) -> Self {
        let mut state = Self {
            config,
            grid: Vec::with_capacity(config.rows as usize),
            highlighted: BTreeSet::new(),
            next_id: 0,
            version: 0,
        };
        for _ in 0..config.rows {
            let row = state.fresh_row(source);
            state.grid.push(row);
        }
        state
    }

    fn fresh_row(&mut self, source: &mut impl AmountSource) -> Vec<Cell> {
        (0..self.config.cols)
            .map(|_| {
                let id = self.next_id;
                self.next_id += 1;
                Cell {
                    id,
                    amount: source.next_amount(),
                }
            })
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn cols(&self) -> usize {
        self.config.cols as usize
    }

    pub fn cell_count(&self) -> usize {
        self.grid.iter().map(Vec::len).sum()
    }

    pub fn is_highlighted(&self, id: u32) -> bool {
        self.highlighted.contains(&id)
    }

    pub fn increment_cell(&mut self, row: usize, col: usize) -> Result<()> {
        let cell = self
            .grid
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(MatrixError::CellOutOfBounds { row, col })?;
        cell.amount = cell.amount.saturating_add(1);
        Ok(())
    }

    /// Appends one row at the bottom with ids continuing from `next_id`.
    pub fn add_row(&mut self, source: &mut impl AmountSource) {
        let row = self.fresh_row(source);
        self.grid.push(row);
    }

    /// Removes and returns the row at `row`; rows below move up by one.
    pub fn remove_row(&mut self, row: usize) -> Result<Vec<Cell>> {
        if row >= self.grid.len() {
            return Err(MatrixError::RowOutOfBounds { row });
        }
        let removed = self.grid.remove(row);
        for c in &removed {
            self.highlighted.remove(&c.id);
        }
        Ok(removed)
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted.clear();
    }

    pub fn set_highlight(&mut self, ids: BTreeSet<u32>) {
        self.highlighted = ids;
    }

    /// Highlights the cells nearest in value to `(row, col)`.
    pub fn highlight_nearest(&mut self, row: usize, col: usize) -> Result<()> {
        let n = self.config.highlight_amount as usize;
        self.highlighted = nearest_cells(&self.grid, row, col, n)?;
        Ok(())
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum MatrixAction {
    Regenerate(MatrixConfig),
    IncrementCell { row: usize, col: usize },
    AddRow,
    RemoveRow { row: usize },
    HighlightNearest { row: usize, col: usize },
    ClearHighlight,
}

impl MatrixState {
    /// Applies `action` in place; `Ok(false)` means nothing changed.
    pub fn apply(&mut self, action: MatrixAction, source: &mut impl AmountSource) -> Result<bool> {
        use MatrixAction::*;
        match action {
            Regenerate(config) => {
                let version = self.version;
                *self = Self::generate(config, source);
                self.version = version;
                log::debug!(
                    "generated {}x{} matrix (highlight {})",
                    config.rows,
                    config.cols,
                    config.highlight_amount
                );
            }
            IncrementCell { row, col } => self.increment_cell(row, col)?,
            AddRow => {
                self.add_row(source);
                log::debug!("added row, now {} rows", self.rows());
            }
            RemoveRow { row } => {
                self.remove_row(row)?;
                log::debug!("removed row {}, now {} rows", row, self.rows());
            }
            HighlightNearest { row, col } => {
                let before = self.highlighted.clone();
                self.highlight_nearest(row, col)?;
                if self.highlighted == before {
                    return Ok(false);
                }
            }
            ClearHighlight => {
                if self.highlighted.is_empty() {
                    return Ok(false);
                }
                self.clear_highlight();
            }
        }
        self.version = self.version.wrapping_add(1);
        Ok(true)
    }
}

impl Reducible for MatrixState {
    type Action = MatrixAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match new.apply(action, &mut JsRandom) {
            Ok(true) => Rc::new(new),
            Ok(false) => self,
            Err(e) => {
                log::warn!("ignored matrix action: {}", e);
                self
            }
        }
    }
}
