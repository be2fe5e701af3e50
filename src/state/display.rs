// Per-cell presentation derived from a snapshot
use crate::aggregates::{format_one_decimal, heat_percent, share_percent, RowSummary};

/// How a row renders its cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowDisplay {
    /// Raw amounts.
    #[default]
    Normal,
    /// Percent of the row total over a heatmap scaled by the row maximum.
    Share,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellView {
    pub amount: u32,
    pub highlighted: bool,
    pub display: RowDisplay,
    pub summary: RowSummary,
}

pub const HIGHLIGHT_BG: &str = "#3b2f0b";
pub const HEAT_COLOR: &str = "#1f6feb";

impl CellView {
    pub fn label(&self) -> String {
        match self.display {
            RowDisplay::Normal => self.amount.to_string(),
            RowDisplay::Share => {
                format!("{}%", format_one_decimal(share_percent(self.amount, self.summary.total)))
            }
        }
    }

    pub fn style(&self) -> String {
        let base = "padding:6px 10px; text-align:right; cursor:pointer; border:1px solid #30363d; font-variant-numeric:tabular-nums;";
        let mut style = String::from(base);
        if self.highlighted {
            style.push_str(&format!(" background:{}; color:#d4af37; font-weight:600;", HIGHLIGHT_BG));
        }
        if self.display == RowDisplay::Share {
            let heat = heat_percent(self.amount, self.summary.max);
            style.push_str(&format!(
                " background:linear-gradient(to top, {} {}%, transparent 0%);",
                HEAT_COLOR,
                format_one_decimal(heat)
            ));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(amount: u32, display: RowDisplay, highlighted: bool) -> CellView {
        CellView {
            amount,
            highlighted,
            display,
            summary: RowSummary { total: 600, max: 300 },
        }
    }

    #[test]
    fn normal_mode_shows_raw_amount() {
        let v = view(200, RowDisplay::Normal, false);
        assert_eq!(v.label(), "200");
        assert!(!v.style().contains("linear-gradient"));
    }

    #[test]
    fn share_mode_shows_percent_of_total() {
        assert_eq!(view(100, RowDisplay::Share, false).label(), "16.7%");
        assert_eq!(view(300, RowDisplay::Share, false).label(), "50.0%");
    }

    #[test]
    fn share_mode_scales_heatmap_by_row_max() {
        let style = view(200, RowDisplay::Share, false).style();
        assert!(style.contains("66.7%"), "{style}");
        let style = view(300, RowDisplay::Share, false).style();
        assert!(style.contains("100.0%"), "{style}");
    }

    #[test]
    fn highlighted_cells_get_marked() {
        assert!(view(100, RowDisplay::Normal, true).style().contains(HIGHLIGHT_BG));
        assert!(!view(100, RowDisplay::Normal, false).style().contains(HIGHLIGHT_BG));
    }
}
