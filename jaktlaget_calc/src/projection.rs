//! Revenue projection table from the pitch material.
//!
//! These rows are quoted as submitted, not recomputed from the live license
//! table. Money columns are millions of SEK per year, excluding VAT.

use serde::Serialize;

use crate::format::format_decimal;

/// Price points (SEK / month) used by the projection columns.
pub const PROJECTION_PRICES_SEK: [u32; 3] = [19, 29, 49];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionRow {
    pub adoption_pct: u32,
    pub users: u64,
    /// Annual revenue at each of [`PROJECTION_PRICES_SEK`].
    pub revenue_mkr: [f64; 3],
    /// Estimated yearly operating cost.
    pub opex_mkr: f64,
    /// Annual profit at each of [`PROJECTION_PRICES_SEK`].
    pub profit_mkr: [f64; 3],
    /// Decimals the revenue cells were submitted with.
    #[serde(skip)]
    pub revenue_decimals: usize,
    /// Decimals the opex cell was submitted with.
    #[serde(skip)]
    pub opex_decimals: usize,
}

pub const PROJECTION: [ProjectionRow; 4] = [
    ProjectionRow {
        adoption_pct: 1,
        users: 8_957,
        revenue_mkr: [2.04, 3.12, 5.27],
        opex_mkr: 0.24,
        profit_mkr: [1.8, 2.9, 5.0],
        revenue_decimals: 2,
        opex_decimals: 2,
    },
    ProjectionRow {
        adoption_pct: 10,
        users: 89_571,
        revenue_mkr: [20.4, 31.2, 52.7],
        opex_mkr: 0.6,
        profit_mkr: [19.8, 30.6, 52.1],
        revenue_decimals: 1,
        opex_decimals: 1,
    },
    ProjectionRow {
        adoption_pct: 20,
        users: 179_141,
        revenue_mkr: [40.8, 62.4, 105.4],
        opex_mkr: 1.0,
        profit_mkr: [39.8, 61.4, 104.4],
        revenue_decimals: 1,
        opex_decimals: 1,
    },
    ProjectionRow {
        adoption_pct: 40,
        users: 358_282,
        revenue_mkr: [81.7, 124.8, 210.8],
        opex_mkr: 1.4,
        profit_mkr: [80.3, 123.4, 209.4],
        revenue_decimals: 1,
        opex_decimals: 1,
    },
];

impl ProjectionRow {
    /// Column label, e.g. `"10 %"`.
    pub fn adoption_label(&self) -> String {
        format!("{}\u{a0}%", self.adoption_pct)
    }

    /// Revenue cells, e.g. `"105,4 Mkr"`.
    pub fn revenue_cells(&self) -> [String; 3] {
        self.revenue_mkr
            .map(|v| format!("{} Mkr", format_decimal(v, self.revenue_decimals)))
    }

    /// Opex cell, e.g. `"~1,0 Mkr"`.
    pub fn opex_cell(&self) -> String {
        format!("~{} Mkr", format_decimal(self.opex_mkr, self.opex_decimals))
    }

    /// Profit column, e.g. `"1,8 M / 2,9 M / 5,0 M"`.
    pub fn profit_cell(&self) -> String {
        self.profit_mkr
            .map(|v| format!("{} M", format_decimal(v, 1)))
            .join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_sorted_by_adoption() {
        assert!(PROJECTION.windows(2).all(|w| w[0].adoption_pct < w[1].adoption_pct));
    }

    #[test]
    fn profit_never_exceeds_revenue() {
        for row in PROJECTION {
            for (rev, profit) in row.revenue_mkr.iter().zip(row.profit_mkr.iter()) {
                assert!(profit <= rev, "{} %", row.adoption_pct);
            }
        }
    }

    #[test]
    fn cells_render_as_submitted() {
        let revenue: Vec<[String; 3]> = PROJECTION.iter().map(|r| r.revenue_cells()).collect();
        assert_eq!(revenue[0], ["2,04 Mkr", "3,12 Mkr", "5,27 Mkr"]);
        assert_eq!(revenue[1], ["20,4 Mkr", "31,2 Mkr", "52,7 Mkr"]);
        assert_eq!(revenue[2], ["40,8 Mkr", "62,4 Mkr", "105,4 Mkr"]);
        assert_eq!(revenue[3], ["81,7 Mkr", "124,8 Mkr", "210,8 Mkr"]);

        let opex: Vec<String> = PROJECTION.iter().map(|r| r.opex_cell()).collect();
        assert_eq!(opex, ["~0,24 Mkr", "~0,6 Mkr", "~1,0 Mkr", "~1,4 Mkr"]);

        assert_eq!(PROJECTION[0].profit_cell(), "1,8 M / 2,9 M / 5,0 M");
        assert_eq!(PROJECTION[3].profit_cell(), "80,3 M / 123,4 M / 209,4 M");
    }

    #[test]
    fn label_uses_no_break_space() {
        assert_eq!(PROJECTION[1].adoption_label(), "10\u{a0}%");
    }
}
