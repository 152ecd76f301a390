use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::symbols::Symbol;

use super::rates_model::{Presentation, QuoteSet};

/// One derived value. Kept at full precision until it is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateCell {
    Rate(f64),
    /// The divisor was zero, so no value exists for this pair.
    Degenerate,
}

impl RateCell {
    /// `numerator / denominator`, flagged when the result is not a finite number.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return RateCell::Degenerate;
        }
        let value = numerator / denominator;
        if value.is_finite() {
            RateCell::Rate(value)
        } else {
            RateCell::Degenerate
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            RateCell::Rate(v) => Some(*v),
            RateCell::Degenerate => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, RateCell::Degenerate)
    }

    /// Fixed-point rendering with six decimals, `None` for a degenerate cell.
    pub fn formatted(&self) -> Option<String> {
        self.value()
            .map(|v| format!("{:.*}", DISPLAY_DECIMAL_PRECISION, v))
    }
}

impl Serialize for RateCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.formatted() {
            Some(s) => serializer.serialize_str(&s),
            None => serializer.serialize_none(),
        }
    }
}

/// Pairwise rates of one QuoteSet laid out for a presentation.
///
/// Serializes as `{ROW: {COLUMN: "x.xxxxxx"}}` with rows and columns in
/// symbol declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMatrix {
    presentation: Presentation,
    cells: [[RateCell; 3]; 3],
}

impl DerivedMatrix {
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// The `column / row` cell, or `None` when the pair is not part of this presentation.
    pub fn cell(&self, row: Symbol, column: Symbol) -> Option<RateCell> {
        let r = self.presentation.rows().iter().position(|s| *s == row)?;
        let c = self.presentation.columns().iter().position(|s| *s == column)?;
        Some(self.cells[r][c])
    }

    pub fn rows(&self) -> impl Iterator<Item = (Symbol, &[RateCell; 3])> + '_ {
        self.presentation.rows().iter().copied().zip(self.cells.iter())
    }

    pub fn degenerate_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| c.is_degenerate())
            .count()
    }
}

struct MatrixRow<'a> {
    columns: &'static [Symbol; 3],
    cells: &'a [RateCell; 3],
}

impl Serialize for MatrixRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells.iter()) {
            map.serialize_entry(column.as_str(), cell)?;
        }
        map.end()
    }
}

impl Serialize for DerivedMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns = self.presentation.columns();
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (row, cells) in self.rows() {
            map.serialize_entry(row.as_str(), &MatrixRow { columns, cells })?;
        }
        map.end()
    }
}

/// Derives every `column / row` rate of `presentation` from one snapshot.
///
/// The anchor cancels out, so the result does not depend on which symbol
/// `quotes` is anchored to. A zero row rate only flags its own cells.
pub fn derive(quotes: &QuoteSet, presentation: Presentation) -> DerivedMatrix {
    let mut cells = [[RateCell::Degenerate; 3]; 3];
    for (r, row) in presentation.rows().iter().enumerate() {
        for (c, column) in presentation.columns().iter().enumerate() {
            cells[r][c] = if *row == quotes.anchor() {
                RateCell::Rate(quotes.rate(*column))
            } else {
                RateCell::ratio(quotes.rate(*column), quotes.rate(*row))
            };
        }
    }
    DerivedMatrix {
        presentation,
        cells,
    }
}
