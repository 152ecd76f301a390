use crate::rates::RateCell;
use crate::snapshots::RangeRow;

use super::history_model::TimeSeriesPoint;

/// Lazily maps stored range rows to `target / base` points.
///
/// Yields one point per row in the order the rows arrive. A row whose base is
/// zero or whose values are missing yields a degenerate point instead of
/// being dropped, so the timestamps of the series stay complete.
pub struct SeriesReconstructor<I> {
    rows: I,
}

impl<I> SeriesReconstructor<I>
where
    I: Iterator<Item = RangeRow>,
{
    pub fn new<R>(rows: R) -> Self
    where
        R: IntoIterator<IntoIter = I>,
    {
        Self {
            rows: rows.into_iter(),
        }
    }
}

impl<I> Iterator for SeriesReconstructor<I>
where
    I: Iterator<Item = RangeRow>,
{
    type Item = TimeSeriesPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.rows.next()?;
        let value = match (row.base, row.target) {
            (Some(base), Some(target)) => RateCell::ratio(target, base),
            _ => RateCell::Degenerate,
        };
        Some(TimeSeriesPoint {
            timestamp: row.timestamp,
            value,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}
