//! Database model for the `rates` table.

use diesel::prelude::*;
use log::warn;
use xrates_core::errors::{Error, Result};
use xrates_core::rates::QuoteSet;
use xrates_core::Symbol;

/// One stored tick. `id` is the tick timestamp in Unix seconds; every rate is
/// relative to USD.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RateRowDB {
    pub id: i64,
    pub usd: Option<f64>,
    pub sgd: Option<f64>,
    pub eur: Option<f64>,
    pub btc: Option<f64>,
    pub doge: Option<f64>,
    pub eth: Option<f64>,
}

impl RateRowDB {
    /// Flattens a USD-anchored snapshot into a row.
    pub fn from_quotes(timestamp: i64, quotes: &QuoteSet) -> Result<Self> {
        if quotes.anchor() != Symbol::Usd {
            return Err(Error::InvalidQuoteSet(format!(
                "stored rows are USD-anchored, got {}",
                quotes.anchor()
            )));
        }
        Ok(Self {
            id: timestamp,
            usd: Some(quotes.rate(Symbol::Usd)),
            sgd: Some(quotes.rate(Symbol::Sgd)),
            eur: Some(quotes.rate(Symbol::Eur)),
            btc: Some(quotes.rate(Symbol::Btc)),
            doge: Some(quotes.rate(Symbol::Doge)),
            eth: Some(quotes.rate(Symbol::Eth)),
        })
    }

    /// Stored value for `symbol`, picked by type rather than by column name.
    pub fn value(&self, symbol: Symbol) -> Option<f64> {
        match symbol {
            Symbol::Usd => self.usd,
            Symbol::Sgd => self.sgd,
            Symbol::Eur => self.eur,
            Symbol::Btc => self.btc,
            Symbol::Doge => self.doge,
            Symbol::Eth => self.eth,
        }
    }

    /// Rebuilds the USD-anchored snapshot. A NULL USD column means the column
    /// default of 1; any other NULL becomes a zero rate, which derivation flags.
    pub fn to_quote_set(&self) -> Result<QuoteSet> {
        let pairs = Symbol::ALL.iter().map(|symbol| {
            let value = match (symbol, self.value(*symbol)) {
                (_, Some(v)) => v,
                (Symbol::Usd, None) => 1.0,
                (_, None) => {
                    warn!("Row {} has no {} rate", self.id, symbol);
                    0.0
                }
            };
            (*symbol, value)
        });
        QuoteSet::new(Symbol::Usd, pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_columns_rebuild_as_degenerate_snapshot() {
        let row = RateRowDB {
            id: 1,
            usd: None,
            sgd: Some(1.3),
            eur: None,
            btc: Some(0.00002),
            doge: Some(7.0),
            eth: Some(0.0005),
        };
        let quotes = row.to_quote_set().unwrap();
        assert_eq!(quotes.rate(Symbol::Usd), 1.0);
        assert_eq!(quotes.rate(Symbol::Eur), 0.0);
        assert!(quotes.is_degenerate());
    }

    #[test]
    fn rejects_non_usd_snapshot() {
        let quotes = QuoteSet::new(Symbol::Btc, Symbol::ALL.iter().map(|s| (*s, 1.0))).unwrap();
        assert!(RateRowDB::from_quotes(1, &quotes).is_err());
    }
}
