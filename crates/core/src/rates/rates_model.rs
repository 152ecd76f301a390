use serde::{Deserialize, Serialize};

use crate::constants::ANCHOR_TOLERANCE;
use crate::errors::{Error, Result};
use crate::symbols::Symbol;

/// A single point-in-time snapshot of all six rates, expressed against one anchor.
///
/// `rate(anchor)` is always exactly `1.0`. Rates are finite and non-negative;
/// a zero rate is a degenerate state that is flagged when it is divided by.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSet {
    anchor: Symbol,
    rates: [f64; 6],
}

impl QuoteSet {
    /// Builds a quote set from `(symbol, rate)` pairs. Every supported symbol
    /// must appear; later duplicates overwrite earlier ones.
    pub fn new<I>(anchor: Symbol, rates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Symbol, f64)>,
    {
        let mut slots: [Option<f64>; 6] = [None; 6];
        for (symbol, rate) in rates {
            if !rate.is_finite() || rate < 0.0 {
                return Err(Error::InvalidQuoteSet(format!(
                    "rate for {} must be a finite non-negative number, got {}",
                    symbol, rate
                )));
            }
            slots[symbol.index()] = Some(rate);
        }

        let mut values = [0.0; 6];
        for symbol in Symbol::ALL {
            values[symbol.index()] = slots[symbol.index()].ok_or_else(|| {
                Error::InvalidQuoteSet(format!("missing rate for {}", symbol))
            })?;
        }

        if (values[anchor.index()] - 1.0).abs() > ANCHOR_TOLERANCE {
            return Err(Error::InvalidQuoteSet(format!(
                "anchor {} must have rate 1.0, got {}",
                anchor,
                values[anchor.index()]
            )));
        }
        values[anchor.index()] = 1.0;

        Ok(Self {
            anchor,
            rates: values,
        })
    }

    pub fn anchor(&self) -> Symbol {
        self.anchor
    }

    pub fn rate(&self, symbol: Symbol) -> f64 {
        self.rates[symbol.index()]
    }

    /// Iterates `(symbol, rate)` in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, f64)> + '_ {
        Symbol::ALL.iter().map(move |s| (*s, self.rate(*s)))
    }

    /// True when any rate is zero, i.e. some cross-rate cannot be derived.
    pub fn is_degenerate(&self) -> bool {
        self.rates.iter().any(|r| *r == 0.0)
    }

    /// Re-expresses the snapshot against another anchor:
    /// `rate'(s) = rate(s) / rate(anchor)`.
    pub fn rebase(&self, anchor: Symbol) -> Result<QuoteSet> {
        if anchor == self.anchor {
            return Ok(self.clone());
        }
        let divisor = self.rate(anchor);
        if divisor == 0.0 {
            return Err(Error::DegenerateRate(format!(
                "cannot rebase onto {}: its rate against {} is zero",
                anchor, self.anchor
            )));
        }
        QuoteSet::new(anchor, self.iter().map(|(s, r)| (s, r / divisor)))
    }
}

/// Which symbol partition forms the rows of a derived matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Presentation {
    /// Rows USD/SGD/EUR, columns BTC/DOGE/ETH.
    FiatAsBase,
    /// Rows BTC/DOGE/ETH, columns USD/SGD/EUR.
    CryptoAsBase,
}

impl Presentation {
    pub fn rows(&self) -> &'static [Symbol; 3] {
        match self {
            Presentation::FiatAsBase => &Symbol::FIAT,
            Presentation::CryptoAsBase => &Symbol::CRYPTO,
        }
    }

    pub fn columns(&self) -> &'static [Symbol; 3] {
        match self {
            Presentation::FiatAsBase => &Symbol::CRYPTO,
            Presentation::CryptoAsBase => &Symbol::FIAT,
        }
    }

    /// Anchor hint used when the matrix has to be built from a live fetch.
    pub fn anchor_hint(&self) -> AnchorHint {
        match self {
            Presentation::FiatAsBase => AnchorHint::Fiat,
            Presentation::CryptoAsBase => AnchorHint::Crypto,
        }
    }
}

/// Requested anchor family for an upstream fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorHint {
    #[default]
    Fiat,
    Crypto,
}

impl AnchorHint {
    /// USD for fiat (and when no hint is given), BTC for crypto.
    pub fn anchor(hint: Option<AnchorHint>) -> Symbol {
        match hint.unwrap_or_default() {
            AnchorHint::Fiat => Symbol::Usd,
            AnchorHint::Crypto => Symbol::Btc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_quotes() -> QuoteSet {
        QuoteSet::new(
            Symbol::Usd,
            [
                (Symbol::Usd, 1.0),
                (Symbol::Sgd, 1.35),
                (Symbol::Eur, 0.92),
                (Symbol::Btc, 0.000016),
                (Symbol::Doge, 6.25),
                (Symbol::Eth, 0.0004),
            ],
        )
        .unwrap()
    }

    #[test]
    fn rejects_missing_symbol() {
        let result = QuoteSet::new(Symbol::Usd, [(Symbol::Usd, 1.0), (Symbol::Sgd, 1.3)]);
        assert!(matches!(result, Err(Error::InvalidQuoteSet(_))));
    }

    #[test]
    fn rejects_negative_and_non_finite_rates() {
        let mut pairs: Vec<(Symbol, f64)> = Symbol::ALL.iter().map(|s| (*s, 1.0)).collect();
        pairs[2].1 = -1.0;
        assert!(QuoteSet::new(Symbol::Usd, pairs.clone()).is_err());
        pairs[2].1 = f64::INFINITY;
        assert!(QuoteSet::new(Symbol::Usd, pairs.clone()).is_err());
        pairs[2].1 = f64::NAN;
        assert!(QuoteSet::new(Symbol::Usd, pairs).is_err());
    }

    #[test]
    fn rejects_anchor_not_equal_to_one() {
        let pairs = Symbol::ALL.iter().map(|s| (*s, 2.0));
        assert!(QuoteSet::new(Symbol::Usd, pairs).is_err());
    }

    #[test]
    fn accepts_zero_rate_as_degenerate() {
        let pairs = Symbol::ALL
            .iter()
            .map(|s| (*s, if *s == Symbol::Doge { 0.0 } else { 1.0 }));
        let quotes = QuoteSet::new(Symbol::Usd, pairs).unwrap();
        assert!(quotes.is_degenerate());
        assert!(!usd_quotes().is_degenerate());
    }

    #[test]
    fn rebase_to_btc_inverts_the_btc_rate() {
        let quotes = usd_quotes();
        let rebased = quotes.rebase(Symbol::Btc).unwrap();
        assert_eq!(rebased.anchor(), Symbol::Btc);
        assert_eq!(rebased.rate(Symbol::Btc), 1.0);
        assert!((rebased.rate(Symbol::Usd) - 62_500.0).abs() < 1e-6);
        assert!((rebased.rate(Symbol::Sgd) - 84_375.0).abs() < 1e-6);
    }

    #[test]
    fn rebase_onto_zero_rate_is_degenerate() {
        let pairs = Symbol::ALL
            .iter()
            .map(|s| (*s, if *s == Symbol::Eth { 0.0 } else { 1.0 }));
        let quotes = QuoteSet::new(Symbol::Usd, pairs).unwrap();
        assert!(matches!(
            quotes.rebase(Symbol::Eth),
            Err(Error::DegenerateRate(_))
        ));
    }

    #[test]
    fn anchor_hint_defaults_to_usd() {
        assert_eq!(AnchorHint::anchor(None), Symbol::Usd);
        assert_eq!(AnchorHint::anchor(Some(AnchorHint::Fiat)), Symbol::Usd);
        assert_eq!(AnchorHint::anchor(Some(AnchorHint::Crypto)), Symbol::Btc);
    }
}
