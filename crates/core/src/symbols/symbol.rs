use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

/// One of the six supported symbols.
///
/// Declaration order is the presentation order used for matrix rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Symbol {
    Usd,
    Sgd,
    Eur,
    Btc,
    Doge,
    Eth,
}

impl Symbol {
    pub const ALL: [Symbol; 6] = [
        Symbol::Usd,
        Symbol::Sgd,
        Symbol::Eur,
        Symbol::Btc,
        Symbol::Doge,
        Symbol::Eth,
    ];

    pub const FIAT: [Symbol; 3] = [Symbol::Usd, Symbol::Sgd, Symbol::Eur];

    pub const CRYPTO: [Symbol; 3] = [Symbol::Btc, Symbol::Doge, Symbol::Eth];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Usd => "USD",
            Symbol::Sgd => "SGD",
            Symbol::Eur => "EUR",
            Symbol::Btc => "BTC",
            Symbol::Doge => "DOGE",
            Symbol::Eth => "ETH",
        }
    }

    /// Position of the symbol in [`Symbol::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::ALL
            .iter()
            .copied()
            .find(|symbol| symbol.as_str() == s)
            .ok_or_else(|| ValidationError::UnsupportedSymbol(s.to_string()))
    }
}
