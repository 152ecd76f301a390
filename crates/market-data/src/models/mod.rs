//! Data returned by rate providers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rates of every currency the provider knows, relative to `currency`.
///
/// `rates[c]` is how many units of `c` one unit of `currency` buys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderRates {
    /// Anchor declared by the provider in its response
    pub currency: String,
    pub rates: HashMap<String, f64>,
}
