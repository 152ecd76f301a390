//! The closed set of supported currency symbols.

mod symbol;

pub use symbol::Symbol;
