//! Symbol list parsing.
//!
//! Accepts the same loose text format the upload widget of the original tool
//! took: tickers separated by commas and/or any whitespace, in any mix.
//! Symbols are trimmed and uppercased; duplicates are preserved in input
//! order.

use tracing::warn;

use crate::errors::ScanError;

/// The built-in watchlist: index, energy, metals and crypto futures plus the
/// dollar index.
pub const DEFAULT_SYMBOLS: [&str; 15] = [
    "NQ=F", "ES=F", "YM=F", "RTY=F", "CL=F", "RB=F", "NG=F", "GC=F", "SI=F", "HG=F", "BTC=F",
    "ETH=F", "DX-Y.NYB", "6E=F", "6B=F",
];

pub fn default_symbols() -> Vec<String> {
    DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect()
}

/// Parses a symbol blob. Fails with [`ScanError::EmptySymbolList`] when
/// nothing survives parsing.
pub fn parse_symbol_list(text: &str) -> Result<Vec<String>, ScanError> {
    let symbols: Vec<String> = text
        .replace(',', " ")
        .split_whitespace()
        .map(|s| s.to_uppercase())
        .collect();

    if symbols.is_empty() {
        Err(ScanError::EmptySymbolList)
    } else {
        Ok(symbols)
    }
}

/// Parses a symbol blob, falling back to the default watchlist when the blob
/// is empty. The malformed-input case is recoverable by design.
pub fn symbols_or_default(text: &str) -> Vec<String> {
    match parse_symbol_list(text) {
        Ok(symbols) => symbols,
        Err(err) => {
            warn!(error = %err, "falling back to the default symbol list");
            default_symbols()
        }
    }
}
