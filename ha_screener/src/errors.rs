use thiserror::Error;

/// Per-symbol analysis errors.
///
/// None of these abort a scan: the scanner logs the error, skips the symbol,
/// and keeps evaluating the rest of the list.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The series is too short to select a trailing candle pair.
    #[error("not enough candles for {symbol}: have {have}, need {need}")]
    InsufficientData {
        symbol: String,
        have: usize,
        need: usize,
    },

    /// A symbol blob parsed down to nothing. Recoverable: callers fall back
    /// to the default symbol list.
    #[error("symbol list is empty after parsing")]
    EmptySymbolList,
}
