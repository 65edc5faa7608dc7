use super::Currency;

/// Everything that can go wrong while reducing an expression.
///
/// Errors are never recovered from internally: they go straight back up to
/// whoever called `reduce`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The bank has no rate for this pair, and the currencies differ.
    #[error("no exchange rate registered from {from} to {to}")]
    MissingRate { from: Currency, to: Currency },

    /// A rate of zero was registered for this pair; dividing by it is undefined.
    #[error("exchange rate from {from} to {to} is zero")]
    ZeroRate { from: Currency, to: Currency },

    /// Multiplying or adding amounts would overflow.
    #[error("amount overflow in {currency}")]
    Overflow { currency: Currency },
}
