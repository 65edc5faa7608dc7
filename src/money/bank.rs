use super::{Currency, Error, Money, Rate, RatePair, Reduce};
use std::collections::HashMap;

/// A bank knows the exchange rates, and reduces expressions to one currency.
///
/// A rate is a divisor: with a CHF/USD rate of 2, 2 CHF reduce to 1 USD.
/// Rates are directional and only what was registered is known; the only
/// implicit rate is the identity, converting a currency into itself.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    rates: HashMap<RatePair, Rate>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rate to convert `from` into `to`, replacing any previous
    /// rate for that pair.
    ///
    /// The reverse rate is not derived: converting `to` into `from` needs its
    /// own call.
    pub fn add_rate(&mut self, from: impl Into<Currency>, to: impl Into<Currency>, rate: Rate) {
        let pair = RatePair::new(from, to);
        tracing::debug!(%pair, rate, "registering exchange rate");

        self.rates.insert(pair, rate);
    }

    /// Get the rate to convert `from` into `to`.
    ///
    /// A currency always converts into itself at 1, even when some other rate
    /// was registered for that pair.
    pub fn rate(&self, from: &str, to: &str) -> Result<Rate, Error> {
        if from == to {
            return Ok(1);
        }

        self.rates
            .get(&RatePair::new(from, to))
            .copied()
            .ok_or_else(|| Error::MissingRate {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Reduce any expression to a single amount in `to`.
    pub fn reduce<E: Reduce + ?Sized>(&self, source: &E, to: &str) -> Result<Money, Error> {
        let reduced = source.reduce(to, self);
        if let Err(err) = &reduced {
            tracing::debug!(to, error = %err, "failed to reduce expression");
        }

        reduced
    }

    /// Number of registered rates, identity excluded.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Extend<(RatePair, Rate)> for Bank {
    fn extend<I: IntoIterator<Item = (RatePair, Rate)>>(&mut self, rates: I) {
        for (pair, rate) in rates {
            tracing::debug!(%pair, rate, "registering exchange rate");
            self.rates.insert(pair, rate);
        }
    }
}

impl FromIterator<(RatePair, Rate)> for Bank {
    fn from_iter<I: IntoIterator<Item = (RatePair, Rate)>>(rates: I) -> Self {
        let mut bank = Bank::new();
        bank.extend(rates);
        bank
    }
}
