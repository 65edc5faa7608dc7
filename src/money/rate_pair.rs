use super::Currency;
use std::fmt;

/// The key of a directional exchange rate: converting `from` into `to`.
///
/// Equality and hashing are value-based, so two pairs built separately
/// with the same currencies find the same rate. Field order matters:
/// `CHF/USD` and `USD/CHF` are two different pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RatePair {
    from: Currency,
    to: Currency,
}

impl RatePair {
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }
}

impl fmt::Display for RatePair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::RatePair;
    use std::collections::HashMap;

    #[test]
    fn test_equal_pairs_are_interchangeable_keys() {
        let mut rates = HashMap::new();
        rates.insert(RatePair::new("CHF", "USD"), 2);

        assert_eq!(Some(&2), rates.get(&RatePair::new("CHF", "USD")));
        assert_eq!(None, rates.get(&RatePair::new("USD", "CHF")));
    }

    #[test]
    fn test_field_order_matters() {
        assert_ne!(RatePair::new("CHF", "USD"), RatePair::new("USD", "CHF"));
        assert_eq!(RatePair::new("CHF", "USD"), RatePair::new("CHF", "USD"));
    }

    #[test]
    fn test_display() {
        let pair = RatePair::new("CHF", "USD");
        assert_eq!("CHF/USD", pair.to_string());
        assert_eq!("CHF", pair.from());
        assert_eq!("USD", pair.to());
    }
}
