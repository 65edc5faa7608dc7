use super::{Amount, Bank, Currency, Error, Expression, Multiplier, Reduce, DOLLAR, FRANC};
use std::fmt;

/// An amount in a single currency. The leaf of every expression.
///
/// A negative amount is a debt. Money is never mutated: every operation
/// returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    amount: Amount,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Amount, currency: impl Into<Currency>) -> Self {
        let currency = currency.into();
        debug_assert!(!currency.is_empty(), "a currency code can't be empty");

        Self { amount, currency }
    }

    pub fn dollar(amount: Amount) -> Self {
        Self::new(amount, DOLLAR)
    }

    pub fn franc(amount: Amount) -> Self {
        Self::new(amount, FRANC)
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Convert into `to`, dividing the amount by the bank's rate.
    ///
    /// The division truncates toward zero: 1 CHF at 2 CHF per USD is 0 USD.
    pub fn reduce(&self, to: &str, bank: &Bank) -> Result<Money, Error> {
        let rate = bank.rate(&self.currency, to)?;
        if rate == 0 {
            return Err(Error::ZeroRate {
                from: self.currency.clone(),
                to: to.to_string(),
            });
        }

        // Only i64::MIN / -1 can fail here.
        let amount = self
            .amount
            .checked_div(rate)
            .ok_or_else(|| Error::Overflow {
                currency: to.to_string(),
            })?;

        Ok(Money::new(amount, to))
    }

    pub fn plus(self, addend: impl Into<Expression>) -> Expression {
        Expression::Money(self).plus(addend)
    }

    pub fn times(&self, multiplier: Multiplier) -> Result<Expression, Error> {
        let amount = self
            .amount
            .checked_mul(multiplier)
            .ok_or_else(|| Error::Overflow {
                currency: self.currency.clone(),
            })?;

        Ok(Money::new(amount, self.currency.clone()).into())
    }
}

impl Reduce for Money {
    fn reduce(&self, to: &str, bank: &Bank) -> Result<Money, Error> {
        Money::reduce(self, to, bank)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use crate::money::{Bank, Error, Expression, Money, Sum};

    #[test]
    fn test_equality() {
        assert_eq!(Money::dollar(5), Money::dollar(5));
        assert_ne!(Money::dollar(5), Money::dollar(6));
        assert_ne!(Money::dollar(5), Money::franc(5));
        assert_eq!(Money::new(5, "CHF"), Money::franc(5));
    }

    #[test]
    fn test_times() {
        assert_eq!(
            Ok(Expression::Money(Money::dollar(6))),
            Money::dollar(3).times(2)
        );

        let five = Money::franc(5);
        assert_eq!(Ok(Money::franc(10).into()), five.times(2));
        assert_eq!(Ok(Money::franc(15).into()), five.times(3));
        assert_eq!(Ok(Money::franc(-5).into()), five.times(-1));
    }

    #[test]
    fn test_times_overflow() {
        assert_eq!(
            Err(Error::Overflow {
                currency: "USD".to_string()
            }),
            Money::dollar(i64::MAX).times(2)
        );
    }

    #[test]
    fn test_plus_returns_sum() {
        let five = Money::dollar(5);
        let got = five.clone().plus(Money::franc(10));

        assert_eq!(Expression::Sum(Sum::new(five, Money::franc(10))), got);
    }

    #[test]
    fn test_reduce_same_currency() {
        let bank = Bank::new();
        for amount in vec![0, 1, -1, 42, i64::MAX, i64::MIN] {
            assert_eq!(
                Ok(Money::dollar(amount)),
                Money::dollar(amount).reduce("USD", &bank)
            );
        }
    }

    #[test]
    fn test_reduce_different_currency() {
        let mut bank = Bank::new();
        bank.add_rate("CHF", "USD", 2);

        for (amount, want) in vec![(2, 1), (4, 2), (1, 0), (3, 1), (-3, -1), (0, 0)] {
            assert_eq!(
                Ok(Money::dollar(want)),
                Money::franc(amount).reduce("USD", &bank)
            );
        }
    }

    #[test]
    fn test_reduce_missing_rate() {
        let bank = Bank::new();

        assert_eq!(
            Err(Error::MissingRate {
                from: "CHF".to_string(),
                to: "USD".to_string()
            }),
            Money::franc(2).reduce("USD", &bank)
        );
    }

    #[test]
    fn test_reduce_zero_rate() {
        let mut bank = Bank::new();
        bank.add_rate("CHF", "USD", 0);

        assert_eq!(
            Err(Error::ZeroRate {
                from: "CHF".to_string(),
                to: "USD".to_string()
            }),
            Money::franc(2).reduce("USD", &bank)
        );
    }

    #[test]
    fn test_reduce_overflow() {
        let mut bank = Bank::new();
        bank.add_rate("CHF", "USD", -1);

        assert_eq!(
            Err(Error::Overflow {
                currency: "USD".to_string()
            }),
            Money::franc(i64::MIN).reduce("USD", &bank)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!("5 USD", Money::dollar(5).to_string());
        assert_eq!("-3 CHF", Money::franc(-3).to_string());
    }
}
