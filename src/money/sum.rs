use super::{Bank, Error, Expression, Money, Multiplier, Reduce};

/// Two expressions added together, evaluated only when reduced.
///
/// Both children are owned by the sum: expressions are built bottom-up and
/// never shared, so a tree can't contain cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
    augend: Box<Expression>,
    addend: Box<Expression>,
}

impl Sum {
    pub fn new(augend: impl Into<Expression>, addend: impl Into<Expression>) -> Self {
        Self {
            augend: Box::new(augend.into()),
            addend: Box::new(addend.into()),
        }
    }

    pub fn augend(&self) -> &Expression {
        &self.augend
    }

    pub fn addend(&self) -> &Expression {
        &self.addend
    }

    /// Reduce both sides to `to`, then add them up.
    ///
    /// Each side is rounded on its own before the addition, so
    /// 1 USD + 1 CHF at 2 CHF per USD is 1 USD, not 1.5.
    pub fn reduce(&self, to: &str, bank: &Bank) -> Result<Money, Error> {
        let augend = self.augend.reduce(to, bank)?;
        let addend = self.addend.reduce(to, bank)?;

        let amount = augend
            .amount()
            .checked_add(addend.amount())
            .ok_or_else(|| Error::Overflow {
                currency: to.to_string(),
            })?;

        Ok(Money::new(amount, to))
    }

    // Nests rather than flattens: (a + b).plus(c) is ((a + b) + c).
    pub fn plus(self, addend: impl Into<Expression>) -> Expression {
        Sum::new(self, addend).into()
    }

    /// Distribute the multiplier over both sides: (a + b) * m = a * m + b * m.
    pub fn times(&self, multiplier: Multiplier) -> Result<Expression, Error> {
        Ok(Sum::new(
            self.augend.times(multiplier)?,
            self.addend.times(multiplier)?,
        )
        .into())
    }
}

impl Reduce for Sum {
    fn reduce(&self, to: &str, bank: &Bank) -> Result<Money, Error> {
        Sum::reduce(self, to, bank)
    }
}
