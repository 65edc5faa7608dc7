use super::{Bank, Error, Money, Multiplier, Sum};
use std::fmt;
use std::ops::Add;

/// Anything that can be reduced to a single amount in one currency.
///
/// `Bank::reduce` accepts any of these, so callers can hand it a `Money`,
/// a `Sum` or a whole `Expression` without converting first.
pub trait Reduce {
    fn reduce(&self, to: &str, bank: &Bank) -> Result<Money, Error>;
}

/// An unevaluated computation on money.
///
/// The set of variants is closed: a leaf amount, or the sum of two
/// expressions. Multiplying never creates a node of its own, it is applied
/// to the leaves straight away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Money(Money),
    Sum(Sum),
}

impl Expression {
    pub fn reduce(&self, to: &str, bank: &Bank) -> Result<Money, Error> {
        match self {
            Expression::Money(money) => money.reduce(to, bank),
            Expression::Sum(sum) => sum.reduce(to, bank),
        }
    }

    pub fn plus(self, addend: impl Into<Expression>) -> Expression {
        match self {
            Expression::Money(money) => Sum::new(money, addend).into(),
            Expression::Sum(sum) => sum.plus(addend),
        }
    }

    pub fn times(&self, multiplier: Multiplier) -> Result<Expression, Error> {
        match self {
            Expression::Money(money) => money.times(multiplier),
            Expression::Sum(sum) => sum.times(multiplier),
        }
    }
}

impl Reduce for Expression {
    fn reduce(&self, to: &str, bank: &Bank) -> Result<Money, Error> {
        Expression::reduce(self, to, bank)
    }
}

impl From<Money> for Expression {
    fn from(money: Money) -> Self {
        Expression::Money(money)
    }
}

impl From<Sum> for Expression {
    fn from(sum: Sum) -> Self {
        Expression::Sum(sum)
    }
}

// `a + b` is sugar for `a.plus(b)`.
impl<T: Into<Expression>> Add<T> for Expression {
    type Output = Expression;

    fn add(self, addend: T) -> Expression {
        self.plus(addend)
    }
}

impl<T: Into<Expression>> Add<T> for Money {
    type Output = Expression;

    fn add(self, addend: T) -> Expression {
        self.plus(addend)
    }
}

impl<T: Into<Expression>> Add<T> for Sum {
    type Output = Expression;

    fn add(self, addend: T) -> Expression {
        self.plus(addend)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Money(money) => write!(f, "{}", money),
            Expression::Sum(sum) => write!(f, "({} + {})", sum.augend(), sum.addend()),
        }
    }
}
