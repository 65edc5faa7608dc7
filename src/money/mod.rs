//! Amounts of money in several currencies, combined into expressions and
//! reduced to a single currency through a bank.
//!
//! Money: a leaf, an amount in one currency.
//! Sum: two expressions added together, not evaluated yet.
//! Bank: knows the exchange rates, and reduces expressions to one currency.

pub mod bank;
pub mod error;
pub mod expression;
pub mod money;
pub mod rate_pair;
pub mod sum;

pub use bank::Bank;
pub use error::Error;
pub use expression::{Expression, Reduce};
pub use money::Money;
pub use rate_pair::RatePair;
pub use sum::Sum;

// Using named types doesn't provide any compiler help, but it helps a lot with
// readability.
// Consider the following, when creating the rates HashMap:
// (1) rates: HashMap<(String, String), i64>
// (2) rates: HashMap<RatePair, Rate>
// Implementation (2) is self-explanatory, and changing amounts e.g. from i64
// to i128 is trivial.
pub type Amount = i64;
pub type Rate = i64;
pub type Multiplier = i64;
pub type Currency = String;

pub const DOLLAR: &str = "USD";
pub const FRANC: &str = "CHF";
