//! Add up money held in several currencies, and convert the result into a
//! single currency.
//!
//! Amounts are combined into expressions with `plus` and `times`, and only
//! evaluated when a `Bank` reduces them to a target currency.
//!
//! ```
//! use money_engine::money::{Bank, Money};
//!
//! let mut bank = Bank::new();
//! bank.add_rate("CHF", "USD", 2);
//!
//! let sum = Money::dollar(5) + Money::franc(10);
//! assert_eq!(Ok(Money::dollar(10)), bank.reduce(&sum, "USD"));
//! ```

mod error_handler;
pub mod input;
pub mod money;
pub mod output;
pub mod run;
