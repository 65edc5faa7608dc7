use crate::{
    error_handler,
    input::{parse_holdings, parse_rates},
    money::{self, Money},
    output,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Money(#[from] money::Error),

    #[error("missing target currency")]
    MissingTarget,

    #[error("failed to write output: {0}")]
    Output(#[from] csv::Error),
}

/// Reduce every holding to `to`, along with their total, and write them
/// as CSV to `output_stream`.
///
/// Malformed rates or holdings are skipped. A holding whose currency has no
/// rate to `to` aborts the whole run: there is no meaningful total without it.
pub fn run(
    rates_stream: impl std::io::Read,
    holdings_stream: impl std::io::Read,
    to: &str,
    output_stream: impl std::io::Write,
) -> Result<Money, Error> {
    if to.trim().is_empty() {
        return Err(Error::MissingTarget);
    }

    let (bank, errors) = parse_rates(rates_stream);
    error_handler::report("rates", &errors);

    let (holdings, errors) = parse_holdings(holdings_stream);
    error_handler::report("holdings", &errors);

    tracing::debug!(
        rates = bank.len(),
        holdings = holdings.len(),
        to,
        "reducing holdings"
    );

    let reduced = holdings
        .iter()
        .map(|holding| bank.reduce(holding, to))
        .collect::<Result<Vec<_>, _>>()?;

    // Each holding is truncated on its own, so the sum of the reduced holdings
    // is the reduced sum of the holdings.
    let amount = reduced
        .iter()
        .try_fold(0, |total: money::Amount, holding| {
            total.checked_add(holding.amount())
        })
        .ok_or_else(|| money::Error::Overflow {
            currency: to.to_string(),
        })?;
    let total = Money::new(amount, to);

    output::write(output_stream, &reduced, &total)?;

    Ok(total)
}
