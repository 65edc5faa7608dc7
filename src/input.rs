use crate::money::{Amount, Bank, Money, Rate, RatePair};

use serde::{de::DeserializeOwned, Deserialize};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("malformed CSV: {0}")]
    Csv(String), // CSV is malformed
    #[error("invalid record: {0}")]
    Format(String), // Data format is incorrect
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::Format(err.to_string())
    }
}

// A bad row doesn't make the other rows meaningless: a missing rate only
// matters if some holding needs it.
// So we keep every good record, and hand the bad ones back to the caller
// instead of aborting.
fn parse<R, T>(
    input_stream: impl std::io::Read,
    convert: fn(R) -> Result<T, &'static str>,
) -> (Vec<T>, Vec<Error>)
where
    R: DeserializeOwned,
{
    let buffered = std::io::BufReader::new(input_stream);
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(buffered);

    let mut records = Vec::new();
    let mut errors = Vec::new();
    for record in reader.deserialize::<R>() {
        match record
            .map_err(Error::from)
            .and_then(|r| convert(r).map_err(Error::from))
        {
            Ok(record) => records.push(record),
            Err(err) => errors.push(err),
        }
    }

    (records, errors)
}

/// Build a bank from a `from,to,rate` CSV.
pub fn parse_rates(input_stream: impl std::io::Read) -> (Bank, Vec<Error>) {
    let (rates, errors) = parse(input_stream, RateRecord::into_rate);
    (rates.into_iter().collect(), errors)
}

/// Read amounts of money from an `amount,currency` CSV.
pub fn parse_holdings(input_stream: impl std::io::Read) -> (Vec<Money>, Vec<Error>) {
    parse(input_stream, <Money as TryFrom<HoldingRecord>>::try_from)
}

// Records can't be deserialised straight into the domain types: a currency
// must not be empty, which serde alone can't check.
#[derive(Debug, Deserialize)]
pub struct RateRecord {
    from: String,
    to: String,
    rate: Rate,
}

impl RateRecord {
    fn into_rate(self) -> Result<(RatePair, Rate), &'static str> {
        if self.from.is_empty() {
            return Err("missing source currency");
        }
        if self.to.is_empty() {
            return Err("missing target currency");
        }

        Ok((RatePair::new(self.from, self.to), self.rate))
    }
}

#[derive(Debug, Deserialize)]
pub struct HoldingRecord {
    amount: Amount,
    currency: String,
}

impl TryFrom<HoldingRecord> for Money {
    type Error = &'static str;
    fn try_from(record: HoldingRecord) -> Result<Self, Self::Error> {
        if record.currency.is_empty() {
            return Err("missing currency");
        }

        Ok(Money::new(record.amount, record.currency))
    }
}
