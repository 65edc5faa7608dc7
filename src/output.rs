use crate::money::{Amount, Money};

use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Holding,
    Total,
}

#[derive(Serialize)]
struct ReductionRecord<'a> {
    kind: Kind,
    amount: Amount,
    currency: &'a str,
}

impl<'a> ReductionRecord<'a> {
    fn new(kind: Kind, money: &'a Money) -> Self {
        Self {
            kind,
            amount: money.amount(),
            currency: money.currency(),
        }
    }
}

// Writes every reduced holding, then the reduced total, to the given stream.
pub fn write(
    output_stream: impl std::io::Write,
    holdings: &[Money],
    total: &Money,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(output_stream);

    for holding in holdings {
        writer.serialize(ReductionRecord::new(Kind::Holding, holding))?;
    }
    writer.serialize(ReductionRecord::new(Kind::Total, total))?;
    writer.flush()?;

    Ok(())
}
