use crate::input::Error;

// A bad row is skipped rather than aborting the whole run, but we still want
// to know about it: each rejected record is logged as a warning, tagged with
// the file it came from.
pub fn report(source: &str, errors: &[Error]) {
    for err in errors {
        tracing::warn!(source, error = %err, "skipping record");
    }

    if !errors.is_empty() {
        tracing::info!(source, skipped = errors.len(), "some records were skipped");
    }
}
