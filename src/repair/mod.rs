//! The five-pass textual Repair Pipeline. Order is load-bearing: quoting a
//! value changes what "ends a string" means for later passes, so passes
//! run strictly in the sequence below.

mod brackets;
mod commas;
mod escape;
mod keys;
mod values;

pub(crate) use brackets::close_brackets;

use tracing::trace;

/// Run a candidate substring through all five repair passes in order,
/// producing a best-effort JSON string.
pub fn repair(candidate: &str) -> String {
    let step1 = keys::quote_keys(candidate);
    trace!(pass = "keys", output = %step1);
    let step2 = values::quote_values(&step1);
    trace!(pass = "values", output = %step2);
    let step3 = escape::escape_illegal_characters(&step2);
    trace!(pass = "escape", output = %step3);
    let step4 = close_brackets(&step3);
    trace!(pass = "brackets", output = %step4);
    let step5 = commas::insert_missing_commas(&step4);
    trace!(pass = "commas", output = %step5);
    step5
}
