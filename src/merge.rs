//! Merging caller-supplied arguments with prompted ones

use crate::args::{ArgumentSet, AssocArgs};

/// Combine the original arguments with the prompted ones.
///
/// Original positionals always come first, followed by the prompted ones in
/// prompt order. Prompted associatives are added only for keys the caller
/// did not already supply.
pub fn merge(
    original_positionals: &[String],
    original_assoc: &AssocArgs,
    prompted: ArgumentSet,
) -> (Vec<String>, AssocArgs) {
    let mut positionals = original_positionals.to_vec();
    positionals.extend(prompted.positionals);

    let mut assoc = original_assoc.clone();
    for (key, value) in prompted.assoc {
        assoc.entry(key).or_insert(value);
    }

    (positionals, assoc)
}
