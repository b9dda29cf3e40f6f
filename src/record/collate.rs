//! Locale-aware ordering of contact names.
//!
//! Names are compared on a collation key: canonical decomposition with
//! combining marks dropped, then lowercased. Equal keys fall back to the raw
//! string so the order is total.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::Record;

fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two names the way the directory orders them.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Sort records by name, ascending.
///
/// Records with identical names keep their relative order.
pub fn sort_by_name(records: &mut [Record]) {
    records.sort_by_cached_key(|record| (collation_key(&record.name), record.name.clone()));
}
