use std::collections::HashSet;
use std::hash::Hash;

use crate::Identified;

/// Merge `candidates` into `existing` so that every present candidate appears
/// exactly once.
///
/// - Absent (`None`) candidates are ignored.
/// - With no present candidate, `existing` is returned as-is.
/// - A candidate whose identifier is already known (in `existing` or earlier in
///   `candidates`) is dropped; the first occurrence wins.
/// - Output = newly added candidates (first-seen order) followed by `existing`
///   in its original order.
pub fn reconcile<T, I>(existing: Vec<T>, candidates: I) -> Vec<T>
where
    T: Identified,
    <T::Id as ToOwned>::Owned: Eq + Hash,
    I: IntoIterator<Item = Option<T>>,
{
    let present: Vec<T> = candidates.into_iter().flatten().collect();
    if present.is_empty() {
        return existing;
    }

    let mut seen: HashSet<<T::Id as ToOwned>::Owned> = existing
        .iter()
        .map(|item| item.identifier().to_owned())
        .collect();

    let mut out: Vec<T> = Vec::with_capacity(present.len() + existing.len());
    for candidate in present {
        if seen.insert(candidate.identifier().to_owned()) {
            out.push(candidate);
        }
    }

    out.extend(existing);
    out
}

/// Identifier equality over optional records.
///
/// Both absent => equal. Exactly one absent => not equal.
pub fn same_entity<T>(a: Option<&T>, b: Option<&T>) -> bool
where
    T: Identified + ?Sized,
{
    match (a, b) {
        (Some(a), Some(b)) => a.identifier() == b.identifier(),
        (None, None) => true,
        _ => false,
    }
}
