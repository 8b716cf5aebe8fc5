//! Scenario: relationship option lists are reconciled against the selected value
//!
//! # Invariants under test
//!
//! 1. No present candidate => existing collection comes back unchanged.
//! 2. A candidate already in the collection is not added twice.
//! 3. Into an empty collection, candidates keep their given order.
//! 4. Absent candidates contribute nothing.
//! 5. Duplicate candidates: first occurrence wins.
//! 6. New candidates are placed ahead of the existing collection.
//! 7. Output identifiers are unique.
//!
//! All tests are pure in-process.

use std::collections::HashSet;

use ia_reconcile::{reconcile, Identified};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq)]
struct Choice {
    id: String,
    name: String,
}

impl Identified for Choice {
    type Id = str;

    fn identifier(&self) -> &str {
        &self.id
    }
}

fn opt(id: &str) -> Choice {
    Choice {
        id: id.to_string(),
        name: format!("name-{id}"),
    }
}

fn named(id: &str, name: &str) -> Choice {
    Choice {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn ids(v: &[Choice]) -> Vec<String> {
    v.iter().map(|o| o.id.clone()).collect()
}

// ---------------------------------------------------------------------------
// 1. Empty candidates
// ---------------------------------------------------------------------------

#[test]
fn empty_candidates_return_existing() {
    let existing = vec![opt("a"), opt("b"), opt("c")];
    let out = reconcile(existing.clone(), Vec::<Option<Choice>>::new());
    assert_eq!(out, existing, "no candidates must leave the collection as-is");
}

#[test]
fn empty_candidates_on_empty_existing_is_empty() {
    let out = reconcile(Vec::<Choice>::new(), std::iter::empty());
    assert!(out.is_empty());
}

// ---------------------------------------------------------------------------
// 2. Known candidate is not duplicated
// ---------------------------------------------------------------------------

#[test]
fn known_candidate_keeps_length() {
    let existing = vec![opt("a"), opt("b")];
    let out = reconcile(existing.clone(), [Some(opt("b"))]);
    assert_eq!(out.len(), existing.len());
    assert_eq!(out, existing);
}

// ---------------------------------------------------------------------------
// 3. Empty existing keeps candidate order
// ---------------------------------------------------------------------------

#[test]
fn candidates_into_empty_collection_keep_order() {
    let out = reconcile(Vec::new(), [Some(opt("a")), Some(opt("b"))]);
    assert_eq!(ids(&out), vec!["a", "b"]);
}

// ---------------------------------------------------------------------------
// 4. Absent candidates
// ---------------------------------------------------------------------------

#[test]
fn absent_candidates_are_skipped() {
    let existing = vec![opt("a")];
    let out = reconcile(
        existing,
        [None, Some(opt("x")), None, Some(opt("y")), None],
    );
    assert_eq!(ids(&out), vec!["x", "y", "a"]);
}

// ---------------------------------------------------------------------------
// 5. Duplicate candidates
// ---------------------------------------------------------------------------

#[test]
fn first_duplicate_candidate_wins() {
    let out = reconcile(
        vec![opt("a")],
        [Some(named("n", "first")), Some(named("n", "second"))],
    );
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].name, "first", "first occurrence must be retained");
}

// ---------------------------------------------------------------------------
// 6. Placement
// ---------------------------------------------------------------------------

#[test]
fn worked_example() {
    let existing = vec![opt("a"), opt("b")];
    let out = reconcile(existing, [Some(opt("b")), Some(opt("c")), None]);
    assert_eq!(ids(&out), vec!["c", "a", "b"]);
}

#[test]
fn existing_relative_order_is_preserved() {
    let existing = vec![opt("z"), opt("m"), opt("a")];
    let out = reconcile(existing, [Some(opt("q"))]);
    assert_eq!(ids(&out), vec!["q", "z", "m", "a"]);
}

// ---------------------------------------------------------------------------
// 7. Uniqueness
// ---------------------------------------------------------------------------

#[test]
fn output_identifiers_are_unique() {
    let existing = vec![opt("a"), opt("b"), opt("c")];
    let candidates = ["c", "d", "a", "d", "e", "b", "e"]
        .iter()
        .map(|id| Some(opt(id)))
        .collect::<Vec<_>>();

    let out = reconcile(existing, candidates);

    let unique: HashSet<&str> = out.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(unique.len(), out.len(), "identifiers must be unique");
    assert_eq!(ids(&out), vec!["d", "e", "a", "b", "c"]);
}
