//! Filter engine: derives the visible subset from records and selection.

use super::dataset::Dataset;
use super::record::{Condition, Record};
use super::selection::Selection;

/// Indices of the visible records, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSubset(pub Vec<usize>);

impl VisibleSubset {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn records<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Record> + 'a {
        self.0.iter().map(move |&i| &dataset.records()[i])
    }
}

/// Whether a single record passes the current selection.
///
/// The eyes-closed toggle is matched against the "Eyes open?" column as stored:
/// a checked toggle admits records whose stored value is 1.
pub fn passes(record: &Record, selection: &Selection) -> bool {
    let knees_ok = record
        .locked_knees
        .is_some_and(|f| f.admits(selection.knees_locked));
    let eyes_ok = record
        .eyes_open
        .is_some_and(|f| f.admits(selection.eyes_closed));
    knees_ok
        && eyes_ok
        && record.number(&selection.x_variable).is_some()
        && Condition::ALL.iter().all(|c| record.response(*c).is_some())
}

pub fn filter(records: &[Record], selection: &Selection) -> VisibleSubset {
    VisibleSubset(
        records
            .iter()
            .enumerate()
            .filter(|(_, r)| passes(r, selection))
            .map(|(i, _)| i)
            .collect(),
    )
}
