use std::cmp::Ordering;

use super::compare::compare_fields;
use super::value_objects::{OrderBy, OrderBySpec, Record};

impl OrderBy {
    /// Unordered pairs (missing field, different value kinds) count as equal
    /// so the next key can break the tie.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ordering = compare_fields(a.get(&self.property), b.get(&self.property))
            .unwrap_or(Ordering::Equal);

        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

impl OrderBySpec {
    /// Earlier keys take priority; the first key that tells the records apart
    /// decides.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        self.keys()
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

pub fn comparator(spec: &OrderBySpec) -> impl Fn(&Record, &Record) -> Ordering + '_ {
    move |a, b| spec.compare(a, b)
}

/// Stable sort: records equal at every key keep their relative order.
pub fn sort(records: &mut [&Record], spec: &OrderBySpec) {
    let compare = comparator(spec);
    records.sort_by(|a, b| compare(a, b));
}
