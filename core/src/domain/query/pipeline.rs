//! Collection query execution: filter, then order, then page, then select.
//!
//! Filtering first gives "top N of the matching records"; selecting last lets
//! the earlier stages see whole records. The source slice is never modified,
//! every stage works on a local list of references.

use super::value_objects::{GetQueryParams, Record};
use super::{filter, order, projection};

pub fn run(records: &[Record], query: &GetQueryParams) -> Vec<Record> {
    let mut matched: Vec<&Record> = match &query.filters {
        Some(spec) => filter::apply(records, spec),
        None => records.iter().collect(),
    };

    if let Some(order_by) = &query.order_by {
        order::sort(&mut matched, order_by);
    }

    // Paging only applies when `top` is given; a lone skip is ignored.
    if let Some(top) = query.top {
        matched = matched
            .into_iter()
            .skip(query.effective_skip())
            .take(top)
            .collect();
    }

    match &query.select {
        Some(fields) => projection::project(&matched, fields),
        None => matched.into_iter().cloned().collect(),
    }
}
