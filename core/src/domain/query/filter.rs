use std::cmp::Ordering;

use serde_json::Value;
use tracing::warn;

use super::compare::{compare_fields, strict_eq};
use super::value_objects::{CompareOperator, CompositeFilter, FilterSpec, Predicate, Record};

/// Keeps the records matching `spec`, in their input order.
pub fn apply<'a, I>(records: I, spec: &FilterSpec) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| spec.evaluate(record))
        .collect()
}

impl FilterSpec {
    pub fn evaluate(&self, record: &Record) -> bool {
        match self {
            FilterSpec::Predicate(predicate) => predicate.evaluate(record),
            FilterSpec::Composite(composite) => composite.evaluate(record),
        }
    }
}

impl CompositeFilter {
    pub fn is_conjunction(&self) -> bool {
        self.and.unwrap_or(true)
    }

    /// An empty composite places no constraint and keeps every record.
    pub fn evaluate(&self, record: &Record) -> bool {
        if self.filters.is_empty() {
            return true;
        }

        if self.is_conjunction() {
            self.filters.iter().all(|filter| filter.evaluate(record))
        } else {
            self.filters.iter().any(|filter| filter.evaluate(record))
        }
    }
}

impl Predicate {
    pub fn evaluate(&self, record: &Record) -> bool {
        let field = record.get(&self.property);
        let ordering = || compare_fields(field, Some(&self.value));

        match &self.operator {
            CompareOperator::Equal => field.is_some_and(|f| strict_eq(f, &self.value)),
            CompareOperator::NotEqual => !field.is_some_and(|f| strict_eq(f, &self.value)),
            CompareOperator::GreaterThan => ordering() == Some(Ordering::Greater),
            CompareOperator::GreaterEqual => {
                matches!(ordering(), Some(Ordering::Greater | Ordering::Equal))
            }
            CompareOperator::LessThan => ordering() == Some(Ordering::Less),
            CompareOperator::LessEqual => {
                matches!(ordering(), Some(Ordering::Less | Ordering::Equal))
            }
            CompareOperator::In => self.is_member(field).unwrap_or(false),
            CompareOperator::NotIn => self.is_member(field).is_some_and(|member| !member),
            CompareOperator::Unsupported(name) => {
                warn!(operator = %name, property = %self.property, "unsupported operator");
                false
            }
        }
    }

    /// `None` when the predicate value is not a list.
    fn is_member(&self, field: Option<&Value>) -> Option<bool> {
        let Value::Array(candidates) = &self.value else {
            warn!(
                operator = self.operator.as_str(),
                property = %self.property,
                "membership operator needs an array value"
            );
            return None;
        };

        Some(field.is_some_and(|f| candidates.iter().any(|c| strict_eq(f, c))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        [
            json!({"id": 1, "title": "Hades", "release": "2020", "score": 93}),
            json!({"id": 2, "title": "Celeste", "release": "2018", "score": 92}),
            json!({"id": 3, "title": "Doom Eternal", "release": "2020", "score": 88}),
            json!({"id": 4, "title": "Inside", "score": 87}),
            json!({"id": 5, "title": "Hollow Knight", "release": "2017", "score": 90}),
        ]
        .into_iter()
        .map(|value| match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        })
        .collect()
    }

    fn ids(records: &[&Record]) -> Vec<i64> {
        records
            .iter()
            .filter_map(|r| r.get("id").and_then(Value::as_i64))
            .collect()
    }

    fn predicate(property: &str, operator: &str, value: Value) -> FilterSpec {
        Predicate::new(property, CompareOperator::from(operator.to_string()), value).into()
    }

    #[test]
    fn test_eq_keeps_input_order() {
        let records = records();
        let kept = apply(&records, &predicate("release", "eq", json!("2020")));
        assert_eq!(ids(&kept), vec![1, 3]);
    }

    #[test]
    fn test_neq_includes_records_missing_the_field() {
        let records = records();
        let kept = apply(&records, &predicate("release", "neq", json!("2020")));
        assert_eq!(ids(&kept), vec![2, 4, 5]);
    }

    #[test]
    fn test_ordering_operators() {
        let records = records();
        assert_eq!(ids(&apply(&records, &predicate("score", "gt", json!(90)))), vec![1, 2]);
        assert_eq!(ids(&apply(&records, &predicate("score", "ge", json!(90)))), vec![1, 2, 5]);
        assert_eq!(ids(&apply(&records, &predicate("score", "lt", json!(88)))), vec![4]);
        assert_eq!(ids(&apply(&records, &predicate("score", "le", json!(88)))), vec![3, 4]);
    }

    #[test]
    fn test_ordering_skips_missing_and_mismatched_fields() {
        let records = records();
        let kept = apply(&records, &predicate("release", "le", json!("2018")));
        assert_eq!(ids(&kept), vec![2, 5]);

        let kept = apply(&records, &predicate("release", "gt", json!(2000)));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_membership_operators() {
        let records = records();
        let kept = apply(&records, &predicate("id", "in", json!([5, 2, 9])));
        assert_eq!(ids(&kept), vec![2, 5]);

        let kept = apply(&records, &predicate("release", "not-in", json!(["2020", "2017"])));
        assert_eq!(ids(&kept), vec![2, 4]);
    }

    #[test]
    fn test_membership_without_array_matches_nothing() {
        let records = records();
        assert!(apply(&records, &predicate("id", "in", json!(2))).is_empty());
        assert!(apply(&records, &predicate("id", "not-in", json!(2))).is_empty());
    }

    #[test]
    fn test_unsupported_operator_matches_nothing() {
        let records = records();
        assert!(apply(&records, &predicate("title", "like", json!("H%"))).is_empty());
    }

    #[test]
    fn test_and_is_intersection() {
        let records = records();
        let p1 = predicate("release", "eq", json!("2020"));
        let p2 = predicate("score", "gt", json!(90));

        let both = apply(&records, &FilterSpec::all_of(vec![p1.clone(), p2.clone()]));
        let first = ids(&apply(&records, &p1));
        let second = ids(&apply(&records, &p2));
        let expected: Vec<i64> = first.into_iter().filter(|id| second.contains(id)).collect();

        assert_eq!(ids(&both), expected);
        assert_eq!(ids(&both), vec![1]);
    }

    #[test]
    fn test_or_is_union_in_input_order() {
        let records = records();
        let spec = FilterSpec::any_of(vec![
            predicate("id", "eq", json!(5)),
            predicate("release", "eq", json!("2020")),
            predicate("id", "eq", json!(1)),
        ]);
        assert_eq!(ids(&apply(&records, &spec)), vec![1, 3, 5]);
    }

    #[test]
    fn test_and_defaults_to_true() {
        let records = records();
        let spec: FilterSpec = serde_json::from_value(json!({
            "filters": [
                {"property": "release", "operator": "eq", "value": "2020"},
                {"property": "id", "operator": "gt", "value": 1}
            ]
        }))
        .unwrap();
        assert_eq!(ids(&apply(&records, &spec)), vec![3]);
    }

    #[test]
    fn test_empty_composite_keeps_everything() {
        let records = records();
        assert_eq!(apply(&records, &FilterSpec::all_of(vec![])).len(), 5);
        assert_eq!(apply(&records, &FilterSpec::any_of(vec![])).len(), 5);
    }

    #[test]
    fn test_nested_composites() {
        let records = records();
        let spec = FilterSpec::any_of(vec![
            FilterSpec::all_of(vec![
                predicate("release", "eq", json!("2020")),
                predicate("score", "lt", json!(90)),
            ]),
            predicate("title", "eq", json!("Inside")),
        ]);
        assert_eq!(ids(&apply(&records, &spec)), vec![3, 4]);
    }
}
