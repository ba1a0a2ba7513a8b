use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entity of the collection, as stored. Field order is preserved.
pub type Record = Map<String, Value>;

/// Comparison operator of a single filter predicate.
///
/// Unknown operator names are kept as [`CompareOperator::Unsupported`] so a
/// filter still parses; such predicates never match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CompareOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterEqual,
    LessThan,
    LessEqual,
    In,
    NotIn,
    Unsupported(String),
}

impl CompareOperator {
    pub fn as_str(&self) -> &str {
        match self {
            CompareOperator::Equal => "eq",
            CompareOperator::NotEqual => "neq",
            CompareOperator::GreaterThan => "gt",
            CompareOperator::GreaterEqual => "ge",
            CompareOperator::LessThan => "lt",
            CompareOperator::LessEqual => "le",
            CompareOperator::In => "in",
            CompareOperator::NotIn => "not-in",
            CompareOperator::Unsupported(name) => name,
        }
    }
}

impl From<String> for CompareOperator {
    fn from(value: String) -> Self {
        match value.as_str() {
            "eq" => CompareOperator::Equal,
            "neq" => CompareOperator::NotEqual,
            "gt" => CompareOperator::GreaterThan,
            "ge" => CompareOperator::GreaterEqual,
            "lt" => CompareOperator::LessThan,
            "le" => CompareOperator::LessEqual,
            "in" => CompareOperator::In,
            "not-in" => CompareOperator::NotIn,
            _ => CompareOperator::Unsupported(value),
        }
    }
}

impl From<CompareOperator> for String {
    fn from(operator: CompareOperator) -> Self {
        operator.as_str().to_string()
    }
}

/// `{property, operator, value}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub property: String,
    pub operator: CompareOperator,
    #[serde(default)]
    pub value: Value,
}

impl Predicate {
    pub fn new(property: impl Into<String>, operator: CompareOperator, value: impl Into<Value>) -> Self {
        Self {
            property: property.into(),
            operator,
            value: value.into(),
        }
    }
}

/// Boolean combination of child filters. `and` defaults to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeFilter {
    pub filters: Vec<FilterSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterSpec {
    Composite(CompositeFilter),
    Predicate(Predicate),
}

impl FilterSpec {
    pub fn all_of(filters: Vec<FilterSpec>) -> Self {
        FilterSpec::Composite(CompositeFilter {
            filters,
            and: Some(true),
        })
    }

    pub fn any_of(filters: Vec<FilterSpec>) -> Self {
        FilterSpec::Composite(CompositeFilter {
            filters,
            and: Some(false),
        })
    }
}

impl From<Predicate> for FilterSpec {
    fn from(predicate: Predicate) -> Self {
        FilterSpec::Predicate(predicate)
    }
}

/// Sort key. A missing `ascending` flag reads as descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub property: String,
    #[serde(default)]
    pub ascending: bool,
}

impl OrderBy {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ascending: true,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ascending: false,
        }
    }
}

/// A single sort key or a list of keys in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderBySpec {
    Many(Vec<OrderBy>),
    One(OrderBy),
}

impl OrderBySpec {
    pub fn keys(&self) -> &[OrderBy] {
        match self {
            OrderBySpec::Many(keys) => keys,
            OrderBySpec::One(key) => std::slice::from_ref(key),
        }
    }
}

impl From<OrderBy> for OrderBySpec {
    fn from(key: OrderBy) -> Self {
        OrderBySpec::One(key)
    }
}

impl From<Vec<OrderBy>> for OrderBySpec {
    fn from(keys: Vec<OrderBy>) -> Self {
        OrderBySpec::Many(keys)
    }
}

/// Everything a collection read can ask for. Built fresh per request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetQueryParams {
    pub filters: Option<FilterSpec>,
    pub order_by: Option<OrderBySpec>,
    pub top: Option<usize>,
    pub skip: Option<usize>,
    pub select: Option<Vec<String>>,
}

impl GetQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of leading records dropped when paging applies.
    pub fn effective_skip(&self) -> usize {
        self.skip.unwrap_or(0)
    }
}
