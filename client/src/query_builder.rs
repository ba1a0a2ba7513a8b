//! Encodes [`GetOptions`] into the query parameters the games API decodes.

use aciiverse_core::domain::query::codec::{
    FILTERS_PARAM, ORDER_BY_PARAM, SELECT_PARAM, SKIP_PARAM, TOP_PARAM,
};
use aciiverse_core::domain::query::value_objects::GetQueryParams;
use serde::Serialize;
use url::Url;

use crate::error::ClientError;

/// Options of a collection read. Same shape the server decodes.
pub type GetOptions = GetQueryParams;

fn encode_json<T: Serialize>(param: &'static str, value: &T) -> Result<String, ClientError> {
    serde_json::to_string(value).map_err(|e| ClientError::Encode {
        param,
        reason: e.to_string(),
    })
}

/// Query pairs in the order `$filters`, `$top`, `$skip`, `$orderBy`, `$select`.
/// Unset options produce no pair.
pub fn to_query_pairs(options: &GetOptions) -> Result<Vec<(&'static str, String)>, ClientError> {
    let mut pairs = Vec::new();

    if let Some(filters) = &options.filters {
        pairs.push((FILTERS_PARAM, encode_json(FILTERS_PARAM, filters)?));
    }
    if let Some(top) = options.top {
        pairs.push((TOP_PARAM, top.to_string()));
    }
    if let Some(skip) = options.skip {
        pairs.push((SKIP_PARAM, skip.to_string()));
    }
    if let Some(order_by) = &options.order_by {
        pairs.push((ORDER_BY_PARAM, encode_json(ORDER_BY_PARAM, order_by)?));
    }
    if let Some(select) = &options.select {
        pairs.push((SELECT_PARAM, encode_json(SELECT_PARAM, select)?));
    }

    Ok(pairs)
}

/// Leaves the url untouched when no option is set.
pub fn append_options(url: &mut Url, options: &GetOptions) -> Result<(), ClientError> {
    let pairs = to_query_pairs(options)?;
    if pairs.is_empty() {
        return Ok(());
    }

    url.query_pairs_mut().extend_pairs(pairs);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aciiverse_core::domain::query::value_objects::{
        CompareOperator, FilterSpec, OrderBy, OrderBySpec, Predicate,
    };
    use aciiverse_core::domain::query::QueryParamsExt;
    use serde_json::json;
    use std::collections::HashMap;

    fn decode(url: &Url) -> GetOptions {
        url.query_pairs()
            .into_owned()
            .collect::<HashMap<String, String>>()
            .parse_query_params()
    }

    fn base() -> Url {
        Url::parse("http://localhost:3000/api/games").unwrap()
    }

    #[test]
    fn test_empty_options_leave_url_untouched() {
        let mut url = base();
        append_options(&mut url, &GetOptions::default()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/games");
    }

    #[test]
    fn test_parameter_order() {
        let options = GetOptions {
            filters: Some(Predicate::new("id", CompareOperator::Equal, 1).into()),
            order_by: Some(OrderBy::asc("id").into()),
            top: Some(3),
            skip: Some(1),
            select: Some(vec!["id".to_string()]),
        };

        let names: Vec<&str> = to_query_pairs(&options)
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["$filters", "$top", "$skip", "$orderBy", "$select"]);
    }

    #[test]
    fn test_round_trip_through_codec() {
        let cases = vec![
            GetOptions {
                top: Some(15),
                skip: Some(5),
                ..Default::default()
            },
            GetOptions {
                top: Some(0),
                ..Default::default()
            },
            GetOptions {
                filters: Some(Predicate::new("release", CompareOperator::Equal, "2020").into()),
                select: Some(vec!["id".to_string(), "title".to_string()]),
                ..Default::default()
            },
            GetOptions {
                filters: Some(FilterSpec::any_of(vec![
                    Predicate::new("id", CompareOperator::In, json!([1, 2, 3])).into(),
                    FilterSpec::all_of(vec![
                        Predicate::new("release", CompareOperator::GreaterEqual, "2019").into(),
                        Predicate::new("developer", CompareOperator::NotEqual, "Valve").into(),
                    ]),
                ])),
                order_by: Some(OrderBySpec::Many(vec![
                    OrderBy::desc("release"),
                    OrderBy::asc("title"),
                ])),
                top: Some(2),
                skip: Some(1),
                select: Some(vec!["title".to_string()]),
            },
            GetOptions {
                filters: Some(
                    Predicate::new("title", CompareOperator::from("like".to_string()), "A & B")
                        .into(),
                ),
                order_by: Some(OrderBy::desc("id").into()),
                ..Default::default()
            },
        ];

        for options in cases {
            let mut url = base();
            append_options(&mut url, &options).unwrap();
            assert_eq!(decode(&url), options, "url: {url}");
        }
    }
}
