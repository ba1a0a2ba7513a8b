//! Decoding of raw query-string values into [`GetQueryParams`].
//!
//! Parameters that cannot be decoded are dropped: a bad `$filters` means "no
//! filter", never a failed request.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::value_objects::GetQueryParams;

pub const FILTERS_PARAM: &str = "$filters";
pub const ORDER_BY_PARAM: &str = "$orderBy";
pub const SELECT_PARAM: &str = "$select";
pub const TOP_PARAM: &str = "$top";
pub const SKIP_PARAM: &str = "$skip";

/// Which parameter groups are read from the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryParamsOptions {
    pub filters: bool,
    pub order_by: bool,
    pub top_skip: bool,
    pub select: bool,
}

impl QueryParamsOptions {
    pub fn all() -> Self {
        Self {
            filters: true,
            order_by: true,
            top_skip: true,
            select: true,
        }
    }
}

impl GetQueryParams {
    /// Parse from query string map, reading every recognized parameter.
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        Self::from_query_map_with(query_map, QueryParamsOptions::all())
    }

    pub fn from_query_map_with(
        query_map: &HashMap<String, String>,
        options: QueryParamsOptions,
    ) -> Self {
        let mut params = GetQueryParams::new();

        if options.filters {
            params.filters = parse_json_param(query_map, FILTERS_PARAM);
        }

        if options.order_by {
            params.order_by = parse_json_param(query_map, ORDER_BY_PARAM);
        }

        if options.select {
            params.select = parse_json_param(query_map, SELECT_PARAM);
        }

        if options.top_skip {
            params.top = parse_count_param(query_map, TOP_PARAM);
            params.skip = parse_count_param(query_map, SKIP_PARAM);
        }

        params
    }
}

fn parse_json_param<T: DeserializeOwned>(
    query_map: &HashMap<String, String>,
    name: &str,
) -> Option<T> {
    let raw = query_map.get(name)?;

    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(param = name, "Ignoring malformed query parameter: {}", e);
            None
        }
    }
}

fn parse_count_param(query_map: &HashMap<String, String>, name: &str) -> Option<usize> {
    let raw = query_map.get(name)?;

    match raw.trim().parse::<usize>() {
        Ok(count) => Some(count),
        Err(e) => {
            debug!(param = name, value = %raw, "Ignoring non-numeric query parameter: {}", e);
            None
        }
    }
}

/// Helper trait for decoding a raw query map
pub trait QueryParamsExt {
    fn parse_query_params(&self) -> GetQueryParams;
}

impl QueryParamsExt for HashMap<String, String> {
    fn parse_query_params(&self) -> GetQueryParams {
        GetQueryParams::from_query_map(self)
    }
}
