//! Shared validation helpers for inbound HTTP adapters.
//!
//! Handlers collect the query string and the form body into one
//! [`RequestParams`] map and validate against that, so the checks do not
//! depend on how the client framed its parameters.

use std::collections::HashMap;

use crate::domain::{CafeId, Error};

/// Newtype wrapper for HTTP parameter names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Request parameters gathered from the query string and form body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams(HashMap<String, String>);

impl RequestParams {
    /// Merge query and form parameters. Form values win on key collisions.
    pub fn merge(query: HashMap<String, String>, form: Option<HashMap<String, String>>) -> Self {
        let mut params = query;
        params.extend(form.unwrap_or_default());
        Self(params)
    }

    /// Raw value for `key`, if supplied.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

pub(crate) fn missing_parameter_error(field: FieldName) -> Error {
    Error::missing_parameter(format!("missing required parameter: {}", field.as_str()))
}

pub(crate) fn invalid_flag_error(field: FieldName, value: &str) -> Error {
    Error::invalid_parameter(format!(
        "{} must be a boolean (true/false, 1/0, yes/no, on/off), got {value:?}",
        field.as_str()
    ))
}

/// Fetch every `required` parameter, in the order requested.
///
/// Fails with `MissingParameter` naming the first key that is absent or
/// blank after trimming. Values are returned untrimmed.
pub(crate) fn require_params<'a>(
    params: &'a RequestParams,
    required: &[FieldName],
) -> Result<Vec<&'a str>, Error> {
    required
        .iter()
        .map(|field| require_param(params, *field))
        .collect()
}

/// Fetch a single required parameter.
pub(crate) fn require_param<'a>(
    params: &'a RequestParams,
    field: FieldName,
) -> Result<&'a str, Error> {
    optional_param(params, field).ok_or_else(|| missing_parameter_error(field))
}

/// Fetch a parameter that may be omitted. Blank values count as omitted.
pub(crate) fn optional_param<'a>(params: &'a RequestParams, field: FieldName) -> Option<&'a str> {
    params
        .get(field.as_str())
        .filter(|value| !value.trim().is_empty())
}

/// Interpret a submitted boolean flag.
pub(crate) fn parse_flag(value: &str, field: FieldName) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid_flag_error(field, value)),
    }
}

/// Parse a cafe identifier taken from the request path.
///
/// Anything that is not an integer cannot name a stored cafe, so it is
/// reported as not found.
pub(crate) fn parse_cafe_id(raw: &str) -> Result<CafeId, Error> {
    raw.trim()
        .parse::<i32>()
        .map(CafeId::new)
        .map_err(|_| Error::not_found("The id was not found"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    const NAME: FieldName = FieldName::new("name");
    const MAP_URL: FieldName = FieldName::new("map_url");
    const SEATS: FieldName = FieldName::new("seats");

    #[rstest]
    fn require_params_returns_values_in_requested_order() {
        let params: RequestParams = [("seats", "20-30"), ("name", "Prufrock")]
            .into_iter()
            .collect();

        let values = require_params(&params, &[NAME, SEATS]).expect("all present");

        assert_eq!(values, vec!["Prufrock", "20-30"]);
    }

    #[rstest]
    #[case::absent(&[("seats", "20")][..])]
    #[case::blank(&[("name", "  "), ("seats", "20")][..])]
    fn require_params_names_first_missing_key(#[case] pairs: &[(&str, &str)]) {
        let params: RequestParams = pairs.iter().copied().collect();

        let err = require_params(&params, &[NAME, MAP_URL, SEATS]).expect_err("name missing");

        assert_eq!(err.code(), ErrorCode::MissingParameter);
        assert!(err.message().ends_with(": name"), "{}", err.message());
    }

    #[rstest]
    fn form_values_override_query_values() {
        let query = HashMap::from([
            ("name".to_owned(), "from-query".to_owned()),
            ("seats".to_owned(), "5".to_owned()),
        ]);
        let form = HashMap::from([("name".to_owned(), "from-form".to_owned())]);

        let params = RequestParams::merge(query, Some(form));

        assert_eq!(params.get("name"), Some("from-form"));
        assert_eq!(params.get("seats"), Some("5"));
    }

    #[rstest]
    fn optional_param_treats_blank_as_absent() {
        let params: RequestParams = [("coffee_price", " ")].into_iter().collect();

        assert_eq!(optional_param(&params, FieldName::new("coffee_price")), None);
    }

    #[rstest]
    #[case("true", true)]
    #[case("TRUE", true)]
    #[case("1", true)]
    #[case("Yes", true)]
    #[case("on", true)]
    #[case("false", false)]
    #[case("0", false)]
    #[case("no", false)]
    #[case(" Off ", false)]
    fn parse_flag_accepts_common_spellings(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(parse_flag(raw, FieldName::new("has_wifi")), Ok(expected));
    }

    #[rstest]
    #[case("maybe")]
    #[case("")]
    #[case("2")]
    fn parse_flag_rejects_other_values(#[case] raw: &str) {
        let err = parse_flag(raw, FieldName::new("has_wifi")).expect_err("invalid flag");

        assert_eq!(err.code(), ErrorCode::InvalidParameter);
        assert!(err.message().starts_with("has_wifi"));
    }

    #[rstest]
    #[case("42", Some(42))]
    #[case("abc", None)]
    #[case("9999999999", None)]
    fn parse_cafe_id_requires_integer(#[case] raw: &str, #[case] expected: Option<i32>) {
        let parsed = parse_cafe_id(raw);

        match expected {
            Some(id) => assert_eq!(parsed, Ok(CafeId::new(id))),
            None => assert_eq!(
                parsed.map_err(|err| err.code()),
                Err(ErrorCode::NotFound)
            ),
        }
    }
}
