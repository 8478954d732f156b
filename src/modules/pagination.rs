//! Optional pagination query parameters.

use std::collections::HashMap;

use bookgate_http::GatewayError;

pub const DEFAULT_LIMIT: &str = "10";
pub const DEFAULT_PAGE: &str = "1";

/// Extract an optional query parameter and parse it as an integer, using
/// the string default when the parameter is absent.
///
/// A present but unparsable value rejects the request; callers must
/// short-circuit without contacting the backend. No upper bound is applied
/// here: pagination limits are backend policy, not a gateway concern.
pub fn parse_query_param(
    params: &HashMap<String, String>,
    name: &str,
    default: &str,
) -> Result<i32, GatewayError> {
    let raw = params.get(name).map(String::as_str).unwrap_or(default);

    raw.parse::<i32>().map_err(|err| {
        GatewayError::validation(
            format!("query parameter '{name}' must be an integer"),
            err.to_string(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn absent_parameter_uses_default() {
        let params = HashMap::new();
        assert_eq!(parse_query_param(&params, "limit", DEFAULT_LIMIT).unwrap(), 10);
        assert_eq!(parse_query_param(&params, "page", DEFAULT_PAGE).unwrap(), 1);
    }

    #[test]
    fn present_parameter_overrides_default() {
        let params = HashMap::from([("limit".to_string(), "25".to_string())]);
        assert_eq!(parse_query_param(&params, "limit", DEFAULT_LIMIT).unwrap(), 25);
    }

    #[test]
    fn unparsable_parameter_is_rejected() {
        let params = HashMap::from([("page".to_string(), "two".to_string())]);
        let err = parse_query_param(&params, "page", DEFAULT_PAGE).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn no_upper_bound_is_applied() {
        let params = HashMap::from([("limit".to_string(), "100000".to_string())]);
        assert_eq!(
            parse_query_param(&params, "limit", DEFAULT_LIMIT).unwrap(),
            100000
        );
    }
}
