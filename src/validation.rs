use crate::constants::{ARG_MAX_RESULTS, ARG_QUERY, DEFAULT_MAX_RESULTS, TOOL_SEARCH};
use crate::error::AppError;
use crate::types::CallArguments;
use serde_json::{Map, Number, Value};

/// Turns the untyped `tools/call` payload into [`CallArguments`].
///
/// Checks run in a fixed order so a given bad call always yields the same
/// error: tool name, presence of arguments, argument shape, `query`, then
/// `maxResults`.
pub fn validate_call(name: &str, arguments: &Value) -> Result<CallArguments, AppError> {
    if name != TOOL_SEARCH {
        return Err(AppError::UnsupportedTool(name.to_string()));
    }

    if !is_truthy(arguments) {
        return Err(AppError::MissingArguments);
    }

    let Value::Object(map) = arguments else {
        return Err(AppError::InvalidArgumentsType);
    };

    let query = match map.get(ARG_QUERY) {
        Some(Value::String(query)) if !query.is_empty() => query.clone(),
        _ => return Err(AppError::MissingQuery),
    };

    let max_results = parse_max_results(map.get(ARG_MAX_RESULTS))?;

    Ok(CallArguments { query, max_results })
}

/// Prompt arguments arrive as strings; a numeric `maxResults` string is
/// turned back into a number so the tool rules apply unchanged.
#[must_use]
pub fn prompt_arguments(arguments: Option<Map<String, Value>>) -> Value {
    let Some(mut map) = arguments else {
        return Value::Null;
    };

    let parsed = match map.get(ARG_MAX_RESULTS) {
        Some(Value::String(text)) => serde_json::from_str::<Number>(text.trim()).ok(),
        _ => None,
    };
    if let Some(number) = parsed {
        map.insert(ARG_MAX_RESULTS.to_string(), Value::Number(number));
    }

    Value::Object(map)
}

/// Absent or `null` means the default. Integral floats such as `3.0` are
/// accepted since the schema declares a JSON number.
pub fn parse_max_results(value: Option<&Value>) -> Result<u64, AppError> {
    let Some(value) = value else {
        return Ok(DEFAULT_MAX_RESULTS);
    };

    match value {
        Value::Null => Ok(DEFAULT_MAX_RESULTS),
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                return if n >= 1 {
                    Ok(n)
                } else {
                    Err(AppError::InvalidMaxResults)
                };
            }
            match number.as_f64() {
                Some(f) if f >= 1.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
                _ => Err(AppError::InvalidMaxResults),
            }
        }
        _ => Err(AppError::InvalidMaxResults),
    }
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays or
/// objects are falsy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_follows_json_falsy_values() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!(" ")));
        assert!(is_truthy(&json!([0])));
        assert!(is_truthy(&json!({"a": null})));
    }

    #[test]
    fn max_results_accepts_integral_numbers_only() {
        assert_eq!(parse_max_results(None).ok(), Some(1));
        assert_eq!(parse_max_results(Some(&json!(null))).ok(), Some(1));
        assert_eq!(parse_max_results(Some(&json!(7))).ok(), Some(7));
        assert_eq!(parse_max_results(Some(&json!(3.0))).ok(), Some(3));

        for bad in [json!(0), json!(-2), json!(2.5), json!("3"), json!(true)] {
            assert!(matches!(
                parse_max_results(Some(&bad)),
                Err(AppError::InvalidMaxResults)
            ));
        }
    }

    #[test]
    fn prompt_arguments_parse_numeric_max_results() {
        let mut map = Map::new();
        map.insert("query".to_string(), json!("rust"));
        map.insert("maxResults".to_string(), json!(" 3 "));
        let args = validate_call(TOOL_SEARCH, &prompt_arguments(Some(map))).expect("valid");
        assert_eq!(args.max_results, 3);

        let mut map = Map::new();
        map.insert("query".to_string(), json!("rust"));
        map.insert("maxResults".to_string(), json!("many"));
        assert!(matches!(
            validate_call(TOOL_SEARCH, &prompt_arguments(Some(map))),
            Err(AppError::InvalidMaxResults)
        ));

        assert_eq!(prompt_arguments(None), Value::Null);
    }

    #[test]
    fn unsupported_tool_is_checked_before_arguments() {
        let err = validate_call("fetch", &Value::Null).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedTool(ref name) if name == "fetch"));
    }
}
