use serde_json::{Map, Value};

use crate::error::BridgeError;
use crate::options::OptionsOverlay;

/// Parses the per-invocation query attached to a transform request.
///
/// Two forms are accepted, mirroring the loader convention:
/// - a JSON object body: `?{"ignoreCache": true}`
/// - `&`-separated pairs: `?configFile=./rc&ignoreCache=true&files=a,b`
///
/// For the pair form, `true`/`false` coerce to booleans, the `files` key
/// splits on commas, and a bare key (no `=`) means `true`.
pub fn parse_query(query: &str) -> Result<OptionsOverlay, BridgeError> {
    let query = query.strip_prefix('?').unwrap_or(query);

    if query.is_empty() {
        return Ok(OptionsOverlay::default());
    }

    let value = if query.starts_with('{') {
        serde_json::from_str::<Value>(query).map_err(|err| BridgeError::Query {
            reason: format!("invalid JSON query: {err}"),
        })?
    } else {
        Value::Object(parse_pairs(query)?)
    };

    serde_json::from_value(value).map_err(|err| BridgeError::Query {
        reason: err.to_string(),
    })
}

fn parse_pairs(query: &str) -> Result<Map<String, Value>, BridgeError> {
    let mut map = Map::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, coerce(key, value)),
            None => (pair, Value::Bool(true)),
        };
        if key.is_empty() {
            return Err(BridgeError::Query {
                reason: format!("empty key in query pair `{pair}`"),
            });
        }
        map.insert(key.to_string(), value);
    }
    Ok(map)
}

fn coerce(key: &str, value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ if key == "files" => Value::Array(
            value
                .split(',')
                .filter(|glob| !glob.is_empty())
                .map(|glob| Value::String(glob.to_string()))
                .collect(),
        ),
        _ => Value::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_query() {
        assert_eq!(parse_query("").unwrap(), OptionsOverlay::default());
        assert_eq!(parse_query("?").unwrap(), OptionsOverlay::default());
    }

    #[test]
    fn test_pair_form() {
        let overlay = parse_query("?configFile=./rc.json&ignoreCache=true&files=a.scss,b.scss")
            .unwrap();
        assert_eq!(overlay.config_file, Some(PathBuf::from("./rc.json")));
        assert_eq!(overlay.ignore_cache, Some(true));
        assert_eq!(
            overlay.files,
            Some(vec!["a.scss".to_string(), "b.scss".to_string()])
        );
    }

    #[test]
    fn test_bare_key_is_true() {
        let overlay = parse_query("displayOutput").unwrap();
        assert_eq!(overlay.display_output, Some(true));
    }

    #[test]
    fn test_json_form() {
        let overlay = parse_query(r#"?{"webpackErrors": false, "files": ["c.css"]}"#).unwrap();
        assert_eq!(overlay.webpack_errors, Some(false));
        assert_eq!(overlay.files, Some(vec!["c.css".to_string()]));
    }

    #[test]
    fn test_unknown_key_fails() {
        let err = parse_query("?noSuchOption=1").unwrap_err();
        assert!(matches!(err, BridgeError::Query { .. }));
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(parse_query("?{not json").is_err());
    }
}
