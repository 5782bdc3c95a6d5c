//! Google Visualization response decoding.
//!
//! The endpoint answers with a script that invokes the requested callback:
//!
//! ```text
//! /*O_o*/
//! gvizCallback_1700000000000({"version":"0.6","table":{"cols":[...],"rows":[...]}});
//! ```
//!
//! [`unwrap_callback`] checks that the registered callback is invoked exactly
//! once and returns its JSON argument; [`decode_table`] turns that argument
//! into a [`Table`].

use crate::domain::table::{FetchError, Table};
use serde::Deserialize;
use serde::de::IgnoredAny;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    cols: Option<Vec<Option<GvizColumn>>>,
    rows: Option<Vec<Option<GvizRow>>>,
}

#[derive(Debug, Deserialize)]
struct GvizColumn {
    #[serde(default)]
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    c: Option<Vec<Option<GvizCell>>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Value,
}

/// Extracts the JSON argument of the `callback(...)` invocation in `body`.
///
/// Leading `/* ... */` comments are skipped, the callback must be the first
/// token after them, and only `)` and an optional `;` may follow the
/// argument. A body that already is a JSON object is returned unchanged.
///
/// # Errors
///
/// [`FetchError::Format`] if the callback is not invoked first, is invoked
/// more than once, or the invocation is not closed.
pub fn unwrap_callback<'a>(body: &'a str, callback: &str) -> Result<&'a str, FetchError> {
    let script = skip_comments(body);
    if script.starts_with('{') {
        return Ok(script.trim_end());
    }

    let Some(args) = script
        .strip_prefix(callback)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
    else {
        return Err(FetchError::Format(format!(
            "response does not invoke callback {callback}"
        )));
    };

    let args = args.trim_start();
    if !args.starts_with('{') {
        return Err(FetchError::Format("callback argument is not an object".to_string()));
    }

    let mut values = serde_json::Deserializer::from_str(args).into_iter::<IgnoredAny>();
    match values.next() {
        Some(Ok(_)) => {}
        _ => {
            return Err(FetchError::Format(
                "callback invocation is not closed".to_string(),
            ));
        }
    }
    let (argument, tail) = args.split_at(values.byte_offset());

    let tail = tail.trim_start();
    let Some(after) = tail.strip_prefix(')') else {
        return Err(FetchError::Format(
            "callback invocation is not closed".to_string(),
        ));
    };
    let after = after.trim_start();
    let after = after.strip_prefix(';').unwrap_or(after).trim();
    if after.contains(callback) {
        return Err(FetchError::Format(format!(
            "response invokes callback {callback} more than once"
        )));
    }
    if !after.is_empty() {
        return Err(FetchError::Format(
            "unexpected content after callback invocation".to_string(),
        ));
    }

    Ok(argument)
}

fn skip_comments(body: &str) -> &str {
    let mut rest = body.trim_start();
    while let Some(comment) = rest.strip_prefix("/*") {
        match comment.find("*/") {
            Some(end) => rest = comment[end + 2..].trim_start(),
            None => break,
        }
    }
    rest
}

/// Decodes a Visualization JSON payload into a [`Table`].
///
/// Rows that are null or have no cell list are skipped. Cell values become
/// text: strings unchanged, integral numbers without a fraction, booleans as
/// `true`/`false`, null or missing cells as `""`.
///
/// # Errors
///
/// [`FetchError::Format`] if the JSON is malformed or lacks `table`, `cols`
/// or `rows`.
pub fn decode_table(json: &str) -> Result<Table, FetchError> {
    let response: GvizResponse =
        serde_json::from_str(json).map_err(|e| FetchError::Format(e.to_string()))?;

    let table = response
        .table
        .ok_or_else(|| FetchError::Format("payload has no table".to_string()))?;
    let rows = table
        .rows
        .ok_or_else(|| FetchError::Format("table has no rows".to_string()))?;
    let cols = table
        .cols
        .ok_or_else(|| FetchError::Format("table has no columns".to_string()))?;

    let columns = cols
        .into_iter()
        .map(|col| col.and_then(|c| c.label).unwrap_or_default())
        .collect();

    let rows = rows
        .into_iter()
        .filter_map(|row| row.and_then(|r| r.c))
        .map(|cells| {
            cells
                .into_iter()
                .map(|cell| cell.map(|c| cell_text(&c.v)).unwrap_or_default())
                .collect()
        })
        .collect();

    Ok(Table { columns, rows })
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "version": "0.6",
        "status": "ok",
        "table": {
            "cols": [
                {"id": "A", "label": "WEBSITE", "type": "string"},
                {"id": "B", "label": "DA", "type": "number"},
                {"id": "C", "label": "PayPal", "type": "number"},
                {"id": "D", "type": "string"},
                null
            ],
            "rows": [
                {"c": [{"v": "alpha.com"}, {"v": 45.0, "f": "45"}, {"v": 19.5}, {"v": true}, null]},
                null,
                {"c": null},
                {"c": [{"v": "beta.org"}, {"v": null}, null]}
            ]
        }
    }"#;

    #[test]
    fn test_decode_table() {
        let table = decode_table(PAYLOAD).unwrap();

        assert_eq!(table.columns, vec!["WEBSITE", "DA", "PayPal", "", ""]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["alpha.com", "45", "19.5", "true", ""]);
        assert_eq!(table.rows[1], vec!["beta.org", "", ""]);
    }

    #[test]
    fn test_missing_rows_is_format_error() {
        let result = decode_table(r#"{"table": {"cols": []}}"#);
        assert!(matches!(result, Err(FetchError::Format(_))));
    }

    #[test]
    fn test_missing_table_is_format_error() {
        let result = decode_table(r#"{"status": "error"}"#);
        assert!(matches!(result, Err(FetchError::Format(_))));
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        assert!(matches!(decode_table("not json"), Err(FetchError::Format(_))));
    }

    #[test]
    fn test_unwrap_callback() {
        let body = "/*O_o*/\ngvizCallback_1({\"table\":null});";
        assert_eq!(unwrap_callback(body, "gvizCallback_1").unwrap(), "{\"table\":null}");
    }

    #[test]
    fn test_unwrap_callback_accepts_plain_json() {
        assert_eq!(unwrap_callback("  {\"a\":1} ", "cb").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_unwrap_callback_rejects_other_callback() {
        let body = "google.visualization.Query.setResponse({});";
        assert!(matches!(
            unwrap_callback(body, "gvizCallback_1"),
            Err(FetchError::Format(_))
        ));
    }

    #[test]
    fn test_unwrap_callback_rejects_double_invocation() {
        let body = "cb({});cb({});";
        assert!(matches!(unwrap_callback(body, "cb"), Err(FetchError::Format(_))));
    }

    #[test]
    fn test_unwrap_callback_requires_exact_identifier() {
        let body = "/*O_o*/\nxgvizCallback_1({\"table\":null});";
        assert!(matches!(
            unwrap_callback(body, "gvizCallback_1"),
            Err(FetchError::Format(_))
        ));
    }

    #[test]
    fn test_unwrap_callback_ignores_callback_name_inside_cells() {
        let body = r#"cb({"table":{"rows":[{"c":[{"v":"see cb(1)"}]}]}});"#;
        assert_eq!(
            unwrap_callback(body, "cb").unwrap(),
            r#"{"table":{"rows":[{"c":[{"v":"see cb(1)"}]}]}}"#
        );
    }

    #[test]
    fn test_unwrap_callback_rejects_unclosed_invocation() {
        assert!(matches!(unwrap_callback("cb({", "cb"), Err(FetchError::Format(_))));
    }
}
