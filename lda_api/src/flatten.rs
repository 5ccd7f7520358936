//! Flattening of nested filing records into single-level rows.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::types::Filing;

/// A flattened record: dot-joined key paths mapped to scalar JSON values.
/// Array values are JSON-encoded into a single string so each filing stays
/// one row.
pub type FlatRow = BTreeMap<String, Value>;

/// The fixed column set of the simplified export, in output order.
pub const SIMPLE_FIELDS: [&str; 6] = [
    "filing_uuid",
    "period",
    "registrant_name",
    "client_name",
    "income",
    "expenses",
];

/// Flattens a nested record into dot-joined keys. Nested objects contribute
/// `parent.child` paths, arrays are stringified in place, scalar leaves are
/// copied as-is. Flattening an already-flat record is the identity.
pub fn flatten(record: &Filing) -> FlatRow {
    let mut row = FlatRow::new();
    if let Value::Object(map) = record {
        flatten_into(&mut row, "", map);
    }
    row
}

fn flatten_into(row: &mut FlatRow, prefix: &str, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Object(inner) => flatten_into(row, &path, inner),
            Value::Array(_) => {
                row.insert(path, Value::String(value.to_string()));
            }
            other => {
                row.insert(path, other.clone());
            }
        }
    }
}

/// Flattens every record in the slice.
pub fn flatten_all(records: &[Filing]) -> Vec<FlatRow> {
    records.iter().map(flatten).collect()
}

/// Projects a record onto the fixed simplified column set. Fields absent from
/// the record come out as null; the row is emitted regardless.
pub fn simplify(record: &Filing) -> FlatRow {
    let mut row = FlatRow::new();
    row.insert("filing_uuid".to_string(), field(record, "filing_uuid"));
    let period = match field(record, "filing_period_display") {
        Value::Null => field(record, "filing_period"),
        display => display,
    };
    row.insert("period".to_string(), period);
    row.insert(
        "registrant_name".to_string(),
        nested(record, "/registrant/name"),
    );
    row.insert("client_name".to_string(), nested(record, "/client/name"));
    row.insert("income".to_string(), field(record, "income"));
    row.insert("expenses".to_string(), field(record, "expenses"));
    row
}

/// Applies [`simplify`] to every record in the slice.
pub fn simplify_all(records: &[Filing]) -> Vec<FlatRow> {
    records.iter().map(simplify).collect()
}

fn field(record: &Filing, key: &str) -> Value {
    record.get(key).cloned().unwrap_or(Value::Null)
}

fn nested(record: &Filing, pointer: &str) -> Value {
    record.pointer(pointer).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_flatten_nested_keys_are_dot_joined() {
        let row = flatten(&json!({"a": {"b": 1}}));
        assert_eq!(row.get("a.b"), Some(&json!(1)));
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn test_flatten_deeply_nested() {
        let row = flatten(&json!({"a": {"b": {"c": "x"}}, "d": true}));
        assert_eq!(row.get("a.b.c"), Some(&json!("x")));
        assert_eq!(row.get("d"), Some(&json!(true)));
    }

    #[test]
    fn test_flatten_is_identity_on_flat_input() {
        let record = json!({"x": 1, "y": "two", "z": null});
        let row = flatten(&record);
        let expected: FlatRow = record
            .as_object()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        assert_eq!(row, expected);
    }

    #[test]
    fn test_flatten_stringifies_arrays_in_place() {
        let row = flatten(&json!({
            "lobbying_activities": [{"description": "tax"}, {"description": "trade"}]
        }));
        assert_eq!(
            row.get("lobbying_activities"),
            Some(&json!(r#"[{"description":"tax"},{"description":"trade"}]"#))
        );
    }

    #[test]
    fn test_flatten_non_object_yields_empty_row() {
        assert!(flatten(&json!([1, 2, 3])).is_empty());
        assert!(flatten(&json!("scalar")).is_empty());
    }

    #[test]
    fn test_flatten_all_preserves_order() {
        let rows = flatten_all(&[json!({"x": 1}), json!({"y": 2})]);
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains_key("x"));
        assert!(rows[1].contains_key("y"));
    }

    #[test]
    fn test_simplify_picks_nested_names() {
        let row = simplify(&json!({
            "filing_uuid": "abc-123",
            "filing_period": "first_quarter",
            "filing_period_display": "1st Quarter",
            "registrant": {"id": 7, "name": "Lobby LLC"},
            "client": {"id": 9, "name": "Acme Corp"},
            "income": "50000.00",
            "expenses": null
        }));
        assert_eq!(row.get("filing_uuid"), Some(&json!("abc-123")));
        assert_eq!(row.get("period"), Some(&json!("1st Quarter")));
        assert_eq!(row.get("registrant_name"), Some(&json!("Lobby LLC")));
        assert_eq!(row.get("client_name"), Some(&json!("Acme Corp")));
        assert_eq!(row.get("income"), Some(&json!("50000.00")));
        assert_eq!(row.get("expenses"), Some(&Value::Null));
    }

    #[test]
    fn test_simplify_falls_back_to_raw_period() {
        let row = simplify(&json!({"filing_period": "mid_year"}));
        assert_eq!(row.get("period"), Some(&json!("mid_year")));
    }

    #[test]
    fn test_simplify_always_emits_all_fields() {
        let row = simplify(&json!({"unrelated": 1}));
        assert_eq!(row.len(), SIMPLE_FIELDS.len());
        for key in SIMPLE_FIELDS {
            assert_eq!(row.get(key), Some(&Value::Null));
        }
    }
}
