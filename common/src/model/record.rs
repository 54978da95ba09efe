use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque entity row as returned by the API.
///
/// The console does not model per-entity structs; rows are passed through as
/// JSON objects and rendered/edited via the field names declared in the
/// entity descriptors. Scalars (string, number, bool) and `null` are the only
/// value shapes the UI interprets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value of the first present, non-null key in `keys`, rendered as a
    /// string. Used for identity lookup where the key name varies between
    /// legacy (`id`) and domain (`pkpatientid`, ...) naming.
    pub fn first_string(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.is_null())
            .map(display_value)
    }

    /// Display form of a field for table cells: scalars printed plainly,
    /// null/missing as an empty string.
    pub fn display(&self, key: &str) -> String {
        self.get(key).map(display_value).unwrap_or_default()
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn first_string_prefers_leading_keys() {
        let rec = record(json!({"pkclientid": 7, "id": 99}));
        assert_eq!(
            rec.first_string(&["pkclientid", "id"]),
            Some("7".to_string())
        );
    }

    #[test]
    fn first_string_falls_back_past_null() {
        let rec = record(json!({"pkclientid": null, "id": 99}));
        assert_eq!(rec.first_string(&["pkclientid", "id"]), Some("99".to_string()));
        assert_eq!(rec.first_string(&["pkproviderid"]), None);
    }

    #[test]
    fn display_renders_scalars() {
        let rec = record(json!({
            "name": "Mercy Clinic",
            "active": true,
            "beds": 120,
            "fax": null
        }));
        assert_eq!(rec.display("name"), "Mercy Clinic");
        assert_eq!(rec.display("active"), "Yes");
        assert_eq!(rec.display("beds"), "120");
        assert_eq!(rec.display("fax"), "");
        assert_eq!(rec.display("missing"), "");
    }
}
