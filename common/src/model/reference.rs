use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A row of a read-only reference list (`referral-types`, `referral-status`).
/// Ids arrive as numbers from some deployments and strings from others, so
/// the raw value is kept and stringified on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: Value,
    pub name: String,
}

impl ReferenceItem {
    pub fn id_string(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_string_handles_numeric_and_string_ids() {
        let numeric: ReferenceItem =
            serde_json::from_str(r#"{"id": 3, "name": "Specialist"}"#).unwrap();
        let string: ReferenceItem =
            serde_json::from_str(r#"{"id": "urgent", "name": "Urgent"}"#).unwrap();
        assert_eq!(numeric.id_string(), "3");
        assert_eq!(string.id_string(), "urgent");
    }
}
